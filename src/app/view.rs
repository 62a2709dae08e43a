// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The demo screen sits at the bottom of a stack; the notice overlay layers
//! are pushed on top of it.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::notifications::Manager;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::overlay::OverlaySurface;
use crate::ui::styles::button as button_style;
use iced::widget::{button, text, text_input, Column, Container, Row, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub notices: &'a Manager<OverlaySurface>,
    pub record_name: &'a str,
    pub diagnostic_count: usize,
}

/// Renders the demo screen with the notice overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let surface = ctx.notices.surface();
    let layers = surface
        .layers(ctx.notices.labels())
        .into_iter()
        .map(|layer| layer.map(Message::Notice));

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(view_demo(&ctx))
        .extend(layers)
        .into()
}

fn view_demo<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let heading = text(i18n.tr("demo-heading")).size(typography::TITLE_MD);

    let name_input = text_input(&i18n.tr("demo-record-name"), ctx.record_name)
        .on_input(Message::RecordNameChanged)
        .on_submit(Message::SaveRecord)
        .padding(spacing::XS)
        .width(Length::Fixed(sizing::MODAL_WIDTH));

    let record_actions = Row::new()
        .spacing(spacing::SM)
        .push(demo_button(i18n.tr("demo-save-record"), Message::SaveRecord))
        .push(demo_button(i18n.tr("demo-delete-record"), Message::DeleteRecord));

    let notice_actions = Row::new()
        .spacing(spacing::SM)
        .push(demo_button(i18n.tr("demo-show-warning"), Message::ShowWarning))
        .push(demo_button(i18n.tr("demo-show-error"), Message::ShowError))
        .push(demo_button(i18n.tr("demo-show-info-modal"), Message::ShowInfoModal));

    let more_actions = Row::new()
        .spacing(spacing::SM)
        .push(demo_button(i18n.tr("demo-sticky-toast"), Message::ShowStickyToast))
        .push(demo_button(
            i18n.tr("demo-unknown-severity"),
            Message::ShowUnknownSeverity,
        ));

    let languages = i18n.available_locales.iter().fold(
        Row::new()
            .spacing(spacing::XS)
            .push(text(i18n.tr("demo-language")).size(typography::BODY)),
        |row, locale| {
            row.push(
                button(text(locale.to_string()).size(typography::CAPTION))
                    .on_press(Message::LanguageSelected(locale.clone()))
                    .style(button_style::secondary),
            )
        },
    );

    let count = ctx.diagnostic_count.to_string();
    let diagnostics = Row::new()
        .spacing(spacing::SM)
        .align_y(iced::alignment::Vertical::Center)
        .push(
            text(i18n.tr_with_args("demo-diagnostics-count", &[("count", count.as_str())]))
                .size(typography::CAPTION),
        )
        .push(demo_button(
            i18n.tr("demo-export-diagnostics"),
            Message::ExportDiagnostics,
        ));

    let content = Column::new()
        .spacing(spacing::MD)
        .push(heading)
        .push(name_input)
        .push(record_actions)
        .push(notice_actions)
        .push(more_actions)
        .push(languages)
        .push(diagnostics);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .into()
}

fn demo_button<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(text(label).size(typography::BODY))
        .on_press(message)
        .padding([spacing::XS, spacing::MD])
        .style(button_style::secondary)
        .into()
}
