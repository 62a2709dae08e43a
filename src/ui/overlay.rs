// SPDX-License-Identifier: MPL-2.0
//! Retained notice overlay rendered with iced.
//!
//! [`OverlaySurface`] stores the nodes the [`Manager`] creates and toggles,
//! and turns them into three layers: the toast stack in the bottom-right
//! corner, the informational modal and the confirmation modal. The layers
//! emit [`Message`]s that the application routes back to the manager.
//!
//! [`Manager`]: crate::notifications::Manager

use crate::notifications::{
    Container as Slot, Dialog, Labels, Message, Node, NoticeContent, Surface, ToastId,
};
use crate::ui::design_tokens::{palette::WHITE, sizing, spacing, typography};
use crate::ui::styles::{button as button_style, overlay as overlay_style};
use iced::widget::{button, center, mouse_area, opaque, text, tooltip, Column, Container, Row};
use iced::{alignment, Element, Length, Theme};

#[derive(Debug, Clone)]
struct ToastNode {
    id: ToastId,
    content: NoticeContent,
    shown: bool,
}

#[derive(Debug, Clone, Default)]
struct DialogNode {
    content: Option<NoticeContent>,
    displayed: bool,
    shown: bool,
}

/// Notice nodes as drawn by iced.
#[derive(Debug, Clone, Default)]
pub struct OverlaySurface {
    mounted: Vec<Slot>,
    toasts: Vec<ToastNode>,
    modal: DialogNode,
    confirm: DialogNode,
}

impl OverlaySurface {
    fn dialog(&self, dialog: Dialog) -> &DialogNode {
        match dialog {
            Dialog::Modal => &self.modal,
            Dialog::Confirm => &self.confirm,
        }
    }

    fn dialog_mut(&mut self, dialog: Dialog) -> &mut DialogNode {
        match dialog {
            Dialog::Modal => &mut self.modal,
            Dialog::Confirm => &mut self.confirm,
        }
    }

    /// Number of toast nodes in the stack.
    #[must_use]
    pub fn toast_len(&self) -> usize {
        self.toasts.len()
    }

    /// Toast messages from top to bottom.
    pub fn toast_messages(&self) -> impl Iterator<Item = &str> {
        self.toasts.iter().map(|node| node.content.message.as_str())
    }

    /// Whether a node takes part in layout.
    #[must_use]
    pub fn is_displayed(&self, node: Node) -> bool {
        match node {
            Node::Toast(id) => self.toasts.iter().any(|t| t.id == id),
            Node::Dialog(dialog) => self.dialog(dialog).displayed,
        }
    }

    /// Whether a node is in its fully visible state.
    #[must_use]
    pub fn is_shown(&self, node: Node) -> bool {
        match node {
            Node::Toast(id) => self.toasts.iter().any(|t| t.id == id && t.shown),
            Node::Dialog(dialog) => self.dialog(dialog).shown,
        }
    }

    /// Last content written into a dialog.
    #[must_use]
    pub fn dialog_content(&self, dialog: Dialog) -> Option<&NoticeContent> {
        self.dialog(dialog).content.as_ref()
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// All overlay layers in stacking order, bottom first.
    ///
    /// Dialogs that are not displayed produce no layer, so they neither
    /// render nor intercept input.
    pub fn layers<'a>(&'a self, labels: &'a Labels) -> Vec<Element<'a, Message>> {
        let mut layers = Vec::with_capacity(3);
        if self.mounted.contains(&Slot::ToastStack) && !self.toasts.is_empty() {
            layers.push(self.view_toasts(labels));
        }
        for dialog in [Dialog::Modal, Dialog::Confirm] {
            if let Some(layer) = self.view_dialog(dialog, labels) {
                layers.push(layer);
            }
        }
        layers
    }

    /// Toast stack anchored to the bottom-right corner.
    pub fn view_toasts<'a>(&'a self, labels: &'a Labels) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = self
            .toasts
            .iter()
            .map(|node| view_toast(node, labels))
            .collect();

        let column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(column)
            .padding(spacing::MD)
            .align_right(Length::Fill)
            .align_bottom(Length::Fill)
            .into()
    }

    /// Dialog layer with its backdrop, or `None` while it is not displayed.
    pub fn view_dialog<'a>(
        &'a self,
        dialog: Dialog,
        labels: &'a Labels,
    ) -> Option<Element<'a, Message>> {
        let node = self.dialog(dialog);
        if !node.displayed || !self.mounted.contains(&dialog.container()) {
            return None;
        }
        let content = node.content.as_ref()?;
        let shown = node.shown;

        let card = view_card(dialog, content, labels, shown);
        let backdrop = center(opaque(card)).style(overlay_style::backdrop(shown));

        Some(opaque(mouse_area(backdrop).on_press(Message::Backdrop(dialog))))
    }
}

impl Surface for OverlaySurface {
    fn is_mounted(&self, container: Slot) -> bool {
        self.mounted.contains(&container)
    }

    fn mount(&mut self, container: Slot) {
        if !self.mounted.contains(&container) {
            self.mounted.push(container);
        }
    }

    fn insert_toast(&mut self, id: ToastId, content: &NoticeContent) {
        self.toasts.push(ToastNode {
            id,
            content: content.clone(),
            shown: false,
        });
    }

    fn remove_toast(&mut self, id: ToastId) {
        self.toasts.retain(|node| node.id != id);
    }

    fn fill_dialog(&mut self, dialog: Dialog, content: &NoticeContent) {
        self.dialog_mut(dialog).content = Some(content.clone());
    }

    fn set_displayed(&mut self, node: Node, displayed: bool) {
        // Toasts are displayed from insertion to removal.
        if let Node::Dialog(dialog) = node {
            let dialog = self.dialog_mut(dialog);
            dialog.displayed = displayed;
            if !displayed {
                dialog.shown = false;
            }
        }
    }

    fn set_shown(&mut self, node: Node, shown: bool) {
        match node {
            Node::Toast(id) => {
                if let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) {
                    toast.shown = shown;
                }
            }
            Node::Dialog(dialog) => self.dialog_mut(dialog).shown = shown,
        }
    }
}

fn view_toast<'a>(node: &'a ToastNode, labels: &'a Labels) -> Element<'a, Message> {
    let presentation = node.content.severity.presentation();
    let shown = node.shown;

    let icon = text(presentation.glyph.to_string())
        .size(sizing::ICON_MD)
        .color(overlay_style::faded(presentation.accent, shown));

    let message = Container::new(text(node.content.message.as_str()).size(typography::BODY))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Left);

    let dismiss = button(text("×").size(typography::TITLE_SM))
        .on_press(Message::DismissToast(node.id))
        .padding(spacing::XXS)
        .style(|theme: &Theme, status| {
            button_style::dismiss(theme.palette().text)(theme, status)
        });

    let dismiss = tooltip(
        dismiss,
        text(labels.close.as_str()).size(typography::CAPTION),
        tooltip::Position::Left,
    );

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(icon).padding(spacing::XXS))
        .push(message)
        .push(dismiss);

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(overlay_style::toast_card(presentation.accent, shown))
        .into()
}

fn view_card<'a>(
    dialog: Dialog,
    content: &'a NoticeContent,
    labels: &'a Labels,
    shown: bool,
) -> Element<'a, Message> {
    let presentation = content.severity.presentation();
    let close_message = match dialog {
        Dialog::Modal => Message::CloseModal,
        Dialog::Confirm => Message::CancelConfirm,
    };

    let title = content.title.as_deref().unwrap_or_default();
    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(text(presentation.glyph.to_string()).size(sizing::ICON_MD))
        .push(
            Container::new(text(title).size(typography::TITLE_MD))
                .width(Length::Fill),
        )
        .push(
            button(text("×").size(typography::TITLE_MD))
                .on_press(close_message)
                .padding(spacing::XXS)
                .style(button_style::dismiss(overlay_style::faded(WHITE, shown))),
        );

    let header = Container::new(header)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(overlay_style::dialog_header(presentation, shown));

    let body = Container::new(text(content.message.as_str()).size(typography::BODY))
        .width(Length::Fill)
        .padding(spacing::LG);

    let footer = match dialog {
        Dialog::Modal => Row::new().push(
            button(text(labels.ok.as_str()))
                .on_press(Message::CloseModal)
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .style(button_style::accent(presentation.accent)),
        ),
        Dialog::Confirm => Row::new()
            .spacing(spacing::SM)
            .push(
                button(text(labels.cancel.as_str()))
                    .on_press(Message::CancelConfirm)
                    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                    .style(button_style::secondary),
            )
            .push(
                button(text(labels.confirm.as_str()))
                    .on_press(Message::Confirm)
                    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                    .style(button_style::accent(presentation.accent)),
            ),
    };

    let footer = Container::new(footer)
        .width(Length::Fill)
        .padding([spacing::SM, spacing::LG])
        .align_x(alignment::Horizontal::Right);

    Container::new(Column::new().push(header).push(body).push(footer))
        .width(Length::Fixed(sizing::MODAL_WIDTH))
        .style(overlay_style::dialog_card(shown))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::Severity;

    fn mounted() -> OverlaySurface {
        let mut surface = OverlaySurface::default();
        for slot in Slot::ALL {
            surface.mount(slot);
        }
        surface
    }

    #[test]
    fn mount_twice_keeps_one_container() {
        let mut surface = mounted();
        surface.mount(Slot::Modal);
        assert_eq!(surface.mounted.len(), 3);
    }

    #[test]
    fn toasts_keep_insertion_order_and_start_hidden() {
        let mut surface = mounted();
        let first = ToastId::new();
        let second = ToastId::new();
        surface.insert_toast(first, &NoticeContent::toast("a", Severity::Info));
        surface.insert_toast(second, &NoticeContent::toast("b", Severity::Error));

        assert_eq!(surface.toast_messages().collect::<Vec<_>>(), ["a", "b"]);
        assert!(surface.is_displayed(Node::Toast(first)));
        assert!(!surface.is_shown(Node::Toast(first)));

        surface.set_shown(Node::Toast(first), true);
        assert!(surface.is_shown(Node::Toast(first)));

        surface.remove_toast(first);
        assert_eq!(surface.toast_len(), 1);
        assert!(!surface.is_displayed(Node::Toast(first)));
    }

    #[test]
    fn hiding_dialog_clears_shown_state() {
        let mut surface = mounted();
        let node = Node::Dialog(Dialog::Confirm);
        surface.fill_dialog(Dialog::Confirm, &NoticeContent::dialog("q?", "Confirm", Severity::Warning));
        surface.set_displayed(node, true);
        surface.set_shown(node, true);

        surface.set_displayed(node, false);

        assert!(!surface.is_displayed(node));
        assert!(!surface.is_shown(node));
        assert_eq!(
            surface.dialog_content(Dialog::Confirm).map(|c| c.message.as_str()),
            Some("q?")
        );
    }

    #[test]
    fn layers_skip_hidden_dialogs() {
        let mut surface = mounted();
        let labels = Labels::default();
        assert!(surface.layers(&labels).is_empty());

        surface.fill_dialog(Dialog::Modal, &NoticeContent::dialog("hi", "Info", Severity::Info));
        assert!(surface.view_dialog(Dialog::Modal, &labels).is_none());

        surface.set_displayed(Node::Dialog(Dialog::Modal), true);
        surface.insert_toast(ToastId::new(), &NoticeContent::toast("t", Severity::Success));
        assert_eq!(surface.layers(&labels).len(), 2);
    }
}
