// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the demo application.
//!
//! Each handler borrows only the parts of the application state it needs
//! through [`UpdateContext`].

use super::Message;
use crate::config;
use crate::diagnostics::DiagnosticsCollector;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::notifications::{self, Labels, Manager, Severity};
use crate::ui::overlay::OverlaySurface;
use iced::Task;
use std::path::{Path, PathBuf};
use unic_langid::LanguageIdentifier;

/// File the notice log is exported to, inside the config directory.
pub const DIAGNOSTICS_FILE_NAME: &str = "diagnostics.json";

/// Mutable application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub notices: &'a mut Manager<OverlaySurface>,
    pub diagnostics: &'a mut DiagnosticsCollector,
    pub record_name: &'a mut String,
    pub config_dir: Option<&'a Path>,
}

/// Forwards overlay input to the manager.
pub fn handle_notice_message(
    ctx: &mut UpdateContext<'_>,
    message: &notifications::Message,
) -> Task<Message> {
    ctx.notices.handle_message(message);
    ctx.diagnostics.process_pending();
    Task::none()
}

/// Advances notice transitions.
pub fn handle_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    handle_notice_message(ctx, &notifications::Message::Tick)
}

/// Name of the record the buttons act on; the localized sample name when
/// the input is blank.
fn record_name(ctx: &UpdateContext<'_>) -> String {
    let trimmed = ctx.record_name.trim();
    if trimmed.is_empty() {
        ctx.i18n.tr("demo-record-name")
    } else {
        trimmed.to_string()
    }
}

pub fn handle_save_record(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let name = record_name(ctx);
    let text = ctx
        .i18n
        .tr_with_args("demo-record-saved", &[("name", name.as_str())]);
    ctx.notices.success(text);
    Task::none()
}

/// Asks for confirmation and reports the answer once it arrives.
pub fn handle_delete_record(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let name = record_name(ctx);
    let question = ctx
        .i18n
        .tr_with_args("demo-delete-question", &[("name", name.as_str())]);
    let confirmation = ctx.notices.confirm(question, None, Severity::Warning);
    ctx.diagnostics.process_pending();

    Task::perform(confirmation, move |confirmed| Message::DeleteAnswered {
        name: name.clone(),
        confirmed,
    })
}

pub fn handle_delete_answered(
    ctx: &mut UpdateContext<'_>,
    name: &str,
    confirmed: bool,
) -> Task<Message> {
    if confirmed {
        let text = ctx
            .i18n
            .tr_with_args("demo-record-deleted", &[("name", name)]);
        ctx.notices.success(text);
    } else {
        ctx.notices.info(ctx.i18n.tr("demo-delete-cancelled"));
    }
    Task::none()
}

/// Demo buttons that show a single notice.
pub fn handle_demo_notice(ctx: &mut UpdateContext<'_>, message: &Message) -> Task<Message> {
    let i18n = &*ctx.i18n;
    match message {
        Message::ShowWarning => ctx.notices.warning(i18n.tr("demo-warning-message")),
        Message::ShowError => ctx.notices.error(i18n.tr("demo-error-message")),
        Message::ShowInfoModal => {
            ctx.notices
                .notify(Severity::Info, i18n.tr("demo-info-message"), true);
        }
        Message::ShowStickyToast => {
            ctx.notices
                .toast(i18n.tr("demo-sticky-message"), Severity::Warning, 0);
        }
        Message::ShowUnknownSeverity => {
            let severity = Severity::from_name("critical");
            let duration_ms = ctx.notices.settings().toasts.duration_ms(severity);
            ctx.notices
                .toast(i18n.tr("demo-unknown-message"), severity, duration_ms);
        }
        _ => {}
    }
    ctx.diagnostics.process_pending();
    Task::none()
}

/// Switches the UI language, including default notice titles and captions.
pub fn handle_language_selected(
    ctx: &mut UpdateContext<'_>,
    locale: LanguageIdentifier,
) -> Task<Message> {
    ctx.i18n.set_locale(locale);
    ctx.notices.set_labels(Labels::from_i18n(ctx.i18n));
    Task::none()
}

/// Writes the notice log next to `settings.toml` and reports where it went.
pub fn handle_export_diagnostics(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.diagnostics.process_pending();

    let result = config::paths::get_config_dir_with_override(ctx.config_dir.map(PathBuf::from))
        .ok_or_else(|| Error::Io("no config directory".to_string()))
        .map(|dir| dir.join(DIAGNOSTICS_FILE_NAME))
        .and_then(|path| ctx.diagnostics.export_to_path(&path).map(|()| path));

    match result {
        Ok(path) => {
            let path = path.display().to_string();
            let text = ctx
                .i18n
                .tr_with_args("demo-diagnostics-exported", &[("path", path.as_str())]);
            ctx.notices.success(text);
        }
        Err(err) => {
            ctx.diagnostics.handle().log_error(err.to_string());
            ctx.notices.error(ctx.i18n.tr(err.i18n_key()));
        }
    }
    ctx.diagnostics.process_pending();
    Task::none()
}
