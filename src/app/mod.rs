// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting the notice overlay.
//!
//! The `App` struct wires together localization, configuration, diagnostics
//! and one notice [`Manager`], and shows a small account-records screen whose
//! buttons exercise every kind of notice.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::diagnostics::DiagnosticsCollector;
use crate::i18n::fluent::I18n;
use crate::notifications::{Labels, Manager, Settings};
use crate::ui::overlay::OverlaySurface;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    notices: Manager<OverlaySurface>,
    diagnostics: DiagnosticsCollector,
    /// Contents of the record name input.
    record_name: String,
    /// Directory given with `--config-dir`, if any.
    config_dir: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("i18n", &self.i18n)
            .field("toasts", &self.notices.toast_count())
            .field("record_name", &self.record_name)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 560;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot function; the flags are consumed on the
    // first call and defaults are used if it is ever called again.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads configuration and translations and mounts the notice overlay.
    ///
    /// A settings file that cannot be parsed is reported as a warning toast
    /// once the overlay exists, and logged to diagnostics.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.map(PathBuf::from);
        let (config, config_warning) = config::load_with_override(config_dir.clone());
        let i18n = I18n::new(flags.lang, &config);
        let diagnostics = DiagnosticsCollector::default();

        let mut notices = Manager::new(OverlaySurface::default());
        notices.set_settings(Settings::from(&config));
        notices.set_labels(Labels::from_i18n(&i18n));
        notices.set_diagnostics(diagnostics.handle());
        notices.init();

        let mut app = App {
            record_name: String::new(),
            i18n,
            notices,
            diagnostics,
            config_dir,
        };

        if let Some(key) = config_warning {
            let text = app.i18n.tr(&key);
            app.diagnostics.handle().log_warning(text.as_str());
            app.notices.warning(text);
            app.diagnostics.process_pending();
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.notices.has_scheduled_work()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            notices: &mut self.notices,
            diagnostics: &mut self.diagnostics,
            record_name: &mut self.record_name,
            config_dir: self.config_dir.as_deref(),
        };

        match message {
            Message::Notice(notice_message) => {
                update::handle_notice_message(&mut ctx, &notice_message)
            }
            Message::Tick(_) => update::handle_tick(&mut ctx),
            Message::RecordNameChanged(name) => {
                *ctx.record_name = name;
                Task::none()
            }
            Message::SaveRecord => update::handle_save_record(&mut ctx),
            Message::DeleteRecord => update::handle_delete_record(&mut ctx),
            Message::DeleteAnswered { name, confirmed } => {
                update::handle_delete_answered(&mut ctx, &name, confirmed)
            }
            Message::ShowWarning
            | Message::ShowError
            | Message::ShowInfoModal
            | Message::ShowStickyToast
            | Message::ShowUnknownSeverity => update::handle_demo_notice(&mut ctx, &message),
            Message::LanguageSelected(locale) => {
                update::handle_language_selected(&mut ctx, locale)
            }
            Message::ExportDiagnostics => update::handle_export_diagnostics(&mut ctx),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            notices: &self.notices,
            record_name: &self.record_name,
            diagnostic_count: self.diagnostics.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::{self, Delivery, DialogState, Severity};
    use crate::diagnostics::DiagnosticEventKind;
    use tempfile::{tempdir, TempDir};

    fn app_in(dir: &TempDir) -> App {
        App::new(Flags {
            lang: Some("en-US".to_string()),
            config_dir: Some(dir.path().to_string_lossy().into_owned()),
        })
        .0
    }

    /// App booted against an empty config directory. Keep the guard alive
    /// for as long as the app is used.
    fn app() -> (App, TempDir) {
        let dir = tempdir().expect("failed to create temp dir");
        (app_in(&dir), dir)
    }

    #[test]
    fn boot_mounts_overlay_without_notices() {
        let (app, _dir) = app();
        assert_eq!(app.notices.toast_count(), 0);
        assert!(!app.notices.has_scheduled_work());
        assert_eq!(app.notices.labels().ok, "OK");
    }

    #[test]
    fn save_record_shows_success_toast_with_name() {
        let (mut app, _dir) = app();
        let _ = app.update(Message::RecordNameChanged("Globex".to_string()));
        let _ = app.update(Message::SaveRecord);

        let toast = app.notices.toasts().next().expect("toast");
        assert_eq!(toast.severity(), Severity::Success);
        assert_eq!(toast.message(), "Globex was saved.");
    }

    #[test]
    fn blank_record_name_uses_sample_name() {
        let (mut app, _dir) = app();
        let _ = app.update(Message::RecordNameChanged("   ".to_string()));
        let _ = app.update(Message::SaveRecord);

        let toast = app.notices.toasts().next().expect("toast");
        assert_eq!(toast.message(), "ACME Ltd. was saved.");
    }

    #[test]
    fn delete_record_opens_confirmation() {
        let (mut app, _dir) = app();
        let _ = app.update(Message::DeleteRecord);

        assert!(app.notices.has_pending_confirmation());
        assert_eq!(app.notices.confirm_state(), DialogState::Opening);

        let _ = app.update(Message::Notice(notifications::Message::CancelConfirm));
        assert!(!app.notices.has_pending_confirmation());
    }

    #[test]
    fn delete_answer_reports_outcome() {
        let (mut app, _dir) = app();
        let _ = app.update(Message::DeleteAnswered {
            name: "ACME Ltd.".to_string(),
            confirmed: true,
        });
        let _ = app.update(Message::DeleteAnswered {
            name: "ACME Ltd.".to_string(),
            confirmed: false,
        });

        let messages: Vec<_> = app.notices.toasts().map(|t| t.message().to_string()).collect();
        assert_eq!(messages, ["ACME Ltd. was deleted.", "Deletion cancelled."]);
    }

    #[test]
    fn show_error_opens_modal_and_is_logged() {
        let (mut app, _dir) = app();
        let _ = app.update(Message::ShowError);

        assert_eq!(app.notices.modal_state(), DialogState::Opening);
        let logged = app.diagnostics.iter().any(|event| {
            matches!(
                event.kind,
                DiagnosticEventKind::Notice {
                    severity: Severity::Error,
                    delivery: Delivery::Modal,
                    ..
                }
            )
        });
        assert!(logged);
    }

    #[test]
    fn sticky_toast_schedules_no_exit() {
        let (mut app, _dir) = app();
        let _ = app.update(Message::ShowStickyToast);
        let toast = app.notices.toasts().next().expect("toast");
        assert!(toast.lifetime().is_none());
    }

    #[test]
    fn unknown_severity_falls_back_to_info() {
        let (mut app, _dir) = app();
        let _ = app.update(Message::ShowUnknownSeverity);
        let toast = app.notices.toasts().next().expect("toast");
        assert_eq!(toast.severity(), Severity::Info);
    }

    #[test]
    fn switching_language_updates_labels() {
        let (mut app, _dir) = app();
        let turkish: unic_langid::LanguageIdentifier = "tr".parse().expect("valid locale");
        let _ = app.update(Message::LanguageSelected(turkish));

        assert_eq!(app.notices.labels().cancel, "İptal");
        assert_eq!(app.title(), "Bildirim Masası");
    }

    #[test]
    fn unreadable_settings_are_logged_as_warning() {
        let dir = tempdir().expect("failed to create temp dir");
        std::fs::write(dir.path().join("settings.toml"), "[toasts\nsuccess_ms = ")
            .expect("write settings");

        let app = app_in(&dir);

        assert_eq!(app.notices.toast_count(), 1);
        let logged = app
            .diagnostics
            .iter()
            .any(|event| matches!(event.kind, DiagnosticEventKind::Warning { .. }));
        assert!(logged);
    }

    #[test]
    fn export_diagnostics_writes_json_into_config_dir() {
        let (mut app, dir) = app();
        let _ = app.update(Message::ShowError);
        let _ = app.update(Message::ExportDiagnostics);

        let path = dir.path().join(update::DIAGNOSTICS_FILE_NAME);
        let written = std::fs::read_to_string(&path).expect("export file");
        let value: serde_json::Value = serde_json::from_str(&written).expect("valid json");
        assert_eq!(value["events"][0]["type"], "notice");

        let toast = app.notices.toasts().last().expect("toast");
        assert_eq!(toast.severity(), Severity::Success);
    }
}
