// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::notifications;
use std::time::Instant;
use unic_langid::LanguageIdentifier;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Input routed to the notice overlay.
    Notice(notifications::Message),
    /// Periodic tick, subscribed only while transitions are pending.
    Tick(Instant),
    RecordNameChanged(String),
    SaveRecord,
    DeleteRecord,
    /// The delete confirmation was answered.
    DeleteAnswered {
        name: String,
        confirmed: bool,
    },
    ShowWarning,
    ShowError,
    ShowInfoModal,
    ShowStickyToast,
    ShowUnknownSeverity,
    LanguageSelected(LanguageIdentifier),
    /// Write the notice log to `diagnostics.json` in the config directory.
    ExportDiagnostics,
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `tr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `NOTICE_DESK_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
