// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector and the handle used to feed it.

use std::collections::VecDeque;
use std::fs;
use std::path::Path;
use std::time::Instant;

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};
use serde::Serialize;

use super::{ConfirmOutcome, DiagnosticEvent, DiagnosticEventKind};
use crate::error::{Error, Result};
use crate::notifications::{Delivery, Severity};

/// Most events the notice log keeps; the oldest are dropped first.
pub const MAX_LOGGED_EVENTS: usize = 500;

/// Default channel capacity for event buffering.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone. Sending never blocks the UI thread.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Logs a notice shown to the user.
    pub fn log_notice(&self, severity: Severity, delivery: Delivery, message: &str) {
        self.send(DiagnosticEventKind::Notice {
            severity,
            delivery,
            message: message.to_string(),
        });
    }

    /// Logs how a confirmation request ended.
    pub fn log_confirmation(&self, outcome: ConfirmOutcome) {
        self.send(DiagnosticEventKind::Confirmation { outcome });
    }

    /// Logs a recoverable startup or runtime problem, e.g. unreadable settings.
    pub fn log_warning(&self, message: impl Into<String>) {
        self.send(DiagnosticEventKind::Warning {
            message: message.into(),
        });
    }

    /// Logs a failed operation of the shell itself.
    pub fn log_error(&self, message: impl Into<String>) {
        self.send(DiagnosticEventKind::Error {
            message: message.into(),
        });
    }

    fn send(&self, kind: DiagnosticEventKind) {
        // Dropped when the channel is full.
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }
}

/// Keeps the notice log of one window.
pub struct DiagnosticsCollector {
    events: VecDeque<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    started_at: Instant,
    started_at_utc: DateTime<Utc>,
}

#[derive(Serialize)]
struct ExportedEvent<'a> {
    /// Milliseconds since collection started.
    offset_ms: u64,
    #[serde(flatten)]
    kind: &'a DiagnosticEventKind,
}

#[derive(Serialize)]
struct ExportedLog<'a> {
    started_at: DateTime<Utc>,
    exported_at: DateTime<Utc>,
    event_count: usize,
    events: Vec<ExportedEvent<'a>>,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new() -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            events: VecDeque::new(),
            event_rx,
            event_tx,
            started_at: Instant::now(),
            started_at_utc: Utc::now(),
        }
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves sent events into the log, dropping the oldest beyond
    /// [`MAX_LOGGED_EVENTS`].
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            if self.events.len() == MAX_LOGGED_EVENTS {
                self.events.pop_front();
            }
            self.events.push_back(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Logged events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.events.iter()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Renders the log as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    #[allow(clippy::cast_possible_truncation)] // Offsets in ms fit comfortably in u64
    pub fn export_json(&self) -> serde_json::Result<String> {
        let events: Vec<ExportedEvent<'_>> = self
            .events
            .iter()
            .map(|event| ExportedEvent {
                offset_ms: event
                    .timestamp
                    .saturating_duration_since(self.started_at)
                    .as_millis() as u64,
                kind: &event.kind,
            })
            .collect();

        serde_json::to_string_pretty(&ExportedLog {
            started_at: self.started_at_utc,
            exported_at: Utc::now(),
            event_count: events.len(),
            events,
        })
    }

    /// Writes [`export_json`](Self::export_json) to `path`, creating parent
    /// directories.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if serialization or writing fails.
    pub fn export_to_path(&self, path: &Path) -> Result<()> {
        let json = self
            .export_json()
            .map_err(|err| Error::Io(err.to_string()))?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, json)?;
        Ok(())
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new()
    }
}
