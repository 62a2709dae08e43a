// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for notification activity.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::notifications::{Delivery, Severity};

/// How a confirmation request ended.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmOutcome {
    /// The confirm button was pressed.
    Accepted,
    /// Cancel button, backdrop click or Escape.
    Declined,
    /// A newer confirmation replaced it before the user answered.
    Superseded,
    /// The confirmation container did not exist; answered `false` at once.
    Unavailable,
}

/// A diagnostic event with its capture time.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for duration calculations)
    pub timestamp: Instant,
    /// The type and data of the event
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// A warning or error notice was shown to the user.
    Notice {
        severity: Severity,
        delivery: Delivery,
        message: String,
    },

    /// A confirmation request was resolved.
    Confirmation { outcome: ConfirmOutcome },

    /// Non-critical problem inside the application itself.
    Warning { message: String },

    /// Failure inside the application itself.
    Error { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_event_serializes_with_tag() {
        let kind = DiagnosticEventKind::Notice {
            severity: Severity::Error,
            delivery: Delivery::Modal,
            message: "server rejected".to_string(),
        };
        let json = serde_json::to_string(&kind).expect("serialize");
        assert!(json.contains("\"type\":\"notice\""));
        assert!(json.contains("\"severity\":\"error\""));
        assert!(json.contains("\"delivery\":\"modal\""));
    }

    #[test]
    fn confirmation_event_round_trips() {
        let kind = DiagnosticEventKind::Confirmation {
            outcome: ConfirmOutcome::Superseded,
        };
        let json = serde_json::to_string(&kind).expect("serialize");
        let back: DiagnosticEventKind = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, kind);
    }
}
