// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording notification activity.
//!
//! Warning and error notices, confirmation outcomes and internal problems
//! are sent through a [`DiagnosticsHandle`] and kept by a
//! [`DiagnosticsCollector`] in a log capped at [`MAX_LOGGED_EVENTS`], from
//! which they can be exported as JSON.

mod collector;
mod events;

pub use collector::{DiagnosticsCollector, DiagnosticsHandle, MAX_LOGGED_EVENTS};
pub use events::{ConfirmOutcome, DiagnosticEvent, DiagnosticEventKind};
