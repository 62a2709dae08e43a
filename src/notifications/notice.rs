// SPDX-License-Identifier: MPL-2.0
//! Core notice data structures.
//!
//! A [`NoticeContent`] is what gets drawn (toast or dialog); a [`Toast`] adds
//! the identity, lifetime and transition phase of one entry of the stack.

use super::severity::Severity;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Where a notice is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Delivery {
    /// Transient toast in the stack.
    Toast,
    /// Blocking informational modal.
    Modal,
}

impl Delivery {
    /// Maps the `use_modal` flag of the convenience helpers.
    #[must_use]
    pub fn from_use_modal(use_modal: bool) -> Self {
        if use_modal {
            Delivery::Modal
        } else {
            Delivery::Toast
        }
    }
}

/// Unique identifier for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// Text and severity of a notice, as handed to the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeContent {
    /// Dialog title. Toasts carry none.
    pub title: Option<String>,
    pub message: String,
    pub severity: Severity,
}

impl NoticeContent {
    /// Content for a toast.
    pub fn toast(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: None,
            message: message.into(),
            severity,
        }
    }

    /// Content for a titled dialog.
    pub fn dialog(
        message: impl Into<String>,
        title: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            title: Some(title.into()),
            message: message.into(),
            severity,
        }
    }
}

/// Transition phase of a toast on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Inserted, entrance transition not started yet.
    Entering,
    /// Fully visible.
    Shown,
    /// Exit transition running; removal follows.
    Leaving,
}

/// One entry of the toast stack.
#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    content: NoticeContent,
    /// `None` means the toast stays until dismissed.
    lifetime: Option<Duration>,
    created_at: Instant,
    phase: ToastPhase,
}

impl Toast {
    /// Creates a toast. A zero `lifetime_ms` keeps it until dismissed.
    pub fn new(content: NoticeContent, lifetime_ms: u64, created_at: Instant) -> Self {
        Self {
            id: ToastId::new(),
            content,
            lifetime: (lifetime_ms > 0).then(|| Duration::from_millis(lifetime_ms)),
            created_at,
            phase: ToastPhase::Entering,
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn content(&self) -> &NoticeContent {
        &self.content
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.content.severity
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.content.message
    }

    /// Time the toast stays before its exit transition, if it auto-dismisses.
    #[must_use]
    pub fn lifetime(&self) -> Option<Duration> {
        self.lifetime
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    #[must_use]
    pub fn phase(&self) -> ToastPhase {
        self.phase
    }

    pub(crate) fn set_phase(&mut self, phase: ToastPhase) {
        self.phase = phase;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_ids_are_unique() {
        let now = Instant::now();
        let a = Toast::new(NoticeContent::toast("a", Severity::Info), 3000, now);
        let b = Toast::new(NoticeContent::toast("a", Severity::Info), 3000, now);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn zero_lifetime_means_persistent() {
        let toast = Toast::new(NoticeContent::toast("stay", Severity::Error), 0, Instant::now());
        assert!(toast.lifetime().is_none());
        assert_eq!(toast.phase(), ToastPhase::Entering);
    }

    #[test]
    fn positive_lifetime_is_kept_in_millis() {
        let toast = Toast::new(NoticeContent::toast("go", Severity::Success), 4000, Instant::now());
        assert_eq!(toast.lifetime(), Some(Duration::from_millis(4000)));
        assert!(toast.content().title.is_none());
    }
}
