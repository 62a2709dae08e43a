// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the toast stack, the informational modal and the
//! confirmation modal. It decides when nodes appear, transition and go away,
//! and applies those decisions through a [`Surface`]. Deferred steps are
//! stored as deadlines and fired by [`Manager::tick`].

use super::clock::{Clock, SystemClock};
use super::confirm::{Confirmation, Continuation};
use super::labels::Labels;
use super::notice::{Delivery, NoticeContent, Toast, ToastId, ToastPhase};
use super::schedule::{Schedule, Transition};
use super::severity::Severity;
use super::surface::{Container, Dialog, Node, Surface};
use crate::config::{Config, ToastConfig, DEFAULT_ENTRANCE_DELAY_MS, DEFAULT_EXIT_TRANSITION_MS};
use crate::diagnostics::{ConfirmOutcome, DiagnosticsHandle};
use std::time::{Duration, Instant};

/// Messages for notification state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Dismiss control of a toast was clicked.
    DismissToast(ToastId),
    /// Close glyph or OK button of the informational modal.
    CloseModal,
    /// Confirm button of the confirmation modal.
    Confirm,
    /// Cancel button or close glyph of the confirmation modal.
    CancelConfirm,
    /// Click on a dialog backdrop, outside its card.
    Backdrop(Dialog),
    /// Escape key.
    Escape,
    /// Periodic tick driving transitions and auto-dismiss.
    Tick,
}

/// Visibility state of a singleton dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    /// Displayed, entrance transition pending.
    Opening,
    Open,
    /// Exit transition running; hidden when it ends.
    Closing,
}

impl DialogState {
    /// Whether the dialog takes part in layout.
    #[must_use]
    pub fn is_displayed(self) -> bool {
        !matches!(self, DialogState::Closed)
    }
}

/// Timing and duration settings of a manager.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Toast lifetimes used by the convenience helpers.
    pub toasts: ToastConfig,
    /// Delay before a new node receives its shown state.
    pub entrance_delay: Duration,
    /// Length of the exit transition.
    pub exit: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            toasts: ToastConfig::default(),
            entrance_delay: Duration::from_millis(DEFAULT_ENTRANCE_DELAY_MS),
            exit: Duration::from_millis(DEFAULT_EXIT_TRANSITION_MS),
        }
    }
}

impl From<&Config> for Settings {
    fn from(config: &Config) -> Self {
        Self {
            toasts: config.toasts.clone(),
            entrance_delay: config.transitions.entrance_delay(),
            exit: config.transitions.exit(),
        }
    }
}

/// Owns notification state for one window.
///
/// Construct once when the window boots and call [`Manager::init`]; the
/// manager lives as long as the window does.
pub struct Manager<S: Surface, C: Clock = SystemClock> {
    surface: S,
    clock: C,
    /// Toasts in arrival order.
    toasts: Vec<Toast>,
    modal: DialogState,
    confirm: DialogState,
    continuation: Continuation,
    schedule: Schedule,
    settings: Settings,
    labels: Labels,
    diagnostics: Option<DiagnosticsHandle>,
}

impl<S: Surface> Manager<S, SystemClock> {
    /// Creates a manager driven by the system clock.
    pub fn new(surface: S) -> Self {
        Self::with_clock(surface, SystemClock)
    }
}

impl<S: Surface, C: Clock> Manager<S, C> {
    /// Creates a manager driven by `clock`.
    pub fn with_clock(surface: S, clock: C) -> Self {
        Self {
            surface,
            clock,
            toasts: Vec::new(),
            modal: DialogState::Closed,
            confirm: DialogState::Closed,
            continuation: Continuation::default(),
            schedule: Schedule::default(),
            settings: Settings::default(),
            labels: Labels::default(),
            diagnostics: None,
        }
    }

    /// Replaces the timing settings. Affects notices created afterwards.
    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    /// Replaces the default titles and button captions.
    pub fn set_labels(&mut self, labels: Labels) {
        self.labels = labels;
    }

    /// Sets the diagnostics handle for logging notices and confirmations.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Mounts the three overlay containers, skipping any that exist.
    pub fn init(&mut self) {
        for container in Container::ALL {
            if !self.surface.is_mounted(container) {
                self.surface.mount(container);
            }
        }
    }

    // =========================================================================
    // Toasts
    // =========================================================================

    /// Appends a toast to the stack.
    ///
    /// A `duration_ms` of zero keeps the toast until dismissed. Returns `None`
    /// when the toast stack is not mounted.
    pub fn toast(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        duration_ms: u64,
    ) -> Option<ToastId> {
        if !self.surface.is_mounted(Container::ToastStack) {
            return None;
        }

        let now = self.clock.now();
        let toast = Toast::new(NoticeContent::toast(message, severity), duration_ms, now);
        let id = toast.id();

        self.surface.insert_toast(id, toast.content());
        self.schedule
            .push(now + self.settings.entrance_delay, Transition::ShowToast(id));
        if let Some(lifetime) = toast.lifetime() {
            self.schedule
                .push(now + lifetime, Transition::BeginToastExit(id));
        }
        self.toasts.push(toast);
        Some(id)
    }

    /// Removes a toast immediately, as its dismiss control does.
    ///
    /// Returns `true` if the toast was found.
    pub fn dismiss_toast(&mut self, id: ToastId) -> bool {
        let Some(position) = self.toasts.iter().position(|t| t.id() == id) else {
            return false;
        };
        self.toasts.remove(position);
        self.schedule.cancel_toast(id);
        self.surface.remove_toast(id);
        true
    }

    // =========================================================================
    // Informational modal
    // =========================================================================

    /// Shows the informational modal, replacing whatever it displayed.
    ///
    /// `title` defaults to the localized "Info".
    pub fn modal(&mut self, message: impl Into<String>, title: Option<&str>, severity: Severity) {
        if !self.surface.is_mounted(Container::Modal) {
            return;
        }
        let title = title.unwrap_or(self.labels.info.as_str()).to_string();
        let content = NoticeContent::dialog(message, title, severity);
        self.surface.fill_dialog(Dialog::Modal, &content);
        self.open_dialog(Dialog::Modal);
    }

    /// Closes the informational modal. Does nothing if it is not open.
    pub fn close_modal(&mut self) {
        if !self.surface.is_mounted(Container::Modal) {
            return;
        }
        self.close_dialog(Dialog::Modal);
    }

    // =========================================================================
    // Confirmation modal
    // =========================================================================

    /// Asks a yes/no question.
    ///
    /// The returned future resolves to `true` only if the confirm button is
    /// pressed. A confirmation still pending when this is called is resolved
    /// with `false` first. `title` defaults to the localized "Confirm".
    pub fn confirm(
        &mut self,
        message: impl Into<String>,
        title: Option<&str>,
        severity: Severity,
    ) -> Confirmation {
        if !self.surface.is_mounted(Container::Confirm) {
            self.log_confirmation(ConfirmOutcome::Unavailable);
            return Confirmation::resolved(false);
        }

        let (confirmation, superseded) = self.continuation.arm();
        if superseded {
            self.log_confirmation(ConfirmOutcome::Superseded);
        }

        let title = title.unwrap_or(self.labels.confirm.as_str()).to_string();
        let content = NoticeContent::dialog(message, title, severity);
        self.surface.fill_dialog(Dialog::Confirm, &content);
        self.open_dialog(Dialog::Confirm);
        confirmation
    }

    /// Answers the pending confirmation with `answer` and closes the modal.
    pub fn confirm_result(&mut self, answer: bool) {
        if self.continuation.resolve(answer) {
            self.log_confirmation(if answer {
                ConfirmOutcome::Accepted
            } else {
                ConfirmOutcome::Declined
            });
        }
        self.close_confirm_modal();
    }

    /// Confirm button.
    pub fn accept_confirm(&mut self) {
        self.confirm_result(true);
    }

    /// Cancel path: cancel button, backdrop click or Escape.
    ///
    /// Resolves a still-pending confirmation with `false`, then hides the
    /// modal. Safe to call with nothing pending.
    pub fn close_confirm_modal(&mut self) {
        if self.continuation.resolve(false) {
            self.log_confirmation(ConfirmOutcome::Declined);
        }
        if !self.surface.is_mounted(Container::Confirm) {
            return;
        }
        self.close_dialog(Dialog::Confirm);
    }

    // =========================================================================
    // Convenience helpers
    // =========================================================================

    /// Shows `message` with the localized title of `severity`, as a modal or
    /// as a toast with the configured lifetime of that severity.
    pub fn notify(&mut self, severity: Severity, message: impl Into<String>, use_modal: bool) {
        let message = message.into();
        let delivery = Delivery::from_use_modal(use_modal);

        if matches!(severity, Severity::Warning | Severity::Error) {
            if let Some(handle) = &self.diagnostics {
                handle.log_notice(severity, delivery, &message);
            }
        }

        match delivery {
            Delivery::Modal => {
                let title = self.labels.title_for(severity).to_string();
                self.modal(message, Some(&title), severity);
            }
            Delivery::Toast => {
                let duration_ms = self.settings.toasts.duration_ms(severity);
                self.toast(message, severity, duration_ms);
            }
        }
    }

    /// Success toast. Same as [`Manager::notify`] with `use_modal = false`.
    pub fn success(&mut self, message: impl Into<String>) {
        self.notify_default(Severity::Success, message);
    }

    /// Error modal. Same as [`Manager::notify`] with `use_modal = true`.
    pub fn error(&mut self, message: impl Into<String>) {
        self.notify_default(Severity::Error, message);
    }

    /// Warning toast. Same as [`Manager::notify`] with `use_modal = false`.
    pub fn warning(&mut self, message: impl Into<String>) {
        self.notify_default(Severity::Warning, message);
    }

    /// Info toast. Same as [`Manager::notify`] with `use_modal = false`.
    pub fn info(&mut self, message: impl Into<String>) {
        self.notify_default(Severity::Info, message);
    }

    fn notify_default(&mut self, severity: Severity, message: impl Into<String>) {
        self.notify(severity, message, severity.prefers_modal());
    }

    // =========================================================================
    // Input routing
    // =========================================================================

    /// Escape closes the confirmation modal if it is displayed, the
    /// informational modal otherwise.
    pub fn handle_escape(&mut self) {
        if self.confirm.is_displayed() {
            self.close_confirm_modal();
        } else {
            self.close_modal();
        }
    }

    /// Click outside a dialog's card.
    pub fn backdrop_clicked(&mut self, dialog: Dialog) {
        match dialog {
            Dialog::Modal => self.close_modal(),
            Dialog::Confirm => self.close_confirm_modal(),
        }
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match *message {
            Message::DismissToast(id) => {
                self.dismiss_toast(id);
            }
            Message::CloseModal => self.close_modal(),
            Message::Confirm => self.accept_confirm(),
            Message::CancelConfirm => self.close_confirm_modal(),
            Message::Backdrop(dialog) => self.backdrop_clicked(dialog),
            Message::Escape => self.handle_escape(),
            Message::Tick => self.tick(),
        }
    }

    // =========================================================================
    // Timers
    // =========================================================================

    /// Fires every transition whose deadline has passed.
    ///
    /// Follow-up steps are scheduled from the deadline of the step that
    /// triggered them, not from the tick time, so coarse ticks do not
    /// stretch lifetimes.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        while let Some((due, transition)) = self.schedule.pop_due(now) {
            self.apply(due, transition);
        }
    }

    fn apply(&mut self, due: Instant, transition: Transition) {
        match transition {
            Transition::ShowToast(id) => {
                if let Some(toast) = find_toast(&mut self.toasts, id) {
                    if toast.phase() == ToastPhase::Entering {
                        toast.set_phase(ToastPhase::Shown);
                        self.surface.set_shown(Node::Toast(id), true);
                    }
                }
            }
            Transition::BeginToastExit(id) => {
                if let Some(toast) = find_toast(&mut self.toasts, id) {
                    toast.set_phase(ToastPhase::Leaving);
                    self.surface.set_shown(Node::Toast(id), false);
                    self.schedule
                        .push(due + self.settings.exit, Transition::RemoveToast(id));
                }
            }
            Transition::RemoveToast(id) => {
                self.dismiss_toast(id);
            }
            Transition::ShowDialog(dialog) => {
                if *self.dialog_state_mut(dialog) == DialogState::Opening {
                    *self.dialog_state_mut(dialog) = DialogState::Open;
                    self.surface.set_shown(Node::Dialog(dialog), true);
                }
            }
            Transition::HideDialog(dialog) => {
                if *self.dialog_state_mut(dialog) == DialogState::Closing {
                    *self.dialog_state_mut(dialog) = DialogState::Closed;
                    self.surface.set_displayed(Node::Dialog(dialog), false);
                }
            }
        }
    }

    fn open_dialog(&mut self, dialog: Dialog) {
        let now = self.clock.now();
        let state = *self.dialog_state_mut(dialog);
        if state == DialogState::Open {
            // Already fully visible; new content is enough.
            return;
        }

        self.schedule.cancel_dialog(dialog);
        self.surface.set_displayed(Node::Dialog(dialog), true);
        *self.dialog_state_mut(dialog) = DialogState::Opening;
        self.schedule.push(
            now + self.settings.entrance_delay,
            Transition::ShowDialog(dialog),
        );
    }

    fn close_dialog(&mut self, dialog: Dialog) {
        let state = *self.dialog_state_mut(dialog);
        if matches!(state, DialogState::Closed | DialogState::Closing) {
            return;
        }

        let now = self.clock.now();
        self.schedule.cancel_dialog(dialog);
        self.surface.set_shown(Node::Dialog(dialog), false);
        *self.dialog_state_mut(dialog) = DialogState::Closing;
        self.schedule
            .push(now + self.settings.exit, Transition::HideDialog(dialog));
    }

    fn dialog_state_mut(&mut self, dialog: Dialog) -> &mut DialogState {
        match dialog {
            Dialog::Modal => &mut self.modal,
            Dialog::Confirm => &mut self.confirm,
        }
    }

    fn log_confirmation(&self, outcome: ConfirmOutcome) {
        if let Some(handle) = &self.diagnostics {
            handle.log_confirmation(outcome);
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Toasts currently in the stack, in arrival order.
    pub fn toasts(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    #[must_use]
    pub fn toast_count(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn modal_state(&self) -> DialogState {
        self.modal
    }

    #[must_use]
    pub fn confirm_state(&self) -> DialogState {
        self.confirm
    }

    /// Whether a confirmation is waiting for an answer.
    #[must_use]
    pub fn has_pending_confirmation(&self) -> bool {
        self.continuation.is_pending()
    }

    /// Whether any transition is still scheduled; ticks are only needed then.
    #[must_use]
    pub fn has_scheduled_work(&self) -> bool {
        !self.schedule.is_empty()
    }

    #[must_use]
    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The surface, for rendering.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }
}

fn find_toast(toasts: &mut [Toast], id: ToastId) -> Option<&mut Toast> {
    toasts.iter_mut().find(|t| t.id() == id)
}
