// SPDX-License-Identifier: MPL-2.0
//! Deferred yes/no answers for the confirmation modal.
//!
//! [`Manager::confirm`](super::Manager::confirm) hands the caller a
//! [`Confirmation`] future and keeps the sending half. The sender is taken
//! out of its slot on resolution, so each request resolves exactly once.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

/// The caller's side of a confirmation request.
///
/// Resolves to `true` only when the confirm button was pressed. Every other
/// outcome, including the manager going away, resolves to `false`.
#[derive(Debug)]
#[must_use = "a confirmation does nothing unless awaited or polled"]
pub struct Confirmation {
    receiver: oneshot::Receiver<bool>,
}

impl Confirmation {
    /// A confirmation that is already answered.
    pub fn resolved(answer: bool) -> Self {
        let (sender, receiver) = oneshot::channel();
        let _ = sender.send(answer);
        Self { receiver }
    }

    /// Returns the answer if one is available, without waiting.
    pub fn try_outcome(&mut self) -> Option<bool> {
        match self.receiver.try_recv() {
            Ok(answer) => Some(answer),
            Err(oneshot::error::TryRecvError::Empty) => None,
            Err(oneshot::error::TryRecvError::Closed) => Some(false),
        }
    }
}

impl Future for Confirmation {
    type Output = bool;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<bool> {
        Pin::new(&mut self.receiver)
            .poll(cx)
            .map(|result| result.unwrap_or(false))
    }
}

/// Slot holding the pending continuation, if any.
#[derive(Debug, Default)]
pub(crate) struct Continuation {
    sender: Option<oneshot::Sender<bool>>,
}

impl Continuation {
    /// Stores a fresh continuation. A stale one is resolved with `false`
    /// first; the returned flag says whether that happened.
    pub fn arm(&mut self) -> (Confirmation, bool) {
        let superseded = self.resolve(false);
        let (sender, receiver) = oneshot::channel();
        self.sender = Some(sender);
        (Confirmation { receiver }, superseded)
    }

    /// Resolves the pending continuation, if any. Returns whether one was
    /// pending.
    pub fn resolve(&mut self, answer: bool) -> bool {
        match self.sender.take() {
            Some(sender) => {
                // The caller may have dropped its Confirmation; nothing to do then.
                let _ = sender.send(answer);
                true
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.sender.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolved_confirmation_is_immediately_available() {
        let mut confirmation = Confirmation::resolved(false);
        assert_eq!(confirmation.try_outcome(), Some(false));
    }

    #[test]
    fn resolve_happens_once() {
        let mut slot = Continuation::default();
        let (mut confirmation, superseded) = slot.arm();
        assert!(!superseded);
        assert!(slot.is_pending());
        assert_eq!(confirmation.try_outcome(), None);

        assert!(slot.resolve(true));
        assert!(!slot.resolve(false));
        assert!(!slot.is_pending());
        assert_eq!(confirmation.try_outcome(), Some(true));
    }

    #[test]
    fn arming_twice_cancels_the_first() {
        let mut slot = Continuation::default();
        let (mut first, _) = slot.arm();
        let (mut second, superseded) = slot.arm();

        assert!(superseded);
        assert_eq!(first.try_outcome(), Some(false));
        assert_eq!(second.try_outcome(), None);
    }

    #[tokio::test]
    async fn dropped_slot_resolves_false() {
        let mut slot = Continuation::default();
        let (confirmation, _) = slot.arm();
        drop(slot);
        assert!(!confirmation.await);
    }

    #[test]
    fn resolving_after_caller_dropped_is_harmless() {
        let mut slot = Continuation::default();
        let (confirmation, _) = slot.arm();
        drop(confirmation);
        assert!(slot.resolve(true));
    }
}
