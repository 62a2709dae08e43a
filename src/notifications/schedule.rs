// SPDX-License-Identifier: MPL-2.0
//! Pending transitions keyed by deadline.

use super::notice::ToastId;
use super::surface::Dialog;
use std::time::Instant;

/// A deferred step of a toast or dialog lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Transition {
    ShowToast(ToastId),
    BeginToastExit(ToastId),
    RemoveToast(ToastId),
    ShowDialog(Dialog),
    HideDialog(Dialog),
}

impl Transition {
    fn targets_toast(self, id: ToastId) -> bool {
        matches!(
            self,
            Transition::ShowToast(t) | Transition::BeginToastExit(t) | Transition::RemoveToast(t)
                if t == id
        )
    }

    fn targets_dialog(self, dialog: Dialog) -> bool {
        matches!(
            self,
            Transition::ShowDialog(d) | Transition::HideDialog(d) if d == dialog
        )
    }
}

#[derive(Debug)]
struct Entry {
    due: Instant,
    seq: u64,
    transition: Transition,
}

/// Deadline-ordered timer list. Entries with equal deadlines fire in
/// insertion order.
#[derive(Debug, Default)]
pub(crate) struct Schedule {
    entries: Vec<Entry>,
    next_seq: u64,
}

impl Schedule {
    pub fn push(&mut self, due: Instant, transition: Transition) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry {
            due,
            seq,
            transition,
        });
    }

    /// Drops every pending transition of a toast.
    pub fn cancel_toast(&mut self, id: ToastId) {
        self.entries.retain(|e| !e.transition.targets_toast(id));
    }

    /// Drops every pending transition of a dialog.
    pub fn cancel_dialog(&mut self, dialog: Dialog) {
        self.entries.retain(|e| !e.transition.targets_dialog(dialog));
    }

    /// Removes and returns the earliest entry due at or before `now`.
    pub fn pop_due(&mut self, now: Instant) -> Option<(Instant, Transition)> {
        let index = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= now)
            .min_by_key(|(_, e)| (e.due, e.seq))
            .map(|(i, _)| i)?;
        let entry = self.entries.swap_remove(index);
        Some((entry.due, entry.transition))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn pops_in_deadline_then_insertion_order() {
        let start = Instant::now();
        let a = ToastId::new();
        let b = ToastId::new();
        let mut schedule = Schedule::default();
        schedule.push(start + Duration::from_millis(20), Transition::RemoveToast(a));
        schedule.push(start + Duration::from_millis(10), Transition::ShowToast(a));
        schedule.push(start + Duration::from_millis(10), Transition::ShowToast(b));

        let now = start + Duration::from_millis(30);
        assert_eq!(schedule.pop_due(now).map(|(_, t)| t), Some(Transition::ShowToast(a)));
        assert_eq!(schedule.pop_due(now).map(|(_, t)| t), Some(Transition::ShowToast(b)));
        assert_eq!(schedule.pop_due(now).map(|(_, t)| t), Some(Transition::RemoveToast(a)));
        assert!(schedule.pop_due(now).is_none());
        assert!(schedule.is_empty());
    }

    #[test]
    fn entries_in_the_future_are_not_popped() {
        let start = Instant::now();
        let mut schedule = Schedule::default();
        schedule.push(start + Duration::from_millis(300), Transition::HideDialog(Dialog::Modal));

        assert!(schedule.pop_due(start).is_none());
        assert_eq!(schedule.len(), 1);
    }

    #[test]
    fn cancel_only_touches_its_target() {
        let start = Instant::now();
        let a = ToastId::new();
        let b = ToastId::new();
        let mut schedule = Schedule::default();
        schedule.push(start, Transition::ShowToast(a));
        schedule.push(start, Transition::BeginToastExit(b));
        schedule.push(start, Transition::ShowDialog(Dialog::Modal));
        schedule.push(start, Transition::HideDialog(Dialog::Confirm));

        schedule.cancel_toast(a);
        schedule.cancel_dialog(Dialog::Confirm);

        assert_eq!(schedule.len(), 2);
        assert_eq!(schedule.pop_due(start).map(|(_, t)| t), Some(Transition::BeginToastExit(b)));
        assert_eq!(
            schedule.pop_due(start).map(|(_, t)| t),
            Some(Transition::ShowDialog(Dialog::Modal))
        );
    }
}
