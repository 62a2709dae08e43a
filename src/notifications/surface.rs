// SPDX-License-Identifier: MPL-2.0
//! Rendering interface between the notification state machine and a UI.
//!
//! The manager decides *when* things appear and disappear; a [`Surface`]
//! only applies the resulting node operations. Two states are kept apart:
//! *displayed* (the node takes part in layout) and *shown* (its entrance
//! transition has been applied).

use super::notice::{NoticeContent, ToastId};

/// Top-level overlay containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Container {
    ToastStack,
    Modal,
    Confirm,
}

impl Container {
    pub const ALL: [Container; 3] = [Container::ToastStack, Container::Modal, Container::Confirm];
}

/// The two singleton dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialog {
    /// Informational modal.
    Modal,
    /// Yes/no confirmation modal.
    Confirm,
}

impl Dialog {
    /// Container hosting this dialog.
    #[must_use]
    pub fn container(self) -> Container {
        match self {
            Dialog::Modal => Container::Modal,
            Dialog::Confirm => Container::Confirm,
        }
    }
}

/// A node whose visibility can be toggled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Node {
    Toast(ToastId),
    Dialog(Dialog),
}

/// Minimal set of node operations the manager needs from a UI.
///
/// Implementations must tolerate operations on nodes they do not know
/// (e.g. removing a toast twice) by ignoring them.
pub trait Surface {
    /// Whether `container` exists.
    fn is_mounted(&self, container: Container) -> bool;

    /// Creates `container`. Only called when it is not mounted yet.
    fn mount(&mut self, container: Container);

    /// Appends a toast node at the end of the stack, not shown.
    fn insert_toast(&mut self, id: ToastId, content: &NoticeContent);

    /// Removes a toast node.
    fn remove_toast(&mut self, id: ToastId);

    /// Replaces the title, message and severity styling of a dialog.
    fn fill_dialog(&mut self, dialog: Dialog, content: &NoticeContent);

    /// Puts a node in or out of layout.
    fn set_displayed(&mut self, node: Node, displayed: bool);

    /// Applies or removes the entrance-transition state of a node.
    fn set_shown(&mut self, node: Node, shown: bool);
}
