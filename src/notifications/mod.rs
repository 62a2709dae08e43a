// SPDX-License-Identifier: MPL-2.0
//! User-facing notices: toasts, an informational modal and a confirmation
//! modal.
//!
//! # Architecture
//!
//! - [`Manager`] owns all notice state and schedules transitions
//! - [`Surface`] is where the manager's decisions are applied; the iced
//!   implementation lives in [`crate::ui::overlay`]
//! - [`Clock`] supplies time, so tests can drive transitions by hand
//! - [`Confirmation`] is the future returned by [`Manager::confirm`]
//!
//! # Usage
//!
//! ```ignore
//! let mut manager = Manager::new(OverlaySurface::default());
//! manager.init();
//!
//! manager.success("Record saved");
//! manager.error("Could not reach the server");
//!
//! let answer = manager.confirm("Delete ACME Ltd.?", None, Severity::Warning);
//! // Await `answer`, e.g. through `Task::perform`.
//! ```

mod clock;
mod confirm;
mod labels;
mod manager;
mod notice;
mod schedule;
mod severity;
mod surface;

pub use clock::{Clock, ManualClock, SystemClock};
pub use confirm::Confirmation;
pub use labels::Labels;
pub use manager::{DialogState, Manager, Message, Settings};
pub use notice::{Delivery, NoticeContent, Toast, ToastId, ToastPhase};
pub use severity::{Presentation, Severity};
pub use surface::{Container, Dialog, Node, Surface};
