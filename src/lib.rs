// SPDX-License-Identifier: MPL-2.0
//! `notice_desk` is a toast and modal notification layer built with the Iced
//! GUI framework.
//!
//! It shows transient toasts, a blocking informational modal and a
//! confirmation modal whose answer is delivered as a future, with
//! Fluent-based localization and user-configurable timings.

#![doc(html_root_url = "https://docs.rs/notice_desk/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod notifications;
pub mod ui;
