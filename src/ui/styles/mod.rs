// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the overlay and the demo screen.

pub mod button;
pub mod overlay;
