// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`overlay`] - Iced rendering of toasts and dialogs
//! - [`styles`] - Centralized styling (buttons, cards, backdrop)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod overlay;
pub mod styles;
