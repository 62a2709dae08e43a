// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! Translations are embedded from `assets/i18n/*.ftl` (English and Turkish).
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Runtime language switching
//! - Visible `MISSING:` marker when a key has no translation

pub mod fluent;
