// SPDX-License-Identifier: MPL-2.0
//! Severity levels and their visual presentation.
//!
//! Every severity maps to one icon, one accent color and one header gradient.
//! Unknown severity names fall back to [`Severity::Info`] so a typo in a
//! caller never turns into a missing notice.

use crate::ui::design_tokens::palette;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification of a notice, driving icon, colors and default duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Operation completed successfully.
    Success,
    /// Something failed; the only severity that blocks by default.
    Error,
    /// Something needs attention but nothing failed.
    Warning,
    /// Plain information.
    #[default]
    Info,
}

/// Icon and colors used to draw a notice of a given severity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Presentation {
    /// Icon identifier, kept identical to the web stylesheet class names.
    pub icon_name: &'static str,
    /// Glyph drawn in place of the icon font.
    pub glyph: char,
    /// Solid accent used for toast borders and buttons.
    pub accent: Color,
    /// Header background, drawn as a 135° linear gradient from `.0` to `.1`.
    pub gradient: (Color, Color),
}

static SUCCESS: Presentation = Presentation {
    icon_name: "fa-check-circle",
    glyph: '✔',
    accent: palette::SUCCESS_500,
    gradient: (palette::SUCCESS_500, palette::SUCCESS_300),
};

static ERROR: Presentation = Presentation {
    icon_name: "fa-exclamation-circle",
    glyph: '✖',
    accent: palette::ERROR_500,
    gradient: (palette::ERROR_500, palette::ERROR_600),
};

static WARNING: Presentation = Presentation {
    icon_name: "fa-exclamation-triangle",
    glyph: '⚠',
    accent: palette::WARNING_500,
    gradient: (palette::WARNING_500, palette::WARNING_600),
};

static INFO: Presentation = Presentation {
    icon_name: "fa-info-circle",
    glyph: 'ℹ',
    accent: palette::INFO_500,
    gradient: (palette::INDIGO_400, palette::PURPLE_500),
};

impl Severity {
    /// All severities, in display order.
    pub const ALL: [Severity; 4] = [
        Severity::Success,
        Severity::Error,
        Severity::Warning,
        Severity::Info,
    ];

    /// Parses a severity name, falling back to `Info` for anything unknown.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => Severity::Success,
            "error" => Severity::Error,
            "warning" => Severity::Warning,
            _ => Severity::Info,
        }
    }

    /// Lowercase name, as used in stylesheet classes and config files.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }

    /// Returns the icon and colors for this severity.
    #[must_use]
    pub fn presentation(self) -> &'static Presentation {
        match self {
            Severity::Success => &SUCCESS,
            Severity::Error => &ERROR,
            Severity::Warning => &WARNING,
            Severity::Info => &INFO,
        }
    }

    /// Whether the convenience helpers open a modal for this severity
    /// when the caller does not say otherwise.
    #[must_use]
    pub fn prefers_modal(self) -> bool {
        matches!(self, Severity::Error)
    }

    /// i18n key of the title used by the convenience helpers.
    #[must_use]
    pub fn title_key(self) -> &'static str {
        match self {
            Severity::Success => "notice-title-success",
            Severity::Error => "notice-title-error",
            Severity::Warning => "notice-title-warning",
            Severity::Info => "notice-title-info",
        }
    }
}

impl FromStr for Severity {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl From<&str> for Severity {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
