// SPDX-License-Identifier: MPL-2.0
//! Styles for the notice overlay: toast cards, dialog cards and the backdrop.
//!
//! Nodes that are displayed but not yet in their shown state are drawn at
//! [`opacity::HIDDEN_NODE`]; that is the visible half of the entrance and
//! exit transitions.

use crate::notifications::Presentation;
use crate::ui::design_tokens::{
    border, opacity,
    palette::{BLACK, WHITE},
    radius, shadow,
};
use iced::gradient::Linear;
use iced::widget::container;
use iced::{Background, Border, Color, Radians, Shadow, Theme};

/// Direction of the dialog header gradient (135deg in CSS terms).
const HEADER_GRADIENT_ANGLE: Radians = Radians(3.0 * std::f32::consts::FRAC_PI_4);

/// Applies the transition opacity of a node to `color`.
#[must_use]
pub fn faded(color: Color, shown: bool) -> Color {
    if shown {
        color
    } else {
        Color {
            a: color.a * opacity::HIDDEN_NODE,
            ..color
        }
    }
}

fn faded_shadow(base: Shadow, shown: bool) -> Shadow {
    Shadow {
        color: faded(base.color, shown),
        ..base
    }
}

/// Dimmed full-window backdrop behind a dialog.
pub fn backdrop(shown: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(faded(
            Color {
                a: opacity::BACKDROP,
                ..BLACK
            },
            shown,
        ))),
        ..Default::default()
    }
}

/// Toast card with a border in the severity accent.
pub fn toast_card(accent: Color, shown: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let bg_color = theme.extended_palette().background.base.color;

        container::Style {
            background: Some(Background::Color(faded(bg_color, shown))),
            border: Border {
                color: faded(accent, shown),
                width: border::WIDTH_MD,
                radius: radius::MD.into(),
            },
            shadow: faded_shadow(shadow::MD, shown),
            text_color: Some(faded(theme.palette().text, shown)),
            ..Default::default()
        }
    }
}

/// Dialog card body.
pub fn dialog_card(shown: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let bg_color = theme.extended_palette().background.base.color;

        container::Style {
            background: Some(Background::Color(faded(bg_color, shown))),
            border: Border {
                radius: radius::LG.into(),
                ..Default::default()
            },
            shadow: faded_shadow(shadow::LG, shown),
            text_color: Some(faded(theme.palette().text, shown)),
            ..Default::default()
        }
    }
}

/// Dialog header filled with the severity gradient.
pub fn dialog_header(
    presentation: &'static Presentation,
    shown: bool,
) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let (from, to) = presentation.gradient;
        let gradient = Linear::new(HEADER_GRADIENT_ANGLE)
            .add_stop(0.0, faded(from, shown))
            .add_stop(1.0, faded(to, shown));

        container::Style {
            background: Some(Background::Gradient(gradient.into())),
            border: Border {
                radius: radius::LG.into(),
                ..Default::default()
            },
            text_color: Some(faded(WHITE, shown)),
            ..Default::default()
        }
    }
}
