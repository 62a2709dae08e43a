// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filled button in the accent color of a severity (confirm, OK).
pub fn accent(color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (background, shadow) = match status {
            button::Status::Hovered => (lighten(color), shadow::MD),
            button::Status::Disabled => (palette::GRAY_400, shadow::NONE),
            button::Status::Active | button::Status::Pressed => (color, shadow::SM),
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: WHITE,
            border: Border {
                color,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow,
            snap: true,
        }
    }
}

/// Secondary action (cancel). Adapts to light/dark theme.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let (bg_color, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, WHITE)
    };

    let background = match status {
        button::Status::Hovered if is_light => palette::GRAY_200,
        button::Status::Hovered => Color::from_rgb(0.35, 0.35, 0.35),
        _ => bg_color,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Borderless close glyph on toasts and dialog headers.
///
/// `text_color` is used as-is so the glyph stays readable on gradients.
pub fn dismiss(text_color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
            button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
            button::Status::Active | button::Status::Disabled => None,
        };

        button::Style {
            background: alpha.map(|a| {
                Background::Color(Color {
                    a,
                    ..palette::GRAY_400
                })
            }),
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

fn lighten(color: Color) -> Color {
    let mix = |c: f32| c + (1.0 - c) * 0.15;
    Color {
        r: mix(color.r),
        g: mix(color.g),
        b: mix(color.b),
        a: color.a,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_uses_given_color_when_active() {
        let style = accent(palette::ERROR_500)(&Theme::Dark, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::ERROR_500))
        );
        assert_eq!(style.text_color, WHITE);
    }

    #[test]
    fn accent_hover_is_lighter() {
        let style = accent(palette::ERROR_500)(&Theme::Dark, button::Status::Hovered);
        let Some(Background::Color(hover)) = style.background else {
            panic!("expected a solid background");
        };
        assert!(hover.r >= palette::ERROR_500.r);
        assert!(hover.g > palette::ERROR_500.g);
    }

    #[test]
    fn dismiss_is_transparent_until_hovered() {
        let style = dismiss(WHITE);
        assert!(style(&Theme::Light, button::Status::Active).background.is_none());
        assert!(style(&Theme::Light, button::Status::Hovered).background.is_some());
    }

    #[test]
    fn secondary_follows_theme() {
        let light = secondary(&Theme::Light, button::Status::Active);
        let dark = secondary(&Theme::Dark, button::Status::Active);
        assert_ne!(light.text_color, dark.text_color);
    }
}
