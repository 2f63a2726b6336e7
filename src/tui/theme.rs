//! Terminal rendering of the registry's presentation tokens.

use ratatui::style::Color;

use crate::core::category::{ColorToken, IconToken};

pub fn color(token: ColorToken) -> Color {
    match token {
        ColorToken::Yellow => Color::Yellow,
        ColorToken::Rose => Color::LightRed,
        ColorToken::Cyan => Color::Cyan,
    }
}

/// Single-cell glyph for an icon token.
pub fn glyph(token: IconToken) -> &'static str {
    match token {
        IconToken::Trophy => "♛",
        IconToken::Star => "★",
        IconToken::Heart => "♥",
        IconToken::UserPlus => "+",
        IconToken::Flame => "✦",
        IconToken::MessageCircle => "✉",
    }
}
