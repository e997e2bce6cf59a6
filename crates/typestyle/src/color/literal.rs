//! Literal color token parsing.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::Color;

/// Error returned when a string is not a recognized color token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseColorError {
    #[error("invalid hex color '{0}'")]
    InvalidHex(String),
    #[error("invalid color function '{0}'")]
    InvalidFunction(String),
    #[error("unknown color '{0}'")]
    Unknown(String),
}

static KEYWORDS: Lazy<HashMap<&'static str, Color>> = Lazy::new(|| {
    HashMap::from([
        ("black", Color::rgb(0, 0, 0)),
        ("white", Color::rgb(255, 255, 255)),
        ("red", Color::rgb(255, 0, 0)),
        ("green", Color::rgb(0, 255, 0)),
        ("blue", Color::rgb(0, 0, 255)),
        ("cyan", Color::rgb(0, 255, 255)),
        ("yellow", Color::rgb(255, 255, 0)),
        ("magenta", Color::rgb(255, 0, 255)),
        ("orange", Color::rgb(255, 128, 0)),
        ("purple", Color::rgb(128, 0, 128)),
        ("brown", Color::rgb(153, 102, 51)),
        ("gray", Color::rgb(128, 128, 128)),
        ("grey", Color::rgb(128, 128, 128)),
        ("light-gray", Color::rgb(170, 170, 170)),
        ("light-grey", Color::rgb(170, 170, 170)),
        ("dark-gray", Color::rgb(85, 85, 85)),
        ("dark-grey", Color::rgb(85, 85, 85)),
        ("clear", Color::rgba(0, 0, 0, 0)),
    ])
});

pub(crate) fn parse_color(input: &str) -> Result<Color, ParseColorError> {
    let token = input.trim().to_ascii_lowercase();

    if let Some(hex) = token.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| ParseColorError::InvalidHex(input.to_string()));
    }

    if let Some(args) = function_args(&token, "rgba") {
        return parse_components(args, true)
            .ok_or_else(|| ParseColorError::InvalidFunction(input.to_string()));
    }

    if let Some(args) = function_args(&token, "rgb") {
        return parse_components(args, false)
            .ok_or_else(|| ParseColorError::InvalidFunction(input.to_string()));
    }

    KEYWORDS
        .get(token.as_str())
        .copied()
        .ok_or_else(|| ParseColorError::Unknown(input.to_string()))
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        3 => {
            let mut digits = hex.chars().map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
            let r = digits.next()??;
            let g = digits.next()??;
            let b = digits.next()??;
            Some(Color::rgb(r, g, b))
        }
        6 => Some(Color::rgb(channel(0)?, channel(2)?, channel(4)?)),
        8 => Some(Color::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
        _ => None,
    }
}

/// Returns the text between `name(` and the closing `)`.
fn function_args<'a>(token: &'a str, name: &str) -> Option<&'a str> {
    token
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_components(args: &str, with_alpha: bool) -> Option<Color> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return None;
    }

    let channel = |s: &str| -> Option<u8> {
        let value: f32 = s.parse().ok()?;
        (0.0..=255.0).contains(&value).then(|| value.round() as u8)
    };

    let r = channel(parts[0])?;
    let g = channel(parts[1])?;
    let b = channel(parts[2])?;

    let a = if with_alpha {
        let alpha: f32 = parts[3].parse().ok()?;
        if !(0.0..=1.0).contains(&alpha) {
            return None;
        }
        (alpha * 255.0).round() as u8
    } else {
        255
    };

    Some(Color::rgba(r, g, b, a))
}
