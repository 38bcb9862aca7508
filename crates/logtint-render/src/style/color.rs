//! Color value parsing for channel themes.
//!
//! Supports:
//!
//! - Named colors: `red`, `green`, `blue`, etc. (8 ANSI colors, `gray`/`grey`)
//! - Bright variants: `bright_red`, `bright_green`, etc.
//! - 256-color palette: `0` through `255`
//! - RGB hex: `"#ff6b35"` or `"#fff"`, mapped to the nearest palette entry

use console::Color;

/// Parses a color from a YAML scalar.
pub(crate) fn parse_value(value: &serde_yaml::Value) -> Option<Color> {
    match value {
        serde_yaml::Value::String(s) => parse_str(s),
        serde_yaml::Value::Number(n) => {
            let index = n.as_u64().filter(|i| *i <= 255)?;
            Some(Color::Color256(index as u8))
        }
        _ => None,
    }
}

/// Parses a color from a string.
pub(crate) fn parse_str(s: &str) -> Option<Color> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }
    if let Ok(index) = s.parse::<u8>() {
        return Some(Color::Color256(index));
    }
    parse_named(s)
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    let (r, g, b) = match hex.len() {
        // #rgb -> #rrggbb
        3 => (channel(0..1)? * 17, channel(1..2)? * 17, channel(2..3)? * 17),
        6 => (channel(0..2)?, channel(2..4)?, channel(4..6)?),
        _ => return None,
    };
    Some(Color::Color256(rgb_to_ansi256((r, g, b))))
}

fn parse_named(name: &str) -> Option<Color> {
    let name = name.to_lowercase();
    if let Some(base) = name.strip_prefix("bright_") {
        // console has no bright variants of `Color`; palette 8-15 are the bright ANSI colors.
        let index = match base {
            "black" => 8,
            "red" => 9,
            "green" => 10,
            "yellow" => 11,
            "blue" => 12,
            "magenta" => 13,
            "cyan" => 14,
            "white" => 15,
            _ => return None,
        };
        return Some(Color::Color256(index));
    }
    let color = match name.as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" | "gray" | "grey" => Color::White,
        _ => return None,
    };
    Some(color)
}

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Value;

    #[test]
    fn test_named_colors() {
        assert_eq!(parse_str("red"), Some(Color::Red));
        assert_eq!(parse_str("Cyan"), Some(Color::Cyan));
        assert_eq!(parse_str("grey"), Some(Color::White));
        assert_eq!(parse_str("orange"), None);
    }

    #[test]
    fn test_bright_colors() {
        assert_eq!(parse_str("bright_red"), Some(Color::Color256(9)));
        assert_eq!(parse_str("bright_white"), Some(Color::Color256(15)));
        assert_eq!(parse_str("bright_orange"), None);
    }

    #[test]
    fn test_palette_index() {
        assert_eq!(parse_str("208"), Some(Color::Color256(208)));
        assert_eq!(parse_value(&Value::Number(42.into())), Some(Color::Color256(42)));
        assert_eq!(parse_value(&Value::Number(256.into())), None);
        assert_eq!(parse_str("256"), None);
    }

    #[test]
    fn test_hex() {
        assert_eq!(parse_str("#ff0000"), Some(Color::Color256(196)));
        assert_eq!(parse_str("#0f0"), Some(Color::Color256(46)));
        assert_eq!(parse_str("#000000"), Some(Color::Color256(16)));
        assert_eq!(parse_str("#12"), None);
        assert_eq!(parse_str("#gggggg"), None);
    }

    #[test]
    fn test_non_scalar_values() {
        assert_eq!(parse_value(&Value::Bool(true)), None);
        assert_eq!(parse_value(&Value::Null), None);
    }

    #[test]
    fn test_rgb_to_ansi256_grayscale() {
        assert_eq!(rgb_to_ansi256((0, 0, 0)), 16);
        assert_eq!(rgb_to_ansi256((255, 255, 255)), 231);
        let mid = rgb_to_ansi256((128, 128, 128));
        assert!((232..=255).contains(&mid));
    }
}
