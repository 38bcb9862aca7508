//! Per-channel display styles.
//!
//! A [`ChannelTheme`] assigns one [`console::Style`] to each [`Channel`]. The
//! default theme colors the whole record by severity. Themes can also be
//! loaded from YAML, where each key is a channel name:
//!
//! ```yaml
//! # Shorthand: foreground color only
//! info: cyan
//!
//! # Full form
//! error:
//!   fg: bright_red
//!   bold: true
//! debug:
//!   fg: 244
//!   dim: true
//! ```
//!
//! Channels not named in the file keep their default style.

use std::path::Path;

use console::Style;
use serde_yaml::{Mapping, Value};

use super::color;
use crate::error::ThemeError;
use crate::severity::Channel;

/// One display style per severity channel.
#[derive(Debug, Clone)]
pub struct ChannelTheme {
    styles: [Style; 4],
}

impl Default for ChannelTheme {
    fn default() -> Self {
        Self {
            styles: [
                Style::new().red().bright(),
                Style::new().yellow().bright(),
                Style::new().green().bright(),
                Style::new().white(),
            ],
        }
    }
}

impl ChannelTheme {
    /// Returns the style bound to `channel`.
    pub fn style(&self, channel: Channel) -> &Style {
        &self.styles[channel.index()]
    }

    /// Replaces the style for `channel`.
    pub fn with(mut self, channel: Channel, style: Style) -> Self {
        self.styles[channel.index()] = style;
        self
    }

    /// Parses a theme from YAML, starting from the default theme.
    ///
    /// ```rust
    /// use logtint_render::{Channel, ChannelTheme};
    ///
    /// let theme = ChannelTheme::from_yaml("info: cyan\nerror: { fg: red, bold: true }").unwrap();
    /// assert_eq!(
    ///     theme.style(Channel::Info).apply_to("x").force_styling(true).to_string(),
    ///     "\u{1b}[36mx\u{1b}[0m"
    /// );
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self, ThemeError> {
        Self::parse(yaml, None)
    }

    /// Reads and parses a YAML theme file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| ThemeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&yaml, Some(path))
    }

    fn parse(yaml: &str, path: Option<&Path>) -> Result<Self, ThemeError> {
        let parse_error = |message: String| ThemeError::Parse {
            path: path.map(Path::to_path_buf),
            message,
        };
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let root: Value = serde_yaml::from_str(yaml).map_err(|e| parse_error(e.to_string()))?;
        let entries = match root {
            // A document holding only comments or `~`.
            Value::Null => return Ok(Self::default()),
            Value::Mapping(entries) => entries,
            _ => return Err(parse_error("expected a mapping of channel names".into())),
        };

        let mut theme = Self::default();
        for (key, value) in &entries {
            let name = key
                .as_str()
                .ok_or_else(|| parse_error(format!("non-string key {key:?}")))?;
            let channel =
                Channel::from_name(name).ok_or_else(|| ThemeError::UnknownChannel(name.into()))?;
            theme.styles[channel.index()] = parse_style(name, value)?;
        }
        Ok(theme)
    }
}

fn parse_style(channel: &str, value: &Value) -> Result<Style, ThemeError> {
    match value {
        Value::String(_) | Value::Number(_) => {
            let fg = parse_color(channel, value)?;
            Ok(Style::new().fg(fg))
        }
        Value::Mapping(attrs) => parse_attributes(channel, attrs),
        _ => Err(ThemeError::InvalidDefinition {
            channel: channel.into(),
            message: "expected a color or a mapping of attributes".into(),
        }),
    }
}

fn parse_attributes(channel: &str, attrs: &Mapping) -> Result<Style, ThemeError> {
    let mut style = Style::new();
    for (key, value) in attrs {
        let attribute = key.as_str().unwrap_or_default();
        style = match attribute {
            "fg" => style.fg(parse_color(channel, value)?),
            "bg" => style.bg(parse_color(channel, value)?),
            "bold" | "dim" | "italic" | "underline" => {
                let enabled = value.as_bool().ok_or_else(|| ThemeError::InvalidDefinition {
                    channel: channel.into(),
                    message: format!("'{attribute}' must be true or false"),
                })?;
                match (attribute, enabled) {
                    (_, false) => style,
                    ("bold", true) => style.bold(),
                    ("dim", true) => style.dim(),
                    ("italic", true) => style.italic(),
                    _ => style.underlined(),
                }
            }
            _ => {
                return Err(ThemeError::UnknownAttribute {
                    channel: channel.into(),
                    attribute: key
                        .as_str()
                        .map(str::to_owned)
                        .unwrap_or_else(|| format!("{key:?}")),
                })
            }
        };
    }
    Ok(style)
}

fn parse_color(channel: &str, value: &Value) -> Result<console::Color, ThemeError> {
    color::parse_value(value).ok_or_else(|| ThemeError::InvalidColor {
        channel: channel.into(),
        value: match value {
            Value::String(s) => s.clone(),
            other => format!("{other:?}"),
        },
    })
}
