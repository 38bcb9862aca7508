//! The startup-fixed mapping from channel to print behavior.

use std::io;

use console::Style;

use super::theme::ChannelTheme;
use crate::severity::Channel;

/// Writes rendered text for one channel.
#[derive(Debug, Clone)]
pub enum Printer {
    /// Wraps text in the style's ANSI codes.
    Styled(Style),
    /// Writes text unchanged.
    Plain,
}

impl Printer {
    /// Writes `text` to `out`.
    ///
    /// Styling is forced on, so the output does not depend on console's
    /// global color detection; whether to color at all was decided when the
    /// binding was built.
    pub fn print<W: io::Write + ?Sized>(&self, out: &mut W, text: &str) -> io::Result<()> {
        match self {
            Printer::Styled(style) => write!(out, "{}", style.apply_to(text).force_styling(true)),
            Printer::Plain => out.write_all(text.as_bytes()),
        }
    }
}

/// One [`Printer`] per [`Channel`], selected once from the color signal.
///
/// ```rust
/// use logtint_render::{Channel, ChannelTheme, StyleBinding};
///
/// let binding = StyleBinding::select(false, &ChannelTheme::default());
/// let mut out = Vec::new();
/// binding.printer(Channel::Error).print(&mut out, "boom").unwrap();
/// assert_eq!(out, b"boom");
/// ```
#[derive(Debug, Clone)]
pub struct StyleBinding {
    printers: [Printer; 4],
}

impl StyleBinding {
    /// Builds the binding: styled printers from `theme` when `supports_color`
    /// is set, plain printers otherwise.
    pub fn select(supports_color: bool, theme: &ChannelTheme) -> Self {
        if supports_color {
            Self::styled(theme)
        } else {
            Self::plain()
        }
    }

    /// Every channel styled from `theme`.
    pub fn styled(theme: &ChannelTheme) -> Self {
        Self {
            printers: Channel::ALL.map(|channel| Printer::Styled(theme.style(channel).clone())),
        }
    }

    /// Every channel plain.
    pub fn plain() -> Self {
        Self {
            printers: [Printer::Plain, Printer::Plain, Printer::Plain, Printer::Plain],
        }
    }

    /// The printer bound to `channel`.
    pub fn printer(&self, channel: Channel) -> &Printer {
        &self.printers[channel.index()]
    }

    /// Whether this binding emits ANSI styling.
    pub fn is_styled(&self) -> bool {
        self.printers
            .iter()
            .any(|printer| matches!(printer, Printer::Styled(_)))
    }
}
