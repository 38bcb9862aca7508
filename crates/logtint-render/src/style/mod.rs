//! Channel styling: color parsing, themes, and the output style binding.
//!
//! - [`ChannelTheme`]: one `console::Style` per channel, optionally from YAML
//! - [`StyleBinding`]: the channel → [`Printer`] mapping fixed at startup

mod binding;
mod color;
mod theme;

pub use binding::{Printer, StyleBinding};
pub use theme::ChannelTheme;
