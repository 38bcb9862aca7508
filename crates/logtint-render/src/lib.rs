//! # Logtint Render - Severity-Styled Log Record Rendering
//!
//! `logtint-render` is the core of `logtint`: it turns one line of JSON into a
//! readable, severity-colored block of text.
//!
//! ## Pipeline
//!
//! ```text
//! line ─▶ decode_line ─▶ ClassifiedMessage::classify ─▶ Channel (route)
//!                                    │                        │
//!                                    ▼                        ▼
//!                             render_message ─────▶ StyleBinding::printer
//! ```
//!
//! - [`decode_line`]: one line of text to a [`Record`], or a [`DecodeError`]
//! - [`ClassifiedMessage`]: `application`, `level`, `message` plus residual `data`
//! - [`Channel`]: error / warning / info / debug, chosen from the level
//! - [`render_message`]: pure text rendering with nested, indented blocks
//! - [`StyleBinding`]: styled or plain [`Printer`] per channel, fixed at startup
//!
//! ## Quick Start
//!
//! ```rust
//! use logtint_render::{decode_line, write_message, ChannelTheme, ClassifiedMessage, StyleBinding};
//!
//! let binding = StyleBinding::select(false, &ChannelTheme::default());
//! let record = decode_line(r#"{"level":"error","message":"boom","application":"svc"}"#).unwrap();
//! let msg = ClassifiedMessage::classify(record);
//!
//! let mut out = Vec::new();
//! if let Some(channel) = msg.channel() {
//!     write_message(&msg, binding.printer(channel), &mut out).unwrap();
//! }
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "application : svc\nlevel : error\nmessage : boom\ndata :\n\n"
//! );
//! ```

mod error;
pub mod message;
pub mod record;
pub mod render;
pub mod severity;
pub mod style;

pub use error::{DecodeError, ThemeError};
pub use message::{ClassifiedMessage, APPLICATION_KEY, LEVEL_KEY, MESSAGE_KEY};
pub use record::{decode_line, kind_of, Record};
pub use render::{format_scalar, render_block, render_message, write_message, DATA_KEY, INDENT};
pub use severity::{route, Channel};
pub use style::{ChannelTheme, Printer, StyleBinding};
