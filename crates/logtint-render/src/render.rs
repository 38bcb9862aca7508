//! Text rendering of classified messages.
//!
//! Rendering is pure: [`render_message`] returns the text and never touches
//! an output stream. [`write_message`] hands that text to a channel's
//! [`Printer`].
//!
//! # Format
//!
//! ```text
//! application : svc
//! level : info
//! message : user logged in
//! data :
//!   attempts : 3
//!   user :
//!     id : 1
//!     name : a
//! ```
//!
//! Recognized fields appear only when present. The `data :` header is always
//! written. Nested objects become blocks headed by their key, one [`INDENT`]
//! deeper per level. Keys within a block are sorted.

use std::fmt::Write as _;
use std::io;

use serde_json::{Map, Value};

use crate::message::{ClassifiedMessage, APPLICATION_KEY, LEVEL_KEY, MESSAGE_KEY};
use crate::style::Printer;

/// Indentation added per nesting level.
pub const INDENT: &str = "  ";

/// Header line for the residual data block.
pub const DATA_KEY: &str = "data";

/// Renders a classified message to text. Every line ends in `\n`.
///
/// ```rust
/// use logtint_render::{decode_line, render_message, ClassifiedMessage};
///
/// let record = decode_line(r#"{"level":"info","user":{"id":1,"name":"a"}}"#).unwrap();
/// let text = render_message(&ClassifiedMessage::classify(record));
///
/// assert_eq!(text, "level : info\ndata :\n  user :\n    id : 1\n    name : a\n");
/// ```
pub fn render_message(msg: &ClassifiedMessage) -> String {
    let mut out = String::new();
    for (key, value) in [
        (APPLICATION_KEY, &msg.application),
        (LEVEL_KEY, &msg.level),
        (MESSAGE_KEY, &msg.message),
    ] {
        if let Some(value) = value {
            push_line(&mut out, 0, key, Some(value.as_str()));
        }
    }
    push_line(&mut out, 0, DATA_KEY, None);
    render_block(&mut out, &msg.data, 1);
    out
}

/// Renders the entries of `map` at the given depth, recursing into objects.
pub fn render_block(out: &mut String, map: &Map<String, Value>, depth: usize) {
    let mut entries: Vec<_> = map.iter().collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

    for (key, value) in entries {
        match value {
            Value::Object(nested) => {
                push_line(out, depth, key, None);
                render_block(out, nested, depth + 1);
            }
            scalar => push_line(out, depth, key, Some(format_scalar(scalar).as_str())),
        }
    }
}

/// Formats a non-object value for a `key : value` line.
///
/// Strings are written verbatim, `null` as `null`, and arrays (plus anything
/// nested inside them) as compact JSON.
pub fn format_scalar(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Renders `msg` and passes it to `printer`, followed by a separate `"\n"`.
pub fn write_message<W: io::Write + ?Sized>(
    msg: &ClassifiedMessage,
    printer: &Printer,
    out: &mut W,
) -> io::Result<()> {
    printer.print(out, &render_message(msg))?;
    printer.print(out, "\n")
}

fn push_line(out: &mut String, depth: usize, key: &str, value: Option<&str>) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    // Writing into a String cannot fail.
    let _ = match value {
        Some(value) => writeln!(out, "{key} : {value}"),
        None => writeln!(out, "{key} :"),
    };
}
