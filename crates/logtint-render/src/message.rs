//! Field classification.
//!
//! [`ClassifiedMessage::classify`] splits a [`Record`] into the three
//! recognized top-level fields and a residual `data` bag. A recognized key only
//! counts when its value is a string; otherwise it stays in `data` with its
//! original value, so every key of the record ends up in exactly one place.

use serde_json::{Map, Value};

use crate::record::Record;
use crate::severity::{route, Channel};

/// Key holding the application name.
pub const APPLICATION_KEY: &str = "application";
/// Key holding the severity level.
pub const LEVEL_KEY: &str = "level";
/// Key holding the message text.
pub const MESSAGE_KEY: &str = "message";

/// A record with its known fields extracted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassifiedMessage {
    /// Value of `application`, when it is a string.
    pub application: Option<String>,
    /// Value of `level`, when it is a string.
    pub level: Option<String>,
    /// Value of `message`, when it is a string.
    pub message: Option<String>,
    /// Every other key, values unchanged.
    pub data: Map<String, Value>,
}

impl ClassifiedMessage {
    /// Splits a record into recognized fields and residual data.
    ///
    /// ```rust
    /// use logtint_render::{decode_line, ClassifiedMessage};
    ///
    /// let record = decode_line(r#"{"level":"info","message":7,"port":80}"#).unwrap();
    /// let msg = ClassifiedMessage::classify(record);
    ///
    /// assert_eq!(msg.level.as_deref(), Some("info"));
    /// assert_eq!(msg.message, None);
    /// assert_eq!(msg.data["message"], 7);
    /// assert_eq!(msg.data["port"], 80);
    /// ```
    pub fn classify(record: Record) -> Self {
        let mut msg = ClassifiedMessage::default();
        for (key, value) in record {
            let slot = match key.as_str() {
                APPLICATION_KEY => &mut msg.application,
                LEVEL_KEY => &mut msg.level,
                MESSAGE_KEY => &mut msg.message,
                _ => {
                    msg.data.insert(key, value);
                    continue;
                }
            };
            match value {
                Value::String(s) => *slot = Some(s),
                other => {
                    msg.data.insert(key, other);
                }
            }
        }
        msg
    }

    /// The channel this message routes to, if its level is recognized.
    pub fn channel(&self) -> Option<Channel> {
        route(self.level.as_deref())
    }
}

impl From<Record> for ClassifiedMessage {
    fn from(record: Record) -> Self {
        Self::classify(record)
    }
}
