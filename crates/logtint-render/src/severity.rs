//! Severity channels and level routing.
//!
//! Every rendered record goes out through exactly one [`Channel`]. The mapping
//! from a record's `level` string is a fixed, case-sensitive table:
//!
//! | level                | channel              |
//! |----------------------|----------------------|
//! | `error`, `fatal`     | [`Channel::Error`]   |
//! | `warn`, `warning`    | [`Channel::Warning`] |
//! | `info`               | [`Channel::Info`]    |
//! | `debug`              | [`Channel::Debug`]   |
//!
//! Any other value, and a missing level, routes nowhere and the record is
//! dropped.

use std::fmt;

/// One of the four output channels, each bound to its own display style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Channel {
    /// `error` and `fatal` records.
    Error,
    /// `warn` and `warning` records.
    Warning,
    /// `info` records.
    Info,
    /// `debug` records.
    Debug,
}

impl Channel {
    /// All channels, in severity order.
    pub const ALL: [Channel; 4] = [
        Channel::Error,
        Channel::Warning,
        Channel::Info,
        Channel::Debug,
    ];

    /// Maps a level string to its channel.
    ///
    /// Matching is exact: `"ERROR"` or `" info"` route nowhere.
    ///
    /// ```rust
    /// use logtint_render::Channel;
    ///
    /// assert_eq!(Channel::from_level("fatal"), Some(Channel::Error));
    /// assert_eq!(Channel::from_level("warn"), Some(Channel::Warning));
    /// assert_eq!(Channel::from_level("Info"), None);
    /// assert_eq!(Channel::from_level("trace"), None);
    /// ```
    pub fn from_level(level: &str) -> Option<Self> {
        match level {
            "error" | "fatal" => Some(Channel::Error),
            "warn" | "warning" => Some(Channel::Warning),
            "info" => Some(Channel::Info),
            "debug" => Some(Channel::Debug),
            _ => None,
        }
    }

    /// Channel name as used in theme files.
    pub fn name(&self) -> &'static str {
        match self {
            Channel::Error => "error",
            Channel::Warning => "warning",
            Channel::Info => "info",
            Channel::Debug => "debug",
        }
    }

    /// Looks a channel up by its [`name`](Channel::name).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Routes an optional level to a channel. A missing level routes nowhere.
pub fn route(level: Option<&str>) -> Option<Channel> {
    level.and_then(Channel::from_level)
}
