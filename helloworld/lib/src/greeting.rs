//! The greeting entity and the `greet` operation.
//!
//! A [`Greeting`] is built once per invocation from an optional name,
//! rendered, written out and then dropped. Nothing is persisted.
//!
//! ## Examples
//!
//! ```
//! use helloworld::greeting::{greet, Greeting};
//!
//! assert_eq!(greet(Some("Alice")), "Hello, Alice!");
//! assert_eq!(greet(Some("")), "Hello, World!");
//!
//! let greeting = Greeting::new(None);
//! assert_eq!(greeting.recipient(), "World");
//! assert_eq!(greeting.to_string(), "Hello, World!");
//! ```

use std::fmt;

use serde::Serialize;

use crate::styling::{accent, bold};
use crate::terminal::Terminal;

/// The recipient used when no name (or an empty name) is given.
pub const DEFAULT_RECIPIENT: &str = "World";

const PREFIX: &str = "Hello, ";
const SUFFIX: &str = "!";

/// A greeting addressed to a single recipient.
///
/// `rendered_text` always contains `recipient` as a substring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Greeting {
    /// Who is being greeted
    recipient: String,
    /// The plain (unstyled) output text
    rendered_text: String,
}

impl Greeting {
    /// Builds a greeting for `name`.
    ///
    /// `None` and `Some("")` both fall back to [`DEFAULT_RECIPIENT`]. Any
    /// other value, whitespace included, is used verbatim.
    pub fn new(name: Option<&str>) -> Greeting {
        let recipient = match name {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => DEFAULT_RECIPIENT.to_string(),
        };
        let rendered_text = format!("{PREFIX}{recipient}{SUFFIX}");

        tracing::debug!(%recipient, "Built greeting");

        Greeting {
            recipient,
            rendered_text,
        }
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn rendered_text(&self) -> &str {
        &self.rendered_text
    }

    /// The greeting styled for `terminal`.
    ///
    /// The whole line is bold and the recipient carries the accent color,
    /// each only when the terminal supports it. A terminal which does no
    /// styling gets exactly [`Greeting::rendered_text`].
    pub fn styled(&self, terminal: &Terminal) -> String {
        if !terminal.does_styling() {
            return self.rendered_text.clone();
        }

        let recipient = accent(self.recipient.as_str(), Some(*terminal));
        bold(format!("{PREFIX}{recipient}{SUFFIX}"), Some(*terminal))
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered_text)
    }
}

/// Returns `"Hello, <name>!"`, greeting the [`DEFAULT_RECIPIENT`] when
/// `name` is absent or empty.
pub fn greet(name: Option<&str>) -> String {
    Greeting::new(name).rendered_text
}
