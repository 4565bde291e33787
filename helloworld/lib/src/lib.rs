//! # helloworld
//!
//! Say hello! A tiny greeting library with terminal-aware styling.
//!
//! The crate provides:
//!
//! - **Greeting**: turns an optional name into `"Hello, <name>!"`
//! - **Terminal Detection**: decides whether stdout can be styled (TTY,
//!   `NO_COLOR`, `CLICOLOR_FORCE`, terminfo bold and color support)
//! - **Styling**: bold and accent-color helpers which degrade to plain text
//!
//! ## Quick Start
//!
//! ```
//! use helloworld::{greet, Greeting};
//! use helloworld::terminal::Terminal;
//!
//! assert_eq!(greet(Some("Alice")), "Hello, Alice!");
//! assert_eq!(greet(None), "Hello, World!");
//!
//! // a plain terminal never emits escape codes
//! let greeting = Greeting::new(Some("Bob"));
//! assert_eq!(greeting.styled(&Terminal::plain()), "Hello, Bob!");
//! ```
//!
//! ## Modules
//!
//! - [`greeting`] - the `Greeting` entity and the `greet` operation
//! - [`terminal`] - `Terminal` capabilities and detection functions
//! - [`styling`] - escape-code helpers gated on terminal capabilities

mod error;
pub mod greeting;
pub mod styling;
pub mod terminal;

pub use error::DetectionError;
pub use greeting::{greet, Greeting, DEFAULT_RECIPIENT};
