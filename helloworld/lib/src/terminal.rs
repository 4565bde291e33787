//! Terminal capability detection.
//!
//! Decides whether the greeting written to stdout may carry escape codes.
//! Detection never fails from the caller's point of view: any problem
//! reading the terminal's capabilities degrades to plain text.
//!
//! ## Examples
//!
//! ```
//! use helloworld::terminal::{StyleMode, Terminal};
//!
//! let term = Terminal::with_mode(StyleMode::Never);
//! assert!(!term.does_styling());
//! ```

use std::env;
use std::io::IsTerminal;

use termini::{NumberCapability, StringCapability, TermInfo};

use crate::error::DetectionError;

/// How the caller wants styling decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleMode {
    /// style only when stdout is an interactive terminal
    #[default]
    Auto,
    /// style even when stdout is a pipe or file
    Always,
    /// never emit escape codes
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ColorDepth {
    /// no color support
    None,
    /// 8 colors
    Minimal,
    /// 16 colors (8 normal plus "bright" variants)
    Basic,
    /// 256 color palette (8 bit)
    Enhanced,
    /// 16 million colors (24 bit)
    TrueColor,
}

/// The styling capabilities of the terminal attached to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Terminal {
    /// Whether stdout is connected to a TTY.
    ///
    /// Informational only: styling is gated on `styling`, which already
    /// accounts for the TTY check (and for `StyleMode::Always` overriding it).
    pub is_tty: bool,
    /// Whether any escape codes should be written at all
    pub styling: bool,
    /// Whether the terminal can render **bold** text
    pub supports_bold: bool,
    pub color_depth: ColorDepth,
}

impl Default for Terminal {
    fn default() -> Terminal {
        Terminal::with_mode(StyleMode::Auto)
    }
}

impl Terminal {
    /// Detects the terminal's capabilities automatically.
    pub fn new() -> Terminal {
        Terminal::default()
    }

    /// A terminal which does no styling.
    pub fn plain() -> Terminal {
        plain_terminal(is_tty())
    }

    pub fn with_mode(mode: StyleMode) -> Terminal {
        match mode {
            StyleMode::Never => Terminal::plain(),
            StyleMode::Always => forced_terminal(),
            StyleMode::Auto => auto_terminal(),
        }
    }

    pub fn does_styling(&self) -> bool {
        self.styling
    }

    pub fn supports_color(&self) -> bool {
        self.styling && self.color_depth > ColorDepth::None
    }
}

fn forced_terminal() -> Terminal {
    let color_depth = match detect_capabilities() {
        Ok((_, depth)) => depth,
        Err(e) => {
            tracing::debug!(error = %e, "Styling forced without terminfo");
            ColorDepth::Basic
        }
    };

    Terminal {
        is_tty: is_tty(),
        styling: true,
        supports_bold: true,
        color_depth: color_depth.max(ColorDepth::Basic),
    }
}

fn auto_terminal() -> Terminal {
    if no_color() {
        tracing::info!(source = "NO_COLOR", "Styling disabled by environment");
        return Terminal::plain();
    }

    if clicolor_force() {
        tracing::info!(source = "CLICOLOR_FORCE", "Styling forced by environment");
        return forced_terminal();
    }

    terminal_for(is_tty())
}

/// Styling decision for auto mode once the environment overrides are ruled out.
fn terminal_for(is_tty: bool) -> Terminal {
    if !is_tty {
        tracing::info!(is_tty, "stdout is not a terminal, using plain text");
        return plain_terminal(is_tty);
    }

    match detect_capabilities() {
        Ok((supports_bold, color_depth)) => {
            let terminal = Terminal {
                is_tty,
                styling: supports_bold || color_depth > ColorDepth::None,
                supports_bold,
                color_depth,
            };
            tracing::info!(?terminal, "Detected terminal capabilities");
            terminal
        }
        Err(e) => {
            tracing::info!(
                error = %e,
                "Failed to detect terminal capabilities, falling back to plain text"
            );
            plain_terminal(is_tty)
        }
    }
}

fn plain_terminal(is_tty: bool) -> Terminal {
    Terminal {
        is_tty,
        styling: false,
        supports_bold: false,
        color_depth: ColorDepth::None,
    }
}

/// Whether stdout is connected to an interactive terminal.
pub fn is_tty() -> bool {
    std::io::stdout().is_terminal()
}

/// `NO_COLOR` set to any non-empty value disables styling.
///
/// See <https://no-color.org>.
pub fn no_color() -> bool {
    env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
}

/// `CLICOLOR_FORCE` set to anything but `0` (or empty) forces styling.
pub fn clicolor_force() -> bool {
    env::var("CLICOLOR_FORCE").is_ok_and(|v| !v.is_empty() && v != "0")
}

/// Queries terminfo for bold support and the color depth.
///
/// `COLORTERM=truecolor` (or `24bit`) takes precedence over the terminfo
/// color count, which is often stale for modern emulators.
///
/// ## Errors
///
/// - [`DetectionError::DumbTerminal`] when `TERM=dumb`
/// - [`DetectionError::TermInfo`] when no terminfo entry can be loaded
pub fn detect_capabilities() -> Result<(bool, ColorDepth), DetectionError> {
    let term = env::var("TERM").unwrap_or_default();
    if term == "dumb" {
        return Err(DetectionError::DumbTerminal);
    }

    let term_info = TermInfo::from_env().map_err(|e| DetectionError::TermInfo {
        reason: e.to_string(),
    })?;

    let supports_bold = term_info
        .utf8_string_cap(StringCapability::EnterBoldMode)
        .is_some();

    let color_depth = if colorterm_truecolor() {
        tracing::debug!(source = "COLORTERM", "Detected truecolor support");
        ColorDepth::TrueColor
    } else {
        let max_colors = term_info.number_cap(NumberCapability::MaxColors);
        let depth = depth_from_max_colors(max_colors);
        tracing::debug!(?max_colors, ?depth, source = "terminfo", "Detected color depth");
        depth
    };

    Ok((supports_bold, color_depth))
}

fn colorterm_truecolor() -> bool {
    env::var("COLORTERM")
        .map(|v| {
            let v = v.to_lowercase();
            v == "truecolor" || v == "24bit"
        })
        .unwrap_or(false)
}

/// A missing or negative `max_colors` means no color.
fn depth_from_max_colors(max_colors: Option<i32>) -> ColorDepth {
    let colors = max_colors.and_then(|n| u32::try_from(n).ok()).unwrap_or(0);
    depth_from_colors(colors)
}

fn depth_from_colors(colors: u32) -> ColorDepth {
    match colors {
        c if c >= 16_777_216 => ColorDepth::TrueColor,
        c if c >= 256 => ColorDepth::Enhanced,
        c if c >= 16 => ColorDepth::Basic,
        c if c >= 8 => ColorDepth::Minimal,
        _ => ColorDepth::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Restores an environment variable when dropped.
    struct EnvGuard {
        key: &'static str,
        prior: Option<std::ffi::OsString>,
    }

    impl EnvGuard {
        fn set(key: &'static str, value: &str) -> EnvGuard {
            let prior = env::var_os(key);
            // SAFETY: tests touching the environment are `#[serial]`
            unsafe { env::set_var(key, value) };
            EnvGuard { key, prior }
        }

        fn remove(key: &'static str) -> EnvGuard {
            let prior = env::var_os(key);
            // SAFETY: tests touching the environment are `#[serial]`
            unsafe { env::remove_var(key) };
            EnvGuard { key, prior }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            // SAFETY: tests touching the environment are `#[serial]`
            unsafe {
                match &self.prior {
                    Some(v) => env::set_var(self.key, v),
                    None => env::remove_var(self.key),
                }
            }
        }
    }

    #[test]
    fn test_depth_from_colors() {
        assert_eq!(depth_from_colors(0), ColorDepth::None);
        assert_eq!(depth_from_colors(8), ColorDepth::Minimal);
        assert_eq!(depth_from_colors(16), ColorDepth::Basic);
        assert_eq!(depth_from_colors(256), ColorDepth::Enhanced);
        assert_eq!(depth_from_colors(16_777_216), ColorDepth::TrueColor);
    }

    #[test]
    fn test_depth_from_max_colors_rejects_negative() {
        assert_eq!(depth_from_max_colors(Some(-1)), ColorDepth::None);
        assert_eq!(depth_from_max_colors(Some(i32::MIN)), ColorDepth::None);
        assert_eq!(depth_from_max_colors(None), ColorDepth::None);
        assert_eq!(depth_from_max_colors(Some(256)), ColorDepth::Enhanced);
    }

    #[test]
    fn test_never_is_plain() {
        let term = Terminal::with_mode(StyleMode::Never);
        assert!(!term.does_styling());
        assert!(!term.supports_color());
        assert!(!term.supports_bold);
    }

    #[test]
    #[serial]
    fn test_always_styles_without_terminfo() {
        let _term = EnvGuard::set("TERM", "dumb");
        let term = Terminal::with_mode(StyleMode::Always);
        assert!(term.does_styling());
        assert!(term.supports_bold);
        assert!(term.supports_color());
    }

    #[test]
    #[serial]
    fn test_no_color_disables_auto() {
        let _no_color = EnvGuard::set("NO_COLOR", "1");
        let _force = EnvGuard::set("CLICOLOR_FORCE", "1");
        assert!(!Terminal::new().does_styling());
    }

    #[test]
    #[serial]
    fn test_empty_no_color_is_ignored() {
        let _no_color = EnvGuard::set("NO_COLOR", "");
        assert!(!no_color());
    }

    #[test]
    #[serial]
    fn test_clicolor_force_enables_auto() {
        let _no_color = EnvGuard::remove("NO_COLOR");
        let _force = EnvGuard::set("CLICOLOR_FORCE", "1");
        assert!(Terminal::new().does_styling());
    }

    #[test]
    #[serial]
    fn test_clicolor_force_zero_is_ignored() {
        let _force = EnvGuard::set("CLICOLOR_FORCE", "0");
        assert!(!clicolor_force());
    }

    #[test]
    #[serial]
    fn test_dumb_terminal_detection_fails() {
        let _term = EnvGuard::set("TERM", "dumb");
        assert_eq!(detect_capabilities(), Err(DetectionError::DumbTerminal));
    }

    #[test]
    #[serial]
    fn test_missing_terminfo_detection_fails() {
        let _term = EnvGuard::set("TERM", "no-such-terminal");
        let _terminfo = EnvGuard::remove("TERMINFO");
        assert!(matches!(
            detect_capabilities(),
            Err(DetectionError::TermInfo { .. })
        ));
    }

    #[test]
    #[serial]
    fn test_missing_terminfo_falls_back_to_plain() {
        let _term = EnvGuard::set("TERM", "no-such-terminal");
        let _terminfo = EnvGuard::remove("TERMINFO");
        let term = terminal_for(true);
        assert!(term.is_tty);
        assert!(!term.does_styling());
        assert!(!term.supports_color());
        assert!(!term.supports_bold);
    }

    #[test]
    #[serial]
    fn test_dumb_terminal_falls_back_to_plain() {
        let _term = EnvGuard::set("TERM", "dumb");
        assert!(!terminal_for(true).does_styling());
    }

    #[test]
    #[serial]
    fn test_non_tty_is_plain() {
        let _term = EnvGuard::set("TERM", "xterm-256color");
        let _colorterm = EnvGuard::set("COLORTERM", "truecolor");
        let term = terminal_for(false);
        assert!(!term.is_tty);
        assert!(!term.does_styling());

        let out = crate::Greeting::new(None).styled(&term);
        assert_eq!(out, "Hello, World!");
        assert!(!out.contains("\x1b["));
    }
}
