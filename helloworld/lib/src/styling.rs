use crate::terminal::Terminal;

/// make the text passed in BOLD
pub fn bold<T: Into<String>>(content: T, terminal: Option<Terminal>) -> String {
    let content = content.into();
    let term = terminal.unwrap_or_default();
    if term.does_styling() && term.supports_bold {
        format!("\x1b[1m{}\x1b[22m", content)
    } else {
        content
    }
}

/// colors the text passed in with the accent color (cyan)
pub fn accent<T: Into<String>>(content: T, terminal: Option<Terminal>) -> String {
    let content = content.into();
    let term = terminal.unwrap_or_default();
    if term.supports_color() {
        format!("\x1b[36m{}\x1b[39m", content)
    } else {
        content
    }
}
