//! Theme definitions for colors and styles.

use owo_colors::{OwoColorize, Style};

/// ANSI sequence that clears the screen and homes the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";

/// Named styles used across the CLI.
pub mod styles {
    use owo_colors::Style;

    /// Success messages
    pub fn success() -> Style {
        Style::new().green()
    }

    /// Headings (entry timestamps in the detail view)
    pub fn bold() -> Style {
        Style::new().bold()
    }
}

/// Apply `style` to `text` when color is enabled.
pub fn styled(text: &str, style: Style, color: bool) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}
