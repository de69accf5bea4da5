//! UI context for environment detection and configuration.

use std::io::IsTerminal;

/// Terminal and environment context for UI decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    /// Whether color output is enabled
    pub color: bool,
    /// Whether the screen is cleared between menus
    pub clear_screen: bool,
}

impl UiContext {
    /// Create context from the environment and user preferences.
    ///
    /// # Arguments
    /// * `no_clear_flag` - Whether `--no-clear` was passed
    /// * `clear_pref` - `[ui] clear_screen` from config
    /// * `color_pref` - `[ui] color` from config
    pub fn from_env(no_clear_flag: bool, clear_pref: bool, color_pref: bool) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var("NO_COLOR").is_ok();

        Self::resolve(
            is_tty,
            term_is_dumb,
            no_color_env,
            no_clear_flag,
            clear_pref,
            color_pref,
        )
    }

    fn resolve(
        is_tty: bool,
        term_is_dumb: bool,
        no_color_env: bool,
        no_clear_flag: bool,
        clear_pref: bool,
        color_pref: bool,
    ) -> Self {
        let interactive = is_tty && !term_is_dumb;
        Self {
            color: interactive && color_pref && !no_color_env,
            clear_screen: interactive && clear_pref && !no_clear_flag,
        }
    }

    /// Context with every terminal feature off.
    #[cfg(test)]
    pub fn plain() -> Self {
        Self {
            color: false,
            clear_screen: false,
        }
    }
}
