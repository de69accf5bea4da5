//! Line-oriented terminal I/O for the interactive menu.
//!
//! `Console` wraps any `BufRead`/`Write` pair so the session runs the same
//! over a locked stdin/stdout or over in-memory buffers.

use std::io::{BufRead, Write};

use crate::ui::theme::{styled, styles, CLEAR_SCREEN};
use crate::ui::UiContext;

pub struct Console<R, W> {
    input: R,
    output: W,
    ui: UiContext,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, ui: UiContext) -> Self {
        Self { input, output, ui }
    }

    pub fn ui(&self) -> UiContext {
        self.ui
    }

    /// Read one line without its line terminator. `None` at end of input.
    ///
    /// Bytes that are not valid UTF-8 are replaced, never rejected.
    pub fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut raw = Vec::new();
        if self.read_raw_line(&mut raw)? == 0 {
            return Ok(None);
        }
        if raw.ends_with(b"\n") {
            raw.pop();
            if raw.ends_with(b"\r") {
                raw.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&raw).into_owned()))
    }

    /// Read everything up to the next end-of-input signal.
    ///
    /// On a terminal that is Ctrl-D (Ctrl-Z on Windows); reading continues
    /// normally afterwards.
    pub fn read_until_eof(&mut self) -> anyhow::Result<String> {
        let mut raw = Vec::new();
        while self.read_raw_line(&mut raw)? > 0 {}
        Ok(String::from_utf8_lossy(&raw).into_owned())
    }

    fn read_raw_line(&mut self, buffer: &mut Vec<u8>) -> anyhow::Result<usize> {
        self.input
            .read_until(b'\n', buffer)
            .map_err(|e| anyhow::anyhow!("Failed to read input: {}", e))
    }

    /// Print `message` without a newline and read the answer.
    pub fn prompt(&mut self, message: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Ask a yes/no question. Anything but an explicit answer means `default`.
    pub fn confirm(&mut self, message: &str, default: bool) -> anyhow::Result<bool> {
        let answer = self.prompt(message)?.unwrap_or_default();
        Ok(parse_confirmation(&answer, default))
    }

    pub fn line(&mut self, text: &str) -> anyhow::Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn blank(&mut self) -> anyhow::Result<()> {
        writeln!(self.output)?;
        Ok(())
    }

    /// Print a status message, green when color is on.
    pub fn success(&mut self, message: &str) -> anyhow::Result<()> {
        let text = styled(message, styles::success(), self.ui.color);
        writeln!(self.output, "{}", text)?;
        writeln!(self.output)?;
        Ok(())
    }

    pub fn clear(&mut self) -> anyhow::Result<()> {
        if self.ui.clear_screen {
            write!(self.output, "{}", CLEAR_SCREEN)?;
            self.output.flush()?;
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Interpret a `[yN]`/`[Yn]` answer, case-insensitive.
pub fn parse_confirmation(answer: &str, default: bool) -> bool {
    match answer.trim().to_lowercase().as_str() {
        "y" => true,
        "n" => false,
        _ => default,
    }
}
