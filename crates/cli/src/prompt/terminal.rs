use std::io::{stdin, stdout, Write};

use crossterm::style::Stylize;
use org_wizard_core::error::{Error, Result};

/// Line-oriented operator terminal.
pub trait Terminal {
    /// Shows `prompt` and blocks for one line of input, without the line ending.
    ///
    /// # Errors
    ///
    /// Returns an error if stdio fails or input has been closed.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Writes one line of plain output.
    ///
    /// # Errors
    ///
    /// Returns an error if stdout cannot be written.
    fn write_line(&mut self, text: &str) -> Result<()>;
}

/// [`Terminal`] on the process's stdin and stdout.
#[derive(Default)]
pub struct StdTerminal;

impl Terminal for StdTerminal {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        let mut stdout = stdout();
        write!(stdout, "{}", prompt.cyan())?;
        stdout.flush()?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            // EOF would otherwise spin menu loops forever
            return Err(Error::InputClosed);
        }

        Ok(input.trim_end_matches(['\r', '\n']).to_string())
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        let mut stdout = stdout();
        writeln!(stdout, "{text}")?;
        Ok(())
    }
}
