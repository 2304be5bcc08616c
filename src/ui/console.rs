//! Line-oriented console used by every interactive prompt.
//!
//! Generic over the reader and writer so sessions can be driven from
//! in-memory buffers as well as from stdin/stdout.

use std::io::{self, BufRead, Stdin, Stdout, Write};

use crate::core::lookup::{Choice, YES_NO, key_for_value};
use crate::errors::AppResult;

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Console::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `prompt` (no newline) and read one line without its terminator.
    ///
    /// Returns `None` at end of input. A line that cannot be read (e.g. not
    /// UTF-8) is reported and answered as an empty string.
    pub fn ask(&mut self, prompt: &str) -> AppResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => {
                writeln!(self.output)?;
                Ok(None)
            }
            Ok(_) => {
                let trimmed = line.trim_end_matches(['\n', '\r']).len();
                line.truncate(trimmed);
                Ok(Some(line))
            }
            Err(e) => {
                writeln!(self.output, "{}", e)?;
                Ok(Some(String::new()))
            }
        }
    }

    /// Ask until the answer matches an entry of `table`; print `error_msg`
    /// after every miss. `None` at end of input.
    pub fn ask_choice<K: Copy>(
        &mut self,
        prompt: &str,
        error_msg: &str,
        table: &[Choice<K>],
        extra_line: bool,
    ) -> AppResult<Option<K>> {
        if extra_line {
            writeln!(self.output, "\n")?;
        }

        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            if let Some(key) = key_for_value(&answer, table) {
                return Ok(Some(key));
            }
            writeln!(self.output, "{}", error_msg)?;
        }
    }

    /// The continue/stop question asked between pages. End of input is "no".
    pub fn ask_show_more(&mut self) -> AppResult<bool> {
        let answer = self.ask_choice(
            "Do you want to see more of this data? (y/n or yes/no)",
            "Please enter \"y\" or \"yes\" or \"n\" or \"no\"",
            YES_NO,
            false,
        )?;
        Ok(answer.unwrap_or(false))
    }
}
