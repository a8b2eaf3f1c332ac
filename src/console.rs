//! Line-oriented console I/O.
//!
//! Every question the games ask goes through [`Console::ask_until`],
//! which re-prompts with a diagnostic until the answer validates.

use std::io::{self, BufRead, Write};
use tracing::{debug, instrument, trace};

/// Error talking to the console.
#[derive(Debug, derive_more::Display)]
pub enum ConsoleError {
    /// Input reached end-of-file.
    #[display("input stream closed")]
    Closed,

    /// Reading or writing failed.
    #[display("console I/O failed: {}", _0)]
    Io(io::Error),
}

impl std::error::Error for ConsoleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConsoleError::Closed => None,
            ConsoleError::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for ConsoleError {
    fn from(err: io::Error) -> Self {
        ConsoleError::Io(err)
    }
}

/// Prompt/answer channel over any reader and writer.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints a line.
    #[instrument(skip_all)]
    pub fn say(&mut self, message: impl std::fmt::Display) -> Result<(), ConsoleError> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Prints a prompt and reads one line, without its line ending.
    #[instrument(skip(self))]
    pub fn ask(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("Console input closed");
            return Err(ConsoleError::Closed);
        }
        let answer = line.trim_end_matches(['\r', '\n']).to_string();
        trace!(%answer, "Answer read");
        Ok(answer)
    }

    /// Asks until `validate` accepts the answer.
    ///
    /// Each rejected answer prints the validator's error and repeats
    /// the same prompt.
    #[instrument(skip(self, validate))]
    pub fn ask_until<T, E, F>(&mut self, prompt: &str, mut validate: F) -> Result<T, ConsoleError>
    where
        E: std::fmt::Display,
        F: FnMut(&str) -> Result<T, E>,
    {
        loop {
            let answer = self.ask(prompt)?;
            match validate(&answer) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    debug!(%answer, error = %err, "Answer rejected");
                    self.say(err)?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_ask_strips_line_ending() {
        let mut console = console("hello\r\nworld\n");
        assert_eq!(console.ask("? ").unwrap(), "hello");
        assert_eq!(console.ask("? ").unwrap(), "world");
    }

    #[test]
    fn test_ask_reports_closed_input() {
        let mut console = console("");
        assert!(matches!(console.ask("? "), Err(ConsoleError::Closed)));
    }

    #[test]
    fn test_ask_until_reprompts_with_diagnostic() {
        let mut console = console("abc\n-1\n7\n");
        let value = console
            .ask_until("number: ", |s| s.parse::<u32>().map_err(|_| "not a number"))
            .unwrap();
        assert_eq!(value, 7);

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output.matches("number: ").count(), 3);
        assert_eq!(output.matches("not a number").count(), 2);
    }
}
