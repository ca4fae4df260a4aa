use crate::error::{CliError, Result};
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// A source of values for inputs that were not given on the command line or in a file.
pub trait Ask {
    /// Returns `Ok(None)` when this source cannot supply values at all.
    fn ask_f64(&mut self, question: &str) -> Result<Option<f64>>;
}

impl<A: Ask + ?Sized> Ask for Box<A> {
    fn ask_f64(&mut self, question: &str) -> Result<Option<f64>> {
        (**self).ask_f64(question)
    }
}

/// Never supplies a value; missing inputs fall through to defaults or errors.
pub struct NoPrompt;

impl Ask for NoPrompt {
    fn ask_f64(&mut self, _question: &str) -> Result<Option<f64>> {
        Ok(None)
    }
}

/// Asks for each missing value on a line-oriented terminal.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl Prompter<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Ask for Prompter<R, W> {
    fn ask_f64(&mut self, question: &str) -> Result<Option<f64>> {
        write!(self.writer, "{}: ", question)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(CliError::Argument(format!(
                "No value given for '{}' (input closed).",
                question
            )));
        }

        let answer = line.trim();
        answer.parse().map(Some).map_err(|_| {
            CliError::Argument(format!(
                "Expected a number for '{}', got '{}'.",
                question, answer
            ))
        })
    }
}
