//! Validated line-oriented input.
//!
//! Validation is split from prompting: the `validate_*` functions are pure
//! and return `Result<_, InputRejection>`, while [`Prompter`] owns the
//! prompt/read/retry loop over any `BufRead`/`Write` pair. Scripted readers
//! and writers slot in for tests; [`Prompter::stdio`] wires up the real ones.

use std::io::{BufRead, Write};

use thiserror::Error;

use crate::error::{AppError, Result};

/// Why a line of input was rejected. The display strings are the exact
/// messages shown to the user before re-prompting.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputRejection {
    #[error("Invalid input. Please enter a decimal number.")]
    NotDecimal,

    #[error("Invalid input. Please enter an integer.")]
    NotInteger,

    #[error("Value must be between {min} and {max}.")]
    OutOfRange { min: f64, max: f64 },

    #[error("Invalid input. Please enter one of {allowed}.")]
    NotInSet { allowed: String },
}

/// Parse a decimal number and check it against a closed interval.
///
/// Leading and trailing whitespace is tolerated. `NaN` and infinities parse,
/// but never satisfy the interval check, so they come back as out of range.
pub fn validate_decimal(raw: &str, min: f64, max: f64) -> std::result::Result<f64, InputRejection> {
    let value: f64 = raw.trim().parse().map_err(|_| InputRejection::NotDecimal)?;
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(InputRejection::OutOfRange { min, max })
    }
}

/// Parse an integer and check it against a closed interval.
pub fn validate_integer(raw: &str, min: i64, max: i64) -> std::result::Result<i64, InputRejection> {
    let value: i64 = raw.trim().parse().map_err(|_| InputRejection::NotInteger)?;
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(InputRejection::OutOfRange {
            min: min as f64,
            max: max as f64,
        })
    }
}

/// Accept the line only on exact membership in `allowed`. No trimming:
/// `" u"` is not `"u"`.
pub fn validate_choice(raw: &str, allowed: &[&str]) -> std::result::Result<String, InputRejection> {
    if allowed.contains(&raw) {
        Ok(raw.to_string())
    } else {
        Err(InputRejection::NotInSet {
            allowed: list_choices(allowed),
        })
    }
}

fn list_choices(allowed: &[&str]) -> String {
    let quoted: Vec<String> = allowed
        .iter()
        .map(|choice| format!("'{}'", choice))
        .collect();
    format!("[{}]", quoted.join(", "))
}

/// Prompt/read/retry loop over a reader and writer pair.
///
/// Prompts are written without a trailing newline and flushed; rejection
/// messages get a line of their own. Each `read_*` method re-prompts until a
/// line passes validation. There is no retry limit: the loop ends only with a
/// valid value, or with the reader running dry, which surfaces as
/// [`AppError::EndOfInput`].
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl Prompter<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Interactive prompter over the process stdio.
    pub fn stdio() -> Self {
        Prompter::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Prompter { reader, writer }
    }

    /// The writer, for inspecting emitted output in tests.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Read a decimal number inside `[min, max]`.
    pub fn read_decimal(&mut self, prompt: &str, min: f64, max: f64) -> Result<f64> {
        loop {
            let raw = self.prompt_line(prompt)?;
            match validate_decimal(&raw, min, max) {
                Ok(value) => return Ok(value),
                Err(rejection) => self.write_line(&rejection.to_string())?,
            }
        }
    }

    /// Read an integer inside `[min, max]`.
    pub fn read_integer(&mut self, prompt: &str, min: i64, max: i64) -> Result<i64> {
        loop {
            let raw = self.prompt_line(prompt)?;
            match validate_integer(&raw, min, max) {
                Ok(value) => return Ok(value),
                Err(rejection) => self.write_line(&rejection.to_string())?,
            }
        }
    }

    /// Read a line that exactly matches one of `allowed`.
    pub fn read_choice(&mut self, prompt: &str, allowed: &[&str]) -> Result<String> {
        loop {
            let raw = self.prompt_line(prompt)?;
            match validate_choice(&raw, allowed) {
                Ok(value) => return Ok(value),
                Err(rejection) => self.write_line(&rejection.to_string())?,
            }
        }
    }

    /// Read a free-form name. Any line is accepted as-is, empty included.
    pub fn read_name(&mut self, prompt: &str) -> Result<String> {
        self.prompt_line(prompt)
    }

    /// Write a full line to the output side.
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }

    fn prompt_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(AppError::EndOfInput);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}
