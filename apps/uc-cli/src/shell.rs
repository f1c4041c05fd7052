//! Interactive prompt loop.

use std::io::{BufRead, Write};

use tracing::debug;
use uc_convert::{Domain, convert_request};
use uc_core::{Real, ensure_finite};

use crate::error::{ShellError, ShellResult};

const BANNER: &str = "Unit converter";
const CATEGORY_PROMPT: &str =
    "Choose a category (length, area, volume, mass, temperature, time, speed): ";
const VALUE_PROMPT: &str = "Enter the value to convert: ";
const FROM_PROMPT: &str = "Enter the source unit: ";
const TO_PROMPT: &str = "Enter the target unit: ";

/// What to do after one conversion attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Quit,
}

/// Reads requests from `input`, writes prompts and results to `output`.
pub struct Shell<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run attempts until end of input or `quit`.
    pub fn run(&mut self) -> ShellResult<()> {
        writeln!(self.output, "{BANNER}")?;
        while self.attempt()? == Step::Continue {}
        debug!("session finished");
        Ok(())
    }

    fn attempt(&mut self) -> ShellResult<Step> {
        let Some(category) = self.prompt(CATEGORY_PROMPT)? else {
            return Ok(Step::Quit);
        };
        let category = category.to_lowercase();
        match category.as_str() {
            "" => return Ok(Step::Continue),
            "quit" | "exit" => return Ok(Step::Quit),
            "help" => {
                self.print_help()?;
                return Ok(Step::Continue);
            }
            _ => {}
        }

        let domain = match category.parse::<Domain>() {
            Ok(domain) => domain,
            Err(err) => {
                debug!(error = %err, "category rejected");
                writeln!(self.output, "Invalid category: {category}")?;
                return Ok(Step::Continue);
            }
        };

        let Some(raw_value) = self.prompt(VALUE_PROMPT)? else {
            return Ok(Step::Quit);
        };
        let value = match parse_value(&raw_value) {
            Ok(value) => value,
            Err(err) => {
                self.report(&err)?;
                return Ok(Step::Continue);
            }
        };

        let Some(from) = self.prompt(FROM_PROMPT)? else {
            return Ok(Step::Quit);
        };
        let Some(to) = self.prompt(TO_PROMPT)? else {
            return Ok(Step::Quit);
        };
        let (from, to) = (from.to_lowercase(), to.to_lowercase());

        match convert_request(domain, value, &from, &to) {
            Ok(conversion) => writeln!(self.output, "{conversion}")?,
            Err(err) => {
                let unknown = !err.unknown_units().is_empty();
                self.report(&ShellError::Convert(err))?;
                if unknown {
                    self.print_units(domain)?;
                }
            }
        }
        Ok(Step::Continue)
    }

    /// Print `text`, then read one trimmed line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> ShellResult<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn report(&mut self, err: &ShellError) -> ShellResult<()> {
        debug!(error = %err, "conversion attempt failed");
        writeln!(self.output, "Error: {err}")?;
        Ok(())
    }

    fn print_units(&mut self, domain: Domain) -> ShellResult<()> {
        writeln!(
            self.output,
            "Known {domain} units: {}",
            domain.unit_codes().join(", ")
        )?;
        Ok(())
    }

    fn print_help(&mut self) -> ShellResult<()> {
        for domain in Domain::ALL {
            writeln!(
                self.output,
                "  {:<12} {}",
                domain.name(),
                domain.unit_codes().join(", ")
            )?;
        }
        writeln!(self.output, "Type 'quit' to leave.")?;
        Ok(())
    }
}

/// Parse the numeric input. Non-numbers and non-finite values are rejected.
pub fn parse_value(raw: &str) -> ShellResult<Real> {
    let value: Real = raw.parse().map_err(|_| ShellError::InvalidNumber {
        input: raw.to_string(),
    })?;
    Ok(ensure_finite(value, "value")?)
}
