use crate::domain::account::{AccountId, Amount};
use crate::domain::action::{Action, ActionCode, IdEntry};
use crate::domain::ports::Terminal;
use crate::error::{AtmError, Result};
use std::io::{BufRead, Write};
use tracing::warn;

pub const ID_PROMPT: &str = "Enter account id (X to shut down):";
pub const ACTION_PROMPT: &str =
    "Choose action: B balance, - withdraw, + deposit, = next customer, X finish:";
pub const AMOUNT_PROMPT: &str = "Enter amount:";

/// A line-oriented terminal over any reader/writer pair (stdin/stdout in the binary).
///
/// Each prompt reads one fresh line. Lines that do not parse are reported back
/// and the prompt is repeated, so callers only receive well-formed values.
pub struct ConsoleTerminal<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleTerminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn prompt(&mut self, prompt: &str) -> Result<String> {
        writeln!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AtmError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Prompts until `parse` accepts the line, reporting each rejection.
    fn prompt_until<T>(
        &mut self,
        prompt: &str,
        mut parse: impl FnMut(&str) -> Result<T>,
    ) -> Result<T> {
        loop {
            let line = self.prompt(prompt)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    warn!(error = %e, "Rejected input");
                    self.present_message(&e.to_string());
                }
            }
        }
    }
}

fn parse_id(line: &str) -> Result<IdEntry> {
    if line.eq_ignore_ascii_case("x") {
        return Ok(IdEntry::Finished);
    }
    line.parse::<AccountId>()
        .map(IdEntry::Id)
        .map_err(|_| AtmError::InvalidId(format!("'{line}' is not an account number")))
}

fn parse_amount(line: &str) -> Result<Amount> {
    let value = line
        .parse::<i64>()
        .map_err(|_| AtmError::InvalidAmount(format!("'{line}' is not a whole number")))?;
    Amount::new(value)
}

impl<R: BufRead, W: Write> Terminal for ConsoleTerminal<R, W> {
    fn acquire_id(&mut self) -> Result<IdEntry> {
        self.prompt_until(ID_PROMPT, parse_id)
    }

    fn acquire_amount(&mut self) -> Result<Amount> {
        self.prompt_until(AMOUNT_PROMPT, parse_amount)
    }

    fn acquire_action(&mut self) -> Result<Action> {
        let code = self.prompt_until(ACTION_PROMPT, str::parse::<ActionCode>)?;
        code.into_action(|| self.acquire_amount())
    }

    fn present_message(&mut self, text: &str) {
        if let Err(e) = writeln!(self.output, "{text}").and_then(|_| self.output.flush()) {
            warn!(error = %e, "Failed to write message");
        }
    }

    fn deliver_cash(&mut self, amount: Amount) {
        self.present_message(&format!("Dispensing {amount}."));
    }
}
