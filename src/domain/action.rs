use super::account::{AccountId, Amount};
use crate::error::AtmError;
use std::str::FromStr;

/// One request issued by an authenticated customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Balance,
    Withdraw(Amount),
    Deposit(Amount),
    Next,
    Finished,
}

/// The symbol a customer types to pick an action, before any amount is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCode {
    Balance,
    Withdraw,
    Deposit,
    Next,
    Finished,
}

impl ActionCode {
    /// Whether the action carries an amount that has to be acquired next.
    pub fn needs_amount(&self) -> bool {
        matches!(self, ActionCode::Withdraw | ActionCode::Deposit)
    }

    /// Builds the [`Action`], pulling an amount from `amount` only for the
    /// codes that take one.
    pub fn into_action<E>(
        self,
        amount: impl FnOnce() -> Result<Amount, E>,
    ) -> Result<Action, E> {
        Ok(match self {
            ActionCode::Balance => Action::Balance,
            ActionCode::Withdraw => Action::Withdraw(amount()?),
            ActionCode::Deposit => Action::Deposit(amount()?),
            ActionCode::Next => Action::Next,
            ActionCode::Finished => Action::Finished,
        })
    }
}

impl FromStr for ActionCode {
    type Err = AtmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "B" | "b" => Ok(ActionCode::Balance),
            "-" => Ok(ActionCode::Withdraw),
            "+" => Ok(ActionCode::Deposit),
            "=" => Ok(ActionCode::Next),
            "X" | "x" => Ok(ActionCode::Finished),
            other => Err(AtmError::UnrecognizedAction(other.to_string())),
        }
    }
}

/// What the customer supplied at the id prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdEntry {
    Id(AccountId),
    /// Shut the terminal down without authenticating anyone.
    Finished,
}
