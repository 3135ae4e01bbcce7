use crate::domain::account::{AccountId, Amount, Balance};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtmError {
    #[error("Unknown account: {0}")]
    UnknownAccount(AccountId),
    #[error("Invalid id: {0}")]
    InvalidId(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Insufficient funds: requested {requested}, balance {balance}")]
    InsufficientFunds { requested: Amount, balance: Balance },
    #[error("Unrecognized action: {0}")]
    UnrecognizedAction(String),
    #[error("Input closed")]
    InputClosed,
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

impl AtmError {
    /// Whether the condition is reported to the customer and retried, as opposed
    /// to a fault that ends the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AtmError::InvalidId(_)
                | AtmError::InvalidAmount(_)
                | AtmError::InsufficientFunds { .. }
                | AtmError::UnrecognizedAction(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, AtmError>;
