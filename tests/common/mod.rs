// Shared across test files that are compiled separately
#![allow(dead_code)]

use atm::application::session::SessionController;
use atm::domain::account::{Amount, SeedEntry};
use atm::domain::action::{Action, IdEntry};
use atm::domain::ports::Terminal;
use atm::error::{AtmError, Result};
use atm::infrastructure::in_memory::InMemoryAccountStore;
use std::collections::VecDeque;

/// A terminal fed from pre-scripted ids and actions that records everything
/// presented to the customer. Running out of script behaves like closed input.
#[derive(Default)]
pub struct ScriptedTerminal {
    ids: VecDeque<IdEntry>,
    actions: VecDeque<Action>,
    pub messages: Vec<String>,
    pub cash: Vec<u64>,
}

impl ScriptedTerminal {
    pub fn new(ids: Vec<IdEntry>, actions: Vec<Action>) -> Self {
        Self {
            ids: ids.into(),
            actions: actions.into(),
            ..Default::default()
        }
    }

    pub fn last_message(&self) -> &str {
        self.messages.last().map(String::as_str).unwrap_or_default()
    }
}

impl Terminal for ScriptedTerminal {
    fn acquire_id(&mut self) -> Result<IdEntry> {
        self.ids.pop_front().ok_or(AtmError::InputClosed)
    }

    fn acquire_amount(&mut self) -> Result<Amount> {
        unreachable!("scripted actions already carry their amount")
    }

    fn acquire_action(&mut self) -> Result<Action> {
        self.actions.pop_front().ok_or(AtmError::InputClosed)
    }

    fn present_message(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }

    fn deliver_cash(&mut self, amount: Amount) {
        self.cash.push(amount.value());
    }
}

pub fn amount(value: u64) -> Amount {
    Amount::from(value)
}

/// Controller over a ledger holding only Ada (id 1, balance 100).
pub fn ada_controller() -> SessionController {
    controller_with_balance(100)
}

/// Controller over a ledger holding only Ada (id 1) with the given balance.
pub fn controller_with_balance(balance: u64) -> SessionController {
    SessionController::new(Box::new(InMemoryAccountStore::with_seed(vec![
        SeedEntry::new("Ada", 1, balance),
    ])))
}
