use crate::domain::account::{AccountId, Amount, Balance};
use crate::domain::action::{Action, IdEntry};
use crate::domain::ports::{AccountStore, AccountStoreBox, Terminal};
use crate::error::{AtmError, Result};
use tracing::{debug, error, info, warn};

/// Where the terminal is in its customer loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingId,
    AwaitingAction { id: AccountId },
    Terminated,
}

/// Totals collected over one run of the terminal.
///
/// Counters saturate: money can cycle through one account indefinitely, so the
/// totals are unbounded even though every balance fits in a `u64`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub customers_served: u32,
    pub actions_processed: u32,
    pub cash_dispensed: u64,
    pub deposited: u64,
}

impl RunSummary {
    fn record_customer(&mut self) {
        self.customers_served = self.customers_served.saturating_add(1);
    }

    fn record_action(&mut self) {
        self.actions_processed = self.actions_processed.saturating_add(1);
    }

    fn record_withdrawal(&mut self, amount: Amount) {
        self.cash_dispensed = self.cash_dispensed.saturating_add(amount.value());
    }

    fn record_deposit(&mut self, amount: Amount) {
        self.deposited = self.deposited.saturating_add(amount.value());
    }
}

/// Drives the customer loop of a single ATM.
///
/// `SessionController` owns the ledger for the lifetime of the run. Customers
/// are served one at a time: an id is authenticated, then actions are handled
/// against that account until the customer hands over (`Next`) or the terminal
/// is shut down (`Finished`).
///
/// Bad ids, insufficient funds and overflowing deposits are reported to the
/// customer and the same prompt is repeated. An `UnknownAccount` for an
/// authenticated customer means the ledger lost an account mid-session and
/// ends the run with an error.
pub struct SessionController {
    ledger: AccountStoreBox,
    state: SessionState,
    summary: RunSummary,
}

impl SessionController {
    pub fn new(ledger: AccountStoreBox) -> Self {
        Self {
            ledger,
            state: SessionState::AwaitingId,
            summary: RunSummary::default(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn summary(&self) -> &RunSummary {
        &self.summary
    }

    pub fn ledger(&self) -> &dyn AccountStore {
        self.ledger.as_ref()
    }

    /// Consumes the controller and hands back the ledger in its final state.
    pub fn into_ledger(self) -> AccountStoreBox {
        self.ledger
    }

    /// Runs customer sessions until shutdown is requested or input runs out.
    pub fn run(&mut self, terminal: &mut dyn Terminal) -> Result<RunSummary> {
        info!("ATM ready");
        loop {
            let acquired = match self.state {
                SessionState::Terminated => break,
                SessionState::AwaitingId => terminal
                    .acquire_id()
                    .and_then(|entry| self.handle_id(entry, terminal)),
                SessionState::AwaitingAction { .. } => terminal
                    .acquire_action()
                    .and_then(|action| self.handle_action(action, terminal)),
            };

            match acquired {
                Ok(_) => {}
                Err(AtmError::InputClosed) => {
                    warn!(state = ?self.state, "Input closed, shutting down");
                    self.state = SessionState::Terminated;
                }
                Err(e) => {
                    error!(error = %e, state = ?self.state, "ATM fault");
                    return Err(e);
                }
            }
        }
        info!(summary = ?self.summary, "ATM shut down");
        Ok(self.summary.clone())
    }

    /// Handles what the customer typed at the id prompt.
    ///
    /// Ignored unless the controller is waiting for an id.
    pub fn handle_id(
        &mut self,
        entry: IdEntry,
        terminal: &mut dyn Terminal,
    ) -> Result<SessionState> {
        if self.state != SessionState::AwaitingId {
            return Ok(self.state);
        }

        match entry {
            IdEntry::Finished => self.shut_down(terminal),
            IdEntry::Id(id) => match self.authenticate(id) {
                Ok(name) => {
                    info!(account = id, "Customer authenticated");
                    self.summary.record_customer();
                    self.state = SessionState::AwaitingAction { id };
                    terminal.present_message(&format!("Welcome, {name}."));
                }
                Err(e) => self.recover(e, terminal)?,
            },
        }
        Ok(self.state)
    }

    /// Applies one action for the authenticated customer.
    ///
    /// Ignored unless a customer is authenticated.
    pub fn handle_action(
        &mut self,
        action: Action,
        terminal: &mut dyn Terminal,
    ) -> Result<SessionState> {
        let SessionState::AwaitingAction { id } = self.state else {
            return Ok(self.state);
        };
        debug!(account = id, ?action, "Handling action");
        self.summary.record_action();

        match action {
            Action::Balance => {
                let balance = self.ledger.get_balance(id)?;
                terminal.present_message(&format!("Your balance is {balance}."));
            }
            Action::Withdraw(amount) => match self.withdraw(id, amount) {
                Ok(balance) => {
                    self.summary.record_withdrawal(amount);
                    terminal.deliver_cash(amount);
                    terminal.present_message(&format!(
                        "Withdrew {amount}. Your balance is {balance}."
                    ));
                }
                Err(e) => self.recover(e, terminal)?,
            },
            Action::Deposit(amount) => match self.deposit(id, amount) {
                Ok(balance) => {
                    self.summary.record_deposit(amount);
                    terminal.present_message(&format!(
                        "Deposited {amount}. Your balance is {balance}."
                    ));
                }
                Err(e) => self.recover(e, terminal)?,
            },
            Action::Next => {
                info!(account = id, "Customer finished");
                self.state = SessionState::AwaitingId;
                terminal.present_message("Thank you. Next customer, please.");
            }
            Action::Finished => self.shut_down(terminal),
        }
        Ok(self.state)
    }

    fn authenticate(&self, id: AccountId) -> Result<String> {
        if !self.ledger.account_exists(id) {
            return Err(AtmError::InvalidId(format!("{id} is not a known account")));
        }
        self.ledger.get_name(id)
    }

    fn withdraw(&mut self, id: AccountId, amount: Amount) -> Result<Balance> {
        let balance = self.ledger.get_balance(id)?;
        let new_balance = balance
            .checked_withdraw(amount)
            .ok_or(AtmError::InsufficientFunds {
                requested: amount,
                balance,
            })?;
        self.ledger.update_balance(id, new_balance)?;
        Ok(new_balance)
    }

    fn deposit(&mut self, id: AccountId, amount: Amount) -> Result<Balance> {
        let balance = self.ledger.get_balance(id)?;
        let new_balance = balance.checked_deposit(amount).ok_or_else(|| {
            AtmError::InvalidAmount(format!("depositing {amount} exceeds the maximum balance"))
        })?;
        self.ledger.update_balance(id, new_balance)?;
        Ok(new_balance)
    }

    fn shut_down(&mut self, terminal: &mut dyn Terminal) {
        self.state = SessionState::Terminated;
        terminal.present_message("Shutting down. Goodbye.");
    }

    /// Reports a recoverable error to the customer; anything else is returned.
    fn recover(&self, err: AtmError, terminal: &mut dyn Terminal) -> Result<()> {
        if !err.is_recoverable() {
            return Err(err);
        }
        warn!(error = %err, state = ?self.state, "Request rejected");
        terminal.present_message(&err.to_string());
        Ok(())
    }
}
