use super::account::{Account, AccountId, Amount, Balance, SeedEntry};
use super::action::{Action, IdEntry};
use crate::error::Result;

/// The account ledger: id-keyed storage of names and balances.
///
/// Implementations only store and look up. Validation of withdrawals and
/// deposits belongs to the caller.
pub trait AccountStore {
    /// Replaces the ledger contents with `seed`. A repeated id keeps the last entry.
    fn initialize(&mut self, seed: Vec<SeedEntry>);
    fn get_balance(&self, id: AccountId) -> Result<Balance>;
    fn get_name(&self, id: AccountId) -> Result<String>;
    fn update_balance(&mut self, id: AccountId, new_balance: Balance) -> Result<()>;
    fn account_exists(&self, id: AccountId) -> bool;
    fn all_accounts(&self) -> Vec<Account>;
}

/// The customer-facing input and output surface of the terminal.
///
/// Every `acquire_*` call blocks for fresh input. Malformed input is the
/// terminal's to report and retry; the controller only ever sees well-formed
/// values. `AtmError::InputClosed` signals that no more input will arrive.
pub trait Terminal {
    fn acquire_id(&mut self) -> Result<IdEntry>;
    fn acquire_amount(&mut self) -> Result<Amount>;
    fn acquire_action(&mut self) -> Result<Action>;
    fn present_message(&mut self, text: &str);
    fn deliver_cash(&mut self, amount: Amount);
}

pub type AccountStoreBox = Box<dyn AccountStore>;
