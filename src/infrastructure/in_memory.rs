use crate::domain::account::{Account, AccountId, Balance, SeedEntry};
use crate::domain::ports::AccountStore;
use crate::error::{AtmError, Result};
use std::collections::HashMap;

/// An in-memory ledger keyed by account id.
///
/// Lives for the duration of the process; nothing is persisted.
#[derive(Default, Clone, Debug)]
pub struct InMemoryAccountStore {
    accounts: HashMap<AccountId, Account>,
}

impl InMemoryAccountStore {
    /// Creates a new, empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a ledger already populated from `seed`.
    pub fn with_seed(seed: Vec<SeedEntry>) -> Self {
        let mut store = Self::new();
        store.initialize(seed);
        store
    }

    fn account(&self, id: AccountId) -> Result<&Account> {
        self.accounts.get(&id).ok_or(AtmError::UnknownAccount(id))
    }
}

impl AccountStore for InMemoryAccountStore {
    fn initialize(&mut self, seed: Vec<SeedEntry>) {
        self.accounts = seed
            .into_iter()
            .map(|entry| (entry.id, Account::from(entry)))
            .collect();
    }

    fn get_balance(&self, id: AccountId) -> Result<Balance> {
        self.account(id).map(|account| account.balance)
    }

    fn get_name(&self, id: AccountId) -> Result<String> {
        self.account(id).map(|account| account.name.clone())
    }

    fn update_balance(&mut self, id: AccountId, new_balance: Balance) -> Result<()> {
        let account = self
            .accounts
            .get_mut(&id)
            .ok_or(AtmError::UnknownAccount(id))?;
        account.balance = new_balance;
        Ok(())
    }

    fn account_exists(&self, id: AccountId) -> bool {
        self.accounts.contains_key(&id)
    }

    fn all_accounts(&self) -> Vec<Account> {
        let mut accounts: Vec<Account> = self.accounts.values().cloned().collect();
        accounts.sort_by_key(|account| account.id);
        accounts
    }
}
