use crate::error::{AtmError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Customer-facing account number.
pub type AccountId = u32;

/// An account balance in whole currency units.
///
/// Backed by `u64`, so a balance can never be negative; withdrawals that would
/// take it below zero have to be rejected before a new `Balance` is built.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Balance(u64);

impl Balance {
    pub const ZERO: Self = Self(0);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// Balance after taking `amount` out, or `None` if the funds are not there.
    pub fn checked_withdraw(self, amount: Amount) -> Option<Self> {
        self.0.checked_sub(amount.value()).map(Self)
    }

    /// Balance after adding `amount`, or `None` on overflow.
    pub fn checked_deposit(self, amount: Amount) -> Option<Self> {
        self.0.checked_add(amount.value()).map(Self)
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A non-negative amount requested for a withdrawal or deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(u64);

impl Amount {
    pub fn new(value: i64) -> Result<Self> {
        u64::try_from(value)
            .map(Self)
            .map_err(|_| AtmError::InvalidAmount(format!("{value} is negative")))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl TryFrom<i64> for Amount {
    type Error = AtmError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One customer's bank record.
///
/// `id` and `name` are fixed at creation; only the ledger that owns the
/// account changes `balance`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub balance: Balance,
}

impl Account {
    pub fn new(id: AccountId, name: impl Into<String>, balance: Balance) -> Self {
        Self {
            id,
            name: name.into(),
            balance,
        }
    }
}

/// A single entry of the seed list the ledger is built from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedEntry {
    pub name: String,
    pub id: AccountId,
    pub balance: Balance,
}

impl SeedEntry {
    pub fn new(name: impl Into<String>, id: AccountId, balance: u64) -> Self {
        Self {
            name: name.into(),
            id,
            balance: Balance::new(balance),
        }
    }
}

impl From<SeedEntry> for Account {
    fn from(entry: SeedEntry) -> Self {
        Account::new(entry.id, entry.name, entry.balance)
    }
}

/// Accounts loaded when no seed file is given.
pub fn default_seed() -> Vec<SeedEntry> {
    vec![
        SeedEntry::new("Ada", 1, 100),
        SeedEntry::new("Grace", 2, 250),
        SeedEntry::new("Alan", 3, 75),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_validation() {
        assert_eq!(Amount::new(0).unwrap().value(), 0);
        assert_eq!(Amount::new(30).unwrap().value(), 30);
        assert!(matches!(Amount::new(-1), Err(AtmError::InvalidAmount(_))));
    }

    #[test]
    fn test_balance_withdraw() {
        let balance = Balance::new(100);
        assert_eq!(
            balance.checked_withdraw(Amount::from(30)),
            Some(Balance::new(70))
        );
        assert_eq!(
            balance.checked_withdraw(Amount::from(100)),
            Some(Balance::ZERO)
        );
        assert_eq!(balance.checked_withdraw(Amount::from(101)), None);
    }

    #[test]
    fn test_balance_deposit_overflow() {
        assert_eq!(
            Balance::new(70).checked_deposit(Amount::from(20)),
            Some(Balance::new(90))
        );
        assert_eq!(Balance::new(u64::MAX).checked_deposit(Amount::from(1)), None);
    }

    #[test]
    fn test_default_seed_ids_are_unique() {
        let seed = default_seed();
        let mut ids: Vec<_> = seed.iter().map(|e| e.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), seed.len());
    }
}
