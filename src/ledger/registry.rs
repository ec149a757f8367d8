//! User registry
//!
//! Counts every account the application creates. The count is cumulative:
//! dropping an account does not lower it, and duplicating one raises it.

use crate::error::{TrackerResult, ValidationError};
use crate::models::Money;

use super::account::Account;
use super::store::{TransactionStore, DEFAULT_INITIAL_CAPACITY};

/// Maximum length of an owner name
const MAX_NAME_LEN: usize = 100;

/// Creates accounts and keeps the running total
#[derive(Debug)]
pub struct UserRegistry {
    total_created: usize,
    initial_capacity: usize,
}

impl Default for UserRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl UserRegistry {
    pub fn new() -> Self {
        Self::with_initial_capacity(DEFAULT_INITIAL_CAPACITY)
    }

    /// Registry whose accounts start with the given store capacity
    pub fn with_initial_capacity(initial_capacity: usize) -> Self {
        Self {
            total_created: 0,
            initial_capacity,
        }
    }

    /// Create a new, empty account
    pub fn open_account(
        &mut self,
        name: impl Into<String>,
        starting_balance: Money,
    ) -> TrackerResult<Account> {
        let name = validate_name(name.into())?;
        let store = TransactionStore::with_capacity(starting_balance, self.initial_capacity);
        Ok(self.register(Account::from_parts(name, store)))
    }

    /// Wrap an already-built store, e.g. one restored from disk
    pub fn adopt(
        &mut self,
        name: impl Into<String>,
        store: TransactionStore,
    ) -> TrackerResult<Account> {
        let name = validate_name(name.into())?;
        Ok(self.register(Account::from_parts(name, store)))
    }

    /// Deep copy of an account; counts as a new user
    pub fn duplicate(&mut self, account: &Account) -> Account {
        let copy = Account::from_parts(account.name().to_string(), account.store().clone());
        self.register(copy)
    }

    /// Number of accounts created so far
    pub fn total_users(&self) -> usize {
        self.total_created
    }

    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    fn register(&mut self, account: Account) -> Account {
        self.total_created += 1;
        tracing::debug!(
            account = account.name(),
            total = self.total_created,
            "account registered"
        );
        account
    }
}

fn validate_name(name: String) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if trimmed.len() > MAX_NAME_LEN {
        return Err(ValidationError::NameTooLong(trimmed.len()));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewTransaction, TransactionKind};

    #[test]
    fn test_counts_each_account() {
        let mut registry = UserRegistry::new();
        assert_eq!(registry.total_users(), 0);

        let _alice = registry.open_account("alice", Money::from_units(1000)).unwrap();
        let bob = registry.open_account("bob", Money::from_units(500)).unwrap();
        assert_eq!(registry.total_users(), 2);

        drop(bob);
        assert_eq!(registry.total_users(), 2);
    }

    #[test]
    fn test_duplicate_counts_and_copies_history() {
        let mut registry = UserRegistry::new();
        let mut alice = registry.open_account("alice", Money::zero()).unwrap();
        alice
            .add_transaction(NewTransaction::new(
                TransactionKind::Income,
                Money::from_units(10),
                "gift",
                "",
                "",
            ))
            .unwrap();

        let copy = registry.duplicate(&alice);
        assert_eq!(registry.total_users(), 2);
        assert_eq!(copy, alice);

        alice
            .add_transaction(NewTransaction::new(
                TransactionKind::Expense,
                Money::from_units(3),
                "snacks",
                "",
                "",
            ))
            .unwrap();
        assert_eq!(copy.transaction_count(), 1);
        assert_eq!(alice.transaction_count(), 2);
    }

    #[test]
    fn test_rejects_blank_name() {
        let mut registry = UserRegistry::new();
        let err = registry.open_account("  ", Money::zero()).unwrap_err();
        assert!(err.is_validation());
        assert!(registry.open_account("a".repeat(101), Money::zero()).is_err());
        assert_eq!(registry.total_users(), 0);
    }

    #[test]
    fn test_uses_configured_capacity() {
        let mut registry = UserRegistry::with_initial_capacity(8);
        let account = registry.open_account("alice", Money::zero()).unwrap();
        assert_eq!(account.store().capacity(), 8);
    }
}
