//! Account: a named owner of one transaction store

use std::cmp::Ordering;
use std::fmt;

use crate::error::ValidationError;
use crate::models::{Money, NewTransaction, TransactionRecord};

use super::store::TransactionStore;

/// A user's ledger
///
/// Accounts are created through [`UserRegistry`](super::UserRegistry) so the
/// registry can count them. `Account` does not implement `Clone`; copying a
/// history goes through [`UserRegistry::duplicate`](super::UserRegistry::duplicate).
#[derive(Debug, PartialEq, Eq)]
pub struct Account {
    name: String,
    store: TransactionStore,
}

impl Account {
    pub(crate) fn from_parts(name: String, store: TransactionStore) -> Self {
        Self { name, store }
    }

    /// Append a transaction to this account's ledger
    ///
    /// Validation failures are returned to the caller; the account is left
    /// exactly as it was.
    pub fn add_transaction(
        &mut self,
        input: NewTransaction,
    ) -> Result<&TransactionRecord, ValidationError> {
        let name = &self.name;
        match self.store.append(input) {
            Ok(record) => {
                tracing::debug!(account = %name, id = %record.id(), "transaction added");
                Ok(record)
            }
            Err(e) => {
                tracing::warn!(account = %name, error = %e, "transaction rejected");
                Err(e)
            }
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> Money {
        self.store.balance()
    }

    pub fn starting_balance(&self) -> Money {
        self.store.starting_balance()
    }

    /// Records in the order they were entered
    pub fn transactions(&self) -> std::slice::Iter<'_, TransactionRecord> {
        self.store.records()
    }

    pub fn transaction_count(&self) -> usize {
        self.store.len()
    }

    pub fn has_transactions(&self) -> bool {
        !self.store.is_empty()
    }

    pub fn store(&self) -> &TransactionStore {
        &self.store
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.balance())
    }
}

/// Which side of a balance comparison came out ahead
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOutcome {
    FirstGreater,
    SecondGreater,
    Equal,
}

impl ComparisonOutcome {
    fn reversed(self) -> Self {
        match self {
            Self::FirstGreater => Self::SecondGreater,
            Self::SecondGreater => Self::FirstGreater,
            Self::Equal => Self::Equal,
        }
    }
}

/// Result of comparing two accounts' balances
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceComparison {
    pub outcome: ComparisonOutcome,
    pub first_name: String,
    pub first_balance: Money,
    pub second_name: String,
    pub second_balance: Money,
}

impl BalanceComparison {
    /// The same comparison seen from the other side
    pub fn reversed(&self) -> Self {
        Self {
            outcome: self.outcome.reversed(),
            first_name: self.second_name.clone(),
            first_balance: self.second_balance,
            second_name: self.first_name.clone(),
            second_balance: self.first_balance,
        }
    }

    /// Render using a currency symbol
    pub fn describe(&self, symbol: &str) -> String {
        let first = self.first_balance.format_with_symbol(symbol);
        let second = self.second_balance.format_with_symbol(symbol);
        match self.outcome {
            ComparisonOutcome::FirstGreater => format!(
                "{} has more savings: {} vs {}",
                self.first_name, first, second
            ),
            ComparisonOutcome::SecondGreater => format!(
                "{} has more savings: {} vs {}",
                self.second_name, second, first
            ),
            ComparisonOutcome::Equal => format!("Both have equal balance: {}", first),
        }
    }
}

impl fmt::Display for BalanceComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe("$"))
    }
}

/// Compare two accounts' balances without touching either
///
/// Balances are integer cents, so equality is exact.
pub fn compare_balance(first: &Account, second: &Account) -> BalanceComparison {
    let outcome = match first.balance().cmp(&second.balance()) {
        Ordering::Greater => ComparisonOutcome::FirstGreater,
        Ordering::Less => ComparisonOutcome::SecondGreater,
        Ordering::Equal => ComparisonOutcome::Equal,
    };

    BalanceComparison {
        outcome,
        first_name: first.name().to_string(),
        first_balance: first.balance(),
        second_name: second.name().to_string(),
        second_balance: second.balance(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;

    fn account(name: &str, units: i64) -> Account {
        Account::from_parts(
            name.to_string(),
            TransactionStore::new(Money::from_units(units)),
        )
    }

    #[test]
    fn test_add_transaction_updates_balance() {
        let mut acc = account("alice", 500);
        acc.add_transaction(NewTransaction::new(
            TransactionKind::Income,
            Money::from_units(1000),
            "salary",
            "01/01/2024",
            "Monthly salary",
        ))
        .unwrap();
        acc.add_transaction(NewTransaction::new(
            TransactionKind::Expense,
            Money::from_units(200),
            "food",
            "02/01/2024",
            "Groceries",
        ))
        .unwrap();

        assert_eq!(acc.balance(), Money::from_units(1300));
        assert_eq!(acc.transaction_count(), 2);
        assert_eq!(acc.starting_balance(), Money::from_units(500));
    }

    #[test]
    fn test_add_transaction_surfaces_error() {
        let mut acc = account("alice", 100);
        let err = acc
            .add_transaction(NewTransaction::new(
                TransactionKind::Expense,
                Money::zero(),
                "food",
                "",
                "",
            ))
            .unwrap_err();

        assert_eq!(err, ValidationError::InvalidAmount(Money::zero()));
        assert!(!acc.has_transactions());
        assert_eq!(acc.balance(), Money::from_units(100));
    }

    #[test]
    fn test_compare_first_greater() {
        let a = account("alice", 1300);
        let b = account("bob", 500);

        let cmp = compare_balance(&a, &b);
        assert_eq!(cmp.outcome, ComparisonOutcome::FirstGreater);
        assert_eq!(cmp.first_balance, Money::from_units(1300));
        assert_eq!(cmp.second_balance, Money::from_units(500));
        assert_eq!(
            cmp.to_string(),
            "alice has more savings: $1300.00 vs $500.00"
        );
    }

    #[test]
    fn test_compare_is_antisymmetric() {
        let a = account("alice", 1300);
        let b = account("bob", 500);

        let ab = compare_balance(&a, &b);
        let ba = compare_balance(&b, &a);
        assert_eq!(ba.outcome, ComparisonOutcome::SecondGreater);
        assert_eq!(ab.reversed(), ba);
        assert_eq!(ba.to_string(), "alice has more savings: $1300.00 vs $500.00");
    }

    #[test]
    fn test_compare_equal() {
        let a = account("alice", 42);
        let b = account("bob", 42);

        let cmp = compare_balance(&a, &b);
        assert_eq!(cmp.outcome, ComparisonOutcome::Equal);
        assert_eq!(cmp.to_string(), "Both have equal balance: $42.00");
    }

    #[test]
    fn test_compare_does_not_mutate() {
        let a = account("alice", 1);
        let b = account("bob", 2);
        let _ = compare_balance(&a, &b);
        assert_eq!(a.balance(), Money::from_units(1));
        assert_eq!(b.balance(), Money::from_units(2));
    }
}
