//! Transaction store
//!
//! Holds an account's records in the order they were entered together with
//! the running balance. The balance is adjusted on every append and is only
//! rebuilt from the records when a store is restored from disk.
//!
//! ## Growth policy
//!
//! The store tracks a logical capacity that starts at a configured value
//! (100 by default) and doubles whenever an append finds it full. The backing
//! `Vec` is reserved to match, so growth happens at the same points a
//! fixed-buffer implementation would resize.
//!
//! ## Totals
//!
//! The balance and the income and expense totals are kept with checked
//! arithmetic. An entry that would push any of them out of range is rejected
//! with [`ValidationError::BalanceOverflow`] before the store changes.

use crate::error::ValidationError;
use crate::models::{Money, NewTransaction, TransactionKind, TransactionRecord};

/// Capacity a store starts with unless configured otherwise
pub const DEFAULT_INITIAL_CAPACITY: usize = 100;

/// Running totals derived from the records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Totals {
    balance: Money,
    income: Money,
    expense: Money,
}

impl Totals {
    fn opening(balance: Money) -> Self {
        Self {
            balance,
            income: Money::zero(),
            expense: Money::zero(),
        }
    }

    /// Totals after applying `record`, or an error if any would overflow
    fn apply(self, record: &TransactionRecord) -> Result<Self, ValidationError> {
        let amount = record.amount();
        let overflow = || ValidationError::BalanceOverflow(amount);

        let next = match record.kind() {
            TransactionKind::Income => Self {
                balance: self.balance.checked_add(amount).ok_or_else(overflow)?,
                income: self.income.checked_add(amount).ok_or_else(overflow)?,
                expense: self.expense,
            },
            TransactionKind::Expense => Self {
                balance: self.balance.checked_sub(amount).ok_or_else(overflow)?,
                income: self.income,
                expense: self.expense.checked_add(amount).ok_or_else(overflow)?,
            },
        };
        Ok(next)
    }
}

/// Ordered records plus running balance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionStore {
    records: Vec<TransactionRecord>,
    starting_balance: Money,
    totals: Totals,
    capacity: usize,
}

impl TransactionStore {
    /// Create an empty store with the default capacity
    pub fn new(starting_balance: Money) -> Self {
        Self::with_capacity(starting_balance, DEFAULT_INITIAL_CAPACITY)
    }

    /// Create an empty store with a given initial capacity
    ///
    /// A capacity of zero is bumped to one so doubling always makes progress.
    pub fn with_capacity(starting_balance: Money, initial_capacity: usize) -> Self {
        let capacity = initial_capacity.max(1);
        Self {
            records: Vec::with_capacity(capacity),
            starting_balance,
            totals: Totals::opening(starting_balance),
            capacity,
        }
    }

    /// Rebuild a store from previously saved records
    ///
    /// Every record is validated again and the balance is recomputed from
    /// scratch. Capacity doubles from `initial_capacity` until the records fit.
    pub fn restore(
        starting_balance: Money,
        initial_capacity: usize,
        records: Vec<TransactionRecord>,
    ) -> Result<Self, ValidationError> {
        let mut store = Self::with_capacity(starting_balance, initial_capacity);
        while store.capacity < records.len() {
            store.capacity *= 2;
        }
        store.records.reserve_exact(store.capacity - store.records.len());

        store.totals = records.iter().try_fold(store.totals, |totals, record| {
            record.validate()?;
            totals.apply(record)
        })?;
        store.records = records;

        Ok(store)
    }

    /// Validate and append a transaction
    ///
    /// On error nothing changes: no record is stored and the balance stays put.
    pub fn append(&mut self, input: NewTransaction) -> Result<&TransactionRecord, ValidationError> {
        let record = TransactionRecord::new(input)?;
        let totals = self.totals.apply(&record)?;

        if self.records.len() >= self.capacity {
            self.grow();
        }

        self.totals = totals;
        self.records.push(record);

        tracing::trace!(
            count = self.records.len(),
            balance = %self.totals.balance,
            "appended transaction"
        );

        Ok(&self.records[self.records.len() - 1])
    }

    fn grow(&mut self) {
        self.capacity *= 2;
        let additional = self.capacity - self.records.len();
        self.records.reserve_exact(additional);
        tracing::debug!(capacity = self.capacity, "transaction store resized");
    }

    /// All records in insertion order
    ///
    /// Each call starts a fresh iterator; nothing is consumed.
    pub fn records(&self) -> std::slice::Iter<'_, TransactionRecord> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[TransactionRecord] {
        &self.records
    }

    /// Current running balance
    pub fn balance(&self) -> Money {
        self.totals.balance
    }

    pub fn starting_balance(&self) -> Money {
        self.starting_balance
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Logical capacity under the doubling policy
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Sum of all income amounts
    pub fn total_income(&self) -> Money {
        self.totals.income
    }

    /// Sum of all expense amounts, as a positive value
    pub fn total_expense(&self) -> Money {
        self.totals.expense
    }
}

impl<'a> IntoIterator for &'a TransactionStore {
    type Item = &'a TransactionRecord;
    type IntoIter = std::slice::Iter<'a, TransactionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records()
    }
}
