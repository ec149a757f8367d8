//! Transaction record model
//!
//! A [`TransactionRecord`] is one immutable ledger entry. Records are built
//! from a [`NewTransaction`], which is what callers fill in from user input.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::RecordId;
use super::kind::TransactionKind;
use super::money::Money;
use crate::error::ValidationError;

/// Input for appending a transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub kind: TransactionKind,
    pub amount: Money,
    pub category: String,
    /// Kept exactly as entered
    pub date: String,
    pub note: String,
}

impl NewTransaction {
    pub fn new(
        kind: TransactionKind,
        amount: Money,
        category: impl Into<String>,
        date: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            amount,
            category: category.into(),
            date: date.into(),
            note: note.into(),
        }
    }

    /// Build an input from raw text fields
    ///
    /// Only the kind and the amount are interpreted here; range checks on the
    /// amount happen when the record is appended.
    pub fn parse(
        kind: &str,
        amount: &str,
        category: &str,
        date: &str,
        note: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self::new(
            TransactionKind::parse(kind)?,
            Money::parse(amount)?,
            category,
            date,
            note,
        ))
    }
}

/// A single ledger entry
///
/// Fields are private; once built a record cannot be changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    id: RecordId,
    kind: TransactionKind,
    amount: Money,
    category: String,
    date: String,
    #[serde(default)]
    note: String,
    recorded_at: DateTime<Utc>,
}

impl TransactionRecord {
    /// Validate the input and build a record from it
    pub fn new(input: NewTransaction) -> Result<Self, ValidationError> {
        validate_fields(input.amount, &input.category)?;

        Ok(Self {
            id: RecordId::new(),
            kind: input.kind,
            amount: input.amount,
            category: input.category.trim().to_string(),
            date: input.date,
            note: input.note,
            recorded_at: Utc::now(),
        })
    }

    /// Re-check a record that came from outside, e.g. a ledger file
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(self.amount, &self.category)
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }

    /// Effect on the balance: positive for income, negative for expense
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

fn validate_fields(amount: Money, category: &str) -> Result<(), ValidationError> {
    if !amount.is_positive() {
        return Err(ValidationError::InvalidAmount(amount));
    }
    if category.trim().is_empty() {
        return Err(ValidationError::EmptyCategory);
    }
    Ok(())
}

impl fmt::Display for TransactionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date, self.kind, self.category, self.amount
        )
    }
}
