//! Ledger repository for JSON storage
//!
//! Keeps every account's starting balance and records in `ledger.json`.
//! Balances are not written; they are recomputed from the records whenever an
//! account is restored, so the file cannot disagree with itself.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};
use crate::ledger::{Account, TransactionStore, UserRegistry};
use crate::models::{Money, TransactionRecord};

use super::file_io::{read_json, write_json_atomic};

/// One account as stored on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct StoredAccount {
    name: String,
    starting_balance: Money,
    #[serde(default)]
    transactions: Vec<TransactionRecord>,
}

impl StoredAccount {
    fn from_account(account: &Account) -> Self {
        Self {
            name: account.name().to_string(),
            starting_balance: account.starting_balance(),
            transactions: account.transactions().cloned().collect(),
        }
    }
}

/// Serializable file layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct LedgerData {
    #[serde(default)]
    accounts: Vec<StoredAccount>,
}

/// Repository for account persistence
pub struct LedgerRepository {
    path: PathBuf,
    accounts: BTreeMap<String, StoredAccount>,
}

impl LedgerRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            accounts: BTreeMap::new(),
        }
    }

    /// Load accounts from disk, replacing anything held in memory
    pub fn load(&mut self) -> TrackerResult<()> {
        let data: LedgerData = read_json(&self.path)?;

        self.accounts.clear();
        for stored in data.accounts {
            if self.accounts.contains_key(&stored.name) {
                return Err(TrackerError::Storage(format!(
                    "Ledger file lists account '{}' twice",
                    stored.name
                )));
            }
            self.accounts.insert(stored.name.clone(), stored);
        }

        tracing::debug!(
            path = %self.path.display(),
            accounts = self.accounts.len(),
            "ledger loaded"
        );
        Ok(())
    }

    /// Write all accounts to disk
    pub fn save(&self) -> TrackerResult<()> {
        let data = LedgerData {
            accounts: self.accounts.values().cloned().collect(),
        };
        write_json_atomic(&self.path, &data)?;
        tracing::debug!(path = %self.path.display(), "ledger saved");
        Ok(())
    }

    /// Names of all stored accounts, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.accounts.keys().map(|k| k.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.accounts.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Rebuild a stored account through the registry
    ///
    /// Records are validated again and the balance recomputed. Returns
    /// `Ok(None)` if no account has this name.
    pub fn restore(
        &self,
        registry: &mut UserRegistry,
        name: &str,
    ) -> TrackerResult<Option<Account>> {
        let Some(stored) = self.accounts.get(name) else {
            return Ok(None);
        };

        let store = TransactionStore::restore(
            stored.starting_balance,
            registry.initial_capacity(),
            stored.transactions.clone(),
        )
        .map_err(|e| {
            TrackerError::Storage(format!("Account '{}' has an invalid record: {}", name, e))
        })?;

        registry.adopt(stored.name.clone(), store).map(Some)
    }

    /// Like [`restore`](Self::restore) but a missing account is an error
    pub fn restore_required(
        &self,
        registry: &mut UserRegistry,
        name: &str,
    ) -> TrackerResult<Account> {
        self.restore(registry, name)?
            .ok_or_else(|| TrackerError::account_not_found(name))
    }

    /// Insert or replace an account's stored state
    pub fn upsert(&mut self, account: &Account) {
        self.accounts
            .insert(account.name().to_string(), StoredAccount::from_account(account));
    }
}
