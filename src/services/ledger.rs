//! Ledger service
//!
//! Business logic on top of storage: opening and restoring accounts,
//! appending transactions with persistence and auditing, snapshots, and
//! balance comparison.

use std::path::PathBuf;

use crate::audit::AuditEntry;
use crate::config::Settings;
use crate::error::{TrackerError, TrackerResult};
use crate::export::save_snapshot;
use crate::ledger::{compare_balance, Account, BalanceComparison, UserRegistry};
use crate::models::{Money, NewTransaction, TransactionRecord};
use crate::storage::Storage;

/// Service owning the storage, settings, and user registry for one process
pub struct LedgerService {
    storage: Storage,
    settings: Settings,
    registry: UserRegistry,
}

impl LedgerService {
    /// Create a service; the registry starts at zero users
    pub fn new(storage: Storage, settings: Settings) -> Self {
        let registry = UserRegistry::with_initial_capacity(settings.initial_capacity);
        Self {
            storage,
            settings,
            registry,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Number of accounts created or restored by this process
    pub fn total_users(&self) -> usize {
        self.registry.total_users()
    }

    /// Names of all stored accounts
    pub fn account_names(&self) -> Vec<String> {
        self.storage.ledger.names().map(str::to_string).collect()
    }

    /// Restore a stored account; a missing account is an error
    pub fn load_account(&mut self, name: &str) -> TrackerResult<Account> {
        self.storage
            .ledger
            .restore_required(&mut self.registry, name.trim())
    }

    /// Open a new account and persist it
    ///
    /// `starting_balance` falls back to the configured default. Fails with a
    /// duplicate error if the name is taken.
    pub fn create_account(
        &mut self,
        name: &str,
        starting_balance: Option<Money>,
    ) -> TrackerResult<Account> {
        let name = name.trim();
        if self.storage.ledger.contains(name) {
            return Err(TrackerError::duplicate_account(name));
        }

        let starting_balance =
            starting_balance.unwrap_or(self.settings.default_starting_balance);
        let account = self.registry.open_account(name, starting_balance)?;

        self.storage.ledger.upsert(&account);
        self.storage.save_all()?;
        self.storage.audit(&AuditEntry::open_account(&account));

        tracing::info!(
            account = account.name(),
            starting_balance = %starting_balance,
            "account opened"
        );
        Ok(account)
    }

    /// Restore an account if it exists, otherwise open it
    ///
    /// `starting_balance` only applies when a new account is opened.
    pub fn open_or_load(
        &mut self,
        name: &str,
        starting_balance: Option<Money>,
    ) -> TrackerResult<Account> {
        if self.storage.ledger.contains(name.trim()) {
            if starting_balance.is_some() {
                tracing::debug!(account = name, "existing account, opening balance ignored");
            }
            self.load_account(name)
        } else {
            self.create_account(name, starting_balance)
        }
    }

    /// Append a transaction, then persist and audit it
    ///
    /// A validation failure leaves the account and the ledger file untouched.
    pub fn add_transaction(
        &mut self,
        account: &mut Account,
        input: NewTransaction,
    ) -> TrackerResult<TransactionRecord> {
        let record = account.add_transaction(input)?.clone();

        self.storage.ledger.upsert(account);
        self.storage.save_all()?;
        self.storage
            .audit(&AuditEntry::add_transaction(account, &record));

        Ok(record)
    }

    /// Write the account's text snapshot
    pub fn save_snapshot(&self, account: &Account) -> TrackerResult<PathBuf> {
        let path = save_snapshot(self.storage.paths(), account)?;
        self.storage.audit(&AuditEntry::save_snapshot(account, &path));
        Ok(path)
    }

    /// Most recent audit entries, oldest first, optionally for one account
    pub fn audit_history(
        &self,
        account: Option<&str>,
        limit: usize,
    ) -> TrackerResult<Vec<AuditEntry>> {
        let audit = &self.storage.audit;
        match account {
            None => audit.read_recent(limit),
            Some(name) => {
                let name = name.trim();
                let mut entries: Vec<_> = audit
                    .read_all()?
                    .into_iter()
                    .filter(|entry| entry.account == name)
                    .collect();
                let start = entries.len().saturating_sub(limit);
                Ok(entries.split_off(start))
            }
        }
    }

    /// Load two stored accounts and compare their balances
    pub fn compare(&mut self, first: &str, second: &str) -> TrackerResult<BalanceComparison> {
        let first = self.load_account(first)?;
        let second = self.load_account(second)?;
        Ok(compare_balance(&first, &second))
    }
}
