//! Category report
//!
//! Income and expense totals per category for one account.

use std::collections::BTreeMap;

use crate::ledger::Account;
use crate::models::{Money, TransactionKind};

/// Totals for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotals {
    pub category: String,
    pub income: Money,
    pub expense: Money,
    pub transaction_count: usize,
}

impl CategoryTotals {
    /// Income minus expense
    pub fn net(&self) -> Money {
        self.income - self.expense
    }
}

/// Per-category breakdown of an account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryReport {
    pub account_name: String,
    /// Sorted by category name
    pub categories: Vec<CategoryTotals>,
    pub total_income: Money,
    pub total_expense: Money,
    pub total_transactions: usize,
    pub starting_balance: Money,
    pub balance: Money,
}

impl CategoryReport {
    /// Build the report from an account's records
    pub fn generate(account: &Account) -> Self {
        let mut by_category: BTreeMap<&str, CategoryTotals> = BTreeMap::new();

        for record in account.transactions() {
            let totals = by_category
                .entry(record.category())
                .or_insert_with(|| CategoryTotals {
                    category: record.category().to_string(),
                    income: Money::zero(),
                    expense: Money::zero(),
                    transaction_count: 0,
                });

            match record.kind() {
                TransactionKind::Income => totals.income += record.amount(),
                TransactionKind::Expense => totals.expense += record.amount(),
            }
            totals.transaction_count += 1;
        }

        Self {
            account_name: account.name().to_string(),
            categories: by_category.into_values().collect(),
            total_income: account.store().total_income(),
            total_expense: account.store().total_expense(),
            total_transactions: account.transaction_count(),
            starting_balance: account.starting_balance(),
            balance: account.balance(),
        }
    }

    /// Income minus expense across all categories
    pub fn net(&self) -> Money {
        self.total_income - self.total_expense
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Category Report: {}\n", self.account_name));
        output.push_str(&"=".repeat(64));
        output.push('\n');

        if self.categories.is_empty() {
            output.push_str("No transactions to report.\n");
        } else {
            output.push_str(&format!(
                "{:<24} {:>12} {:>12} {:>8}\n",
                "Category", "Income", "Expense", "Count"
            ));
            output.push_str(&"-".repeat(64));
            output.push('\n');

            for totals in &self.categories {
                output.push_str(&format!(
                    "{:<24} {:>12} {:>12} {:>8}\n",
                    totals.category,
                    totals.income.format_with_symbol(symbol),
                    totals.expense.format_with_symbol(symbol),
                    totals.transaction_count
                ));
            }
            output.push_str(&"-".repeat(64));
            output.push('\n');
        }

        output.push_str(&format!(
            "{:<24} {:>12} {:>12} {:>8}\n",
            "TOTAL",
            self.total_income.format_with_symbol(symbol),
            self.total_expense.format_with_symbol(symbol),
            self.total_transactions
        ));
        output.push_str(&format!(
            "Net: {}\n",
            self.net().format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Starting Balance: {}\n",
            self.starting_balance.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Current Balance: {}\n",
            self.balance.format_with_symbol(symbol)
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::UserRegistry;
    use crate::models::NewTransaction;

    fn add(account: &mut Account, kind: TransactionKind, units: i64, category: &str) {
        account
            .add_transaction(NewTransaction::new(
                kind,
                Money::from_units(units),
                category,
                "",
                "",
            ))
            .unwrap();
    }

    #[test]
    fn test_groups_by_category() {
        let mut registry = UserRegistry::new();
        let mut account = registry.open_account("alice", Money::from_units(100)).unwrap();
        add(&mut account, TransactionKind::Expense, 30, "food");
        add(&mut account, TransactionKind::Income, 500, "salary");
        add(&mut account, TransactionKind::Expense, 20, "food");
        add(&mut account, TransactionKind::Income, 5, "food");

        let report = CategoryReport::generate(&account);

        assert_eq!(report.categories.len(), 2);
        let food = &report.categories[0];
        assert_eq!(food.category, "food");
        assert_eq!(food.expense, Money::from_units(50));
        assert_eq!(food.income, Money::from_units(5));
        assert_eq!(food.transaction_count, 3);
        assert_eq!(food.net(), Money::from_units(-45));

        assert_eq!(report.categories[1].category, "salary");
        assert_eq!(report.total_income, Money::from_units(505));
        assert_eq!(report.total_expense, Money::from_units(50));
        assert_eq!(report.net(), Money::from_units(455));
        assert_eq!(report.balance, Money::from_units(555));
    }

    #[test]
    fn test_empty_account() {
        let mut registry = UserRegistry::new();
        let account = registry.open_account("bob", Money::zero()).unwrap();

        let report = CategoryReport::generate(&account);
        assert!(report.categories.is_empty());
        assert!(report
            .format_terminal("$")
            .contains("No transactions to report."));
    }

    #[test]
    fn test_format_terminal() {
        let mut registry = UserRegistry::new();
        let mut account = registry.open_account("alice", Money::zero()).unwrap();
        add(&mut account, TransactionKind::Income, 1000, "salary");

        let text = CategoryReport::generate(&account).format_terminal("$");
        assert!(text.starts_with("Category Report: alice\n"));
        assert!(text.contains("salary"));
        assert!(text.contains("$1000.00"));
        assert!(text.contains("Current Balance: $1000.00\n"));
    }
}
