//! Interactive menu session
//!
//! A line-oriented loop over any reader and writer. End of input is treated
//! the same as choosing Exit.

use std::io::{BufRead, Write};

use crate::display::format_history;
use crate::error::{TrackerError, TrackerResult};
use crate::ledger::{compare_balance, Account};
use crate::models::{Money, NewTransaction, TransactionKind};
use crate::services::LedgerService;

/// Opening balance offered for users created from the menu
const NEW_USER_OPENING: Money = Money::from_units(500);

const MENU: &str = "\n------ Personal Finance Tracker ------\n\
                    1. Add Transaction\n\
                    2. View All Transactions\n\
                    3. Save to File\n\
                    4. Create Another User\n\
                    5. Exit\n";

/// Run the menu loop for `account` until the user exits or input ends
pub fn run_interactive<R: BufRead, W: Write>(
    service: &mut LedgerService,
    account: Account,
    input: R,
    output: W,
) -> TrackerResult<()> {
    let mut session = Session {
        service,
        account,
        input,
        output,
    };
    session.run()
}

struct Session<'a, R, W> {
    service: &'a mut LedgerService,
    account: Account,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<'_, R, W> {
    fn run(&mut self) -> TrackerResult<()> {
        let balance = self.money(self.account.balance());
        writeln!(
            self.output,
            "Welcome, {}! Current Balance: {}",
            self.account.name(),
            balance
        )?;

        loop {
            write!(self.output, "{}", MENU)?;
            let Some(choice) = self.prompt("Enter your choice: ")? else {
                break;
            };

            let keep_going = match choice.trim() {
                "1" => self.add_transaction()?,
                "2" => self.view_all()?,
                "3" => self.save_current()?,
                "4" => self.create_another_user()?,
                "5" => false,
                other => {
                    writeln!(
                        self.output,
                        "Invalid choice '{}'. Please enter a number from 1 to 5.",
                        other
                    )?;
                    true
                }
            };
            if !keep_going {
                break;
            }
        }

        writeln!(self.output, "Thank you for using Personal Finance Tracker!")?;
        self.output.flush()?;
        Ok(())
    }

    /// Print `label` and read one line; `None` at end of input
    fn prompt(&mut self, label: &str) -> TrackerResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.service.settings().currency_symbol)
    }

    fn report_error(&mut self, err: &TrackerError) -> TrackerResult<()> {
        match err {
            TrackerError::Validation(reason) => writeln!(self.output, "Error: {}", reason)?,
            other => {
                tracing::error!(error = %other, "operation failed");
                writeln!(self.output, "Error: {}", other)?;
            }
        }
        Ok(())
    }

    fn add_transaction(&mut self) -> TrackerResult<bool> {
        let Some(kind) = self.prompt("Enter type (income/expense): ")? else {
            return Ok(false);
        };
        let Some(amount) = self.prompt("Enter amount: ")? else {
            return Ok(false);
        };
        let Some(category) = self.prompt("Enter category: ")? else {
            return Ok(false);
        };
        let Some(date) = self.prompt("Enter date (dd/mm/yyyy): ")? else {
            return Ok(false);
        };
        let Some(note) = self.prompt("Enter note: ")? else {
            return Ok(false);
        };

        let result = NewTransaction::parse(&kind, &amount, &category, &date, &note)
            .map_err(TrackerError::from)
            .and_then(|input| self.service.add_transaction(&mut self.account, input));

        match result {
            Ok(_) => {
                let balance = self.money(self.account.balance());
                writeln!(self.output, "Transaction Added Successfully!")?;
                writeln!(self.output, "Current Balance: {}", balance)?;
            }
            Err(err) => self.report_error(&err)?,
        }
        Ok(true)
    }

    fn view_all(&mut self) -> TrackerResult<bool> {
        let history = format_history(&self.account, &self.service.settings().currency_symbol);
        write!(self.output, "{}", history)?;
        Ok(true)
    }

    fn save_current(&mut self) -> TrackerResult<bool> {
        match self.service.save_snapshot(&self.account) {
            Ok(path) => writeln!(self.output, "Data saved to {}", path.display())?,
            Err(err) => self.report_error(&err)?,
        }
        Ok(true)
    }

    fn create_another_user(&mut self) -> TrackerResult<bool> {
        let Some(name) = self.prompt("Enter new user name: ")? else {
            return Ok(false);
        };
        let default_balance = self.money(NEW_USER_OPENING);
        let Some(opening) =
            self.prompt(&format!("Enter opening balance (default {}): ", default_balance))?
        else {
            return Ok(false);
        };

        let opening = opening.trim();
        let created = if opening.is_empty() {
            Ok(NEW_USER_OPENING)
        } else {
            Money::parse(opening).map_err(TrackerError::from)
        }
        .and_then(|balance| self.service.create_account(&name, Some(balance)));

        let mut other = match created {
            Ok(account) => account,
            Err(err) => {
                self.report_error(&err)?;
                return Ok(true);
            }
        };

        let Some(answer) =
            self.prompt("Add sample transactions (salary 1000, food 200)? (y/n): ")?
        else {
            return Ok(false);
        };
        if answer.trim().eq_ignore_ascii_case("y") {
            for sample in sample_transactions() {
                if let Err(err) = self.service.add_transaction(&mut other, sample) {
                    self.report_error(&err)?;
                    break;
                }
            }
        }

        let comparison = compare_balance(&self.account, &other);
        writeln!(
            self.output,
            "Comparing balances of {} and {}",
            comparison.first_name, comparison.second_name
        )?;
        writeln!(
            self.output,
            "{}",
            comparison.describe(&self.service.settings().currency_symbol)
        )?;
        writeln!(self.output, "Total Users: {}", self.service.total_users())?;

        let Some(answer) = self.prompt("Do you want to save new user's data to file? (y/n): ")?
        else {
            return Ok(false);
        };
        if answer.trim().eq_ignore_ascii_case("y") {
            match self.service.save_snapshot(&other) {
                Ok(path) => writeln!(self.output, "Data saved to {}", path.display())?,
                Err(err) => self.report_error(&err)?,
            }
        }
        Ok(true)
    }
}

/// Starter entries for a user created from the menu
fn sample_transactions() -> [NewTransaction; 2] {
    [
        NewTransaction::new(
            TransactionKind::Income,
            Money::from_units(1000),
            "salary",
            "01/01/2024",
            "Monthly salary",
        ),
        NewTransaction::new(
            TransactionKind::Expense,
            Money::from_units(200),
            "food",
            "02/01/2024",
            "Groceries",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Settings, TrackerPaths};
    use crate::storage::Storage;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn create_service(temp_dir: &TempDir) -> LedgerService {
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        LedgerService::new(storage, Settings::default())
    }

    fn run_script(service: &mut LedgerService, account: Account, script: &str) -> String {
        let mut output = Vec::new();
        run_interactive(service, account, Cursor::new(script.to_string()), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_add_and_view() {
        let temp_dir = TempDir::new().unwrap();
        let mut service = create_service(&temp_dir);
        let account = service
            .create_account("alice", Some(Money::from_units(1000)))
            .unwrap();

        let script = "1\nincome\n1000\nsalary\n01/01/2024\nMonthly salary\n\
                      1\nexpense\n200\nfood\n02/01/2024\nGroceries\n\
                      2\n5\n";
        let text = run_script(&mut service, account, script);

        assert_eq!(text.matches("Transaction Added Successfully!").count(), 2);
        assert!(text.contains("=== alice's Transaction History ==="));
        assert!(text.contains("Current Balance: $1800.00"));
        assert!(text.ends_with("Thank you for using Personal Finance Tracker!\n"));

        let restored = service.load_account("alice").unwrap();
        assert_eq!(restored.balance(), Money::from_units(1800));
    }

    #[test]
    fn test_invalid_input_keeps_session_alive() {
        let temp_dir = TempDir::new().unwrap();
        let mut service = create_service(&temp_dir);
        let account = service
            .create_account("alice", Some(Money::from_units(1800)))
            .unwrap();

        let script = "1\nexpense\n-5\nfood\n03/01/2024\n\n\
                      1\ngift\n10\nmisc\n03/01/2024\n\n\
                      9\n2\n5\n";
        let text = run_script(&mut service, account, script);

        assert!(text.contains("Error: Amount must be positive (got -5.00)"));
        assert!(text.contains("Error: Type must be 'income' or 'expense' (got 'gift')"));
        assert!(text.contains("Invalid choice '9'"));
        assert!(text.contains("No transactions to display."));
        assert_eq!(
            service.load_account("alice").unwrap().balance(),
            Money::from_units(1800)
        );
    }

    #[test]
    fn test_create_another_user_compares() {
        let temp_dir = TempDir::new().unwrap();
        let mut service = create_service(&temp_dir);
        let account = service
            .create_account("alice", Some(Money::from_units(1300)))
            .unwrap();

        let text = run_script(&mut service, account, "4\nbob\n500\nn\ny\n5\n");

        assert!(text.contains("Comparing balances of alice and bob"));
        assert!(text.contains("alice has more savings: $1300.00 vs $500.00"));
        assert!(text.contains("Total Users: 2"));
        assert!(temp_dir.path().join("data").join("bob_finance.txt").exists());
    }

    #[test]
    fn test_new_user_with_sample_transactions() {
        let temp_dir = TempDir::new().unwrap();
        let mut service = create_service(&temp_dir);
        let account = service
            .create_account("alice", Some(Money::from_units(1000)))
            .unwrap();

        let text = run_script(&mut service, account, "4\nbob\n\ny\nn\n5\n");

        assert!(text.contains("Enter opening balance (default $500.00): "));
        assert!(text.contains("bob has more savings: $1300.00 vs $1000.00"));
        assert!(!temp_dir.path().join("data").join("bob_finance.txt").exists());

        let bob = service.load_account("bob").unwrap();
        assert_eq!(bob.starting_balance(), Money::from_units(500));
        assert_eq!(bob.balance(), Money::from_units(1300));
        let categories: Vec<_> = bob.transactions().map(|r| r.category()).collect();
        assert_eq!(categories, vec!["salary", "food"]);
    }

    #[test]
    fn test_save_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut service = create_service(&temp_dir);
        let account = service.create_account("alice", None).unwrap();

        let text = run_script(&mut service, account, "3\n5\n");

        assert!(text.contains("Data saved to"));
        let snapshot =
            std::fs::read_to_string(temp_dir.path().join("data").join("alice_finance.txt"))
                .unwrap();
        assert!(snapshot.contains("User Name: alice"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let temp_dir = TempDir::new().unwrap();
        let mut service = create_service(&temp_dir);
        let account = service.create_account("alice", None).unwrap();

        let text = run_script(&mut service, account, "1\nincome\n");
        assert!(text.ends_with("Thank you for using Personal Finance Tracker!\n"));
        assert_eq!(service.load_account("alice").unwrap().transaction_count(), 0);
    }
}
