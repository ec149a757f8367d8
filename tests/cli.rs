use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tracker(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("finance-tracker").unwrap();
    cmd.env("FINANCE_TRACKER_DATA_DIR", data_dir.path())
        .env_remove("FINANCE_TRACKER_LOG");
    cmd
}

fn add(data_dir: &TempDir, args: &[&str]) {
    tracker(data_dir).arg("add").args(args).assert().success();
}

#[test]
fn add_then_history_shows_running_balance() {
    let data_dir = TempDir::new().unwrap();

    tracker(&data_dir)
        .args([
            "add", "alice", "income", "1000", "salary", "01/01/2024", "--opening", "1000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current Balance: $2000.00"));
    add(&data_dir, &["alice", "expense", "200", "food", "02/01/2024", "--note", "Groceries"]);

    tracker(&data_dir)
        .args(["history", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== alice's Transaction History ==="))
        .stdout(predicate::str::contains("Note: Groceries"))
        .stdout(predicate::str::contains("Current Balance: $1800.00"));
}

#[test]
fn rejected_amount_leaves_balance_unchanged() {
    let data_dir = TempDir::new().unwrap();
    add(&data_dir, &["alice", "income", "1800", "salary", "01/01/2024"]);

    tracker(&data_dir)
        .args(["add", "alice", "expense", "-5", "food", "03/01/2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount must be positive"));

    tracker(&data_dir)
        .args(["history", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current Balance: $1800.00"));
}

#[test]
fn unknown_kind_is_rejected() {
    let data_dir = TempDir::new().unwrap();

    tracker(&data_dir)
        .args(["add", "alice", "gift", "10", "misc", "01/01/2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Type must be 'income' or 'expense'"));
}

#[test]
fn history_of_empty_account() {
    let data_dir = TempDir::new().unwrap();

    tracker(&data_dir)
        .args(["interactive", "bob", "--opening", "50"])
        .write_stdin("5\n")
        .assert()
        .success();

    tracker(&data_dir)
        .args(["history", "bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions to display."));
}

#[test]
fn history_of_unknown_user_fails() {
    let data_dir = TempDir::new().unwrap();

    tracker(&data_dir)
        .args(["history", "nobody"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Account not found: nobody"));
}

#[test]
fn compare_reports_exact_balances() {
    let data_dir = TempDir::new().unwrap();
    add(&data_dir, &["alice", "income", "1300", "salary", "01/01/2024"]);
    add(&data_dir, &["bob", "income", "500", "salary", "01/01/2024"]);

    tracker(&data_dir)
        .args(["compare", "alice", "bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "alice has more savings: $1300.00 vs $500.00",
        ));

    tracker(&data_dir)
        .args(["compare", "bob", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "alice has more savings: $1300.00 vs $500.00",
        ));
}

#[test]
fn save_writes_snapshot() {
    let data_dir = TempDir::new().unwrap();
    add(&data_dir, &["alice", "income", "1000", "salary", "01/01/2024", "--opening", "1000"]);

    tracker(&data_dir)
        .args(["save", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Data saved to"));

    let snapshot =
        std::fs::read_to_string(data_dir.path().join("data").join("alice_finance.txt")).unwrap();
    assert!(snapshot.starts_with("---- Personal Finance Tracker ----\nUser Name: alice\n"));
    assert!(snapshot.contains("Balance: 2000.00\n"));
    assert!(snapshot.contains("Total Transactions: 1\n"));
    assert!(snapshot.contains("Transaction 1:\nType: income\nAmount: 1000.00\n"));
}

#[test]
fn export_csv_to_stdout() {
    let data_dir = TempDir::new().unwrap();
    add(&data_dir, &["alice", "income", "1000", "salary", "01/01/2024"]);
    add(&data_dir, &["alice", "expense", "19.99", "food", "02/01/2024"]);

    tracker(&data_dir)
        .args(["export", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Index,Type,Amount,Category,Date,Note\n",
        ))
        .stdout(predicate::str::contains("2,expense,19.99,food,02/01/2024,"));
}

#[test]
fn report_groups_by_category() {
    let data_dir = TempDir::new().unwrap();
    add(&data_dir, &["alice", "income", "1000", "salary", "01/01/2024"]);
    add(&data_dir, &["alice", "expense", "200", "food", "02/01/2024"]);

    tracker(&data_dir)
        .args(["report", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Category Report: alice"))
        .stdout(predicate::str::contains("salary"))
        .stdout(predicate::str::contains("food"));
}

#[test]
fn interactive_session() {
    let data_dir = TempDir::new().unwrap();

    tracker(&data_dir)
        .args(["interactive", "alice", "--opening", "1000"])
        .write_stdin("1\nincome\n1000\nsalary\n01/01/2024\nMonthly salary\n2\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Transaction Added Successfully!"))
        .stdout(predicate::str::contains("Current Balance: $2000.00"))
        .stdout(predicate::str::contains(
            "Thank you for using Personal Finance Tracker!",
        ));
}

#[test]
fn config_shows_paths() {
    let data_dir = TempDir::new().unwrap();

    tracker(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initial capacity:         100"))
        .stdout(predicate::str::contains("Currency symbol:          $"));
}

#[test]
fn overflowing_income_is_rejected_and_not_saved() {
    let data_dir = TempDir::new().unwrap();
    add(&data_dir, &["bob", "income", "50000000000000000", "windfall", "01/01/2024"]);

    tracker(&data_dir)
        .args(["add", "bob", "income", "50000000000000000", "windfall", "02/01/2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("would overflow the account balance"));

    tracker(&data_dir)
        .args(["history", "bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Current Balance: $50000000000000000.00",
        ))
        .stdout(predicate::str::contains("Date: 02/01/2024").not());
}

#[test]
fn audit_lists_recent_operations() {
    let data_dir = TempDir::new().unwrap();
    add(&data_dir, &["alice", "income", "1000", "salary", "01/01/2024"]);
    add(&data_dir, &["bob", "income", "500", "salary", "01/01/2024"]);

    tracker(&data_dir)
        .args(["audit", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("OPEN alice"))
        .stdout(predicate::str::contains("ADD alice txn-"))
        .stdout(predicate::str::contains("bob").not());

    tracker(&data_dir)
        .args(["audit", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ADD bob"))
        .stdout(predicate::str::contains("alice").not());
}
