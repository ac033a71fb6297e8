//! Black-box tests for the `loan-approval` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn loan_approval() -> Command {
    let mut cmd = Command::cargo_bin("loan-approval").expect("binary built");
    cmd.env_remove("LOAN_APPROVAL_LEVELS")
        .env_remove("LOAN_MIN")
        .env_remove("LOAN_MAX")
        .env_remove("RUST_LOG")
        .env("APP_LOG_LEVEL", "off");
    cmd
}

#[test]
fn prompt_is_the_default_command() {
    loan_approval()
        .write_stdin("15000\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("please input the amount of loan(5000~50000):"))
        .stdout(predicate::str::contains("loan amount is 15000, result is 0, BankManager approved"));
}

#[test]
fn out_of_range_amount_exits_non_zero() {
    loan_approval()
        .write_stdin("4999\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "The amount of loan is out of range, the range is 5000~50000",
        ));

    loan_approval()
        .args(["approve", "--amount", "60000"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("loan amount is").not());
}

#[test]
fn non_numeric_amount_is_reported() {
    loan_approval()
        .args(["approve", "--amount", "plenty"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("'plenty' is not a valid loan amount"));
}

#[test]
fn approve_prints_json_decision() {
    loan_approval()
        .args(["approve", "--amount", "20000", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"message\": \"BankManager approved\""))
        .stdout(predicate::str::contains("\"result\": \"approved\""));
}

#[test]
fn configured_levels_replace_the_standard_chain() {
    loan_approval()
        .env("LOAN_APPROVAL_LEVELS", "Teller:6000,Director:50000")
        .args(["approve", "--amount", "7000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Director approved"));
}

#[test]
fn misordered_levels_fail_at_startup() {
    loan_approval()
        .env("LOAN_APPROVAL_LEVELS", "Director:50000,Teller:6000")
        .arg("levels")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("approval chain error"));
}

#[test]
fn levels_lists_the_standard_roles() {
    loan_approval()
        .arg("levels")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Employee up to 10000"))
        .stdout(predicate::str::contains("5. TopBankManager up to 50000"));
}
