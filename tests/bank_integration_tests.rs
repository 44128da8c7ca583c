//! Bank integration tests
//!
//! Drives the public API end to end: the ledger rules, the registries, and a
//! full shell session over in-memory input and output.

use checking_ledger::core::{deposit, withdraw, WithdrawRequest};
use checking_ledger::storage::{AccountRegistry, UserRegistry};
use checking_ledger::{AccountLimits, BankError, Session, Shell};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::io::Cursor;

fn request(balance: Decimal, amount: Decimal, count: u32) -> WithdrawRequest {
    WithdrawRequest {
        balance,
        amount,
        per_transaction_limit: dec!(500),
        withdrawal_count: count,
        withdrawal_count_limit: 3,
    }
}

#[test]
fn test_withdraw_scenarios() {
    assert!(matches!(
        withdraw(&request(dec!(100), dec!(150), 0)),
        Err(BankError::InsufficientFunds { .. })
    ));
    assert!(matches!(
        withdraw(&request(dec!(1000), dec!(600), 0)),
        Err(BankError::LimitExceeded { .. })
    ));
    assert!(matches!(
        withdraw(&request(dec!(1000), dec!(200), 3)),
        Err(BankError::WithdrawalCountExceeded { limit: 3 })
    ));

    let outcome = withdraw(&request(dec!(1000), dec!(200), 0)).unwrap();
    assert_eq!(outcome.new_balance, dec!(800));
    assert_eq!(outcome.new_withdrawal_count, 1);
}

#[test]
fn test_non_positive_amounts_rejected() {
    for amount in [dec!(0), dec!(-0.01), dec!(-5), dec!(-1000)] {
        assert_eq!(
            deposit(dec!(100), amount),
            Err(BankError::InvalidAmount(amount))
        );
        assert_eq!(
            withdraw(&request(dec!(100), amount, 0)),
            Err(BankError::InvalidAmount(amount))
        );
    }
}

#[test]
fn test_deposit_appends_one_entry() {
    let mut session = Session::default();
    session.register_user("Ana", "", "1", "").unwrap();
    session.open_account("1").unwrap();
    session.select_account(1).unwrap();

    for (i, amount) in [dec!(0.01), dec!(10), dec!(99.99)].into_iter().enumerate() {
        let before = session.active_account().unwrap().get_balance();
        session.deposit(amount).unwrap();
        let account = session.active_account().unwrap();
        assert_eq!(account.get_balance(), before + amount);
        assert_eq!(account.get_transaction_log().len(), i + 1);
    }

    // A rejected deposit changes nothing.
    assert!(session.deposit(dec!(-5)).is_err());
    let account = session.active_account().unwrap();
    assert_eq!(account.get_balance(), dec!(110));
    assert_eq!(account.get_transaction_log().len(), 3);
}

#[test]
fn test_account_numbers_follow_opening_order() {
    let mut users = UserRegistry::new();
    users.register_user("Ana", "", "300", "").unwrap();
    users.register_user("Bruno", "", "100", "").unwrap();
    users.register_user("Carla", "", "200", "").unwrap();

    let mut accounts = AccountRegistry::new();
    let limits = AccountLimits::default();
    let mut numbers = vec![];
    for id in ["200", "missing", "100", "300", "", "200"] {
        if let Ok(account) = accounts.open_account(&users, id, "0001", limits) {
            numbers.push(account.get_account_number());
        }
    }
    assert_eq!(numbers, vec![1, 2, 3, 4]);
    assert_eq!(accounts.len(), 4);
}

#[test]
fn test_duplicate_user_by_normalized_id() {
    let mut users = UserRegistry::new();
    users
        .register_user("Ana", "01/01/1990", "123.456.789-00", "Rua A")
        .unwrap();
    let err = users
        .register_user("Ana Again", "01/01/1990", "123 456 789 00", "Rua B")
        .unwrap_err();
    assert_eq!(err, BankError::DuplicateUser("12345678900".to_string()));
}

#[test]
fn test_full_shell_session() {
    let script = [
        "lu",
        "nu",
        "Ana Souza",
        "10/05/1990",
        "123.456.789-00",
        "Rua das Flores, 10 - Centro - Recife/PE",
        "nc",
        "999",
        "nc",
        "12345678900",
        "sc",
        "1",
        "d",
        "1000",
        "s",
        "600",
        "s",
        "200",
        "e",
        "lc",
        "q",
    ]
    .join("\n");

    let mut shell = Shell::new(Session::default(), Cursor::new(script), Vec::new());
    shell.run().unwrap();
    let (session, output) = shell.into_parts();
    let output = String::from_utf8(output).unwrap();

    assert!(output.contains("(empty)"));
    assert!(output.contains("User created successfully!"));
    assert!(output.contains("No user found with identifier \"999\""));
    assert!(output.contains("Account created successfully! Branch 0001 | No. 1 | Holder: Ana Souza"));
    assert!(output.contains("Active account: Branch 0001 | No. 1 | Holder: Ana Souza"));
    assert!(output.contains("exceeds the per-transaction limit"));
    assert!(output.contains("Withdrawal made: R$ 200.00"));
    assert!(output.contains("Balance: R$ 800.00"));
    assert!(output.contains("Withdrawals used: 1/3"));

    let account = session.active_account().unwrap();
    assert_eq!(account.get_balance(), dec!(800));
    assert_eq!(account.get_withdrawal_count(), 1);
    assert_eq!(account.get_transaction_log().len(), 2);
}

#[test]
fn test_shell_select_unknown_account() {
    let script = "nu\nAna\n\n1\n\nnc\n1\nsc\n1\nsc\n7\nsc\nabc\nq\n";
    let mut shell = Shell::new(Session::default(), Cursor::new(script), Vec::new());
    shell.run().unwrap();
    let (session, output) = shell.into_parts();
    let output = String::from_utf8(output).unwrap();

    assert!(output.contains("Account 1 selected."));
    assert!(output.contains("Account 7 not found"));
    assert!(output.contains("is not an account number"));
    assert!(session.active_account().is_none());
}
