//! Integration tests for bank + session + snapshot flow

use rust_decimal_macros::dec;
use sitbank_business::{snapshot, Bank, BankConfig, BusinessError, Session, SessionState};
use sitbank_core::{AccountKind, BankAccount, RoundingRule, Withdrawal};

#[test]
fn test_savings_walkthrough() {
    let mut bank = Bank::default();

    // Scenario 1
    let asha = bank.open_account("Asha", AccountKind::Savings, dec!(1000.0)).unwrap();
    assert_eq!(asha, 1);
    assert_eq!(bank.balance(asha).unwrap(), dec!(1000.0));

    let mut session = Session::new();
    assert_eq!(session.login(&bank, asha).unwrap(), "Asha");

    // Scenario 2
    assert_eq!(session.deposit(&mut bank, dec!(500.0)).unwrap(), dec!(1500.0));

    // Scenario 3
    let refused = session.withdraw(&mut bank, dec!(2000.0)).unwrap();
    assert_eq!(
        refused,
        Withdrawal::InsufficientFunds {
            requested: dec!(2000.0),
            available: dec!(1500.0),
        }
    );

    // Scenario 4
    let done = session.withdraw(&mut bank, dec!(1500.0)).unwrap();
    assert!(done.is_success());
    assert_eq!(bank.balance(asha).unwrap(), dec!(0.0));
    assert!(session.logout());

    // Scenario 5
    let raj = bank.open_account("Raj", AccountKind::Current, dec!(0.0)).unwrap();
    let priya = bank.open_account("Priya", AccountKind::Savings, dec!(0.0)).unwrap();
    assert_eq!((raj, priya), (2, 3));

    // Scenario 6
    let rich = bank.open_account("Asha", AccountKind::Savings, dec!(1000.0)).unwrap();
    assert_eq!(bank.interest(rich).unwrap(), dec!(40.00));
    assert_eq!(
        bank.config().format_amount(bank.interest(rich).unwrap()),
        "₹40.00"
    );
}

#[test]
fn test_current_account_has_no_interest_in_session() {
    let mut bank = Bank::default();
    let raj = bank.open_account("Raj", AccountKind::Current, dec!(100)).unwrap();

    let mut session = Session::new();
    session.login(&bank, raj).unwrap();
    assert!(matches!(
        session.interest(&bank),
        Err(BusinessError::InterestNotSupported(id)) if id == raj
    ));
}

#[test]
fn test_state_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sitbank.json");
    let config = BankConfig::default()
        .with_interest_rate(dec!(0.035))
        .with_rounding(RoundingRule::HalfEven);

    {
        let mut bank = Bank::new(config.clone());
        bank.open_account("Asha", AccountKind::Savings, dec!(1000)).unwrap();
        bank.open_account("Raj", AccountKind::Current, dec!(250)).unwrap();
        bank.withdraw(2, dec!(50)).unwrap();
        snapshot::save(&path, &bank).unwrap();
    }

    let mut bank = snapshot::load(&path, config).unwrap();
    assert_eq!(bank.len(), 2);
    assert_eq!(bank.balance(2).unwrap(), dec!(200));
    assert_eq!(bank.interest(1).unwrap(), dec!(35.00));

    let mut session = Session::new();
    session.login(&bank, 1).unwrap();
    assert_eq!(session.state(), SessionState::LoggedIn(1));
    session.deposit(&mut bank, dec!(1)).unwrap();

    let next = bank.open_account("Priya", AccountKind::Current, dec!(0)).unwrap();
    assert_eq!(next, 3);

    let owners: Vec<&str> = bank.accounts().map(|a| a.owner_name()).collect();
    assert_eq!(owners, vec!["Asha", "Raj", "Priya"]);
}
