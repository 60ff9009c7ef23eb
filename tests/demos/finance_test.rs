//! Finance demo tests

use crate::utils::fixed_today;
use record_store::StoreError;
use record_store::demos::finance::{
    BankTransferProcessor, FinanceApp, Ledger, MobileMoneyProcessor, SavingsAccount,
    TransactionOutcome,
};
use record_store::models::{Amount, Transaction};

#[test]
fn test_demo_run_completes() {
    record_store::demos::finance::run(fixed_today()).unwrap();
}

#[test]
fn test_refused_transaction_is_still_recorded() {
    let mut app = FinanceApp::new(SavingsAccount::new("ACC1", Amount::from_units(100)));

    let big = Transaction::new(1, fixed_today(), Amount::from_units(500), "Rent");
    let (_, outcome) = app.submit(&BankTransferProcessor, big).unwrap();
    assert_eq!(outcome, TransactionOutcome::InsufficientFunds);
    assert_eq!(app.account().balance(), Amount::from_units(100));
    assert_eq!(app.transactions().len(), 1);

    let duplicate = Transaction::new(1, fixed_today(), Amount::from_units(5), "Snacks");
    assert!(matches!(
        app.submit(&MobileMoneyProcessor, duplicate),
        Err(StoreError::DuplicateKey(_))
    ));
    assert_eq!(app.account().balance(), Amount::from_units(100));
}
