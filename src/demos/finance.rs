//! Finance demo
//!
//! Transactions are routed through a payment processor, applied to a savings
//! account, and recorded in a keyed repository for the closing summary.

use crate::collections::KeyedRepository;
use crate::error::Result;
use crate::models::{Amount, Transaction};
use crate::utils::logging::print_section;
use chrono::NaiveDate;
use itertools::Itertools;
use std::sync::Arc;

/// A payment channel that confirms a transaction
pub trait TransactionProcessor {
    /// Process the transaction, returning the confirmation line
    fn process(&self, transaction: &Transaction) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BankTransferProcessor;

impl TransactionProcessor for BankTransferProcessor {
    fn process(&self, transaction: &Transaction) -> String {
        format!(
            "[Bank Transfer] Completed {} towards {}",
            transaction.amount, transaction.category
        )
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MobileMoneyProcessor;

impl TransactionProcessor for MobileMoneyProcessor {
    fn process(&self, transaction: &Transaction) -> String {
        format!(
            "[Mobile Money] You sent {} towards {}",
            transaction.amount, transaction.category
        )
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CryptoWalletProcessor;

impl TransactionProcessor for CryptoWalletProcessor {
    fn process(&self, transaction: &Transaction) -> String {
        format!(
            "[Crypto Wallet] Transferred {} towards {}",
            transaction.amount, transaction.category
        )
    }
}

/// Result of applying a transaction to an account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionOutcome {
    /// The amount was deducted; carries the new balance
    Applied(Amount),
    /// The account refused the transaction; the balance is unchanged
    InsufficientFunds,
}

/// An account that transactions are deducted from
pub trait Ledger {
    fn account_number(&self) -> &str;

    fn balance(&self) -> Amount;

    fn apply_transaction(&mut self, transaction: &Transaction) -> TransactionOutcome;
}

/// A plain account; its balance may go negative
///
/// A debit that would take the balance below the range of [`Amount`] is
/// refused like an overdraft on a savings account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    account_number: String,
    balance: Amount,
}

impl Account {
    #[must_use]
    pub fn new(account_number: &str, initial_balance: Amount) -> Self {
        Self {
            account_number: account_number.to_string(),
            balance: initial_balance,
        }
    }
}

impl Ledger for Account {
    fn account_number(&self) -> &str {
        &self.account_number
    }

    fn balance(&self) -> Amount {
        self.balance
    }

    fn apply_transaction(&mut self, transaction: &Transaction) -> TransactionOutcome {
        match self.balance.checked_sub(transaction.amount) {
            Some(balance) => {
                self.balance = balance;
                TransactionOutcome::Applied(balance)
            }
            None => TransactionOutcome::InsufficientFunds,
        }
    }
}

/// A savings account that never overdraws
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavingsAccount {
    inner: Account,
}

impl SavingsAccount {
    #[must_use]
    pub fn new(account_number: &str, initial_balance: Amount) -> Self {
        Self {
            inner: Account::new(account_number, initial_balance),
        }
    }
}

impl Ledger for SavingsAccount {
    fn account_number(&self) -> &str {
        self.inner.account_number()
    }

    fn balance(&self) -> Amount {
        self.inner.balance()
    }

    fn apply_transaction(&mut self, transaction: &Transaction) -> TransactionOutcome {
        if transaction.amount > self.inner.balance {
            return TransactionOutcome::InsufficientFunds;
        }
        self.inner.apply_transaction(transaction)
    }
}

/// Processes and records transactions against a single account
#[derive(Debug)]
pub struct FinanceApp<L: Ledger> {
    account: L,
    transactions: KeyedRepository<Transaction>,
}

impl<L: Ledger> FinanceApp<L> {
    #[must_use]
    pub fn new(account: L) -> Self {
        Self {
            account,
            transactions: KeyedRepository::new(),
        }
    }

    #[must_use]
    pub fn account(&self) -> &L {
        &self.account
    }

    /// Process, apply and record a transaction
    ///
    /// The transaction is recorded even when the account refuses it. A
    /// transaction ID that was already recorded fails with `DuplicateKey`
    /// before anything is processed or applied.
    pub fn submit(
        &mut self,
        processor: &dyn TransactionProcessor,
        transaction: Transaction,
    ) -> Result<(String, TransactionOutcome)> {
        if self.transactions.contains(&transaction.id) {
            return Err(crate::error::StoreError::duplicate_key(&transaction.id));
        }
        let confirmation = processor.process(&transaction);
        let outcome = self.account.apply_transaction(&transaction);
        self.transactions.add(transaction)?;
        Ok((confirmation, outcome))
    }

    /// Recorded transactions ordered by ID
    #[must_use]
    pub fn transactions(&self) -> Vec<Arc<Transaction>> {
        self.transactions
            .get_all()
            .into_iter()
            .sorted_by_key(|tx| tx.id)
            .collect()
    }

    /// Summary lines for every recorded transaction
    #[must_use]
    pub fn summary(&self) -> Vec<String> {
        self.transactions()
            .iter()
            .map(|tx| {
                format!(
                    "ID: {}, Category: {}, Amount: {}, Date: {}",
                    tx.id,
                    tx.category,
                    tx.amount,
                    tx.date.format("%Y-%m-%d")
                )
            })
            .collect()
    }
}

/// Run the finance demo
pub fn run(today: NaiveDate) -> anyhow::Result<()> {
    print_section("Finance Management System");

    let mut app = FinanceApp::new(SavingsAccount::new("ACC123", Amount::from_units(1000)));

    let submissions: [(&dyn TransactionProcessor, Transaction); 3] = [
        (
            &MobileMoneyProcessor,
            Transaction::new(1, today, Amount::from_units(150), "Groceries"),
        ),
        (
            &BankTransferProcessor,
            Transaction::new(2, today, Amount::from_units(250), "Utilities"),
        ),
        (
            &CryptoWalletProcessor,
            Transaction::new(3, today, Amount::from_units(500), "Entertainment"),
        ),
    ];

    for (processor, transaction) in submissions {
        let (confirmation, outcome) = app.submit(processor, transaction)?;
        println!("{confirmation}");
        match outcome {
            TransactionOutcome::Applied(balance) => {
                println!("Transaction successful. Updated Balance: {balance}");
            }
            TransactionOutcome::InsufficientFunds => println!("Insufficient funds"),
        }
    }

    println!("\nTransaction Summary:");
    for line in app.summary() {
        println!("{line}");
    }
    println!();

    Ok(())
}
