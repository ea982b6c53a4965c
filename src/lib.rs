//! Bank Accounts Library
//! # Overview
//!
//! This library models simple checking and savings accounts with per-kind
//! withdrawal policies, and a directory of account holders loaded from CSV.
//! Everything is in memory and single-threaded.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (Account, Owner, Withdrawal, BankError, etc.)
//! - [`core`] - Business logic components:
//!   - [`core::policy`] - Fee schedules and withdrawal decisions per account kind
//!   - [`core::operations`] - Deposit, withdraw, check, reset and interest
//!   - [`core::engine`] - Replaying operation records against an account
//!   - [`core::owner_registry`] - Owner lookup by id
//! - [`io`] - CSV readers and writers
//! - [`runner`] - File-to-output pipelines used by the CLI
//! - [`cli`] - CLI arguments parsing
//! - [`logging`] - `tracing` subscriber setup
//!
//! # Account Kinds
//!
//! - **Checking**: $1 fee per withdrawal, no overdraft on withdrawals. Checks
//!   may overdraw by up to $10; the first three since a reset are free, later
//!   ones cost $2.
//! - **Savings**: $2 fee per withdrawal, balance may not fall below $10,
//!   opened with at least $10. Earns interest.
//!
//! # Refused Withdrawals
//!
//! A withdrawal that would break the account's policy is not an error. The
//! balance is left unchanged and the returned [`Withdrawal`] carries the
//! [`PolicyViolation`] explaining why.
//!
//! ```
//! use bank_accounts::Account;
//! use rust_decimal::Decimal;
//!
//! let mut account = Account::savings(1337, Decimal::from(100)).unwrap();
//! let withdrawal = account.withdraw(Decimal::from(89)).unwrap();
//!
//! assert!(withdrawal.violation().is_some());
//! assert_eq!(account.balance(), Decimal::from(100));
//! ```

pub mod cli;
pub mod core;
pub mod io;
pub mod logging;
pub mod runner;
pub mod types;

pub use core::{AccountEngine, CheckingPolicy, FeeSchedule, OwnerRegistry, SavingsPolicy};
pub use types::{
    Account, AccountId, AccountKind, BankError, OperationRecord, OperationReport, OperationType,
    Owner, OwnerId, PolicyViolation, Withdrawal, WithdrawalOutcome,
};
