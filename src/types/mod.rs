//! Types module
//!
//! Contains core data structures used throughout the library.
//! This module organizes types into logical submodules:
//! - `account`: Account and account kinds
//! - `owner`: Account holder records
//! - `operation`: Replayable operation records and their reports
//! - `outcome`: Withdrawal results and policy violations
//! - `error`: Error types for the library

pub mod account;
pub mod error;
pub mod operation;
pub mod outcome;
pub mod owner;

pub use account::{parse_open_date, Account, AccountId, AccountKind, OPEN_DATE_FORMAT};
pub use error::BankError;
pub use operation::{OperationRecord, OperationReport, OperationStatus, OperationType};
pub use outcome::{PolicyViolation, Withdrawal, WithdrawalOutcome};
pub use owner::{Owner, OwnerId};
