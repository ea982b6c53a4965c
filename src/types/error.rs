//! Error types for the bank accounts library
//!
//! This module defines every error that can be surfaced to a caller.
//! Policy violations (a withdrawal that would breach a floor or overdraft
//! limit) are not errors; they are reported through
//! [`crate::types::Withdrawal`].
//!
//! # Error Categories
//!
//! - **Argument Errors**: negative amounts or rates, opening balances below the kind minimum
//! - **Lookup Errors**: unknown owner ids
//! - **File I/O Errors**: file not found, permission denied, etc.
//! - **CSV Parsing Errors**: malformed rows, invalid data types, etc.
//! - **Arithmetic Errors**: overflow in balance calculations

use crate::types::account::AccountId;
use crate::types::owner::OwnerId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the library
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BankError {
    /// A deposit or withdrawal amount was negative
    #[error("{operation} amount must be >= 0, got {amount}")]
    InvalidAmount {
        /// Operation that received the amount
        operation: String,
        /// The rejected amount
        amount: Decimal,
    },

    /// An interest rate was negative
    #[error("Interest rate must be >= 0, got {rate}")]
    InvalidRate {
        /// The rejected rate
        rate: Decimal,
    },

    /// An account was opened with less than its kind requires
    #[error("{kind} account requires an opening balance of at least {minimum}, got {balance}")]
    InsufficientOpeningBalance {
        /// Account kind name
        kind: String,
        /// Requested opening balance
        balance: Decimal,
        /// Minimum the kind allows
        minimum: Decimal,
    },

    /// No owner with the given id is registered
    #[error("Owner {id} doesn't exist")]
    OwnerNotFound {
        /// The id that was looked up
        id: OwnerId,
    },

    /// An operation record needs an amount but none was given
    #[error("{operation} requires an amount")]
    MissingAmount {
        /// Operation that requires an amount
        operation: String,
    },

    /// A kind-specific operation was invoked on the wrong kind of account
    #[error("{operation} is not supported on {kind} account {account}")]
    UnsupportedOperation {
        /// Operation name
        operation: String,
        /// Account kind name
        kind: String,
        /// Account id
        account: AccountId,
    },

    /// Arithmetic overflow would occur
    #[error("Arithmetic overflow in {operation} for account {account}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account id
        account: AccountId,
    },

    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },
}

impl From<std::io::Error> for BankError {
    fn from(error: std::io::Error) -> Self {
        BankError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for BankError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        BankError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl BankError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(operation: &str, amount: Decimal) -> Self {
        BankError::InvalidAmount {
            operation: operation.to_string(),
            amount,
        }
    }

    /// Create an InvalidRate error
    pub fn invalid_rate(rate: Decimal) -> Self {
        BankError::InvalidRate { rate }
    }

    /// Create an InsufficientOpeningBalance error
    pub fn insufficient_opening_balance(kind: &str, balance: Decimal, minimum: Decimal) -> Self {
        BankError::InsufficientOpeningBalance {
            kind: kind.to_string(),
            balance,
            minimum,
        }
    }

    /// Create an OwnerNotFound error
    pub fn owner_not_found(id: OwnerId) -> Self {
        BankError::OwnerNotFound { id }
    }

    /// Create a MissingAmount error
    pub fn missing_amount(operation: &str) -> Self {
        BankError::MissingAmount {
            operation: operation.to_string(),
        }
    }

    /// Create an UnsupportedOperation error
    pub fn unsupported_operation(operation: &str, kind: &str, account: AccountId) -> Self {
        BankError::UnsupportedOperation {
            operation: operation.to_string(),
            kind: kind.to_string(),
            account,
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account: AccountId) -> Self {
        BankError::ArithmeticOverflow {
            operation: operation.to_string(),
            account,
        }
    }

    /// Whether this error is one of the invalid-argument kinds
    ///
    /// Negative amounts, negative rates, below-minimum opening balances and
    /// unknown owner ids are all caller mistakes rather than environment
    /// failures.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            BankError::InvalidAmount { .. }
                | BankError::InvalidRate { .. }
                | BankError::InsufficientOpeningBalance { .. }
                | BankError::OwnerNotFound { .. }
        )
    }
}
