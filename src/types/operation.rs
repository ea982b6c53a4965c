//! Operation records replayed against an account
//!
//! An operations file is a list of deposit, withdraw, check, reset and
//! interest requests applied in order to a single account by
//! [`crate::core::AccountEngine`].

use rust_decimal::Decimal;
use std::fmt;

/// Operations that can be replayed against an account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationType {
    /// Credit the account
    Deposit,

    /// Plain withdrawal, subject to the kind's withdrawal fee and floor
    Withdraw,

    /// Withdrawal by check (checking accounts only)
    Check,

    /// Make the next free checks free again (checking accounts only)
    ResetChecks,

    /// Accrue interest at a percentage rate (savings accounts only)
    Interest,
}

impl OperationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Deposit => "deposit",
            OperationType::Withdraw => "withdraw",
            OperationType::Check => "check",
            OperationType::ResetChecks => "reset_checks",
            OperationType::Interest => "interest",
        }
    }

    /// Whether records of this type must carry an amount
    pub fn requires_amount(&self) -> bool {
        !matches!(self, OperationType::ResetChecks)
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single operation as read from an operations file
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRecord {
    pub op: OperationType,

    /// Amount for money operations, rate (percent) for interest, none for resets
    pub amount: Option<Decimal>,
}

/// Status of a replayed operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationStatus {
    Applied,
    Rejected,
}

impl OperationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationStatus::Applied => "applied",
            OperationStatus::Rejected => "rejected",
        }
    }
}

/// What replaying one operation did to the account
#[derive(Debug, Clone, PartialEq)]
pub struct OperationReport {
    pub op: OperationType,
    pub amount: Option<Decimal>,

    /// Balance after the operation
    pub balance: Decimal,
    pub status: OperationStatus,

    /// Fee charged, interest earned, or the refusal reason
    pub detail: String,
}
