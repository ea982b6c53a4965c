//! Account-related types for the bank accounts library
//!
//! This module defines the Account structure, its kinds, and construction
//! rules. Balance-changing operations live in [`crate::core::operations`].

use crate::core::policy::{CheckingPolicy, SavingsPolicy};
use crate::types::error::BankError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::fmt;

/// Account identifier
pub type AccountId = u32;

/// Format of textual open dates, e.g. `2010-12-21 12:21:12 -0800`
pub const OPEN_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Kind of account, with the policy and state specific to it
#[derive(Debug, Clone, PartialEq)]
pub enum AccountKind {
    /// Plain withdrawals carry a fee; checks are free up to a count, then carry
    /// their own fee, and may overdraw the account within a limit.
    Checking {
        policy: CheckingPolicy,
        /// Free checks written since the last reset
        free_checks_used: u32,
    },

    /// Withdrawals carry a fee and may not cross the minimum balance.
    /// Earns interest.
    Savings { policy: SavingsPolicy },
}

impl AccountKind {
    pub fn checking(policy: CheckingPolicy) -> Self {
        AccountKind::Checking {
            policy,
            free_checks_used: 0,
        }
    }

    pub fn savings(policy: SavingsPolicy) -> Self {
        AccountKind::Savings { policy }
    }

    /// Lowercase kind name used in messages and CSV output
    pub fn name(&self) -> &'static str {
        match self {
            AccountKind::Checking { .. } => "checking",
            AccountKind::Savings { .. } => "savings",
        }
    }

    /// Smallest balance an account of this kind may be opened with
    pub fn minimum_opening_balance(&self) -> Decimal {
        match self {
            AccountKind::Checking { policy, .. } => policy.minimum_opening_balance,
            AccountKind::Savings { policy } => policy.minimum_balance,
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single bank account
///
/// Fields are crate-visible only: the balance changes exclusively through
/// the deposit and withdraw-family operations.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub(crate) id: AccountId,
    pub(crate) balance: Decimal,
    pub(crate) open_date: DateTime<Utc>,
    pub(crate) kind: AccountKind,
}

impl Account {
    /// Open an account of the given kind
    ///
    /// # Errors
    ///
    /// Returns [`BankError::InsufficientOpeningBalance`] if `balance` is
    /// below the kind's minimum opening balance.
    pub fn open(id: AccountId, balance: Decimal, kind: AccountKind) -> Result<Self, BankError> {
        let minimum = kind.minimum_opening_balance();
        if balance < minimum {
            return Err(BankError::insufficient_opening_balance(
                kind.name(),
                balance,
                minimum,
            ));
        }

        Ok(Account {
            id,
            balance,
            open_date: Utc::now(),
            kind,
        })
    }

    /// Open a checking account with the default policy
    pub fn checking(id: AccountId, balance: Decimal) -> Result<Self, BankError> {
        Self::checking_with_policy(id, balance, CheckingPolicy::default())
    }

    pub fn checking_with_policy(
        id: AccountId,
        balance: Decimal,
        policy: CheckingPolicy,
    ) -> Result<Self, BankError> {
        Self::open(id, balance, AccountKind::checking(policy))
    }

    /// Open a savings account with the default policy
    pub fn savings(id: AccountId, balance: Decimal) -> Result<Self, BankError> {
        Self::savings_with_policy(id, balance, SavingsPolicy::default())
    }

    pub fn savings_with_policy(
        id: AccountId,
        balance: Decimal,
        policy: SavingsPolicy,
    ) -> Result<Self, BankError> {
        Self::open(id, balance, AccountKind::savings(policy))
    }

    /// Replace the open date (defaults to the time of construction)
    pub fn with_open_date(mut self, open_date: DateTime<Utc>) -> Self {
        self.open_date = open_date;
        self
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn open_date(&self) -> DateTime<Utc> {
        self.open_date
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    /// Free checks used since the last reset; always 0 for savings accounts
    pub fn free_checks_used(&self) -> u32 {
        match self.kind {
            AccountKind::Checking {
                free_checks_used, ..
            } => free_checks_used,
            AccountKind::Savings { .. } => 0,
        }
    }
}

/// Parse an open date in [`OPEN_DATE_FORMAT`]
pub fn parse_open_date(value: &str) -> Result<DateTime<Utc>, BankError> {
    DateTime::parse_from_str(value.trim(), OPEN_DATE_FORMAT)
        .map(|date| date.with_timezone(&Utc))
        .map_err(|e| BankError::ParseError {
            line: None,
            message: format!("Invalid open date '{}': {}", value, e),
        })
}
