//! Withdrawal policies for each account kind
//!
//! A policy holds the fee schedule and balance limits of one account kind and
//! decides, without mutating anything, what a withdrawal would cost or why it
//! must be refused. Applying the decision to a balance is the job of
//! [`crate::core::operations`].
//!
//! # Defaults
//!
//! | kind     | withdrawal fee | check fee | free checks | overdraft | floor |
//! |----------|----------------|-----------|-------------|-----------|-------|
//! | checking | 1              | 2         | 3           | 10        | 0     |
//! | savings  | 2              | -         | -           | -         | 10    |

use crate::types::PolicyViolation;
use rust_decimal::Decimal;
use tracing::warn;

/// Fee schedule and limits for checking accounts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckingPolicy {
    /// Fee charged on every plain withdrawal
    pub withdrawal_fee: Decimal,

    /// Fee charged on each check once the free checks are used up
    pub check_fee: Decimal,

    /// Number of checks that carry no fee between resets
    pub free_checks: u32,

    /// How far below zero a check may take the balance
    pub overdraft_limit: Decimal,

    /// Smallest balance the account may be opened with
    pub minimum_opening_balance: Decimal,
}

impl Default for CheckingPolicy {
    fn default() -> Self {
        Self {
            withdrawal_fee: Decimal::ONE,
            check_fee: Decimal::TWO,
            free_checks: 3,
            overdraft_limit: Decimal::TEN,
            minimum_opening_balance: Decimal::ZERO,
        }
    }
}

impl CheckingPolicy {
    /// Create a CheckingPolicy with custom check limits
    ///
    /// Fees keep their default values. A negative overdraft limit is
    /// rejected with a warning and the default is used instead.
    pub fn new(free_checks: u32, overdraft_limit: Decimal) -> Self {
        let default = Self::default();

        let overdraft_limit = if overdraft_limit.is_sign_negative() {
            warn!(
                %overdraft_limit,
                default = %default.overdraft_limit,
                "invalid overdraft limit, using default"
            );
            default.overdraft_limit
        } else {
            overdraft_limit
        };

        Self {
            free_checks,
            overdraft_limit,
            ..default
        }
    }

    /// Fee for a plain withdrawal of `amount` from `balance`
    ///
    /// A plain withdrawal may not take the balance below zero once the fee
    /// is included.
    pub fn withdrawal_fee_for(
        &self,
        balance: Decimal,
        amount: Decimal,
    ) -> Result<Decimal, PolicyViolation> {
        let fee = self.withdrawal_fee;
        if amount > balance.saturating_sub(fee) {
            return Err(PolicyViolation::InsufficientFunds {
                balance,
                requested: amount,
                fee,
            });
        }
        Ok(fee)
    }

    /// Fee for a check of `amount` drawn on `balance` after `checks_used` free checks
    ///
    /// Free checks cost nothing; afterwards `check_fee` applies. Either way
    /// the balance may not drop below `-overdraft_limit` once the fee is
    /// included.
    pub fn check_fee_for(
        &self,
        checks_used: u32,
        balance: Decimal,
        amount: Decimal,
    ) -> Result<Decimal, PolicyViolation> {
        let fee = if checks_used < self.free_checks {
            Decimal::ZERO
        } else {
            self.check_fee
        };

        let ceiling = balance
            .saturating_add(self.overdraft_limit)
            .saturating_sub(fee);
        if amount > ceiling {
            return Err(PolicyViolation::OverdraftExceeded {
                balance,
                requested: amount,
                fee,
                overdraft_limit: self.overdraft_limit,
            });
        }
        Ok(fee)
    }
}

/// Fee schedule and limits for savings accounts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SavingsPolicy {
    /// Fee charged on every withdrawal
    pub withdrawal_fee: Decimal,

    /// Balance floor; also the smallest opening balance
    pub minimum_balance: Decimal,
}

impl Default for SavingsPolicy {
    fn default() -> Self {
        Self {
            withdrawal_fee: Decimal::TWO,
            minimum_balance: Decimal::TEN,
        }
    }
}

impl SavingsPolicy {
    /// Create a SavingsPolicy with a custom balance floor
    ///
    /// A negative floor is rejected with a warning and the default is used
    /// instead.
    pub fn new(minimum_balance: Decimal) -> Self {
        let default = Self::default();

        let minimum_balance = if minimum_balance.is_sign_negative() {
            warn!(
                %minimum_balance,
                default = %default.minimum_balance,
                "invalid minimum balance, using default"
            );
            default.minimum_balance
        } else {
            minimum_balance
        };

        Self {
            minimum_balance,
            ..default
        }
    }

    /// Fee for a withdrawal of `amount` from `balance`
    ///
    /// The balance after the amount and fee are taken must stay at or above
    /// `minimum_balance`.
    pub fn withdrawal_fee_for(
        &self,
        balance: Decimal,
        amount: Decimal,
    ) -> Result<Decimal, PolicyViolation> {
        let fee = self.withdrawal_fee;
        let ceiling = balance
            .saturating_sub(self.minimum_balance)
            .saturating_sub(fee);
        if amount > ceiling {
            return Err(PolicyViolation::BelowMinimumBalance {
                balance,
                requested: amount,
                fee,
                minimum_balance: self.minimum_balance,
            });
        }
        Ok(fee)
    }
}

/// Policies for every account kind
///
/// Built from defaults or from CLI overrides and handed to the account
/// constructors.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FeeSchedule {
    pub checking: CheckingPolicy,
    pub savings: SavingsPolicy,
}
