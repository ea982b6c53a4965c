//! Withdrawal results
//!
//! A withdrawal that breaks an account's policy is not an error: the balance
//! is left alone and the reason travels back to the caller inside a
//! [`Withdrawal`], next to the (unchanged) balance.

use rust_decimal::Decimal;
use std::fmt;

/// Why a withdrawal was refused
#[derive(Debug, Clone, PartialEq)]
pub enum PolicyViolation {
    /// The amount plus the fee exceeds the balance
    InsufficientFunds {
        balance: Decimal,
        requested: Decimal,
        fee: Decimal,
    },

    /// The amount plus the fee would go past the overdraft allowance
    OverdraftExceeded {
        balance: Decimal,
        requested: Decimal,
        fee: Decimal,
        overdraft_limit: Decimal,
    },

    /// The amount plus the fee would take the balance under the floor
    BelowMinimumBalance {
        balance: Decimal,
        requested: Decimal,
        fee: Decimal,
        minimum_balance: Decimal,
    },
}

impl fmt::Display for PolicyViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyViolation::InsufficientFunds {
                balance,
                requested,
                fee,
            } => write!(
                f,
                "not enough in the account to withdraw {:.2} plus a {:.2} fee from a balance of {:.2}",
                requested, fee, balance
            ),
            PolicyViolation::OverdraftExceeded {
                balance,
                requested,
                fee,
                overdraft_limit,
            } => write!(
                f,
                "withdrawing {:.2} plus a {:.2} fee from a balance of {:.2} exceeds the {:.2} overdraft allowance",
                requested, fee, balance, overdraft_limit
            ),
            PolicyViolation::BelowMinimumBalance {
                balance,
                requested,
                fee,
                minimum_balance,
            } => write!(
                f,
                "withdrawing {:.2} plus a {:.2} fee would take a balance of {:.2} below the {:.2} minimum",
                requested, fee, balance, minimum_balance
            ),
        }
    }
}

/// What happened to a withdrawal request
#[derive(Debug, Clone, PartialEq)]
pub enum WithdrawalOutcome {
    /// The balance was debited by the amount plus `fee`
    Applied { fee: Decimal },

    /// Nothing changed
    PolicyViolation(PolicyViolation),
}

/// Result of a withdraw-family call
#[derive(Debug, Clone, PartialEq)]
pub struct Withdrawal {
    /// Balance after the call; the prior balance when the request was refused
    pub new_balance: Decimal,
    pub outcome: WithdrawalOutcome,
}

impl Withdrawal {
    pub fn applied(new_balance: Decimal, fee: Decimal) -> Self {
        Self {
            new_balance,
            outcome: WithdrawalOutcome::Applied { fee },
        }
    }

    pub fn rejected(balance: Decimal, violation: PolicyViolation) -> Self {
        Self {
            new_balance: balance,
            outcome: WithdrawalOutcome::PolicyViolation(violation),
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self.outcome, WithdrawalOutcome::Applied { .. })
    }

    /// The refusal reason, if any
    pub fn violation(&self) -> Option<&PolicyViolation> {
        match &self.outcome {
            WithdrawalOutcome::PolicyViolation(violation) => Some(violation),
            WithdrawalOutcome::Applied { .. } => None,
        }
    }

    /// The fee that was charged, zero when the request was refused
    pub fn fee(&self) -> Decimal {
        match self.outcome {
            WithdrawalOutcome::Applied { fee } => fee,
            WithdrawalOutcome::PolicyViolation(_) => Decimal::ZERO,
        }
    }
}
