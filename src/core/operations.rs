//! Balance-changing operations on an account
//!
//! Every operation validates its argument first, then either applies in full
//! or leaves the account untouched. Negative amounts and rates are errors;
//! withdrawals refused by the account's policy are not, and come back as a
//! [`Withdrawal`] carrying the [`PolicyViolation`].
//!
//! Balance arithmetic is checked, mirroring the overflow handling of the
//! rest of the crate.

use crate::types::{Account, AccountKind, BankError, PolicyViolation, Withdrawal};
use rust_decimal::Decimal;
use tracing::{debug, warn};

impl Account {
    /// Credit the account and return the new balance
    ///
    /// # Errors
    ///
    /// - [`BankError::InvalidAmount`] if `amount` is negative
    /// - [`BankError::ArithmeticOverflow`] if the balance would overflow
    pub fn deposit(&mut self, amount: Decimal) -> Result<Decimal, BankError> {
        ensure_non_negative("deposit", amount)?;

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| BankError::arithmetic_overflow("deposit", self.id))?;

        debug!(account = self.id, %amount, balance = %self.balance, "deposit applied");
        Ok(self.balance)
    }

    /// Withdraw `amount` plus the kind's withdrawal fee
    ///
    /// Checking accounts may not go below zero; savings accounts may not go
    /// below their minimum balance. A refused withdrawal leaves the balance
    /// unchanged.
    ///
    /// # Errors
    ///
    /// - [`BankError::InvalidAmount`] if `amount` is negative
    /// - [`BankError::ArithmeticOverflow`] if the debit would overflow
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Withdrawal, BankError> {
        ensure_non_negative("withdraw", amount)?;

        let charge = match &self.kind {
            AccountKind::Checking { policy, .. } => {
                policy.withdrawal_fee_for(self.balance, amount)
            }
            AccountKind::Savings { policy } => policy.withdrawal_fee_for(self.balance, amount),
        };

        self.settle("withdraw", amount, charge)
    }

    /// Withdraw `amount` by check from a checking account
    ///
    /// The first `free_checks` checks since the last reset carry no fee;
    /// later ones carry the check fee. Either way the balance may go as far
    /// as the overdraft limit below zero.
    ///
    /// # Errors
    ///
    /// - [`BankError::InvalidAmount`] if `amount` is negative
    /// - [`BankError::UnsupportedOperation`] on a savings account
    /// - [`BankError::ArithmeticOverflow`] if the debit would overflow
    pub fn withdraw_using_check(&mut self, amount: Decimal) -> Result<Withdrawal, BankError> {
        ensure_non_negative("withdraw_using_check", amount)?;

        let charge = match &self.kind {
            AccountKind::Checking {
                policy,
                free_checks_used,
            } => policy.check_fee_for(*free_checks_used, self.balance, amount),
            AccountKind::Savings { .. } => {
                return Err(BankError::unsupported_operation(
                    "withdraw_using_check",
                    self.kind.name(),
                    self.id,
                ))
            }
        };

        let withdrawal = self.settle("withdraw_using_check", amount, charge)?;

        if withdrawal.is_applied() {
            if let AccountKind::Checking {
                policy,
                free_checks_used,
            } = &mut self.kind
            {
                if *free_checks_used < policy.free_checks {
                    *free_checks_used += 1;
                }
            }
        }

        Ok(withdrawal)
    }

    /// Make the next free checks free again
    ///
    /// Idempotent. Does nothing on a savings account.
    pub fn reset_checks(&mut self) {
        if let AccountKind::Checking {
            free_checks_used, ..
        } = &mut self.kind
        {
            *free_checks_used = 0;
            debug!(account = self.id, "free checks reset");
        }
    }

    /// Add interest at `rate` percent and return the interest earned
    ///
    /// A rate of `0.25` on a balance of `10000` earns `25`.
    ///
    /// # Errors
    ///
    /// - [`BankError::InvalidRate`] if `rate` is negative
    /// - [`BankError::UnsupportedOperation`] on a checking account
    /// - [`BankError::ArithmeticOverflow`] if the interest or new balance would overflow
    pub fn add_interest(&mut self, rate: Decimal) -> Result<Decimal, BankError> {
        if rate.is_sign_negative() && !rate.is_zero() {
            return Err(BankError::invalid_rate(rate));
        }

        if !matches!(self.kind, AccountKind::Savings { .. }) {
            return Err(BankError::unsupported_operation(
                "add_interest",
                self.kind.name(),
                self.id,
            ));
        }

        let interest = self
            .balance
            .checked_mul(rate)
            .and_then(|product| product.checked_div(Decimal::ONE_HUNDRED))
            .ok_or_else(|| BankError::arithmetic_overflow("add_interest", self.id))?;

        self.balance = self
            .balance
            .checked_add(interest)
            .ok_or_else(|| BankError::arithmetic_overflow("add_interest", self.id))?;

        debug!(account = self.id, %rate, %interest, balance = %self.balance, "interest added");
        Ok(interest)
    }

    /// Apply a policy decision to the balance
    fn settle(
        &mut self,
        operation: &str,
        amount: Decimal,
        charge: Result<Decimal, PolicyViolation>,
    ) -> Result<Withdrawal, BankError> {
        let fee = match charge {
            Ok(fee) => fee,
            Err(violation) => {
                warn!(account = self.id, operation, %violation, "withdrawal refused");
                return Ok(Withdrawal::rejected(self.balance, violation));
            }
        };

        let new_balance = amount
            .checked_add(fee)
            .and_then(|debit| self.balance.checked_sub(debit))
            .ok_or_else(|| BankError::arithmetic_overflow(operation, self.id))?;
        self.balance = new_balance;

        debug!(account = self.id, operation, %amount, %fee, balance = %new_balance, "withdrawal applied");
        Ok(Withdrawal::applied(new_balance, fee))
    }
}

fn ensure_non_negative(operation: &str, amount: Decimal) -> Result<(), BankError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(BankError::invalid_amount(operation, amount));
    }
    Ok(())
}
