//! Operation replay engine
//!
//! This module provides the AccountEngine, which owns a single account and
//! applies operation records to it in order, turning each into an
//! [`OperationReport`].
//!
//! The engine enforces:
//! - Amount presence for every operation but `reset_checks`
//! - Routing of each operation to the matching account method
//! - A uniform report shape whether the account applied or refused the request

use crate::types::{
    Account, BankError, OperationRecord, OperationReport, OperationStatus, OperationType,
    Withdrawal,
};
use rust_decimal::Decimal;

/// Replays operations against one account
pub struct AccountEngine {
    account: Account,
}

impl AccountEngine {
    pub fn new(account: Account) -> Self {
        AccountEngine { account }
    }

    /// Apply a single operation record
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount is missing for an operation that needs one
    /// - The account rejects the argument (negative amount or rate)
    /// - The operation is not supported by the account kind
    /// - Balance arithmetic would overflow
    ///
    /// The account is unchanged whenever an error is returned.
    pub fn process(&mut self, record: OperationRecord) -> Result<OperationReport, BankError> {
        match record.op {
            OperationType::Deposit => {
                let amount = required_amount(&record)?;
                let balance = self.account.deposit(amount)?;
                Ok(applied(&record, balance, String::new()))
            }
            OperationType::Withdraw => {
                let amount = required_amount(&record)?;
                let withdrawal = self.account.withdraw(amount)?;
                Ok(withdrawal_report(&record, withdrawal))
            }
            OperationType::Check => {
                let amount = required_amount(&record)?;
                let withdrawal = self.account.withdraw_using_check(amount)?;
                Ok(withdrawal_report(&record, withdrawal))
            }
            OperationType::ResetChecks => {
                self.account.reset_checks();
                Ok(applied(&record, self.account.balance(), String::new()))
            }
            OperationType::Interest => {
                let rate = required_amount(&record)?;
                let interest = self.account.add_interest(rate)?;
                Ok(applied(
                    &record,
                    self.account.balance(),
                    format!("interest {:.2}", interest),
                ))
            }
        }
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn into_account(self) -> Account {
        self.account
    }
}

fn required_amount(record: &OperationRecord) -> Result<Decimal, BankError> {
    record
        .amount
        .ok_or_else(|| BankError::missing_amount(record.op.as_str()))
}

fn applied(record: &OperationRecord, balance: Decimal, detail: String) -> OperationReport {
    OperationReport {
        op: record.op,
        amount: record.amount,
        balance,
        status: OperationStatus::Applied,
        detail,
    }
}

fn withdrawal_report(record: &OperationRecord, withdrawal: Withdrawal) -> OperationReport {
    let (status, detail) = match withdrawal.violation() {
        Some(violation) => (OperationStatus::Rejected, violation.to_string()),
        None => (
            OperationStatus::Applied,
            format!("fee {:.2}", withdrawal.fee()),
        ),
    };

    OperationReport {
        op: record.op,
        amount: record.amount,
        balance: withdrawal.new_balance,
        status,
        detail,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(op: OperationType, amount: Option<i64>) -> OperationRecord {
        OperationRecord {
            op,
            amount: amount.map(Decimal::from),
        }
    }

    fn checking_engine(balance: i64) -> AccountEngine {
        AccountEngine::new(Account::checking(1, Decimal::from(balance)).unwrap())
    }

    fn savings_engine(balance: i64) -> AccountEngine {
        AccountEngine::new(Account::savings(2, Decimal::from(balance)).unwrap())
    }

    #[test]
    fn test_process_deposit() {
        let mut engine = checking_engine(100);
        let report = engine
            .process(record(OperationType::Deposit, Some(50)))
            .unwrap();

        assert_eq!(report.balance, Decimal::from(150));
        assert_eq!(report.status, OperationStatus::Applied);
        assert_eq!(engine.account().balance(), Decimal::from(150));
    }

    #[test]
    fn test_process_withdraw_reports_fee() {
        let mut engine = checking_engine(100);
        let report = engine
            .process(record(OperationType::Withdraw, Some(25)))
            .unwrap();

        assert_eq!(report.balance, Decimal::from(74));
        assert_eq!(report.detail, "fee 1.00");
    }

    #[test]
    fn test_process_refused_withdraw_is_reported_not_raised() {
        let mut engine = savings_engine(100);
        let report = engine
            .process(record(OperationType::Withdraw, Some(89)))
            .unwrap();

        assert_eq!(report.status, OperationStatus::Rejected);
        assert_eq!(report.balance, Decimal::from(100));
        assert!(report.detail.contains("minimum"));
    }

    #[test]
    fn test_process_four_checks() {
        let mut engine = checking_engine(100);
        let mut last = None;
        for _ in 0..4 {
            last = Some(
                engine
                    .process(record(OperationType::Check, Some(10)))
                    .unwrap(),
            );
        }

        let last = last.unwrap();
        assert_eq!(last.balance, Decimal::from(58));
        assert_eq!(last.detail, "fee 2.00");
    }

    #[test]
    fn test_process_reset_checks() {
        let mut engine = checking_engine(100);
        for _ in 0..4 {
            engine
                .process(record(OperationType::Check, Some(10)))
                .unwrap();
        }
        let report = engine
            .process(record(OperationType::ResetChecks, None))
            .unwrap();

        assert_eq!(report.balance, Decimal::from(58));
        assert_eq!(engine.account().free_checks_used(), 0);
    }

    #[test]
    fn test_process_interest() {
        let mut engine = savings_engine(10000);
        let report = engine
            .process(OperationRecord {
                op: OperationType::Interest,
                amount: Some(Decimal::new(25, 2)),
            })
            .unwrap();

        assert_eq!(report.balance, Decimal::from(10025));
        assert_eq!(report.detail, "interest 25.00");
    }

    #[test]
    fn test_process_missing_amount_fails() {
        let mut engine = checking_engine(100);
        let result = engine.process(record(OperationType::Check, None));
        assert!(matches!(result, Err(BankError::MissingAmount { .. })));
    }

    #[test]
    fn test_process_negative_amount_fails_and_leaves_balance() {
        let mut engine = checking_engine(100);
        let result = engine.process(record(OperationType::Withdraw, Some(-5)));

        assert!(matches!(result, Err(BankError::InvalidAmount { .. })));
        assert_eq!(engine.into_account().balance(), Decimal::from(100));
    }

    #[test]
    fn test_process_check_on_savings_fails() {
        let mut engine = savings_engine(100);
        let result = engine.process(record(OperationType::Check, Some(10)));
        assert!(matches!(
            result,
            Err(BankError::UnsupportedOperation { .. })
        ));
    }
}
