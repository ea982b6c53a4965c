//! CSV format handling for owner and operation records
//!
//! This module centralizes all CSV format concerns, providing:
//! - Record structures for deserialization
//! - Conversion from CSV records to domain types
//! - Owner and report output serialization
//!
//! Conversions are pure (no I/O); writers only touch the sink they are given.

use crate::types::{BankError, OperationRecord, OperationReport, OperationType, Owner, OwnerId};
use csv::WriterBuilder;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// Owner row: `id,last_name,first_name,street_address,city,state`, no header
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OwnerCsvRecord {
    pub id: OwnerId,
    pub last_name: String,
    pub first_name: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
}

impl From<OwnerCsvRecord> for Owner {
    fn from(record: OwnerCsvRecord) -> Self {
        Owner {
            id: record.id,
            last_name: record.last_name,
            first_name: record.first_name,
            street_address: record.street_address,
            city: record.city,
            state: record.state,
        }
    }
}

/// Operation row: `op,amount` with a header; amount may be empty for resets
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OperationCsvRecord {
    pub op: String,
    pub amount: Option<String>,
}

/// Convert an OperationCsvRecord to an OperationRecord
///
/// - Parses the operation name (case-insensitive)
/// - Parses the amount into a Decimal (if present)
/// - Validates that an amount is present for every operation but `reset_checks`
///
/// Sign is not checked here; negative amounts are rejected by the account.
pub fn convert_operation_record(record: OperationCsvRecord) -> Result<OperationRecord, String> {
    let op = match record.op.to_lowercase().as_str() {
        "deposit" => OperationType::Deposit,
        "withdraw" | "withdrawal" => OperationType::Withdraw,
        "check" => OperationType::Check,
        "reset_checks" | "reset" => OperationType::ResetChecks,
        "interest" => OperationType::Interest,
        _ => return Err(format!("Invalid operation: '{}'", record.op)),
    };

    let amount = match record.amount {
        Some(amount_str) if !amount_str.trim().is_empty() => {
            match Decimal::from_str(amount_str.trim()) {
                Ok(decimal) => Some(decimal),
                Err(_) => {
                    return Err(format!("Invalid amount '{}' for {}", amount_str, op));
                }
            }
        }
        _ => None,
    };

    if op.requires_amount() && amount.is_none() {
        return Err(format!("{} requires an amount", op));
    }

    Ok(OperationRecord { op, amount })
}

/// Write owners in the same headerless layout they are read from
pub fn write_owners_csv(owners: &[Owner], output: &mut dyn Write) -> Result<(), BankError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(output);

    for owner in owners {
        writer.serialize(owner)?;
    }

    writer.flush()?;
    Ok(())
}

/// Write operation reports with columns: op, amount, balance, status, detail
///
/// Money columns are written with two decimal places; amount is empty when
/// the operation had none.
pub fn write_reports_csv(
    reports: &[OperationReport],
    output: &mut dyn Write,
) -> Result<(), BankError> {
    let mut writer = WriterBuilder::new().from_writer(output);

    writer.write_record(["op", "amount", "balance", "status", "detail"])?;

    for report in reports {
        writer.write_record([
            report.op.as_str().to_string(),
            report
                .amount
                .map(|amount| format!("{:.2}", amount))
                .unwrap_or_default(),
            format!("{:.2}", report.balance),
            report.status.as_str().to_string(),
            report.detail.clone(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OperationStatus;
    use rstest::rstest;

    fn owner(id: OwnerId, last_name: &str) -> Owner {
        Owner {
            id,
            last_name: last_name.to_string(),
            first_name: "Ada".to_string(),
            street_address: "1 Main St".to_string(),
            city: "Seattle".to_string(),
            state: "WA".to_string(),
        }
    }

    #[rstest]
    #[case("deposit", OperationType::Deposit)]
    #[case("withdraw", OperationType::Withdraw)]
    #[case("withdrawal", OperationType::Withdraw)]
    #[case("check", OperationType::Check)]
    #[case("interest", OperationType::Interest)]
    #[case("CHECK", OperationType::Check)] // case insensitive
    fn test_convert_operation_record_with_amount(
        #[case] op: &str,
        #[case] expected: OperationType,
    ) {
        let record = OperationCsvRecord {
            op: op.to_string(),
            amount: Some("10.00".to_string()),
        };

        let result = convert_operation_record(record).unwrap();
        assert_eq!(result.op, expected);
        assert_eq!(result.amount, Some(Decimal::new(1000, 2)));
    }

    #[rstest]
    #[case::no_amount(None)]
    #[case::empty_amount(Some(""))]
    fn test_convert_reset_without_amount(#[case] amount: Option<&str>) {
        let record = OperationCsvRecord {
            op: "reset_checks".to_string(),
            amount: amount.map(|s| s.to_string()),
        };

        let result = convert_operation_record(record).unwrap();
        assert_eq!(result.op, OperationType::ResetChecks);
        assert_eq!(result.amount, None);
    }

    #[rstest]
    #[case::invalid_op("transfer", Some("10"), "Invalid operation")]
    #[case::deposit_missing_amount("deposit", None, "requires an amount")]
    #[case::check_whitespace_amount("check", Some("  "), "requires an amount")]
    #[case::invalid_amount("withdraw", Some("ten"), "Invalid amount")]
    fn test_convert_operation_record_errors(
        #[case] op: &str,
        #[case] amount: Option<&str>,
        #[case] expected_error: &str,
    ) {
        let record = OperationCsvRecord {
            op: op.to_string(),
            amount: amount.map(|s| s.to_string()),
        };

        let result = convert_operation_record(record);
        assert!(result.unwrap_err().contains(expected_error));
    }

    #[test]
    fn test_convert_keeps_negative_amount_for_account_to_reject() {
        let record = OperationCsvRecord {
            op: "withdraw".to_string(),
            amount: Some("-5".to_string()),
        };

        let result = convert_operation_record(record).unwrap();
        assert_eq!(result.amount, Some(Decimal::from(-5)));
    }

    #[rstest]
    #[case::single_owner(
        vec![owner(14, "Morales")],
        "14,Morales,Ada,1 Main St,Seattle,WA\n"
    )]
    #[case::keeps_load_order(
        vec![owner(2, "Ng"), owner(1, "Bose")],
        "2,Ng,Ada,1 Main St,Seattle,WA\n1,Bose,Ada,1 Main St,Seattle,WA\n"
    )]
    #[case::empty(vec![], "")]
    fn test_write_owners_csv(#[case] owners: Vec<Owner>, #[case] expected: &str) {
        let mut output = Vec::new();
        write_owners_csv(&owners, &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), expected);
    }

    #[test]
    fn test_write_owners_csv_quotes_commas() {
        let mut with_comma = owner(3, "Smith");
        with_comma.street_address = "12 Elm St, Apt 4".to_string();

        let mut output = Vec::new();
        write_owners_csv(&[with_comma], &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "3,Smith,Ada,\"12 Elm St, Apt 4\",Seattle,WA\n"
        );
    }

    #[test]
    fn test_write_reports_csv() {
        let reports = vec![
            OperationReport {
                op: OperationType::Check,
                amount: Some(Decimal::TEN),
                balance: Decimal::from(90),
                status: OperationStatus::Applied,
                detail: "fee 0.00".to_string(),
            },
            OperationReport {
                op: OperationType::ResetChecks,
                amount: None,
                balance: Decimal::from(90),
                status: OperationStatus::Applied,
                detail: String::new(),
            },
        ];

        let mut output = Vec::new();
        write_reports_csv(&reports, &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "op,amount,balance,status,detail\n\
             check,10.00,90.00,applied,fee 0.00\n\
             reset_checks,,90.00,applied,\n"
        );
    }
}
