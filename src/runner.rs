//! File-to-output pipelines behind the CLI subcommands
//!
//! Each pipeline streams records from an input CSV, hands them to the core
//! components, and writes CSV to the given output. Only fatal problems
//! (unreadable input, failed output) are returned as errors; bad rows and
//! rejected operations are logged and processing continues.

use crate::core::{AccountEngine, OwnerRegistry};
use crate::io::{write_owners_csv, write_reports_csv, OperationReader};
use crate::types::{Account, BankError, OwnerId};
use std::io::Write;
use std::path::Path;
use tracing::{error, warn};

/// Load owners from `input` and write all of them, or only the one with `id`
///
/// # Errors
///
/// Returns an error if the input cannot be opened, `id` is given but not
/// registered, or output fails.
pub fn list_owners(
    input: &Path,
    id: Option<OwnerId>,
    output: &mut dyn Write,
) -> Result<(), BankError> {
    let mut registry = OwnerRegistry::new();
    registry.read_csv(input)?;

    match id {
        Some(id) => {
            let owner = registry.find(id)?;
            write_owners_csv(std::slice::from_ref(owner), output)
        }
        None => write_owners_csv(registry.all(), output),
    }
}

/// Replay the operations in `input` against `account` and write one report row per operation
///
/// Returns the account in its final state.
///
/// # Errors
///
/// Returns an error if the input cannot be opened or output fails.
pub fn run_operations(
    input: &Path,
    account: Account,
    output: &mut dyn Write,
) -> Result<Account, BankError> {
    let reader = OperationReader::open(input)?;
    let mut engine = AccountEngine::new(account);
    let mut reports = Vec::new();

    for result in reader {
        match result {
            Ok(record) => match engine.process(record) {
                Ok(report) => reports.push(report),
                Err(e) => error!("operation failed: {}", e),
            },
            Err(e) => warn!("skipping operation row: {}", e),
        }
    }

    write_reports_csv(&reports, output)?;
    Ok(engine.into_account())
}
