//! Bank Accounts CLI
//!
//! # Usage
//!
//! ```bash
//! bank owners support/owners.csv
//! bank owners support/owners.csv --id 14
//! bank run operations.csv --kind checking --balance 100
//! bank -v run operations.csv --kind savings --balance 500 --minimum-balance 50
//! ```
//!
//! CSV results go to stdout; logs and errors go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, unknown owner id, opening balance too low, etc.)

use bank_accounts::cli::{self, Command};
use bank_accounts::logging;
use bank_accounts::runner;
use bank_accounts::BankError;
use std::process;

fn main() {
    let args = cli::parse_args();
    logging::init_tracing(args.verbose);

    let mut output = std::io::stdout();
    let result: Result<(), BankError> = match args.command {
        Command::Owners(owners) => runner::list_owners(&owners.input_file, owners.id, &mut output),
        Command::Run(run) => run
            .open_account()
            .and_then(|account| runner::run_operations(&run.input_file, account, &mut output))
            .map(|_| ()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
