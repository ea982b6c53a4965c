use crate::core::{CheckingPolicy, FeeSchedule, SavingsPolicy};
use crate::types::{Account, AccountId, AccountKind, BankError, OwnerId};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Checking and savings accounts with fee schedules, plus an owner directory
#[derive(Parser, Debug)]
#[command(name = "bank")]
#[command(about = "Replay account operations and query owner records", long_about = None)]
pub struct CliArgs {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List owners from a headerless owner CSV file
    Owners(OwnersArgs),

    /// Replay an operations CSV file against a freshly opened account
    Run(RunArgs),
}

#[derive(Args, Debug)]
pub struct OwnersArgs {
    /// Owner CSV file: id,last_name,first_name,street_address,city,state
    #[arg(value_name = "INPUT")]
    pub input_file: PathBuf,

    /// Only print the owner with this id
    #[arg(long, value_name = "ID")]
    pub id: Option<OwnerId>,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Operations CSV file with an `op,amount` header
    #[arg(value_name = "INPUT")]
    pub input_file: PathBuf,

    /// Kind of account to open
    #[arg(long, value_name = "KIND")]
    pub kind: KindArg,

    /// Opening balance
    #[arg(long, value_name = "AMOUNT", allow_hyphen_values = true)]
    pub balance: Decimal,

    /// Account id
    #[arg(long, value_name = "ID", default_value_t = 1)]
    pub id: AccountId,

    /// Free checks between resets (checking only, default: 3)
    #[arg(long, value_name = "COUNT")]
    pub free_checks: Option<u32>,

    /// Overdraft allowance for checks (checking only, default: 10)
    #[arg(long, value_name = "AMOUNT", allow_hyphen_values = true)]
    pub overdraft_limit: Option<Decimal>,

    /// Balance floor (savings only, default: 10)
    #[arg(long, value_name = "AMOUNT", allow_hyphen_values = true)]
    pub minimum_balance: Option<Decimal>,
}

/// Account kinds selectable on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Checking,
    Savings,
}

impl RunArgs {
    /// Build the fee schedule from CLI overrides
    ///
    /// Unset options keep their defaults. Invalid overrides fall back to the
    /// default with a warning.
    pub fn to_fee_schedule(&self) -> FeeSchedule {
        let default = FeeSchedule::default();

        let checking = if self.free_checks.is_some() || self.overdraft_limit.is_some() {
            CheckingPolicy::new(
                self.free_checks.unwrap_or(default.checking.free_checks),
                self.overdraft_limit
                    .unwrap_or(default.checking.overdraft_limit),
            )
        } else {
            default.checking
        };

        let savings = match self.minimum_balance {
            Some(minimum_balance) => SavingsPolicy::new(minimum_balance),
            None => default.savings,
        };

        FeeSchedule { checking, savings }
    }

    /// Open the account described by these arguments
    ///
    /// # Errors
    ///
    /// Returns [`BankError::InsufficientOpeningBalance`] if the balance is
    /// below the kind's minimum.
    pub fn open_account(&self) -> Result<Account, BankError> {
        let schedule = self.to_fee_schedule();
        let kind = match self.kind {
            KindArg::Checking => AccountKind::checking(schedule.checking),
            KindArg::Savings => AccountKind::savings(schedule.savings),
        };
        Account::open(self.id, self.balance, kind)
    }
}
