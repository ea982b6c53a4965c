//! Core business logic module
//!
//! This module contains the account and owner components:
//! - `policy` - Per-kind fee schedules and withdrawal decisions
//! - `operations` - Deposit, withdraw, check, reset and interest on an account
//! - `engine` - Replays operation records against one account
//! - `owner_registry` - Caller-owned directory of account holders

pub mod engine;
pub mod operations;
pub mod owner_registry;
pub mod policy;

pub use engine::AccountEngine;
pub use owner_registry::OwnerRegistry;
pub use policy::{CheckingPolicy, FeeSchedule, SavingsPolicy};
