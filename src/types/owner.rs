//! Owner records
//!
//! Owners are account holders loaded from a headerless CSV file. They are
//! independent of [`crate::types::Account`].

use serde::Serialize;

/// Owner identifier
pub type OwnerId = u32;

/// An account holder
///
/// Field order matches the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Owner {
    pub id: OwnerId,
    pub last_name: String,
    pub first_name: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
}
