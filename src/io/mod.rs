//! I/O module
//!
//! Handles CSV parsing and output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, output serialization)
//! - `owner_reader` - Iterator over headerless owner files
//! - `operation_reader` - Iterator over operation files

pub mod csv_format;
pub mod operation_reader;
pub mod owner_reader;

pub use csv_format::{
    convert_operation_record, write_owners_csv, write_reports_csv, OperationCsvRecord,
    OwnerCsvRecord,
};
pub use operation_reader::OperationReader;
pub use owner_reader::OwnerReader;
