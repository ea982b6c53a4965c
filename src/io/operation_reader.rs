//! Streaming reader over operation CSV files
//!
//! Operation files start with an `op,amount` header:
//!
//! ```text
//! op,amount
//! check,10
//! reset_checks,
//! withdraw,25.50
//! ```
//!
//! Like [`crate::io::OwnerReader`], rows that fail to parse are yielded as
//! `Err` with their line number and do not stop iteration.

use crate::io::csv_format::{convert_operation_record, OperationCsvRecord};
use crate::types::{BankError, OperationRecord};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Iterator over the operations in a CSV source
#[derive(Debug)]
pub struct OperationReader<R> {
    reader: csv::Reader<R>,
    line_num: usize,
}

impl OperationReader<File> {
    pub fn open(path: &Path) -> Result<Self, BankError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => BankError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => BankError::IoError {
                message: format!("Failed to open file '{}': {}", path.display(), e),
            },
        })?;

        Ok(Self::from_reader(file))
    }
}

impl<R: Read> OperationReader<R> {
    pub fn from_reader(source: R) -> Self {
        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(source);

        Self {
            reader,
            line_num: 1,
        }
    }
}

impl<R: Read> Iterator for OperationReader<R> {
    type Item = Result<OperationRecord, String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<OperationCsvRecord>();
        let result = deserializer.next()?;
        // Line 1 is the header
        self.line_num += 1;

        match result {
            Ok(record) => Some(
                convert_operation_record(record)
                    .map_err(|e| format!("Line {}: {}", self.line_num, e)),
            ),
            Err(e) => Some(Err(format!(
                "Line {}: CSV parse error: {}",
                self.line_num, e
            ))),
        }
    }
}
