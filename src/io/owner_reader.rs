//! Streaming reader over owner CSV files
//!
//! Owner files have six fixed columns and no header row:
//!
//! ```text
//! 14,Morales,Wanda,9918 Lake Dr,Seattle,WA
//! 15,Ray,Marcus,55 Pine St,Portland,OR
//! ```
//!
//! # Error Handling
//!
//! - Failing to open the file is returned from [`OwnerReader::open`]
//! - Each malformed row is yielded as an `Err` carrying its line number, and
//!   iteration continues with the next row

use crate::io::csv_format::OwnerCsvRecord;
use crate::types::{BankError, Owner};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Iterator over the owners in a CSV source
#[derive(Debug)]
pub struct OwnerReader<R> {
    reader: csv::Reader<R>,
    line_num: usize,
}

impl OwnerReader<File> {
    /// Open an owner CSV file
    ///
    /// # Errors
    ///
    /// - [`BankError::FileNotFound`] if the path does not exist
    /// - [`BankError::IoError`] for any other open failure
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

impl<R: Read> OwnerReader<R> {
    /// Read owners from any byte source
    pub fn from_reader(source: R) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(false)
            .trim(Trim::All)
            .from_reader(source);

        Self {
            reader,
            line_num: 0,
        }
    }
}

impl<R: Read> Iterator for OwnerReader<R> {
    type Item = Result<Owner, String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<OwnerCsvRecord>();
        let result = deserializer.next()?;
        self.line_num += 1;

        Some(
            result
                .map(Owner::from)
                .map_err(|e| format!("Line {}: CSV parse error: {}", self.line_num, e)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_owner_reader_opens_file() {
        let file = create_temp_csv("14,Morales,Wanda,9918 Lake Dr,Seattle,WA\n");
        assert!(OwnerReader::open(file.path()).is_ok());
    }

    #[test]
    fn test_owner_reader_missing_file() {
        let result = OwnerReader::open(Path::new("nonexistent_owners.csv"));
        assert!(matches!(result, Err(BankError::FileNotFound { .. })));
    }

    #[test]
    fn test_owner_reader_reads_all_columns() {
        let file = create_temp_csv("14,Morales,Wanda,9918 Lake Dr,Seattle,WA\n");
        let owners: Vec<_> = OwnerReader::open(file.path()).unwrap().collect();

        assert_eq!(owners.len(), 1);
        let owner = owners[0].as_ref().unwrap();
        assert_eq!(owner.id, 14);
        assert_eq!(owner.last_name, "Morales");
        assert_eq!(owner.first_name, "Wanda");
        assert_eq!(owner.street_address, "9918 Lake Dr");
        assert_eq!(owner.city, "Seattle");
        assert_eq!(owner.state, "WA");
    }

    #[test]
    fn test_owner_reader_first_row_is_data() {
        let content = "14,Morales,Wanda,9918 Lake Dr,Seattle,WA\n\
                       15,Ray,Marcus,55 Pine St,Portland,OR\n";
        let owners: Vec<_> = OwnerReader::from_reader(content.as_bytes())
            .filter_map(Result::ok)
            .collect();

        assert_eq!(owners.len(), 2);
        assert_eq!(owners[0].id, 14);
        assert_eq!(owners[1].id, 15);
    }

    #[test]
    fn test_owner_reader_trims_whitespace() {
        let content = "  16 , Chen , Li , 3 Oak Ave , Boise , ID \n";
        let owners: Vec<_> = OwnerReader::from_reader(content.as_bytes()).collect();

        let owner = owners[0].as_ref().unwrap();
        assert_eq!(owner.id, 16);
        assert_eq!(owner.last_name, "Chen");
        assert_eq!(owner.state, "ID");
    }

    #[test]
    fn test_owner_reader_reports_line_and_continues() {
        let content = "14,Morales,Wanda,9918 Lake Dr,Seattle,WA\n\
                       abc,Ray,Marcus,55 Pine St,Portland,OR\n\
                       16,Chen,Li,3 Oak Ave,Boise,ID\n";
        let owners: Vec<_> = OwnerReader::from_reader(content.as_bytes()).collect();

        assert_eq!(owners.len(), 3);
        assert!(owners[0].is_ok());
        assert!(owners[1].as_ref().unwrap_err().contains("Line 2"));
        assert!(owners[2].is_ok());
    }

    #[test]
    fn test_owner_reader_empty_source() {
        let owners: Vec<_> = OwnerReader::from_reader("".as_bytes()).collect();
        assert!(owners.is_empty());
    }
}
