//! Owner registry
//!
//! This module provides the `OwnerRegistry` struct, a caller-owned directory
//! of account holders. It is filled from CSV files and queried by id; it has
//! no link to accounts.

use crate::io::OwnerReader;
use crate::types::{BankError, Owner, OwnerId};
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

/// Directory of account holders, in load order
#[derive(Debug, Clone, Default)]
pub struct OwnerRegistry {
    owners: Vec<Owner>,
}

impl OwnerRegistry {
    pub fn new() -> Self {
        OwnerRegistry { owners: Vec::new() }
    }

    /// Append every owner in the CSV file at `path`
    ///
    /// Returns the number of owners added. Malformed rows are logged and
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn read_csv(&mut self, path: &Path) -> Result<usize, BankError> {
        let reader = OwnerReader::open(path)?;
        let added = self.load(reader);
        info!(path = %path.display(), added, total = self.owners.len(), "owners loaded");
        Ok(added)
    }

    /// Append every owner yielded by `reader`, skipping malformed rows
    pub fn load<R: Read>(&mut self, reader: OwnerReader<R>) -> usize {
        let before = self.owners.len();
        for result in reader {
            match result {
                Ok(owner) => self.owners.push(owner),
                Err(e) => warn!("skipping owner row: {}", e),
            }
        }
        self.owners.len() - before
    }

    pub fn add(&mut self, owner: Owner) {
        self.owners.push(owner);
    }

    /// Find the first owner with the given id
    ///
    /// # Errors
    ///
    /// Returns [`BankError::OwnerNotFound`] if no owner has that id.
    pub fn find(&self, id: OwnerId) -> Result<&Owner, BankError> {
        self.owners
            .iter()
            .find(|owner| owner.id == id)
            .ok_or_else(|| BankError::owner_not_found(id))
    }

    /// Every owner loaded since the last reset, in load order
    pub fn all(&self) -> &[Owner] {
        &self.owners
    }

    /// Forget every owner
    pub fn reset(&mut self) {
        self.owners.clear();
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const OWNERS: &str = "14,Morales,Wanda,9918 Lake Dr,Seattle,WA\n\
                          15,Ray,Marcus,55 Pine St,Portland,OR\n\
                          16,Chen,Li,3 Oak Ave,Boise,ID\n";

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    fn loaded() -> OwnerRegistry {
        let mut registry = OwnerRegistry::new();
        registry.load(OwnerReader::from_reader(OWNERS.as_bytes()));
        registry
    }

    #[test]
    fn test_new_registry_is_empty() {
        let registry = OwnerRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.all().is_empty());
    }

    #[test]
    fn test_read_csv_loads_every_row() {
        let file = create_temp_csv(OWNERS);
        let mut registry = OwnerRegistry::new();

        let added = registry.read_csv(file.path()).unwrap();

        assert_eq!(added, 3);
        assert_eq!(registry.len(), 3);
        let ids: Vec<_> = registry.all().iter().map(|owner| owner.id).collect();
        assert_eq!(ids, vec![14, 15, 16]);
    }

    #[test]
    fn test_read_csv_appends() {
        let file = create_temp_csv(OWNERS);
        let mut registry = OwnerRegistry::new();

        registry.read_csv(file.path()).unwrap();
        registry.read_csv(file.path()).unwrap();

        assert_eq!(registry.len(), 6);
    }

    #[test]
    fn test_read_csv_missing_file() {
        let mut registry = OwnerRegistry::new();
        let result = registry.read_csv(Path::new("nonexistent_owners.csv"));
        assert!(matches!(result, Err(BankError::FileNotFound { .. })));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_load_skips_malformed_rows() {
        let content = "14,Morales,Wanda,9918 Lake Dr,Seattle,WA\n\
                       nope,Ray,Marcus,55 Pine St,Portland,OR\n\
                       16,Chen,Li\n";
        let mut registry = OwnerRegistry::new();

        let added = registry.load(OwnerReader::from_reader(content.as_bytes()));

        assert_eq!(added, 1);
        assert_eq!(registry.all()[0].id, 14);
    }

    #[test]
    fn test_find_returns_matching_owner() {
        let registry = loaded();
        let owner = registry.find(15).unwrap();
        assert_eq!(owner.last_name, "Ray");
        assert_eq!(owner.city, "Portland");
    }

    #[test]
    fn test_find_unknown_id_fails() {
        let registry = loaded();
        let result = registry.find(9999);
        assert_eq!(result, Err(BankError::OwnerNotFound { id: 9999 }));
        assert!(result.unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_find_returns_first_of_duplicates() {
        let mut registry = loaded();
        let mut duplicate = registry.find(14).unwrap().clone();
        duplicate.last_name = "Later".to_string();
        registry.add(duplicate);

        assert_eq!(registry.find(14).unwrap().last_name, "Morales");
    }

    #[test]
    fn test_reset_clears_registry() {
        let mut registry = loaded();
        registry.reset();

        assert!(registry.is_empty());
        assert!(registry.find(14).is_err());
    }

    #[test]
    fn test_all_reflects_loads_since_reset() {
        let mut registry = loaded();
        registry.reset();
        registry.load(OwnerReader::from_reader(
            "20,Okafor,Ngozi,8 Birch Rd,Austin,TX\n".as_bytes(),
        ));

        assert_eq!(registry.all().len(), 1);
        assert_eq!(registry.all()[0].id, 20);
    }
}
