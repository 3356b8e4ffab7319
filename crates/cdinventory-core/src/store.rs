//! Whole-file persistence of the inventory.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::inventory::Inventory;

/// File name used when no other location is configured.
pub const DEFAULT_FILE_NAME: &str = "CDInventory.dat";

/// Outcome of reading the snapshot file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Snapshot {
    /// The file existed and was read in full.
    Loaded(Inventory),
    /// No file at the path; start with an empty inventory.
    Missing,
}

impl Snapshot {
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// The restored inventory, empty if the file was missing.
    #[must_use]
    pub fn into_inventory(self) -> Inventory {
        match self {
            Self::Loaded(inventory) => inventory,
            Self::Missing => Inventory::new(),
        }
    }
}

/// The single file holding the saved inventory.
///
/// Saving always rewrites the whole file; there are no incremental writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole inventory back from disk.
    ///
    /// A missing file is not an error. Anything else that goes wrong,
    /// including a file that does not deserialize, is.
    pub fn load(&self) -> Result<Snapshot> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No inventory file at {}", self.path.display());
                return Ok(Snapshot::Missing);
            }
            Err(e) => return Err(e.into()),
        };

        let inventory: Inventory = serde_json::from_slice(&bytes)?;
        log::info!(
            "Loaded {} record(s) from {}",
            inventory.len(),
            self.path.display()
        );
        Ok(Snapshot::Loaded(inventory))
    }

    /// Overwrite the file with the full inventory in one write.
    pub fn save(&self, inventory: &Inventory) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let bytes = serde_json::to_vec(inventory)?;
        std::fs::write(&self.path, bytes)?;
        log::info!(
            "Saved {} record(s) to {}",
            inventory.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CdId, Error};
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = SnapshotFile::new(temp_dir.path().join(DEFAULT_FILE_NAME));

        let snapshot = file.load().unwrap();
        assert!(snapshot.is_missing());
        assert!(snapshot.into_inventory().is_empty());
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join(DEFAULT_FILE_NAME);
        let file = SnapshotFile::new(&path);

        let mut inventory = Inventory::new();
        inventory.add(CdId::new(1), "A", "B");
        file.save(&inventory).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_save_overwrites_previous_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let file = SnapshotFile::new(temp_dir.path().join(DEFAULT_FILE_NAME));

        let mut inventory = Inventory::new();
        inventory.add(CdId::new(1), "A", "B");
        inventory.add(CdId::new(2), "C", "D");
        file.save(&inventory).unwrap();

        inventory.delete(CdId::new(1));
        file.save(&inventory).unwrap();

        assert_eq!(file.load().unwrap(), Snapshot::Loaded(inventory));
    }

    #[test]
    fn test_load_corrupt_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_FILE_NAME);
        std::fs::write(&path, b"\x80not a snapshot").unwrap();

        let result = SnapshotFile::new(&path).load();
        assert!(matches!(result, Err(Error::Serialization(_))));
    }

    #[test]
    fn test_load_directory_is_an_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = SnapshotFile::new(temp_dir.path()).load();
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
