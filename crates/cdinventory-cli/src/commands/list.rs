use anyhow::{Context, Result};
use cdinventory_core::SnapshotFile;
use std::io::{self, Write};

use crate::console::write_inventory;

/// Print the saved inventory without starting the menu.
pub fn show_inventory(snapshot: &SnapshotFile) -> Result<()> {
    let mut out = io::stdout().lock();
    write_saved_inventory(&mut out, snapshot)?;
    out.flush()?;
    Ok(())
}

fn write_saved_inventory(out: &mut impl Write, snapshot: &SnapshotFile) -> Result<()> {
    let loaded = snapshot.load().with_context(|| {
        format!("Failed to load inventory from {}", snapshot.path().display())
    })?;

    if loaded.is_missing() {
        writeln!(out, "No inventory file at {}", snapshot.path().display())?;
    }
    write_inventory(out, &loaded.into_inventory())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cdinventory_core::{CdId, Inventory, DEFAULT_FILE_NAME};
    use tempfile::TempDir;

    #[test]
    fn test_missing_snapshot_prints_empty_table() {
        let temp_dir = TempDir::new().unwrap();
        let snapshot = SnapshotFile::new(temp_dir.path().join(DEFAULT_FILE_NAME));

        let mut out = Vec::new();
        write_saved_inventory(&mut out, &snapshot).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("No inventory file at"));
        assert!(text.contains("======= The Current Inventory: ======="));
    }

    #[test]
    fn test_saved_records_are_listed() {
        let temp_dir = TempDir::new().unwrap();
        let snapshot = SnapshotFile::new(temp_dir.path().join(DEFAULT_FILE_NAME));
        let mut inventory = Inventory::new();
        inventory.add(CdId::new(2), "C", "D");
        snapshot.save(&inventory).unwrap();

        let mut out = Vec::new();
        write_saved_inventory(&mut out, &snapshot).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(!text.contains("No inventory file"));
        assert!(text.contains("2\tC (by:D)"));
    }

    #[test]
    fn test_show_inventory_with_missing_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let snapshot = SnapshotFile::new(temp_dir.path().join(DEFAULT_FILE_NAME));

        assert!(show_inventory(&snapshot).is_ok());
    }

    #[test]
    fn test_corrupt_snapshot_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let snapshot = SnapshotFile::new(temp_dir.path().join(DEFAULT_FILE_NAME));
        std::fs::write(snapshot.path(), "[{").unwrap();

        assert!(write_saved_inventory(&mut Vec::<u8>::new(), &snapshot).is_err());
    }
}
