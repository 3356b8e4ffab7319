//! The in-memory catalog.

use serde::{Deserialize, Serialize};

use crate::model::{CdId, Record};

/// Ordered collection of records for the current session.
///
/// Insertion order is display order. Duplicate identifiers are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    records: Vec<Record>,
}

impl Inventory {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a new record to the end of the inventory.
    pub fn add(
        &mut self,
        id: impl Into<CdId>,
        title: impl Into<String>,
        artist: impl Into<String>,
    ) {
        let record = Record::new(id, title, artist);
        log::debug!(
            "Adding CD {} ({} by {})",
            record.id,
            record.title,
            record.artist
        );
        self.records.push(record);
    }

    /// Remove every record with the given identifier.
    ///
    /// Returns the number of records removed; zero means nothing matched and
    /// the inventory is unchanged.
    pub fn delete(&mut self, id: CdId) -> usize {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        let removed = before - self.records.len();
        log::debug!("Deleted {} record(s) with id {}", removed, id);
        removed
    }

    /// The records in display order.
    #[must_use]
    pub fn list(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn contains(&self, id: CdId) -> bool {
        self.records.iter().any(|record| record.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<Record> for Inventory {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Inventory {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_to_empty_inventory() {
        let mut inventory = Inventory::new();
        inventory.add(CdId::new(101), "Blue", "X");

        assert_eq!(inventory.list(), &[Record::new(CdId::new(101), "Blue", "X")]);
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut inventory = Inventory::new();
        inventory.add(CdId::new(3), "C", "c");
        inventory.add(CdId::new(1), "A", "a");
        inventory.add(CdId::new(2), "B", "b");

        let ids: Vec<i64> = inventory.iter().map(|r| r.id.get()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_add_allows_duplicate_ids() {
        let mut inventory = Inventory::new();
        inventory.add(CdId::new(1), "A", "a");
        inventory.add(CdId::new(1), "A again", "a");
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn test_delete_existing() {
        let mut inventory = Inventory::new();
        inventory.add(CdId::new(101), "Blue", "X");

        assert_eq!(inventory.delete(CdId::new(101)), 1);
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_delete_missing_leaves_inventory_unchanged() {
        let mut inventory = Inventory::new();
        inventory.add(CdId::new(101), "Blue", "X");
        let before = inventory.clone();

        assert_eq!(inventory.delete(CdId::new(7)), 0);
        assert_eq!(inventory, before);
    }

    #[test]
    fn test_delete_removes_adjacent_duplicates() {
        let mut inventory: Inventory = vec![
            Record::new(CdId::new(1), "A", "a"),
            Record::new(CdId::new(2), "B", "b"),
            Record::new(CdId::new(2), "B again", "b"),
            Record::new(CdId::new(3), "C", "c"),
        ]
        .into_iter()
        .collect();

        assert_eq!(inventory.delete(CdId::new(2)), 2);
        assert!(!inventory.contains(CdId::new(2)));
        let ids: Vec<i64> = inventory.iter().map(|r| r.id.get()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_serializes_as_bare_sequence() {
        let mut inventory = Inventory::new();
        inventory.add(CdId::new(1), "A", "B");
        let json = serde_json::to_string(&inventory).unwrap();
        assert_eq!(json, r#"[{"id":1,"title":"A","artist":"B"}]"#);
    }
}
