//! Core domain model for cdinventory.
//!
//! This crate defines the catalog [`Record`], the in-memory [`Inventory`]
//! that holds them in insertion order, and the [`SnapshotFile`] that
//! writes and restores the whole inventory as a single file.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod inventory;
pub mod model;
pub mod store;

pub use error::{Error, Result};
pub use inventory::Inventory;
pub use model::{CdId, ParseCdIdError, Record};
pub use store::{Snapshot, SnapshotFile, DEFAULT_FILE_NAME};
