//! atelier-storage
//!
//! Local persistence for the catalog and the file I/O used to move backups
//! in and out. Every catalog write replaces the whole collection atomically.

pub mod error;
pub mod state;
pub mod store;
pub mod transfer;
