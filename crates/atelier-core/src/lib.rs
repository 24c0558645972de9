//! atelier-core
//!
//! Pure domain types and transformations for the creative-works catalog.
//! No filesystem or network access: bulk text parsing, backup encoding,
//! import reconciliation and the in-memory catalog all live here, and the
//! storage crate owns loading and saving.

pub mod backup;
pub mod bulk;
pub mod catalog;
pub mod error;
pub mod models;
pub mod normalize;
pub mod reconcile;
pub mod view;
