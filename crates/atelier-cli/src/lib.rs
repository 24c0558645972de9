//! atelier-cli library root.
//!
//! Re-exports the command layer so integration tests can drive it against
//! an in-memory store without going through argument parsing.

pub mod audit;
pub mod cli;
pub mod commands;
pub mod config;
pub mod state;
