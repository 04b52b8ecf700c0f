//! Domain logic for the Fyyur booking directory.
//!
//! This crate has no I/O: it holds the shared id/timestamp types, the
//! [`error::CoreError`] taxonomy, and the pure list bookkeeping (location
//! grouping, search merging, show-time classification) used by the
//! repository and HTTP layers.

pub mod error;
pub mod genres;
pub mod listing;
pub mod schedule;
pub mod search;
pub mod types;
