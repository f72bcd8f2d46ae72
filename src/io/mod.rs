//! Input/output helpers.
//!
//! - household CSV ingest + validation (`ingest`)
//! - batch result export (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
