//! Input/output helpers.
//!
//! - batch request CSV ingest + validation (`ingest`)
//! - tenor-table CSV exports (`export`)
//! - curve JSON write/read and tenor-grid JSON loading (`curve`)

pub mod curve;
pub mod export;
pub mod ingest;

pub use curve::*;
pub use export::*;
pub use ingest::*;
