//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - validated inputs (`RecoveryRate`, `SpreadQuotes`, `PdRequest`)
//! - intermediate curve points (`SpreadAnchor`, `YearPoint`)
//! - outputs (`PdCurve`) and the JSON export schema (`CurveFile`)
//! - CLI-derived run configuration (`PdConfig`, `BatchConfig`)

pub mod types;

pub use types::*;
