//! The default-probability curve pipeline.
//!
//! Stages, in data-flow order:
//!
//! 1. `lgd`: recovery rate -> loss given default
//! 2. `spreads`: 2y/5y/10y spreads -> 21-point annual spread curve
//! 3. `hazard`: annual spreads -> annual cumulative PD
//! 4. `regrid`: annual cumulative PD -> stopping-time grid (`tenor_grid`)
//! 5. `marginal`: cumulative PD -> marginal PD
//!
//! No stage reads back upstream, and every stage returns a fresh value.

pub mod hazard;
pub mod lgd;
pub mod marginal;
pub mod regrid;
pub mod spreads;
pub mod tenor_grid;

pub use hazard::*;
pub use lgd::*;
pub use marginal::*;
pub use regrid::*;
pub use spreads::*;
pub use tenor_grid::*;
