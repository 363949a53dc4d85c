//! Input normalization: recovery rate to loss given default.

use crate::domain::{LossGivenDefault, RecoveryRate};
use crate::error::AppError;

/// Convert a raw recovery rate into LGD (`1 - RR`).
///
/// The input boundary should already have enforced `[0, 1]`; this re-checks.
pub fn loss_given_default(recovery_rate: f64) -> Result<LossGivenDefault, AppError> {
    let rr = RecoveryRate::new(recovery_rate)?;
    Ok(LossGivenDefault::from_recovery(rr))
}
