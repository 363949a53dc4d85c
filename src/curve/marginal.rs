//! Marginal PD extraction.

use crate::domain::PdCurve;
use crate::error::AppError;

/// First differences of the cumulative series; the first entry is defined as 0.
pub fn marginal_pd(cumulative: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(cumulative.len());
    if cumulative.is_empty() {
        return out;
    }
    out.push(0.0);
    out.extend(cumulative.windows(2).map(|w| w[1] - w[0]));
    out
}

/// Pair the grid with cumulative and marginal PDs.
pub fn build_pd_curve(tenor_days: &[u32], cumulative: Vec<f64>) -> Result<PdCurve, AppError> {
    if tenor_days.len() != cumulative.len() {
        return Err(AppError::configuration(format!(
            "Marginal extractor: {} tenors but {} cumulative values.",
            tenor_days.len(),
            cumulative.len()
        )));
    }
    let marginal = marginal_pd(&cumulative);
    Ok(PdCurve {
        tenor_days: tenor_days.to_vec(),
        cumulative_pd: cumulative,
        marginal_pd: marginal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn differences_consecutive_values() {
        let m = marginal_pd(&[0.0, 0.1, 0.25, 0.2]);
        assert_eq!(m.len(), 4);
        assert_eq!(m[0], 0.0);
        assert!((m[1] - 0.1).abs() < 1e-15);
        assert!((m[2] - 0.15).abs() < 1e-15);
        assert!((m[3] + 0.05).abs() < 1e-15);
    }

    #[test]
    fn first_entry_is_zero_even_if_cumulative_is_not() {
        assert_eq!(marginal_pd(&[0.3, 0.4])[0], 0.0);
    }

    #[test]
    fn empty_and_single_inputs() {
        assert!(marginal_pd(&[]).is_empty());
        assert_eq!(marginal_pd(&[0.0]), vec![0.0]);
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        assert!(build_pd_curve(&[0, 5], vec![0.0]).is_err());
    }
}
