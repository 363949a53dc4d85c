//! Stopping-time grid (business-day tenors).
//!
//! Final PDs are reported at a fixed list of business-day offsets. The list is
//! process-wide configuration: it is validated once, wrapped in a `TenorGrid`,
//! and handed to the regridder. Requests never see or change it.

use crate::error::AppError;

/// Business days per year used to map annual tenors onto the grid.
pub const BUSINESS_DAYS_PER_YEAR: u32 = 264;

/// Standard stopping times, in business days. Ends at 19 years x 264.
pub const STANDARD_STOPPING_TIMES: [u32; 79] = [
    0, 5, 22, 89, 156, 221, 286, 353, 420, 485, 551, 618, 684, 750, 815, 882, 948, 1014, 1079, 1146,
    1212, 1278, 1343, 1410, 1476, 1542, 1608, 1674, 1741, 1807, 1872, 1938, 2005, 2071, 2136, 2202,
    2269, 2335, 2400, 2466, 2533, 2599, 2665, 2731, 2798, 2863, 2929, 2995, 3062, 3127, 3193, 3259,
    3326, 3391, 3457, 3523, 3590, 3655, 3721, 3788, 3854, 3920, 3985, 4052, 4118, 4184, 4249, 4316,
    4382, 4448, 4513, 4580, 4646, 4712, 4778, 4845, 4911, 4977, 5016,
];

/// A validated, strictly ascending list of business-day tenors starting at 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenorGrid {
    days: Vec<u32>,
}

impl TenorGrid {
    pub fn new(days: Vec<u32>) -> Result<Self, AppError> {
        if days.is_empty() {
            return Err(AppError::configuration("Tenor grid is empty."));
        }
        if days[0] != 0 {
            return Err(AppError::configuration(format!(
                "Tenor grid must start at 0 business days, starts at {}.",
                days[0]
            )));
        }
        if let Some(i) = days.windows(2).position(|w| w[1] <= w[0]) {
            return Err(AppError::configuration(format!(
                "Tenor grid must be strictly ascending: entry {} ({}) follows {}.",
                i + 1,
                days[i + 1],
                days[i]
            )));
        }
        Ok(Self { days })
    }

    /// The built-in stopping-time table.
    pub fn standard() -> Self {
        Self {
            days: STANDARD_STOPPING_TIMES.to_vec(),
        }
    }

    pub fn days(&self) -> &[u32] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn last(&self) -> u32 {
        self.days[self.days.len() - 1]
    }
}

impl Default for TenorGrid {
    fn default() -> Self {
        Self::standard()
    }
}

/// Convert an integer year into business days.
pub fn years_to_days(years: u32) -> u32 {
    years * BUSINESS_DAYS_PER_YEAR
}

/// Convert business days into (fractional) years.
pub fn days_to_years(days: u32) -> f64 {
    f64::from(days) / f64::from(BUSINESS_DAYS_PER_YEAR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn standard_grid_is_valid() {
        let grid = TenorGrid::new(STANDARD_STOPPING_TIMES.to_vec()).unwrap();
        assert_eq!(grid, TenorGrid::standard());
        assert_eq!(grid.days()[0], 0);
        assert_eq!(grid.last(), years_to_days(19));
    }

    #[test]
    fn rejects_empty_grid() {
        assert_eq!(TenorGrid::new(vec![]).unwrap_err().kind(), ErrorKind::Configuration);
    }

    #[test]
    fn rejects_grid_not_starting_at_zero() {
        assert_eq!(TenorGrid::new(vec![5, 22]).unwrap_err().kind(), ErrorKind::Configuration);
    }

    #[test]
    fn rejects_unsorted_or_duplicate_grid() {
        assert_eq!(TenorGrid::new(vec![0, 22, 5]).unwrap_err().kind(), ErrorKind::Configuration);
        assert_eq!(TenorGrid::new(vec![0, 5, 5]).unwrap_err().kind(), ErrorKind::Configuration);
    }

    #[test]
    fn single_point_grid_is_allowed() {
        assert_eq!(TenorGrid::new(vec![0]).unwrap().len(), 1);
    }

    #[test]
    fn day_count_conversions() {
        assert_eq!(years_to_days(2), 528);
        assert_eq!(years_to_days(20), 5280);
        assert!((days_to_years(396) - 1.5).abs() < 1e-15);
    }
}
