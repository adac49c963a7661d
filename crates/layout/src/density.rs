//! Density Selector: a step function from course count to presentation
//! sizing, thresholded per orientation.
//!
//! This is a heuristic fit, not a measured one: no text metrics are
//! consulted. Portrait pages use smaller count thresholds than landscape
//! because landscape trades vertical room for horizontal room.

use parchment_style::{DensityParams, DensityTier};
use parchment_types::Orientation;

/// Course-count thresholds `(low_max, mid_max)` for an orientation.
fn thresholds(orientation: Orientation) -> (usize, usize) {
    match orientation {
        Orientation::Portrait => (6, 8),
        Orientation::Landscape => (8, 12),
    }
}

/// Picks the density tier for a course count. Total over any count and
/// monotonic: a larger count never maps to a larger font size.
pub fn tier_for_count(count: usize, orientation: Orientation) -> DensityTier {
    let (low_max, mid_max) = thresholds(orientation);
    if count <= low_max {
        DensityTier::Low
    } else if count <= mid_max {
        DensityTier::Mid
    } else {
        DensityTier::High
    }
}

/// Resolves a tier to concrete sizing. Row padding is the only value that
/// differs by orientation (landscape rows get an extra point at Low).
pub fn params_for(tier: DensityTier, orientation: Orientation) -> DensityParams {
    let table_font_size = match tier {
        DensityTier::Low => 11.0,
        DensityTier::Mid => 10.0,
        DensityTier::High => 9.0,
    };
    let row_padding = match (tier, orientation) {
        (DensityTier::Low, Orientation::Portrait) => 6.0,
        (DensityTier::Low, Orientation::Landscape) => 7.0,
        (DensityTier::Mid, _) => 5.0,
        (DensityTier::High, _) => 4.0,
    };
    let section_gap = match tier {
        DensityTier::Low => 16.0,
        DensityTier::Mid => 12.0,
        DensityTier::High => 10.0,
    };
    DensityParams {
        table_font_size,
        row_padding,
        section_gap,
    }
}

/// Convenience: tier selection and parameter lookup in one step.
pub fn select_params(count: usize, orientation: Orientation) -> DensityParams {
    params_for(tier_for_count(count, orientation), orientation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portrait_tier_boundaries() {
        assert_eq!(tier_for_count(0, Orientation::Portrait), DensityTier::Low);
        assert_eq!(tier_for_count(6, Orientation::Portrait), DensityTier::Low);
        assert_eq!(tier_for_count(7, Orientation::Portrait), DensityTier::Mid);
        assert_eq!(tier_for_count(8, Orientation::Portrait), DensityTier::Mid);
        assert_eq!(tier_for_count(9, Orientation::Portrait), DensityTier::High);
    }

    #[test]
    fn test_landscape_tier_boundaries() {
        assert_eq!(tier_for_count(8, Orientation::Landscape), DensityTier::Low);
        assert_eq!(tier_for_count(9, Orientation::Landscape), DensityTier::Mid);
        assert_eq!(tier_for_count(12, Orientation::Landscape), DensityTier::Mid);
        assert_eq!(tier_for_count(13, Orientation::Landscape), DensityTier::High);
    }

    #[test]
    fn test_font_size_monotonic_in_count() {
        for orientation in [Orientation::Portrait, Orientation::Landscape] {
            let mut last = f32::INFINITY;
            for count in 0..32 {
                let params = select_params(count, orientation);
                assert!(
                    params.table_font_size <= last,
                    "font size grew at count {count} ({orientation:?})"
                );
                last = params.table_font_size;
            }
        }
    }

    #[test]
    fn test_landscape_low_tier_row_padding() {
        assert_eq!(
            params_for(DensityTier::Low, Orientation::Landscape).row_padding,
            7.0
        );
        assert_eq!(
            params_for(DensityTier::Low, Orientation::Portrait).row_padding,
            6.0
        );
    }
}
