//! Recommended power density (W/L) by water volume.
//!
//! Base values follow the heavy-duty flux-removal reference table: small
//! tanks need a dense field to cavitate everywhere, while very large tanks
//! (>190 L) cavitate throughout at around 5.3 W/L.

use crate::tank::{TankGeometry, UsageConditions};
use sf_core::numeric::round_to;

/// Multiplier when chemistry/acid is used in the bath.
pub const CHEMISTRY_FACTOR: f64 = 0.7;

/// Multiplier compensating for sound absorbed by dense parts.
pub const HEAVY_LOAD_FACTOR: f64 = 1.15;

/// One row of the recommendation table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityBracket {
    /// Inclusive upper bound of the bracket (liters).
    pub max_volume_l: f64,
    /// Base recommendation before condition factors (W/L).
    pub base_density: f64,
    /// Published advisory range for the bracket, if one exists.
    pub advisory_range: Option<&'static str>,
    /// Approximate total wattage for a tank at the bracket size.
    pub approx_total_power: Option<&'static str>,
}

/// Ascending brackets; the first whose bound covers the volume wins.
pub const DENSITY_BRACKETS: [DensityBracket; 6] = [
    DensityBracket {
        max_volume_l: 10.0,
        base_density: 35.0,
        advisory_range: Some("30 - 35 W/L"),
        approx_total_power: Some("300-350 W"),
    },
    DensityBracket {
        max_volume_l: 20.0,
        base_density: 30.0,
        advisory_range: Some("25 - 30 W/L"),
        approx_total_power: Some("500-600 W"),
    },
    DensityBracket {
        max_volume_l: 50.0,
        base_density: 25.0,
        advisory_range: Some("20 - 25 W/L"),
        approx_total_power: Some("1000-1250 W"),
    },
    DensityBracket {
        max_volume_l: 100.0,
        base_density: 20.0,
        advisory_range: Some("15 - 20 W/L"),
        approx_total_power: Some("1500-2000 W"),
    },
    DensityBracket {
        max_volume_l: 190.0,
        base_density: 10.0,
        advisory_range: None,
        approx_total_power: None,
    },
    DensityBracket {
        max_volume_l: f64::INFINITY,
        base_density: 5.3,
        advisory_range: Some("~5.3 W/L"),
        approx_total_power: Some("Low Density"),
    },
];

/// Bracket covering `volume_liters`. Zero or negative volumes land in the first.
pub fn bracket_for(volume_liters: f64) -> &'static DensityBracket {
    DENSITY_BRACKETS
        .iter()
        .find(|b| volume_liters <= b.max_volume_l)
        .unwrap_or(&DENSITY_BRACKETS[DENSITY_BRACKETS.len() - 1])
}

/// Base W/L before condition factors.
pub fn base_density(volume_liters: f64) -> f64 {
    bracket_for(volume_liters).base_density
}

/// Recommended W/L for a volume under the given conditions.
///
/// Factors apply in order (chemistry, then heavy load) and the result is
/// rounded to one decimal, ties away from zero.
pub fn recommended_density(volume_liters: f64, chemistry: bool, heavy_load: bool) -> f64 {
    let mut density = base_density(volume_liters);
    if chemistry {
        density *= CHEMISTRY_FACTOR;
    }
    if heavy_load {
        density *= HEAVY_LOAD_FACTOR;
    }
    round_to(density, 1)
}

/// Recommendation for a tank's water volume.
pub fn recommend(tank: &TankGeometry, conditions: UsageConditions) -> f64 {
    recommended_density(
        tank.volume_liters(),
        conditions.chemistry,
        conditions.heavy_load,
    )
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn expected_base(v: f64) -> f64 {
        if v <= 10.0 {
            35.0
        } else if v <= 20.0 {
            30.0
        } else if v <= 50.0 {
            25.0
        } else if v <= 100.0 {
            20.0
        } else if v <= 190.0 {
            10.0
        } else {
            5.3
        }
    }

    proptest! {
        #[test]
        fn plain_recommendation_matches_bracket(v in 0.001_f64..5_000.0) {
            prop_assert_eq!(recommended_density(v, false, false), expected_base(v));
        }

        #[test]
        fn rounding_stays_within_half_a_tenth(v in 0.001_f64..5_000.0, chem: bool, heavy: bool) {
            let mut raw = expected_base(v);
            if chem {
                raw *= 0.7;
            }
            if heavy {
                raw *= 1.15;
            }
            let rounded = recommended_density(v, chem, heavy);
            prop_assert!((rounded - raw).abs() <= 0.05 + 1e-12, "raw={} rounded={}", raw, rounded);
        }
    }
}
