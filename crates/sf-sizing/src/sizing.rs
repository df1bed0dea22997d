//! Board count sizing.
//!
//! Two entry points share one tally:
//! - **Design new**: split a target power between frequency classes and round
//!   each share up to whole boards.
//! - **Check existing**: take board counts as given and compare the resulting
//!   density against the recommendation.

use crate::board::{BoardPair, BoardSpec, FrequencyClass};
use serde::{Deserialize, Serialize};
use sf_core::numeric::units_to_cover;
use sf_core::units::{PowerDensity, density, in_watts, liters};

/// Fraction of the target density a system must reach to pass.
pub const PASS_FRACTION: f64 = 0.95;

/// Inputs for designing a new system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignRequest {
    /// Target power density (W/L).
    pub target_density: PowerDensity,
    /// Fraction of total power assigned to 28 kHz boards, in `[0, 1]`.
    pub ratio_28: f64,
}

/// Board counts already on hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRequest {
    pub boards_28: u32,
    pub boards_40: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SizingMode {
    New(DesignRequest),
    Existing(CheckRequest),
}

/// Outcome of either sizing mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizingResult {
    pub board_count_28: u32,
    pub board_count_40: u32,
    pub head_count_28: u32,
    pub head_count_40: u32,
    pub total_power_w: f64,
    pub actual_density: PowerDensity,
    pub target_density: PowerDensity,
    pub passed: bool,
}

impl SizingResult {
    pub fn boards(&self, class: FrequencyClass) -> u32 {
        match class {
            FrequencyClass::K28 => self.board_count_28,
            FrequencyClass::K40 => self.board_count_40,
        }
    }

    pub fn heads(&self, class: FrequencyClass) -> u32 {
        match class {
            FrequencyClass::K28 => self.head_count_28,
            FrequencyClass::K40 => self.head_count_40,
        }
    }

    pub fn total_heads(&self) -> u32 {
        self.head_count_28.saturating_add(self.head_count_40)
    }

    /// Actual minus target density (W/L); negative when under target.
    pub fn density_delta(&self) -> f64 {
        self.actual_density - self.target_density
    }

    /// W/L missing to reach the full target, zero when at or above it.
    pub fn shortfall(&self) -> f64 {
        (self.target_density - self.actual_density).max(0.0)
    }
}

/// Size a new system for `target_density`.
///
/// Each frequency share is rounded up to whole boards. A positive share
/// always gets at least one board, for both classes.
pub fn size_for_target(
    volume_liters: f64,
    target_density: PowerDensity,
    ratio_28: f64,
    spec_28: &BoardSpec,
    spec_40: &BoardSpec,
) -> SizingResult {
    let total_required = volume_liters * target_density;
    let power_28 = total_required * ratio_28;
    let power_40 = total_required * (1.0 - ratio_28);

    let boards_28 = units_to_cover(power_28, spec_28.watts_per_board());
    let boards_40 = units_to_cover(power_40, spec_40.watts_per_board());

    tally(volume_liters, boards_28, boards_40, spec_28, spec_40, target_density)
}

/// Evaluate existing boards against the recommended density.
pub fn size_for_existing(
    volume_liters: f64,
    boards_28: u32,
    boards_40: u32,
    spec_28: &BoardSpec,
    spec_40: &BoardSpec,
    recommended_density: PowerDensity,
) -> SizingResult {
    tally(
        volume_liters,
        boards_28,
        boards_40,
        spec_28,
        spec_40,
        recommended_density,
    )
}

/// Dispatch on the sizing mode.
pub fn size(
    volume_liters: f64,
    mode: &SizingMode,
    boards: &BoardPair,
    recommended_density: PowerDensity,
) -> SizingResult {
    match mode {
        SizingMode::New(req) => size_for_target(
            volume_liters,
            req.target_density,
            req.ratio_28,
            &boards.k28,
            &boards.k40,
        ),
        SizingMode::Existing(req) => size_for_existing(
            volume_liters,
            req.boards_28,
            req.boards_40,
            &boards.k28,
            &boards.k40,
            recommended_density,
        ),
    }
}

fn tally(
    volume_liters: f64,
    boards_28: u32,
    boards_40: u32,
    spec_28: &BoardSpec,
    spec_40: &BoardSpec,
    target_density: PowerDensity,
) -> SizingResult {
    let total_power = spec_28.power * boards_28 as f64 + spec_40.power * boards_40 as f64;
    let actual_density = density(total_power, liters(volume_liters));

    SizingResult {
        board_count_28: boards_28,
        board_count_40: boards_40,
        head_count_28: boards_28.saturating_mul(spec_28.heads),
        head_count_40: boards_40.saturating_mul(spec_40.heads),
        total_power_w: in_watts(total_power),
        actual_density,
        target_density,
        passed: actual_density >= target_density * PASS_FRACTION,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specs() -> (BoardSpec, BoardSpec) {
        (BoardSpec::new(120.0, 2), BoardSpec::new(120.0, 3))
    }

    #[test]
    fn design_new_reference_tank() {
        let (s28, s40) = specs();
        let r = size_for_target(136.0, 8.0, 0.7, &s28, &s40);

        // 1088 W split 761.6 / 326.4
        assert_eq!(r.board_count_28, 7);
        assert_eq!(r.board_count_40, 3);
        assert_eq!(r.head_count_28, 14);
        assert_eq!(r.head_count_40, 9);
        assert!((r.total_power_w - 1200.0).abs() < 1e-9);
        assert!((r.actual_density - 1200.0 / 136.0).abs() < 1e-9);
        assert!(r.passed);
        assert_eq!(r.target_density, 8.0);
    }

    #[test]
    fn all_power_to_one_class() {
        let (s28, s40) = specs();
        let only_28 = size_for_target(50.0, 10.0, 1.0, &s28, &s40);
        assert_eq!(only_28.board_count_28, 5);
        assert_eq!(only_28.board_count_40, 0);

        let only_40 = size_for_target(50.0, 10.0, 0.0, &s28, &s40);
        assert_eq!(only_40.board_count_28, 0);
        assert_eq!(only_40.board_count_40, 5);
    }

    #[test]
    fn tiny_share_still_gets_one_board() {
        let (s28, s40) = specs();
        let r = size_for_target(1.0, 1.0, 0.01, &s28, &s40);
        assert_eq!(r.board_count_28, 1);
        assert_eq!(r.board_count_40, 1);
    }

    #[test]
    fn zero_volume_has_zero_density() {
        let (s28, s40) = specs();
        let r = size_for_existing(0.0, 2, 2, &s28, &s40, 10.0);
        assert_eq!(r.actual_density, 0.0);
        assert!((r.total_power_w - 480.0).abs() < 1e-9);
        assert!(!r.passed);
    }

    #[test]
    fn check_existing_uses_recommendation_as_target() {
        let (s28, s40) = specs();
        // default existing hardware: 3 x 28k + 1 x 40k = 480 W over 136 L
        let r = size_for_existing(136.0, 3, 1, &s28, &s40, 8.0);
        assert_eq!(r.target_density, 8.0);
        assert_eq!(r.head_count_28, 6);
        assert_eq!(r.head_count_40, 3);
        assert!((r.actual_density - 480.0 / 136.0).abs() < 1e-9);
        assert!(!r.passed);
        assert!((r.shortfall() - (8.0 - 480.0 / 136.0)).abs() < 1e-9);
        assert!(r.density_delta() < 0.0);
    }

    #[test]
    fn huge_board_counts_saturate_head_totals() {
        let spec = BoardSpec::new(120.0, 3);
        let r = size_for_existing(100.0, 2_000_000_000, 2_000_000_000, &spec, &spec, 8.0);
        assert_eq!(r.head_count_28, u32::MAX);
        assert_eq!(r.head_count_40, u32::MAX);
        assert_eq!(r.total_heads(), u32::MAX);
        assert!(r.passed);
    }

    #[test]
    fn pass_threshold_is_ninety_five_percent() {
        // 10 boards over 10 L against 100 W/L, so the threshold is 95 W/L
        let strong = BoardSpec::new(96.0, 1);
        assert!(size_for_existing(10.0, 10, 0, &strong, &strong, 100.0).passed);
        let weak = BoardSpec::new(94.0, 1);
        assert!(!size_for_existing(10.0, 10, 0, &weak, &weak, 100.0).passed);
    }

    #[test]
    fn mode_dispatch_matches_direct_calls() {
        let (s28, s40) = specs();
        let pair = BoardPair { k28: s28, k40: s40 };
        let new = SizingMode::New(DesignRequest {
            target_density: 8.0,
            ratio_28: 0.7,
        });
        assert_eq!(
            size(136.0, &new, &pair, 3.0),
            size_for_target(136.0, 8.0, 0.7, &s28, &s40)
        );

        let existing = SizingMode::Existing(CheckRequest {
            boards_28: 3,
            boards_40: 1,
        });
        assert_eq!(
            size(136.0, &existing, &pair, 8.0),
            size_for_existing(136.0, 3, 1, &s28, &s40, 8.0)
        );
    }

    #[test]
    fn shortfall_is_zero_when_passing() {
        let (s28, s40) = specs();
        let r = size_for_target(136.0, 8.0, 0.7, &s28, &s40);
        assert_eq!(r.shortfall(), 0.0);
        assert!(r.density_delta() > 0.0);
    }
}
