//! Staggered grid placement.
//!
//! Heads are laid on a near-square grid biased toward the surface aspect
//! ratio, with a half-spacing margin on every edge. Odd rows shift right by
//! half a column (brick pattern), an optional half-offset desynchronizes two
//! paired panels, and anything pushed past the right margin wraps back to the
//! left edge.

use serde::{Deserialize, Serialize};
use sf_core::numeric::ensure_positive;
use sf_sizing::FrequencyClass;

/// Relative slack on the wrap test. A marker landing exactly on the right
/// margin stays there regardless of rounding.
const WRAP_TOLERANCE: f64 = 1e-9;

/// One head placed on a surface, in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacedHead {
    pub frequency: FrequencyClass,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlacementOptions {
    /// Shift every row by an extra half column.
    pub half_offset: bool,
}

impl PlacementOptions {
    pub fn with_half_offset(mut self, half_offset: bool) -> Self {
        self.half_offset = half_offset;
        self
    }
}

/// Grid dimensions and spacing for a head count on a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridShape {
    pub cols: usize,
    pub rows: usize,
    pub spacing_x: f64,
    pub spacing_y: f64,
}

impl GridShape {
    /// Grid for `n` heads, or `None` when nothing can be placed.
    pub fn for_count(n: usize, width: f64, height: f64) -> Option<Self> {
        if n == 0 {
            return None;
        }
        let width = ensure_positive(width, "surface width").ok()?;
        let height = ensure_positive(height, "surface height").ok()?;

        let estimate = (n as f64 * width / height).sqrt().ceil();
        if !estimate.is_finite() {
            return None;
        }
        // saturates for absurd aspect ratios; spacing stays in floating point
        let cols = (estimate as usize).max(1);
        let rows = n.div_ceil(cols);

        Some(Self {
            cols,
            rows,
            spacing_x: width / (cols as f64 + 1.0),
            spacing_y: height / (rows as f64 + 1.0),
        })
    }
}

/// Place `heads` on a `width` x `height` surface.
///
/// Output follows row-major grid order and has one entry per head.
pub fn place_heads(
    width: f64,
    height: f64,
    heads: &[FrequencyClass],
    options: PlacementOptions,
) -> Vec<PlacedHead> {
    let n = heads.len();
    let Some(grid) = GridShape::for_count(n, width, height) else {
        return Vec::new();
    };

    let half_x = grid.spacing_x / 2.0;
    let offset = if options.half_offset { half_x } else { 0.0 };
    let right_limit = width - half_x + WRAP_TOLERANCE * width;

    let mut placed = Vec::with_capacity(n);
    for r in 0..grid.rows {
        let stagger = if r % 2 != 0 { half_x } else { 0.0 };
        let y = (r + 1) as f64 * grid.spacing_y;

        for c in 0..grid.cols {
            let idx = r * grid.cols + c;
            if idx >= n {
                break;
            }

            let mut x = (c + 1) as f64 * grid.spacing_x + stagger + offset;
            if x > right_limit {
                x = x - width + half_x;
            }

            placed.push(PlacedHead {
                frequency: heads[idx],
                x,
                y,
            });
        }
    }
    placed
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn head_strategy() -> impl Strategy<Value = Vec<FrequencyClass>> {
        prop::collection::vec(
            prop_oneof![Just(FrequencyClass::K28), Just(FrequencyClass::K40)],
            0..120,
        )
    }

    proptest! {
        #[test]
        fn markers_stay_inside_surface(
            width in 1.0_f64..500.0,
            height in 1.0_f64..500.0,
            heads in head_strategy(),
            half_offset: bool,
        ) {
            let placed = place_heads(width, height, &heads, PlacementOptions { half_offset });
            prop_assert_eq!(placed.len(), heads.len());
            for p in &placed {
                prop_assert!(p.x >= 0.0 && p.x <= width, "x={} width={}", p.x, width);
                prop_assert!(p.y >= 0.0 && p.y <= height, "y={} height={}", p.y, height);
            }
        }

        #[test]
        fn markers_never_coincide(
            width in 1.0_f64..500.0,
            height in 1.0_f64..500.0,
            heads in head_strategy(),
            half_offset: bool,
        ) {
            let placed = place_heads(width, height, &heads, PlacementOptions { half_offset });
            for (i, a) in placed.iter().enumerate() {
                for b in &placed[i + 1..] {
                    prop_assert!(a.x != b.x || a.y != b.y);
                }
            }
        }
    }
}
