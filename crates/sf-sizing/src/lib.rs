//! sf-sizing: power-density recommendation and board sizing for ultrasonic tanks.
//!
//! Provides:
//! - Tank geometry and usage conditions
//! - The volume-bracketed W/L recommendation table
//! - Board counts for a new design or a check of existing hardware
//!
//! Everything here is a pure function of already-validated inputs. Range
//! checks live at the design-file boundary (`sf-project`).
//!
//! # Example
//!
//! ```
//! use sf_sizing::{BoardSpec, TankGeometry, UsageConditions, recommend, size_for_target};
//!
//! let tank = TankGeometry::from_cm(170.0, 80.0, 50.0, 10.0);
//! let conditions = UsageConditions { chemistry: true, heavy_load: true };
//! let target = recommend(&tank, conditions);
//!
//! let spec_28 = BoardSpec::new(120.0, 2);
//! let spec_40 = BoardSpec::new(120.0, 3);
//! let result = size_for_target(tank.volume_liters(), target, 0.7, &spec_28, &spec_40);
//! assert!(result.passed);
//! ```

pub mod board;
pub mod recommend;
pub mod sizing;
pub mod tank;

// Re-exports
pub use board::{BoardPair, BoardSpec, FrequencyClass};
pub use recommend::{
    CHEMISTRY_FACTOR, DENSITY_BRACKETS, DensityBracket, HEAVY_LOAD_FACTOR, base_density, recommend,
    recommended_density,
};
pub use sizing::{
    CheckRequest, DesignRequest, PASS_FRACTION, SizingMode, SizingResult, size, size_for_existing,
    size_for_target,
};
pub use tank::{TankGeometry, UsageConditions};
