//! Tank geometry and usage conditions.

use sf_core::units::{Length, Volume, cm, in_cm, in_liters};

/// Rectangular tank, all dimensions stored as lengths.
///
/// `water_level <= height` is expected but not checked here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TankGeometry {
    pub length: Length,
    pub width: Length,
    pub height: Length,
    pub water_level: Length,
}

impl TankGeometry {
    pub fn new(length: Length, width: Length, height: Length, water_level: Length) -> Self {
        Self {
            length,
            width,
            height,
            water_level,
        }
    }

    /// Build from centimeter values, the unit tank drawings are dimensioned in.
    pub fn from_cm(length: f64, width: f64, height: f64, water_level: f64) -> Self {
        Self::new(cm(length), cm(width), cm(height), cm(water_level))
    }

    /// Volume of water actually in the tank (up to the water level).
    pub fn water_volume(&self) -> Volume {
        self.length * self.width * self.water_level
    }

    pub fn volume_liters(&self) -> f64 {
        in_liters(self.water_volume())
    }

    pub fn length_cm(&self) -> f64 {
        in_cm(self.length)
    }

    pub fn width_cm(&self) -> f64 {
        in_cm(self.width)
    }

    pub fn height_cm(&self) -> f64 {
        in_cm(self.height)
    }

    pub fn water_level_cm(&self) -> f64 {
        in_cm(self.water_level)
    }
}

/// Process conditions that scale the recommended power density.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UsageConditions {
    /// Chemistry or acid in the bath lowers the required power.
    pub chemistry: bool,
    /// Dense parts absorb sound, so more power is required.
    pub heavy_load: bool,
}
