// sf-core/src/units.rs

use uom::si::f64::{Length as UomLength, Power as UomPower, Volume as UomVolume};

// Public canonical unit types (SI, f64)
pub type Length = UomLength;
pub type Power = UomPower;
pub type Volume = UomVolume;

/// Power per liter of water (W/L). uom has no named quantity for this.
pub type PowerDensity = f64;

#[inline]
pub fn cm(v: f64) -> Length {
    use uom::si::length::centimeter;
    Length::new::<centimeter>(v)
}

#[inline]
pub fn liters(v: f64) -> Volume {
    use uom::si::volume::liter;
    Volume::new::<liter>(v)
}

#[inline]
pub fn watts(v: f64) -> Power {
    use uom::si::power::watt;
    Power::new::<watt>(v)
}

#[inline]
pub fn in_cm(v: Length) -> f64 {
    v.get::<uom::si::length::centimeter>()
}

#[inline]
pub fn in_liters(v: Volume) -> f64 {
    v.get::<uom::si::volume::liter>()
}

#[inline]
pub fn in_watts(v: Power) -> f64 {
    v.get::<uom::si::power::watt>()
}

/// W/L for a power spread over a volume. Zero volume gives zero density.
#[inline]
pub fn density(power: Power, volume: Volume) -> PowerDensity {
    crate::numeric::ratio_or_zero(in_watts(power), in_liters(volume))
}
