// nodal-core/src/units.rs

//! Oilfield units.
//!
//! The well models work directly in oilfield units (psi, ft, in, BBL/D,
//! lb/ft³, cp) with the fixed conversion factors in [`constants`]. The uom
//! constructors here are only used to derive SI companion values for
//! reports, so the model arithmetic never depends on uom's own factors.

use uom::si::f64::{
    Length as UomLength, MassDensity as UomMassDensity, Pressure as UomPressure,
    Time as UomTime, Volume as UomVolume, VolumeRate as UomVolumeRate,
};

// Public canonical unit types (SI, f64)
pub type Length = UomLength;
pub type Density = UomMassDensity;
pub type Pressure = UomPressure;
pub type VolumeRate = UomVolumeRate;

#[inline]
pub fn psi(v: f64) -> Pressure {
    use uom::si::pressure::pound_force_per_square_inch;
    Pressure::new::<pound_force_per_square_inch>(v)
}

#[inline]
pub fn ft(v: f64) -> Length {
    use uom::si::length::foot;
    Length::new::<foot>(v)
}

#[inline]
pub fn inches(v: f64) -> Length {
    use uom::si::length::inch;
    Length::new::<inch>(v)
}

#[inline]
pub fn lb_per_ft3(v: f64) -> Density {
    use uom::si::mass_density::pound_per_cubic_foot;
    Density::new::<pound_per_cubic_foot>(v)
}

/// Stock-tank barrels per day, using the oilfield barrel of
/// [`constants::FT3_PER_BBL`] cubic feet.
#[inline]
pub fn bbl_per_day(v: f64) -> VolumeRate {
    use uom::si::time::second;
    use uom::si::volume::cubic_foot;
    UomVolume::new::<cubic_foot>(v * constants::FT3_PER_BBL)
        / UomTime::new::<second>(constants::SECONDS_PER_DAY)
}

#[inline]
pub fn to_kpa(p: Pressure) -> f64 {
    use uom::si::pressure::kilopascal;
    p.get::<kilopascal>()
}

#[inline]
pub fn to_m3_per_day(q: VolumeRate) -> f64 {
    use uom::si::volume_rate::cubic_meter_per_second;
    q.get::<cubic_meter_per_second>() * constants::SECONDS_PER_DAY
}

#[inline]
pub fn to_kg_per_m3(rho: Density) -> f64 {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    rho.get::<kilogram_per_cubic_meter>()
}

#[inline]
pub fn to_m(l: Length) -> f64 {
    use uom::si::length::meter;
    l.get::<meter>()
}

pub mod constants {
    /// Cubic feet per stock-tank barrel (oilfield rounding).
    pub const FT3_PER_BBL: f64 = 5.615;

    /// Seconds per day.
    pub const SECONDS_PER_DAY: f64 = 86_400.0;

    /// Square inches per square foot; converts lbf/ft² to psi.
    pub const SQ_IN_PER_SQ_FT: f64 = 144.0;

    /// Inches per foot.
    pub const IN_PER_FT: f64 = 12.0;
}
