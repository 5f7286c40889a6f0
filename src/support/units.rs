//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (temperature, pressure,
//! mass flow, power). This module adds the quantities the psychrometric and
//! convection calculations need that [`uom`] does not name, as dimensional
//! type aliases, plus an extension trait for temperature differences.
//!
//! Aliases whose dimensions match a named [`uom`] quantity (e.g.
//! [`SpecificGasConstant`], [`MolarEnthalpy`]) can be constructed with that
//! quantity's units via `new::<…>()`. The others ([`MolarHeatCapacity`],
//! [`KinematicViscosity`], [`ConvectionCoefficient`]) are built by quantity
//! arithmetic, e.g. `viscosity / density`.
//!
//! ## Temperature differences
//!
//! [`uom`] deliberately refuses `ThermodynamicTemperature − ThermodynamicTemperature`;
//! the [`TemperatureDifference`] trait provides a
//! [`minus`](TemperatureDifference::minus) method returning a
//! `TemperatureInterval`:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::degree_celsius;
//! use rink_models::support::units::TemperatureDifference;
//!
//! let air = ThermodynamicTemperature::new::<degree_celsius>(17.2);
//! let ice = ThermodynamicTemperature::new::<degree_celsius>(-3.0);
//! let delta_t = air.minus(ice);
//! // delta_t is a TemperatureInterval, not a ThermodynamicTemperature
//! ```

mod quantities;
mod temperature_difference;

pub use quantities::{
    ConvectionCoefficient, KinematicViscosity, MolarEnthalpy, MolarHeatCapacity,
    SpecificEnthalpy, SpecificGasConstant, joule_per_mole_kelvin,
};
pub use temperature_difference::TemperatureDifference;
