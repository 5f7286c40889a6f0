//! Capability traits used to query thermophysical properties.
//!
//! Each trait exposes a single property, so a consumer can bound a provider
//! by exactly the capabilities it needs. The psychrometric functions, for
//! instance, require only `HasSaturationPressure` of the water model, while
//! the convection chain requires the transport set.

mod properties;

pub use properties::{
    HasDensity, HasKinematicViscosity, HasMolarEnthalpy, HasMolarMass, HasPrandtl,
    HasSaturationPressure, HasSpecificVolume, HasThermalConductivity,
};

/// Base trait tying a property model to the fluid it describes.
pub trait ThermoModel {
    type Fluid;
}
