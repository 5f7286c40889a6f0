//! Capability bounds for the property models the balance consumes.

use crate::support::thermo::{
    capability::{
        HasKinematicViscosity, HasMolarEnthalpy, HasMolarMass, HasPrandtl, HasSaturationPressure,
        HasSpecificVolume, HasThermalConductivity, ThermoModel,
    },
    fluid::{Air, Water},
};

/// Required capabilities of the water property model.
pub trait VaporModel:
    ThermoModel<Fluid = Water>
    + HasSaturationPressure
    + HasMolarMass
    + HasMolarEnthalpy
    + HasSpecificVolume
{
}

impl<T> VaporModel for T where
    T: ThermoModel<Fluid = Water>
        + HasSaturationPressure
        + HasMolarMass
        + HasMolarEnthalpy
        + HasSpecificVolume
{
}

/// Required capabilities of the dry-air property model.
pub trait DryAirModel:
    ThermoModel<Fluid = Air> + HasMolarMass + HasMolarEnthalpy + HasSpecificVolume
{
}

impl<T> DryAirModel for T where
    T: ThermoModel<Fluid = Air> + HasMolarMass + HasMolarEnthalpy + HasSpecificVolume
{
}

/// Required capabilities of the boundary-layer transport model.
pub trait TransportModel:
    ThermoModel<Fluid = Air> + HasThermalConductivity + HasKinematicViscosity + HasPrandtl
{
}

impl<T> TransportModel for T where
    T: ThermoModel<Fluid = Air> + HasThermalConductivity + HasKinematicViscosity + HasPrandtl
{
}
