use uom::si::f64::{
    MassDensity, MolarMass, Pressure, Ratio, SpecificVolume, ThermalConductivity,
    ThermodynamicTemperature,
};

use crate::support::thermo::{PropertyError, State};
use crate::support::units::{KinematicViscosity, MolarEnthalpy};

use super::ThermoModel;

pub trait HasMolarMass: ThermoModel {
    /// Returns the molar mass of the fluid.
    #[must_use]
    fn molar_mass(&self) -> MolarMass;
}

pub trait HasMolarEnthalpy: ThermoModel {
    /// Returns the molar enthalpy for the given state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the enthalpy cannot be calculated.
    fn molar_enthalpy(&self, state: &State<Self::Fluid>) -> Result<MolarEnthalpy, PropertyError>;
}

pub trait HasSpecificVolume: ThermoModel {
    /// Returns the specific volume for the given state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the specific volume cannot be calculated.
    fn specific_volume(&self, state: &State<Self::Fluid>) -> Result<SpecificVolume, PropertyError>;
}

pub trait HasSaturationPressure: ThermoModel {
    /// Returns the saturation vapor pressure at the given temperature.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the temperature is outside the
    /// saturation curve's valid range.
    fn saturation_pressure(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<Pressure, PropertyError>;
}

pub trait HasDensity: ThermoModel {
    /// Returns the mass density for the given state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the density cannot be calculated.
    fn density(&self, state: &State<Self::Fluid>) -> Result<MassDensity, PropertyError>;
}

pub trait HasThermalConductivity: ThermoModel {
    /// Returns the thermal conductivity for the given state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the conductivity cannot be calculated.
    fn thermal_conductivity(
        &self,
        state: &State<Self::Fluid>,
    ) -> Result<ThermalConductivity, PropertyError>;
}

pub trait HasKinematicViscosity: ThermoModel {
    /// Returns the kinematic viscosity for the given state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the viscosity cannot be calculated.
    fn kinematic_viscosity(
        &self,
        state: &State<Self::Fluid>,
    ) -> Result<KinematicViscosity, PropertyError>;
}

pub trait HasPrandtl: ThermoModel {
    /// Returns the Prandtl number for the given state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the Prandtl number cannot be calculated.
    fn prandtl(&self, state: &State<Self::Fluid>) -> Result<Ratio, PropertyError>;
}
