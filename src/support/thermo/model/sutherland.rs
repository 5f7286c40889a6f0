//! Sutherland-law transport property model.
//!
//! `Sutherland` evaluates the transport properties a forced-convection
//! correlation needs — density, thermal conductivity, kinematic viscosity,
//! and Prandtl number — at a film state:
//!
//! - Dynamic viscosity: `μ = μ₀·(T/T₀)^{3/2}·(T₀ + S_μ)/(T + S_μ)`
//! - Thermal conductivity: `k = k₀·(T/T₀)^{3/2}·(T₀ + S_k)/(T + S_k)`
//! - Density: ideal gas, `ρ = p/(R·T)`
//! - Kinematic viscosity: `ν = μ/ρ`
//! - Prandtl number: `Pr = μ·cp/k`
//!
//! Viscosity and conductivity depend on temperature only; the pressure
//! dependence enters through the ideal-gas density, which is what makes the
//! model correct at sub-atmospheric site pressures.
//!
//! Constants are supplied per fluid via [`SutherlandFluid`] and the model
//! refuses temperatures outside the correlation's fitted range.

use std::marker::PhantomData;

use thiserror::Error;
use uom::{
    ConstZero,
    si::{
        f64::{
            DynamicViscosity, MassDensity, Pressure, Ratio, SpecificHeatCapacity,
            TemperatureInterval, ThermalConductivity, ThermodynamicTemperature,
        },
        pressure::pascal,
        ratio::ratio,
        specific_heat_capacity::joule_per_kilogram_kelvin,
        temperature_interval::kelvin as delta_kelvin,
        thermodynamic_temperature::kelvin,
    },
};

use crate::support::constraint::{Constraint, StrictlyPositive};
use crate::support::thermo::{
    PropertyError, State,
    capability::{
        HasDensity, HasKinematicViscosity, HasPrandtl, HasThermalConductivity, ThermoModel,
    },
};
use crate::support::units::{KinematicViscosity, SpecificGasConstant};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SutherlandParametersError {
    #[error("invalid gas constant R: {gas_constant:?}")]
    GasConstant { gas_constant: SpecificGasConstant },
    #[error("invalid cp: {cp:?}")]
    Cp { cp: SpecificHeatCapacity },
    #[error("invalid reference viscosity: {viscosity:?}")]
    ReferenceViscosity { viscosity: DynamicViscosity },
    #[error("invalid reference conductivity: {conductivity:?}")]
    ReferenceConductivity { conductivity: ThermalConductivity },
    #[error("invalid reference temperature: {t_ref:?}")]
    ReferenceTemperature { t_ref: ThermodynamicTemperature },
    #[error("invalid temperature range: {min:?} to {max:?}")]
    TemperatureRange {
        min: ThermodynamicTemperature,
        max: ThermodynamicTemperature,
    },
}

/// Constant parameters for the [`Sutherland`] model.
///
/// These values are typically provided by a fluid's [`SutherlandFluid`]
/// implementation. [`SutherlandParameters::new`] fills in the reference
/// temperature (273.15 K), the Sutherland constants for an air-like gas
/// (110.4 K for viscosity, 194 K for conductivity), and a 200–1000 K fitted
/// range; override the fields directly for other gases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SutherlandParameters {
    pub gas_constant: SpecificGasConstant,
    pub cp: SpecificHeatCapacity,
    pub reference_viscosity: DynamicViscosity,
    pub reference_conductivity: ThermalConductivity,
    pub reference_temperature: ThermodynamicTemperature,
    pub viscosity_constant: TemperatureInterval,
    pub conductivity_constant: TemperatureInterval,
    pub min_temperature: ThermodynamicTemperature,
    pub max_temperature: ThermodynamicTemperature,
}

impl SutherlandParameters {
    #[must_use]
    pub fn new(
        gas_constant: SpecificGasConstant,
        cp: SpecificHeatCapacity,
        reference_viscosity: DynamicViscosity,
        reference_conductivity: ThermalConductivity,
    ) -> Self {
        Self {
            gas_constant,
            cp,
            reference_viscosity,
            reference_conductivity,
            reference_temperature: ThermodynamicTemperature::new::<kelvin>(273.15),
            viscosity_constant: TemperatureInterval::new::<delta_kelvin>(110.4),
            conductivity_constant: TemperatureInterval::new::<delta_kelvin>(194.0),
            min_temperature: ThermodynamicTemperature::new::<kelvin>(200.0),
            max_temperature: ThermodynamicTemperature::new::<kelvin>(1000.0),
        }
    }
}

/// Fluid constants required by the [`Sutherland`] model.
pub trait SutherlandFluid {
    /// Returns the constant parameters for use with [`Sutherland`].
    fn parameters() -> SutherlandParameters;
}

/// Transport property model using Sutherland's law.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sutherland<Fluid> {
    gas_constant: SpecificGasConstant,
    cp: SpecificHeatCapacity,
    mu_ref: DynamicViscosity,
    k_ref: ThermalConductivity,
    t_ref: ThermodynamicTemperature,
    s_mu: TemperatureInterval,
    s_k: TemperatureInterval,
    t_min: ThermodynamicTemperature,
    t_max: ThermodynamicTemperature,
    _marker: PhantomData<Fluid>,
}

impl<Fluid> ThermoModel for Sutherland<Fluid> {
    type Fluid = Fluid;
}

impl<Fluid: SutherlandFluid> Sutherland<Fluid> {
    /// Creates a transport model using constants defined by `Fluid`.
    ///
    /// # Errors
    ///
    /// Returns [`SutherlandParametersError`] if any required constant is
    /// invalid or the fitted temperature range is empty.
    pub fn new() -> Result<Self, SutherlandParametersError> {
        let parameters = Fluid::parameters();

        let gas_constant = parameters.gas_constant;
        if StrictlyPositive::check(&gas_constant.get::<joule_per_kilogram_kelvin>()).is_err() {
            return Err(SutherlandParametersError::GasConstant { gas_constant });
        }

        let cp = parameters.cp;
        if StrictlyPositive::check(&cp.get::<joule_per_kilogram_kelvin>()).is_err() {
            return Err(SutherlandParametersError::Cp { cp });
        }

        let mu_ref = parameters.reference_viscosity;
        if StrictlyPositive::check(&mu_ref.value).is_err() {
            return Err(SutherlandParametersError::ReferenceViscosity { viscosity: mu_ref });
        }

        let k_ref = parameters.reference_conductivity;
        if StrictlyPositive::check(&k_ref.value).is_err() {
            return Err(SutherlandParametersError::ReferenceConductivity { conductivity: k_ref });
        }

        let t_ref = parameters.reference_temperature;
        if StrictlyPositive::check(&t_ref.get::<kelvin>()).is_err() {
            return Err(SutherlandParametersError::ReferenceTemperature { t_ref });
        }

        let (t_min, t_max) = (parameters.min_temperature, parameters.max_temperature);
        if StrictlyPositive::check(&t_min.get::<kelvin>()).is_err() || t_min >= t_max {
            return Err(SutherlandParametersError::TemperatureRange {
                min: t_min,
                max: t_max,
            });
        }

        Ok(Self {
            gas_constant,
            cp,
            mu_ref,
            k_ref,
            t_ref,
            s_mu: parameters.viscosity_constant,
            s_k: parameters.conductivity_constant,
            t_min,
            t_max,
            _marker: PhantomData,
        })
    }

    fn check_temperature(&self, temperature: ThermodynamicTemperature) -> Result<(), PropertyError> {
        if temperature < self.t_min || temperature > self.t_max {
            return Err(PropertyError::OutOfDomain {
                context: format!(
                    "temperature {:.2} K is outside the correlation range {:.2}–{:.2} K",
                    temperature.get::<kelvin>(),
                    self.t_min.get::<kelvin>(),
                    self.t_max.get::<kelvin>(),
                ),
            });
        }
        Ok(())
    }

    fn dynamic_viscosity(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<DynamicViscosity, PropertyError> {
        self.check_temperature(temperature)?;

        let scale = (temperature / self.t_ref).get::<ratio>().powf(1.5)
            * ((self.t_ref + self.s_mu) / (temperature + self.s_mu)).get::<ratio>();

        Ok(self.mu_ref * scale)
    }
}

impl<Fluid: SutherlandFluid> HasDensity for Sutherland<Fluid> {
    /// Computes density with `ρ = p/(R·T)`.
    fn density(&self, state: &State<Fluid>) -> Result<MassDensity, PropertyError> {
        self.check_temperature(state.temperature)?;

        if state.pressure <= Pressure::ZERO {
            return Err(PropertyError::InvalidState {
                context: format!(
                    "density requires a positive pressure, got {:.3} Pa",
                    state.pressure.get::<pascal>()
                ),
            });
        }

        Ok(state.pressure / (self.gas_constant * state.temperature))
    }
}

impl<Fluid: SutherlandFluid> HasThermalConductivity for Sutherland<Fluid> {
    fn thermal_conductivity(
        &self,
        state: &State<Fluid>,
    ) -> Result<ThermalConductivity, PropertyError> {
        self.check_temperature(state.temperature)?;

        let t = state.temperature;
        let scale = (t / self.t_ref).get::<ratio>().powf(1.5)
            * ((self.t_ref + self.s_k) / (t + self.s_k)).get::<ratio>();

        Ok(self.k_ref * scale)
    }
}

impl<Fluid: SutherlandFluid> HasKinematicViscosity for Sutherland<Fluid> {
    /// Computes kinematic viscosity with `ν = μ/ρ`.
    fn kinematic_viscosity(
        &self,
        state: &State<Fluid>,
    ) -> Result<KinematicViscosity, PropertyError> {
        let mu = self.dynamic_viscosity(state.temperature)?;
        let rho = self.density(state)?;

        Ok(mu / rho)
    }
}

impl<Fluid: SutherlandFluid> HasPrandtl for Sutherland<Fluid> {
    /// Computes the Prandtl number with `Pr = μ·cp/k`.
    fn prandtl(&self, state: &State<Fluid>) -> Result<Ratio, PropertyError> {
        let mu = self.dynamic_viscosity(state.temperature)?;
        let k = self.thermal_conductivity(state)?;

        Ok(mu * self.cp / k)
    }
}
