//! Molar-basis ideal gas model.
//!
//! `IdealGas` evaluates species properties from the ideal gas equation of
//! state with a constant molar heat capacity:
//!
//! - Specific volume: `v = R̄·T / (M·p)`
//! - Molar enthalpy: `h̄ = h̄₀ + c̄p·(T − T₀)`
//!
//! # Assumptions
//!
//! - Ideal gas behavior (valid for dry air and for water vapor at the low
//!   partial pressures of HVAC psychrometrics).
//! - Calorically perfect: `c̄p` does not vary with temperature, so the model
//!   carries an explicit fitted temperature range and refuses states
//!   outside it.
//!
//! # Reference State
//!
//! Molar enthalpy is reported relative to a configurable reference
//! (`T₀`, `h̄₀`). Setting `h̄₀` to the species' enthalpy of formation
//! reproduces the reference convention of ideal-gas property tables, which
//! matters whenever streams with unequal mass flows are balanced against
//! each other.

use std::marker::PhantomData;

use thiserror::Error;
use uom::{
    ConstZero,
    si::{
        f64::{MolarMass, Pressure, SpecificVolume, ThermodynamicTemperature},
        molar_mass::kilogram_per_mole,
        pressure::pascal,
        thermodynamic_temperature::kelvin,
    },
};

use crate::support::constraint::{Constraint, StrictlyPositive};
use crate::support::thermo::{
    PropertyError, State,
    capability::{
        HasMolarEnthalpy, HasMolarMass, HasSaturationPressure, HasSpecificVolume, ThermoModel,
    },
    fluid::Water,
};
use crate::support::units::{
    MolarEnthalpy, MolarHeatCapacity, TemperatureDifference, joule_per_mole_kelvin,
};

use super::saturation;

/// Molar (universal) gas constant, 8.314 J/mol·K.
pub(crate) fn molar_gas_constant() -> MolarHeatCapacity {
    joule_per_mole_kelvin(8.314_462_618)
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum IdealGasParametersError {
    #[error("invalid molar mass: {molar_mass:?}")]
    MolarMass { molar_mass: MolarMass },
    #[error("invalid molar heat capacity: {molar_cp:?}")]
    MolarCp { molar_cp: MolarHeatCapacity },
    #[error("invalid reference temperature: {t_ref:?}")]
    ReferenceTemperature { t_ref: ThermodynamicTemperature },
    #[error("invalid temperature range: {min:?} to {max:?}")]
    TemperatureRange {
        min: ThermodynamicTemperature,
        max: ThermodynamicTemperature,
    },
}

/// Reference values defining the molar enthalpy offset of an [`IdealGas`] model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdealGasReference {
    pub temperature: ThermodynamicTemperature,
    pub enthalpy: MolarEnthalpy,
}

impl IdealGasReference {
    /// Returns a standard reference: 298.15 K, `h̄₀ = 0`.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            temperature: ThermodynamicTemperature::new::<kelvin>(298.15),
            enthalpy: MolarEnthalpy::ZERO,
        }
    }
}

/// Constant parameters for the [`IdealGas`] model.
///
/// These values are typically provided by a fluid's [`IdealGasFluid`]
/// implementation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdealGasParameters {
    pub molar_mass: MolarMass,
    pub molar_cp: MolarHeatCapacity,
    pub reference: IdealGasReference,
    pub min_temperature: ThermodynamicTemperature,
    pub max_temperature: ThermodynamicTemperature,
}

impl IdealGasParameters {
    /// Creates parameters with the standard reference and a 240–450 K fitted range.
    #[must_use]
    pub fn new(molar_mass: MolarMass, molar_cp: MolarHeatCapacity) -> Self {
        Self {
            molar_mass,
            molar_cp,
            reference: IdealGasReference::standard(),
            min_temperature: ThermodynamicTemperature::new::<kelvin>(240.0),
            max_temperature: ThermodynamicTemperature::new::<kelvin>(450.0),
        }
    }

    #[must_use]
    pub fn with_reference(mut self, reference: IdealGasReference) -> Self {
        self.reference = reference;
        self
    }

    #[must_use]
    pub fn with_temperature_range(
        mut self,
        min: ThermodynamicTemperature,
        max: ThermodynamicTemperature,
    ) -> Self {
        self.min_temperature = min;
        self.max_temperature = max;
        self
    }
}

/// Fluid constants required by the [`IdealGas`] model.
pub trait IdealGasFluid {
    /// Returns the constant parameters for use with [`IdealGas`].
    fn parameters() -> IdealGasParameters;
}

/// Ideal gas model with constant molar heat capacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdealGas<Fluid> {
    molar_mass: MolarMass,
    molar_cp: MolarHeatCapacity,
    t_ref: ThermodynamicTemperature,
    h_ref: MolarEnthalpy,
    t_min: ThermodynamicTemperature,
    t_max: ThermodynamicTemperature,
    _marker: PhantomData<Fluid>,
}

impl<Fluid> ThermoModel for IdealGas<Fluid> {
    type Fluid = Fluid;
}

impl<Fluid: IdealGasFluid> IdealGas<Fluid> {
    /// Creates an ideal gas model using constants defined by `Fluid`.
    ///
    /// # Errors
    ///
    /// Returns [`IdealGasParametersError`] if any required constant is
    /// invalid or the fitted temperature range is empty.
    pub fn new() -> Result<Self, IdealGasParametersError> {
        let parameters = Fluid::parameters();

        let molar_mass = parameters.molar_mass;
        if StrictlyPositive::check(&molar_mass.get::<kilogram_per_mole>()).is_err() {
            return Err(IdealGasParametersError::MolarMass { molar_mass });
        }

        let molar_cp = parameters.molar_cp;
        if StrictlyPositive::check(&molar_cp.value).is_err() {
            return Err(IdealGasParametersError::MolarCp { molar_cp });
        }

        let t_ref = parameters.reference.temperature;
        if StrictlyPositive::check(&t_ref.get::<kelvin>()).is_err() {
            return Err(IdealGasParametersError::ReferenceTemperature { t_ref });
        }

        let (t_min, t_max) = (parameters.min_temperature, parameters.max_temperature);
        if StrictlyPositive::check(&t_min.get::<kelvin>()).is_err() || t_min >= t_max {
            return Err(IdealGasParametersError::TemperatureRange {
                min: t_min,
                max: t_max,
            });
        }

        Ok(Self {
            molar_mass,
            molar_cp,
            t_ref,
            h_ref: parameters.reference.enthalpy,
            t_min,
            t_max,
            _marker: PhantomData,
        })
    }

    fn check_temperature(&self, temperature: ThermodynamicTemperature) -> Result<(), PropertyError> {
        if temperature < self.t_min || temperature > self.t_max {
            return Err(PropertyError::OutOfDomain {
                context: format!(
                    "temperature {:.2} K is outside the fitted range {:.2}–{:.2} K",
                    temperature.get::<kelvin>(),
                    self.t_min.get::<kelvin>(),
                    self.t_max.get::<kelvin>(),
                ),
            });
        }
        Ok(())
    }
}

impl<Fluid: IdealGasFluid> HasMolarMass for IdealGas<Fluid> {
    fn molar_mass(&self) -> MolarMass {
        self.molar_mass
    }
}

impl<Fluid: IdealGasFluid> HasMolarEnthalpy for IdealGas<Fluid> {
    /// Computes molar enthalpy with `h̄ = h̄₀ + c̄p·(T − T₀)`.
    fn molar_enthalpy(&self, state: &State<Fluid>) -> Result<MolarEnthalpy, PropertyError> {
        self.check_temperature(state.temperature)?;

        Ok(self.h_ref + self.molar_cp * state.temperature.minus(self.t_ref))
    }
}

impl<Fluid: IdealGasFluid> HasSpecificVolume for IdealGas<Fluid> {
    /// Computes specific volume with `v = R̄·T / (M·p)`.
    fn specific_volume(&self, state: &State<Fluid>) -> Result<SpecificVolume, PropertyError> {
        self.check_temperature(state.temperature)?;

        if state.pressure <= Pressure::ZERO {
            return Err(PropertyError::InvalidState {
                context: format!(
                    "specific volume requires a positive pressure, got {:.3} Pa",
                    state.pressure.get::<pascal>()
                ),
            });
        }

        Ok(molar_gas_constant() * state.temperature / self.molar_mass / state.pressure)
    }
}

impl HasSaturationPressure for IdealGas<Water> {
    fn saturation_pressure(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<Pressure, PropertyError> {
        saturation::water_saturation_pressure(temperature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        pressure::kilopascal, specific_volume::cubic_meter_per_kilogram,
        thermodynamic_temperature::degree_celsius,
    };

    use crate::support::thermo::fluid::Air;

    #[test]
    fn air_specific_volume_matches_ideal_gas_law() {
        let air = IdealGas::<Air>::new().unwrap();
        let state = State::new(
            ThermodynamicTemperature::new::<kelvin>(300.0),
            Pressure::new::<pascal>(101_325.0),
            Air,
        );

        // v = R̄·T/(M·p) = 8.3145·300/(0.0289647·101325)
        assert_relative_eq!(
            air.specific_volume(&state)
                .unwrap()
                .get::<cubic_meter_per_kilogram>(),
            0.8499,
            max_relative = 1e-3,
        );
    }

    #[test]
    fn enthalpy_rises_by_molar_cp_per_kelvin() {
        let air = IdealGas::<Air>::new().unwrap();
        let p = Pressure::new::<kilopascal>(84.0);

        let cold = State::new(ThermodynamicTemperature::new::<kelvin>(300.0), p, Air);
        let warm = cold.with_temperature(ThermodynamicTemperature::new::<kelvin>(310.0));

        let rise = air.molar_enthalpy(&warm).unwrap() - air.molar_enthalpy(&cold).unwrap();
        assert_relative_eq!(rise.value, 291.4, max_relative = 1e-6);
    }

    #[test]
    fn water_vapor_enthalpy_is_referenced_to_formation() {
        let water = IdealGas::<Water>::new().unwrap();
        let reference_state = State::new(
            ThermodynamicTemperature::new::<kelvin>(298.15),
            Pressure::new::<kilopascal>(2.0),
            Water,
        );

        assert_relative_eq!(
            water.molar_enthalpy(&reference_state).unwrap().value,
            -241_826.0,
        );
    }

    #[test]
    fn rejects_temperatures_outside_fitted_range() {
        let air = IdealGas::<Air>::new().unwrap();
        let frozen = State::new(
            ThermodynamicTemperature::new::<degree_celsius>(-80.0),
            Pressure::new::<kilopascal>(84.0),
            Air,
        );

        assert!(matches!(
            air.molar_enthalpy(&frozen),
            Err(PropertyError::OutOfDomain { .. })
        ));
    }

    #[test]
    fn rejects_non_positive_pressure() {
        let air = IdealGas::<Air>::new().unwrap();
        let vacuum = State::new(
            ThermodynamicTemperature::new::<kelvin>(290.0),
            Pressure::new::<pascal>(0.0),
            Air,
        );

        assert!(matches!(
            air.specific_volume(&vacuum),
            Err(PropertyError::InvalidState { .. })
        ));
    }

    #[test]
    fn saturation_curve_is_exposed_by_the_water_model() {
        let water = IdealGas::<Water>::new().unwrap();
        let p_sat = water
            .saturation_pressure(ThermodynamicTemperature::new::<kelvin>(290.35))
            .unwrap();

        // ~1.96 kPa at 17.2 °C.
        assert_relative_eq!(p_sat.get::<kilopascal>(), 1.96, max_relative = 0.01);
    }
}
