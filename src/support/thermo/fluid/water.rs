use uom::si::{
    f64::{MolarMass, ThermodynamicTemperature},
    molar_energy::joule_per_mole,
    molar_mass::kilogram_per_mole,
    thermodynamic_temperature::kelvin,
};

use crate::support::thermo::model::ideal_gas::{
    IdealGasFluid, IdealGasParameters, IdealGasReference,
};
use crate::support::units::{MolarEnthalpy, joule_per_mole_kelvin};

/// Canonical identifier for water (vapor phase in the ideal-gas model).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Water;

impl IdealGasFluid for Water {
    fn parameters() -> IdealGasParameters {
        // The reference enthalpy is the enthalpy of formation of water vapor
        // at 298.15 K, matching the convention of ideal-gas property tables.
        IdealGasParameters::new(
            MolarMass::new::<kilogram_per_mole>(0.018_015_28),
            joule_per_mole_kelvin(33.6),
        )
        .with_reference(IdealGasReference {
            temperature: ThermodynamicTemperature::new::<kelvin>(298.15),
            enthalpy: MolarEnthalpy::new::<joule_per_mole>(-241_826.0),
        })
    }
}
