use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{DynamicViscosity, MolarMass, SpecificHeatCapacity, ThermalConductivity},
    molar_mass::kilogram_per_mole,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::support::thermo::model::ideal_gas::{IdealGasFluid, IdealGasParameters};
use crate::support::thermo::model::sutherland::{SutherlandFluid, SutherlandParameters};
use crate::support::units::{SpecificGasConstant, joule_per_mole_kelvin};

/// Canonical identifier for dry air.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Air;

impl IdealGasFluid for Air {
    fn parameters() -> IdealGasParameters {
        IdealGasParameters::new(
            MolarMass::new::<kilogram_per_mole>(0.028_964_7),
            joule_per_mole_kelvin(29.14),
        )
    }
}

impl SutherlandFluid for Air {
    fn parameters() -> SutherlandParameters {
        SutherlandParameters::new(
            SpecificGasConstant::new::<joule_per_kilogram_kelvin>(287.053),
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1006.0),
            DynamicViscosity::new::<pascal_second>(1.716e-5),
            ThermalConductivity::new::<watt_per_meter_kelvin>(0.0241),
        )
    }
}
