use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{
        DynamicViscosity, MassDensity, MolarMass, Pressure, Ratio, SpecificVolume,
        ThermalConductivity, ThermodynamicTemperature,
    },
    mass_density::kilogram_per_cubic_meter,
    molar_energy::joule_per_mole,
    molar_mass::kilogram_per_mole,
    pressure::kilopascal,
    ratio::ratio,
    specific_volume::cubic_meter_per_kilogram,
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::support::thermo::{
    PropertyError, State,
    capability::{
        HasKinematicViscosity, HasMolarEnthalpy, HasMolarMass, HasPrandtl, HasSaturationPressure,
        HasSpecificVolume, HasThermalConductivity, ThermoModel,
    },
    fluid::{Air, Water},
};
use crate::support::units::{KinematicViscosity, MolarEnthalpy};

/// Constant-property water stub: the balance is exercised without any real
/// property data, so aggregation arithmetic can be checked by hand.
#[derive(Debug, Clone, Copy)]
pub(super) struct StubWater;

impl ThermoModel for StubWater {
    type Fluid = Water;
}

impl HasSaturationPressure for StubWater {
    fn saturation_pressure(
        &self,
        _temperature: ThermodynamicTemperature,
    ) -> Result<Pressure, PropertyError> {
        Ok(Pressure::new::<kilopascal>(2.0))
    }
}

impl HasMolarMass for StubWater {
    fn molar_mass(&self) -> MolarMass {
        MolarMass::new::<kilogram_per_mole>(0.02)
    }
}

impl HasMolarEnthalpy for StubWater {
    fn molar_enthalpy(&self, _state: &State<Water>) -> Result<MolarEnthalpy, PropertyError> {
        Ok(MolarEnthalpy::new::<joule_per_mole>(1000.0))
    }
}

impl HasSpecificVolume for StubWater {
    fn specific_volume(&self, _state: &State<Water>) -> Result<SpecificVolume, PropertyError> {
        Ok(SpecificVolume::new::<cubic_meter_per_kilogram>(1.6))
    }
}

/// Constant-property dry-air stub.
#[derive(Debug, Clone, Copy)]
pub(super) struct StubAir;

impl ThermoModel for StubAir {
    type Fluid = Air;
}

impl HasMolarMass for StubAir {
    fn molar_mass(&self) -> MolarMass {
        MolarMass::new::<kilogram_per_mole>(0.029)
    }
}

impl HasMolarEnthalpy for StubAir {
    fn molar_enthalpy(&self, _state: &State<Air>) -> Result<MolarEnthalpy, PropertyError> {
        Ok(MolarEnthalpy::new::<joule_per_mole>(290.0))
    }
}

impl HasSpecificVolume for StubAir {
    fn specific_volume(&self, _state: &State<Air>) -> Result<SpecificVolume, PropertyError> {
        Ok(SpecificVolume::new::<cubic_meter_per_kilogram>(1.0))
    }
}

/// Constant-property transport stub.
#[derive(Debug, Clone, Copy)]
pub(super) struct StubTransport;

impl ThermoModel for StubTransport {
    type Fluid = Air;
}

impl HasThermalConductivity for StubTransport {
    fn thermal_conductivity(&self, _state: &State<Air>) -> Result<ThermalConductivity, PropertyError> {
        Ok(ThermalConductivity::new::<watt_per_meter_kelvin>(0.025))
    }
}

impl HasKinematicViscosity for StubTransport {
    fn kinematic_viscosity(&self, _state: &State<Air>) -> Result<KinematicViscosity, PropertyError> {
        Ok(DynamicViscosity::new::<pascal_second>(1.8e-5)
            / MassDensity::new::<kilogram_per_cubic_meter>(1.2))
    }
}

impl HasPrandtl for StubTransport {
    fn prandtl(&self, _state: &State<Air>) -> Result<Ratio, PropertyError> {
        Ok(Ratio::new::<ratio>(0.7))
    }
}
