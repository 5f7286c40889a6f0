use uom::{
    si::{
        ISQ, Quantity, SI,
        amount_of_substance::mole,
        energy::joule,
        f64::{AmountOfSubstance, Energy, TemperatureInterval},
        temperature_interval::kelvin,
    },
    typenum::{N1, N2, N3, P1, P2, Z0},
};

/// Specific gas constant, J/kg·K in SI.
pub type SpecificGasConstant = Quantity<ISQ<P2, Z0, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Specific enthalpy, J/kg in SI.
pub type SpecificEnthalpy = Quantity<ISQ<P2, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Molar enthalpy, J/mol in SI.
pub type MolarEnthalpy = Quantity<ISQ<P2, P1, N2, Z0, Z0, N1, Z0>, SI<f64>, f64>;

/// Molar heat capacity, J/mol·K in SI.
pub type MolarHeatCapacity = Quantity<ISQ<P2, P1, N2, Z0, N1, N1, Z0>, SI<f64>, f64>;

/// Kinematic viscosity, m²/s in SI.
pub type KinematicViscosity = Quantity<ISQ<P2, Z0, N1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Builds a [`MolarHeatCapacity`] from a value in J/mol·K by quantity arithmetic.
#[must_use]
pub fn joule_per_mole_kelvin(value: f64) -> MolarHeatCapacity {
    Energy::new::<joule>(value)
        / (AmountOfSubstance::new::<mole>(1.0) * TemperatureInterval::new::<kelvin>(1.0))
}

/// Convective heat-transfer coefficient, W/m²·K in SI.
pub type ConvectionCoefficient = Quantity<ISQ<Z0, P1, N3, Z0, N1, Z0, Z0>, SI<f64>, f64>;
