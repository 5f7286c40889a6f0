use uom::si::f64::{Pressure, ThermodynamicTemperature};

/// The thermodynamic state of a fluid.
///
/// A `State<Fluid>` captures the temperature and pressure of a specific
/// fluid. The ideal-gas and transport property models in this crate are all
/// temperature/pressure indexed, so `(T, p)` fully determines every property
/// they expose.
///
/// The `Fluid` type parameter is a marker type such as
/// [`Air`](crate::support::thermo::fluid::Air) or
/// [`Water`](crate::support::thermo::fluid::Water).
///
/// # Example
///
/// ```
/// use rink_models::support::thermo::{State, fluid::Air};
/// use uom::si::{
///     f64::{Pressure, ThermodynamicTemperature},
///     pressure::kilopascal,
///     thermodynamic_temperature::degree_celsius,
/// };
///
/// // Arena supply air at altitude.
/// let state = State {
///     temperature: ThermodynamicTemperature::new::<degree_celsius>(17.2),
///     pressure: Pressure::new::<kilopascal>(84.0),
///     fluid: Air,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State<Fluid> {
    pub temperature: ThermodynamicTemperature,
    pub pressure: Pressure,
    pub fluid: Fluid,
}

impl<Fluid> State<Fluid> {
    /// Creates a new state with the given temperature, pressure, and fluid.
    #[must_use]
    pub fn new(temperature: ThermodynamicTemperature, pressure: Pressure, fluid: Fluid) -> Self {
        Self {
            temperature,
            pressure,
            fluid,
        }
    }

    /// Returns a new state with the given temperature, keeping other fields unchanged.
    #[must_use]
    pub fn with_temperature(self, temperature: ThermodynamicTemperature) -> Self {
        Self {
            temperature,
            ..self
        }
    }

    /// Returns a new state with the given pressure, keeping other fields unchanged.
    #[must_use]
    pub fn with_pressure(self, pressure: Pressure) -> Self {
        Self { pressure, ..self }
    }
}
