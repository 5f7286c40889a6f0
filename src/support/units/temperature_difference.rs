use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for computing temperature differences.
///
/// Subtracting one absolute [`ThermodynamicTemperature`] from another yields
/// a [`TemperatureInterval`] (a temperature difference), a distinction
/// [`uom`] enforces by not implementing `Sub` between absolute temperatures.
/// This trait provides the [`minus`](Self::minus) method for that operation;
/// see [uom#380](https://github.com/iliekturtles/uom/issues/380) for
/// background.
///
/// [`TemperatureInterval`]: uom::si::f64::TemperatureInterval
/// [`ThermodynamicTemperature`]: uom::si::f64::ThermodynamicTemperature
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        temperature_interval::degree_celsius as delta_celsius,
        thermodynamic_temperature::degree_celsius,
    };

    #[test]
    fn signed_differences() {
        let setpoint = ThermodynamicTemperature::new::<degree_celsius>(17.2);
        let ice = ThermodynamicTemperature::new::<degree_celsius>(-3.0);

        assert_relative_eq!(setpoint.minus(ice).get::<delta_kelvin>(), 20.2);
        assert_relative_eq!(ice.minus(setpoint).get::<delta_celsius>(), -20.2);
    }

    #[test]
    fn difference_of_equal_temperatures_is_zero() {
        let t = ThermodynamicTemperature::new::<abs_kelvin>(290.35);
        assert_relative_eq!(t.minus(t).get::<delta_kelvin>(), 0.0);
    }
}
