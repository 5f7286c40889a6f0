//! Saturation vapor pressure of water.
//!
//! ASHRAE Hyland–Wexler formulation, evaluated over ice from 173.15 K to the
//! freezing point and over liquid water from the freezing point to 473.15 K.
//! Outside that span the curve is undefined and lookups fail with
//! [`PropertyError::OutOfDomain`].

use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

use crate::support::thermo::PropertyError;

pub(crate) const MIN_TEMPERATURE_K: f64 = 173.15;
pub(crate) const MAX_TEMPERATURE_K: f64 = 473.15;

const FREEZING_POINT_K: f64 = 273.15;

/// Returns the saturation vapor pressure of water at `temperature`.
///
/// # Errors
///
/// Returns [`PropertyError::OutOfDomain`] if the temperature is outside the
/// formulation's valid range.
pub(crate) fn water_saturation_pressure(
    temperature: ThermodynamicTemperature,
) -> Result<Pressure, PropertyError> {
    let t = temperature.get::<kelvin>();

    if !(MIN_TEMPERATURE_K..=MAX_TEMPERATURE_K).contains(&t) {
        return Err(PropertyError::OutOfDomain {
            context: format!(
                "water saturation pressure is undefined at {t:.2} K \
                 (valid from {MIN_TEMPERATURE_K} K to {MAX_TEMPERATURE_K} K)"
            ),
        });
    }

    let ln_p = if t < FREEZING_POINT_K {
        // Over ice.
        -5.674_535_9e3 / t + 6.392_524_7 - 9.677_843e-3 * t + 6.221_570_1e-7 * t * t
            + 2.074_782_5e-9 * t.powi(3)
            - 9.484_024e-13 * t.powi(4)
            + 4.163_501_9 * t.ln()
    } else {
        // Over liquid water.
        -5.800_220_6e3 / t + 1.391_499_3 - 4.864_023_9e-2 * t + 4.176_476_8e-5 * t * t
            - 1.445_209_3e-8 * t.powi(3)
            + 6.545_967_3 * t.ln()
    };

    Ok(Pressure::new::<pascal>(ln_p.exp()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn p_sat(t_kelvin: f64) -> f64 {
        water_saturation_pressure(ThermodynamicTemperature::new::<kelvin>(t_kelvin))
            .unwrap()
            .get::<pascal>()
    }

    #[test]
    fn matches_reference_points() {
        // Triple point, atmospheric boiling point, and a cold-rink air state.
        assert_relative_eq!(p_sat(273.16), 611.7, max_relative = 0.01);
        assert_relative_eq!(p_sat(373.15), 101_325.0, max_relative = 0.005);
        assert_relative_eq!(p_sat(263.15), 259.9, max_relative = 0.01);
    }

    #[test]
    fn strictly_increasing_in_temperature() {
        let mut previous = p_sat(MIN_TEMPERATURE_K);
        let mut t = MIN_TEMPERATURE_K + 1.0;
        while t <= MAX_TEMPERATURE_K {
            let current = p_sat(t);
            assert!(
                current > previous,
                "saturation pressure not increasing at {t} K"
            );
            previous = current;
            t += 1.0;
        }
    }

    #[test]
    fn rejects_temperatures_outside_the_curve() {
        for t_kelvin in [100.0, MIN_TEMPERATURE_K - 0.01, MAX_TEMPERATURE_K + 0.01, 600.0] {
            let result =
                water_saturation_pressure(ThermodynamicTemperature::new::<kelvin>(t_kelvin));
            assert!(matches!(result, Err(PropertyError::OutOfDomain { .. })));
        }
    }
}
