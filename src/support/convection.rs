//! External forced convection over a flat plate.
//!
//! The correlation chain for air sweeping a large flat surface (here, the
//! ice sheet): evaluate transport properties at the film temperature, form
//! the Reynolds number, look up the average Nusselt number from the
//! mixed-flow flat-plate correlation, and recover the convection
//! coefficient `h = Nu·k/L`.
//!
//! The Nusselt correlation is the isothermal-plate form from Incropera and
//! DeWitt, *Fundamentals of Heat and Mass Transfer*: laminar
//! `Nu = 0.664·Re^½·Pr^⅓` up to the transition Reynolds number `5×10⁵`, and
//! mixed `Nu = (0.037·Re^⅘ − 871)·Pr^⅓` beyond it. Its validity envelope
//! (`0.6 ≤ Pr ≤ 60`, `Re ≤ 10⁸`) is enforced; inputs outside it fail with
//! [`CorrelationError`].

use thiserror::Error;
use uom::si::{
    f64::{Length, Ratio, ThermalConductivity, ThermodynamicTemperature, Velocity},
    ratio::ratio,
    thermodynamic_temperature::kelvin,
};

use crate::support::units::{ConvectionCoefficient, KinematicViscosity};

/// Reynolds number at which the boundary layer transitions to turbulence.
pub const TRANSITION_REYNOLDS: f64 = 5.0e5;

const MAX_REYNOLDS: f64 = 1.0e8;
const MIN_PRANDTL: f64 = 0.6;
const MAX_PRANDTL: f64 = 60.0;

/// Errors for inputs outside the flat-plate correlation's validity envelope.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CorrelationError {
    #[error("Reynolds number {reynolds:.3e} is outside the correlation range (0 to {MAX_REYNOLDS:.0e})")]
    ReynoldsOutOfRange { reynolds: f64 },

    #[error("Prandtl number {prandtl:.3} is outside the correlation range ({MIN_PRANDTL} to {MAX_PRANDTL})")]
    PrandtlOutOfRange { prandtl: f64 },
}

/// Returns the film temperature: the arithmetic mean of the surface and
/// free-stream temperatures, at which boundary-layer properties are
/// evaluated.
#[must_use]
pub fn film_temperature(
    surface: ThermodynamicTemperature,
    freestream: ThermodynamicTemperature,
) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<kelvin>(
        0.5 * (surface.get::<kelvin>() + freestream.get::<kelvin>()),
    )
}

/// Returns the Reynolds number `Re = u·L/ν`.
#[must_use]
pub fn reynolds_number(
    speed: Velocity,
    length: Length,
    kinematic_viscosity: KinematicViscosity,
) -> Ratio {
    speed * length / kinematic_viscosity
}

/// Returns the average Nusselt number for external flow over an isothermal
/// flat plate.
///
/// # Errors
///
/// Returns [`CorrelationError`] if the Reynolds or Prandtl number is outside
/// the correlation's validity envelope.
pub fn nusselt_flat_plate(reynolds: Ratio, prandtl: Ratio) -> Result<Ratio, CorrelationError> {
    let re = reynolds.get::<ratio>();
    let pr = prandtl.get::<ratio>();

    if !(0.0..=MAX_REYNOLDS).contains(&re) {
        return Err(CorrelationError::ReynoldsOutOfRange { reynolds: re });
    }
    if !(MIN_PRANDTL..=MAX_PRANDTL).contains(&pr) {
        return Err(CorrelationError::PrandtlOutOfRange { prandtl: pr });
    }

    let nu = if re < TRANSITION_REYNOLDS {
        0.664 * re.sqrt() * pr.cbrt()
    } else {
        (0.037 * re.powf(0.8) - 871.0) * pr.cbrt()
    };

    Ok(Ratio::new::<ratio>(nu))
}

/// Returns the convection coefficient `h = Nu·k/L`.
#[must_use]
pub fn convection_coefficient(
    nusselt: Ratio,
    conductivity: ThermalConductivity,
    length: Length,
) -> ConvectionCoefficient {
    nusselt * conductivity / length
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        length::meter, thermal_conductivity::watt_per_meter_kelvin,
        thermodynamic_temperature::degree_celsius, velocity::meter_per_second,
    };

    #[test]
    fn film_temperature_is_the_arithmetic_mean() {
        let ice = ThermodynamicTemperature::new::<degree_celsius>(-3.0);
        let air = ThermodynamicTemperature::new::<degree_celsius>(17.2);

        let film = film_temperature(ice, air);
        assert_relative_eq!(film.get::<degree_celsius>(), 7.1, epsilon = 1e-9);
    }

    #[test]
    fn reynolds_number_is_dimensionless() {
        let nu = uom::si::f64::DynamicViscosity::new::<uom::si::dynamic_viscosity::pascal_second>(
            1.8e-5,
        ) / uom::si::f64::MassDensity::new::<uom::si::mass_density::kilogram_per_cubic_meter>(1.2);

        let re = reynolds_number(
            Velocity::new::<meter_per_second>(5.0),
            Length::new::<meter>(61.0),
            nu,
        );
        assert_relative_eq!(re.get::<ratio>(), 5.0 * 61.0 / 1.5e-5, max_relative = 1e-9);
    }

    #[test]
    fn laminar_branch_matches_hand_calculation() {
        let nu = nusselt_flat_plate(
            Ratio::new::<ratio>(1.0e5),
            Ratio::new::<ratio>(0.7),
        )
        .unwrap();

        // 0.664·(1e5)^0.5·0.7^(1/3)
        assert_relative_eq!(nu.get::<ratio>(), 186.4, max_relative = 1e-3);
    }

    #[test]
    fn mixed_branch_matches_hand_calculation() {
        let nu = nusselt_flat_plate(
            Ratio::new::<ratio>(1.0e6),
            Ratio::new::<ratio>(0.7),
        )
        .unwrap();

        // (0.037·(1e6)^0.8 − 871)·0.7^(1/3)
        assert_relative_eq!(nu.get::<ratio>(), 1299.0, max_relative = 1e-3);
    }

    #[test]
    fn nusselt_is_positive_just_past_transition() {
        let nu = nusselt_flat_plate(
            Ratio::new::<ratio>(TRANSITION_REYNOLDS + 1.0),
            Ratio::new::<ratio>(0.7),
        )
        .unwrap();
        assert!(nu.get::<ratio>() > 0.0);
    }

    #[test]
    fn out_of_range_inputs_are_rejected() {
        assert!(matches!(
            nusselt_flat_plate(Ratio::new::<ratio>(-1.0), Ratio::new::<ratio>(0.7)),
            Err(CorrelationError::ReynoldsOutOfRange { .. })
        ));
        assert!(matches!(
            nusselt_flat_plate(Ratio::new::<ratio>(1.0e9), Ratio::new::<ratio>(0.7)),
            Err(CorrelationError::ReynoldsOutOfRange { .. })
        ));
        assert!(matches!(
            nusselt_flat_plate(Ratio::new::<ratio>(1.0e6), Ratio::new::<ratio>(0.3)),
            Err(CorrelationError::PrandtlOutOfRange { .. })
        ));
    }

    #[test]
    fn coefficient_recovers_nusselt_over_the_plate_length() {
        let h = convection_coefficient(
            Ratio::new::<ratio>(1000.0),
            ThermalConductivity::new::<watt_per_meter_kelvin>(0.025),
            Length::new::<meter>(61.0),
        );

        // h = 1000·0.025/61 W/m²·K
        assert_relative_eq!(h.value, 1000.0 * 0.025 / 61.0, max_relative = 1e-12);
    }
}
