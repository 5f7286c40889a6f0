//! Convective loss from the arena air to the ice sheet.

use uom::si::f64::{Power, Pressure, Ratio, ThermodynamicTemperature};

use crate::support::convection::{
    convection_coefficient, film_temperature, nusselt_flat_plate, reynolds_number,
};
use crate::support::thermo::{State, fluid::Air};
use crate::support::units::{ConvectionCoefficient, TemperatureDifference};

use super::{BalanceError, IceSheet, LossReference, TransportModel};

/// Resolved ice-sheet convection chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IceSheetLoss {
    /// Film temperature at which boundary-layer properties were evaluated.
    pub film_temperature: ThermodynamicTemperature,

    /// Reynolds number of the corrected air sweep over the sheet.
    pub reynolds: Ratio,

    /// Average Nusselt number from the flat-plate correlation.
    pub nusselt: Ratio,

    /// Convection coefficient `h = Nu·k/L`.
    pub coefficient: ConvectionCoefficient,

    /// Heat extracted from the air by the sheet, `Q = h·A·ΔT`.
    pub heat_rate: Power,
}

/// Resolves the external-flow convection chain over the ice sheet.
pub(super) fn resolve<T: TransportModel>(
    ice: &IceSheet,
    air_temperature: ThermodynamicTemperature,
    site_pressure: Pressure,
    transport: &T,
) -> Result<IceSheetLoss, BalanceError> {
    let film = film_temperature(ice.surface_temperature(), air_temperature);
    let film_state = State::new(film, site_pressure, Air);

    let viscosity = transport
        .kinematic_viscosity(&film_state)
        .map_err(|e| BalanceError::property("kinematic viscosity at the film state", e))?;
    let prandtl = transport
        .prandtl(&film_state)
        .map_err(|e| BalanceError::property("Prandtl number at the film state", e))?;
    let conductivity = transport
        .thermal_conductivity(&film_state)
        .map_err(|e| BalanceError::property("thermal conductivity at the film state", e))?;

    let reynolds = reynolds_number(ice.corrected_air_speed(), ice.length(), viscosity);
    let nusselt = nusselt_flat_plate(reynolds, prandtl)?;
    let coefficient = convection_coefficient(nusselt, conductivity, ice.length());

    let delta_t = match ice.loss_reference() {
        LossReference::IceSurface => air_temperature.minus(ice.surface_temperature()),
        LossReference::Film => air_temperature.minus(film),
    };
    let heat_rate = coefficient * ice.area() * delta_t;

    Ok(IceSheetLoss {
        film_temperature: film,
        reynolds,
        nusselt,
        coefficient,
        heat_rate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter,
        f64::{Area, Length, Velocity},
        length::meter,
        power::kilowatt,
        pressure::kilopascal,
        thermodynamic_temperature::degree_celsius,
        velocity::meter_per_second,
    };

    use crate::support::thermo::model::Sutherland;

    fn sheet(air_speed: f64) -> IceSheet {
        IceSheet::new(
            Area::new::<square_meter>(1586.0),
            Length::new::<meter>(61.0),
            ThermodynamicTemperature::new::<degree_celsius>(-3.0),
            Velocity::new::<meter_per_second>(air_speed),
        )
        .unwrap()
    }

    fn resolve_sheet(ice: &IceSheet) -> IceSheetLoss {
        resolve(
            ice,
            ThermodynamicTemperature::new::<degree_celsius>(17.2),
            Pressure::new::<kilopascal>(84.0),
            &Sutherland::new().unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn film_temperature_splits_air_and_ice() {
        let loss = resolve_sheet(&sheet(1.0));
        assert_relative_eq!(
            loss.film_temperature.get::<degree_celsius>(),
            7.1,
            epsilon = 1e-9,
        );
    }

    #[test]
    fn warm_air_loses_heat_to_the_sheet() {
        let loss = resolve_sheet(&sheet(1.0));

        assert!(loss.reynolds.value > 0.0);
        assert!(loss.nusselt.value > 0.0);
        assert!(loss.coefficient.value > 0.0);
        assert!(loss.heat_rate.get::<kilowatt>() > 0.0);
        assert!(loss.heat_rate.get::<kilowatt>().is_finite());
    }

    #[test]
    fn still_air_produces_no_convective_loss() {
        let loss = resolve_sheet(&sheet(0.0));

        assert_eq!(loss.reynolds.value, 0.0);
        assert_eq!(loss.heat_rate.get::<kilowatt>(), 0.0);
    }

    #[test]
    fn film_reference_shrinks_the_driving_difference() {
        let against_ice = resolve_sheet(&sheet(1.0));
        let against_film = resolve_sheet(&sheet(1.0).with_loss_reference(LossReference::Film));

        // ΔT to the film is half the ΔT to the surface, so the loss halves.
        assert_relative_eq!(
            against_film.heat_rate.get::<kilowatt>(),
            0.5 * against_ice.heat_rate.get::<kilowatt>(),
            max_relative = 1e-9,
        );
    }

    #[test]
    fn faster_sweep_increases_the_loss() {
        let slow = resolve_sheet(&sheet(1.0));
        let fast = resolve_sheet(&sheet(4.0));

        assert!(fast.heat_rate > slow.heat_rate);
    }
}
