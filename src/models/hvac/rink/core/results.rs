//! Results of a game-day energy balance.

use std::fmt;

use uom::si::{
    energy::megajoule,
    f64::{Energy, Mass, MassRate, Power},
    mass::kilogram,
    mass_rate::kilogram_per_second,
    power::kilowatt,
    pressure::kilopascal,
    ratio::ratio,
    thermodynamic_temperature::degree_celsius,
};

use super::{CrowdLoads, IceSheetLoss, StreamState};

/// Everything a game-day balance produces, intermediates included.
///
/// The `Display` implementation renders the human-readable report; the
/// fields carry the same quantities for programmatic use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Results {
    /// Outdoor air stream drawn by the HVAC intake.
    pub inlet: StreamState,

    /// Conditioned air stream at the indoor setpoint.
    pub outlet: StreamState,

    /// Crowd sensible/latent gains and moisture release.
    pub crowd: CrowdLoads,

    /// Ice-sheet convection chain and loss.
    pub ice: IceSheetLoss,

    /// Steady-state condensate removal rate,
    /// `ṁ_v,in + ṁ_crowd − ṁ_v,out`.
    pub condensate_rate: MassRate,

    /// Total water released by the crowd over the game.
    pub crowd_water: Mass,

    /// Net heat rate. Positive is surplus heat the plant must remove;
    /// negative is a heating demand.
    pub net_heat_rate: Power,

    /// Net energy over the game duration.
    pub net_energy: Energy,

    /// Energy cost for the game, in dollars.
    pub cost: f64,
}

impl fmt::Display for Results {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stream = |f: &mut fmt::Formatter<'_>, label: &str, s: &StreamState| -> fmt::Result {
            writeln!(
                f,
                "{label} vapor pressure:      {:10.4} kPa",
                s.vapor_pressure.get::<kilopascal>()
            )?;
            writeln!(
                f,
                "{label} specific humidity:   {:10.6}",
                s.specific_humidity.get::<ratio>()
            )?;
            writeln!(
                f,
                "{label} dry air flow:        {:10.3} kg/s",
                s.flows.dry_air.get::<kilogram_per_second>()
            )?;
            writeln!(
                f,
                "{label} vapor flow:          {:10.4} kg/s",
                s.flows.vapor.get::<kilogram_per_second>()
            )?;
            writeln!(
                f,
                "{label} enthalpy flow:       {:10.1} kW",
                s.enthalpy_flow().get::<kilowatt>()
            )
        };

        stream(f, "inlet ", &self.inlet)?;
        stream(f, "outlet", &self.outlet)?;

        writeln!(
            f,
            "film temperature:           {:10.2} °C",
            self.ice.film_temperature.get::<degree_celsius>()
        )?;
        writeln!(
            f,
            "convection coefficient:     {:10.3} W/m²·K",
            self.ice.coefficient.value
        )?;
        writeln!(
            f,
            "ice sheet loss:             {:10.2} kW",
            self.ice.heat_rate.get::<kilowatt>()
        )?;
        writeln!(
            f,
            "crowd sensible load:        {:10.2} kW",
            self.crowd.sensible.get::<kilowatt>()
        )?;
        writeln!(
            f,
            "crowd latent load:          {:10.2} kW",
            self.crowd.latent.get::<kilowatt>()
        )?;
        writeln!(
            f,
            "crowd water release:        {:10.1} kg",
            self.crowd_water.get::<kilogram>()
        )?;
        writeln!(
            f,
            "condensate removal:         {:10.4} kg/s",
            self.condensate_rate.get::<kilogram_per_second>()
        )?;
        writeln!(
            f,
            "net power:                  {:10.1} kW",
            self.net_heat_rate.get::<kilowatt>()
        )?;
        writeln!(
            f,
            "net energy:                 {:10.1} MJ",
            self.net_energy.get::<megajoule>()
        )?;
        write!(f, "energy cost:                {:10.2} $", self.cost)
    }
}
