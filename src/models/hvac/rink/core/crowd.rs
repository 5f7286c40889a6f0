//! Internal gains from the crowd.

use uom::si::{available_energy::joule_per_kilogram, f64::{MassRate, Power}};

use crate::support::units::SpecificEnthalpy;

use super::Crowd;

/// Latent heat of vaporization of water at 0 °C.
fn latent_heat() -> SpecificEnthalpy {
    SpecificEnthalpy::new::<joule_per_kilogram>(2.501e6)
}

/// Sensible and latent gains released into the arena air by the occupants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrowdLoads {
    /// Sensible heat release.
    pub sensible: Power,

    /// Latent heat carried by the released water vapor.
    pub latent: Power,

    /// Water vapor release rate.
    pub moisture: MassRate,
}

impl CrowdLoads {
    /// Computes the crowd's gains from its headcount and per-person rates.
    #[must_use]
    pub fn from_crowd(crowd: &Crowd) -> Self {
        let count = f64::from(crowd.count());

        let sensible = crowd.sensible_flux() * crowd.body_area() * count;
        let moisture = crowd.moisture_rate() * count;
        let latent = moisture * latent_heat();

        Self {
            sensible,
            latent,
            moisture,
        }
    }
}
