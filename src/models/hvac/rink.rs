//! Ice-arena game-day energy balance.
//!
//! Computes the psychrometric energy balance of an arena across a game:
//! the moist-air enthalpy carried in and out by the HVAC supply flow, the
//! crowd's sensible and latent gains, the convective loss from the air to
//! the ice sheet, and the resulting net load, energy, and dollar cost.
//!
//! [`RinkHvac`] is the [`twine_core::Model`] adapter over the crate's
//! default property stack (ideal-gas air and water vapor, Sutherland-law
//! transport properties). [`solve`] exposes the core engine directly for
//! callers bringing their own property models.

mod core;

pub use self::core::{
    AirCondition, BalanceError, Crowd, CrowdLoads, DryAirModel, Game, IceSheet, IceSheetLoss,
    LossReference, Results, Scenario, Site, StreamState, TransportModel, VaporModel, solve,
};

use thiserror::Error;
use twine_core::Model;

use crate::support::thermo::{
    fluid::{Air, Water},
    model::{
        IdealGas, Sutherland, ideal_gas::IdealGasParametersError,
        sutherland::SutherlandParametersError,
    },
};

/// Errors from constructing the default property stack.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RinkHvacError {
    #[error(transparent)]
    IdealGas(#[from] IdealGasParametersError),
    #[error(transparent)]
    Transport(#[from] SutherlandParametersError),
}

/// Game-day energy balance over the default property stack.
///
/// A thin [`Model`] adapter: [`RinkHvac::call`](twine_core::Model::call)
/// delegates to [`solve`] with the crate's ideal-gas and Sutherland models.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RinkHvac {
    water: IdealGas<Water>,
    air: IdealGas<Air>,
    transport: Sutherland<Air>,
}

impl RinkHvac {
    /// Creates the model with the default property stack.
    ///
    /// # Errors
    ///
    /// Returns [`RinkHvacError`] if any property model's constants are
    /// invalid.
    pub fn new() -> Result<Self, RinkHvacError> {
        Ok(Self {
            water: IdealGas::new()?,
            air: IdealGas::new()?,
            transport: Sutherland::new()?,
        })
    }
}

impl Model for RinkHvac {
    type Input = Scenario;
    type Output = Results;
    type Error = BalanceError;

    fn call(&self, input: &Scenario) -> Result<Results, BalanceError> {
        self::core::solve(input, &self.water, &self.air, &self.transport)
    }
}
