//! Moist-air stream resolution.

use uom::si::f64::{Power, Pressure, Ratio, VolumeRate};

use crate::support::moist_air::{
    self, MoistAirError, StreamMassFlows, dry_air_pressure, specific_humidity, vapor_pressure,
};
use crate::support::thermo::{
    State,
    fluid::{Air, Water},
};

use super::{AirCondition, DryAirModel, VaporModel};

/// A fully resolved moist-air stream at a shared volumetric flow.
///
/// Carries every intermediate the balance reports: partial pressures,
/// specific humidity, component mass flows, and component enthalpy flows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreamState {
    /// Saturation vapor pressure at the stream temperature.
    pub saturation_pressure: Pressure,

    /// Water vapor partial pressure.
    pub vapor_pressure: Pressure,

    /// Dry-air partial pressure.
    pub dry_air_pressure: Pressure,

    /// Mass of vapor per mass of dry air.
    pub specific_humidity: Ratio,

    /// Dry-air and vapor mass flows.
    pub flows: StreamMassFlows,

    /// Enthalpy flow of the dry-air component.
    pub dry_air_enthalpy_flow: Power,

    /// Enthalpy flow of the vapor component.
    pub vapor_enthalpy_flow: Power,
}

impl StreamState {
    /// Total enthalpy flow carried by the stream.
    #[must_use]
    pub fn enthalpy_flow(&self) -> Power {
        self.dry_air_enthalpy_flow + self.vapor_enthalpy_flow
    }
}

/// Resolves a measured condition into component pressures, flows, and
/// enthalpy flows at the given total pressure and volumetric flow.
pub(super) fn resolve<W: VaporModel, A: DryAirModel>(
    condition: &AirCondition,
    total_pressure: Pressure,
    volume_flow: VolumeRate,
    water: &W,
    air: &A,
) -> Result<StreamState, MoistAirError> {
    let t = condition.temperature;

    let saturation_pressure = water.saturation_pressure(t)?;
    let p_v = vapor_pressure(water, t, condition.humidity)?;
    let p_da = dry_air_pressure(total_pressure, p_v)?;
    let omega = specific_humidity(total_pressure, p_v)?;

    let air_state = State::new(t, total_pressure, Air);
    let water_state = State::new(t, total_pressure, Water);

    let flows = moist_air::partition_volume_flow(
        volume_flow,
        omega,
        air.specific_volume(&air_state)?,
        water.specific_volume(&water_state)?,
    )?;

    let dry_air_enthalpy_flow = moist_air::enthalpy_flow(
        air.molar_enthalpy(&air_state)?,
        air.molar_mass(),
        flows.dry_air,
    );
    let vapor_enthalpy_flow = moist_air::enthalpy_flow(
        water.molar_enthalpy(&water_state)?,
        water.molar_mass(),
        flows.vapor,
    );

    Ok(StreamState {
        saturation_pressure,
        vapor_pressure: p_v,
        dry_air_pressure: p_da,
        specific_humidity: omega,
        flows,
        dry_air_enthalpy_flow,
        vapor_enthalpy_flow,
    })
}
