//! Psychrometric property functions for moist air.
//!
//! Moist air is treated as a two-component ideal-gas mixture of dry air and
//! water vapor sharing a total pressure: `P = p_da + p_v`. These functions
//! convert between the measured state (temperature, relative humidity, total
//! pressure) and the component quantities the energy balance needs: partial
//! pressures, specific humidity, component mass flows, and enthalpy flows.
//!
//! Saturation pressures and specific volumes come from injected property
//! models (see [`capability`](crate::support::thermo::capability)); the
//! relations here are property-data free. Physically invalid states — vapor
//! pressure at or above the total pressure, negative partial pressures —
//! fail loudly with [`MoistAirError`] instead of propagating NaN into the
//! balance.

use thiserror::Error;
use uom::{
    ConstZero,
    si::{
        f64::{
            MassRate, MolarMass, Power, Pressure, Ratio, SpecificVolume,
            ThermodynamicTemperature, VolumeRate,
        },
        pressure::kilopascal,
        ratio::ratio,
        thermodynamic_temperature::kelvin,
    },
};

use crate::support::constraint::{Constrained, UnitInterval};
use crate::support::thermo::{PropertyError, capability::HasSaturationPressure};
use crate::support::units::MolarEnthalpy;

use crate::support::thermo::model::ideal_gas::molar_gas_constant;

/// Relative humidity as a validated fraction of saturation.
///
/// Constructed through [`UnitInterval`], so values outside `[0, 1]`
/// (0–100 %) are unrepresentable:
///
/// ```
/// use rink_models::support::constraint::UnitInterval;
/// use uom::si::{f64::Ratio, ratio::percent};
///
/// let setpoint = UnitInterval::new(Ratio::new::<percent>(35.0)).unwrap();
/// assert!(UnitInterval::new(Ratio::new::<percent>(104.0)).is_err());
/// ```
pub type RelativeHumidity = Constrained<Ratio, UnitInterval>;

/// Molar-mass ratio of water vapor to dry air in the specific-humidity relation.
const VAPOR_TO_DRY_AIR_MOLAR_MASS_RATIO: f64 = 0.622;

/// Errors for physically invalid moist-air states.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MoistAirError {
    /// A partial pressure below zero was supplied.
    #[error("negative vapor pressure: {:.4} kPa", .vapor.get::<kilopascal>())]
    NegativeVaporPressure { vapor: Pressure },

    /// The vapor partial pressure reached or exceeded the total pressure,
    /// leaving no room for dry air.
    #[error(
        "vapor pressure {:.4} kPa exceeds the total pressure {:.4} kPa",
        .vapor.get::<kilopascal>(),
        .total.get::<kilopascal>()
    )]
    VaporExceedsTotal { vapor: Pressure, total: Pressure },

    /// A flow input was out of range (negative flow, non-positive
    /// specific volume or temperature).
    #[error("invalid flow input: {context}")]
    InvalidFlowInput { context: String },

    /// A property model failed while resolving the state.
    #[error(transparent)]
    Property(#[from] PropertyError),
}

/// Component mass flows of a moist-air stream sharing one volumetric flow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreamMassFlows {
    pub dry_air: MassRate,
    pub vapor: MassRate,
}

/// Returns the water vapor partial pressure `p_v = φ·p_sat(T)`.
///
/// Monotonic increasing in both temperature and relative humidity.
///
/// # Errors
///
/// Propagates the water model's [`PropertyError`] if `temperature` is
/// outside the saturation curve's valid range.
pub fn vapor_pressure<W: HasSaturationPressure>(
    water: &W,
    temperature: ThermodynamicTemperature,
    humidity: RelativeHumidity,
) -> Result<Pressure, PropertyError> {
    let p_sat = water.saturation_pressure(temperature)?;
    Ok(humidity.into_inner() * p_sat)
}

/// Returns the dry-air partial pressure `p_da = P − p_v`.
///
/// # Errors
///
/// Returns [`MoistAirError`] if `vapor` is negative or exceeds `total`
/// (a negative dry-air pressure is not a physical state).
pub fn dry_air_pressure(total: Pressure, vapor: Pressure) -> Result<Pressure, MoistAirError> {
    if vapor < Pressure::ZERO {
        return Err(MoistAirError::NegativeVaporPressure { vapor });
    }
    if vapor > total {
        return Err(MoistAirError::VaporExceedsTotal { vapor, total });
    }
    Ok(total - vapor)
}

/// Returns the specific humidity `ω = 0.622·p_v/(P − p_v)`.
///
/// Strictly increasing in `p_v` at fixed total pressure.
///
/// # Errors
///
/// Returns [`MoistAirError`] if `vapor` is negative, or if `vapor ≥ total`
/// (the relation is singular at equality and unphysical above it).
pub fn specific_humidity(total: Pressure, vapor: Pressure) -> Result<Ratio, MoistAirError> {
    if vapor < Pressure::ZERO {
        return Err(MoistAirError::NegativeVaporPressure { vapor });
    }
    if vapor >= total {
        return Err(MoistAirError::VaporExceedsTotal { vapor, total });
    }
    Ok(Ratio::new::<ratio>(VAPOR_TO_DRY_AIR_MOLAR_MASS_RATIO) * (vapor / (total - vapor)))
}

/// Returns a component's mass flow from its partial pressure:
/// `ṁ = p_i·V̇·M/(R̄·T)`.
///
/// # Errors
///
/// Returns [`MoistAirError`] if the partial pressure or volume flow is
/// negative, or the temperature is not positive.
pub fn component_mass_flow(
    partial_pressure: Pressure,
    volume_flow: VolumeRate,
    molar_mass: MolarMass,
    temperature: ThermodynamicTemperature,
) -> Result<MassRate, MoistAirError> {
    if partial_pressure < Pressure::ZERO {
        return Err(MoistAirError::NegativeVaporPressure {
            vapor: partial_pressure,
        });
    }
    if volume_flow < VolumeRate::ZERO {
        return Err(MoistAirError::InvalidFlowInput {
            context: "volume flow must not be negative".into(),
        });
    }
    if temperature.get::<kelvin>() <= 0.0 {
        return Err(MoistAirError::InvalidFlowInput {
            context: "temperature must be positive".into(),
        });
    }

    Ok(partial_pressure * volume_flow * molar_mass / (molar_gas_constant() * temperature))
}

/// Partitions a shared volumetric flow into dry-air and vapor mass flows
/// using each species' specific volume at the mixture's temperature and
/// total pressure:
///
/// - `ṁ_da = V̇/(v_air + ω·v_h2o)`
/// - `ṁ_v  = V̇/(v_air/ω + v_h2o)`
///
/// Both relations use the same specific humidity `ω`, which keeps the
/// partition mass-consistent: `ṁ_da·v_air + ṁ_v·v_h2o` reconstructs `V̇`
/// identically, and for ideal-gas specific volumes the results agree with
/// [`component_mass_flow`] evaluated at each partial pressure to within the
/// rounding of the 0.622 constant (a few parts in 10⁵). Perfectly dry air
/// (`ω = 0`) short-circuits to a zero vapor flow.
///
/// # Errors
///
/// Returns [`MoistAirError`] if the volume flow or specific humidity is
/// negative, or either specific volume is not positive.
pub fn partition_volume_flow(
    volume_flow: VolumeRate,
    specific_humidity: Ratio,
    dry_air_volume: SpecificVolume,
    vapor_volume: SpecificVolume,
) -> Result<StreamMassFlows, MoistAirError> {
    if volume_flow < VolumeRate::ZERO {
        return Err(MoistAirError::InvalidFlowInput {
            context: "volume flow must not be negative".into(),
        });
    }
    if specific_humidity < Ratio::ZERO {
        return Err(MoistAirError::InvalidFlowInput {
            context: "specific humidity must not be negative".into(),
        });
    }
    if dry_air_volume <= SpecificVolume::ZERO || vapor_volume <= SpecificVolume::ZERO {
        return Err(MoistAirError::InvalidFlowInput {
            context: "specific volumes must be positive".into(),
        });
    }

    if specific_humidity == Ratio::ZERO {
        return Ok(StreamMassFlows {
            dry_air: volume_flow / dry_air_volume,
            vapor: MassRate::ZERO,
        });
    }

    Ok(StreamMassFlows {
        dry_air: volume_flow / (dry_air_volume + specific_humidity * vapor_volume),
        vapor: volume_flow / (dry_air_volume / specific_humidity + vapor_volume),
    })
}

/// Returns the enthalpy flow carried by a component stream: `Ḣ = h̄/M·ṁ`.
#[must_use]
pub fn enthalpy_flow(
    molar_enthalpy: MolarEnthalpy,
    molar_mass: MolarMass,
    mass_flow: MassRate,
) -> Power {
    molar_enthalpy / molar_mass * mass_flow
}
