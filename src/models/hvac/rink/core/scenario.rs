//! Scenario configuration for the game-day energy balance.
//!
//! Every physical parameter of a run is a named field on an immutable value,
//! validated at construction, so multiple scenarios can be evaluated side by
//! side without shared state.

use uom::si::{
    f64::{
        Area, HeatFluxDensity, Length, MassRate, Pressure, Ratio, ThermodynamicTemperature, Time,
        Velocity, VolumeRate,
    },
    ratio::ratio,
};

use crate::support::constraint::{Constrained, ConstraintResult, NonNegative, StrictlyPositive};
use crate::support::moist_air::RelativeHumidity;

/// Temperature and relative humidity of a moist-air state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirCondition {
    pub temperature: ThermodynamicTemperature,
    pub humidity: RelativeHumidity,
}

/// Site conditions: total atmospheric pressure and the outdoor air drawn by
/// the HVAC intake.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Site {
    pressure: Pressure,
    outdoor: AirCondition,
}

impl Site {
    /// Constructs validated site conditions.
    ///
    /// # Errors
    ///
    /// Returns an error if the atmospheric pressure is not strictly positive.
    pub fn new(pressure: Pressure, outdoor: AirCondition) -> ConstraintResult<Self> {
        let pressure = Constrained::<Pressure, StrictlyPositive>::new(pressure)?.into_inner();
        Ok(Self { pressure, outdoor })
    }

    #[must_use]
    pub fn pressure(&self) -> Pressure {
        self.pressure
    }

    #[must_use]
    pub fn outdoor(&self) -> &AirCondition {
        &self.outdoor
    }
}

/// Reference temperature for the ΔT in the ice-sheet loss equation.
///
/// The source scripts disagree on which difference drives the loss, so the
/// choice is an explicit parameter. [`LossReference::IceSurface`] (air
/// setpoint minus ice surface) is the canonical contract;
/// [`LossReference::Film`] (air setpoint minus film temperature) reproduces
/// the variant that reuses the film temperature in the final equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LossReference {
    #[default]
    IceSurface,
    Film,
}

/// The ice sheet and the air sweeping it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IceSheet {
    area: Area,
    length: Length,
    surface_temperature: ThermodynamicTemperature,
    air_speed: Velocity,
    speed_correction: Ratio,
    loss_reference: LossReference,
}

impl IceSheet {
    /// Constructs a validated ice sheet with no air-speed correction and the
    /// default ΔT reference.
    ///
    /// # Errors
    ///
    /// Returns an error if the area or characteristic length is not strictly
    /// positive, or the air speed is negative.
    pub fn new(
        area: Area,
        length: Length,
        surface_temperature: ThermodynamicTemperature,
        air_speed: Velocity,
    ) -> ConstraintResult<Self> {
        let area = Constrained::<Area, StrictlyPositive>::new(area)?.into_inner();
        let length = Constrained::<Length, StrictlyPositive>::new(length)?.into_inner();
        let air_speed = Constrained::<Velocity, NonNegative>::new(air_speed)?.into_inner();

        Ok(Self {
            area,
            length,
            surface_temperature,
            air_speed,
            speed_correction: Ratio::new::<ratio>(1.0),
            loss_reference: LossReference::default(),
        })
    }

    /// Applies a correction factor to the nominal air speed.
    ///
    /// # Errors
    ///
    /// Returns an error if the factor is not strictly positive.
    pub fn with_speed_correction(mut self, factor: Ratio) -> ConstraintResult<Self> {
        self.speed_correction = Constrained::<Ratio, StrictlyPositive>::new(factor)?.into_inner();
        Ok(self)
    }

    /// Selects the ΔT reference used in the loss equation.
    #[must_use]
    pub fn with_loss_reference(mut self, reference: LossReference) -> Self {
        self.loss_reference = reference;
        self
    }

    #[must_use]
    pub fn area(&self) -> Area {
        self.area
    }

    #[must_use]
    pub fn length(&self) -> Length {
        self.length
    }

    #[must_use]
    pub fn surface_temperature(&self) -> ThermodynamicTemperature {
        self.surface_temperature
    }

    /// Returns the air speed with the correction factor applied.
    #[must_use]
    pub fn corrected_air_speed(&self) -> Velocity {
        self.air_speed * self.speed_correction
    }

    #[must_use]
    pub fn loss_reference(&self) -> LossReference {
        self.loss_reference
    }
}

/// The crowd: headcount and per-person heat and moisture release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crowd {
    count: u32,
    body_area: Area,
    sensible_flux: HeatFluxDensity,
    moisture_rate: MassRate,
}

impl Crowd {
    /// Constructs a validated crowd.
    ///
    /// `sensible_flux` is the sensible heat release per unit body surface;
    /// `moisture_rate` is the water vapor release per person.
    ///
    /// # Errors
    ///
    /// Returns an error if the body area, sensible flux, or moisture rate is
    /// negative.
    pub fn new(
        count: u32,
        body_area: Area,
        sensible_flux: HeatFluxDensity,
        moisture_rate: MassRate,
    ) -> ConstraintResult<Self> {
        let body_area = Constrained::<Area, NonNegative>::new(body_area)?.into_inner();
        let sensible_flux =
            Constrained::<HeatFluxDensity, NonNegative>::new(sensible_flux)?.into_inner();
        let moisture_rate = Constrained::<MassRate, NonNegative>::new(moisture_rate)?.into_inner();

        Ok(Self {
            count,
            body_area,
            sensible_flux,
            moisture_rate,
        })
    }

    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    #[must_use]
    pub fn body_area(&self) -> Area {
        self.body_area
    }

    #[must_use]
    pub fn sensible_flux(&self) -> HeatFluxDensity {
        self.sensible_flux
    }

    #[must_use]
    pub fn moisture_rate(&self) -> MassRate {
        self.moisture_rate
    }
}

/// Game duration and energy pricing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Game {
    duration: Time,
    energy_price: f64,
}

impl Game {
    /// Constructs a validated game.
    ///
    /// `energy_price` is in dollars per kWh.
    ///
    /// # Errors
    ///
    /// Returns an error if the duration is not strictly positive or the
    /// price is negative.
    pub fn new(duration: Time, energy_price: f64) -> ConstraintResult<Self> {
        let duration = Constrained::<Time, StrictlyPositive>::new(duration)?.into_inner();
        let energy_price = Constrained::<f64, NonNegative>::new(energy_price)?.into_inner();

        Ok(Self {
            duration,
            energy_price,
        })
    }

    #[must_use]
    pub fn duration(&self) -> Time {
        self.duration
    }

    /// Energy price in dollars per kWh.
    #[must_use]
    pub fn energy_price(&self) -> f64 {
        self.energy_price
    }
}

/// Complete inputs for one game-day energy balance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    site: Site,
    setpoint: AirCondition,
    supply_flow: VolumeRate,
    crowd: Crowd,
    ice: IceSheet,
    game: Game,
}

impl Scenario {
    /// Constructs a validated scenario.
    ///
    /// # Errors
    ///
    /// Returns an error if the supply volumetric flow is not strictly
    /// positive.
    pub fn new(
        site: Site,
        setpoint: AirCondition,
        supply_flow: VolumeRate,
        crowd: Crowd,
        ice: IceSheet,
        game: Game,
    ) -> ConstraintResult<Self> {
        let supply_flow = Constrained::<VolumeRate, StrictlyPositive>::new(supply_flow)?.into_inner();

        Ok(Self {
            site,
            setpoint,
            supply_flow,
            crowd,
            ice,
            game,
        })
    }

    #[must_use]
    pub fn site(&self) -> &Site {
        &self.site
    }

    #[must_use]
    pub fn setpoint(&self) -> &AirCondition {
        &self.setpoint
    }

    #[must_use]
    pub fn supply_flow(&self) -> VolumeRate {
        self.supply_flow
    }

    #[must_use]
    pub fn crowd(&self) -> &Crowd {
        &self.crowd
    }

    #[must_use]
    pub fn ice(&self) -> &IceSheet {
        &self.ice
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        area::square_meter, length::meter, ratio::ratio as ratio_unit,
        thermodynamic_temperature::degree_celsius, velocity::meter_per_second,
    };

    fn sheet() -> IceSheet {
        IceSheet::new(
            Area::new::<square_meter>(1586.0),
            Length::new::<meter>(61.0),
            ThermodynamicTemperature::new::<degree_celsius>(-3.0),
            Velocity::new::<meter_per_second>(1.0),
        )
        .unwrap()
    }

    #[test]
    fn rejects_non_positive_geometry() {
        assert!(
            IceSheet::new(
                Area::new::<square_meter>(0.0),
                Length::new::<meter>(61.0),
                ThermodynamicTemperature::new::<degree_celsius>(-3.0),
                Velocity::new::<meter_per_second>(1.0),
            )
            .is_err()
        );
        assert!(
            IceSheet::new(
                Area::new::<square_meter>(1586.0),
                Length::new::<meter>(-61.0),
                ThermodynamicTemperature::new::<degree_celsius>(-3.0),
                Velocity::new::<meter_per_second>(1.0),
            )
            .is_err()
        );
    }

    #[test]
    fn speed_correction_scales_the_air_speed() {
        let corrected = sheet()
            .with_speed_correction(Ratio::new::<ratio_unit>(1.3))
            .unwrap();

        assert_eq!(
            corrected.corrected_air_speed().get::<meter_per_second>(),
            1.3
        );
        assert!(sheet().with_speed_correction(Ratio::new::<ratio_unit>(0.0)).is_err());
    }

    #[test]
    fn loss_reference_defaults_to_the_ice_surface() {
        assert_eq!(sheet().loss_reference(), LossReference::IceSurface);
        assert_eq!(
            sheet()
                .with_loss_reference(LossReference::Film)
                .loss_reference(),
            LossReference::Film
        );
    }

    #[test]
    fn game_rejects_zero_duration_and_negative_price() {
        use uom::si::time::hour;

        assert!(Game::new(Time::new::<hour>(0.0), 0.1).is_err());
        assert!(Game::new(Time::new::<hour>(2.5), -0.1).is_err());
        assert!(Game::new(Time::new::<hour>(2.5), 0.0).is_ok());
    }
}
