//! Runs the game-day energy balance for a full arena and prints the report.
//!
//! ```sh
//! cargo run --example game_day
//! ```

use rink_models::models::hvac::rink::{
    AirCondition, Crowd, Game, IceSheet, RinkHvac, Scenario, Site,
};
use rink_models::support::constraint::UnitInterval;
use twine_core::Model;
use uom::si::{
    area::{square_foot, square_meter},
    f64::{
        Area, HeatFluxDensity, Length, MassRate, Pressure, Ratio, ThermodynamicTemperature, Time,
        Velocity, VolumeRate,
    },
    heat_flux_density::watt_per_square_meter,
    length::meter,
    mass_rate::kilogram_per_second,
    pressure::kilopascal,
    ratio::percent,
    thermodynamic_temperature::degree_celsius,
    time::hour,
    velocity::meter_per_second,
    volume_rate::cubic_meter_per_second,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let condition = |t: f64, rh: f64| -> Result<AirCondition, Box<dyn std::error::Error>> {
        Ok(AirCondition {
            temperature: ThermodynamicTemperature::new::<degree_celsius>(t),
            humidity: UnitInterval::new(Ratio::new::<percent>(rh))?,
        })
    };

    // A sold-out game in a 675 000 ft² stadium at 84 kPa site pressure.
    let floor = Area::new::<square_foot>(675_000.0);
    let supply_flow = VolumeRate::new::<cubic_meter_per_second>(362.0);

    let scenario = Scenario::new(
        Site::new(Pressure::new::<kilopascal>(84.0), condition(30.0, 50.0)?)?,
        condition(17.2, 35.0)?,
        supply_flow,
        Crowd::new(
            18_000,
            Area::new::<square_meter>(1.8),
            HeatFluxDensity::new::<watt_per_square_meter>(58.2),
            MassRate::new::<kilogram_per_second>(16.7e-3 / 3600.0),
        )?,
        IceSheet::new(
            floor,
            Length::new::<meter>(250.0),
            ThermodynamicTemperature::new::<degree_celsius>(-3.0),
            Velocity::new::<meter_per_second>(1.0),
        )?,
        Game::new(Time::new::<hour>(2.5), 0.1)?,
    )?;

    let model = RinkHvac::new()?;
    let results = model.call(&scenario)?;

    println!(
        "floor area:                 {:10.1} m²",
        floor.get::<square_meter>()
    );
    println!(
        "supply airflow:             {:10.1} m³/s",
        supply_flow.get::<cubic_meter_per_second>()
    );
    println!("{results}");

    Ok(())
}
