//! Core energy-balance assembly.

use uom::si::{f64::Power, power::kilowatt, time::hour};

use super::{
    BalanceError, CrowdLoads, DryAirModel, Results, Scenario, TransportModel, VaporModel, ice,
    stream,
};

/// Runs the full game-day energy balance for one scenario.
///
/// Resolves the inlet (outdoor) and outlet (setpoint) moist-air streams at
/// the shared supply flow, computes the crowd gains and the ice-sheet
/// convective loss, and aggregates:
///
/// `q̇_net = (Ḣ_out − Ḣ_in) + q̇_sensible + q̇_latent − q̇_ice`
///
/// Positive `q̇_net` is surplus heat the plant must remove; negative is a
/// heating demand. The energy cost prices the magnitude of the net rate
/// over the game duration.
///
/// # Errors
///
/// Returns [`BalanceError`] if either stream resolves to a physically
/// invalid state, a property model is queried outside its domain, or the
/// convection correlation is out of range.
pub fn solve<W, A, T>(
    scenario: &Scenario,
    water: &W,
    air: &A,
    transport: &T,
) -> Result<Results, BalanceError>
where
    W: VaporModel,
    A: DryAirModel,
    T: TransportModel,
{
    let site = scenario.site();

    let inlet = stream::resolve(
        site.outdoor(),
        site.pressure(),
        scenario.supply_flow(),
        water,
        air,
    )
    .map_err(|source| BalanceError::Stream {
        stream: "inlet",
        source,
    })?;

    let outlet = stream::resolve(
        scenario.setpoint(),
        site.pressure(),
        scenario.supply_flow(),
        water,
        air,
    )
    .map_err(|source| BalanceError::Stream {
        stream: "outlet",
        source,
    })?;

    let crowd = CrowdLoads::from_crowd(scenario.crowd());

    let ice = ice::resolve(
        scenario.ice(),
        scenario.setpoint().temperature,
        site.pressure(),
        transport,
    )?;

    let duration = scenario.game().duration();

    let net_heat_rate: Power = (outlet.enthalpy_flow() - inlet.enthalpy_flow())
        + crowd.sensible
        + crowd.latent
        - ice.heat_rate;
    let net_energy = net_heat_rate * duration;
    let cost = net_heat_rate.abs().get::<kilowatt>()
        * duration.get::<hour>()
        * scenario.game().energy_price();

    let condensate_rate = inlet.flows.vapor + crowd.moisture - outlet.flows.vapor;
    let crowd_water = crowd.moisture * duration;

    Ok(Results {
        inlet,
        outlet,
        crowd,
        ice,
        condensate_rate,
        crowd_water,
        net_heat_rate,
        net_energy,
        cost,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::{square_foot, square_meter},
        energy::kilojoule,
        f64::{
            Area, HeatFluxDensity, Length, MassRate, Pressure, Ratio, ThermodynamicTemperature,
            Time, Velocity, VolumeRate,
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

    use crate::models::hvac::rink::core::test_support::{StubAir, StubTransport, StubWater};
    use crate::models::hvac::rink::core::{AirCondition, Crowd, Game, IceSheet, Scenario, Site};
    use crate::support::constraint::UnitInterval;
    use crate::support::thermo::model::{IdealGas, Sutherland};

    fn condition(temp_celsius: f64, humidity_percent: f64) -> AirCondition {
        AirCondition {
            temperature: ThermodynamicTemperature::new::<degree_celsius>(temp_celsius),
            humidity: UnitInterval::new(Ratio::new::<percent>(humidity_percent)).unwrap(),
        }
    }

    /// The second script's published scenario: a 675 000 ft² stadium at
    /// 84 kPa, 362 m³/s of supply air, and a 35 % / 17.2 °C setpoint.
    fn stadium_scenario(occupants: u32) -> Scenario {
        let floor = Area::new::<square_foot>(675_000.0);

        Scenario::new(
            Site::new(Pressure::new::<kilopascal>(84.0), condition(30.0, 50.0)).unwrap(),
            condition(17.2, 35.0),
            VolumeRate::new::<cubic_meter_per_second>(362.0),
            Crowd::new(
                occupants,
                Area::new::<square_meter>(1.8),
                HeatFluxDensity::new::<watt_per_square_meter>(58.2),
                MassRate::new::<kilogram_per_second>(16.7e-3 / 3600.0),
            )
            .unwrap(),
            IceSheet::new(
                floor,
                Length::new::<meter>(250.0),
                ThermodynamicTemperature::new::<degree_celsius>(-3.0),
                Velocity::new::<meter_per_second>(1.0),
            )
            .unwrap(),
            Game::new(Time::new::<hour>(2.5), 0.1).unwrap(),
        )
        .unwrap()
    }

    fn solve_stadium(occupants: u32) -> Results {
        solve(
            &stadium_scenario(occupants),
            &IdealGas::new().unwrap(),
            &IdealGas::new().unwrap(),
            &Sutherland::new().unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn stadium_scenario_produces_finite_loads_and_the_priced_cost() {
        let results = solve_stadium(18_000);

        // Floor area conversion sanity: 675 000 ft² ≈ 62 709.5 m².
        let floor = Area::new::<square_foot>(675_000.0);
        assert_relative_eq!(floor.get::<square_meter>(), 62_709.5, max_relative = 1e-4);

        let ice_kw = results.ice.heat_rate.get::<kilowatt>();
        assert!(ice_kw.is_finite() && ice_kw > 0.0);

        let net_kw = results.net_heat_rate.get::<kilowatt>();
        assert!(net_kw.is_finite());

        // cost = |q̇_net| (kW) · 2.5 h · 0.1 $/kWh
        assert_relative_eq!(results.cost, net_kw.abs() * 2.5 * 0.1, max_relative = 1e-12);

        // q_net = q̇_net · duration
        assert_relative_eq!(
            results.net_energy.get::<kilojoule>(),
            net_kw * 2.5 * 3600.0,
            max_relative = 1e-9,
        );
    }

    #[test]
    fn identical_scenarios_give_identical_results() {
        let first = solve_stadium(18_000);
        let second = solve_stadium(18_000);

        assert_eq!(first, second);
    }

    #[test]
    fn a_bigger_crowd_raises_the_net_load_and_the_condensate() {
        let empty = solve_stadium(0);
        let full = solve_stadium(18_000);

        assert!(full.net_heat_rate > empty.net_heat_rate);
        assert!(full.condensate_rate > empty.condensate_rate);
        assert_eq!(empty.crowd_water.value, 0.0);
    }

    #[test]
    fn aggregation_combines_the_partial_results() {
        let results = solve_stadium(18_000);

        let expected = (results.outlet.enthalpy_flow() - results.inlet.enthalpy_flow())
            + results.crowd.sensible
            + results.crowd.latent
            - results.ice.heat_rate;
        assert_relative_eq!(
            results.net_heat_rate.get::<kilowatt>(),
            expected.get::<kilowatt>(),
        );

        let vapor_balance =
            results.inlet.flows.vapor + results.crowd.moisture - results.outlet.flows.vapor;
        assert_relative_eq!(
            results.condensate_rate.get::<kilogram_per_second>(),
            vapor_balance.get::<kilogram_per_second>(),
        );
    }

    #[test]
    fn dehumidifying_a_humid_inlet_condenses_water() {
        // Inlet air is warmer and wetter than the setpoint, so the plant
        // must remove water at steady state.
        let results = solve_stadium(18_000);
        assert!(results.condensate_rate.get::<kilogram_per_second>() > 0.0);
    }

    #[test]
    fn stub_properties_exercise_the_balance_without_real_data() {
        let scenario = Scenario::new(
            Site::new(Pressure::new::<kilopascal>(84.0), condition(25.0, 50.0)).unwrap(),
            condition(17.0, 25.0),
            VolumeRate::new::<cubic_meter_per_second>(100.0),
            Crowd::new(
                1000,
                Area::new::<square_meter>(2.0),
                HeatFluxDensity::new::<watt_per_square_meter>(50.0),
                MassRate::new::<kilogram_per_second>(1.0e-6),
            )
            .unwrap(),
            IceSheet::new(
                Area::new::<square_meter>(1000.0),
                Length::new::<meter>(50.0),
                ThermodynamicTemperature::new::<degree_celsius>(-5.0),
                Velocity::new::<meter_per_second>(2.0),
            )
            .unwrap(),
            Game::new(Time::new::<hour>(2.5), 0.1).unwrap(),
        )
        .unwrap();

        let results = solve(&scenario, &StubWater, &StubAir, &StubTransport).unwrap();

        // With the stub saturation pressure of 2 kPa: p_v = 1 kPa inlet,
        // 0.5 kPa outlet.
        assert_relative_eq!(results.inlet.vapor_pressure.get::<kilopascal>(), 1.0);
        assert_relative_eq!(results.outlet.vapor_pressure.get::<kilopascal>(), 0.5);

        // Crowd gains are pure arithmetic: 1000·2·50 W and 1000·1e-6 kg/s.
        assert_relative_eq!(results.crowd.sensible.get::<kilowatt>(), 100.0);
        assert_relative_eq!(
            results.crowd.moisture.get::<kilogram_per_second>(),
            1.0e-3,
        );

        // Constant stub transport properties drive the mixed-flow branch.
        assert!(results.ice.reynolds.value > 5.0e5);
        assert!(results.ice.heat_rate.get::<kilowatt>() > 0.0);
        assert!(results.net_heat_rate.get::<kilowatt>().is_finite());
    }
}
