//! Closed-form reentry cooling calculation.
//!
//! Converts a vehicle's orbital kinetic energy into the heat load it sees
//! during peak heating, splits that load between what the tiles can radiate
//! and what must be carried off by vaporizing water, then sizes the water
//! resupply.

mod config;
mod error;
mod parameters;
mod reentries;
mod results;

pub use config::Config;
pub use error::{ComputeError, ConfigError, Parameter, Violation};
pub use parameters::Parameters;
pub use reentries::ReentriesPerLaunch;
pub use results::Results;

use uom::si::{
    available_energy::joule_per_kilogram,
    energy::joule,
    f64::{Energy, Mass, Ratio},
    mass::ton,
    ratio::ratio,
};

use reentries::whole_count;

/// Runs the full calculation for a validated configuration.
///
/// This is a pure function: identical inputs give bit-identical results.
///
/// # Errors
///
/// Returns a [`ComputeError`] if the inputs are large enough that the
/// kinetic energy, the water mass, or the total cost is not finite.
pub fn compute(config: &Config) -> Result<Results, ComputeError> {
    let mass = config.vehicle_mass.into_inner();
    let velocity = config.orbital_velocity.into_inner();

    let kinetic_energy: Energy = 0.5 * mass * velocity * velocity;
    finite("kinetic_energy", kinetic_energy.get::<joule>())?;

    let max_heating_energy = fraction(config.max_heating_fraction.into_inner()) * kinetic_energy;
    let heat_load = fraction(config.heat_transfer_fraction.into_inner()) * max_heating_energy;

    // Radiative equilibrium: tolerable flux scales with T⁴.
    let heat_to_surface = fraction(config.tile_temperature_fraction.into_inner()).powi(4);
    let absorbed = 1.0 - heat_to_surface;
    let vaporization_energy = absorbed * heat_load;

    // Logistics are sized in tonnes.
    let latent_heat = config.latent_heat.into_inner().get::<joule_per_kilogram>();
    let water_t = finite(
        "water_mass",
        vaporization_energy.get::<joule>() / latent_heat / 1000.0,
    )?;
    let payload_t = config.payload_per_flight.into_inner().get::<ton>();

    let flights_required = flights_required(water_t, payload_t);
    #[allow(clippy::cast_precision_loss)]
    let total_cost = finite(
        "total_cost",
        flights_required as f64 * config.propellant_cost_per_flight.into_inner(),
    )?;

    Ok(Results {
        kinetic_energy,
        max_heating_energy,
        heat_load,
        absorbed_fraction: Ratio::new::<ratio>(absorbed),
        vaporization_energy,
        water_mass: Mass::new::<ton>(water_t),
        flights_required,
        total_cost,
        reentries_per_launch: ReentriesPerLaunch::from_tonnes(payload_t, water_t),
    })
}

fn fraction(value: Ratio) -> f64 {
    value.get::<ratio>()
}

fn finite(quantity: &'static str, value: f64) -> Result<f64, ComputeError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ComputeError { quantity, value })
    }
}

/// Smallest whole number of launches that carries `water_t` tonnes.
fn flights_required(water_t: f64, payload_t: f64) -> u64 {
    whole_count((water_t / payload_t).ceil())
}
