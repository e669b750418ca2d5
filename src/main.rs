use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use twine_core::Model;

use reentry_cooling::{
    models::reentry::{Config, Parameters, ReentryCooling},
    report,
};

/// Water mass and resupply logistics for water-cooled reentry.
///
/// Every parameter has a built-in default. Values are taken from, in
/// increasing priority: defaults, the `--config` file, environment
/// variables, command line flags.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// JSON file with any subset of the parameters, keyed by snake_case name.
    #[arg(long, env = "REENTRY_CONFIG")]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Vehicle mass, kg [default: 120000].
    #[arg(long, env = "REENTRY_VEHICLE_MASS", allow_negative_numbers = true)]
    vehicle_mass: Option<f64>,

    /// Orbital velocity, m/s [default: 7800].
    #[arg(long, env = "REENTRY_ORBITAL_VELOCITY", allow_negative_numbers = true)]
    orbital_velocity: Option<f64>,

    /// Share of kinetic energy dissipated during peak heating, in (0,1] [default: 0.3].
    #[arg(long, env = "REENTRY_MAX_HEATING_FRACTION", allow_negative_numbers = true)]
    max_heating_fraction: Option<f64>,

    /// Share of peak heating energy reaching the vehicle, in (0,1] [default: 0.01].
    #[arg(long, env = "REENTRY_HEAT_TRANSFER_FRACTION", allow_negative_numbers = true)]
    heat_transfer_fraction: Option<f64>,

    /// Tile temperature as a fraction of its maximum, in (0,1] [default: 0.8].
    #[arg(long, env = "REENTRY_TILE_TEMPERATURE_FRACTION", allow_negative_numbers = true)]
    tile_temperature_fraction: Option<f64>,

    /// Latent heat of vaporization, J/kg [default: 2260000].
    #[arg(long, env = "REENTRY_LATENT_HEAT_OF_VAPORIZATION", allow_negative_numbers = true)]
    latent_heat_of_vaporization: Option<f64>,

    /// Payload per resupply launch, tonnes [default: 150].
    #[arg(long, env = "REENTRY_PAYLOAD_PER_FLIGHT", allow_negative_numbers = true)]
    payload_per_flight: Option<f64>,

    /// Propellant cost per resupply launch, currency units [default: 500000].
    #[arg(long, env = "REENTRY_PROPELLANT_COST_PER_FLIGHT", allow_negative_numbers = true)]
    propellant_cost_per_flight: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl Cli {
    /// Resolves the final parameters from defaults, the config file, and overrides.
    fn parameters(&self) -> Result<Parameters> {
        let base: Parameters = match &self.config {
            Some(path) => {
                let contents = fs::read_to_string(path)
                    .with_context(|| format!("failed to read config file {}", path.display()))?;
                serde_json::from_str(&contents)
                    .with_context(|| format!("failed to parse config file {}", path.display()))?
            }
            None => Parameters::default(),
        };
        Ok(self.apply_overrides(base))
    }

    fn apply_overrides(&self, base: Parameters) -> Parameters {
        Parameters {
            vehicle_mass: self.vehicle_mass.unwrap_or(base.vehicle_mass),
            orbital_velocity: self.orbital_velocity.unwrap_or(base.orbital_velocity),
            max_heating_fraction: self
                .max_heating_fraction
                .unwrap_or(base.max_heating_fraction),
            heat_transfer_fraction: self
                .heat_transfer_fraction
                .unwrap_or(base.heat_transfer_fraction),
            tile_temperature_fraction: self
                .tile_temperature_fraction
                .unwrap_or(base.tile_temperature_fraction),
            latent_heat_of_vaporization: self
                .latent_heat_of_vaporization
                .unwrap_or(base.latent_heat_of_vaporization),
            payload_per_flight: self.payload_per_flight.unwrap_or(base.payload_per_flight),
            propellant_cost_per_flight: self
                .propellant_cost_per_flight
                .unwrap_or(base.propellant_cost_per_flight),
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let params = cli.parameters()?;
    debug!(?params, "resolved parameters");

    let config = Config::new(&params)?;
    let results = ReentryCooling.call(&config)?;
    debug!(?results, "computed results");

    if results.is_degenerate() {
        warn!("no water required; reentries per launch is unbounded");
    }

    let output = match cli.format {
        Format::Text => report::render_text(&config, &results),
        Format::Json => report::render_json(&results).context("failed to serialize results")? + "\n",
    };
    print!("{output}");

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
