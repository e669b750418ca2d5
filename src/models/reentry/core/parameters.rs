use serde::{Deserialize, Serialize};

/// Raw, unvalidated reentry inputs in engineering units.
///
/// This is the boundary type for defaults, configuration files, and command
/// line overrides. Convert it to a [`Config`](super::Config) with
/// [`Config::new`](super::Config::new) before computing anything.
///
/// Deserializing accepts any subset of the fields; missing fields take their
/// default values and unknown fields are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Parameters {
    /// Vehicle mass, kg.
    pub vehicle_mass: f64,

    /// Orbital velocity at entry interface, m/s.
    pub orbital_velocity: f64,

    /// Share of the total kinetic energy dissipated during peak heating.
    pub max_heating_fraction: f64,

    /// Share of the peak heating energy that reaches the vehicle as heat.
    pub heat_transfer_fraction: f64,

    /// Tile temperature as a fraction of its maximum tolerable temperature.
    pub tile_temperature_fraction: f64,

    /// Latent heat of vaporization of the coolant, J/kg.
    pub latent_heat_of_vaporization: f64,

    /// Payload delivered to orbit per resupply launch, tonnes.
    pub payload_per_flight: f64,

    /// Propellant cost of one resupply launch, currency units.
    pub propellant_cost_per_flight: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            vehicle_mass: 120_000.0,
            orbital_velocity: 7_800.0,
            max_heating_fraction: 0.3,
            heat_transfer_fraction: 0.01,
            tile_temperature_fraction: 0.8,
            latent_heat_of_vaporization: 2_260_000.0,
            payload_per_flight: 150.0,
            propellant_cost_per_flight: 500_000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let params: Parameters =
            serde_json::from_str(r#"{ "vehicle_mass": 100000.0, "payload_per_flight": 100 }"#)
                .unwrap();

        assert_eq!(
            params,
            Parameters {
                vehicle_mass: 100_000.0,
                payload_per_flight: 100.0,
                ..Parameters::default()
            }
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = serde_json::from_str::<Parameters>(r#"{ "vehicle_mas": 1.0 }"#).unwrap_err();
        assert!(err.to_string().contains("vehicle_mas"));
    }
}
