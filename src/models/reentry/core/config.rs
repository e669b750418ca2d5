use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{Mass, Ratio, Velocity},
    mass::{kilogram, ton},
    ratio::ratio,
    velocity::meter_per_second,
};

use crate::support::{
    constraint::{
        Constrained, Constraint, ConstraintError, NonNegative, StrictlyPositive,
        UnitIntervalLowerOpen,
    },
    units::SpecificLatentHeat,
};

use super::{ConfigError, Parameter, Parameters, Violation};

/// Validated reentry inputs.
///
/// Every field carries its constraint in its type, so a `Config` can only
/// exist once all inputs have been checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Vehicle mass.
    pub vehicle_mass: Constrained<Mass, StrictlyPositive>,

    /// Orbital velocity at entry interface.
    pub orbital_velocity: Constrained<Velocity, StrictlyPositive>,

    /// Share of the total kinetic energy dissipated during peak heating.
    pub max_heating_fraction: Constrained<Ratio, UnitIntervalLowerOpen>,

    /// Share of the peak heating energy that reaches the vehicle as heat.
    pub heat_transfer_fraction: Constrained<Ratio, UnitIntervalLowerOpen>,

    /// Tile temperature as a fraction of its maximum tolerable temperature.
    pub tile_temperature_fraction: Constrained<Ratio, UnitIntervalLowerOpen>,

    /// Latent heat of vaporization of the coolant.
    pub latent_heat: Constrained<SpecificLatentHeat, StrictlyPositive>,

    /// Payload delivered to orbit per resupply launch.
    pub payload_per_flight: Constrained<Mass, StrictlyPositive>,

    /// Propellant cost of one resupply launch, currency units.
    pub propellant_cost_per_flight: Constrained<f64, NonNegative>,
}

impl Config {
    /// Validates raw parameters.
    ///
    /// All parameters are checked before returning, so the error lists every
    /// violated constraint rather than only the first one.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if any parameter violates its constraint.
    pub fn new(params: &Parameters) -> Result<Self, ConfigError> {
        let mut violations = Vec::new();
        let v = &mut violations;

        let vehicle_mass = check::<_, StrictlyPositive>(
            v,
            Parameter::VehicleMass,
            params.vehicle_mass,
            Mass::new::<kilogram>,
        );
        let orbital_velocity = check::<_, StrictlyPositive>(
            v,
            Parameter::OrbitalVelocity,
            params.orbital_velocity,
            Velocity::new::<meter_per_second>,
        );
        let max_heating_fraction = check::<_, UnitIntervalLowerOpen>(
            v,
            Parameter::MaxHeatingFraction,
            params.max_heating_fraction,
            Ratio::new::<ratio>,
        );
        let heat_transfer_fraction = check::<_, UnitIntervalLowerOpen>(
            v,
            Parameter::HeatTransferFraction,
            params.heat_transfer_fraction,
            Ratio::new::<ratio>,
        );
        let tile_temperature_fraction = check::<_, UnitIntervalLowerOpen>(
            v,
            Parameter::TileTemperatureFraction,
            params.tile_temperature_fraction,
            Ratio::new::<ratio>,
        );
        let latent_heat = check::<_, StrictlyPositive>(
            v,
            Parameter::LatentHeatOfVaporization,
            params.latent_heat_of_vaporization,
            SpecificLatentHeat::new::<joule_per_kilogram>,
        );
        let payload_per_flight = check::<_, StrictlyPositive>(
            v,
            Parameter::PayloadPerFlight,
            params.payload_per_flight,
            Mass::new::<ton>,
        );
        let propellant_cost_per_flight = check::<_, NonNegative>(
            v,
            Parameter::PropellantCostPerFlight,
            params.propellant_cost_per_flight,
            |cost| cost,
        );

        let (
            Some(vehicle_mass),
            Some(orbital_velocity),
            Some(max_heating_fraction),
            Some(heat_transfer_fraction),
            Some(tile_temperature_fraction),
            Some(latent_heat),
            Some(payload_per_flight),
            Some(propellant_cost_per_flight),
        ) = (
            vehicle_mass,
            orbital_velocity,
            max_heating_fraction,
            heat_transfer_fraction,
            tile_temperature_fraction,
            latent_heat,
            payload_per_flight,
            propellant_cost_per_flight,
        )
        else {
            return Err(ConfigError { violations });
        };

        Ok(Self {
            vehicle_mass,
            orbital_velocity,
            max_heating_fraction,
            heat_transfer_fraction,
            tile_temperature_fraction,
            latent_heat,
            payload_per_flight,
            propellant_cost_per_flight,
        })
    }
}

/// Checks one raw value, recording a violation on failure.
///
/// Infinite values are rejected before the constraint runs; `NaN` is left
/// to the constraint, which reports it as not a number.
fn check<T, C: Constraint<T>>(
    violations: &mut Vec<Violation>,
    parameter: Parameter,
    raw: f64,
    to_quantity: impl FnOnce(f64) -> T,
) -> Option<Constrained<T, C>> {
    let checked = if raw.is_infinite() {
        Err(ConstraintError::NotFinite)
    } else {
        Constrained::<T, C>::new(to_quantity(raw))
    };
    match checked {
        Ok(value) => Some(value),
        Err(reason) => {
            violations.push(Violation {
                parameter,
                value: raw,
                reason,
            });
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Config::new(&Parameters::default()).is_ok());
    }

    #[test]
    fn payload_is_stored_in_tonnes() {
        let config = Config::new(&Parameters::default()).unwrap();
        assert_eq!(config.payload_per_flight.as_ref().get::<kilogram>(), 150_000.0);
    }

    #[test]
    fn tile_fraction_above_one_is_rejected() {
        let params = Parameters {
            tile_temperature_fraction: 1.5,
            ..Parameters::default()
        };

        let err = Config::new(&params).unwrap_err();
        assert_eq!(
            err.violations,
            vec![Violation {
                parameter: Parameter::TileTemperatureFraction,
                value: 1.5,
                reason: ConstraintError::AboveMaximum,
            }]
        );
        assert!(
            err.to_string()
                .contains("tile_temperature_fraction must be in (0,1], got 1.5")
        );
    }

    #[test]
    fn fractions_are_not_clamped() {
        for bad in [0.0, -0.1, 1.000_001] {
            let params = Parameters {
                max_heating_fraction: bad,
                heat_transfer_fraction: bad,
                tile_temperature_fraction: bad,
                ..Parameters::default()
            };
            let err = Config::new(&params).unwrap_err();
            assert_eq!(err.violations.len(), 3, "value {bad}");
        }
    }

    #[test]
    fn fraction_of_exactly_one_is_accepted() {
        let params = Parameters {
            max_heating_fraction: 1.0,
            heat_transfer_fraction: 1.0,
            tile_temperature_fraction: 1.0,
            ..Parameters::default()
        };
        assert!(Config::new(&params).is_ok());
    }

    #[test]
    fn collects_all_violations_in_order() {
        let params = Parameters {
            vehicle_mass: 0.0,
            orbital_velocity: -7_800.0,
            max_heating_fraction: 2.0,
            heat_transfer_fraction: 0.0,
            tile_temperature_fraction: f64::NAN,
            latent_heat_of_vaporization: -1.0,
            payload_per_flight: 0.0,
            propellant_cost_per_flight: -1.0,
        };

        let err = Config::new(&params).unwrap_err();
        let reasons: Vec<_> = err
            .violations
            .iter()
            .map(|v| (v.parameter, v.reason))
            .collect();

        assert_eq!(
            reasons,
            vec![
                (Parameter::VehicleMass, ConstraintError::Zero),
                (Parameter::OrbitalVelocity, ConstraintError::Negative),
                (Parameter::MaxHeatingFraction, ConstraintError::AboveMaximum),
                (Parameter::HeatTransferFraction, ConstraintError::BelowMinimum),
                (Parameter::TileTemperatureFraction, ConstraintError::NotANumber),
                (Parameter::LatentHeatOfVaporization, ConstraintError::Negative),
                (Parameter::PayloadPerFlight, ConstraintError::Zero),
                (Parameter::PropellantCostPerFlight, ConstraintError::Negative),
            ]
        );
    }

    #[test]
    fn free_launches_are_allowed() {
        let params = Parameters {
            propellant_cost_per_flight: 0.0,
            ..Parameters::default()
        };
        assert!(Config::new(&params).is_ok());
    }

    #[test]
    fn infinite_values_are_rejected() {
        let params = Parameters {
            vehicle_mass: f64::INFINITY,
            tile_temperature_fraction: 1.0,
            propellant_cost_per_flight: f64::INFINITY,
            ..Parameters::default()
        };

        let err = Config::new(&params).unwrap_err();
        assert_eq!(
            err.violations,
            vec![
                Violation {
                    parameter: Parameter::VehicleMass,
                    value: f64::INFINITY,
                    reason: ConstraintError::NotFinite,
                },
                Violation {
                    parameter: Parameter::PropellantCostPerFlight,
                    value: f64::INFINITY,
                    reason: ConstraintError::NotFinite,
                },
            ]
        );
        assert!(err.to_string().contains("vehicle_mass must be finite, got inf"));
    }

    #[test]
    fn negative_infinity_is_not_finite() {
        let params = Parameters {
            orbital_velocity: f64::NEG_INFINITY,
            ..Parameters::default()
        };

        let err = Config::new(&params).unwrap_err();
        assert_eq!(err.violations[0].reason, ConstraintError::NotFinite);
        assert_eq!(
            err.violations[0].to_string(),
            "orbital_velocity must be finite, got -inf"
        );
    }
}
