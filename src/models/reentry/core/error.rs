use std::fmt;

use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Identifies one reentry input parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    VehicleMass,
    OrbitalVelocity,
    MaxHeatingFraction,
    HeatTransferFraction,
    TileTemperatureFraction,
    LatentHeatOfVaporization,
    PayloadPerFlight,
    PropellantCostPerFlight,
}

impl Parameter {
    /// Field name as used in configuration files and reports.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::VehicleMass => "vehicle_mass",
            Self::OrbitalVelocity => "orbital_velocity",
            Self::MaxHeatingFraction => "max_heating_fraction",
            Self::HeatTransferFraction => "heat_transfer_fraction",
            Self::TileTemperatureFraction => "tile_temperature_fraction",
            Self::LatentHeatOfVaporization => "latent_heat_of_vaporization",
            Self::PayloadPerFlight => "payload_per_flight",
            Self::PropellantCostPerFlight => "propellant_cost_per_flight",
        }
    }

    /// Human-readable form of the constraint this parameter must satisfy.
    #[must_use]
    pub fn requirement(self) -> &'static str {
        match self {
            Self::VehicleMass
            | Self::OrbitalVelocity
            | Self::LatentHeatOfVaporization
            | Self::PayloadPerFlight => "positive",
            Self::MaxHeatingFraction | Self::HeatTransferFraction | Self::TileTemperatureFraction => {
                "in (0,1]"
            }
            Self::PropellantCostPerFlight => "non-negative",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single parameter that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("{parameter} must be {}, got {value}", requirement(.parameter, .reason))]
pub struct Violation {
    /// The offending parameter.
    pub parameter: Parameter,

    /// The rejected raw value.
    pub value: f64,

    /// Which side of the constraint was violated.
    pub reason: ConstraintError,
}

/// Errors that can occur while validating reentry inputs.
///
/// Every violated constraint is collected, so a single error reports all
/// problems with a configuration at once.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid configuration: {}", join(.violations))]
pub struct ConfigError {
    /// Violations in parameter declaration order. Never empty.
    pub violations: Vec<Violation>,
}

/// The constraint that was broken, in words.
fn requirement(parameter: &Parameter, reason: &ConstraintError) -> &'static str {
    match reason {
        ConstraintError::NotFinite => "finite",
        _ => parameter.requirement(),
    }
}

/// Errors that can occur while evaluating a valid configuration.
///
/// Inputs that are individually valid can still be large enough that a
/// derived quantity overflows. The result is rejected rather than reported
/// as infinity or `NaN`.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("{quantity} must be finite, got {value}; inputs are too large to evaluate")]
pub struct ComputeError {
    /// Name of the derived quantity that overflowed.
    pub quantity: &'static str,

    /// The non-finite value in joules, tonnes, or currency units.
    pub value: f64,
}

fn join(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violation_names_parameter_and_constraint() {
        let violation = Violation {
            parameter: Parameter::TileTemperatureFraction,
            value: 1.5,
            reason: ConstraintError::AboveMaximum,
        };

        assert_eq!(
            violation.to_string(),
            "tile_temperature_fraction must be in (0,1], got 1.5"
        );
    }

    #[test]
    fn config_error_lists_every_violation() {
        let err = ConfigError {
            violations: vec![
                Violation {
                    parameter: Parameter::VehicleMass,
                    value: -1.0,
                    reason: ConstraintError::Negative,
                },
                Violation {
                    parameter: Parameter::PropellantCostPerFlight,
                    value: -5.0,
                    reason: ConstraintError::Negative,
                },
            ],
        };

        assert_eq!(
            err.to_string(),
            "invalid configuration: vehicle_mass must be positive, got -1; \
             propellant_cost_per_flight must be non-negative, got -5"
        );
    }

    #[test]
    fn infinite_value_reports_finiteness() {
        let violation = Violation {
            parameter: Parameter::PayloadPerFlight,
            value: f64::INFINITY,
            reason: ConstraintError::NotFinite,
        };

        assert_eq!(violation.to_string(), "payload_per_flight must be finite, got inf");
    }
}
