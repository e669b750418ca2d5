//! Reentry cooling model.
//!
//! Sizes the water a spacecraft must vaporize during peak reentry heating to
//! hold its thermal protection tiles at a target fraction of their maximum
//! temperature, and the resupply launches needed to deliver that water.
//!
//! [`ReentryCooling`] is the [`twine_core::Model`] adapter. The calculation
//! itself lives in the internal `core` module.
//!
//! # Example
//!
//! ```
//! use reentry_cooling::models::reentry::{Config, Parameters, ReentriesPerLaunch, ReentryCooling};
//! use twine_core::Model;
//!
//! let config = Config::new(&Parameters::default()).unwrap();
//! let results = ReentryCooling.call(&config).unwrap();
//!
//! assert_eq!(results.flights_required, 1);
//! assert_eq!(results.reentries_per_launch, ReentriesPerLaunch::Bounded(52));
//! ```

mod core;

pub use self::core::{
    ComputeError, Config, ConfigError, Parameter, Parameters, ReentriesPerLaunch, Results,
    Violation,
};

use twine_core::Model;

/// Water-cooled reentry model.
///
/// The model has no state. Inputs are validated when building its [`Config`],
/// so a call only fails when a derived quantity overflows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReentryCooling;

impl ReentryCooling {
    /// Computes the cooling and logistics results for a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ComputeError`] if a derived quantity is not finite.
    pub fn compute(config: &Config) -> Result<Results, ComputeError> {
        self::core::compute(config)
    }
}

impl Model for ReentryCooling {
    type Input = Config;
    type Output = Results;
    type Error = ComputeError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Self::compute(input)
    }
}
