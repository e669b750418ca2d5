//! Results of a reentry cooling calculation.

use uom::si::f64::{Energy, Mass, Ratio};

use super::ReentriesPerLaunch;

/// Energy budget, coolant mass, and resupply logistics for one reentry.
///
/// Fields appear in the order they are derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Results {
    /// Kinetic energy at orbital velocity, `0.5 * m * v²`.
    pub kinetic_energy: Energy,

    /// Kinetic energy dissipated during the peak heating phase.
    pub max_heating_energy: Energy,

    /// Heat reaching the vehicle during peak heating.
    pub heat_load: Energy,

    /// Share of the heat load that must be carried away by vaporizing water.
    ///
    /// The tiles radiate the remainder, which scales as the fourth power of
    /// their temperature fraction.
    pub absorbed_fraction: Ratio,

    /// Energy that must go into vaporizing water.
    pub vaporization_energy: Energy,

    /// Water mass needed per reentry.
    pub water_mass: Mass,

    /// Launches needed to deliver the water for one reentry.
    pub flights_required: u64,

    /// Propellant cost of those launches, currency units.
    pub total_cost: f64,

    /// Reentries one launch's payload of water can cool.
    pub reentries_per_launch: ReentriesPerLaunch,
}

impl Results {
    /// Returns `true` when no water is needed and the reentries-per-launch
    /// figure has no finite bound.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.reentries_per_launch == ReentriesPerLaunch::Unbounded
    }
}
