use std::fmt;

/// Number of reentries one resupply launch can cool.
///
/// When no water is needed the ratio `payload / water` has no finite bound,
/// so that case is a distinct variant rather than an infinite or NaN count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReentriesPerLaunch {
    /// At most this many reentries per launch.
    Bounded(u64),
    /// No water is consumed, so any number of reentries is supported.
    Unbounded,
}

impl ReentriesPerLaunch {
    /// Largest whole number of water loads that fit in one payload.
    ///
    /// Both masses are in tonnes. Returns [`ReentriesPerLaunch::Unbounded`]
    /// when `water_t` is zero.
    #[must_use]
    pub fn from_tonnes(payload_t: f64, water_t: f64) -> Self {
        if water_t == 0.0 {
            return Self::Unbounded;
        }
        Self::Bounded(whole_count((payload_t / water_t).floor()))
    }

    /// Returns the finite bound, or `None` when unbounded.
    #[must_use]
    pub fn bound(self) -> Option<u64> {
        match self {
            Self::Bounded(n) => Some(n),
            Self::Unbounded => None,
        }
    }
}

impl fmt::Display for ReentriesPerLaunch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bounded(n) => write!(f, "{n}"),
            Self::Unbounded => f.write_str("unbounded (no water required)"),
        }
    }
}

/// Converts an already-rounded, non-negative count to an integer.
///
/// Values beyond `u64::MAX` saturate.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(super) fn whole_count(rounded: f64) -> u64 {
    rounded as u64
}
