//! # Reentry Cooling
//!
//! Closed-form estimate of the water a spacecraft must boil off during
//! atmospheric reentry to keep its heat shield tiles below a target
//! temperature, plus the launches and cost needed to resupply that water.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain [`twine_core::Model`] implementations.
//! - [`support`]: Numeric constraints and unit extensions used by models.
//! - [`report`]: Text and JSON rendering of results.
//!
//! ## Pipeline
//!
//! Raw [`Parameters`](models::reentry::Parameters) are validated into a
//! [`Config`](models::reentry::Config), which
//! [`ReentryCooling`](models::reentry::ReentryCooling) turns into
//! [`Results`](models::reentry::Results). A zero water requirement is not an
//! error: it shows up as an unbounded
//! [`ReentriesPerLaunch`](models::reentry::ReentriesPerLaunch).

pub mod models;
pub mod report;
pub mod support;
