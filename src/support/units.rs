//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (mass, velocity, energy).
//! This module provides quantities that are useful for modeling but aren't
//! named in [`uom`].

mod quantities;

pub use quantities::SpecificLatentHeat;
