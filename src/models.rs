//! Public models.
//!
//! Each model lives in its own module and contains an internal `core`
//! submodule where the computation and domain logic live. The `core` module
//! is an implementation detail; its public types are re-exported by the
//! model module.
//!
//! The [`twine_core::Model`] implementation is a thin adapter that delegates
//! to the core API.

pub mod reentry;
