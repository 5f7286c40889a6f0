//! Thermodynamic and transport property modeling for moist-air calculations.
//!
//! The psychrometric engine never embeds property data directly; it queries
//! injected providers through the [`capability`] traits. This module supplies
//! the shared vocabulary — a [`State`] tagged by a [`fluid`] marker, the
//! [`PropertyError`] failure type — and the in-crate [`model`]
//! implementations used by default.

mod error;
mod state;

pub mod capability;
pub mod fluid;
pub mod model;

pub use error::PropertyError;
pub use state::State;
