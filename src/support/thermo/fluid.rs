//! Canonical fluid identifiers.
//!
//! A fluid type names a substance; each model defines how that name is
//! interpreted via trait implementations (e.g., ideal-gas constants for
//! [`IdealGas`](crate::support::thermo::model::IdealGas) or transport
//! correlation constants for
//! [`Sutherland`](crate::support::thermo::model::Sutherland)).

mod air;
mod water;

pub use air::Air;
pub use water::Water;
