//! Thermophysical property models.

pub mod ideal_gas;
pub mod sutherland;

pub(crate) mod saturation;

pub use ideal_gas::IdealGas;
pub use sutherland::Sutherland;
