//! # Rink Models
//!
//! Psychrometric and heat-balance models for ice-arena HVAC analysis.
//!
//! The crate answers one question: what does it cost to hold an arena at
//! its temperature and humidity setpoint for the length of a game? Getting
//! there takes the moist-air enthalpy carried by the supply flow, the
//! crowd's sensible and latent gains, and the convective loss from the air
//! to the ice sheet — all computed from typed physical quantities over
//! injected property models.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain models, led by the game-day balance in
//!   [`models::hvac::rink`].
//! - [`support`]: Supporting utilities used by models — property modeling,
//!   psychrometrics, convection correlations, constrained values, and unit
//!   extensions.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code follows a natural progression as needs emerge: it starts in
//! a model's internal `core` module, moves to a domain-level support module
//! when useful across models in a domain, and lands in [`support`] once it
//! is useful across domains.

pub mod models;
pub mod support;
