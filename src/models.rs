//! Public models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules (currently just
//! [`hvac`]) so related models can share domain-level support code as more
//! are added.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core`
//! submodule where the actual computation and domain logic lives. The
//! [`twine_core::Model`] implementation is a thin adapter that delegates to
//! the model-specific core API; the core's input, output, and error types
//! are re-exported so the model can also be driven directly.

pub mod hvac;
