use thiserror::Error;

/// Errors that may occur when evaluating thermophysical properties.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The input state is outside the model's valid domain.
    ///
    /// For example, a saturation pressure queried below the sublimation
    /// curve's floor, or a transport property outside the correlation's
    /// fitted temperature range.
    #[error("out of domain: {context}")]
    OutOfDomain { context: String },

    /// The provided state is invalid or inconsistent.
    ///
    /// For example, a non-positive absolute pressure.
    #[error("invalid state: {context}")]
    InvalidState { context: String },

    /// The calculation failed due to a numerical or internal error.
    #[error("calculation error: {context}")]
    Calculation { context: String },
}
