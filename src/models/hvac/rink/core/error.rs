use thiserror::Error;

use crate::support::convection::CorrelationError;
use crate::support::moist_air::MoistAirError;
use crate::support::thermo::PropertyError;

/// Errors that can occur while assembling a game-day energy balance.
///
/// Invalid intermediate states fail here instead of propagating NaN into
/// the load and cost figures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BalanceError {
    /// A moist-air stream could not be resolved to a physical state.
    #[error("failed to resolve the {stream} air stream")]
    Stream {
        /// Which stream failed ("inlet" or "outlet").
        stream: &'static str,

        /// Underlying psychrometric failure.
        #[source]
        source: MoistAirError,
    },

    /// A property model failed.
    #[error("property model failed: {context}")]
    Property {
        /// Operation context for the failure.
        context: String,

        /// Underlying property model error.
        #[source]
        source: PropertyError,
    },

    /// The ice-sheet convection correlation was queried outside its
    /// validity envelope.
    #[error("ice sheet convection correlation failed")]
    Correlation(#[from] CorrelationError),
}

impl BalanceError {
    /// Creates a property failure error with context.
    pub(super) fn property(context: impl Into<String>, source: PropertyError) -> Self {
        Self::Property {
            context: context.into(),
            source,
        }
    }
}
