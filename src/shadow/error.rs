//! Error types for box-shadow parsing.

/// Result type alias for shadow parsing
pub type ShadowResult<T> = Result<T, ShadowError>;

/// Reasons a declaration cannot be reduced to a single shadow geometry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShadowError {
    /// More than one color token was found, so the value most likely lists
    /// several comma-separated shadow layers.
    #[error("box-shadow has {color_indicators} color tokens; multiple shadow layers are not supported")]
    MultipleShadows {
        /// Number of `rgb` / `#` occurrences found
        color_indicators: usize,
    },
}
