use thiserror::Error;

/// Result type for pricing operations
pub type PricingResult<T> = Result<T, PricingError>;

/// Errors raised while loading pricing data
///
/// Lookups and cost calculations never fail; a missing rate resolves to
/// [`crate::PricingRate::fallback`].
#[derive(Debug, Error)]
pub enum PricingError {
    /// Pricing table file could not be read
    #[error("Failed to read pricing table {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Pricing table is not valid JSON of the expected shape
    #[error("Invalid pricing table: {0}")]
    Parse(#[from] serde_json::Error),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
