use thiserror::Error;

pub type CloudResourceResult<T> = Result<T, CloudResourceError>;

/// Errors raised while loading resource documents.
///
/// Estimation and validation never fail; these only cover the parse
/// boundary where JSON produced by the UI enters the crate.
#[derive(Debug, Error)]
pub enum CloudResourceError {
    #[error("Invalid resource document: {0}")]
    InvalidDocument(#[from] serde_json::Error),

    #[error("Invalid attributes for resource type '{resource_type}': {details}")]
    InvalidAttributes {
        resource_type: String,
        details: String,
    },
}
