use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading a catalog that exists but cannot be understood.
///
/// A catalog file that cannot be opened is not an error: callers get an
/// empty result or a not-found lookup instead.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The document is not valid JSON, or its top level is not an object
    #[error("malformed catalog {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An entity record is missing a base stat or has ill-typed variants
    #[error("malformed catalog entry '{entity}': {source}")]
    MalformedEntity {
        entity: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised by the stat calculator
#[derive(Debug, Error)]
pub enum StatDerivationError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The requested stat is not one of the six catalog stat keys
    #[error("unknown stat '{0}'")]
    UnknownStat(String),
}

/// Type alias for Results using CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Type alias for Results using StatDerivationError
pub type StatResult<T> = Result<T, StatDerivationError>;
