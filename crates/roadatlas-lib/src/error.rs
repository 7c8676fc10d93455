use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the Roadatlas library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Places data source could not be located at the resolved path.
    #[error("place file not found: {path}")]
    PlaceFileNotFound { path: PathBuf },

    /// Roads data source could not be located at the resolved path.
    #[error("road file not found: {path}")]
    RoadFileNotFound { path: PathBuf },

    /// Raised when a places record violates the `<id>,<name>` layout.
    #[error("invalid place record in {path} on line {line}: {content:?}")]
    MalformedPlace {
        path: PathBuf,
        line: usize,
        content: String,
    },

    /// Raised when a roads record violates the `<from>,<to>,<miles>,<road>` layout.
    #[error("invalid road record in {path} on line {line}: {content:?}")]
    MalformedRoad {
        path: PathBuf,
        line: usize,
        content: String,
    },

    /// Raised when a place name could not be found in the catalog.
    #[error("unknown place name: {name}. Names must match the places file exactly")]
    UnknownPlace { name: String },

    /// Raised when an empty place name is supplied for resolution.
    #[error("empty place name provided")]
    EmptyPlaceName,

    /// Raised when no route could be found between two places.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
