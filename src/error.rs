//! Error types surfaced across the crate's fallible boundaries.

use thiserror::Error;

/// The two "shape-level" failures the harmonic engine (and, transitively,
/// the extrema cache) surface. All other anomalous inputs (empty intervals,
/// inverted ranges, Newton non-convergence) collapse to `None`/empty
/// results rather than an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The station provider has no constants for the resolved reference id.
    #[error("no constants found for station {station_id:?}")]
    UnknownStation {
        /// The station id that failed to resolve.
        station_id: String,
    },
    /// The station exists but its constituent list is empty.
    #[error("station {station_id:?} has no harmonic constituents")]
    EmptyConstants {
        /// The station id with an empty constituent set.
        station_id: String,
    },
}

/// Alias used by the extrema cache, which can only fail the way the
/// harmonic engine fails when a miss forces it to compute.
pub type CacheError = EngineError;
