#![deny(missing_docs)]
#![deny(clippy::all)]
//! Harmonic tide prediction core.
//!
//! Given a station's stored harmonic constants and an instant in UTC, this
//! crate produces tide water level, its time derivative, the next high/low
//! extremum, a uniformly sampled height curve over an interval, and a
//! precomputed multi-day extrema cache that other subsystems can query
//! cheaply.
//!
//! Five cooperating pieces, leaves first: [`constituents`] (the fixed
//! catalog of partial tides), [`astronomy`] (pure astronomical-argument
//! functions), [`harmonic`] (station height/rate/extrema synthesis),
//! [`cache`] (a concurrency-safe rolling extrema window), and [`station`]
//! (the provider contract the harmonic engine consumes).
//!
//! Persistent station storage, user preferences, on-device UI, the
//! data-ingestion pipeline, location services, and packaging all live
//! outside this crate; it performs no network I/O and does not fit harmonic
//! constants, it only evaluates them.

pub mod astronomy;
pub mod cache;
pub mod config;
pub mod constituents;
pub mod error;
pub mod harmonic;
pub mod station;
pub mod types;

pub use cache::ExtremaCache;
pub use config::EngineConfig;
pub use error::EngineError;
pub use harmonic::HarmonicEngine;
pub use types::{Direction, ExtremumType, TideExtremum, TideHeight};
