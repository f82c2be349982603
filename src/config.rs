//! Runtime-overridable numeric thresholds for the harmonic engine and the
//! extrema cache.

use std::env;
use std::error::Error;

/// Numeric thresholds and search parameters shared by
/// [`crate::harmonic::HarmonicEngine`] and [`crate::cache::ExtremaCache`].
///
/// Overridable via environment variables following the same
/// `from_env`-falls-back-to-`Default` shape used elsewhere in this crate's
/// ancestry: any missing or unparseable variable causes the whole call to
/// fall back to [`Default`], rather than mixing defaults and overrides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Rate magnitude, in length-units per hour, below which direction is
    /// classified as slack rather than rising/falling. Default `0.05`.
    pub slack_threshold: f64,
    /// Newton-iteration convergence tolerance on rate, in length-units per
    /// hour. Default `1e-3`.
    pub newton_tolerance: f64,
    /// Maximum Newton iterations before giving up on an extremum
    /// refinement. Default `20`.
    pub newton_max_iterations: u32,
    /// Horizon, in hours, beyond which `next_extremum` gives up and returns
    /// `None`. Default `30.0`.
    pub extremum_search_horizon_hours: f64,
    /// Width, in days, of the extrema cache's rolling window. Default `7`.
    pub cache_window_days: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            slack_threshold: 0.05,
            newton_tolerance: 1e-3,
            newton_max_iterations: 20,
            extremum_search_horizon_hours: 30.0,
            cache_window_days: 7,
        }
    }
}

impl EngineConfig {
    /// Constructs a new `EngineConfig`. The associated environment
    /// variables are examined first; if any is absent or fails to parse, a
    /// config with default values is returned instead.
    pub fn init() -> Self {
        Self::from_env().unwrap_or_default()
    }

    fn from_env() -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            slack_threshold: env::var("TIDECORE_SLACK_THRESHOLD")?.parse()?,
            newton_tolerance: env::var("TIDECORE_NEWTON_TOLERANCE")?.parse()?,
            newton_max_iterations: env::var("TIDECORE_NEWTON_MAX_ITERATIONS")?.parse()?,
            extremum_search_horizon_hours: env::var("TIDECORE_SEARCH_HORIZON_HOURS")?.parse()?,
            cache_window_days: env::var("TIDECORE_CACHE_WINDOW_DAYS")?.parse()?,
        })
    }
}
