//! Shared value types returned by the harmonic engine and extrema cache.

use hifitime::Epoch;
use uom::si::f64::Length;

/// Instantaneous tide state: height, its rate of change, and a coarse
/// rising/falling/slack classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TideHeight {
    /// The UTC instant this sample describes.
    pub time: Epoch,
    /// Predicted water level, in the station's own length unit.
    pub height: Length,
    /// Time derivative of height, in length-units per hour. `uom` has no
    /// built-in "length per hour" unit, so this stays a plain `f64` with the
    /// unit documented here, the same compromise the astronomy engine makes
    /// for angular speed.
    pub rate: f64,
    /// Rising/falling/slack classification, from `|rate| < slack_threshold`.
    pub direction: Direction,
}

/// Local trend of the height function at an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Height is increasing.
    Rising,
    /// Height is decreasing.
    Falling,
    /// `|rate|` is below the configured slack threshold, independent of
    /// sign.
    Slack,
}

/// A local extremum (high or low water) of the height function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TideExtremum {
    /// The UTC instant of the extremum.
    pub time: Epoch,
    /// Height at the extremum.
    pub height: Length,
    /// Whether this is a high or low extremum.
    pub kind: ExtremumType,
}

/// Discriminates a [`TideExtremum`] as a high or low.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtremumType {
    /// Local maximum of height.
    High,
    /// Local minimum of height.
    Low,
}

impl ExtremumType {
    /// The other extremum type (high <-> low), used when alternating
    /// search direction in [`crate::harmonic::HarmonicEngine::extrema`].
    pub fn opposite(self) -> Self {
        match self {
            ExtremumType::High => ExtremumType::Low,
            ExtremumType::Low => ExtremumType::High,
        }
    }
}
