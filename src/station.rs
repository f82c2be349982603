//! The station provider contract: the external collaborator the harmonic
//! engine consumes to resolve a station id to its kind, constants, and any
//! subordinate offset record.
//!
//! Persistent station storage lives outside this crate; this module
//! defines only the trait the harmonic engine depends on, plus an
//! in-memory test double used by this crate's own tests and benchmarks in
//! place of the excluded persistent-storage subsystem.

use std::collections::HashMap;

use uom::si::f64::{Angle, Length};

/// One named constituent's amplitude and GMT-referenced phase at a station.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationConstituent {
    /// Catalog name, matched case-sensitively; see
    /// [`crate::constituents::lookup`]. Names absent from the catalog are
    /// skipped by the harmonic engine rather than treated as an error.
    pub name: &'static str,
    /// Amplitude, in the station's own length unit.
    pub amplitude: Length,
    /// GMT/UTC-referenced phase kappa.
    pub phase: Angle,
}

/// Whether a station predicts directly from its own constituents, or
/// derives from a reference station via a [`SubordinateOffset`].
#[derive(Debug, Clone, PartialEq)]
pub enum StationKind {
    /// Predicts directly from its own harmonic constants.
    Reference,
    /// Derives from `reference_id`'s prediction via `offset`.
    Subordinate {
        /// The reference station this subordinate derives from.
        reference_id: String,
        /// The time/height offset record relating this station to its
        /// reference.
        offset: SubordinateOffset,
    },
}

/// A reference station's datum offset and constituent list.
#[derive(Debug, Clone, PartialEq)]
pub struct StationConstants {
    /// Datum offset Z0: elevation of MSL above the station's reference
    /// datum, added as a constant to the harmonic sum.
    pub datum_offset: Length,
    /// Per-constituent amplitude/phase pairs, in no particular order; the
    /// harmonic engine iterates this list and skips any name the
    /// constituent catalog does not recognize.
    pub constituents: Vec<StationConstituent>,
}

/// Time and height offsets relating a subordinate station to its reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubordinateOffset {
    /// High-water time offset, in minutes, applied to the reference
    /// station's high-water time.
    pub high_time_offset_minutes: f64,
    /// Low-water time offset, in minutes.
    pub low_time_offset_minutes: f64,
    /// High-water height factor, applied to the departure from datum.
    pub high_height_factor: f64,
    /// Low-water height factor.
    pub low_height_factor: f64,
}

/// Read-only lookup of station metadata and constants, consumed by
/// [`crate::harmonic::HarmonicEngine`].
///
/// Implementations are not required to be thread-safe: the engine treats a
/// provider as immutable configuration, loaded once and referentially
/// transparent for the duration of a prediction.
pub trait StationProvider {
    /// Resolves a station id to its kind (reference, or subordinate with
    /// its reference id and offset record). Returns `None` if the id is
    /// unknown to the provider.
    fn resolve_kind(&self, station_id: &str) -> Option<StationKind>;

    /// Returns the datum offset and constituent set for a *reference*
    /// station id. Returns `None` if the id is unknown to the provider.
    fn constants(&self, reference_id: &str) -> Option<StationConstants>;
}

/// An in-memory [`StationProvider`] backed by two maps, used by this
/// crate's own tests and benchmarks.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStationProvider {
    kinds: HashMap<String, StationKind>,
    constants: HashMap<String, StationConstants>,
}

impl InMemoryStationProvider {
    /// Constructs an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a reference station's constants.
    pub fn with_reference(mut self, id: impl Into<String>, constants: StationConstants) -> Self {
        let id = id.into();
        self.kinds.insert(id.clone(), StationKind::Reference);
        self.constants.insert(id, constants);
        self
    }

    /// Registers a subordinate station, deriving from `reference_id` via
    /// `offset`.
    pub fn with_subordinate(
        mut self,
        id: impl Into<String>,
        reference_id: impl Into<String>,
        offset: SubordinateOffset,
    ) -> Self {
        self.kinds.insert(
            id.into(),
            StationKind::Subordinate {
                reference_id: reference_id.into(),
                offset,
            },
        );
        self
    }
}

impl StationProvider for InMemoryStationProvider {
    fn resolve_kind(&self, station_id: &str) -> Option<StationKind> {
        self.kinds.get(station_id).cloned()
    }

    fn constants(&self, reference_id: &str) -> Option<StationConstants> {
        self.constants.get(reference_id).cloned()
    }
}

/// Literal station fixtures shared by doc-tests, integration tests, and
/// benchmarks, so they don't each hand-roll the same constants.
pub mod fixtures {
    use super::*;
    use uom::si::angle::degree;
    use uom::si::length::foot;

    /// NOAA station "9414290" (San Francisco, CA): a real semidiurnal-mixed
    /// harmonic station with `Z0 = 0`.
    pub fn san_francisco_provider() -> InMemoryStationProvider {
        let c = |name, amp, phase| StationConstituent {
            name,
            amplitude: Length::new::<foot>(amp),
            phase: Angle::new::<degree>(phase),
        };
        InMemoryStationProvider::new().with_reference(
            "9414290",
            StationConstants {
                datum_offset: Length::new::<foot>(0.0),
                constituents: vec![
                    c("M2", 2.929, 193.1),
                    c("S2", 0.880, 216.7),
                    c("N2", 0.668, 169.8),
                    c("K2", 0.239, 216.6),
                    c("K1", 0.950, 166.6),
                    c("O1", 0.618, 143.1),
                    c("P1", 0.286, 163.7),
                    c("Q1", 0.109, 130.8),
                    c("MM", 0.100, 105.0),
                    c("MF", 0.130, 115.0),
                    c("SSA", 0.180, 285.0),
                ],
            },
        )
    }

    /// A synthetic subordinate station off `"9414290"`, with a 30-minute
    /// high-water offset and unity height factors.
    pub fn subordinate_provider() -> InMemoryStationProvider {
        san_francisco_provider().with_subordinate(
            "9414290-SUB",
            "9414290",
            SubordinateOffset {
                high_time_offset_minutes: 30.0,
                low_time_offset_minutes: -15.0,
                high_height_factor: 1.0,
                low_height_factor: 1.0,
            },
        )
    }

    /// A reference station with no constituents, used to exercise the
    /// `EmptyConstants` error path.
    pub fn empty_provider() -> InMemoryStationProvider {
        InMemoryStationProvider::new().with_reference(
            "EMPTY",
            StationConstants {
                datum_offset: Length::new::<foot>(0.0),
                constituents: Vec::new(),
            },
        )
    }
}
