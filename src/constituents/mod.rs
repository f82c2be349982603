//! The fixed catalog of partial-tide constituents.
//!
//! A [`Constituent`] is process-wide, immutable reference data: an angular
//! speed, six Doodson multipliers, a phase-offset constant, and a
//! classification tag. The catalog is the single source of truth for the
//! values the astronomical engine multiplies against the time-varying
//! fundamental astronomical arguments.

mod table;

use std::fmt;

/// A coarse grouping of constituents by physical origin, used for
/// documentation and filtering rather than for any dispatch decision (node
/// factor and nodal phase dispatch on [`ConstituentId`] instead).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Roughly twice-daily period (speed near 30 degrees/hour).
    Semidiurnal,
    /// Roughly once-daily period (speed near 15 degrees/hour).
    Diurnal,
    /// Period of days to years (fortnightly, monthly, annual).
    LongPeriod,
    /// Overtide or compound term derived from sums/differences of other
    /// constituents' frequencies (shallow-water and third-diurnal terms).
    Compound,
}

/// A tagged enumeration of every constituent this crate knows how to
/// synthesize. Node factor and nodal phase selection (§4.2) dispatch on this
/// tag via a `match`, per the catalog's finite, closed set of supported
/// partial tides — a lookup table, not virtual dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum ConstituentId {
    M2,
    S2,
    N2,
    K2,
    Nu2,
    Mu2,
    TwoN2,
    Lambda2,
    T2,
    R2,
    L2,
    K1,
    O1,
    Q1,
    TwoQ1,
    Rho1,
    M1,
    J1,
    OO1,
    S1,
    P1,
    Mm,
    Msf,
    Mf,
    Ssa,
    Sa,
    M3,
    M4,
    M6,
    M8,
    Mn4,
    Mk3,
    TwoMk3,
    Ms4,
    TwoSm2,
    S4,
    S6,
}

impl ConstituentId {
    /// The catalog name, matching [`Constituent::name`].
    pub fn name(self) -> &'static str {
        lookup_by_id(self).name
    }
}

impl fmt::Display for ConstituentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One partial tide: a symbolic name, angular speed, Doodson multipliers,
/// constant phase offset, and classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constituent {
    /// Catalog identifier, used for node-factor/nodal-phase dispatch.
    pub id: ConstituentId,
    /// Symbolic name, matched case-sensitively against station records.
    pub name: &'static str,
    /// Angular speed omega, in degrees per mean solar hour.
    pub speed: f64,
    /// The six Doodson multipliers (tau, s, h, p, N, p1).
    pub doodson: [i32; 6],
    /// The constant phase offset `c` such that `V = d . X + c`. See the
    /// module-level discussion of the midnight/noon epoch correction.
    pub phase_offset: f64,
    /// Physical-origin grouping.
    pub classification: Classification,
}

/// Looks up a constituent by name. Returns `None` for unknown names;
/// callers are expected to skip unknown names rather than treat this as an
/// error (per spec: unknown constituent names referenced by a station
/// record are silently skipped).
///
/// ```
/// use tidecore::constituents::lookup;
///
/// assert!(lookup("M2").is_some());
/// assert!(lookup("not-a-constituent").is_none());
/// ```
pub fn lookup(name: &str) -> Option<&'static Constituent> {
    table::CATALOG.iter().find(|c| c.name == name)
}

/// Returns every constituent in stable, declared catalog order.
pub fn all() -> &'static [Constituent] {
    &table::CATALOG
}

pub(crate) fn lookup_by_id(id: ConstituentId) -> &'static Constituent {
    table::CATALOG
        .iter()
        .find(|c| c.id == id)
        .expect("every ConstituentId has a catalog entry")
}
