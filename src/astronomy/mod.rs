//! Pure, deterministic computation of time-dependent astronomical
//! quantities from a UTC instant: the fundamental arguments, the
//! per-constituent equilibrium argument V, and the slowly varying nodal
//! modulation (node factor f, nodal phase u).
//!
//! Every function here is pure and reentrant; none can fail, and none
//! perform I/O. Callers that hold a [`crate::constituents::ConstituentId`]
//! for an unrecognized name should have already filtered it out via
//! [`crate::constituents::lookup`] — these functions never see unknown
//! names.

mod fundamental;
mod node;
mod orbital;
mod phase;

use hifitime::Epoch;

use crate::constituents::{lookup_by_id, ConstituentId};

pub use fundamental::AstronomicalArguments;
pub use orbital::OrbitalParameters;

/// Reference epoch (J2000.0): 2000-01-01T12:00:00 UTC.
const J2000_EPOCH_HOURS_PER_DAY: f64 = 24.0;
const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

/// Computes the fundamental astronomical arguments at `t`.
///
/// `tau` (mean lunar time) is returned unbounded/unnormalized so that
/// `omega * tau`-based phases stay continuous across day boundaries; `s`,
/// `h`, `p`, `N`, `p1` are normalized to `[0, 360)`.
///
/// ```
/// use hifitime::Epoch;
/// use tidecore::astronomy::arguments;
///
/// let t = Epoch::from_gregorian_utc_hms(2026, 2, 12, 0, 0, 0);
/// let args = arguments(&t);
/// assert!(args.s >= 0.0 && args.s < 360.0);
/// ```
pub fn arguments(t: &Epoch) -> AstronomicalArguments {
    fundamental::compute(t)
}

/// Computes the equilibrium argument V of `constituent` at `t`: `d1*tau +
/// d2*s + d3*h + d4*p + d5*N + d6*p1 + c`, with no modulo reduction applied
/// to tau's contribution before summation, reduced modulo 360 for the
/// returned value.
pub fn v0(id: ConstituentId, t: &Epoch) -> f64 {
    let args = arguments(t);
    let c = lookup_by_id(id);
    let [d1, d2, d3, d4, d5, d6] = c.doodson;
    let v = d1 as f64 * args.tau
        + d2 as f64 * args.s
        + d3 as f64 * args.h
        + d4 as f64 * args.p
        + d5 as f64 * args.n
        + d6 as f64 * args.p1
        + c.phase_offset;
    normalize_degrees(v)
}

/// Computes the dimensionless node factor f(t) for `constituent`.
pub fn node_factor(id: ConstituentId, t: &Epoch) -> f64 {
    node::node_factor(id, &orbital_parameters(t))
}

/// Computes the nodal phase correction u(t), in degrees, for `constituent`.
pub fn nodal_phase(id: ConstituentId, t: &Epoch) -> f64 {
    phase::nodal_phase(id, &orbital_parameters(t))
}

/// Computes the fundamental arguments and derived orbital parameters at `t`
/// in one pass. Callers that need `f`/`u` for more than one constituent at
/// the same instant (the harmonic engine's per-constituent hot loop) should
/// call this once per sample and reuse the result via
/// [`node_factor_and_phase`], rather than calling [`node_factor`]/
/// [`nodal_phase`] per constituent, which would each re-derive it from
/// scratch.
pub(crate) fn orbital_parameters(t: &Epoch) -> OrbitalParameters {
    orbital::compute(&arguments(t))
}

/// Computes `(f(t), u(t))` for `constituent` from an [`OrbitalParameters`]
/// already derived for the sample instant, sharing one fundamental-argument
/// and orbital-parameter evaluation across every constituent in a station's
/// list instead of recomputing it per constituent.
pub(crate) fn node_factor_and_phase(id: ConstituentId, orbital: &OrbitalParameters) -> (f64, f64) {
    (node::node_factor(id, orbital), phase::nodal_phase(id, orbital))
}

/// Reduces a degree value to `[0, 360)`.
pub(crate) fn normalize_degrees(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 {
        r + 360.0
    } else {
        r
    }
}

/// Julian centuries elapsed since the J2000.0 epoch (2000-01-01T12:00:00 UTC).
pub(crate) fn julian_centuries_since_j2000(t: &Epoch) -> f64 {
    let j2000 = Epoch::from_gregorian_utc_hms(2000, 1, 1, 12, 0, 0);
    let days = (*t - j2000).to_unit(hifitime::Unit::Day);
    days / DAYS_PER_JULIAN_CENTURY
}

/// Fractional hour of the UTC calendar day, in `[0, 24)`.
pub(crate) fn utc_hours_of_day(t: &Epoch) -> f64 {
    let (_, _, _, hour, minute, second, nanos) = t.to_gregorian_utc();
    hour as f64
        + minute as f64 / 60.0
        + second as f64 / 3600.0
        + nanos as f64 / (3600.0 * 1.0e9)
}

#[allow(dead_code)]
const fn _assert_hours_per_day() {
    assert!(J2000_EPOCH_HOURS_PER_DAY as i64 == 24);
}
