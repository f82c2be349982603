//! Fundamental astronomical arguments: `tau` (mean lunar time, kept
//! unbounded) and `s`, `h`, `p`, `N`, `p1` (moon/sun mean longitudes and
//! nodes), via Meeus-style polynomials in Julian centuries since J2000.0.

use hifitime::Epoch;

use super::{julian_centuries_since_j2000, normalize_degrees, utc_hours_of_day};

/// The six fundamental astronomical arguments at an instant, in degrees.
///
/// `tau` is deliberately left unbounded (not reduced modulo 360) so that
/// `omega * tau`-derived phases stay continuous across midnight; the other
/// five are normalized to `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AstronomicalArguments {
    /// Mean lunar time, unbounded, accumulating roughly 15 degrees/hour.
    pub tau: f64,
    /// Moon's mean longitude, normalized to `[0, 360)`.
    pub s: f64,
    /// Sun's mean longitude, normalized to `[0, 360)`.
    pub h: f64,
    /// Moon's mean longitude of perigee, normalized to `[0, 360)`.
    pub p: f64,
    /// Moon's longitude of ascending node, normalized to `[0, 360)`.
    pub n: f64,
    /// Sun's mean longitude of perigee, normalized to `[0, 360)`.
    pub p1: f64,
}

pub(crate) fn compute(t: &Epoch) -> AstronomicalArguments {
    let big_t = julian_centuries_since_j2000(t);
    let t2 = big_t * big_t;
    let t3 = t2 * big_t;
    let t4 = t3 * big_t;

    let s =
        218.3164477 + 481_267.881_234_21 * big_t - 0.0015786 * t2 + t3 / 538_841.0
            - t4 / 65_194_000.0;
    let h = 280.4664567 + 36_000.769_827_79 * big_t + 0.0003032028 * t2 + t3 / 49_931_000.0
        - t4 / 15_300_000.0;
    let p = 83.3532465 + 4_069.013_728_7 * big_t - 0.0103200 * t2 - t3 / 80_053.0
        + t4 / 18_999_000.0;
    let n = 125.0445479 - 1_934.136_289_1 * big_t + 0.0020754 * t2 + t3 / 467_441.0
        - t4 / 60_616_000.0;
    let p1 = 282.9373508 + 1.7195269 * big_t + 0.00045962 * t2 + t3 / 49_931_000.0;

    let s = normalize_degrees(s);
    let h = normalize_degrees(h);
    let p = normalize_degrees(p);
    let n = normalize_degrees(n);
    let p1 = normalize_degrees(p1);

    // Midnight-epoch mean lunar time: unbounded so that downstream
    // `speed * tau` terms stay continuous across the day boundary.
    let tau = 15.0 * utc_hours_of_day(t) + h - s;

    AstronomicalArguments { tau, s, h, p, n, p1 }
}
