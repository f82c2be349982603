use super::{Classification, Constituent, ConstituentId};
use once_cell::sync::Lazy;

/// The phase-offset constant `c` for a Doodson vector `[tau, s, h, p, N, p1]`.
///
/// `tau` is reckoned from a midnight epoch (`15 * UTC_hours`) while `s`,
/// `h`, `p`, `N`, `p1` come from polynomials referenced to the standard
/// noon-epoch astronomical T. Mixing the two without correction flips the
/// sign of every term with an odd `tau` multiplier by 180 degrees (an error
/// of several hours for diurnal species); even-`tau` (semidiurnal,
/// long-period, and even-order compound) terms need no correction.
const fn midnight_epoch_correction(doodson_tau: i32) -> f64 {
    if doodson_tau.rem_euclid(2) == 1 {
        180.0
    } else {
        0.0
    }
}

macro_rules! constituent {
    ($id:ident, $name:expr, $speed:expr, $doodson:expr, $class:expr) => {
        Constituent {
            id: ConstituentId::$id,
            name: $name,
            speed: $speed,
            doodson: $doodson,
            phase_offset: midnight_epoch_correction($doodson[0]),
            classification: $class,
        }
    };
}

pub(super) static CATALOG: Lazy<Vec<Constituent>> = Lazy::new(|| {
    use Classification::*;
    vec![
        // Semidiurnal species (speed near 30 degrees/hour).
        constituent!(M2, "M2", 28.9841042, [2, 0, 0, 0, 0, 0], Semidiurnal),
        constituent!(S2, "S2", 30.0000000, [2, 2, -2, 0, 0, 0], Semidiurnal),
        constituent!(N2, "N2", 28.4397295, [2, -1, 0, 1, 0, 0], Semidiurnal),
        constituent!(K2, "K2", 30.0821373, [2, 2, 0, 0, 0, 0], Semidiurnal),
        constituent!(Nu2, "NU2", 28.5125831, [2, -1, 2, -1, 0, 0], Semidiurnal),
        constituent!(Mu2, "MU2", 27.9682084, [2, -2, 2, 0, 0, 0], Semidiurnal),
        constituent!(TwoN2, "2N2", 27.8953548, [2, -2, 0, 2, 0, 0], Semidiurnal),
        constituent!(
            Lambda2,
            "LAMBDA2",
            29.4556253,
            [2, 1, -2, 1, 0, 0],
            Semidiurnal
        ),
        constituent!(T2, "T2", 29.9589333, [2, 2, -3, 0, 0, 1], Semidiurnal),
        constituent!(R2, "R2", 30.0410667, [2, 2, -1, 0, 0, -1], Semidiurnal),
        constituent!(L2, "L2", 29.5284789, [2, 1, 0, -1, 0, 0], Semidiurnal),
        // Diurnal species (speed near 15 degrees/hour).
        constituent!(K1, "K1", 15.0410686, [1, 1, 0, 0, 0, 0], Diurnal),
        constituent!(O1, "O1", 13.9430356, [1, -1, 0, 0, 0, 0], Diurnal),
        constituent!(Q1, "Q1", 13.3986609, [1, -2, 0, 1, 0, 0], Diurnal),
        constituent!(TwoQ1, "2Q1", 12.8542862, [1, -3, 0, 2, 0, 0], Diurnal),
        constituent!(Rho1, "RHO1", 13.4715145, [1, -2, 2, -1, 0, 0], Diurnal),
        constituent!(M1, "M1", 14.4966939, [1, 0, 0, 1, 0, 0], Diurnal),
        constituent!(J1, "J1", 15.5854433, [1, 2, 0, -1, 0, 0], Diurnal),
        constituent!(OO1, "OO1", 16.1391017, [1, 3, 0, 0, 0, 0], Diurnal),
        constituent!(S1, "S1", 15.0000000, [1, 1, -1, 0, 0, 0], Diurnal),
        constituent!(P1, "P1", 14.9589314, [1, 1, -2, 0, 0, 0], Diurnal),
        // Long-period species (speed well under 1 degree/hour).
        constituent!(Mm, "MM", 0.5443747, [0, 1, 0, -1, 0, 0], LongPeriod),
        constituent!(Msf, "MSF", 1.0158958, [0, 2, -2, 0, 0, 0], LongPeriod),
        constituent!(Mf, "MF", 1.0980331, [0, 2, 0, 0, 0, 0], LongPeriod),
        constituent!(Ssa, "SSA", 0.0821373, [0, 0, 2, 0, 0, 0], LongPeriod),
        constituent!(Sa, "SA", 0.0410686, [0, 0, 1, 0, 0, 0], LongPeriod),
        // Compound / shallow-water overtides.
        constituent!(M3, "M3", 43.4761563, [3, 0, 0, 0, 0, 0], Compound),
        constituent!(M4, "M4", 57.9682084, [4, 0, 0, 0, 0, 0], Compound),
        constituent!(M6, "M6", 86.9523127, [6, 0, 0, 0, 0, 0], Compound),
        constituent!(M8, "M8", 115.9364166, [8, 0, 0, 0, 0, 0], Compound),
        constituent!(Mn4, "MN4", 57.4238337, [4, -1, 0, 1, 0, 0], Compound),
        constituent!(Mk3, "MK3", 44.0251729, [3, 1, 0, 0, 0, 0], Compound),
        constituent!(TwoMk3, "2MK3", 42.9271398, [3, -1, 0, 0, 0, 0], Compound),
        constituent!(Ms4, "MS4", 58.9841042, [4, 2, -2, 0, 0, 0], Compound),
        constituent!(TwoSm2, "2SM2", 31.0158958, [2, 4, -4, 0, 0, 0], Compound),
        constituent!(S4, "S4", 60.0000000, [4, 4, -4, 0, 0, 0], Compound),
        constituent!(S6, "S6", 90.0000000, [6, 6, -6, 0, 0, 0], Compound),
    ]
});
