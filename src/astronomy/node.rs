//! Node factor `f(t)`: the dimensionless nodal amplitude modulation,
//! selected per constituent following Schureman's closed-form expressions.
//! Compound constituents factor as products of their components'.

use crate::constituents::ConstituentId;

use super::orbital::OrbitalParameters;

pub(crate) fn node_factor(id: ConstituentId, op: &OrbitalParameters) -> f64 {
    use ConstituentId::*;

    let i_rad = op.i.to_radians();
    let nu_rad = op.nu.to_radians();
    let p_rad = op.p.to_radians();

    let f_m2 = (i_rad / 2.0).cos().powi(4) / 0.91544;
    let f_o1 = i_rad.sin() * (i_rad / 2.0).cos().powi(2) / 0.37689;
    let f_k1 = (0.8965 * (2.0 * i_rad).sin().powi(2)
        + 0.6001 * (2.0 * i_rad).sin() * nu_rad.cos()
        + 0.1006)
        .sqrt();

    match id {
        // Lunar semidiurnal species share M2's node factor.
        M2 | N2 | TwoN2 | Nu2 | Mu2 | Lambda2 => f_m2,
        // Lunar diurnal species share O1's node factor.
        O1 | Q1 | TwoQ1 | Rho1 => f_o1,
        K1 => f_k1,
        K2 => (19.0444 * i_rad.sin().powi(4)
            + 2.7702 * i_rad.sin().powi(2) * (2.0 * nu_rad).cos()
            + 0.0981)
            .sqrt(),
        Mf => i_rad.sin().powi(2) / 0.1578,
        Mm => (2.0 / 3.0 - i_rad.sin().powi(2)) / 0.5021,
        J1 => (2.0 * i_rad).sin() / 0.7214,
        OO1 => i_rad.sin() * (i_rad / 2.0).sin().powi(2) / 0.0164,
        // Simplified Schureman form (eq. 197), dropping the small
        // P-dependent term the full M1 expansion carries.
        M1 => i_rad.sin() * (i_rad / 2.0).cos().powi(2) / 0.3800,
        L2 => {
            let tan_half_i = (i_rad / 2.0).tan();
            f_m2
                / (1.0 - 12.0 * tan_half_i.powi(2) * (2.0 * p_rad).cos()
                    + 36.0 * tan_half_i.powi(4))
                .sqrt()
        }
        // Pure-solar species: no lunar nodal modulation.
        S1 | S2 | T2 | R2 | P1 | Sa | Ssa | S4 | S6 => 1.0,
        // MSf derives from M2 differenced against the (unmodulated) S2.
        Msf | Ms4 => f_m2,
        M3 => f_m2.powf(1.5),
        M4 | Mn4 => f_m2.powi(2),
        M6 => f_m2.powi(3),
        M8 => f_m2.powi(4),
        TwoSm2 => f_m2,
        Mk3 => f_m2 * f_k1,
        TwoMk3 => f_m2 * f_m2 * f_k1,
    }
}
