//! Nodal phase correction `u(t)`: the slowly varying phase companion to the
//! node factor, selected per constituent following Schureman's closed-form
//! expressions. Compound constituents sum their components'.

use crate::constituents::ConstituentId;

use super::orbital::OrbitalParameters;

pub(crate) fn nodal_phase(id: ConstituentId, op: &OrbitalParameters) -> f64 {
    use ConstituentId::*;

    let i_rad = op.i.to_radians();
    let p_rad = op.p.to_radians();

    let u_m2 = 2.0 * (op.xi - op.nu);
    let u_o1 = 2.0 * op.xi - op.nu;
    let u_k1 = -op.nu_prime;

    match id {
        M2 | N2 | TwoN2 | Nu2 | Mu2 | Lambda2 => u_m2,
        O1 | Q1 | TwoQ1 | Rho1 => u_o1,
        K1 => u_k1,
        K2 => -2.0 * op.nu_second,
        J1 => -op.nu,
        Mf => -2.0 * op.xi,
        Mm => 0.0,
        OO1 => -2.0 * op.xi - op.nu,
        M1 => {
            let cos_i = i_rad.cos();
            let q = (((5.0 * cos_i - 1.0) / (7.0 * cos_i + 1.0)) * p_rad.tan()).atan();
            op.xi - op.nu + q.to_degrees()
        }
        L2 => {
            let cot_half_i_sq = 1.0 / (i_rad / 2.0).tan().powi(2);
            let r = ((2.0 * p_rad).sin() / (cot_half_i_sq / 6.0 - (2.0 * p_rad).cos())).atan();
            2.0 * op.xi - 2.0 * op.nu - r.to_degrees()
        }
        S1 | S2 | T2 | R2 | P1 | Sa | Ssa | S4 | S6 => 0.0,
        Msf | Ms4 => u_m2,
        M3 => 1.5 * u_m2,
        M4 | Mn4 => 2.0 * u_m2,
        M6 => 3.0 * u_m2,
        M8 => 4.0 * u_m2,
        TwoSm2 => -u_m2,
        Mk3 => u_m2 + u_k1,
        TwoMk3 => 2.0 * u_m2 + u_k1,
    }
}
