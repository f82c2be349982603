//! Orbital parameters (`I`, `nu`, `xi`, `nu'`, `nu''`, `P`) derived from the
//! lunar node and perigee, feeding the node-factor and nodal-phase closed
//! forms in [`super::node`] and [`super::phase`].

use super::fundamental::AstronomicalArguments;
use super::normalize_degrees;

/// Schureman's orbital parameters, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalParameters {
    /// Inclination of the moon's orbit to the equator.
    pub i: f64,
    /// Longitude of the moon's node measured from its intersection with the
    /// ecliptic (Schureman's nu).
    pub nu: f64,
    /// Schureman's xi.
    pub xi: f64,
    /// Schureman's nu-prime, used by K1.
    pub nu_prime: f64,
    /// Schureman's nu-double-prime, used by K2.
    pub nu_second: f64,
    /// `p - xi`, the lunar perigee referenced to the node.
    pub p: f64,
}

pub(crate) fn compute(args: &AstronomicalArguments) -> OrbitalParameters {
    let n_rad = args.n.to_radians();

    let cos_i = 0.9136949 - 0.0356926 * n_rad.cos();
    let i_rad = cos_i.acos();
    let i = i_rad.to_degrees();

    let sin_nu = 0.0897056 * n_rad.sin() / i_rad.sin();
    let nu_rad = sin_nu.asin();
    let nu = nu_rad.to_degrees();

    let xi_term = (0.64412 * (n_rad / 2.0).tan()).atan();
    let xi = normalize_degrees(args.n - 2.0 * xi_term.to_degrees() - nu);

    let sin_2i = (2.0 * i_rad).sin();
    let nu_prime_rad = (nu_rad.sin() / (nu_rad.cos() + 0.334766 / sin_2i)).atan();
    let nu_prime = nu_prime_rad.to_degrees();

    let sin_i_sq = i_rad.sin().powi(2);
    let nu_second_rad =
        0.5 * ((2.0 * nu_rad).sin() / ((2.0 * nu_rad).cos() + 0.0726184 / sin_i_sq)).atan();
    let nu_second = nu_second_rad.to_degrees();

    let p = normalize_degrees(args.p - xi);

    OrbitalParameters {
        i,
        nu,
        xi,
        nu_prime,
        nu_second,
        p,
    }
}
