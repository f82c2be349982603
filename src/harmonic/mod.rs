//! Station height, rate, extrema, and sampled-curve synthesis: combines the
//! constituent catalog and astronomical engine with a station's own
//! constants, and applies subordinate-station time/height post-processing.

mod extrema;

use std::collections::HashMap;

use hifitime::{Duration, Epoch};
use uom::si::angle::degree;
use uom::si::f64::Length;
use uom::si::length::foot;

use crate::astronomy;
use crate::config::EngineConfig;
use crate::constituents::{self, ConstituentId};
use crate::error::EngineError;
use crate::station::{StationKind, StationProvider};
use crate::types::{Direction, TideHeight};

/// Fixed reference epoch at which every constituent's equilibrium argument
/// V is evaluated once and cached: evaluating V at the prediction time in
/// addition to the nodal phase would double-count slowly varying terms.
fn reference_epoch() -> Epoch {
    Epoch::from_gregorian_utc_hms(1983, 1, 1, 0, 0, 0)
}

/// Combines a [`StationProvider`] with the constituent catalog and
/// astronomical engine to produce height, rate, extrema, and sampled
/// curves.
///
/// Pure and reentrant once constructed: the provider is treated as
/// immutable configuration, and the V-at-reference-epoch cache is computed
/// once in [`Self::new`]/[`Self::with_config`] and never mutated, so a
/// `HarmonicEngine` may be called concurrently from any thread with no
/// coordination.
pub struct HarmonicEngine<P: StationProvider> {
    provider: P,
    config: EngineConfig,
    v_at_reference: HashMap<ConstituentId, f64>,
    reference_epoch: Epoch,
}

impl<P: StationProvider> HarmonicEngine<P> {
    /// Constructs a new engine over `provider`, using [`EngineConfig`]'s
    /// defaults.
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, EngineConfig::default())
    }

    /// As [`Self::new`], with an explicit [`EngineConfig`].
    pub fn with_config(provider: P, config: EngineConfig) -> Self {
        let reference_epoch = reference_epoch();
        let v_at_reference = constituents::all()
            .iter()
            .map(|c| (c.id, astronomy::v0(c.id, &reference_epoch)))
            .collect();
        Self {
            provider,
            config,
            v_at_reference,
            reference_epoch,
        }
    }

    /// The configuration this engine was constructed with.
    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Predicted water level at `t` for `station_id`.
    ///
    /// Height always sums the *reference* station's constants, even when
    /// `station_id` is subordinate; a subordinate result is then the
    /// height-factor blend of that reference height with its datum offset.
    ///
    /// # Errors
    ///
    /// [`EngineError::UnknownStation`] if `station_id` does not resolve, or
    /// its resolved reference has no constants. [`EngineError::EmptyConstants`]
    /// if the reference station has no constituents.
    pub fn height(&self, station_id: &str, t: &Epoch) -> Result<Length, EngineError> {
        let kind = self.resolve(station_id)?;
        match kind {
            StationKind::Reference => self.reference_height(station_id, t),
            StationKind::Subordinate {
                reference_id,
                offset,
            } => {
                let reference_height = self.reference_height(&reference_id, t)?;
                let datum = self.station_constants(&reference_id)?.datum_offset;
                let reference_rate = self.reference_rate(&reference_id, t)?;
                let r = if reference_rate >= 0.0 {
                    offset.high_height_factor
                } else {
                    offset.low_height_factor
                };
                Ok(datum + (reference_height - datum) * r)
            }
        }
    }

    /// Symmetric numerical derivative of height at `t`, using the
    /// *reference* station's height regardless of `station_id`'s kind (the
    /// subordinate height factor is not applied to rate, to avoid circular
    /// dependence with the rising/falling classifier).
    pub fn rate(&self, station_id: &str, t: &Epoch) -> Result<f64, EngineError> {
        let reference_id = self.reference_id(station_id)?;
        self.reference_rate(&reference_id, t)
    }

    /// `(time, height, rate, direction)` at `t`, where direction is slack
    /// if `|rate|` is below [`EngineConfig::slack_threshold`], else rising
    /// or falling by the sign of rate.
    pub fn tide_height(&self, station_id: &str, t: &Epoch) -> Result<TideHeight, EngineError> {
        let height = self.height(station_id, t)?;
        let rate = self.rate(station_id, t)?;
        let direction = if rate.abs() < self.config.slack_threshold {
            Direction::Slack
        } else if rate > 0.0 {
            Direction::Rising
        } else {
            Direction::Falling
        };
        Ok(TideHeight {
            time: *t,
            height,
            rate,
            direction,
        })
    }

    /// Uniformly sampled height curve over `[t0, t1]` at `step_minutes`
    /// cadence, inclusive of `t1` when it lands exactly on the grid. Empty
    /// if `t0 > t1`.
    pub fn curve(
        &self,
        station_id: &str,
        t0: &Epoch,
        t1: &Epoch,
        step_minutes: f64,
    ) -> Result<Vec<TideHeight>, EngineError> {
        if t0 > t1 {
            return Ok(Vec::new());
        }
        let step = Duration::from_seconds(step_minutes * 60.0);
        let mut samples = Vec::new();
        let mut t = *t0;
        while t <= *t1 {
            samples.push(self.tide_height(station_id, &t)?);
            t += step;
        }
        Ok(samples)
    }

    fn resolve(&self, station_id: &str) -> Result<StationKind, EngineError> {
        self.provider
            .resolve_kind(station_id)
            .ok_or_else(|| EngineError::UnknownStation {
                station_id: station_id.to_string(),
            })
    }

    fn reference_id(&self, station_id: &str) -> Result<String, EngineError> {
        match self.resolve(station_id)? {
            StationKind::Reference => Ok(station_id.to_string()),
            StationKind::Subordinate { reference_id, .. } => Ok(reference_id),
        }
    }

    fn station_constants(
        &self,
        reference_id: &str,
    ) -> Result<crate::station::StationConstants, EngineError> {
        let constants =
            self.provider
                .constants(reference_id)
                .ok_or_else(|| EngineError::UnknownStation {
                    station_id: reference_id.to_string(),
                })?;
        if constants.constituents.is_empty() {
            return Err(EngineError::EmptyConstants {
                station_id: reference_id.to_string(),
            });
        }
        Ok(constants)
    }

    fn reference_height(&self, reference_id: &str, t: &Epoch) -> Result<Length, EngineError> {
        let constants = self.station_constants(reference_id)?;
        let dt_hours = (*t - self.reference_epoch).to_unit(hifitime::Unit::Hour);
        // Shared across every constituent in the station's list: the
        // fundamental arguments and orbital parameters depend only on `t`,
        // not on which constituent is being summed.
        let orbital = astronomy::orbital_parameters(t);
        let mut sum = 0.0_f64;
        for sc in &constants.constituents {
            let Some(catalog) = constituents::lookup(sc.name) else {
                continue;
            };
            let id = catalog.id;
            let v_ref = self.v_at_reference[&id];
            let (f, u) = astronomy::node_factor_and_phase(id, &orbital);
            let kappa_deg = sc.phase.get::<degree>();
            let arg_deg = catalog.speed * dt_hours + v_ref + u - kappa_deg;
            sum += sc.amplitude.get::<foot>() * f * arg_deg.to_radians().cos();
        }
        Ok(constants.datum_offset + Length::new::<foot>(sum))
    }

    fn reference_rate(&self, reference_id: &str, t: &Epoch) -> Result<f64, EngineError> {
        let delta = Duration::from_seconds(60.0);
        let h_plus = self.reference_height(reference_id, &(*t + delta))?;
        let h_minus = self.reference_height(reference_id, &(*t - delta))?;
        let dt_hours = 2.0 * delta.to_unit(hifitime::Unit::Hour);
        Ok((h_plus - h_minus).get::<foot>() / dt_hours)
    }
}
