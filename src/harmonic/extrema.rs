//! `next_extremum`/`extrema`: coarse bracketing plus Newton refinement on
//! the reference station's rate, with subordinate time/height-factor
//! post-processing.

use hifitime::{Duration, Epoch};

use crate::error::EngineError;
use crate::station::{StationKind, StationProvider};
use crate::types::{ExtremumType, TideExtremum};

use super::HarmonicEngine;

impl<P: StationProvider> HarmonicEngine<P> {
    /// Finds the next extremum of the requested type strictly after `t`.
    ///
    /// Coarse-brackets by stepping the reference station's rate forward in
    /// 30-minute increments starting at `t + 10min`, tracking sign changes;
    /// refines each bracket with a Newton step on rate (rate = 0), and
    /// classifies the result by the sign of rate's derivative (high if
    /// negative, low if positive). Returns the first bracket whose
    /// classification matches `want_high`.
    ///
    /// If `station_id` is subordinate, the matched reference-station
    /// extremum time is shifted by the high/low time offset and the height
    /// is recomputed at the shifted time via [`Self::height`] (which
    /// applies the height factor).
    ///
    /// Returns `Ok(None)` if no matching extremum is bracketed within
    /// [`crate::config::EngineConfig::extremum_search_horizon_hours`]
    /// (default 30h) of `t`.
    pub fn next_extremum(
        &self,
        station_id: &str,
        t: &Epoch,
        want_high: bool,
    ) -> Result<Option<TideExtremum>, EngineError> {
        let kind = self.resolve(station_id)?;
        let reference_id = match &kind {
            StationKind::Reference => station_id.to_string(),
            StationKind::Subordinate { reference_id, .. } => reference_id.clone(),
        };

        let horizon =
            *t + Duration::from_seconds(self.config.extremum_search_horizon_hours * 3600.0);
        let step = Duration::from_seconds(30.0 * 60.0);

        let mut prev_time = *t + Duration::from_seconds(10.0 * 60.0);
        let mut prev_rate = self.reference_rate(&reference_id, &prev_time)?;

        loop {
            let cursor = prev_time + step;
            if cursor > horizon {
                return Ok(None);
            }
            let rate = self.reference_rate(&reference_id, &cursor)?;

            if prev_rate != 0.0 && rate != 0.0 && prev_rate.signum() != rate.signum() {
                if let Some((time, extremum_type)) =
                    self.refine_extremum(&reference_id, prev_time, cursor)?
                {
                    if (extremum_type == ExtremumType::High) == want_high {
                        return Ok(Some(self.finish_extremum(
                            station_id,
                            &kind,
                            &reference_id,
                            time,
                            extremum_type,
                        )?));
                    }
                }
            }

            prev_time = cursor;
            prev_rate = rate;
        }
    }

    /// All extrema in `[t0, t1)`, strictly alternating and sorted by time.
    /// Empty if `t1 <= t0`.
    pub fn extrema(
        &self,
        station_id: &str,
        t0: &Epoch,
        t1: &Epoch,
    ) -> Result<Vec<TideExtremum>, EngineError> {
        if t1 <= t0 {
            return Ok(Vec::new());
        }
        let reference_id = self.reference_id(station_id)?;
        let initial_rate = self.reference_rate(&reference_id, t0)?;
        let mut want_high = initial_rate > 0.0;
        let mut results = Vec::new();
        let mut cursor = *t0;

        loop {
            match self.next_extremum(station_id, &cursor, want_high)? {
                Some(extremum) if extremum.time < *t1 => {
                    cursor = extremum.time;
                    want_high = !want_high;
                    results.push(extremum);
                }
                _ => break,
            }
        }
        Ok(results)
    }

    /// Newton-refines a rate=0 crossing bracketed by `[bracket_start,
    /// bracket_end]`, starting from the bracket midpoint. Converges when
    /// `|rate| < newton_tolerance` within `newton_max_iterations`
    /// iterations and within one hour of either bracket endpoint;
    /// otherwise returns `None` (non-convergence is never an error, only
    /// a missed extremum).
    fn refine_extremum(
        &self,
        reference_id: &str,
        bracket_start: Epoch,
        bracket_end: Epoch,
    ) -> Result<Option<(Epoch, ExtremumType)>, EngineError> {
        let half_width = (bracket_end - bracket_start).to_unit(hifitime::Unit::Second) / 2.0;
        let mut t = bracket_start + Duration::from_seconds(half_width);
        let delta = Duration::from_seconds(5.0 * 60.0);
        let drift_limit = Duration::from_seconds(3600.0);

        for _ in 0..self.config.newton_max_iterations {
            let rate = self.reference_rate(reference_id, &t)?;
            if rate.abs() < self.config.newton_tolerance {
                let slope = self.rate_derivative(reference_id, &t, delta)?;
                let extremum_type = if slope < 0.0 {
                    ExtremumType::High
                } else {
                    ExtremumType::Low
                };
                return Ok(Some((t, extremum_type)));
            }

            let slope = self.rate_derivative(reference_id, &t, delta)?;
            if slope == 0.0 {
                return Ok(None);
            }
            let step_hours = rate / slope;
            let next = t - Duration::from_seconds(step_hours * 3600.0);

            if next < bracket_start - drift_limit || next > bracket_end + drift_limit {
                return Ok(None);
            }
            t = next;
        }
        Ok(None)
    }

    /// Symmetric derivative of rate at `t`, used both for Newton's slope
    /// and for classifying the resulting extremum's type.
    fn rate_derivative(
        &self,
        reference_id: &str,
        t: &Epoch,
        delta: Duration,
    ) -> Result<f64, EngineError> {
        let r_plus = self.reference_rate(reference_id, &(*t + delta))?;
        let r_minus = self.reference_rate(reference_id, &(*t - delta))?;
        let dt_hours = 2.0 * delta.to_unit(hifitime::Unit::Hour);
        Ok((r_plus - r_minus) / dt_hours)
    }

    fn finish_extremum(
        &self,
        station_id: &str,
        kind: &StationKind,
        reference_id: &str,
        time: Epoch,
        extremum_type: ExtremumType,
    ) -> Result<TideExtremum, EngineError> {
        match kind {
            StationKind::Reference => {
                let height = self.reference_height(reference_id, &time)?;
                Ok(TideExtremum {
                    time,
                    height,
                    kind: extremum_type,
                })
            }
            StationKind::Subordinate { offset, .. } => {
                let offset_minutes = match extremum_type {
                    ExtremumType::High => offset.high_time_offset_minutes,
                    ExtremumType::Low => offset.low_time_offset_minutes,
                };
                let shifted = time + Duration::from_seconds(offset_minutes * 60.0);
                let height = self.height(station_id, &shifted)?;
                Ok(TideExtremum {
                    time: shifted,
                    height,
                    kind: extremum_type,
                })
            }
        }
    }
}
