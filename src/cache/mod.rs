//! Per-station, day-scoped cache of precomputed extrema over a rolling
//! N-day window, safe under concurrent readers with single-flight
//! recomputation on miss.

use std::collections::HashMap;
use std::sync::Mutex;

use hifitime::{Duration, Epoch};

use crate::config::EngineConfig;
use crate::error::CacheError;
use crate::harmonic::HarmonicEngine;
use crate::station::StationProvider;
use crate::types::{ExtremumType, TideExtremum};

struct CacheEntry {
    extrema: Vec<TideExtremum>,
    window_start: Epoch,
    window_end: Epoch,
    created_mjd: i64,
}

/// A snapshot of one station's cached window, returned by
/// [`ExtremaCache::stats`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CacheStats {
    /// Number of extrema currently cached for this station.
    pub extremum_count: usize,
    /// Inclusive start of the cached window.
    pub window_start: Epoch,
    /// Exclusive end of the cached window.
    pub window_end: Epoch,
    /// Whether the entry's creation date still equals the current UTC
    /// date.
    pub valid: bool,
}

/// Amortizes extrema search over many same-day queries: a per-station,
/// single-mutex map of rolling N-day windows, recomputed once per UTC
/// calendar date.
///
/// The mutex covers the whole map and every entry; a miss or stale entry is
/// recomputed while the lock is held, guaranteeing single-flight behavior
/// per (station id, day) pair. `stats` takes its snapshot under the same
/// lock.
pub struct ExtremaCache<P: StationProvider> {
    engine: HarmonicEngine<P>,
    config: EngineConfig,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl<P: StationProvider> ExtremaCache<P> {
    /// Wraps `engine`, using its configured window width (default 7 days).
    pub fn new(engine: HarmonicEngine<P>) -> Self {
        let config = engine.config();
        Self {
            engine,
            config,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// First extremum of type [`ExtremumType::High`] strictly after `t`
    /// within the cached window; `None` if none exists in-window, even if
    /// one would exist beyond it.
    pub fn next_high(
        &self,
        station_id: &str,
        t: &Epoch,
    ) -> Result<Option<TideExtremum>, CacheError> {
        self.next_of_type(station_id, t, ExtremumType::High)
    }

    /// As [`Self::next_high`], for [`ExtremumType::Low`].
    pub fn next_low(
        &self,
        station_id: &str,
        t: &Epoch,
    ) -> Result<Option<TideExtremum>, CacheError> {
        self.next_of_type(station_id, t, ExtremumType::Low)
    }

    fn next_of_type(
        &self,
        station_id: &str,
        t: &Epoch,
        kind: ExtremumType,
    ) -> Result<Option<TideExtremum>, CacheError> {
        // The cache entry is always anchored on the real current UTC day,
        // never on the query instant `t` — `t` is only the strictly-after
        // filter. Anchoring on `t` would treat a query for a different
        // calendar day (even one still inside the cached window) as stale
        // and force a redundant, differently-windowed recompute.
        let extrema = self.extrema_for(station_id, &now_utc())?;
        Ok(extrema.into_iter().find(|e| e.time > *t && e.kind == kind))
    }

    /// The full cached window for `station_id`, sorted ascending by time.
    pub fn all_extrema(&self, station_id: &str) -> Result<Vec<TideExtremum>, CacheError> {
        self.extrema_for(station_id, &now_utc())
    }

    /// Extrema with `t0 <= time <= t1` (inclusive both ends); empty if
    /// `t1 < t0`.
    pub fn in_range(
        &self,
        station_id: &str,
        t0: &Epoch,
        t1: &Epoch,
    ) -> Result<Vec<TideExtremum>, CacheError> {
        if t1 < t0 {
            return Ok(Vec::new());
        }
        // Anchor on the real current UTC day, as in `next_of_type`; `t0`/
        // `t1` only bound the inclusive filter below.
        let extrema = self.extrema_for(station_id, &now_utc())?;
        Ok(extrema
            .into_iter()
            .filter(|e| e.time >= *t0 && e.time <= *t1)
            .collect())
    }

    /// Ensures a (possibly freshly computed) entry exists for `station_id`
    /// for the current UTC day.
    pub fn prewarm(&self, station_id: &str) -> Result<(), CacheError> {
        self.extrema_for(station_id, &now_utc()).map(|_| ())
    }

    /// Drops the cached entry for one station.
    pub fn invalidate(&self, station_id: &str) {
        self.lock_entries().remove(station_id);
    }

    /// Drops every cached entry, regardless of validity.
    pub fn invalidate_all(&self) {
        self.lock_entries().clear();
    }

    /// Drops only entries whose creation date is not the current UTC date.
    pub fn invalidate_expired(&self) {
        let today = mjd_day(&now_utc());
        self.lock_entries().retain(|_, entry| entry.created_mjd == today);
    }

    /// A snapshot of `station_id`'s cached window, or `None` if nothing is
    /// cached for it yet.
    pub fn stats(&self, station_id: &str) -> Option<CacheStats> {
        let today = mjd_day(&now_utc());
        let entries = self.lock_entries();
        entries.get(station_id).map(|entry| CacheStats {
            extremum_count: entry.extrema.len(),
            window_start: entry.window_start,
            window_end: entry.window_end,
            valid: entry.created_mjd == today,
        })
    }

    fn lock_entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, CacheEntry>> {
        self.entries.lock().expect("extrema cache mutex poisoned")
    }

    fn extrema_for(
        &self,
        station_id: &str,
        reference_instant: &Epoch,
    ) -> Result<Vec<TideExtremum>, CacheError> {
        let today = mjd_day(reference_instant);
        let mut entries = self.lock_entries();

        if let Some(entry) = entries.get(station_id) {
            if entry.created_mjd == today {
                return Ok(entry.extrema.clone());
            }
        }

        // Miss or stale: the window is recomputed here, while the lock is
        // still held, so concurrent callers for the same station block on
        // this mutex rather than racing each other into a second pass.
        let window_start = start_of_day_utc(reference_instant);
        let window_end =
            window_start + Duration::from_seconds(self.config.cache_window_days as f64 * 86_400.0);
        let extrema = self.engine.extrema(station_id, &window_start, &window_end)?;

        entries.insert(
            station_id.to_string(),
            CacheEntry {
                extrema: extrema.clone(),
                window_start,
                window_end,
                created_mjd: today,
            },
        );
        Ok(extrema)
    }
}

fn now_utc() -> Epoch {
    Epoch::now().expect("system clock available")
}

fn start_of_day_utc(t: &Epoch) -> Epoch {
    Epoch::from_mjd_utc(t.to_mjd_utc_days().floor())
}

fn mjd_day(t: &Epoch) -> i64 {
    t.to_mjd_utc_days().floor() as i64
}
