use hifitime::Epoch;

use tidecore::harmonic::HarmonicEngine;
use tidecore::station::fixtures;
use tidecore::types::ExtremumType;

fn engine() -> HarmonicEngine<tidecore::station::InMemoryStationProvider> {
    HarmonicEngine::new(fixtures::subordinate_provider())
}

#[test]
fn subordinate_height_equals_reference_height_under_unity_factors() {
    let e = engine();
    let t = Epoch::from_gregorian_utc_hms(2026, 2, 12, 6, 0, 0);
    let reference = e.height("9414290", &t).unwrap();
    let subordinate = e.height("9414290-SUB", &t).unwrap();
    // Both height factors are 1.0 and the datum offset is 0 in this
    // fixture, so the blend collapses to the reference height exactly.
    assert!((reference - subordinate).value.abs() < 1e-9);
}

#[test]
fn subordinate_extrema_are_shifted_by_the_configured_offsets() {
    let e = engine();
    let t = Epoch::from_gregorian_utc_hms(2026, 2, 12, 0, 0, 0);

    let reference_high = e.next_extremum("9414290", &t, true).unwrap().unwrap();
    let subordinate_high = e.next_extremum("9414290-SUB", &t, true).unwrap().unwrap();
    let high_gap = (subordinate_high.time - reference_high.time).to_unit(hifitime::Unit::Minute);
    assert!((high_gap - 30.0).abs() < 1e-6);

    let reference_low = e.next_extremum("9414290", &t, false).unwrap().unwrap();
    let subordinate_low = e.next_extremum("9414290-SUB", &t, false).unwrap().unwrap();
    let low_gap = (subordinate_low.time - reference_low.time).to_unit(hifitime::Unit::Minute);
    assert!((low_gap - (-15.0)).abs() < 1e-6);
}

#[test]
fn subordinate_extremum_kind_matches_its_reference_counterpart() {
    let e = engine();
    let t = Epoch::from_gregorian_utc_hms(2026, 2, 12, 0, 0, 0);
    let subordinate_high = e.next_extremum("9414290-SUB", &t, true).unwrap().unwrap();
    assert_eq!(subordinate_high.kind, ExtremumType::High);
}

#[test]
fn rate_is_always_derived_from_the_reference_station() {
    let e = engine();
    let t = Epoch::from_gregorian_utc_hms(2026, 2, 12, 6, 0, 0);
    let reference_rate = e.rate("9414290", &t).unwrap();
    let subordinate_rate = e.rate("9414290-SUB", &t).unwrap();
    // The subordinate's height factor is not applied to rate, so both
    // stations report the same trend at the same instant.
    assert_eq!(reference_rate, subordinate_rate);
}
