// File: crates/plot-core/tests/scale.rs
// Purpose: Validate percentile clipping, zero straddling, tick sizing and the value-to-pixel mapper.

use plot_core::scale::percentile;
use plot_core::{ScaleRange, ValueMapper};

fn assert_straddles_zero(values: &[f64]) {
    let r = ScaleRange::from_values(values);
    assert!(r.min_val <= 0.0, "min {} > 0 for {:?}", r.min_val, values);
    assert!(r.max_val >= 0.0, "max {} < 0 for {:?}", r.max_val, values);
}

#[test]
fn range_always_contains_zero() {
    assert_straddles_zero(&[1.0, 2.0, 3.0, 100.0]);
    assert_straddles_zero(&[-9.0, -4.0, -2.5]);
    assert_straddles_zero(&[0.0, 0.0, 0.0]);
    assert_straddles_zero(&[7.0]);
    assert_straddles_zero(&[-7.0]);
    assert_straddles_zero(&[]);
    assert_straddles_zero(&[1e9, 1e9 + 1.0]);
}

#[test]
fn percentile_interpolates_linearly() {
    assert_eq!(percentile(&[4.0, 1.0, 3.0, 2.0], 50.0), 2.5);
    assert_eq!(percentile(&[10.0], 95.0), 10.0);
    assert!((percentile(&[-3.0, 0.0, 5.0, 8.0], 5.0) - -2.55).abs() < 1e-12);
    assert!((percentile(&[-3.0, 0.0, 5.0, 8.0], 95.0) - 7.55).abs() < 1e-12);
}

#[test]
fn padding_is_thirty_percent_of_percentile_span() {
    let r = ScaleRange::from_values(&[-3.0, 0.0, 5.0, 8.0]);
    // span 10.1, padding 3.03
    assert!((r.min_val - -5.58).abs() < 1e-9);
    assert!((r.max_val - 10.58).abs() < 1e-9);
    assert_eq!(r.data_min, -3.0);
    assert_eq!(r.data_max, 8.0);
}

#[test]
fn degenerate_spans_fall_back_to_unit_padding() {
    let zeros = ScaleRange::from_values(&[0.0, 0.0]);
    assert_eq!((zeros.min_val, zeros.max_val), (-1.0, 1.0));

    // single positive value: lower bound pulled below zero by the padding amount
    let single = ScaleRange::from_values(&[7.0]);
    assert_eq!((single.min_val, single.max_val), (-1.0, 8.0));

    let negative = ScaleRange::from_values(&[-7.0]);
    assert_eq!((negative.min_val, negative.max_val), (-8.0, 1.0));
}

#[test]
fn ticks_follow_raw_magnitude() {
    let r = ScaleRange::from_values(&[-8.0, 1.0, 4.0]);
    assert_eq!(r.tick_step(), 2.0);
    assert_eq!(r.tick_values(), vec![0.0, 2.0, 4.0, 6.0, 8.0]);

    // all zero: falls back to the padded max
    let z = ScaleRange::from_values(&[0.0]);
    assert_eq!(z.tick_step(), 0.25);
}

#[test]
fn mapper_endpoints_and_monotonicity() {
    let r = ScaleRange::from_values(&[-3.0, 0.0, 5.0, 8.0]);
    let m = ValueMapper::new(r, 50, 535);
    assert_eq!(m.to_px(r.min_val), 50);
    assert_eq!(m.to_px(r.max_val), 585);
    assert_eq!(m.to_px(-1e6), 50);
    assert_eq!(m.to_px(1e6), 585);

    let mut prev = i32::MIN;
    for k in -200..=200 {
        let x = m.to_px(k as f64 * 0.1);
        assert!(x >= prev, "not monotonic at {}", k);
        prev = x;
    }
}

#[test]
fn inverted_mapper_grows_upward() {
    let r = ScaleRange::from_values(&[-3.0, 0.0, 5.0, 8.0]);
    let m = ValueMapper::new_inverted(r, 0, 550);
    assert_eq!(m.to_px(r.max_val), 0);
    assert_eq!(m.to_px(r.min_val), 550);
    assert!(m.to_px(5.0) < m.zero_px());
    assert!(m.to_px(-3.0) > m.zero_px());
}

#[test]
fn zero_span_does_not_divide_by_zero() {
    let r = ScaleRange { min_val: 0.0, max_val: 0.0, data_min: 0.0, data_max: 0.0 };
    let m = ValueMapper::new(r, 10, 100);
    assert_eq!(m.to_px(0.0), 10);
    assert_eq!(m.to_px(0.5), 60);
    assert_eq!(m.to_px(f64::NAN), 10);
}
