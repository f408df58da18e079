// File: crates/chart-core/tests/autoscale.rs
// Purpose: Validate autorange over primary/secondary axes and mixed series types.

use chart_core::{Axis, Chart, Series, ViewState, XData, YAxisRef};

#[test]
fn autoscale_dual_axis() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::category("Device");
    chart.y_axis = Axis::linear("Clicks");
    chart.y2_axis = Some(Axis::linear("CTR (%)"));

    chart.add_series(Series::bar("Clicks", XData::categories(["Mobile", "Desktop", "Tablet"]), vec![67.0, 28.0, 1.0]));
    chart.add_series(
        Series::bar("CTR (%)", XData::categories(["Mobile", "Desktop", "Tablet"]), vec![7.2, 1.88, 7.14])
            .on_axis(YAxisRef::Secondary),
    );

    let v = ViewState::from_chart(&chart);

    // Categories span the whole band range
    assert_eq!(v.x_range(), (-0.5, 2.5));

    // Primary axis holds clicks and rests on zero
    assert_eq!(v.y_min, 0.0);
    assert!(v.y_max >= 67.0);
    assert!(v.y_max < 80.0);

    // Secondary axis is scaled independently
    let (lo, hi) = v.y2.expect("secondary range");
    assert_eq!(lo, 0.0);
    assert!(hi >= 7.2 && hi < 10.0);
}

#[test]
fn autoscale_lines_pad_both_sides() {
    let mut chart = Chart::new();
    chart.add_series(Series::line("l", XData::Numeric(vec![0.0, 10.0]), vec![10.0, 20.0]));
    let v = ViewState::from_chart(&chart);
    assert!(v.x_min < 0.0 && v.x_max > 10.0);
    assert!(v.y_min < 10.0 && v.y_max > 20.0);
    assert!(v.y2.is_none(), "no secondary axis configured");
}

#[test]
fn secondary_series_without_axis_falls_back() {
    let mut chart = Chart::new();
    chart.add_series(Series::line("l", XData::Numeric(vec![0.0, 1.0]), vec![1.0, 2.0]).on_axis(YAxisRef::Secondary));
    assert!(!chart.uses_y2());
    // the series still drives the primary range
    let v = ViewState::from_chart(&chart);
    assert!(v.y_min < 1.0 && v.y_max > 2.0);
}
