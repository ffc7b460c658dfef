// File: crates/chart-engine/tests/normalize.rs
// Purpose: Shared-domain normalization over irregular, mixed and empty inputs.

use chart_engine::{
    normalize, Bounds, Chart, ChartDataPoint as P, ChartSeries, Domain, DomainKind, LayoutOptions, XValue,
};
use chrono::{TimeZone, Utc};

fn irregular() -> Vec<ChartSeries> {
    vec![
        ChartSeries::new("cpu", "CPU").with_points(vec![P::new(0.0, 10.0), P::new(2.0, 30.0), P::new(5.0, 20.0)]),
        ChartSeries::new("mem", "Memory").with_points(vec![P::new(1.0, 40.0), P::new(2.0, 45.0)]),
        ChartSeries::new("idle", "Idle"),
    ]
}

#[test]
fn every_series_is_dense_over_the_domain() {
    let n = normalize(&irregular());
    assert_eq!(n.domain, Domain::Numeric(vec![0.0, 1.0, 2.0, 5.0]));
    for s in &n.series {
        assert_eq!(s.points.len(), n.domain.len(), "series {}", s.id);
    }
    let idle: Vec<f64> = n.series[2].points.iter().map(|p| p.y).collect();
    assert_eq!(idle, vec![0.0; 4]);
}

#[test]
fn bounds_cover_filled_values() {
    let n = normalize(&irregular());
    assert_eq!(n.raw_bounds, Bounds { min_x: 0.0, max_x: 5.0, min_y: 0.0, max_y: 45.0 });
    assert!((n.bounds.min_y - -4.5).abs() < 1e-9);
    assert!((n.bounds.max_y - 49.5).abs() < 1e-9);
}

#[test]
fn empty_inputs_are_not_errors() {
    let n = normalize(&[]);
    assert!(n.domain.is_empty());
    assert!(n.series.is_empty());
    assert_eq!(n.bounds, Bounds::zero());

    let n = normalize(&[ChartSeries::new("a", "A"), ChartSeries::new("b", "B")]);
    assert!(n.domain.is_empty());
    assert_eq!(n.bounds, Bounds::zero());
    assert!(n.series.iter().all(|s| s.points.is_empty()));
}

#[test]
fn mixed_keys_collapse_to_categorical() {
    let series = vec![
        ChartSeries::new("a", "A").with_points(vec![P::new(2.0, 1.0), P::new(10.0, 2.0)]),
        ChartSeries::new("b", "B").with_points(vec![P::new("Q1", 3.0)]),
    ];
    let n = normalize(&series);
    assert_eq!(n.domain.kind(), DomainKind::Categorical);
    assert_eq!(n.domain, Domain::Categorical(vec!["10".into(), "2".into(), "Q1".into()]));
    assert_eq!(n.series[0].points[0].y, 2.0);
    assert_eq!(n.series[0].points[2].original.label.as_deref(), Some("Q1"));
}

#[test]
fn dates_make_a_temporal_domain() {
    let d = |day| Utc.with_ymd_and_hms(2024, 3, day, 0, 0, 0).unwrap();
    let series = vec![
        ChartSeries::new("visits", "Visits").with_points(vec![P::new(d(3), 5.0), P::new(d(1), 2.0)]),
        ChartSeries::new("signups", "Signups").with_points(vec![P::new(d(2), 1.0)]),
    ];
    let n = normalize(&series);
    assert_eq!(n.domain.kind(), DomainKind::Temporal);
    assert_eq!(n.domain.label(0), "2024-03-01");
    // gap-filled date keeps its date type
    assert_eq!(n.series[1].points[0].original.x, XValue::Date(d(1)));
    assert_eq!(n.series[0].points[2].y, 5.0);
}

#[test]
fn temporal_gaps_use_the_axis_label_format() {
    let d = |day| Utc.with_ymd_and_hms(2024, 3, day, 0, 0, 0).unwrap();
    let series = vec![
        ChartSeries::new("a", "A").with_points(vec![P::new(d(1), 4.0), P::new(d(2), 6.0)]),
        ChartSeries::new("b", "B").with_points(vec![P::new(d(2), 3.0)]),
    ];
    let n = normalize(&series);
    let gap = &n.series[1].points[0];
    assert!(!gap.present);
    assert_eq!(gap.original.label.as_deref(), Some(n.domain.label(0).as_str()));

    let frame = Chart { series, options: LayoutOptions::default() }.bar_frame();
    let labels: Vec<(&str, &str)> =
        frame.bars.iter().filter(|b| b.category == 0).map(|b| (b.series_id.as_str(), b.label.as_str())).collect();
    assert_eq!(labels, vec![("a", "03-01 00:00"), ("b", "03-01 00:00")]);
}

#[test]
fn non_finite_y_coerces_to_zero() {
    let s = ChartSeries::new("s", "S").with_points(vec![P::new(0.0, f64::NAN), P::new(1.0, f64::INFINITY)]);
    let n = normalize(&[s]);
    assert!(n.series[0].points.iter().all(|p| p.y == 0.0 && p.present));
}

#[test]
fn value_equal_inputs_normalize_equally() {
    let a = normalize(&irregular());
    let b = normalize(&irregular().clone());
    assert_eq!(a, b);
    // no drift on repeated calls with the same input
    let input = irregular();
    assert_eq!(normalize(&input), normalize(&input));
}

#[test]
fn explicit_colors_win_and_palette_cycles() {
    let series = vec![
        ChartSeries::new("a", "A").with_points(vec![P::new(0.0, 1.0)]).with_color("#112233"),
        ChartSeries::new("b", "B").with_points(vec![P::new(0.0, 1.0)]),
    ];
    let n = normalize(&series);
    assert_eq!(n.series[0].color, "#112233");
    assert_eq!(n.series[1].color, chart_engine::color::DEFAULT_PALETTE[1]);
}
