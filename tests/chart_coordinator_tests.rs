use linechart::core::{
    AxisKind, ChartSize, DataPoint, Labels, LineSeries, Scale, Series, SeriesId, ValueRange,
};
use linechart::render::NullRenderer;
use linechart::{ChartConfig, ChartCoordinator, ChartError};

fn coordinator(width: f64, height: f64) -> ChartCoordinator {
    ChartCoordinator::new(ChartConfig::new(ChartSize::new(width, height))).expect("coordinator")
}

fn peak_series() -> LineSeries {
    LineSeries::with_points([
        DataPoint::new(0.0, 0.0),
        DataPoint::new(10.0, 100.0),
        DataPoint::new(20.0, 0.0),
    ])
    .expect("finite points")
}

#[test]
fn empty_chart_defaults_both_axes_to_unit_range() {
    let chart = coordinator(300.0, 200.0);
    assert_eq!(chart.abscissa().range(), ValueRange::new(0.0, 1.0));
    assert_eq!(chart.ordinate().range(), ValueRange::new(0.0, 1.0));
    assert_eq!(chart.series_count(), 0);
}

#[test]
fn adding_series_merges_ranges_and_relayouts() {
    let mut chart = coordinator(300.0, 200.0);
    let id = chart.add_series(peak_series());

    assert_eq!(chart.series_ids(), &[id]);
    assert_eq!(chart.abscissa().range(), ValueRange::new(0.0, 20.0));
    assert_eq!(chart.ordinate().range(), ValueRange::new(0.0, 100.0));
    assert_eq!(chart.abscissa().factor(), 15.0);
    assert_eq!(chart.ordinate().factor(), 2.0);
    assert_eq!(chart.transform_point(DataPoint::new(10.0, 100.0)), (150.0, 200.0));
}

#[test]
fn axis_ranges_are_union_over_all_series() {
    let mut chart = coordinator(300.0, 200.0);
    chart.add_series(peak_series());
    chart.add_series(
        LineSeries::with_points([DataPoint::new(-5.0, 20.0), DataPoint::new(8.0, 140.0)])
            .expect("finite points"),
    );

    assert_eq!(chart.abscissa().range(), ValueRange::new(-5.0, 20.0));
    assert_eq!(chart.ordinate().range(), ValueRange::new(0.0, 140.0));
}

#[test]
fn empty_series_does_not_disturb_ranges() {
    let mut chart = coordinator(300.0, 200.0);
    chart.add_series(LineSeries::new());
    assert_eq!(chart.abscissa().range(), ValueRange::new(0.0, 1.0));

    chart.add_series(peak_series());
    assert_eq!(chart.abscissa().range(), ValueRange::new(0.0, 20.0));
}

#[test]
fn inserting_points_refreshes_ranges() {
    let mut chart = coordinator(300.0, 200.0);
    let id = chart.add_series(peak_series());

    chart
        .insert_point(id, DataPoint::new(30.0, 250.0))
        .expect("insert");
    assert_eq!(chart.abscissa().range(), ValueRange::new(0.0, 30.0));
    assert_eq!(chart.ordinate().range(), ValueRange::new(0.0, 250.0));
    assert_eq!(chart.abscissa().factor(), 10.0);
}

#[test]
fn inserting_into_unknown_series_fails() {
    let mut chart = coordinator(300.0, 200.0);
    let result = chart.insert_point(SeriesId(7), DataPoint::new(0.0, 0.0));
    assert!(matches!(result, Err(ChartError::UnknownSeries(SeriesId(7)))));
}

#[test]
fn rejected_point_leaves_chart_unchanged() {
    let mut chart = coordinator(300.0, 200.0);
    let id = chart.add_series(peak_series());
    let result = chart.insert_point(id, DataPoint::new(f64::NAN, 0.0));

    assert!(matches!(result, Err(ChartError::InvalidData(_))));
    assert_eq!(chart.series(id).map(|series| series.len()), Some(3));
    assert_eq!(chart.abscissa().range(), ValueRange::new(0.0, 20.0));
}

#[test]
fn series_mut_requires_explicit_refresh() {
    let mut chart = coordinator(300.0, 200.0);
    let id = chart.add_series(peak_series());

    chart
        .series_mut(id)
        .expect("registered")
        .insert_point(DataPoint::new(40.0, 0.0))
        .expect("insert");
    assert_eq!(chart.abscissa().range(), ValueRange::new(0.0, 20.0));

    chart.refresh();
    assert_eq!(chart.abscissa().range(), ValueRange::new(0.0, 40.0));
}

#[test]
fn removing_series_recomputes_ranges() {
    let mut chart = coordinator(300.0, 200.0);
    let first = chart.add_series(peak_series());
    let second = chart.add_series(
        LineSeries::with_points([DataPoint::new(50.0, 500.0)]).expect("finite points"),
    );
    assert_eq!(chart.abscissa().range(), ValueRange::new(0.0, 50.0));

    let removed = chart.remove_series(second).expect("remove");
    assert_eq!(removed.len(), 1);
    assert_eq!(chart.series_ids(), &[first]);
    assert_eq!(chart.abscissa().range(), ValueRange::new(0.0, 20.0));
    assert!(chart.remove_series(second).is_err());

    chart.remove_series(first).expect("remove");
    assert_eq!(chart.ordinate().range(), ValueRange::new(0.0, 1.0));
}

#[test]
fn series_ids_are_not_reused() {
    let mut chart = coordinator(300.0, 200.0);
    let first = chart.add_series(LineSeries::new());
    chart.remove_series(first).expect("remove");
    let second = chart.add_series(LineSeries::new());
    assert_ne!(first, second);
}

#[test]
fn set_size_forwards_extents_to_axes() {
    let mut chart = coordinator(300.0, 200.0);
    chart.add_series(peak_series());
    chart.set_size(600.0, 50.0).expect("resize");

    assert_eq!(chart.size(), ChartSize::new(600.0, 50.0));
    assert_eq!(chart.abscissa().size(), 600.0);
    assert_eq!(chart.ordinate().size(), 50.0);
    assert_eq!(chart.abscissa().factor(), 30.0);
    assert_eq!(chart.ordinate().factor(), 0.5);
}

#[test]
fn set_size_rejects_invalid_extents() {
    let mut chart = coordinator(300.0, 200.0);
    assert!(matches!(
        chart.set_size(-1.0, 10.0),
        Err(ChartError::InvalidSize { .. })
    ));
    assert!(chart.set_size(10.0, f64::NAN).is_err());
    assert_eq!(chart.size(), ChartSize::new(300.0, 200.0));
}

#[test]
fn pinned_axis_survives_new_series_until_unpinned() {
    let mut chart = coordinator(300.0, 200.0);
    chart.add_series(peak_series());
    chart
        .pin(AxisKind::Ordinate, ValueRange::new(0.0, 50.0))
        .expect("pin");

    chart.add_series(
        LineSeries::with_points([DataPoint::new(0.0, 1_000.0)]).expect("finite points"),
    );
    assert_eq!(chart.ordinate().range(), ValueRange::new(0.0, 50.0));
    assert_eq!(chart.ordinate().factor(), 4.0);
    assert_eq!(chart.abscissa().range(), ValueRange::new(0.0, 20.0));

    chart.unpin(AxisKind::Ordinate);
    assert_eq!(chart.ordinate().range(), ValueRange::new(0.0, 1_000.0));
    assert!(!chart.ordinate().is_range_pinned());
}

#[test]
fn pin_rejects_non_finite_ranges() {
    let mut chart = coordinator(300.0, 200.0);
    assert!(chart.pin(AxisKind::Abscissa, ValueRange::EMPTY).is_err());
    assert!(!chart.abscissa().is_range_pinned());
}

#[test]
fn configured_ranges_start_pinned() {
    let config = ChartConfig::new(ChartSize::new(100.0, 100.0))
        .with_x_range(ValueRange::new(-10.0, 10.0));
    let mut chart = ChartCoordinator::new(config).expect("coordinator");
    chart.add_series(peak_series());

    assert!(chart.abscissa().is_range_pinned());
    assert_eq!(chart.abscissa().range(), ValueRange::new(-10.0, 10.0));
    assert_eq!(chart.ordinate().range(), ValueRange::new(0.0, 100.0));
}

#[test]
fn transform_coordinate_inverts_transform_point() {
    let mut chart = coordinator(640.0, 480.0);
    chart.add_series(peak_series());

    let point = DataPoint::new(7.25, 33.0);
    let recovered = chart.transform_coordinate(chart.transform_point(point));
    assert!((recovered.x - point.x).abs() <= 1e-9);
    assert!((recovered.y - point.y).abs() <= 1e-9);
}

#[test]
fn polyline_is_windowed_to_visible_x_range() {
    let mut chart = coordinator(300.0, 200.0);
    let id = chart.add_series(peak_series());

    assert_eq!(
        chart.polyline(id).expect("polyline").points,
        vec![(0.0, 0.0), (150.0, 200.0), (300.0, 0.0)]
    );

    chart
        .pin(AxisKind::Abscissa, ValueRange::new(5.0, 15.0))
        .expect("pin");
    assert_eq!(
        chart.polyline(id).expect("polyline").points,
        vec![(-150.0, 0.0), (150.0, 200.0), (450.0, 0.0)]
    );
}

#[test]
fn zoom_between_two_points_keeps_crossing_segment() {
    let mut chart = coordinator(300.0, 200.0);
    let id = chart.add_series(
        LineSeries::with_points([DataPoint::new(0.0, 0.0), DataPoint::new(10.0, 10.0)])
            .expect("finite points"),
    );
    chart
        .pin(AxisKind::Abscissa, ValueRange::new(2.0, 8.0))
        .expect("pin");

    let polyline = chart.polyline(id).expect("polyline");
    assert_eq!(polyline.points, vec![(-100.0, 0.0), (400.0, 200.0)]);
    assert_eq!(polyline.segments().len(), 1);
}

#[test]
fn zoom_beside_the_data_draws_nothing() {
    let mut chart = coordinator(300.0, 200.0);
    let id = chart.add_series(peak_series());
    chart
        .pin(AxisKind::Abscissa, ValueRange::new(30.0, 40.0))
        .expect("pin");

    assert!(chart.polyline(id).expect("polyline").points.is_empty());
}

#[test]
fn pin_orders_inverted_bounds() {
    let mut chart = coordinator(300.0, 200.0);
    chart.add_series(peak_series());
    chart
        .pin(AxisKind::Abscissa, ValueRange::new(15.0, 5.0))
        .expect("pin");

    assert_eq!(chart.abscissa().range(), ValueRange::new(5.0, 15.0));
    assert_eq!(chart.abscissa().factor(), 30.0);
}

#[test]
fn log_ordinate_chart_renders() {
    let config = ChartConfig::new(ChartSize::new(300.0, 300.0))
        .with_y_scale(Scale::log(10.0).expect("valid base"));
    let mut chart = ChartCoordinator::new(config).expect("coordinator");
    chart.add_series(
        LineSeries::with_points([DataPoint::new(0.0, 1.0), DataPoint::new(10.0, 1_000.0)])
            .expect("finite points"),
    );

    let values: Vec<f64> = chart
        .ordinate()
        .ticks()
        .iter()
        .map(|tick| tick.value)
        .collect();
    assert_eq!(values, vec![500.0, 1_000.0]);
    assert!(
        chart
            .ordinate()
            .ticks()
            .iter()
            .all(|tick| tick.position.is_finite())
    );

    let mut renderer = NullRenderer::default();
    chart.render(&mut renderer).expect("render");
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_polyline_count, 1);
}

#[test]
fn frame_collects_axes_and_series_in_layer_order() {
    let mut chart = coordinator(300.0, 200.0);
    let first = chart.add_series(peak_series());
    let second = chart.add_series(LineSeries::new());
    chart.axis_mut(AxisKind::Abscissa).set_labels(Labels::Numeric);

    let frame = chart.frame();
    assert_eq!(frame.size, ChartSize::new(300.0, 200.0));
    let ids: Vec<SeriesId> = frame.series.iter().map(|polyline| polyline.id).collect();
    assert_eq!(ids, vec![first, second]);
    assert_eq!(frame.series[0].segments().len(), 2);
    assert!(frame.series[1].points.is_empty());

    let labels: Vec<&str> = frame
        .abscissa
        .ticks
        .iter()
        .filter_map(|tick| tick.label.as_deref())
        .collect();
    assert_eq!(labels, vec!["0", "5", "10", "15", "20"]);
    let ordinate_values: Vec<f64> = frame
        .ordinate
        .ticks
        .iter()
        .map(|tick| tick.value)
        .collect();
    assert_eq!(ordinate_values, vec![0.0, 50.0, 100.0]);
}

#[test]
fn null_renderer_receives_validated_frame() {
    let mut chart = coordinator(300.0, 200.0);
    chart.add_series(peak_series());
    let mut renderer = NullRenderer::default();

    chart.render(&mut renderer).expect("render");
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_polyline_count, 1);
    assert_eq!(renderer.last_tick_count, 8);
}

#[test]
fn frame_json_contains_axis_kinds() {
    let mut chart = coordinator(300.0, 200.0);
    chart.add_series(peak_series());

    let json = chart.frame_json_pretty().expect("json");
    assert!(json.contains("\"abscissa\""));
    assert!(json.contains("\"kind\": \"ordinate\""));
}

#[test]
fn series_lookup_exposes_trait_capabilities() {
    let mut chart = coordinator(300.0, 200.0);
    let id = chart.add_series(peak_series());
    let series = chart.series(id).expect("registered");

    assert_eq!(series.value_at(5.0), Some(50.0));
    assert!(chart.series(SeriesId(99)).is_none());
}
