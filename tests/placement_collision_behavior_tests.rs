use approx::assert_relative_eq;
use pie_labels_rs::api::{LineTextLayer, LineTextLayerSettings};
use pie_labels_rs::core::{PieSlice, Point, SliceData, SliceGeometry, SliceId};
use pie_labels_rs::render::RecordingSurface;

fn slice_at(id: u32, title: &str, value: f64, center: Point, mid_angle: f64) -> PieSlice {
    PieSlice::new(
        SliceId::new(id),
        SliceData::new(title, value),
        SliceGeometry::new(center, 0.0, mid_angle, 0.0, 0.0, 50.0, 12.0),
    )
}

fn default_layer() -> LineTextLayer {
    LineTextLayer::new(LineTextLayerSettings::default()).expect("valid default settings")
}

#[test]
fn first_slice_on_empty_layer_is_placed_in_full() {
    let mut layer = default_layer();
    let mut surface = RecordingSurface::default();
    let slice = slice_at(0, "A", 10.0, Point::new(100.0, 100.0), 0.0);

    layer.add_items(&mut surface, &slice);

    let record = layer.record(slice.id).expect("record for first slice");
    assert!(record.line.attached);
    assert!(record.title.attached);
    assert!(record.value.attached);
    assert!(!layer.marker_mode());

    assert_eq!(surface.line_count(), 1);
    assert_eq!(surface.label_count(), 2);
    assert_eq!(surface.marker_count(), 0);
    assert!(surface.violations().is_empty());

    // Line, value, and title all received entrance animations.
    let appeared = &layer.animator().appeared;
    assert!(appeared.contains(&record.line.id));
    assert!(appeared.contains(&record.value.id));
    assert!(appeared.contains(&record.title.id));
}

#[test]
fn default_scenario_places_expected_line_and_texts() {
    let mut layer = default_layer();
    let mut surface = RecordingSurface::default();
    let slice = slice_at(0, "A", 10.0, Point::new(100.0, 100.0), 0.0);

    layer.add_items(&mut surface, &slice);

    let record = layer.record(slice.id).expect("record");
    assert_eq!(record.title.label.text, "A");
    assert_eq!(record.value.label.text, "10");

    // Line starts at outer_radius + chart_offset along the mid-angle and
    // bends right by segment2_length.
    let [p1, p2, p3] = record.line.shape.points;
    assert_relative_eq!(p1.x, 155.0);
    assert_relative_eq!(p1.y, 100.0);
    assert_relative_eq!(p2.x, 165.0);
    assert_relative_eq!(p3.x, 180.0);
    assert_relative_eq!(p3.y, p2.y);
    assert!(!layer.marker_mode());
}

#[test]
fn re_adding_a_placed_slice_is_a_no_op() {
    let mut layer = default_layer();
    let mut surface = RecordingSurface::default();
    let slice = slice_at(0, "A", 10.0, Point::new(100.0, 100.0), 0.0);

    layer.add_items(&mut surface, &slice);
    let record_before = layer.record(slice.id).expect("record").clone();
    let attach_calls_before = surface.attach_calls;
    let appeared_before = layer.animator().appeared.len();

    layer.add_items(&mut surface, &slice);

    assert_eq!(layer.placed_len(), 1);
    assert_eq!(surface.attach_calls, attach_calls_before);
    assert_eq!(layer.animator().appeared.len(), appeared_before);
    assert_eq!(layer.record(slice.id).expect("record"), &record_before);
}

#[test]
fn fully_colliding_slice_degrades_to_marker_dot() {
    let mut layer = default_layer();
    let mut surface = RecordingSurface::default();
    let first = slice_at(0, "A", 10.0, Point::new(100.0, 100.0), 0.0);
    let second = slice_at(1, "B", 20.0, Point::new(100.0, 100.0), 0.0);

    layer.add_items(&mut surface, &first);
    layer.add_items(&mut surface, &second);

    assert!(layer.marker_mode());
    let record = layer.record(second.id).expect("record for colliding slice");
    assert!(!record.line.attached);
    assert!(!record.title.attached);
    assert!(!record.value.attached);

    // The dot sits at the colliding slice's own line origin.
    let markers = layer.store().markers();
    assert_eq!(markers.len(), 1);
    assert_relative_eq!(markers[0].dot.center.x, 155.0);
    assert_relative_eq!(markers[0].dot.center.y, 100.0);
    assert_eq!(surface.marker_count(), 1);
    assert_eq!(surface.line_count(), 1);
    assert_eq!(surface.label_count(), 2);

    // Legacy behavior kept on purpose: the colliding slice's labels were
    // created and animated even though they never reached the surface.
    let appeared = &layer.animator().appeared;
    assert!(appeared.contains(&record.title.id));
    assert!(appeared.contains(&record.value.id));
    assert!(!appeared.contains(&record.line.id));
    assert!(!surface.contains(record.title.id));
    assert!(!surface.contains(record.value.id));
    assert!(!surface.contains(record.line.id));
}

#[test]
fn value_only_collision_attaches_title_but_degrades_line() {
    let mut layer = default_layer();
    let mut surface = RecordingSurface::default();
    // Same mid-angle, centers 20 px apart: one-glyph titles stay clear of
    // each other while the wide "1000" value labels overlap.
    let first = slice_at(0, "A", 1000.0, Point::new(100.0, 100.0), 0.0);
    let second = slice_at(1, "B", 1000.0, Point::new(120.0, 100.0), 0.0);

    layer.add_items(&mut surface, &first);
    layer.add_items(&mut surface, &second);

    assert!(layer.marker_mode());
    let record = layer.record(second.id).expect("record");
    assert!(record.title.attached);
    assert!(!record.value.attached);
    assert!(!record.line.attached);
    assert_eq!(surface.marker_count(), 1);
    assert_relative_eq!(layer.store().markers()[0].dot.center.x, 175.0);

    let appeared = &layer.animator().appeared;
    assert!(appeared.contains(&record.title.id));
    assert!(appeared.contains(&record.value.id));
    assert!(!appeared.contains(&record.line.id));
}

#[test]
fn comparison_loop_breaks_before_checking_later_records() {
    let mut layer = default_layer();
    let mut surface = RecordingSurface::default();
    let first = slice_at(0, "A", 10.0, Point::new(0.0, 0.0), 0.0);
    let second = slice_at(1, "B", 20.0, Point::new(300.0, 0.0), 0.0);
    // Identical geometry to the second slice, so its labels overlap the
    // second record exactly -- but the loop stops after the clean first
    // comparison and never looks at it.
    let third = slice_at(2, "C", 30.0, Point::new(300.0, 0.0), 0.0);

    layer.add_items(&mut surface, &first);
    layer.add_items(&mut surface, &second);
    layer.add_items(&mut surface, &third);

    assert!(!layer.marker_mode());
    assert_eq!(surface.marker_count(), 0);
    let record = layer.record(third.id).expect("record");
    assert!(record.line.attached);
    assert!(record.title.attached);
    assert!(record.value.attached);
}

#[test]
fn marker_mode_is_sticky_for_later_collision_free_slices() {
    let mut layer = default_layer();
    let mut surface = RecordingSurface::default();
    let first = slice_at(0, "A", 10.0, Point::new(100.0, 100.0), 0.0);
    let second = slice_at(1, "B", 20.0, Point::new(100.0, 100.0), 0.0);
    // Far side of the chart: no collision with anything placed so far.
    let third = slice_at(2, "C", 30.0, Point::new(600.0, 600.0), std::f64::consts::PI);

    layer.add_items(&mut surface, &first);
    layer.add_items(&mut surface, &second);
    layer.add_items(&mut surface, &third);

    let record = layer.record(third.id).expect("record");
    assert!(record.line.attached);
    assert!(record.title.attached);
    assert!(record.value.attached);

    // Still latched: the collision-free slice gets a dot as well.
    assert!(layer.marker_mode());
    assert_eq!(surface.marker_count(), 2);
    let markers = layer.store().markers();
    assert_relative_eq!(markers[1].dot.center.x, 600.0 - 55.0, epsilon = 1e-9);
}

#[test]
fn disabled_marker_preference_latches_without_placing_dots() {
    let settings = LineTextLayerSettings::default()
        .with_marker(pie_labels_rs::api::MarkerDotSettings::default().with_enabled(false));
    let mut layer = LineTextLayer::new(settings).expect("valid settings");
    let mut surface = RecordingSurface::default();
    let first = slice_at(0, "A", 10.0, Point::new(100.0, 100.0), 0.0);
    let second = slice_at(1, "B", 20.0, Point::new(100.0, 100.0), 0.0);

    layer.add_items(&mut surface, &first);
    layer.add_items(&mut surface, &second);

    assert!(layer.marker_mode());
    assert_eq!(surface.marker_count(), 0);
    assert!(layer.store().markers().is_empty());
}
