// File: crates/radar-core/tests/layout.rs
// Purpose: Validate the polar layout: angles, rings, polygon radii, labels.

use radar_core::layout::{label_align, label_origin, sector_angles, LabelAlign, RadarLayout};
use radar_core::types::{fit_side, Point, MAX_SIDE, OUTER_RADIUS_RATIO, RING_COUNT};

const EPS: f32 = 1e-3;

fn assert_close(got: f32, want: f32, what: &str) {
    assert!(
        (got - want).abs() < EPS,
        "{what}: got {got}, want {want}"
    );
}

#[test]
fn angles_evenly_spaced_from_north() {
    for n in [2usize, 3, 5, 8] {
        let angles = sector_angles(n);
        assert_eq!(angles.len(), n);
        assert_close(angles[0], 0.0, "first angle");
        let step = 360.0 / n as f32;
        for i in 1..n {
            assert_close(angles[i] - angles[i - 1], step, "angle step");
        }
    }
}

#[test]
fn point_at_follows_position_formula() {
    let layout = RadarLayout::new(500.0, 4);
    // North: straight up from center.
    let top = layout.point_at(0.0, 200.0);
    assert_close(top.x, 250.0, "north x");
    assert_close(top.y, 50.0, "north y");
    // 90 degrees clockwise: due east.
    let right = layout.point_at(90.0, 200.0);
    assert_close(right.x, 450.0, "east x");
    assert_close(right.y, 250.0, "east y");
}

#[test]
fn rings_are_nested_and_concentric() {
    let layout = RadarLayout::new(500.0, 5);
    let outer = 500.0 * OUTER_RADIUS_RATIO;
    for k in 1..=RING_COUNT {
        let want = outer * k as f32 / RING_COUNT as f32;
        for v in layout.ring(k) {
            assert_close(v.distance(layout.center), want, "ring radius");
        }
    }
    // Outermost ring touches the outer radius.
    for v in layout.outer_vertices() {
        assert_close(v.distance(layout.center), outer, "outer vertex radius");
    }
}

#[test]
fn polygon_radii_scenario_by_sum() {
    // Values 10/20/30 on a 500-unit surface: divisor 60, outer radius 200.
    let layout = RadarLayout::new(500.0, 3);
    let vertices = layout.polygon(&[10.0, 20.0, 30.0], 60.0);
    let want = [33.333f32, 66.667, 100.0];
    for (v, w) in vertices.iter().zip(want) {
        assert_close(v.distance(layout.center), w, "vertex radius (sum)");
    }
    let angles = layout.angles();
    assert_close(angles[0], 0.0, "angle 0");
    assert_close(angles[1], 120.0, "angle 1");
    assert_close(angles[2], 240.0, "angle 2");
}

#[test]
fn polygon_radii_scenario_by_max() {
    // Same values normalized by the maximum: divisor 30.
    let layout = RadarLayout::new(500.0, 3);
    let vertices = layout.polygon(&[10.0, 20.0, 30.0], 30.0);
    let want = [66.667f32, 133.333, 200.0];
    for (v, w) in vertices.iter().zip(want) {
        assert_close(v.distance(layout.center), w, "vertex radius (max)");
    }
}

#[test]
fn polygon_radius_monotonic_in_value() {
    let layout = RadarLayout::new(400.0, 4);
    let vertices = layout.polygon(&[1.0, 2.0, 3.0, 4.0], 10.0);
    let radii: Vec<f32> = vertices.iter().map(|v| v.distance(layout.center)).collect();
    for pair in radii.windows(2) {
        assert!(pair[0] < pair[1], "radius should grow with value");
    }
    // Never past the outer radius while value <= divisor.
    for r in radii {
        assert!(r <= layout.outer_radius + EPS);
    }
}

#[test]
fn resize_recomputes_outer_radius() {
    assert_close(fit_side(300.0), 300.0, "container narrower than cap");
    assert_close(fit_side(800.0), MAX_SIDE, "container wider than cap");
    let layout = RadarLayout::new(fit_side(300.0), 3);
    assert_close(layout.outer_radius, 120.0, "outer radius after resize");
    assert_close(layout.center.x, 150.0, "center after resize");
}

#[test]
fn label_side_selection() {
    assert_eq!(label_align(250.0, 250.0), LabelAlign::Center);
    assert_eq!(label_align(250.4, 250.0), LabelAlign::Center); // rounds back
    assert_eq!(label_align(251.0, 250.0), LabelAlign::Right);
    assert_eq!(label_align(160.0, 250.0), LabelAlign::Left);
}

#[test]
fn label_origin_per_side() {
    let layout = RadarLayout::new(500.0, 4);
    let width = 30.0;

    // Top vertex: centered, pushed up and away from the marker.
    let origin = label_origin(Point::new(250.0, 50.0), &layout, width);
    assert_close(origin.x, 235.0, "top label x");
    assert_close(origin.y, 40.1, "top label y");

    // Right vertex: starts 5 units right, baseline nudged down.
    let origin = label_origin(Point::new(450.0, 250.0), &layout, width);
    assert_close(origin.x, 455.0, "right label x");
    assert_close(origin.y, 254.5, "right label y");

    // Left vertex: ends 5 units left of the vertex.
    let origin = label_origin(Point::new(50.0, 250.0), &layout, width);
    assert_close(origin.x, 15.0, "left label x");
    assert_close(origin.y, 254.5, "left label y");

    // Bottom vertex: centered, pushed further down.
    let origin = label_origin(Point::new(250.0, 450.0), &layout, width);
    assert_close(origin.x, 235.0, "bottom label x");
    assert_close(origin.y, 468.9, "bottom label y");
}
