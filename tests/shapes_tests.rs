use softshape::shapes::{self, CIRCULAR_ARC_HANDLE};
use softshape::{PhysicsError, Vec2};

fn edges(shape: &[Vec2<f64>]) -> impl Iterator<Item = (Vec2<f64>, Vec2<f64>)> + '_ {
    (0..shape.len()).map(move |i| (shape[i], shape[(i + 1) % shape.len()]))
}

#[test]
fn from_coords_pairs_up() {
    let shape = shapes::from_coords(&[0.0f32, 1.0, 2.0, 3.0]);
    assert_eq!(shape, vec![Vec2::new(0.0, 1.0), Vec2::new(2.0, 3.0)]);
}

#[test]
#[should_panic(expected = "odd length")]
fn from_coords_odd_length_panics() {
    shapes::from_coords(&[0.0f32, 1.0, 2.0]);
}

#[test]
fn bezier_zero_div_is_endpoints() {
    let p1 = Vec2::new(0.1f64, 0.7);
    let p4 = Vec2::new(-3.3, 9.9);
    let curve = shapes::bezier(p1, Vec2::new(5.0, 5.0), Vec2::new(-5.0, 2.0), p4, 0);
    assert_eq!(curve, vec![p1, p4]);
}

#[test]
fn bezier_endpoints_exact_for_any_div() {
    let p1 = Vec2::new(1.25f64, -0.75);
    let p4 = Vec2::new(7.5, 3.125);
    for div in 0..20 {
        let curve = shapes::bezier(p1, Vec2::new(2.0, 8.0), Vec2::new(6.0, -4.0), p4, div);
        assert_eq!(curve.len(), div + 2);
        assert_eq!(curve[0], p1);
        assert_eq!(curve[div + 1], p4);
    }
}

#[test]
fn circle_vertices_on_radius() {
    let shape = shapes::circle(3.5f64, 17);
    assert_eq!(shape.len(), 17);
    for p in &shape {
        assert!((p.length() - 3.5).abs() < 1e-9);
    }
    assert!((shape[0] - Vec2::new(3.5, 0.0)).length() < 1e-12);
}

#[test]
fn circle_zero_div_is_empty() {
    assert!(shapes::circle(1.0f32, 0).is_empty());
}

#[test]
fn smooth_rect_layout() {
    let div = 6;
    let shape = shapes::smooth_rect(20.0f64, 10.0, 3.0, CIRCULAR_ARC_HANDLE as f64, div);
    assert_eq!(shape.len(), 4 * (div + 2));

    // Everything inside the bounding box, and counter-clockwise.
    for p in &shape {
        assert!(p.x.abs() <= 10.0 + 1e-9 && p.y.abs() <= 5.0 + 1e-9, "{:?}", p);
    }
    assert!(shapes::area(&shape) > 0.0);

    // Bottom-left corner starts on the left edge, r1 above the corner.
    assert!((shape[0] - Vec2::new(-10.0, -2.0)).length() < 1e-9);
    assert!((shape[div + 1] - Vec2::new(-7.0, -5.0)).length() < 1e-9);
}

#[test]
fn smooth_rect_corners_are_nearly_circular() {
    let r = 4.0f64;
    let shape = shapes::smooth_rect(20.0, 20.0, r, CIRCULAR_ARC_HANDLE as f64, 10);
    // First corner's arc is centered at (-10 + r, -10 + r).
    let center = Vec2::new(-10.0 + r, -10.0 + r);
    for p in &shape[..12] {
        assert!((p.distance(center) - r).abs() < 0.01 * r, "{:?}", p);
    }
}

#[test]
fn limit_edge_bounds_every_edge() {
    let shape = shapes::from_coords(&[0.0f64, 0.0, 10.0, 0.0, 10.0, 3.0, 0.0, 10.0]);
    for &max in &[0.7, 1.0, 2.5, 4.0, 100.0] {
        let out = shapes::limit_edge(&shape, max);
        for (a, b) in edges(&out) {
            assert!(a.distance(b) <= max + 1e-9, "edge {} > {}", a.distance(b), max);
        }
        // Input vertices survive, in order.
        let mut cursor = 0;
        for v in &shape {
            let found = out[cursor..].iter().position(|p| p == v);
            assert!(found.is_some(), "vertex {:?} lost for max {}", v, max);
            cursor += found.unwrap_or(0) + 1;
        }
    }
}

#[test]
fn limit_edge_exact_multiple_inserts_one_less() {
    let shape = shapes::from_coords(&[0.0f64, 0.0, 4.0, 0.0]);
    // Both edges have length 4; with max 2 each gets exactly one midpoint.
    let out = shapes::limit_edge(&shape, 2.0);
    assert_eq!(out, vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(2.0, 0.0),
        Vec2::new(4.0, 0.0),
        Vec2::new(2.0, 0.0),
    ]);
}

#[test]
fn limit_edge_many_pieces_in_f32() {
    let shape = vec![Vec2::new(0.0f32, 0.0), Vec2::new(1000.0, 0.0)];
    let out = shapes::limit_edge(&shape, 0.25);
    // 4000 pieces per edge, so 3999 inserted points on each of the two edges.
    assert_eq!(out.len(), 2 + 2 * 3999);
    assert_eq!(out[0], Vec2::new(0.0, 0.0));
    assert_eq!(out[4000], Vec2::new(1000.0, 0.0));
    assert!((out[1].x - 0.25).abs() < 1e-4);
    assert!((out[3999].x - 999.75).abs() < 1e-3);
    for i in 1..4000 {
        assert!(out[i].x > out[i - 1].x);
    }
}

#[test]
fn limit_edge_rejects_non_positive_max() {
    let shape = shapes::circle(1.0f32, 5);
    assert_eq!(shapes::try_limit_edge(&shape, 0.0), Err(PhysicsError::InvalidEdgeLength));
    assert_eq!(shapes::try_limit_edge(&shape, -1.0), Err(PhysicsError::InvalidEdgeLength));
}

#[test]
fn center_is_mean() {
    let shape = shapes::from_coords(&[0.0f64, 0.0, 4.0, 0.0, 4.0, 2.0, 0.0, 2.0]);
    assert_eq!(shapes::center(&shape), Vec2::new(2.0, 1.0));
}

#[test]
fn contain_center_and_far_point() {
    for div in 3..12 {
        let shape = shapes::circle(5.0f64, div);
        assert!(shapes::contains(&shape, shapes::center(&shape)), "div {}", div);
        assert!(!shapes::contains(&shape, Vec2::new(1000.0, -400.0)));
    }
}

#[test]
fn contain_concave() {
    // U shape: the notch between the arms is outside.
    let u = shapes::from_coords(&[0.0f64, 0.0, 6.0, 0.0, 6.0, 6.0, 4.0, 6.0, 4.0, 2.0, 2.0, 2.0, 2.0, 6.0, 0.0, 6.0]);
    assert!(shapes::contains(&u, Vec2::new(1.0, 4.0)));
    assert!(shapes::contains(&u, Vec2::new(5.0, 4.0)));
    assert!(shapes::contains(&u, Vec2::new(3.0, 1.0)));
    assert!(!shapes::contains(&u, Vec2::new(3.0, 4.0)));
}

#[test]
fn contain_invariant_under_translation() {
    let shape = shapes::from_coords(&[0.0f64, 0.0, 5.0, 1.0, 6.0, 5.0, 2.5, 3.0, -1.0, 4.0]);
    let probes = [
        Vec2::new(2.1, 1.3),
        Vec2::new(4.7, 3.9),
        Vec2::new(2.6, 3.6),
        Vec2::new(-0.4, 2.2),
        Vec2::new(7.0, 2.0),
    ];
    let offset = Vec2::new(13.25, -7.5);
    let moved = shapes::translate(&shape, offset);
    for &p in &probes {
        assert_eq!(shapes::contains(&shape, p), shapes::contains(&moved, p + offset), "{:?}", p);
    }
}

#[test]
fn normals_are_unit_length() {
    let shapes_under_test = [
        shapes::circle(2.0f64, 9),
        shapes::smooth_rect(8.0, 3.0, 1.0, 0.5, 3),
        shapes::from_coords(&[0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 1.0]),
    ];
    for shape in &shapes_under_test {
        for n in shapes::edge_normals(shape).iter().chain(shapes::point_normals(shape).iter()) {
            assert!((n.length() - 1.0).abs() < 1e-9, "{:?}", n);
        }
    }
}

#[test]
fn point_normals_of_circle_point_outward() {
    let shape = shapes::circle(1.0f64, 12);
    for (p, n) in shape.iter().zip(shapes::point_normals(&shape).iter()) {
        assert!((*n - p.unit()).length() < 1e-9);
    }
}

#[test]
fn nearest_index_finds_closest_edge() {
    let square = shapes::from_coords(&[0.0f64, 0.0, 10.0, 0.0, 10.0, 10.0, 0.0, 10.0]);
    let hit = shapes::nearest_index(&square, Vec2::new(12.0, 7.0)).expect("non-empty");
    assert_eq!(hit.index, 1);
    assert!((hit.s - 0.7).abs() < 1e-9);
    assert!((hit.distance - 2.0).abs() < 1e-9);

    let hit = shapes::nearest_index(&square, Vec2::new(3.0, 1.0)).expect("non-empty");
    assert_eq!(hit.index, 0);
    assert!((hit.s - 0.3).abs() < 1e-9);
}

#[test]
fn sketchy_copies_stay_near_outline() {
    let shape = shapes::circle(10.0f64, 16);
    let copies = shapes::to_sketchy(&shape, 3, 0.5, 42);
    assert_eq!(copies.len(), 3);
    for copy in &copies {
        assert_eq!(copy.len(), shape.len());
        for (p, q) in shape.iter().zip(copy.iter()) {
            assert!(p.distance(*q) <= 0.5 + 1e-9);
            // Displacement is along the radial vertex normal.
            assert!((*q - *p).cross(*p).abs() < 1e-6);
        }
    }
    assert_ne!(copies[0], copies[1]);
}

#[test]
fn sketchy_is_deterministic_per_seed() {
    let shape = shapes::circle(10.0f32, 8);
    assert_eq!(shapes::to_sketchy(&shape, 2, 1.0, 7), shapes::to_sketchy(&shape, 2, 1.0, 7));
    assert_ne!(shapes::to_sketchy(&shape, 1, 1.0, 7), shapes::to_sketchy(&shape, 1, 1.0, 8));
}

#[test]
fn sketchy_rejects_zero_repeat() {
    let shape = shapes::circle(1.0f32, 4);
    assert_eq!(shapes::try_to_sketchy(&shape, 0, 1.0, 0), Err(PhysicsError::InvalidRepeat));
}
