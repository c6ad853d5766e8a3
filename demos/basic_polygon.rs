use region_borders::{
    core::math::vec2,
    polygon,
    polygon::{Polygon, RingOrientation, RingSource},
};

fn main() {
    polygon_creation();
    wrapping_indexes();
    ring_slices();
    geometric_properties();
}

fn polygon_creation() {
    // From a vector of points
    let square = Polygon::new(
        "square",
        vec![vec2(0.0, 0.0), vec2(1.0, 0.0), vec2(1.0, 1.0), vec2(0.0, 1.0)],
    );
    assert_eq!(square.vertex_count(), 4, "Square should have 4 points");
    assert_eq!(square.name(), "square");

    // From coordinate tuples
    let from_coords =
        Polygon::from_coords("square", [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
    assert_eq!(square, from_coords);

    // Macro
    let from_macro = polygon!["square"; (0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
    assert_eq!(square, from_macro);

    // Replacing points keeps the name
    let mut renamed = from_macro.clone();
    renamed.set_points(vec![vec2(0.0, 0.0), vec2(2.0, 0.0), vec2(1.0, 1.0)]);
    assert_eq!(renamed.name(), "square");
    assert_eq!(renamed.vertex_count(), 3);
}

fn wrapping_indexes() {
    let p = polygon!["p"; (0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];

    // The point after the last point is the first point
    assert_eq!(p.next_wrapping_index(3), 0);
    assert_eq!(p.prev_wrapping_index(0), 3);
    assert_eq!(p.point_at(5), vec2(1.0, 0.0), "Index 5 wraps to index 1");

    // Distance walking forward from 3 to 1 passes through the origin
    assert_eq!(p.fwd_wrapping_dist(3, 1), 2);
    assert_eq!(p.fwd_wrapping_index(3, 2), 1);
}

fn ring_slices() {
    let p = polygon!["p"; (0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (2.0, 1.0), (0.0, 1.0)];

    // start < end is a plain slice with exclusive end
    assert_eq!(p.slice(1, 3), vec![vec2(1.0, 0.0), vec2(2.0, 0.0)]);

    // start >= end wraps through the origin
    assert_eq!(
        p.slice(3, 1),
        vec![vec2(2.0, 1.0), vec2(0.0, 1.0), vec2(0.0, 0.0)]
    );

    // start == end is the whole ring beginning at start
    assert_eq!(p.slice(2, 2).len(), 5);
    assert_eq!(p.slice(2, 2)[0], vec2(2.0, 0.0));
}

fn geometric_properties() {
    let rect = polygon!["rect"; (0.0, 0.0), (4.0, 0.0), (4.0, 2.0), (0.0, 2.0)];

    assert_eq!(rect.area(), 8.0);
    assert_eq!(rect.orientation(), RingOrientation::CounterClockwise);
    assert_eq!(rect.path_length(), 12.0);

    // Length from index 0 to index 2 including both
    assert_eq!(rect.border_length(0, 2), 6.0);

    let extents = rect.extents().unwrap();
    assert_eq!(
        (extents.min_x, extents.min_y, extents.max_x, extents.max_y),
        (0.0, 0.0, 4.0, 2.0)
    );
    assert_eq!(rect.max_x(), 4.0);
}
