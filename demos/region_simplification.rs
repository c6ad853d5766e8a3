use region_borders::{
    polygon,
    polygon::RingSource,
    polygon_set::{simplify_polygons, PolygonSet},
    simplify::SimplifyOptions,
};

fn main() {
    simplify_polygon_set();
    simplify_polygon_list();
}

fn simplify_polygon_set() {
    let mut set = PolygonSet::new();
    let west = set.insert(polygon![
        "west";
        (0.0, 0.0), (1.0, 0.0), (1.0, 0.5), (1.0, 1.0), (0.5, 1.0), (0.0, 1.0), (0.0, 0.5)
    ]);
    let east = set.insert(polygon![
        "east";
        (1.0, 0.0), (2.0, 0.0), (2.0, 1.0), (1.0, 1.0), (1.0, 0.5)
    ]);

    let options = SimplifyOptions {
        snap_distance: 0.01,
        border_tolerance: 0.01,
        outside_tolerance: 0.01,
    };
    let report = set.simplify(&options);
    assert_eq!(report.touching_pairs(), 1);
    assert!(report.diagnostics.is_empty());

    // The collinear point on the shared edge is removed from both sides
    assert!(set[west].index_of((1.0, 0.5).into()).is_none());
    assert!(set[east].index_of((1.0, 0.5).into()).is_none());

    // Both sides record the shared edge against each other
    assert_eq!(set.borders_with(west, east).len(), 1);
    assert_eq!(set.borders_with(east, west).len(), 1);

    for change in &report.point_counts {
        assert!(change.after <= change.before, "{} grew", change.name);
    }
}

fn simplify_polygon_list() {
    let polygons = vec![
        polygon!["a"; (0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)],
        polygon!["b"; (0.0, 0.0), (1.0, 0.0), (1.0, -1.0), (0.0, -1.0)],
    ];

    let result = simplify_polygons(polygons, &SimplifyOptions::new());
    assert_eq!(result[0].vertex_count(), result[1].vertex_count());
}
