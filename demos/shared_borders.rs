use region_borders::{
    borders::{exact_intersection, find_borders, merge_borders, BorderRange},
    core::math::vec2,
    polygon,
    polygon::RingSource,
    simplify::simplify_polygon,
};

fn main() {
    detect_shared_runs();
    merge_fragmented_runs();
    simplify_targeted_arcs();
}

fn detect_shared_runs() {
    let upper = polygon!["upper"; (0.0, 0.0), (0.5, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
    let lower = polygon!["lower"; (0.0, 0.0), (0.0, -1.0), (1.0, -1.0), (1.0, 0.0), (0.5, 0.0)];

    // Points both rings hold with exactly equal coordinates
    let common = exact_intersection(&upper, &lower);
    assert_eq!(common.len(), 3);

    // Contiguous runs of the shared points, end index is exclusive
    let upper_borders = find_borders(&upper, &common);
    assert_eq!(upper_borders, vec![BorderRange::new(0, 3)]);

    // On the lower ring the run crosses the ring origin
    let lower_borders = find_borders(&lower, &common);
    assert_eq!(lower_borders, vec![BorderRange::new(3, 1)]);
    assert!(lower_borders[0].is_wrapping());
    assert_eq!(lower.slice(3, 1).len(), upper.slice(0, 3).len());
}

fn merge_fragmented_runs() {
    // Two runs separated by a point the neighbor does not hold
    let p = polygon![
        "p";
        (0.0, 0.0), (1.0, 0.0), (1.001, 0.0), (2.0, 0.0), (2.0, 1.0), (0.0, 1.0)
    ];
    let runs = [BorderRange::new(0, 2), BorderRange::new(3, 4)];

    // Gap from index 2 to index 3 is ~1.0, too large to bridge
    assert_eq!(merge_borders(&p, &runs, 0.01).len(), 2);

    // Gap from the end of the first run (index 2) to the start of the next run (index 2)
    let runs = [BorderRange::new(0, 2), BorderRange::new(2, 4)];
    assert_eq!(merge_borders(&p, &runs, 0.01), vec![BorderRange::new(0, 4)]);
}

fn simplify_targeted_arcs() {
    let p = polygon![
        "p";
        (0.0, 0.0), (0.2, 0.0), (0.3, 0.0), (0.4, 0.0), (0.5, 0.0), (1.0, 0.0), (1.0, -1.0),
        (0.0, -1.0)
    ];

    // Only indexes 0..5 are reduced, the rest of the ring is kept verbatim
    let s = simplify_polygon(&p, &[BorderRange::new(0, 5)], 1.0);
    assert_eq!(s.vertex_count(), 5);
    assert_eq!(
        s.points(),
        &[
            vec2(0.0, 0.0),
            vec2(0.5, 0.0),
            vec2(1.0, 0.0),
            vec2(1.0, -1.0),
            vec2(0.0, -1.0)
        ]
    );

    // No target ranges reduces the whole ring as one open arc
    let s = simplify_polygon(&p, &[], 0.0);
    assert_eq!(s.vertex_count(), 4);
}
