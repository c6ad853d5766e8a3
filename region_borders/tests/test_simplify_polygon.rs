mod test_utils;

use region_borders::{
    borders::BorderRange,
    core::math::vec2,
    polygon,
    polygon::RingSource,
    simplify::{simplify_polygon, simplify_ring},
};
use test_utils::{complex_polygon, is_ring_subsequence};

#[test]
fn collinear_border_run_is_reduced() {
    let p = complex_polygon();
    assert_eq!(simplify_polygon(&p, &[BorderRange::new(0, 5)], 1.0).vertex_count(), 5);
    assert_eq!(simplify_polygon(&p, &[BorderRange::new(0, 6)], 1.0).vertex_count(), 4);
}

#[test]
fn name_is_kept() {
    let p = complex_polygon();
    let s = simplify_polygon(&p, &[BorderRange::new(0, 5)], 1.0);
    assert_eq!(s.name(), "complex");
}

#[test]
fn untouched_arcs_are_verbatim() {
    let p = polygon![
        "wavy";
        (0.0, 0.0), (0.5, 0.001), (1.0, 0.0), (1.001, -0.5), (1.0, -1.0), (0.5, -1.001),
        (0.0, -1.0), (-0.001, -0.5)
    ];
    // only the top edge is targeted
    let s = simplify_polygon(&p, &[BorderRange::new(0, 3)], 0.01);
    assert_eq!(
        s.points(),
        &[
            vec2(0.0, 0.0),
            vec2(1.0, 0.0),
            vec2(1.001, -0.5),
            vec2(1.0, -1.0),
            vec2(0.5, -1.001),
            vec2(0.0, -1.0),
            vec2(-0.001, -0.5)
        ]
    );
}

#[test]
fn output_is_subset_of_input() {
    let p = polygon![
        "star";
        (0.0, 0.0), (1.0, 0.3), (2.0, 0.0), (1.7, 1.0), (2.0, 2.0), (1.0, 1.7), (0.0, 2.0),
        (0.3, 1.0)
    ];
    let cases: [&[BorderRange]; 4] = [
        &[],
        &[BorderRange::new(0, 3)],
        &[BorderRange::new(6, 1), BorderRange::new(2, 4)],
        &[BorderRange::new(5, 5)],
    ];
    for ranges in cases {
        for tolerance in [0.0, 0.2, 0.5] {
            let s = simplify_ring(&p, ranges, tolerance);
            assert!(
                is_ring_subsequence(p.points(), &s.points),
                "ranges {ranges:?} tolerance {tolerance}"
            );
        }
    }
}

#[test]
fn zero_tolerance_keeps_non_collinear_points() {
    let p = polygon![
        "p";
        (0.0, 0.0), (1.0, 0.5), (2.0, 0.0), (2.5, 1.0), (2.0, 2.0), (0.0, 2.0)
    ];
    let s = simplify_polygon(&p, &[], 0.0);
    assert_eq!(s.points(), p.points());

    let with_collinear = polygon!["c"; (0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (2.0, 2.0)];
    let s = simplify_polygon(&with_collinear, &[], 0.0);
    assert_eq!(
        s.points(),
        &[vec2(0.0, 0.0), vec2(2.0, 0.0), vec2(2.0, 2.0)]
    );
}

#[test]
fn ranges_given_out_of_order() {
    let p = complex_polygon();
    let forward = simplify_polygon(
        &p,
        &[BorderRange::new(0, 3), BorderRange::new(5, 7)],
        1.0,
    );
    let reversed = simplify_polygon(
        &p,
        &[BorderRange::new(5, 7), BorderRange::new(0, 3)],
        1.0,
    );
    assert_eq!(forward, reversed);
    assert_eq!(
        forward.points(),
        &[
            vec2(0.0, 0.0),
            vec2(0.3, 0.0),
            vec2(0.4, 0.0),
            vec2(0.5, 0.0),
            vec2(1.0, 0.0),
            vec2(1.0, -1.0),
            vec2(0.0, -1.0)
        ]
    );
}

#[test]
fn whole_ring_range() {
    let p = complex_polygon();
    let s = simplify_ring(&p, &[BorderRange::new(2, 2)], 0.0);
    // reduced as one open arc starting at index 2, no verbatim arc follows
    assert_eq!(
        s.points,
        vec![
            vec2(0.3, 0.0),
            vec2(1.0, 0.0),
            vec2(1.0, -1.0),
            vec2(0.0, -1.0),
            vec2(0.0, 0.0),
            vec2(0.2, 0.0)
        ]
    );
}
