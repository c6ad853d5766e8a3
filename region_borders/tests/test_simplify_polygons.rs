mod test_utils;

use std::collections::HashSet;

use region_borders::{
    core::math::{vec2, PointKey},
    polygon,
    polygon::{Polygon, RingSource},
    polygon_set::{simplify_polygons, BorderDiagnostic, PolygonId, PolygonSet},
    simplify::SimplifyOptions,
};
use test_utils::{cell_grid, is_ring_subsequence, lower_square, to_debug_json_str, upper_square};

fn shared_keys(set: &PolygonSet, id: PolygonId, neighbor: PolygonId) -> HashSet<PointKey> {
    let p = &set[id];
    set.borders_with(id, neighbor)
        .iter()
        .flat_map(|r| r.indexes(p.vertex_count()))
        .map(|i| p.at(i).key())
        .collect()
}

#[test]
fn squares_keep_equal_lengths() {
    let result = simplify_polygons(vec![upper_square(), lower_square()], &SimplifyOptions::new());
    assert_eq!(result.len(), 2);
    assert_eq!(result[0].vertex_count(), result[1].vertex_count());
    assert_eq!(result[0].vertex_count(), 4);
    assert_eq!(result[0].name(), "upper");
    assert_eq!(result[1].name(), "lower");
}

#[test]
fn shared_border_points_are_reduced_on_both_sides() {
    let mut set = PolygonSet::new();
    let upper = set.insert(polygon![
        "upper";
        (0.0, 0.0), (0.5, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)
    ]);
    let lower = set.insert(polygon![
        "lower";
        (0.0, 0.0), (0.0, -1.0), (1.0, -1.0), (1.0, 0.0), (0.5, 0.0)
    ]);

    let report = set.simplify(&SimplifyOptions::new());
    assert_eq!(report.touching_pairs(), 1);
    assert!(report.diagnostics.is_empty());
    assert!(set[upper].index_of(vec2(0.5, 0.0)).is_none());
    assert!(set[lower].index_of(vec2(0.5, 0.0)).is_none());
    assert_eq!(shared_keys(&set, upper, lower), shared_keys(&set, lower, upper));
    assert_eq!(shared_keys(&set, upper, lower).len(), 2);
    assert_eq!(report.total_before(), 10);
    assert_eq!(report.total_after(), 8);
}

#[test]
fn cell_row_borders_stay_consistent() {
    let cells = cell_grid(3, 1, 2);
    let originals = cells.clone();
    let mut set: PolygonSet = cells.into_iter().collect();
    let ids: Vec<PolygonId> = set.ids().collect();

    let report = set.simplify(&SimplifyOptions::new());
    // first and last cell extents do not overlap
    assert_eq!(report.candidate_pairs, 2);
    assert_eq!(report.touching_pairs(), 2);
    assert!(report.diagnostics.is_empty());

    for (a, b) in [(ids[0], ids[1]), (ids[1], ids[2])] {
        let keys = shared_keys(&set, a, b);
        assert_eq!(keys, shared_keys(&set, b, a));
        assert_eq!(keys.len(), 2, "shared edge keeps its two corners");
    }

    for (id, original) in ids.iter().zip(&originals) {
        assert!(
            is_ring_subsequence(original.points(), set[*id].points()),
            "{}",
            to_debug_json_str(&set[*id])
        );
        assert!(set[*id].vertex_count() < original.vertex_count());
    }

    // middle cell loses the midpoints of both shared edges
    assert!(set[ids[1]].index_of(vec2(1.0, 0.5)).is_none());
    assert!(set[ids[1]].index_of(vec2(2.0, 0.5)).is_none());
    assert_eq!(set[ids[1]].vertex_count(), 6);
}

#[test]
fn grid_shared_points_match_between_neighbors() {
    let cells = cell_grid(3, 3, 4);
    let result = simplify_polygons(cells.clone(), &SimplifyOptions::new());

    // a point kept by one cell on an edge it shares with a neighbor is kept by that neighbor too
    for (i, a) in cells.iter().enumerate() {
        for (j, b) in cells.iter().enumerate().skip(i + 1) {
            let shared: HashSet<PointKey> = a
                .iter_points()
                .map(|p| p.key())
                .filter(|k| b.iter_points().any(|q| q.key() == *k))
                .collect();
            if shared.is_empty() {
                continue;
            }

            let kept_a: HashSet<PointKey> = result[i]
                .iter_points()
                .map(|p| p.key())
                .filter(|k| shared.contains(k))
                .collect();
            let kept_b: HashSet<PointKey> = result[j]
                .iter_points()
                .map(|p| p.key())
                .filter(|k| shared.contains(k))
                .collect();
            assert_eq!(kept_a, kept_b, "cells {i} and {j}");
        }
    }
}

#[test]
fn asymmetric_border_count_is_reported() {
    let mut set = PolygonSet::new();
    let a = set.insert(polygon![
        "a";
        (0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (2.0, 0.0), (2.0, 1.0), (0.0, 1.0)
    ]);
    let b = set.insert(polygon!["b"; (0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (2.0, -1.0), (0.0, -1.0)]);

    let report = set.simplify(&SimplifyOptions::new());
    assert_eq!(report.diagnostics.len(), 1);
    match &report.diagnostics[0] {
        BorderDiagnostic::AsymmetricBorderCount {
            first,
            first_borders,
            second,
            second_borders,
            ..
        } => {
            assert_eq!((*first, *second), (a, b));
            assert_eq!(first_borders.len(), 2);
            assert_eq!(second_borders.len(), 1);
        }
    }

    assert!(report.diagnostics[0].to_string().contains("'a' has 2 borders"));
    assert_eq!(set.len(), 2);
}

#[test]
fn isolated_polygon_is_reduced_as_whole_ring() {
    let lonely = polygon![
        "lonely";
        (0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (2.0, 2.0), (1.0, 2.0), (0.0, 2.0)
    ];
    let far = polygon!["far"; (10.0, 10.0), (11.0, 10.0), (11.0, 11.0)];
    let mut set = PolygonSet::new();
    let id = set.insert(lonely);
    set.insert(far);

    let report = set.simplify(&SimplifyOptions::new());
    assert_eq!(report.candidate_pairs, 0);
    assert_eq!(report.touching_pairs(), 0);
    assert_eq!(
        set[id].points(),
        &[vec2(0.0, 0.0), vec2(2.0, 0.0), vec2(2.0, 2.0), vec2(0.0, 2.0)]
    );
}

fn junction_polygons() -> (Polygon, Polygon, Polygon) {
    let top = polygon!["top"; (0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (2.0, 1.0), (0.0, 1.0)];
    let bottom = polygon!["bottom"; (0.0, 0.0), (0.0, -1.0), (2.0, -1.0), (2.0, 0.0), (1.0, 0.0)];
    // touches the other two only at (1, 0)
    let wedge = polygon!["wedge"; (1.0, 0.0), (1.5, -0.75), (2.0, -1.5), (0.0, -1.5)];
    (top, bottom, wedge)
}

#[test]
fn later_pairs_see_earlier_simplifications() {
    let options = SimplifyOptions::new();

    // top/bottom first: (1, 0) is dropped from both before the wedge is visited, so the wedge
    // has no borders and is reduced as a whole ring
    let (top, bottom, wedge) = junction_polygons();
    let result = simplify_polygons(vec![top, bottom, wedge], &options);
    assert_eq!(result[2].vertex_count(), 3);

    // wedge visited against top first: the single shared point is recorded as a border and only
    // the rest of the wedge is reduced
    let (top, bottom, wedge) = junction_polygons();
    let result = simplify_polygons(vec![top, wedge, bottom], &options);
    assert_eq!(result[1].vertex_count(), 4);
    assert!(result[1].index_of(vec2(1.0, 0.0)).is_some());

    // top and bottom end up the same either way
    assert_eq!(result[0].vertex_count(), 4);
    assert_eq!(result[2].vertex_count(), 4);
}

#[test]
fn empty_and_single_sets() {
    let options = SimplifyOptions::new();
    assert!(simplify_polygons(Vec::<Polygon>::new(), &options).is_empty());

    let result = simplify_polygons(vec![upper_square()], &options);
    assert_eq!(result, vec![upper_square()]);
}
