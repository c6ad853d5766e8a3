mod test_utils;

use region_borders::{
    borders::{find_borders, merge_borders, BorderRange},
    core::math::vec2,
    polygon,
};
use test_utils::complex_polygon;

#[test]
fn fewer_than_two_ranges_unchanged() {
    let p = complex_polygon();
    assert!(merge_borders(&p, &[], 0.5).is_empty());
    assert_eq!(
        merge_borders(&p, &[BorderRange::new(6, 2)], 10.0),
        vec![BorderRange::new(6, 2)]
    );
}

#[test]
fn small_gap_is_bridged() {
    let p = complex_polygon();
    // gap from index 2 (0.3, 0) to index 3 (0.4, 0) is 0.1
    let borders = [BorderRange::new(3, 5), BorderRange::new(0, 2)];
    assert_eq!(
        merge_borders(&p, &borders, 0.15),
        vec![BorderRange::new(0, 5)]
    );
    assert_eq!(merge_borders(&p, &borders, 0.05), borders_sorted(&borders));
}

#[test]
fn wraparound_gap_is_bridged() {
    let p = complex_polygon();
    // closing gap from (0, 0) to (0.2, 0) is bridged, the gap from (0.4, 0) to (1, -1) is not
    let borders = [BorderRange::new(6, 0), BorderRange::new(1, 3)];
    assert_eq!(
        merge_borders(&p, &borders, 0.5),
        vec![BorderRange::new(6, 3)]
    );
}

#[test]
fn merged_ranges_are_idempotent() {
    let p = polygon![
        "p";
        (0.0, 0.0), (1.0, 0.0), (1.001, 0.0), (2.0, 0.0), (2.0, 1.0), (1.0, 1.0), (0.0, 1.0)
    ];
    let common = [
        vec2(0.0, 0.0),
        vec2(1.0, 0.0),
        vec2(2.0, 0.0),
        vec2(2.0, 1.0),
        vec2(0.0, 1.0),
    ];
    let found = find_borders(&p, &common);
    for snap in [0.0001, 0.01, 0.5, 2.0] {
        let once = merge_borders(&p, &found, snap);
        let twice = merge_borders(&p, &once, snap);
        assert_eq!(once, twice, "snap distance {snap}");
    }
}

fn borders_sorted(borders: &[BorderRange]) -> Vec<BorderRange> {
    let mut result = borders.to_vec();
    result.sort();
    result
}
