use region_borders::{
    core::traits::FuzzyEq,
    polygon::{Polygon, RingSource},
    AABB,
};

/// Fuzzy compare AABB values
pub fn aabb_fuzzy_eq_eps(a: &AABB<f64>, b: &AABB<f64>, eps: f64) -> bool {
    a.min_x.fuzzy_eq_eps(b.min_x, eps)
        && a.min_y.fuzzy_eq_eps(b.min_y, eps)
        && a.max_x.fuzzy_eq_eps(b.max_x, eps)
        && a.max_y.fuzzy_eq_eps(b.max_y, eps)
}

/// Holds a set of properties of a polygon ring for comparison in tests
#[derive(Debug, Copy, Clone)]
pub struct RingProperties {
    pub vertex_count: usize,
    pub area: f64,
    pub path_length: f64,
    pub extents: AABB<f64>,
}

impl RingProperties {
    // property comparer epsilon
    pub const PROP_CMP_EPS: f64 = 1e-5;

    pub fn new(
        vertex_count: usize,
        area: f64,
        path_length: f64,
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    ) -> Self {
        Self {
            vertex_count,
            area,
            path_length,
            extents: AABB::new(min_x, min_y, max_x, max_y),
        }
    }

    pub fn from_polygon(polygon: &Polygon) -> Self {
        Self {
            vertex_count: polygon.vertex_count(),
            area: polygon.area(),
            path_length: polygon.path_length(),
            extents: polygon.extents().unwrap(),
        }
    }

    pub fn fuzzy_eq_eps(&self, other: &Self, eps: f64) -> bool {
        self.vertex_count == other.vertex_count
            && self.area.fuzzy_eq_eps(other.area, eps)
            && self.path_length.fuzzy_eq_eps(other.path_length, eps)
            && aabb_fuzzy_eq_eps(&self.extents, &other.extents, eps)
    }
}

pub fn assert_ring_properties(polygon: &Polygon, expected: RingProperties) {
    let actual = RingProperties::from_polygon(polygon);
    assert!(
        actual.fuzzy_eq_eps(&expected, RingProperties::PROP_CMP_EPS),
        "ring properties mismatch\n   actual: {actual:?}\n expected: {expected:?}\n polygon: {}",
        super::to_debug_json_str(polygon)
    );
}
