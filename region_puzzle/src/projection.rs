//! Map projection of region outlines into planar model units.

use std::f64::consts::FRAC_PI_4;

use region_borders::{
    core::math::Vector2,
    polygon::{polygons_extents, Polygon},
};

use crate::error::{PuzzleError, Result};

/// Latitude limit of the spherical Web-Mercator projection.
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// Project a longitude/latitude point in degrees with spherical Web-Mercator, the result is in
/// degree-equivalent units multiplied by `scale`.
pub fn mercator_point(lon_lat: Vector2, scale: f64) -> Vector2 {
    let lat = lon_lat.y.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let y = (FRAC_PI_4 + lat / 2.0).tan().ln().to_degrees();
    Vector2::new(lon_lat.x * scale, y * scale)
}

/// Project every point of `polygon` with [mercator_point].
pub fn mercator_polygon(polygon: &Polygon, scale: f64) -> Polygon {
    polygon.map_points(|p| mercator_point(p, scale))
}

/// Translate all polygons so their combined bounding box starts at the origin, flipping y so that
/// north points up in image space.
pub fn normalize_polygons(polygons: &[Polygon]) -> Result<Vec<Polygon>> {
    let extents = polygons_extents(polygons).ok_or(PuzzleError::EmptyPolygonSet)?;
    Ok(polygons
        .iter()
        .map(|p| p.map_points(|v| Vector2::new(v.x - extents.min_x, extents.max_y - v.y)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use region_borders::{assert_fuzzy_eq, polygon, polygon::RingSource};

    #[test]
    fn mercator_equator_and_meridian() {
        let p = mercator_point(Vector2::new(0.0, 0.0), 20.0);
        assert_fuzzy_eq!(p, Vector2::new(0.0, 0.0));

        let p = mercator_point(Vector2::new(10.0, 0.0), 2.0);
        assert_fuzzy_eq!(p, Vector2::new(20.0, 0.0));
    }

    #[test]
    fn mercator_stretches_latitude() {
        let p = mercator_point(Vector2::new(0.0, 45.0), 1.0);
        // ln(tan(67.5 deg)) in degrees
        assert!((p.y - 50.498_986_710_5).abs() < 1e-6);

        let south = mercator_point(Vector2::new(0.0, -45.0), 1.0);
        assert!((south.y + p.y).abs() < 1e-12);

        let pole = mercator_point(Vector2::new(0.0, 90.0), 1.0);
        assert!(pole.y.is_finite());
    }

    #[test]
    fn normalize_to_origin_with_flipped_y() {
        let a = polygon!["a"; (2.0, 3.0), (4.0, 3.0), (4.0, 5.0)];
        let b = polygon!["b"; (2.0, 3.0), (4.0, 3.0), (3.0, 1.0)];
        let normalized = normalize_polygons(&[a, b]).unwrap();
        assert_eq!(normalized[0].name(), "a");
        assert_eq!(normalized[0][0], Vector2::new(0.0, 2.0));
        assert_eq!(normalized[0][2], Vector2::new(2.0, 0.0));
        assert_eq!(normalized[1][2], Vector2::new(1.0, 4.0));
        assert_eq!(normalized[1].min_x(), 0.0);
        assert_eq!(normalized[0].min_y(), 0.0);
    }

    #[test]
    fn normalize_empty_is_an_error() {
        assert!(matches!(
            normalize_polygons(&[]),
            Err(PuzzleError::EmptyPolygonSet)
        ));
    }
}
