use region_borders::polygon::{Polygon, RingSource};

/// Helper function to create json string from polygon to be used for debugging.
pub fn to_debug_json_str(polygon: &Polygon) -> String {
    format!(
        r#"
{{
    "name": "{}",
    "points": [
        {}
    ]
}}
"#,
        polygon.name(),
        polygon
            .iter_points()
            .map(|p| format!("[{}, {}]", p.x, p.y))
            .collect::<Vec<_>>()
            .join(",\n        ")
    )
}
