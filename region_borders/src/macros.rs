/// Macro used for test assertions.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}

/// Construct a named polygon from a list of (x, y) tuples.
///
/// # Panics
///
/// Panics if fewer than 3 points are given.
///
/// # Examples
///
/// ```
/// # use region_borders::polygon;
/// # use region_borders::core::math::vec2;
/// # use region_borders::polygon::*;
/// let p = polygon!["tri"; (0.0, 0.0), (2.0, 0.0), (1.0, 1.0)];
/// assert_eq!(p.name(), "tri");
/// assert_eq!(p[2], vec2(1.0, 1.0));
/// ```
#[macro_export]
macro_rules! polygon {
    ($name:expr; $( $x:expr ),* $(,)?) => {
        $crate::polygon::Polygon::from_coords($name, [$( $x ),*])
    };
}
