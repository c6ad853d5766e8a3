use log::{debug, info, warn};
use static_aabb2d_index::{StaticAABB2DIndex, StaticAABB2DIndexBuilder};

use super::{
    BorderDiagnostic, PairBorders, PointCountChange, PolygonId, PolygonSet, SimplifyReport,
};
use crate::{
    borders::{exact_intersection, find_borders, merge_borders, BorderRange},
    core::traits::Real,
    polygon::{Polygon, RingSource},
    simplify::{simplify_ring, SimplifyOptions},
};

impl<T> PolygonSet<T>
where
    T: Real,
{
    /// Simplify every polygon of the set keeping touching polygons consistent along their shared
    /// borders.
    ///
    /// Phase 1 visits every pair `(i, j)` with `i < j` in insertion order. Pairs sharing exact
    /// points get their borders detected and merged on both sides, each side is then simplified
    /// over its border ranges with [SimplifyOptions::border_tolerance] and the ranges are recorded
    /// in both polygons' border mappings. Later pairs see the points left by earlier pairs.
    ///
    /// Phase 2 simplifies the arcs of each polygon not covered by any recorded border with
    /// [SimplifyOptions::outside_tolerance]. A polygon without borders is reduced as a whole ring.
    ///
    /// A pair whose sides end up with a different number of border ranges is reported as
    /// [BorderDiagnostic::AsymmetricBorderCount] and processed anyway.
    pub fn simplify(&mut self, options: &SimplifyOptions<T>) -> SimplifyReport {
        let ids: Vec<PolygonId> = self.ids().collect();
        let before: Vec<usize> = ids.iter().map(|&id| self[id].vertex_count()).collect();

        let mut report = SimplifyReport::default();
        let pairs = self.candidate_pairs(&ids);
        report.candidate_pairs = pairs.len();

        for (i, j) in pairs {
            self.simplify_pair(ids[i], ids[j], options, &mut report);
        }

        info!(
            "border pass done: {} touching pairs out of {} candidates",
            report.touching_pairs(),
            report.candidate_pairs
        );

        for &id in ids.iter() {
            if self.flattened_borders(id).is_empty() {
                self.apply_simplification(id, &[], options.outside_tolerance);
                continue;
            }

            let outside = self.outside_borders(id);
            if outside.is_empty() {
                continue;
            }

            self.apply_simplification(id, &outside, options.outside_tolerance);
        }

        report.point_counts = ids
            .iter()
            .zip(before)
            .map(|(&id, before)| PointCountChange {
                id,
                name: self[id].name().to_string(),
                before,
                after: self[id].vertex_count(),
            })
            .collect();

        info!(
            "simplified {} polygons from {} to {} points",
            ids.len(),
            report.total_before(),
            report.total_after()
        );

        report
    }

    /// Index pairs `(i, j)`, `i < j`, into `ids` whose polygon extents overlap, in nested loop
    /// order.
    fn candidate_pairs(&self, ids: &[PolygonId]) -> Vec<(usize, usize)> {
        let n = ids.len();
        if n < 2 {
            return Vec::new();
        }

        let Some(index) = self.extents_index(ids) else {
            return (0..n)
                .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
                .collect();
        };

        let mut pairs = Vec::new();
        let mut query_stack = Vec::new();
        for (i, &id) in ids.iter().enumerate() {
            let Some(e) = self[id].extents() else {
                continue;
            };

            let mut others: Vec<usize> = index
                .query_with_stack(e.min_x, e.min_y, e.max_x, e.max_y, &mut query_stack)
                .into_iter()
                .filter(|&j| j > i)
                .collect();
            others.sort_unstable();
            pairs.extend(others.into_iter().map(|j| (i, j)));
        }

        pairs
    }

    fn extents_index(&self, ids: &[PolygonId]) -> Option<StaticAABB2DIndex<T>> {
        let mut builder = StaticAABB2DIndexBuilder::new(ids.len());
        for &id in ids {
            let e = self[id].extents()?;
            builder.add(e.min_x, e.min_y, e.max_x, e.max_y);
        }

        match builder.build() {
            Ok(index) => Some(index),
            Err(err) => {
                debug!("polygon extents index not built ({err:?}), checking all pairs");
                None
            }
        }
    }

    fn simplify_pair(
        &mut self,
        first: PolygonId,
        second: PolygonId,
        options: &SimplifyOptions<T>,
        report: &mut SimplifyReport,
    ) {
        let p1 = &self[first];
        let p2 = &self[second];
        let common = exact_intersection(p1, p2);
        if common.is_empty() {
            return;
        }

        let borders1 = merge_borders(p1, &find_borders(p1, &common), options.snap_distance);
        let borders2 = merge_borders(p2, &find_borders(p2, &common), options.snap_distance);
        debug!(
            "'{}' and '{}' share {} points: {:?} / {:?}",
            p1.name(),
            p2.name(),
            common.len(),
            borders1,
            borders2
        );

        if borders1.len() != borders2.len() {
            let diagnostic = BorderDiagnostic::AsymmetricBorderCount {
                first,
                first_name: p1.name().to_string(),
                first_borders: borders1.clone(),
                second,
                second_name: p2.name().to_string(),
                second_borders: borders2.clone(),
            };
            warn!("asymmetric border count: {diagnostic}");
            report.diagnostics.push(diagnostic);
        }

        report.pairs.push(PairBorders {
            first,
            second,
            first_borders: borders1.clone(),
            second_borders: borders2.clone(),
        });

        let recorded1 = self.apply_simplification(first, &borders1, options.border_tolerance);
        let recorded2 = self.apply_simplification(second, &borders2, options.border_tolerance);
        self.extend_borders(first, second, recorded1);
        self.extend_borders(second, first, recorded2);
    }

    /// Replace the points of `id` by simplifying `targets` with `tolerance`, re-indexing the
    /// borders already recorded for it. Returns `targets` re-indexed to the new ring.
    ///
    /// The polygon is left unchanged if the reduction would leave fewer than 3 points.
    fn apply_simplification(
        &mut self,
        id: PolygonId,
        targets: &[BorderRange],
        tolerance: T,
    ) -> Vec<BorderRange> {
        let Some(entry) = self.entry_mut(id) else {
            return Vec::new();
        };

        let simplified = simplify_ring(&entry.polygon, targets, tolerance);
        if simplified.points.len() < 3 {
            warn!(
                "simplifying '{}' would collapse it to {} points, keeping {} points",
                entry.polygon.name(),
                simplified.points.len(),
                entry.polygon.vertex_count()
            );
            return targets.to_vec();
        }

        for ranges in entry.borders.values_mut() {
            *ranges = ranges
                .iter()
                .filter_map(|&r| simplified.map_range(r))
                .collect();
        }

        let remapped = targets
            .iter()
            .filter_map(|&r| simplified.map_range(r))
            .collect();

        debug!(
            "'{}' size before: {} after: {}",
            entry.polygon.name(),
            entry.polygon.vertex_count(),
            simplified.points.len()
        );
        entry.polygon.set_points(simplified.points);

        remapped
    }
}

/// Border-aware simplification of `polygons`, returned in input order. See
/// [PolygonSet::simplify].
///
/// # Examples
///
/// ```
/// # use region_borders::polygon::*;
/// # use region_borders::polygon_set::*;
/// # use region_borders::simplify::SimplifyOptions;
/// # use region_borders::polygon;
/// let a = polygon!["a"; (0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
/// let b = polygon!["b"; (0.0, 0.0), (1.0, 0.0), (1.0, -1.0), (0.0, -1.0)];
/// let result = simplify_polygons(vec![a, b], &SimplifyOptions::new());
/// assert_eq!(result[0].vertex_count(), 4);
/// assert_eq!(result[1].vertex_count(), 4);
/// ```
pub fn simplify_polygons<T, I>(polygons: I, options: &SimplifyOptions<T>) -> Vec<Polygon<T>>
where
    T: Real,
    I: IntoIterator<Item = Polygon<T>>,
{
    let mut set: PolygonSet<T> = polygons.into_iter().collect();
    set.simplify(options);
    set.into_polygons()
}
