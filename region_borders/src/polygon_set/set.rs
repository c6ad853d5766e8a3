use std::{collections::BTreeMap, fmt, ops::Index};

use log::warn;
use static_aabb2d_index::AABB;

use crate::{
    borders::BorderRange,
    core::traits::Real,
    polygon::{polygons_extents, Polygon, RingSource},
};

/// Stable identifier of a polygon inserted into a [PolygonSet].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PolygonId(usize);

impl PolygonId {
    /// Insertion position of the polygon in its set.
    #[inline]
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for PolygonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct PolygonEntry<T> {
    pub(crate) polygon: Polygon<T>,
    pub(crate) borders: BTreeMap<PolygonId, Vec<BorderRange>>,
}

/// Set of polygons addressed by [PolygonId], each polygon owning the border ranges it shares with
/// each neighbor (indexes into its own ring).
///
/// Neighbor associations are by id only, removing a polygon removes it from every neighbor's
/// border mapping.
#[derive(Debug, Clone)]
pub struct PolygonSet<T = f64> {
    pub(crate) entries: Vec<Option<PolygonEntry<T>>>,
}

impl<T> Default for PolygonSet<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PolygonSet<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Add a polygon to the set, returning its id. Ids follow insertion order.
    pub fn insert(&mut self, polygon: Polygon<T>) -> PolygonId {
        let id = PolygonId(self.entries.len());
        self.entries.push(Some(PolygonEntry {
            polygon,
            borders: BTreeMap::new(),
        }));
        id
    }

    /// Remove a polygon from the set along with every border recorded against it.
    pub fn remove(&mut self, id: PolygonId) -> Option<Polygon<T>> {
        let entry = self.entries.get_mut(id.0)?.take()?;
        for other in self.entries.iter_mut().flatten() {
            other.borders.remove(&id);
        }

        Some(entry.polygon)
    }

    /// Drop every border recorded for `id`, on both sides of each association.
    pub fn clear_borders(&mut self, id: PolygonId) {
        let neighbors: Vec<PolygonId> = match self.entry_mut(id) {
            Some(entry) => std::mem::take(&mut entry.borders).into_keys().collect(),
            None => return,
        };

        for neighbor in neighbors {
            if let Some(n) = self.entry_mut(neighbor) {
                n.borders.remove(&id);
            }
        }
    }

    /// Number of polygons in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.iter().flatten().count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn contains(&self, id: PolygonId) -> bool {
        self.entry(id).is_some()
    }

    #[inline]
    pub fn get(&self, id: PolygonId) -> Option<&Polygon<T>> {
        self.entry(id).map(|e| &e.polygon)
    }

    /// Ids of all polygons in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = PolygonId> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.as_ref().map(|_| PolygonId(i)))
    }

    /// Iterate over `(id, polygon)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (PolygonId, &Polygon<T>)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.as_ref().map(|e| (PolygonId(i), &e.polygon)))
    }

    /// Find the id of the first polygon with `name`.
    pub fn find_by_name(&self, name: &str) -> Option<PolygonId> {
        self.iter().find(|(_, p)| p.name() == name).map(|(id, _)| id)
    }

    /// Border ranges recorded for `id` keyed by neighbor id.
    #[inline]
    pub fn borders(&self, id: PolygonId) -> Option<&BTreeMap<PolygonId, Vec<BorderRange>>> {
        self.entry(id).map(|e| &e.borders)
    }

    /// Border ranges of `id` shared with `neighbor`, empty if none are recorded.
    pub fn borders_with(&self, id: PolygonId, neighbor: PolygonId) -> &[BorderRange] {
        self.entry(id)
            .and_then(|e| e.borders.get(&neighbor))
            .map(|r| r.as_slice())
            .unwrap_or(&[])
    }

    /// Record `ranges` (indexes into the ring of `id`) as shared with `neighbor`, appending to any
    /// ranges already recorded for that neighbor.
    ///
    /// A warning is logged if a new range overlaps another range shared with the same neighbor.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not in the set or a range index is out of bounds for its ring.
    pub fn extend_borders(
        &mut self,
        id: PolygonId,
        neighbor: PolygonId,
        ranges: impl IntoIterator<Item = BorderRange>,
    ) {
        let entry = self
            .entry_mut(id)
            .unwrap_or_else(|| panic!("polygon {id} is not in the set"));
        let vc = entry.polygon.vertex_count();
        let recorded = entry.borders.entry(neighbor).or_default();

        for range in ranges {
            assert!(
                range.start < vc && range.end < vc,
                "border {range:?} out of range for '{}' with {vc} points",
                entry.polygon.name()
            );

            if let Some(existing) = recorded.iter().find(|r| r.overlaps(&range)) {
                warn!(
                    "borders {existing:?} and {range:?} of '{}' with {neighbor} are overlapping",
                    entry.polygon.name()
                );
            }

            recorded.push(range);
        }
    }

    /// All border ranges recorded for `id` across every neighbor, sorted by start index.
    pub fn flattened_borders(&self, id: PolygonId) -> Vec<BorderRange> {
        let mut result: Vec<BorderRange> = self
            .entry(id)
            .map(|e| e.borders.values().flatten().copied().collect())
            .unwrap_or_default();
        result.sort();
        result
    }

    /// Ranges of the ring of `id` not covered by any recorded border, sorted by start index.
    ///
    /// Returns an empty list both when no border is recorded and when borders cover the whole
    /// ring, check [PolygonSet::flattened_borders] to tell the two apart.
    ///
    /// # Examples
    ///
    /// ```
    /// # use region_borders::borders::BorderRange;
    /// # use region_borders::polygon_set::*;
    /// # use region_borders::polygon;
    /// let mut set = PolygonSet::new();
    /// let a = set.insert(polygon!["a"; (0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (2.0, 1.0), (0.0, 1.0)]);
    /// let b = set.insert(polygon!["b"; (0.0, 0.0), (0.0, -1.0), (2.0, -1.0)]);
    /// set.extend_borders(a, b, [BorderRange::new(0, 2)]);
    /// assert_eq!(set.outside_borders(a), vec![BorderRange::new(2, 0)]);
    /// ```
    pub fn outside_borders(&self, id: PolygonId) -> Vec<BorderRange> {
        let Some(entry) = self.entry(id) else {
            return Vec::new();
        };

        let vc = entry.polygon.vertex_count();
        let mut covered = vec![false; vc];
        for range in entry.borders.values().flatten() {
            for i in range.indexes(vc) {
                covered[i] = true;
            }
        }

        let Some(anchor) = covered.iter().position(|&c| c) else {
            return Vec::new();
        };

        let mut result = Vec::new();
        let mut run_start = None;
        for offset in 1..=vc {
            let i = (anchor + offset) % vc;
            match (covered[i], run_start) {
                (false, None) => run_start = Some(i),
                (true, Some(start)) => {
                    result.push(BorderRange::new(start, i));
                    run_start = None;
                }
                _ => {}
            }
        }

        result.sort();
        result
    }

    /// Combined extents of all polygons, `None` if the set is empty.
    pub fn extents(&self) -> Option<AABB<T>> {
        polygons_extents(self.iter().map(|(_, p)| p))
    }

    /// Consume the set returning the polygons in insertion order.
    pub fn into_polygons(self) -> Vec<Polygon<T>> {
        self.entries
            .into_iter()
            .flatten()
            .map(|e| e.polygon)
            .collect()
    }

    #[inline]
    pub(crate) fn entry(&self, id: PolygonId) -> Option<&PolygonEntry<T>> {
        self.entries.get(id.0).and_then(|e| e.as_ref())
    }

    #[inline]
    pub(crate) fn entry_mut(&mut self, id: PolygonId) -> Option<&mut PolygonEntry<T>> {
        self.entries.get_mut(id.0).and_then(|e| e.as_mut())
    }
}

impl<T> Index<PolygonId> for PolygonSet<T>
where
    T: Real,
{
    type Output = Polygon<T>;

    #[inline]
    fn index(&self, id: PolygonId) -> &Self::Output {
        self.get(id)
            .unwrap_or_else(|| panic!("polygon {id} is not in the set"))
    }
}

impl<T> FromIterator<Polygon<T>> for PolygonSet<T>
where
    T: Real,
{
    fn from_iter<I: IntoIterator<Item = Polygon<T>>>(iter: I) -> Self {
        let mut set = PolygonSet::new();
        for polygon in iter {
            set.insert(polygon);
        }
        set
    }
}
