use std::fmt;

use super::PolygonId;
use crate::borders::BorderRange;

/// Non-fatal finding raised while matching borders between two polygons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BorderDiagnostic {
    /// The two sides of a touching pair ended up with a different number of merged border ranges,
    /// each side is still simplified against its own ranges.
    AsymmetricBorderCount {
        first: PolygonId,
        first_name: String,
        first_borders: Vec<BorderRange>,
        second: PolygonId,
        second_name: String,
        second_borders: Vec<BorderRange>,
    },
}

impl fmt::Display for BorderDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BorderDiagnostic::AsymmetricBorderCount {
                first_name,
                first_borders,
                second_name,
                second_borders,
                ..
            } => write!(
                f,
                "'{first_name}' has {} borders {first_borders:?} with '{second_name}' which has {} \
                 borders {second_borders:?}",
                first_borders.len(),
                second_borders.len()
            ),
        }
    }
}

/// Merged border ranges found for one touching pair, indexes address the rings as they were
/// before the pair was simplified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairBorders {
    pub first: PolygonId,
    pub second: PolygonId,
    pub first_borders: Vec<BorderRange>,
    pub second_borders: Vec<BorderRange>,
}

/// Point count of one polygon before and after simplification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointCountChange {
    pub id: PolygonId,
    pub name: String,
    pub before: usize,
    pub after: usize,
}

/// Summary of a [PolygonSet::simplify](super::PolygonSet::simplify) run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimplifyReport {
    /// Pairs checked for shared points after bounding box culling.
    pub candidate_pairs: usize,
    /// Borders found for every pair sharing at least one point, in processing order.
    pub pairs: Vec<PairBorders>,
    pub diagnostics: Vec<BorderDiagnostic>,
    /// Per polygon point counts in insertion order.
    pub point_counts: Vec<PointCountChange>,
}

impl SimplifyReport {
    /// Number of polygon pairs sharing at least one point.
    #[inline]
    pub fn touching_pairs(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    pub fn total_before(&self) -> usize {
        self.point_counts.iter().map(|c| c.before).sum()
    }

    #[inline]
    pub fn total_after(&self) -> usize {
        self.point_counts.iter().map(|c| c.after).sum()
    }
}
