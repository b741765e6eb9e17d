use serde::{Deserialize, Serialize};

use crate::element::{CurveElement, PointElement};
use crate::geometry::Vec3;
use crate::iterator::ElementIterator;

/// One sample point of a [`Polyline`], with its precomputed tangent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolylinePoint {
    position: Vec3,
    tangent: Vec3,
    curve_id: u64,
    index: usize,
}

impl PointElement for PolylinePoint {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn tangent(&self) -> Vec3 {
        self.tangent
    }

    fn curve_id(&self) -> u64 {
        self.curve_id
    }

    fn index(&self) -> usize {
        self.index
    }
}

/// A feature curve sampled as an ordered list of points.
///
/// Tangents are computed at construction: each point takes the direction of
/// its outgoing segment, the last point the direction of its incoming one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Polyline {
    id: u64,
    points: Vec<PolylinePoint>,
}

impl Polyline {
    /// Build a polyline from sampled positions.
    pub fn new(id: u64, positions: Vec<Vec3>) -> Self {
        let tangents = segment_tangents(&positions);
        let points = positions
            .into_iter()
            .zip(tangents)
            .enumerate()
            .map(|(index, (position, tangent))| PolylinePoint {
                position,
                tangent,
                curve_id: id,
                index,
            })
            .collect();
        Self { id, points }
    }

    /// Number of sample points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` when the polyline has no sample points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Cursor positioned on the first point. For an empty polyline the
    /// cursor starts past the end.
    pub fn iter(&self) -> PolylineIter<'_> {
        PolylineIter {
            points: &self.points,
            cursor: 0,
        }
    }
}

impl CurveElement for Polyline {
    fn id(&self) -> u64 {
        self.id
    }

    fn length_2d(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| {
                let a = pair[0].position;
                let b = pair[1].position;
                ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
            })
            .sum()
    }

    fn point_count(&self) -> usize {
        self.points.len()
    }

    #[allow(clippy::cast_precision_loss)]
    fn centroid(&self) -> Vec3 {
        if self.points.is_empty() {
            return Vec3::ZERO;
        }
        let sum = self
            .points
            .iter()
            .fold(Vec3::ZERO, |acc, p| acc + p.position);
        let n = self.points.len() as f64;
        Vec3::new(sum.x / n, sum.y / n, sum.z / n)
    }
}

/// Cursor over the points of a [`Polyline`].
#[derive(Debug, Clone)]
pub struct PolylineIter<'a> {
    points: &'a [PolylinePoint],
    cursor: usize,
}

impl ElementIterator for PolylineIter<'_> {
    fn at_end(&self) -> bool {
        self.cursor >= self.points.len()
    }

    fn point(&self) -> Option<&dyn PointElement> {
        self.points
            .get(self.cursor)
            .map(|p| p as &dyn PointElement)
    }

    fn index(&self) -> usize {
        self.cursor
    }

    fn advance(&mut self) {
        if self.cursor < self.points.len() {
            self.cursor += 1;
        }
    }
}

/// Per-point unit tangents for a position list.
fn segment_tangents(positions: &[Vec3]) -> Vec<Vec3> {
    let n = positions.len();
    (0..n)
        .map(|i| {
            let (from, to) = if i + 1 < n {
                (positions[i], positions[i + 1])
            } else if n >= 2 {
                (positions[i - 1], positions[i])
            } else {
                return Vec3::ZERO;
            };
            (to - from).normalized().unwrap_or(Vec3::ZERO)
        })
        .collect()
}
