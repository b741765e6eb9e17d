use crate::geometry::Vec3;

/// Read-only view of one addressable position along a feature curve.
///
/// Point elements are owned by the traversal structure that produced them;
/// predicate code borrows them for the duration of a single evaluation and
/// must not retain or mutate them.
pub trait PointElement {
    /// World-space position of the point.
    fn position(&self) -> Vec3;

    /// Unit tangent of the curve at this point. Degenerate points (a curve
    /// with a single position) report the zero vector.
    fn tangent(&self) -> Vec3;

    /// Identifier of the curve this point belongs to.
    fn curve_id(&self) -> u64;

    /// Index of the point along its curve, starting at zero.
    fn index(&self) -> usize;
}

/// Read-only view of a feature-curve-level object.
///
/// Binary predicates compare pairs of curve elements; they reference them,
/// never own them.
pub trait CurveElement {
    /// Identifier of the curve.
    fn id(&self) -> u64;

    /// Length of the curve projected onto the image (XY) plane.
    fn length_2d(&self) -> f64;

    /// Number of point elements along the curve.
    fn point_count(&self) -> usize;

    /// Mean of the curve's point positions. The zero vector for an empty
    /// curve.
    fn centroid(&self) -> Vec3;
}
