//! Concrete geometric predicates.
//!
//! Unary predicates inspect the point under the iterator's cursor and fail
//! with [`EvalError::InvalidIterator`] on a past-the-end position. Binary
//! predicates compare curve-level accessors of their argument pair.

use inkline_viewmap::{CurveElement, ElementIterator, PointElement, Vec3};

use crate::binary::BinaryPredicate;
use crate::error::EvalError;
use crate::unary::UnaryPredicate;

/// Dereference the cursor or reject with `InvalidIterator`.
fn current_point<'a>(
    name: &str,
    it: &'a dyn ElementIterator,
) -> Result<&'a dyn PointElement, EvalError> {
    it.point().ok_or_else(|| {
        EvalError::InvalidIterator(format!("'{name}' evaluated on a past-the-end cursor"))
    })
}

/// True when the current point lies within `radius` of `center`.
#[derive(Debug)]
pub struct WithinRadius {
    center: Vec3,
    radius: f64,
    result: Option<bool>,
}

impl WithinRadius {
    /// Predicate over the ball of the given `radius` around `center`.
    pub fn new(center: Vec3, radius: f64) -> Self {
        Self {
            center,
            radius,
            result: None,
        }
    }
}

impl UnaryPredicate for WithinRadius {
    fn name(&self) -> &str {
        "WithinRadius"
    }

    fn evaluate(&mut self, it: &dyn ElementIterator) -> Result<bool, EvalError> {
        let point = current_point(self.name(), it)?;
        let value = point.position().distance(&self.center) <= self.radius;
        self.result = Some(value);
        Ok(value)
    }

    fn last_result(&self) -> Option<bool> {
        self.result
    }
}

/// True when the current point's tangent is aligned with a reference
/// direction.
///
/// Alignment is the dot product of the unit tangent and the unit reference
/// direction; the predicate holds when it reaches `min_dot`. Degenerate
/// tangents (single-point curves) never align.
#[derive(Debug)]
pub struct TangentAligned {
    direction: Vec3,
    min_dot: f64,
    result: Option<bool>,
}

impl TangentAligned {
    /// Predicate holding where the tangent-direction dot product reaches
    /// `min_dot`.
    pub fn new(direction: Vec3, min_dot: f64) -> Self {
        Self {
            direction,
            min_dot,
            result: None,
        }
    }
}

impl UnaryPredicate for TangentAligned {
    fn name(&self) -> &str {
        "TangentAligned"
    }

    fn evaluate(&mut self, it: &dyn ElementIterator) -> Result<bool, EvalError> {
        let point = current_point(self.name(), it)?;
        let value = match (point.tangent().normalized(), self.direction.normalized()) {
            (Some(tangent), Some(direction)) => tangent.dot(&direction) >= self.min_dot,
            _ => false,
        };
        self.result = Some(value);
        Ok(value)
    }

    fn last_result(&self) -> Option<bool> {
        self.result
    }
}

/// True when the current point is the first of its curve.
#[derive(Debug, Default)]
pub struct CurveStart {
    result: Option<bool>,
}

impl CurveStart {
    /// Create the predicate.
    pub fn new() -> Self {
        Self::default()
    }
}

impl UnaryPredicate for CurveStart {
    fn name(&self) -> &str {
        "CurveStart"
    }

    fn evaluate(&mut self, it: &dyn ElementIterator) -> Result<bool, EvalError> {
        let point = current_point(self.name(), it)?;
        let value = point.index() == 0;
        self.result = Some(value);
        Ok(value)
    }

    fn last_result(&self) -> Option<bool> {
        self.result
    }
}

/// Strict ordering by image-plane length: `first` is longer than `second`.
///
/// Asymmetric: swapping the arguments is a different relation.
#[derive(Debug, Default)]
pub struct Longer {
    result: Option<bool>,
}

impl Longer {
    /// Create the predicate.
    pub fn new() -> Self {
        Self::default()
    }
}

impl BinaryPredicate for Longer {
    fn name(&self) -> &str {
        "Longer"
    }

    fn evaluate(
        &mut self,
        first: &dyn CurveElement,
        second: &dyn CurveElement,
    ) -> Result<bool, EvalError> {
        let value = first.length_2d() > second.length_2d();
        self.result = Some(value);
        Ok(value)
    }

    fn last_result(&self) -> Option<bool> {
        self.result
    }
}

/// Strict ordering by centroid distance to a viewpoint: `first` is closer
/// than `second`.
///
/// Asymmetric: used for depth sorting, where argument order carries
/// meaning.
#[derive(Debug)]
pub struct CloserToViewpoint {
    viewpoint: Vec3,
    result: Option<bool>,
}

impl CloserToViewpoint {
    /// Ordering relative to the given `viewpoint`.
    pub fn new(viewpoint: Vec3) -> Self {
        Self {
            viewpoint,
            result: None,
        }
    }
}

impl BinaryPredicate for CloserToViewpoint {
    fn name(&self) -> &str {
        "CloserToViewpoint"
    }

    fn evaluate(
        &mut self,
        first: &dyn CurveElement,
        second: &dyn CurveElement,
    ) -> Result<bool, EvalError> {
        let value =
            first.centroid().distance(&self.viewpoint) < second.centroid().distance(&self.viewpoint);
        self.result = Some(value);
        Ok(value)
    }

    fn last_result(&self) -> Option<bool> {
        self.result
    }
}

/// True when both elements belong to the same curve. Symmetric.
#[derive(Debug, Default)]
pub struct SameCurve {
    result: Option<bool>,
}

impl SameCurve {
    /// Create the predicate.
    pub fn new() -> Self {
        Self::default()
    }
}

impl BinaryPredicate for SameCurve {
    fn name(&self) -> &str {
        "SameCurve"
    }

    fn evaluate(
        &mut self,
        first: &dyn CurveElement,
        second: &dyn CurveElement,
    ) -> Result<bool, EvalError> {
        let value = first.id() == second.id();
        self.result = Some(value);
        Ok(value)
    }

    fn last_result(&self) -> Option<bool> {
        self.result
    }
}
