pub mod element;
pub mod geometry;
pub mod iterator;
pub mod polyline;

pub use element::{CurveElement, PointElement};
pub use geometry::Vec3;
pub use iterator::ElementIterator;
pub use polyline::{Polyline, PolylineIter, PolylinePoint};
