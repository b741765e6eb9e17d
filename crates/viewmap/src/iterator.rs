use crate::element::PointElement;

/// Cursor over an ordered sequence of point elements.
///
/// The traversal subsystem advances the cursor; predicate code only reads
/// through it ([`at_end`](Self::at_end) and [`point`](Self::point)) and
/// never mutates traversal state.
pub trait ElementIterator {
    /// `true` when the cursor is past the last element and no longer
    /// dereferenceable.
    fn at_end(&self) -> bool;

    /// The element under the cursor, or `None` past the end.
    fn point(&self) -> Option<&dyn PointElement>;

    /// Zero-based position of the cursor within the sequence.
    fn index(&self) -> usize;

    /// Move the cursor one element forward. Has no effect past the end.
    fn advance(&mut self);
}
