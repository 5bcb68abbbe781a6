use super::Phase;
use crate::{Iter, Pull};

/// Yields upstream items until the predicate first fails.
///
/// Created by [`Iter::take_while`]. The failing item is consumed and the
/// adapter never looks past it, even if matching items follow.
pub struct TakeWhile<P, F>
where
    P: Pull,
{
    upstream: Iter<P>,
    predicate: F,
    phase: Phase,
}

impl<P, F> TakeWhile<P, F>
where
    P: Pull,
{
    pub(crate) fn new(upstream: Iter<P>, predicate: F) -> Self {
        TakeWhile {
            upstream,
            predicate,
            phase: Phase::Active,
        }
    }
}

impl<P, F> Pull for TakeWhile<P, F>
where
    P: Pull,
    F: FnMut(&P::Item) -> bool,
{
    type Item = P::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.phase.is_exhausted() {
            return None;
        }

        match self.upstream.next() {
            Some(item) if (self.predicate)(&item) => Some(item),
            _ => {
                self.phase.latch("take_while");
                None
            }
        }
    }
}
