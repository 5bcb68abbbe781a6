use super::Phase;
use crate::{Iter, Pull};

/// Pairs the items of two handles, one from each per pull.
///
/// Created by [`Iter::zip`]. The second handle is only pulled once the first
/// produced an item, and neither side is pulled again after one of them runs
/// out. The output is as long as the shorter input.
pub struct Zip<P, Q>
where
    P: Pull,
    Q: Pull,
{
    first: Iter<P>,
    second: Iter<Q>,
    phase: Phase,
}

impl<P, Q> Zip<P, Q>
where
    P: Pull,
    Q: Pull,
{
    pub(crate) fn new(first: Iter<P>, second: Iter<Q>) -> Self {
        Zip {
            first,
            second,
            phase: Phase::Active,
        }
    }
}

impl<P, Q> Pull for Zip<P, Q>
where
    P: Pull,
    Q: Pull,
{
    type Item = (P::Item, Q::Item);

    fn next(&mut self) -> Option<Self::Item> {
        if self.phase.is_exhausted() {
            return None;
        }

        let pair = match self.first.next() {
            Some(a) => self.second.next().map(|b| (a, b)),
            None => None,
        };
        if pair.is_none() {
            self.phase.latch("zip");
        }
        pair
    }
}
