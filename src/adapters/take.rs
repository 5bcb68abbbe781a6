use super::Phase;
use crate::{Iter, Pull};

/// Yields at most a fixed number of upstream items.
///
/// Created by [`Iter::take`]. The limit is checked before pulling, so the
/// upstream is never asked for more items than were requested.
pub struct Take<P>
where
    P: Pull,
{
    upstream: Iter<P>,
    count: usize,
    max: usize,
    phase: Phase,
}

impl<P> Take<P>
where
    P: Pull,
{
    pub(crate) fn new(upstream: Iter<P>, max: usize) -> Self {
        Take {
            upstream,
            count: 0,
            max,
            phase: Phase::Active,
        }
    }
}

impl<P> Pull for Take<P>
where
    P: Pull,
{
    type Item = P::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.phase.is_exhausted() {
            return None;
        }
        if self.count >= self.max {
            self.phase.latch("take");
            return None;
        }

        match self.upstream.next() {
            Some(item) => {
                self.count += 1;
                Some(item)
            }
            None => {
                self.phase.latch("take");
                None
            }
        }
    }
}
