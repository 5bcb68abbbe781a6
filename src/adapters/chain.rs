use crate::{Iter, Pull};

/// Yields every item of the first handle, then every item of the second.
///
/// Created by [`Iter::chain`]. The first handle is dropped the moment it runs
/// out; every later pull goes to the second one, even if that one is already
/// exhausted as well.
pub struct Chain<P, Q>
where
    P: Pull,
    Q: Pull,
{
    first: Option<Iter<P>>,
    second: Iter<Q>,
}

impl<P, Q> Chain<P, Q>
where
    P: Pull,
    Q: Pull,
{
    pub(crate) fn new(first: Iter<P>, second: Iter<Q>) -> Self {
        Chain {
            first: Some(first),
            second,
        }
    }
}

impl<P, Q> Pull for Chain<P, Q>
where
    P: Pull,
    Q: Pull<Item = P::Item>,
{
    type Item = P::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(first) = self.first.as_mut() {
            match first.next() {
                Some(item) => return Some(item),
                None => {
                    self.first = None;
                    log::trace!("chain: switched to second source");
                }
            }
        }
        self.second.next()
    }
}
