use crate::{Iter, Pull};

/// An item paired with its zero-based position in the upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Enumeration<T> {
    pub index: usize,
    pub element: T,
}

/// Pairs every upstream item with its position.
///
/// Created by [`Iter::enumerate`]. The counter advances once per successful
/// pull.
pub struct Enumerate<P>
where
    P: Pull,
{
    upstream: Iter<P>,
    index: usize,
}

impl<P> Enumerate<P>
where
    P: Pull,
{
    pub(crate) fn new(upstream: Iter<P>) -> Self {
        Enumerate { upstream, index: 0 }
    }
}

impl<P> Pull for Enumerate<P>
where
    P: Pull,
{
    type Item = Enumeration<P::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.upstream.next()?;
        let enumeration = Enumeration {
            index: self.index,
            element,
        };
        self.index += 1;
        Some(enumeration)
    }
}
