//! The iterator handle and its fold engine.
//!
//! [`Iter`] wraps one [`Pull`] source and exposes the whole operation surface.
//! Every terminal operation reduces to one of two primitives:
//!
//! - [`Iter::fold`] drains the source unconditionally
//! - [`Iter::try_fold`] stops at the first [`ControlFlow::Break`]
//!
//! Adapters ([`Iter::map`], [`Iter::filter`], ...) are lazy: building one pulls
//! nothing until the resulting handle is driven.
//!
//! # Examples
//!
//! ```rust
//! use pullflow::prelude::*;
//!
//! let squares = range(0, 4, 1).map(|x| x * x).collect();
//! assert_eq!(squares, vec![0, 1, 4, 9]);
//!
//! let mut it = vector(vec![3, 1, 4, 1, 5]);
//! assert_eq!(it.position(|x| x == 4), Some(2));
//! // `position` stopped right after the match.
//! assert_eq!(it.collect(), vec![1, 5]);
//! ```

use std::fmt;

use crate::{
    adapters::{Chain, Enumerate, Filter, Map, Take, TakeWhile, Zip},
    error::{Error, Result},
    flow::ControlFlow,
    pull::Pull,
};

/// Handle owning a single pull source.
///
/// All operations advance the wrapped source as a side effect. Terminal
/// operations borrow the handle mutably, so a partially consumed handle can be
/// driven further afterwards.
pub struct Iter<P>
where
    P: Pull,
{
    source: P,
    // Item handed back by `skip_while`; served before the source is pulled again.
    front: Option<P::Item>,
}

impl<P> Iter<P>
where
    P: Pull,
{
    /// Wrap a pull source.
    pub fn new(source: P) -> Self {
        Self {
            source,
            front: None,
        }
    }

    /// Consume the handle and return the wrapped source along with the item
    /// [`skip_while`](Self::skip_while) set aside, if it was not pulled yet.
    ///
    /// The set-aside item comes before anything still left in the source.
    ///
    /// ```rust
    /// use pullflow::prelude::*;
    ///
    /// let mut it = vector(vec![-1, 2, 3]);
    /// it.skip_while(|x| *x < 0);
    /// let (mut source, front) = it.into_parts();
    /// assert_eq!(front, Some(2));
    /// assert_eq!(source.next(), Some(3));
    /// ```
    pub fn into_parts(self) -> (P, Option<P::Item>) {
        (self.source, self.front)
    }

    /// Consume a handle that has nothing set aside and return its source.
    #[cfg(test)]
    pub(crate) fn into_inner(self) -> P {
        debug_assert!(
            self.front.is_none(),
            "`into_inner` would drop the item set aside by `skip_while`"
        );
        self.source
    }

    /// Produce the next item, or `None` once the source is exhausted.
    #[inline]
    pub fn next(&mut self) -> Option<P::Item> {
        match self.front.take() {
            Some(item) => Some(item),
            None => self.source.next(),
        }
    }

    /// Borrow this handle as a pull source of its own.
    ///
    /// Useful to run an adapter over a prefix and keep using the rest:
    ///
    /// ```rust
    /// use pullflow::prelude::*;
    ///
    /// let mut it = range(0, 6, 1);
    /// assert_eq!(it.by_ref().take(2).collect(), vec![0, 1]);
    /// assert_eq!(it.collect(), vec![2, 3, 4, 5]);
    /// ```
    pub fn by_ref(&mut self) -> Iter<&mut Self> {
        Iter::new(self)
    }

    /// Erase the concrete source type behind a boxed trait object.
    pub fn boxed<'a>(self) -> Iter<Box<dyn Pull<Item = P::Item> + 'a>>
    where
        Self: 'a,
    {
        let source: Box<dyn Pull<Item = P::Item> + 'a> = Box::new(self);
        Iter::new(source)
    }

    // ------------------------------------------------------------------
    // Fold engine
    // ------------------------------------------------------------------

    /// Fold every remaining item into an accumulator.
    pub fn fold<A, F>(&mut self, init: A, mut reducer: F) -> A
    where
        F: FnMut(A, P::Item) -> A,
    {
        let mut acc = init;
        while let Some(item) = self.next() {
            acc = reducer(acc, item);
        }
        acc
    }

    /// Fold items until the reducer returns [`ControlFlow::Break`].
    ///
    /// The source is pulled exactly once per reducer call and never after a
    /// `Break`. If the source runs out first the final accumulator comes back
    /// as `Continue`.
    ///
    /// ```rust
    /// use pullflow::prelude::*;
    ///
    /// let mut it = range(1, 10, 1);
    /// let flow = it.try_fold(0, |sum, x| {
    ///     if sum + x > 5 { ControlFlow::Break(sum) } else { ControlFlow::Continue(sum + x) }
    /// });
    /// assert_eq!(flow, ControlFlow::Break(3));
    /// assert_eq!(it.next(), Some(4));
    /// ```
    pub fn try_fold<A, F>(&mut self, init: A, mut reducer: F) -> ControlFlow<A>
    where
        F: FnMut(A, P::Item) -> ControlFlow<A>,
    {
        let mut acc = init;
        while let Some(item) = self.next() {
            match reducer(acc, item) {
                ControlFlow::Continue(next) => acc = next,
                done @ ControlFlow::Break(_) => return done,
            }
        }
        ControlFlow::Continue(acc)
    }

    /// Fold using the first item as the initial accumulator.
    ///
    /// Returns `None` if the source is empty.
    pub fn fold_first<F>(&mut self, reducer: F) -> Option<P::Item>
    where
        F: FnMut(P::Item, P::Item) -> P::Item,
    {
        let first = self.next()?;
        Some(self.fold(first, reducer))
    }

    // ------------------------------------------------------------------
    // Derived terminals
    // ------------------------------------------------------------------

    /// Number of remaining items.
    pub fn count(&mut self) -> usize {
        self.fold(0, |acc, _| acc + 1)
    }

    /// Last remaining item.
    pub fn last(&mut self) -> Option<P::Item> {
        self.fold(None, |_, item| Some(item))
    }

    /// Call `callback` once per remaining item.
    pub fn for_each<F>(&mut self, mut callback: F)
    where
        F: FnMut(P::Item),
    {
        self.fold((), |(), item| callback(item));
    }

    /// Every remaining item, in pull order.
    pub fn collect(&mut self) -> Vec<P::Item> {
        let mut collected = Vec::new();
        while let Some(item) = self.next() {
            collected.push(item);
        }
        collected
    }

    /// `true` if `predicate` holds for every remaining item.
    ///
    /// Stops at the first failure. Always `true` on an empty source.
    pub fn all<F>(&mut self, mut predicate: F) -> bool
    where
        F: FnMut(P::Item) -> bool,
    {
        self.try_fold((), |(), item| {
            if predicate(item) {
                ControlFlow::Continue(())
            } else {
                ControlFlow::Break(())
            }
        })
        .should_continue()
    }

    /// `true` if `predicate` holds for at least one remaining item.
    ///
    /// Stops at the first match. Always `false` on an empty source.
    pub fn any<F>(&mut self, mut predicate: F) -> bool
    where
        F: FnMut(P::Item) -> bool,
    {
        self.try_fold((), |(), item| {
            if predicate(item) {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .should_break()
    }

    /// First remaining item matching `predicate`.
    pub fn find<F>(&mut self, mut predicate: F) -> Option<P::Item>
    where
        F: FnMut(&P::Item) -> bool,
    {
        self.try_fold(None, |_, item| {
            if predicate(&item) {
                ControlFlow::Break(Some(item))
            } else {
                ControlFlow::Continue(None)
            }
        })
        .break_value()
        .flatten()
    }

    /// Zero-based index, counted from the current position, of the first item
    /// matching `predicate`.
    pub fn position<F>(&mut self, mut predicate: F) -> Option<usize>
    where
        F: FnMut(P::Item) -> bool,
    {
        self.try_fold(0, |index, item| {
            if predicate(item) {
                ControlFlow::Break(index)
            } else {
                ControlFlow::Continue(index + 1)
            }
        })
        .break_value()
    }

    /// Discard items while `predicate` holds.
    ///
    /// The first item that fails the predicate is kept and returned by the
    /// next pull on this same handle.
    ///
    /// ```rust
    /// use pullflow::prelude::*;
    ///
    /// let mut it = vector(vec![-2, -1, 0, -3]);
    /// assert_eq!(it.skip_while(|x| *x < 0).collect(), vec![0, -3]);
    /// ```
    pub fn skip_while<F>(&mut self, mut predicate: F) -> &mut Self
    where
        F: FnMut(&P::Item) -> bool,
    {
        self.front = self.find(|item| !predicate(item));
        self
    }

    /// Discard up to `n` items, stopping early if the source runs out.
    pub fn skip(&mut self, n: usize) -> &mut Self {
        for _ in 0..n {
            if self.next().is_none() {
                break;
            }
        }
        self
    }

    /// Discard exactly `n` items.
    ///
    /// Fails with [`Error::AdvancePastEnd`] if the source runs out first. Items
    /// discarded before that point stay discarded.
    pub fn advance_by(&mut self, n: usize) -> Result<()> {
        for step in 0..n {
            if self.next().is_none() {
                let err = Error::AdvancePastEnd {
                    requested: n,
                    remaining: n - step,
                };
                log::debug!("{err}");
                return Err(err);
            }
        }
        Ok(())
    }

    /// Discard `n` items and return the one after them.
    pub fn nth(&mut self, n: usize) -> Option<P::Item> {
        // Running out before the nth item just means there is no nth item.
        self.advance_by(n).ok()?;
        self.next()
    }

    // ------------------------------------------------------------------
    // Adapters
    // ------------------------------------------------------------------

    /// Apply `mapper` to every item.
    pub fn map<B, F>(self, mapper: F) -> Iter<Map<P, F>>
    where
        F: FnMut(P::Item) -> B,
    {
        Iter::new(Map::new(self, mapper))
    }

    /// Yield only the items matching `predicate`.
    pub fn filter<F>(self, predicate: F) -> Iter<Filter<P, F>>
    where
        F: FnMut(&P::Item) -> bool,
    {
        Iter::new(Filter::new(self, predicate))
    }

    /// Yield every item of `self`, then every item of `other`.
    pub fn chain<Q>(self, other: Iter<Q>) -> Iter<Chain<P, Q>>
    where
        Q: Pull<Item = P::Item>,
    {
        Iter::new(Chain::new(self, other))
    }

    /// Pair items of `self` and `other` until either side runs out.
    pub fn zip<Q>(self, other: Iter<Q>) -> Iter<Zip<P, Q>>
    where
        Q: Pull,
    {
        Iter::new(Zip::new(self, other))
    }

    /// Pair every item with its zero-based position.
    pub fn enumerate(self) -> Iter<Enumerate<P>> {
        Iter::new(Enumerate::new(self))
    }

    /// Yield items until `predicate` first fails.
    pub fn take_while<F>(self, predicate: F) -> Iter<TakeWhile<P, F>>
    where
        F: FnMut(&P::Item) -> bool,
    {
        Iter::new(TakeWhile::new(self, predicate))
    }

    /// Yield at most `n` items.
    pub fn take(self, n: usize) -> Iter<Take<P>> {
        Iter::new(Take::new(self, n))
    }
}

impl<P> Pull for Iter<P>
where
    P: Pull,
{
    type Item = P::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        Iter::next(self)
    }
}

impl<P> fmt::Debug for Iter<P>
where
    P: Pull + fmt::Debug,
    P::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("source", &self.source)
            .field("front", &self.front)
            .finish()
    }
}

/// [`Iterator`] adapter for an [`Iter`].
///
/// Lets a handle drive `for` loops and the `std` iterator ecosystem.
pub struct IntoIter<P>(Iter<P>)
where
    P: Pull;

impl<P> Iterator for IntoIter<P>
where
    P: Pull,
{
    type Item = P::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
}

impl<P> std::iter::FusedIterator for IntoIter<P> where P: Pull {}

impl<P> IntoIterator for Iter<P>
where
    P: Pull,
{
    type Item = P::Item;
    type IntoIter = IntoIter<P>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}
