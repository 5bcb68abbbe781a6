//! Core trait for pull sources.
//!
//! This module defines the [`Pull`] trait, the one capability every sequence
//! producer and every adapter in this library implements. A [`Pull`] hands out
//! its next item on demand, or reports that there is none left.
//!
//! # The Pull Trait
//!
//! [`Pull`] represents a source that:
//! - Produces items of type `Item`, one per call to [`next`](Pull::next)
//! - Signals exhaustion with `None`
//! - Keeps returning `None` once it has returned `None`
//!
//! There is no rewind, lookahead or length query. The full operation surface
//! lives on [`Iter`](crate::Iter), which wraps any `Pull`.
//!
//! # Examples
//!
//! ```rust
//! use pullflow::prelude::*;
//!
//! let (mut source, _) = vector(vec![1, 2]).into_parts();
//! assert_eq!(source.next(), Some(1));
//! assert_eq!(source.next(), Some(2));
//! assert_eq!(source.next(), None);
//! assert_eq!(source.next(), None);
//! ```

/// A source of items that can be pulled one at a time.
///
/// Implementors must make exhaustion idempotent: after `next` returns `None`
/// once, every later call returns `None` as well. Every adapter in this crate
/// relies on that.
pub trait Pull {
    /// Type of the items produced
    type Item;

    /// Produce the next item, or `None` when the source is exhausted.
    fn next(&mut self) -> Option<Self::Item>;
}

impl<P> Pull for &'_ mut P
where
    P: Pull + ?Sized,
{
    type Item = P::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }
}

impl<P> Pull for Box<P>
where
    P: Pull + ?Sized,
{
    type Item = P::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }
}

impl<L, R> Pull for either::Either<L, R>
where
    L: Pull,
    R: Pull<Item = L::Item>,
{
    type Item = L::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            either::Either::Left(l) => l.next(),
            either::Either::Right(r) => r.next(),
        }
    }
}
