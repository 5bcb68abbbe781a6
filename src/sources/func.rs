use std::marker::PhantomData;

use crate::{Iter, Pull};

/// Pull source backed by a closure.
///
/// Created by [`from_fn`].
pub struct FromFn<F>(F);

impl<T, F> Pull for FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        (self.0)()
    }
}

/// Create a handle that calls `f` on every pull.
///
/// The closure must keep returning `None` once it has returned `None`.
///
/// ```rust
/// use pullflow::prelude::*;
///
/// let mut n = 0;
/// let mut evens = from_fn(move || {
///     n += 2;
///     (n <= 6).then_some(n)
/// });
/// assert_eq!(evens.collect(), vec![2, 4, 6]);
/// ```
pub fn from_fn<T, F>(f: F) -> Iter<FromFn<F>>
where
    F: FnMut() -> Option<T>,
{
    Iter::new(FromFn(f))
}

/// Yields a single item, then nothing.
///
/// Created by [`once`].
#[derive(Debug, Clone)]
pub struct Once<T>(Option<T>);

/// Create a handle yielding `value` exactly once.
pub fn once<T>(value: T) -> Iter<Once<T>> {
    Iter::new(Once(Some(value)))
}

impl<T> Pull for Once<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.take()
    }
}

/// Yields nothing.
///
/// Created by [`empty`].
#[derive(Debug, Clone, Copy)]
pub struct Empty<T>(PhantomData<fn() -> T>);

/// Create a handle that is exhausted from the start.
pub fn empty<T>() -> Iter<Empty<T>> {
    Iter::new(Empty(PhantomData))
}

impl<T> Pull for Empty<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        None
    }
}

/// Pull source over a standard [`Iterator`].
///
/// The iterator is fused, so exhaustion stays final even for iterators that
/// would resume on their own.
///
/// Created by [`from_iterator`].
#[derive(Debug, Clone)]
pub struct Bridge<I>(std::iter::Fuse<I>);

/// Create a handle over anything that implements [`IntoIterator`].
///
/// ```rust
/// use pullflow::prelude::*;
///
/// let chars = from_iterator("abc".chars()).take(2).collect();
/// assert_eq!(chars, vec!['a', 'b']);
/// ```
pub fn from_iterator<I>(items: I) -> Iter<Bridge<I::IntoIter>>
where
    I: IntoIterator,
{
    Iter::new(Bridge(items.into_iter().fuse()))
}

impl<I> Pull for Bridge<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_once_yields_then_stops() {
        let mut it = once("only");
        assert_eq!(it.next(), Some("only"));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_empty_yields_nothing() {
        let mut it = empty::<i32>();
        assert_eq!(it.next(), None);
        assert_eq!(it.count(), 0);
    }

    #[test]
    fn test_from_fn_counter() {
        let mut n = 0;
        let got = from_fn(|| {
            n += 1;
            (n < 4).then_some(n)
        })
        .collect();
        assert_eq!(got, vec![1, 2, 3]);
    }

    #[test]
    fn test_from_iterator_is_fused() {
        let mut flip = false;
        // Alternates between `None` and `Some` forever.
        let flaky = std::iter::from_fn(move || {
            flip = !flip;
            (!flip).then_some(1)
        });

        let mut it = from_iterator(flaky);
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_from_iterator_over_vec() {
        assert_eq!(from_iterator(vec![1, 2, 3]).zip(once('z')).collect(), vec![(1, 'z')]);
    }
}
