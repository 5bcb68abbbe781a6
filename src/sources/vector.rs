use crate::{Iter, Pull};

/// Owned in-memory sequence, produced front to back.
///
/// Created by [`vector`].
#[derive(Debug, Clone)]
pub struct Vector<T> {
    items: std::vec::IntoIter<T>,
}

/// Create a handle yielding the elements of `items` in index order.
///
/// ```rust
/// use pullflow::prelude::*;
///
/// assert_eq!(vector(vec![0, 1, -2, 3]).filter(|x| *x < 0).collect(), vec![-2]);
/// ```
pub fn vector<T>(items: Vec<T>) -> Iter<Vector<T>> {
    Iter::new(Vector {
        items: items.into_iter(),
    })
}

impl<T> Pull for Vector<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.items.next()
    }
}

/// Borrowed in-memory sequence, produced front to back by reference.
///
/// Created by [`slice`].
#[derive(Debug, Clone)]
pub struct Slice<'a, T> {
    items: &'a [T],
    cursor: usize,
}

/// Create a handle yielding references to the elements of `items`.
pub fn slice<T>(items: &[T]) -> Iter<Slice<'_, T>> {
    Iter::new(Slice { items, cursor: 0 })
}

impl<'a, T> Pull for Slice<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.items.get(self.cursor)?;
        self.cursor += 1;
        Some(item)
    }
}
