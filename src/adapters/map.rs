use crate::{Iter, Pull};

/// Applies a function to every item of the upstream handle.
///
/// Created by [`Iter::map`].
pub struct Map<P, F>
where
    P: Pull,
{
    upstream: Iter<P>,
    mapper: F,
}

impl<P, F> Map<P, F>
where
    P: Pull,
{
    pub(crate) fn new(upstream: Iter<P>, mapper: F) -> Self {
        Map { upstream, mapper }
    }
}

impl<B, P, F> Pull for Map<P, F>
where
    P: Pull,
    F: FnMut(P::Item) -> B,
{
    type Item = B;

    fn next(&mut self) -> Option<Self::Item> {
        self.upstream.next().map(&mut self.mapper)
    }
}

#[cfg(test)]
mod tests {
    use crate::sources::{range, vector};

    #[test]
    fn test_map_squares() {
        assert_eq!(range(0, 4, 1).map(|x| x * x).collect(), vec![0, 1, 4, 9]);
        assert_eq!(range(0, -5, -2).map(|x| x * x).collect(), vec![0, 4, 16]);
    }

    #[test]
    fn test_map_changes_item_type() {
        let lengths = vector(vec!["a", "bcd", ""]).map(str::len).collect();
        assert_eq!(lengths, vec![1, 3, 0]);
    }

    #[test]
    fn test_map_is_lazy() {
        let mut calls = 0;
        {
            let _unused = range(0, 4, 1).map(|x| {
                calls += 1;
                x
            });
        }
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_map_stays_exhausted() {
        let mut it = vector(vec![1]).map(|x| x + 1);
        assert_eq!(it.next(), Some(2));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }
}
