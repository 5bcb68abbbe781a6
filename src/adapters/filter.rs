use crate::{Iter, Pull};

/// Yields only the upstream items matching a predicate.
///
/// Each pull searches the rest of the upstream with [`Iter::find`], so an
/// exhausted upstream keeps the filter exhausted too.
///
/// Created by [`Iter::filter`].
pub struct Filter<P, F>
where
    P: Pull,
{
    upstream: Iter<P>,
    predicate: F,
}

impl<P, F> Filter<P, F>
where
    P: Pull,
{
    pub(crate) fn new(upstream: Iter<P>, predicate: F) -> Self {
        Filter {
            upstream,
            predicate,
        }
    }
}

impl<P, F> Pull for Filter<P, F>
where
    P: Pull,
    F: FnMut(&P::Item) -> bool,
{
    type Item = P::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.upstream.find(&mut self.predicate)
    }
}

#[cfg(test)]
mod tests {
    use crate::sources::{range, vector};

    #[test]
    fn test_filter_negatives() {
        assert_eq!(vector(vec![0, 1, -2, 3]).filter(|x| *x < 0).collect(), vec![-2]);
        assert_eq!(range(0, -4, -1).filter(|x| *x < 0).collect(), vec![-1, -2, -3]);
        assert_eq!(range(0, 5, 2).filter(|x| *x < 0).collect(), Vec::<i64>::new());
    }

    #[test]
    fn test_filter_stays_exhausted() {
        let mut it = vector(vec![2, 3]).filter(|x| x % 2 == 0);
        assert_eq!(it.next(), Some(2));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_filter_then_map() {
        let odd_squares = range(0, 6, 1).filter(|x| x % 2 == 1).map(|x| x * x).collect();
        assert_eq!(odd_squares, vec![1, 9, 25]);
    }
}
