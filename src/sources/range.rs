use crate::{Iter, Pull};

/// Arithmetic progression over `i64`.
///
/// `start` is included and `end` is excluded, whatever the sign of `step`. A
/// value is produced while `(index - end) * step < 0`, which makes a zero step
/// an empty progression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range {
    index: i64,
    end: i64,
    step: i64,
}

/// Create a handle over `start, start + step, ...` stopping before `end`.
///
/// ```rust
/// use pullflow::prelude::*;
///
/// assert_eq!(range(0, 4, 1).collect(), vec![0, 1, 2, 3]);
/// assert_eq!(range(0, -4, -1).collect(), vec![0, -1, -2, -3]);
/// assert_eq!(range(0, 0, 0).collect(), Vec::<i64>::new());
/// ```
pub fn range(start: i64, end: i64, step: i64) -> Iter<Range> {
    Iter::new(Range {
        index: start,
        end,
        step,
    })
}

impl Range {
    fn is_done(&self) -> bool {
        // Sign test of `(index - end) * step >= 0` without the multiplication.
        match self.step.signum() {
            1 => self.index >= self.end,
            -1 => self.index <= self.end,
            _ => true,
        }
    }
}

impl Pull for Range {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_done() {
            return None;
        }

        let item = self.index;
        // Overflow can only happen past `end`.
        self.index = self.index.checked_add(self.step).unwrap_or(self.end);
        Some(item)
    }
}
