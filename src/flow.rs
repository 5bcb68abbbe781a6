/// Signal returned by a short-circuiting reducer, tagging the accumulator as
/// "keep going" or "stop here".
///
/// Both variants carry a value of the same type, so extracting it never fails.
/// `ControlFlow` is what [`Iter::try_fold`](crate::Iter::try_fold) reducers return.
///
/// # Examples
///
/// ```rust
/// use pullflow::ControlFlow;
///
/// let keep: ControlFlow<i32> = ControlFlow::Continue(1);
/// let stop: ControlFlow<i32> = ControlFlow::Break(2);
///
/// assert!(keep.should_continue());
/// assert!(stop.should_break());
/// assert_eq!(stop.unwrap(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ControlFlow<A> {
    /// Fold the carried accumulator and pull the next item
    Continue(A),
    /// Stop folding immediately with the carried value
    Break(A),
}

impl<A> ControlFlow<A> {
    /// Returns `true` if the signal is `Continue`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullflow::ControlFlow;
    ///
    /// assert!(ControlFlow::Continue(0).should_continue());
    /// assert!(!ControlFlow::Break(0).should_continue());
    /// ```
    #[inline]
    pub const fn should_continue(&self) -> bool {
        matches!(self, ControlFlow::Continue(_))
    }

    /// Returns `true` if the signal is `Break`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullflow::ControlFlow;
    ///
    /// assert!(ControlFlow::Break(0).should_break());
    /// assert!(!ControlFlow::Continue(0).should_break());
    /// ```
    #[inline]
    pub const fn should_break(&self) -> bool {
        matches!(self, ControlFlow::Break(_))
    }

    /// Returns the carried value regardless of the tag.
    ///
    /// Unlike `Option::unwrap` this never panics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullflow::ControlFlow;
    ///
    /// assert_eq!(ControlFlow::Continue("c").unwrap(), "c");
    /// assert_eq!(ControlFlow::Break("b").unwrap(), "b");
    /// ```
    #[inline]
    pub fn unwrap(self) -> A {
        self.into_inner()
    }

    /// Returns the carried value regardless of the tag.
    #[inline]
    pub fn into_inner(self) -> A {
        match self {
            ControlFlow::Continue(a) | ControlFlow::Break(a) => a,
        }
    }

    /// Converts from `ControlFlow<A>` to `Option<A>`, keeping only a `Continue` value.
    #[inline]
    pub fn continue_value(self) -> Option<A> {
        match self {
            ControlFlow::Continue(a) => Some(a),
            ControlFlow::Break(_) => None,
        }
    }

    /// Converts from `ControlFlow<A>` to `Option<A>`, keeping only a `Break` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullflow::ControlFlow;
    ///
    /// assert_eq!(ControlFlow::Break(3).break_value(), Some(3));
    /// assert_eq!(ControlFlow::Continue(3).break_value(), None);
    /// ```
    #[inline]
    pub fn break_value(self) -> Option<A> {
        match self {
            ControlFlow::Continue(_) => None,
            ControlFlow::Break(a) => Some(a),
        }
    }

    /// Maps the carried value, preserving the tag.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullflow::ControlFlow;
    ///
    /// assert_eq!(ControlFlow::Break(2).map(|v| v * 10), ControlFlow::Break(20));
    /// ```
    #[inline]
    pub fn map<B, F>(self, f: F) -> ControlFlow<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            ControlFlow::Continue(a) => ControlFlow::Continue(f(a)),
            ControlFlow::Break(a) => ControlFlow::Break(f(a)),
        }
    }

    /// Converts from `&ControlFlow<A>` to `ControlFlow<&A>`.
    #[inline]
    pub const fn as_ref(&self) -> ControlFlow<&A> {
        match self {
            ControlFlow::Continue(a) => ControlFlow::Continue(a),
            ControlFlow::Break(a) => ControlFlow::Break(a),
        }
    }
}
