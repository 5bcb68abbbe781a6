//! Error types for the pullflow crate.

use thiserror::Error;

/// Failures surfaced by the strict accessors of the engine.
///
/// Both kinds signal a programmer error. Nothing in the crate retries or
/// recovers from them internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An empty optional value was asked for its content.
    #[error("called `unwrap` on an empty optional value")]
    EmptyUnwrap,

    /// The source ran dry before the requested number of pulls completed.
    ///
    /// Items pulled before exhaustion stay consumed.
    #[error("advance reached the end of the source with {remaining} of {requested} steps left")]
    AdvancePastEnd { requested: usize, remaining: usize },
}

/// Result type for pullflow operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            Error::EmptyUnwrap.to_string(),
            "called `unwrap` on an empty optional value"
        );
        assert_eq!(
            Error::AdvancePastEnd { requested: 5, remaining: 2 }.to_string(),
            "advance reached the end of the source with 2 of 5 steps left"
        );
    }
}
