//! Depth policy for selection synthesis.

/// Default maximum selection depth when the caller does not choose one.
pub const DEFAULT_DEPTH: u32 = 7;

/// Ceiling substituted for [`DepthLimit::Auto`]. Large enough that any real
/// schema is bounded by cycle detection long before reaching it, finite so
/// that descent stays stack-safe even on pathological input.
const AUTO_DEPTH_CEILING: u32 = 256;

/// How deep selection synthesis may descend.
///
/// Both the numeric bound and visited-set cycle detection are always active;
/// either one alone guarantees termination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthLimit {
    /// Truncate descent unconditionally at this depth.
    Bounded(u32),
    /// No effective numeric bound; rely on cycle detection.
    Auto,
}

impl DepthLimit {
    /// Interprets a user-supplied depth value, where `0` is the auto
    /// sentinel.
    #[must_use]
    pub fn from_flag(depth: u32) -> Self {
        if depth == 0 {
            DepthLimit::Auto
        } else {
            DepthLimit::Bounded(depth)
        }
    }

    /// The effective numeric ceiling for recursion.
    #[must_use]
    pub(crate) fn ceiling(self) -> u32 {
        match self {
            DepthLimit::Bounded(depth) => depth,
            DepthLimit::Auto => AUTO_DEPTH_CEILING,
        }
    }
}

impl Default for DepthLimit {
    fn default() -> Self {
        DepthLimit::Bounded(DEFAULT_DEPTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_means_auto() {
        assert_eq!(DepthLimit::from_flag(0), DepthLimit::Auto);
        assert_eq!(DepthLimit::from_flag(3), DepthLimit::Bounded(3));
    }

    #[test]
    fn auto_has_a_finite_ceiling() {
        assert!(DepthLimit::Auto.ceiling() > DEFAULT_DEPTH);
        assert_eq!(DepthLimit::Bounded(2).ceiling(), 2);
    }
}
