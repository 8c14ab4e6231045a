//! Word-boundary semantics for a trigger string.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a trigger is permitted to match inside a word.
///
/// Strictness order: `None < Left = Right < Both`. `Left`/`Right` are
/// incomparable to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Boundary {
    /// May match anywhere inside a word.
    None,
    /// Trigger must start a word.
    Left,
    /// Trigger must end a word.
    Right,
    /// Trigger must be a standalone word.
    Both,
}

impl Boundary {
    /// Strictness rank used by `choose_strictest`. `Left` and `Right`
    /// share a rank since neither is stricter than the other.
    const fn rank(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Left | Self::Right => 1,
            Self::Both => 2,
        }
    }

    pub const fn is_stricter_or_equal(self, other: Self) -> bool {
        self.rank() >= other.rank()
    }
}

impl PartialOrd for Boundary {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.rank(), other.rank()) {
            (a, b) if a == b => {
                if matches!((self, other), (Self::Left, Self::Right) | (Self::Right, Self::Left))
                {
                    None
                } else {
                    Some(Ordering::Equal)
                }
            }
            (a, b) => a.partial_cmp(&b),
        }
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::None => "NONE",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Both => "BOTH",
        };
        write!(f, "{s}")
    }
}

/// Combine two boundary constraints by logical AND: `Left` requires a
/// word-start, `Right` a word-end, so requiring both at once is `Both`.
const fn combine(a: Boundary, b: Boundary) -> Boundary {
    use Boundary::{Both, Left, None, Right};
    match (a, b) {
        (Both, _) | (_, Both) => Both,
        (None, x) | (x, None) => x,
        (Left, Left) => Left,
        (Right, Right) => Right,
        (Left, Right) | (Right, Left) => Both,
    }
}

/// Choose the strictest boundary that satisfies every constraint in the
/// set simultaneously. Used by platform substring conflict resolution
/// (which retains the *least* restrictive of a pair) and by the boundary
/// laws of spec.md §8: `choose_strictest({LEFT, RIGHT}) = BOTH`,
/// `choose_strictest({NONE, LEFT}) = LEFT`, `choose_strictest({NONE}) =
/// NONE`.
pub fn choose_strictest(boundaries: impl IntoIterator<Item = Boundary>) -> Option<Boundary> {
    boundaries.into_iter().reduce(combine)
}

/// Choose the least restrictive of two boundaries, by the priority
/// `NONE < LEFT/RIGHT < BOTH`, used by the platform substring conflict
/// pass (spec.md §4.5) which always keeps the less restrictive entry.
pub const fn less_restrictive(a: Boundary, b: Boundary) -> Boundary {
    if a.rank() <= b.rank() { a } else { b }
}

/// A pattern's boundary, which structurally can never be `Both`: a
/// pattern is never a standalone-only trigger (spec.md §3, §9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternBoundary {
    None,
    Left,
    Right,
}

impl From<PatternBoundary> for Boundary {
    fn from(value: PatternBoundary) -> Self {
        match value {
            PatternBoundary::None => Self::None,
            PatternBoundary::Left => Self::Left,
            PatternBoundary::Right => Self::Right,
        }
    }
}

impl fmt::Display for PatternBoundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Boundary::from(*self), f)
    }
}

/// The kind of structural position a pattern occupies, which constrains
/// which `PatternBoundary` values are admissible (spec.md §3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    Prefix,
    Suffix,
    Middle,
}

impl PatternKind {
    /// Boundaries to try, in escalation order (spec.md §4.3).
    pub const fn escalation_order(self) -> &'static [PatternBoundary] {
        match self {
            Self::Prefix => &[PatternBoundary::None, PatternBoundary::Left],
            Self::Suffix => &[PatternBoundary::None, PatternBoundary::Right],
            Self::Middle => &[PatternBoundary::None],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strictness_order() {
        assert!(Boundary::Both.is_stricter_or_equal(Boundary::Left));
        assert!(Boundary::Both.is_stricter_or_equal(Boundary::Right));
        assert!(Boundary::Left.is_stricter_or_equal(Boundary::None));
        assert!(Boundary::Right.is_stricter_or_equal(Boundary::None));
        assert!(!Boundary::Left.is_stricter_or_equal(Boundary::Right));
        assert!(!Boundary::Right.is_stricter_or_equal(Boundary::Left));
    }

    #[test]
    fn choose_strictest_laws() {
        assert_eq!(
            choose_strictest([Boundary::Left, Boundary::Right]),
            Some(Boundary::Both)
        );
        assert_eq!(
            choose_strictest([Boundary::None, Boundary::Left]),
            Some(Boundary::Left)
        );
        assert_eq!(choose_strictest([Boundary::None]), Some(Boundary::None));
    }

    #[test]
    fn less_restrictive_prefers_none() {
        assert_eq!(
            less_restrictive(Boundary::None, Boundary::Both),
            Boundary::None
        );
        assert_eq!(
            less_restrictive(Boundary::Left, Boundary::Both),
            Boundary::Left
        );
    }

    #[test]
    fn pattern_boundary_converts() {
        assert_eq!(Boundary::from(PatternBoundary::Left), Boundary::Left);
        assert_eq!(Boundary::from(PatternBoundary::None), Boundary::None);
    }
}
