//! Movement-rule configuration.
//!
//! The generator's behavior varies along two axes: which occupied
//! squares count as capturable, and how candidate squares are validated
//! against the board boundary. The defaults reproduce the click-to-move
//! board this crate backs; [`Ruleset::conventional`] selects the
//! familiar chess readings of both.

use super::types::{Color, Piece, Square};

/// Decides which occupied destination squares are capturable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptureRule {
    /// A piece may only capture the opposing piece of its own kind:
    /// pawn takes pawn, rook takes rook, and so on.
    MatchingKind,
    /// Any piece of the opposing color is capturable.
    AnyEnemy,
}

impl CaptureRule {
    /// True iff `defender` is capturable by `attacker` under this rule.
    ///
    /// A piece is never an opponent of itself.
    #[inline]
    #[must_use]
    pub fn is_opponent(self, attacker: (Color, Piece), defender: (Color, Piece)) -> bool {
        match self {
            CaptureRule::MatchingKind => attacker.1 == defender.1 && attacker.0 != defender.0,
            CaptureRule::AnyEnemy => attacker.0 != defender.0,
        }
    }
}

/// Decides which candidate squares count as on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeRule {
    /// Candidates are validated against the 0..64 index range only.
    /// Horizontal and diagonal steps wrap from one file edge onto the
    /// neighbouring rank.
    IndexRange,
    /// Every step is bounds-checked in (rank, file) space; walks stop
    /// at the board edge.
    RankFile,
}

impl EdgeRule {
    /// The square one `(dr, df)` step from `from`, or `None` if the
    /// step leaves the board under this rule.
    #[inline]
    pub(crate) fn step(self, from: Square, dr: isize, df: isize) -> Option<Square> {
        match self {
            EdgeRule::IndexRange => from.index_offset(dr * 8 + df),
            EdgeRule::RankFile => from.offset(dr, df),
        }
    }
}

/// Movement rules consulted by move generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ruleset {
    pub capture: CaptureRule,
    pub edges: EdgeRule,
}

impl Default for Ruleset {
    fn default() -> Self {
        Ruleset {
            capture: CaptureRule::MatchingKind,
            edges: EdgeRule::IndexRange,
        }
    }
}

impl Ruleset {
    /// Conventional movement: any enemy piece is capturable and walks
    /// stop at the board edge instead of wrapping.
    #[must_use]
    pub const fn conventional() -> Self {
        Ruleset {
            capture: CaptureRule::AnyEnemy,
            edges: EdgeRule::RankFile,
        }
    }
}
