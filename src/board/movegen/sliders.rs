use super::super::rules::Ruleset;
use super::super::types::{Color, Piece, Square, TargetList};
use super::super::Board;

// Direction order fixes the enumeration order of the results, so these
// tables must not be reordered. Queen directions are the rook's
// followed by the bishop's.
pub(crate) const ROOK_STEPS: [(isize, isize); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

pub(crate) const BISHOP_STEPS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub(crate) const QUEEN_STEPS: [(isize, isize); 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

impl Board {
    /// Sliding rule shared by rook, bishop and queen: walk each
    /// direction over empty squares, appending each one; the first
    /// occupied square ends the walk and is appended only if it is
    /// capturable. Nothing beyond a blocker is ever a candidate.
    pub(crate) fn slider_targets(
        &self,
        from: Square,
        mover: (Color, Piece),
        steps: &[(isize, isize)],
        rules: Ruleset,
    ) -> TargetList {
        let mut targets = TargetList::new();

        for &(dr, df) in steps {
            let mut cursor = rules.edges.step(from, dr, df);
            while let Some(square) = cursor {
                match self.piece_at(square) {
                    None => {
                        targets.push(square);
                        cursor = rules.edges.step(square, dr, df);
                    }
                    Some(defender) => {
                        if rules.capture.is_opponent(mover, defender) {
                            targets.push(square);
                        }
                        break;
                    }
                }
            }
        }

        targets
    }
}
