use super::super::rules::Ruleset;
use super::super::types::{Color, Piece, Square, TargetList};
use super::super::Board;

// Offset order fixes the enumeration order of the results.
pub(crate) const KNIGHT_STEPS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

impl Board {
    /// Knight rule: each offset target is a candidate iff it is on the
    /// board and empty or capturable.
    pub(crate) fn knight_targets(
        &self,
        from: Square,
        mover: (Color, Piece),
        rules: Ruleset,
    ) -> TargetList {
        let mut targets = TargetList::new();

        for &(dr, df) in &KNIGHT_STEPS {
            if let Some(square) = rules.edges.step(from, dr, df) {
                match self.piece_at(square) {
                    None => targets.push(square),
                    Some(defender) if rules.capture.is_opponent(mover, defender) => {
                        targets.push(square)
                    }
                    Some(_) => {}
                }
            }
        }

        targets
    }
}
