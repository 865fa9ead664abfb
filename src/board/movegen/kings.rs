use super::super::rules::Ruleset;
use super::super::types::{Color, Piece, Square, TargetList};
use super::super::Board;

// Offset order fixes the enumeration order of the results.
pub(crate) const KING_STEPS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Board {
    /// King rule: one step to each adjacent square that is empty or
    /// capturable. No castling.
    pub(crate) fn king_targets(
        &self,
        from: Square,
        mover: (Color, Piece),
        rules: Ruleset,
    ) -> TargetList {
        let mut targets = TargetList::new();

        for &(dr, df) in &KING_STEPS {
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
