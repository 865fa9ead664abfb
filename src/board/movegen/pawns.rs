use super::super::rules::Ruleset;
use super::super::types::{Color, Piece, Square, TargetList};
use super::super::Board;

impl Board {
    /// Pawn rule: single step onto an empty square, double step from
    /// the color's start rank when both squares are empty, diagonal
    /// steps only onto capturable pieces.
    pub(crate) fn pawn_targets(
        &self,
        from: Square,
        mover: (Color, Piece),
        rules: Ruleset,
    ) -> TargetList {
        let mut targets = TargetList::new();
        let dir = mover.0.forward_dir();

        if let Some(forward) = rules.edges.step(from, dir, 0) {
            if self.is_empty(forward) {
                targets.push(forward);

                if from.rank() == mover.0.double_step_rank() {
                    if let Some(double) = rules.edges.step(from, 2 * dir, 0) {
                        if self.is_empty(double) {
                            targets.push(double);
                        }
                    }
                }
            }
        }

        // Diagonal captures, forward-right before forward-left from
        // White's point of view.
        for df in [-dir, dir] {
            if let Some(target) = rules.edges.step(from, dir, df) {
                if let Some(defender) = self.piece_at(target) {
                    if rules.capture.is_opponent(mover, defender) {
                        targets.push(target);
                    }
                }
            }
        }

        targets
    }
}
