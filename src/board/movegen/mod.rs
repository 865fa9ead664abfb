//! Pseudo-legal move generation.
//!
//! One rule procedure per piece kind, dispatched on the piece found at
//! the source square. The procedures only read the board; they check
//! occupancy and capture eligibility, never whether a move would expose
//! a king.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::rules::Ruleset;
use super::types::{Piece, Square, TargetList};
use super::Board;

impl Board {
    /// Squares the piece on `from` may move to under the default rules.
    ///
    /// An empty source square yields an empty list, not an error.
    #[must_use]
    pub fn possible_moves(&self, from: Square) -> TargetList {
        self.possible_moves_with(from, Ruleset::default())
    }

    /// Squares the piece on `from` may move to under `rules`.
    ///
    /// Candidates appear in enumeration order: direction-list order,
    /// nearest square first within each direction. Callers must not
    /// rely on the list being sorted.
    #[must_use]
    pub fn possible_moves_with(&self, from: Square, rules: Ruleset) -> TargetList {
        let mover = match self.piece_at(from) {
            Some(mover) => mover,
            None => return TargetList::new(),
        };

        let targets = match mover.1 {
            Piece::Pawn => self.pawn_targets(from, mover, rules),
            Piece::Knight => self.knight_targets(from, mover, rules),
            Piece::Bishop => self.slider_targets(from, mover, &sliders::BISHOP_STEPS, rules),
            Piece::Rook => self.slider_targets(from, mover, &sliders::ROOK_STEPS, rules),
            Piece::Queen => self.slider_targets(from, mover, &sliders::QUEEN_STEPS, rules),
            Piece::King => self.king_targets(from, mover, rules),
        };

        #[cfg(feature = "logging")]
        log::trace!(
            "possible_moves {} {:?} from {from}: {} candidates",
            mover.0,
            mover.1,
            targets.len()
        );

        targets
    }
}
