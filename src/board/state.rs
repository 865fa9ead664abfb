//! Board state: a flat array of 64 cells.

use std::fmt;

use super::error::SquareError;
use super::types::{Color, Piece, Square, CELL_COUNT};

/// The board: 64 cells in row-major order, each empty or holding one
/// piece.
///
/// The board is a passive data holder. Move generation reads it through
/// [`Board::possible_moves`] and never mutates it; the only mutations
/// are [`Board::set`] and [`Board::apply_move`], neither of which
/// performs a legality check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Option<(Color, Piece)>; CELL_COUNT],
}

impl Board {
    /// Create a board with the standard starting position.
    ///
    /// Black occupies rows 0-1, White rows 6-7, with four empty rows in
    /// between.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, &piece) in back_rank.iter().enumerate() {
            board.set_piece(Square(0, file), Color::Black, piece);
            board.set_piece(Square(1, file), Color::Black, Piece::Pawn);
            board.set_piece(Square(6, file), Color::White, Piece::Pawn);
            board.set_piece(Square(7, file), Color::White, piece);
        }
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            cells: [None; CELL_COUNT],
        }
    }

    /// Read the cell at a flat index.
    ///
    /// Fails with [`SquareError::IndexOutOfRange`] when `index` is not
    /// in 0..64.
    pub fn get(&self, index: usize) -> Result<Option<(Color, Piece)>, SquareError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(SquareError::IndexOutOfRange { index })
    }

    /// Overwrite the cell at a flat index, unconditionally.
    ///
    /// No legality check is applied at this layer.
    pub fn set(
        &mut self,
        index: usize,
        cell: Option<(Color, Piece)>,
    ) -> Result<(), SquareError> {
        match self.cells.get_mut(index) {
            Some(slot) => {
                *slot = cell;
                Ok(())
            }
            None => Err(SquareError::IndexOutOfRange { index }),
        }
    }

    /// The piece on `square`, if any.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<(Color, Piece)> {
        self.cells[square.as_index()]
    }

    /// True if `square` holds no piece.
    #[inline]
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.cells[square.as_index()].is_none()
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, square: Square, color: Color, piece: Piece) {
        self.cells[square.as_index()] = Some((color, piece));
    }

    /// Relocate whatever is on `from` to `to`, then clear `from`.
    ///
    /// Any piece on `to` is overwritten (a capture). No legality check
    /// is made; callers are expected to pass a destination drawn from
    /// [`Board::possible_moves`].
    pub fn apply_move(&mut self, from: Square, to: Square) {
        #[cfg(feature = "logging")]
        log::debug!("apply_move {from} -> {to}");

        self.cells[to.as_index()] = self.cells[from.as_index()];
        self.cells[from.as_index()] = None;
    }

    /// Iterate over all occupied squares.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| cell.map(|(color, piece)| (Square::from_index(index), color, piece)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in 0..8 {
            write!(f, "{} ", 8 - rank)?;
            for file in 0..8 {
                let c = match self.piece_at(Square(rank, file)) {
                    Some((Color::White, piece)) => piece.to_char().to_ascii_uppercase(),
                    Some((Color::Black, piece)) => piece.to_char(),
                    None => '.',
                };
                write!(f, "{c} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
