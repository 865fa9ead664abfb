pub mod board;

pub use board::{
    Board, BoardBuilder, CaptureRule, Color, EdgeRule, Piece, Ruleset, Square, SquareError,
    TargetList,
};
