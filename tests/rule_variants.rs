//! Tests for the selectable capture and edge rules.

use chess_board::{Board, BoardBuilder, CaptureRule, Color, EdgeRule, Piece, Ruleset, Square};

#[test]
fn default_ruleset_wraps_conventional_does_not() {
    let board = BoardBuilder::new()
        .piece(Square(4, 0), Color::White, Piece::Rook)
        .build();

    // Default edge rule: the leftward walk from a4 wraps onto h5 and
    // keeps going through the whole lower index range.
    let wrapped = board.possible_moves(Square(4, 0));
    assert!(wrapped.contains(Square(3, 7)));

    // Conventional movement stops at the a-file edge.
    let bounded = board.possible_moves_with(Square(4, 0), Ruleset::conventional());
    assert!(!bounded.contains(Square(3, 7)));
    assert_eq!(bounded.len(), 14);
}

#[test]
fn matching_kind_restricts_captures_to_same_kind() {
    let board = BoardBuilder::new()
        .piece(Square(4, 0), Color::White, Piece::Rook)
        .piece(Square(4, 3), Color::Black, Piece::Knight)
        .build();

    let default_targets = board.possible_moves(Square(4, 0));
    assert!(
        !default_targets.contains(Square(4, 3)),
        "a rook is never flagged as able to capture a knight by default"
    );

    let any_enemy = Ruleset {
        capture: CaptureRule::AnyEnemy,
        edges: EdgeRule::IndexRange,
    };
    let corrected = board.possible_moves_with(Square(4, 0), any_enemy);
    assert!(corrected.contains(Square(4, 3)));
}

#[test]
fn blockers_stop_walks_under_both_capture_rules() {
    let board = BoardBuilder::new()
        .piece(Square(4, 0), Color::White, Piece::Rook)
        .piece(Square(4, 3), Color::Black, Piece::Knight)
        .build();

    // Whether or not the knight is capturable, nothing beyond it on the
    // rightward walk is a candidate.
    for rules in [Ruleset::default(), Ruleset::conventional()] {
        let targets = board.possible_moves_with(Square(4, 0), rules);
        assert!(targets.contains(Square(4, 1)));
        assert!(targets.contains(Square(4, 2)));
        assert!(!targets.contains(Square(4, 4)));
    }
}

#[test]
fn rule_axes_combine_independently() {
    // Pawn on the a-file with a wrapped-diagonal defender: only the
    // index-range edge rule sees it, under either capture rule.
    let board = BoardBuilder::new()
        .piece(Square(4, 0), Color::White, Piece::Pawn)
        .piece(Square(2, 7), Color::Black, Piece::Bishop)
        .build();

    let wrap_any = Ruleset {
        capture: CaptureRule::AnyEnemy,
        edges: EdgeRule::IndexRange,
    };
    assert!(board
        .possible_moves_with(Square(4, 0), wrap_any)
        .contains(Square(2, 7)));

    let wrap_matching = Ruleset::default();
    assert!(!board
        .possible_moves_with(Square(4, 0), wrap_matching)
        .contains(Square(2, 7)));

    let bounded_any = Ruleset::conventional();
    assert!(!board
        .possible_moves_with(Square(4, 0), bounded_any)
        .contains(Square(2, 7)));
}

#[test]
fn conventional_preset_selects_both_corrections() {
    let conventional = Ruleset::conventional();
    assert_eq!(conventional.capture, CaptureRule::AnyEnemy);
    assert_eq!(conventional.edges, EdgeRule::RankFile);

    let default = Ruleset::default();
    assert_eq!(default.capture, CaptureRule::MatchingKind);
    assert_eq!(default.edges, EdgeRule::IndexRange);
}

#[test]
fn conventional_rules_reproduce_textbook_starting_moves() {
    let board = Board::new();
    let rules = Ruleset::conventional();

    // Each starting knight has exactly two moves; every other back-rank
    // piece has none.
    assert_eq!(board.possible_moves_with(Square(7, 1), rules).len(), 2);
    assert_eq!(board.possible_moves_with(Square(7, 6), rules).len(), 2);
    assert_eq!(board.possible_moves_with(Square(7, 0), rules).len(), 0);
    assert_eq!(board.possible_moves_with(Square(7, 3), rules).len(), 0);
    assert_eq!(board.possible_moves_with(Square(7, 4), rules).len(), 0);

    // Every pawn has the single and double step.
    for file in 0..8 {
        assert_eq!(board.possible_moves_with(Square(6, file), rules).len(), 2);
        assert_eq!(board.possible_moves_with(Square(1, file), rules).len(), 2);
    }
}
