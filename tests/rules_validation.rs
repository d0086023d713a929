//! Test suite for the Hexapawn rules
//! Validates move generation invariants and the win-detection order

use hexapawn::{
    Error,
    rules::{
        Board, Cell, Game, Move, Player, WinReason, check_for_winner,
        check_for_winner_with_reason, legal_moves, legal_moves_for_piece,
    },
};

mod common;

use common::{board, reachable_positions};

mod move_generation {
    use super::*;

    #[test]
    fn moves_never_create_pawns() {
        let positions = reachable_positions();
        assert!(positions.len() > 20, "walk should cover the game tree");

        for (position, mover) in positions {
            for mv in legal_moves(&position, mover) {
                let next = position.apply(mv);
                assert_eq!(
                    next.pawn_count(mover),
                    position.pawn_count(mover),
                    "mover lost a pawn playing {mv} on\n{position}"
                );
                let before = position.pawn_count(mover.opponent());
                let after = next.pawn_count(mover.opponent());
                assert!(
                    after == before || after + 1 == before,
                    "opponent count went {before} -> {after} after {mv} on\n{position}"
                );
                assert!(next.occupied_count() <= position.occupied_count());
            }
        }
    }

    #[test]
    fn diagonals_capture_and_forward_steps_need_empty_squares() {
        for (position, mover) in reachable_positions() {
            for mv in legal_moves(&position, mover) {
                let target = position.get(mv.to_row, mv.to_col);
                if mv.is_diagonal() {
                    assert_eq!(
                        target,
                        mover.opponent().to_cell(),
                        "diagonal {mv} does not capture on\n{position}"
                    );
                } else {
                    assert_eq!(target, Cell::Empty, "forward {mv} is blocked on\n{position}");
                }
                assert_eq!(
                    mv.to_row as isize - mv.from_row as isize,
                    mover.direction(),
                    "{mv} does not advance exactly one row"
                );
            }
        }
    }

    #[test]
    fn diagonal_onto_empty_square_is_never_offered() {
        let position = board("...|.L.|...");
        let moves = legal_moves_for_piece(&position, 1, 1, Player::Light);
        assert_eq!(moves, vec![Move::new(1, 1, 0, 1)]);
    }

    #[test]
    fn only_the_movers_pawns_move() {
        let position = Board::new();
        assert!(legal_moves_for_piece(&position, 0, 0, Player::Light).is_empty());
        assert!(legal_moves_for_piece(&position, 1, 1, Player::Dark).is_empty());
    }

    #[test]
    fn initial_position_has_three_moves_each() {
        let position = Board::new();
        assert_eq!(
            legal_moves(&position, Player::Dark),
            vec![
                Move::new(0, 0, 1, 0),
                Move::new(0, 1, 1, 1),
                Move::new(0, 2, 1, 2),
            ]
        );
        assert_eq!(legal_moves(&position, Player::Light).len(), 3);
    }

    #[test]
    fn centre_advance_gives_dark_four_replies() {
        let position = Board::new().apply(Move::new(2, 1, 1, 1));
        assert_eq!(
            legal_moves(&position, Player::Dark),
            vec![
                Move::new(0, 0, 1, 0),
                Move::new(0, 0, 1, 1),
                Move::new(0, 2, 1, 2),
                Move::new(0, 2, 1, 1),
            ]
        );
    }
}

mod move_execution {
    use super::*;

    #[test]
    fn apply_returns_new_board_and_keeps_original() {
        let original = Board::new();
        let next = original.apply(Move::new(2, 1, 1, 1));

        assert_eq!(original, Board::new());
        assert_eq!(next.get(2, 1), Cell::Empty);
        assert_eq!(next.get(1, 1), Cell::Light);
    }

    #[test]
    fn capture_overwrites_target() {
        let position = board("DDD|.L.|L.L");
        let next = position.apply(Move::new(0, 0, 1, 1));
        assert_eq!(next.get(1, 1), Cell::Dark);
        assert_eq!(next.pawn_count(Player::Light), 2);
    }

    #[test]
    fn try_apply_rejects_off_board_moves() {
        let err = Board::new().try_apply(Move::new(0, 0, 3, 0)).unwrap_err();
        assert!(matches!(err, Error::OutOfBounds { row: 3, col: 0 }));
    }

    #[test]
    #[should_panic(expected = "off the board")]
    fn apply_panics_off_board() {
        let _ = Board::new().apply(Move::new(2, 2, 2, 3));
    }
}

mod win_detection {
    use super::*;

    #[test]
    fn promotion_outranks_capture() {
        // Dark has promoted and Light has no pawns left
        let position = board("...|...|.D.");
        let victory = check_for_winner_with_reason(&position, Some(Player::Light)).unwrap();
        assert_eq!(victory.winner, Player::Dark);
        assert_eq!(victory.reason, WinReason::Promotion);

        let position = board(".L.|...|...");
        let victory = check_for_winner_with_reason(&position, None).unwrap();
        assert_eq!(victory.winner, Player::Light);
        assert_eq!(victory.reason, WinReason::Promotion);
    }

    #[test]
    fn dark_promotion_is_checked_first() {
        let position = board("L..|...|..D");
        assert_eq!(check_for_winner(&position, None), Some(Player::Dark));
    }

    #[test]
    fn capture_wins_when_no_pawns_remain() {
        let position = board("D..|...|...");
        let victory = check_for_winner_with_reason(&position, Some(Player::Light)).unwrap();
        assert_eq!(victory.winner, Player::Dark);
        assert_eq!(victory.reason, WinReason::Capture);
    }

    #[test]
    fn blocked_pawn_loses_on_its_turn() {
        let position = board("...|.D.|.L.");
        assert!(legal_moves(&position, Player::Dark).is_empty());

        let victory = check_for_winner_with_reason(&position, Some(Player::Dark)).unwrap();
        assert_eq!(victory.winner, Player::Light);
        assert_eq!(victory.reason, WinReason::NoLegalMoves);
    }

    #[test]
    fn no_legal_moves_needs_a_mover() {
        let position = board("...|.D.|.L.");
        assert_eq!(check_for_winner(&position, None), None);
    }

    #[test]
    fn opening_position_is_undecided() {
        for mover in Player::ALL {
            assert_eq!(check_for_winner(&Board::new(), Some(mover)), None);
        }
    }
}

mod game_driver {
    use super::*;

    #[test]
    fn every_reachable_game_terminates() {
        // Longest Hexapawn game is well under a dozen plies
        for first in Player::ALL {
            let mut game = Game::new(first);
            while !game.is_over() {
                let mv = game.legal_moves()[0];
                game.play(mv).expect("generated move must be accepted");
                assert!(game.ply() <= 12, "game ran too long");
            }
        }
    }

    #[test]
    fn history_is_split_by_player() {
        let mut game = Game::new(Player::Light);
        game.play(Move::new(2, 1, 1, 1)).unwrap();
        game.play(Move::new(0, 0, 1, 0)).unwrap();
        game.play(Move::new(2, 0, 1, 0)).unwrap_err();

        let dark = game.history_for(Player::Dark);
        assert_eq!(dark.len(), 1);
        assert_eq!(dark[0].board, board("DDD|.L.|L.L"));
        assert_eq!(dark[0].mv, Move::new(0, 0, 1, 0));
        assert_eq!(game.history_for(Player::Light).len(), 1);
        assert_eq!(game.history().len(), 2);
        assert_eq!(*game.initial(), Board::new());
        assert_eq!(game.first_player(), Player::Light);
        assert_eq!(game.to_move(), Player::Light);
    }

    #[test]
    fn finished_game_rejects_moves() {
        let mut game = Game::from_position(board("...|.D.|.L."), Player::Dark);
        assert!(game.is_over());
        assert!(matches!(
            game.play(Move::new(1, 1, 2, 1)),
            Err(Error::GameOver)
        ));
    }
}
