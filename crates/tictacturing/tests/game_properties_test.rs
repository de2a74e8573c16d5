//! Properties over every reachable game and over arbitrary input strings.

use proptest::prelude::*;
use tictacturing::{
    GameState, HistoryErrorKind, MoveError, Outcome, Player, Square, grid_to_square,
    square_to_grid,
};

/// Visits every state reachable from an empty board.
fn walk(game: &GameState, visit: &mut impl FnMut(&GameState)) {
    visit(game);
    for square in game.valid_moves() {
        let next = game.apply_move(square).expect("valid move must apply");
        walk(&next, visit);
    }
}

#[test]
fn test_every_reachable_state() {
    let mut states = 0usize;
    let mut finished = [0usize; 3];

    walk(&GameState::new(), &mut |game| {
        states += 1;
        let history = game.serialize();

        // Round trip through the persisted form.
        let reloaded = GameState::parse(&history).expect("reachable history parses");
        assert_eq!(&reloaded, game);
        assert_eq!(reloaded.serialize(), history);
        assert!(game.check_invariants().is_ok(), "{history}");

        match game.outcome() {
            Outcome::InProgress => {
                let expected = if history.len() % 2 == 0 { Player::X } else { Player::O };
                assert_eq!(game.current_player(), Some(expected), "{history}");
                assert_eq!(game.valid_moves().len(), 9 - history.len());
                assert_eq!(game.outcome().winner(), None);
                assert!(!game.outcome().is_draw());

                // Every played square is refused without touching the state.
                for &square in game.history() {
                    let mut copy = game.clone();
                    assert_eq!(copy.make_move(square), Err(MoveError::SquareOccupied(square)));
                    assert_eq!(&copy, game);
                }
            }
            outcome => {
                let last_mover = Player::for_turn(history.len()).opponent();
                finished[match (outcome.winner(), outcome.is_draw()) {
                    (Some(winner), false) => {
                        assert_eq!(winner, last_mover, "{history}");
                        if winner == Player::X { 0 } else { 1 }
                    }
                    (None, true) => {
                        assert_eq!(history.len(), 9);
                        2
                    }
                    other => panic!("terminal outcome {outcome:?} classified as {other:?}"),
                }] += 1;
                assert_eq!(game.current_player(), None);
                assert!(game.valid_moves().is_empty());
                for square in Square::ALL {
                    assert_eq!(
                        game.apply_move(square),
                        Err(MoveError::GameAlreadyFinished(outcome))
                    );
                }
                // Extending a finished history is rejected during replay too.
                for square in Square::ALL.into_iter().filter(|s| game.board().is_empty(*s)) {
                    let err = GameState::parse(&format!("{history}{square}")).unwrap_err();
                    assert_eq!(err.kind, HistoryErrorKind::MoveAfterGameEnd);
                    assert_eq!(err.position, history.len());
                }
            }
        }
    });

    // Well-known totals for the full tic-tac-toe game tree.
    assert_eq!(states, 549_946);
    assert_eq!(finished, [131_184, 77_904, 46_080]);
}

#[test]
fn test_grid_square_bijection() {
    for square in Square::ALL {
        let label = square.to_string();
        let grid = square_to_grid(&label).unwrap();
        assert_eq!(grid_to_square(&grid), Ok(square));
    }
    for col in ['A', 'B', 'C'] {
        for row in ['1', '2', '3'] {
            let grid: String = [col, row].into_iter().collect();
            let square = grid_to_square(&grid).unwrap();
            assert_eq!(square_to_grid(&square.to_string()), Ok(grid));
        }
    }
}

proptest! {
    #[test]
    fn prop_accepted_histories_round_trip(text in "[A-I]{0,12}") {
        match GameState::parse(&text) {
            Ok(game) => {
                prop_assert_eq!(game.serialize(), text.clone());
                prop_assert_eq!(GameState::parse(&game.serialize()), Ok(game));
            }
            Err(err) => {
                prop_assert!(err.position < text.chars().count());
                prop_assert_eq!(text.chars().nth(err.position), Some(err.character));
                // The prefix before the failure is itself a valid history.
                let prefix: String = text.chars().take(err.position).collect();
                prop_assert!(GameState::parse(&prefix).is_ok());
            }
        }
    }

    #[test]
    fn prop_parse_never_panics(text in "\\PC{0,16}") {
        let _ = GameState::parse(&text);
    }

    #[test]
    fn prop_parse_is_deterministic(text in "[A-IZa]{0,10}") {
        prop_assert_eq!(GameState::parse(&text), GameState::parse(&text));
    }

    #[test]
    fn prop_bad_grid_addresses_rejected(addr in "\\PC{0,4}") {
        let valid = addr.len() == 2
            && matches!(addr.as_bytes()[0], b'A'..=b'C')
            && matches!(addr.as_bytes()[1], b'1'..=b'3');
        prop_assert_eq!(grid_to_square(&addr).is_ok(), valid);
    }
}
