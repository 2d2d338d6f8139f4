//! Property tests for the transition functions.

use proptest::prelude::*;
use tictactoe_engine::{
    Board, GameState, Player, Position, Square, apply_move, find_winning_line, is_tile_taken,
    restart,
};

fn square() -> impl Strategy<Value = Square> {
    prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Player::X)),
        Just(Square::Occupied(Player::O)),
    ]
}

fn board() -> impl Strategy<Value = Board> {
    prop::array::uniform9(square()).prop_map(Board::from_squares)
}

fn player() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::X), Just(Player::O)]
}

/// States reachable from the initial state by playing arbitrary indices.
fn reachable_state() -> impl Strategy<Value = GameState> {
    prop::collection::vec(0usize..9, 0..12).prop_map(|moves| {
        moves
            .into_iter()
            .filter_map(Position::from_index)
            .fold(restart(), apply_move)
    })
}

/// Independent enumeration of every row, column and diagonal.
fn has_complete_line(board: &Board, player: Player) -> bool {
    let held = |r: usize, c: usize| board.get(r * 3 + c) == Some(Square::Occupied(player));
    let rows = (0..3).any(|r| (0..3).all(|c| held(r, c)));
    let cols = (0..3).any(|c| (0..3).all(|r| held(r, c)));
    let diag = (0..3).all(|i| held(i, i));
    let anti = (0..3).all(|i| held(i, 2 - i));
    rows || cols || diag || anti
}

proptest! {
    #[test]
    fn winning_line_iff_complete_line(board in board(), player in player()) {
        let found = find_winning_line(&board, player);
        prop_assert_eq!(found.is_some(), has_complete_line(&board, player));
        if let Some(line) = found {
            for pos in line.positions() {
                prop_assert_eq!(board.square(pos), Square::Occupied(player));
            }
        }
    }

    #[test]
    fn valid_move_switches_player_and_adds_one_mark(
        state in reachable_state(),
        target in 0usize..9,
    ) {
        prop_assume!(state.status().is_playing());
        prop_assume!(!is_tile_taken(state.board(), target));

        let pos = Position::from_index(target).unwrap();
        let next = apply_move(state, pos);

        prop_assert_eq!(next.current_player(), state.current_player().opponent());
        prop_assert_eq!(next.board().occupied_count(), state.board().occupied_count() + 1);
        prop_assert_eq!(next.board().square(pos), Square::Occupied(state.current_player()));
    }

    #[test]
    fn finished_game_ignores_every_move(state in reachable_state(), target in 0usize..9) {
        prop_assume!(!state.status().is_playing());
        let pos = Position::from_index(target).unwrap();
        prop_assert_eq!(apply_move(state, pos), state);
    }

    #[test]
    fn occupied_square_ignores_move(state in reachable_state(), target in 0usize..9) {
        prop_assume!(is_tile_taken(state.board(), target));
        let pos = Position::from_index(target).unwrap();
        prop_assert_eq!(apply_move(state, pos), state);
    }

    #[test]
    fn restart_is_canonical(_state in reachable_state()) {
        prop_assert_eq!(restart(), GameState::new());
        prop_assert_eq!(restart(), restart());
    }
}
