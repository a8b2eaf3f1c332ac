//! Tests for the tic-tac-toe engine.

use parlor_games::tictactoe::{Game, GameStatus, Mark, MoveError, is_winner};
use parlor_games::{CoordinateError, Dimensions, Position, pick_move};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn play(game: &mut Game, moves: &[(usize, usize)]) -> GameStatus {
    let mut status = game.status();
    for &(row, col) in moves {
        status = game.place(Position::new(row, col)).expect("Valid move");
    }
    status
}

#[test]
fn test_top_row_win() {
    let mut game = Game::new(3, Mark::X);
    let status = play(&mut game, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);

    assert_eq!(status, GameStatus::Won(Mark::X));
    assert_eq!(game.history().len(), 5);
}

#[test]
fn test_turns_alternate() {
    let mut game = Game::new(3, Mark::O);
    assert_eq!(game.to_move(), Mark::O);
    game.place(Position::new(1, 1)).expect("Valid move");
    assert_eq!(game.to_move(), Mark::X);
    game.place(Position::new(0, 0)).expect("Valid move");
    assert_eq!(game.to_move(), Mark::O);
}

#[test]
fn test_tie_detection() {
    let mut game = Game::new(3, Mark::X);
    // X O X / X O O / O X X
    let status = play(
        &mut game,
        &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
    );

    assert_eq!(status, GameStatus::Tie);
    assert!(game.board().moves().is_empty());
}

#[test]
fn test_win_on_last_square_is_not_a_tie() {
    let mut game = Game::new(3, Mark::X);
    // X O X / O X O / O X X, last move X at (2,2) completes the diagonal
    let status = play(
        &mut game,
        &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2), (2, 1), (2, 0), (2, 2)],
    );

    assert!(game.board().moves().is_empty());
    assert_eq!(status, GameStatus::Won(Mark::X));
}

#[test]
fn test_out_of_range_rejected() {
    let game = Game::new(3, Mark::X);
    assert_eq!(
        game.validate("5,5"),
        Err(MoveError::Coordinate(CoordinateError::OutOfRange(Dimensions::square(3))))
    );
    assert_eq!(game.validate("3,3"), Ok(Position::new(2, 2)));
}

#[test]
fn test_malformed_input_rejected() {
    let game = Game::new(3, Mark::X);
    assert_eq!(
        game.validate("two,three"),
        Err(MoveError::Coordinate(CoordinateError::InvalidFormat))
    );
}

#[test]
fn test_occupied_square_rejected() {
    let mut game = Game::new(3, Mark::X);
    game.place(Position::new(1, 1)).expect("Valid move");

    assert_eq!(
        game.validate("2,2"),
        Err(MoveError::SquareOccupied(Position::new(1, 1)))
    );
    assert_eq!(
        game.place(Position::new(1, 1)),
        Err(MoveError::SquareOccupied(Position::new(1, 1)))
    );
    assert_eq!(game.to_move(), Mark::O);
}

#[test]
fn test_no_moves_after_game_over() {
    let mut game = Game::new(3, Mark::X);
    play(&mut game, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);

    assert_eq!(game.place(Position::new(2, 0)), Err(MoveError::GameOver));
    assert_eq!(game.validate("3,1"), Err(MoveError::GameOver));
}

#[test]
fn test_random_games_keep_invariants() {
    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let size = 3 + (seed as usize % 3);
        let mut game = Game::new(size, Mark::X);

        while game.status() == GameStatus::InProgress {
            let mark = game.to_move();
            let pos = pick_move(game.board().moves(), &mut rng).expect("Moves left while in progress");
            let status = game.place(pos).expect("Random move is legal");

            assert!(!game.board().moves().contains(pos), "seed {seed}");
            assert_eq!(
                matches!(status, GameStatus::Won(m) if m == mark),
                is_winner(game.board(), mark),
                "seed {seed}"
            );
            assert_eq!(
                status == GameStatus::Tie,
                game.board().moves().is_empty() && !is_winner(game.board(), mark),
                "seed {seed}"
            );
        }
    }
}
