//! End-to-end board tests through the public API.

use connect_m::ai::{GreedyPolicy, Policy, RandomPolicy};
use connect_m::error::BoardError;
use connect_m::game::{Board, ConnectM, Grid, PieceColor};
use connect_m::simulation::simulate;

use PieceColor::{Red, Yellow};

/// 5x5, m = 4, drawn bottom row last:
///
/// ```text
///     Y
///    RY
///   RYR
///  YRYR
/// YRRYY
/// ```
fn sample_board() -> Board {
    let mut board = Board::new(5, 5, 4).unwrap();
    let moves = [
        (0, Yellow),
        (1, Red),
        (1, Yellow),
        (2, Red),
        (2, Red),
        (2, Red),
        (3, Yellow),
        (3, Yellow),
        (3, Yellow),
        (3, Red),
        (4, Yellow),
        (4, Red),
        (4, Red),
        (4, Yellow),
        (4, Yellow),
    ];
    for (col, color) in moves {
        board.drop_piece(col, color).unwrap();
    }
    board
}

#[test]
fn test_fresh_boards() {
    for (rows, cols, m) in [(6, 7, 4), (20, 20, 4), (4, 4, 4), (3, 9, 3)] {
        let board = Board::new(rows, cols, m).unwrap();
        let grid = board.grid();
        assert_eq!((grid.rows(), grid.cols()), (rows, cols));
        assert!(grid.is_empty());
        assert!(!board.is_done());
        assert_eq!(board.winner(), None);
        assert!((0..cols).all(|col| board.can_drop(col)));
    }
}

#[test]
fn test_sample_board_layout() {
    let board = sample_board();
    assert_eq!(board.winner(), None);
    assert!(!board.is_done());
    assert_eq!(
        board.to_string(),
        "-----\n    Y\n   RY\n  RYR\n YRYR\nYRRYY\n-----"
    );

    for col in 0..4 {
        assert!(board.can_drop(col));
    }
    assert!(!board.can_drop(4));
}

#[test]
fn test_sample_board_would_win() {
    let board = sample_board();

    for col in [0, 1, 3, 4] {
        assert!(!board.would_win(col, Red));
        assert!(!board.would_win(col, Yellow));
    }
    assert!(board.would_win(2, Red));
    assert!(!board.would_win(2, Yellow));
}

#[test]
fn test_sample_board_red_wins_in_column_two() {
    let mut board = sample_board();
    let before = board.grid();
    for _ in 0..10 {
        board.would_win(2, Red);
    }
    assert_eq!(board.grid(), before);
    assert_eq!(board.winner(), None);

    board.drop_piece(2, Red).unwrap();
    assert_eq!(board.winner(), Some(Red));
    assert!(board.is_done());
}

#[test]
fn test_full_column_rejects_drop() {
    let mut board = sample_board();
    let before = board.grid();
    assert_eq!(board.drop_piece(4, Red), Err(BoardError::IllegalMove { col: 4 }));
    assert_eq!(board.grid(), before);
}

#[test]
fn test_full_board_without_run_is_draw() {
    // 6x5, m = 4: each column is a repeating pair pattern, shifted so no
    // row or diagonal lines up four of a kind.
    let mut board = Board::new(6, 5, 4).unwrap();
    let patterns = [
        [Red, Red, Yellow, Yellow, Red, Red],
        [Yellow, Yellow, Red, Red, Yellow, Yellow],
        [Red, Red, Yellow, Yellow, Red, Red],
        [Yellow, Yellow, Red, Red, Yellow, Yellow],
        [Red, Red, Yellow, Yellow, Red, Red],
    ];
    for (col, pattern) in patterns.iter().enumerate() {
        for &color in pattern {
            board.drop_piece(col, color).unwrap();
        }
    }

    assert!(board.is_done());
    assert_eq!(board.winner(), None);
    assert!(board.droppable_columns().is_empty());
}

#[test]
fn test_reset_restores_fresh_board() {
    let mut board = sample_board();
    board.drop_piece(2, Red).unwrap();
    assert!(board.is_done());

    board.reset();
    let fresh = Board::new(5, 5, 4).unwrap();
    assert_eq!(board.grid(), fresh.grid());
    assert_eq!(board.winner(), fresh.winner());
    assert_eq!(board.is_done(), fresh.is_done());
}

#[test]
fn test_greedy_takes_the_sample_win() {
    let board = sample_board();
    let mut red = GreedyPolicy::with_seed(Red, Yellow, 0);
    assert_eq!(red.suggest_move(&board), Some(2));

    // Yellow has no win of its own, so it blocks
    let mut yellow = GreedyPolicy::with_seed(Yellow, Red, 0);
    assert_eq!(yellow.suggest_move(&board), Some(2));
}

#[test]
fn test_shared_board_simulation() {
    let mut board = Board::new(6, 7, 4).unwrap();
    let mut yellow = GreedyPolicy::with_seed(Yellow, Red, 21);
    let mut red = RandomPolicy::with_seed(Red, Yellow, 22);

    let stats = simulate(&mut board, 100, &mut yellow, &mut red, Yellow).unwrap();
    assert_eq!(stats.games, 100);
    assert!(stats.yellow_wins > stats.red_wins);
}

/// Full scan for `m` in a row of `color` anywhere on `grid`.
fn has_run(grid: &Grid, m: usize, color: PieceColor) -> bool {
    let (rows, cols) = (grid.rows() as isize, grid.cols() as isize);
    let at = |r: isize, c: isize| {
        r >= 0 && c >= 0 && r < rows && c < cols && grid.get(r as usize, c as usize) == Some(color)
    };
    (0..rows).any(|r| {
        (0..cols).any(|c| {
            [(0, 1), (1, 0), (1, 1), (1, -1)]
                .iter()
                .any(|&(dr, dc)| (0..m as isize).all(|k| at(r + k * dr, c + k * dc)))
        })
    })
}

#[test]
fn test_would_win_matches_full_scan_over_seeded_games() {
    let shapes = [
        (6, 7, 4),
        (5, 5, 4),
        (4, 4, 4),
        (3, 9, 3),
        (7, 7, 5),
        (2, 2, 2),
        (1, 5, 1),
        (8, 5, 5),
    ];
    for (rows, cols, m) in shapes {
        for seed in 0..20 {
            let mut board = Board::new(rows, cols, m).unwrap();
            let mut yellow = RandomPolicy::with_seed(Yellow, Red, seed);
            let mut red = GreedyPolicy::with_seed(Red, Yellow, seed + 1000);
            let mut current = Yellow;

            while !board.is_done() {
                let before = board.grid();
                for col in 0..cols {
                    for color in [Red, Yellow] {
                        let predicted = board.would_win(col, color);
                        assert_eq!(board.grid(), before);

                        let mut trial = board.clone();
                        let actual = trial.drop_piece(col, color).is_ok()
                            && has_run(&trial.grid(), m, color);
                        assert_eq!(
                            predicted, actual,
                            "{rows}x{cols} m={m} seed={seed} col={col} {color:?}\n{board}"
                        );
                    }
                }

                let col = match current {
                    Yellow => yellow.suggest_move(&board),
                    Red => red.suggest_move(&board),
                }
                .unwrap();
                board.drop_piece(col, current).unwrap();
                current = current.other();
            }

            let grid = board.grid();
            let expected = [Red, Yellow].into_iter().find(|&c| has_run(&grid, m, c));
            assert_eq!(board.winner(), expected);
        }
    }
}
