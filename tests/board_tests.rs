//! Board tests - geometry transforms and move-availability queries

use tui_2048::core::{slide, Board};
use tui_2048::types::Direction;

fn board(rows: &[[u32; 4]]) -> Board {
    Board::from_rows(rows).unwrap()
}

#[test]
fn test_board_new_empty() {
    let b = Board::new(5);
    assert_eq!(b.size(), 5);
    assert_eq!(b.cells().len(), 25);
    assert_eq!(b.empty_count(), 25);
    assert_eq!(b.empty_cells().len(), 25);
    assert!(b.can_move());
}

#[test]
fn test_board_get_out_of_bounds() {
    let b = Board::new(4);
    assert_eq!(b.get(4, 0), None);
    assert_eq!(b.get(0, 4), None);
    assert_eq!(b.row(4), None);
}

#[test]
fn test_board_set_and_get() {
    let mut b = Board::new(4);
    assert!(b.set(1, 2, 64));
    assert_eq!(b.get(1, 2), Some(64));
    assert!(b.set(1, 2, 0));
    assert_eq!(b.get(1, 2), Some(0));
    assert!(!b.set(4, 4, 2));
}

#[test]
fn test_rows_round_trip() {
    let rows: Vec<Vec<u32>> = vec![vec![2, 0, 4], vec![0, 0, 0], vec![8, 16, 32]];
    let b = Board::from_rows(&rows).unwrap();
    assert_eq!(b.to_rows(), rows);
    assert_eq!(b.rows().count(), 3);
}

#[test]
fn test_empty_cells_after_filling() {
    let mut b = Board::new(2);
    b.set(0, 0, 2);
    b.set(1, 1, 4);
    assert_eq!(b.empty_cells(), vec![(0, 1), (1, 0)]);
}

#[test]
fn test_can_move_requires_space_or_pair() {
    let stuck = board(&[[2, 4, 8, 16], [16, 8, 4, 2], [2, 4, 8, 16], [16, 8, 4, 2]]);
    assert!(!stuck.can_move());

    let mut with_gap = stuck.clone();
    with_gap.set(3, 3, 0);
    assert!(with_gap.can_move());

    let mut with_pair = stuck.clone();
    with_pair.set(0, 1, 2);
    assert!(with_pair.can_move());
}

#[test]
fn test_can_move_agrees_with_slides() {
    let boards = [
        board(&[[2, 4, 8, 16], [16, 8, 4, 2], [2, 4, 8, 16], [16, 8, 4, 2]]),
        board(&[[2, 4, 8, 16], [16, 8, 4, 2], [2, 4, 8, 16], [16, 8, 4, 16]]),
        board(&[[2, 4, 8, 16], [16, 8, 4, 2], [2, 4, 8, 16], [16, 8, 2, 2]]),
        board(&[[0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 2]]),
    ];
    for b in &boards {
        let any_effective = Direction::ALL.iter().any(|&d| slide(b, d).changed);
        assert_eq!(b.can_move(), any_effective, "board:\n{}", b);
    }
}

#[test]
fn test_transpose_then_mirror_is_rotation() {
    let b = board(&[
        [2, 4, 8, 16],
        [32, 64, 128, 256],
        [512, 1024, 2048, 4096],
        [8192, 16384, 32768, 65536],
    ]);
    // Clockwise quarter turn.
    let rotated = b.transpose().mirror();
    assert_eq!(rotated.row(0), Some(&[8192, 512, 32, 2][..]));
    assert_eq!(rotated.row(3), Some(&[65536, 4096, 256, 16][..]));
}

#[test]
fn test_clear() {
    let mut b = board(&[[2, 2, 2, 2], [0, 0, 0, 0], [0, 0, 0, 0], [4, 4, 4, 4]]);
    b.clear();
    assert_eq!(b, Board::new(4));
}
