use super::*;
use crate::error::BoardError;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_player_id_mapping() {
    assert_eq!(Stone::from_player_id(1), Some(Stone::Black));
    assert_eq!(Stone::from_player_id(2), Some(Stone::White));
    assert_eq!(Stone::from_player_id(0), None);
    assert_eq!(Stone::from_player_id(3), None);
    assert_eq!(Stone::White.player_id(), 2);
    assert_eq!(Stone::Empty.player_id(), 0);
}

#[test]
fn test_pos_offset() {
    let pos = Pos::new(2, 2);
    assert_eq!(pos.offset(1, 0, 2, 5), Some(Pos::new(4, 2)));
    assert_eq!(pos.offset(1, -1, 2, 5), Some(Pos::new(4, 0)));
    assert_eq!(pos.offset(1, 0, 3, 5), None);
    assert_eq!(pos.offset(-1, -1, 3, 5), None);
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_board_index_roundtrip_corners() {
    let board = Board::new(7);
    assert_eq!(board.index(Pos::new(0, 0)), 0);
    assert_eq!(board.index(Pos::new(0, 6)), 6);
    assert_eq!(board.index(Pos::new(6, 0)), 42);
    assert_eq!(board.index(Pos::new(6, 6)), 48);
    assert_eq!(board.pos_of(48), Pos::new(6, 6));
}

#[test]
fn test_place_overwrites_other_color() {
    let mut board = Board::new(5);
    let pos = Pos::new(1, 1);
    board.place_stone(pos, Stone::Black);
    board.place_stone(pos, Stone::White);

    assert_eq!(board.get(pos), Stone::White);
    assert_eq!(board.stone_count(), 1);
    assert_eq!(board.layer(0, pos) + board.layer(1, pos) + board.layer(2, pos), 1);
}

#[test]
fn test_try_place_rejects_occupied_and_out_of_bounds() {
    let mut board = Board::new(5);
    board.try_place(Pos::new(0, 0), Stone::Black).unwrap();

    assert_eq!(
        board.try_place(Pos::new(0, 0), Stone::White),
        Err(BoardError::Occupied { row: 0, col: 0 })
    );
    assert_eq!(
        board.try_place(Pos::new(5, 0), Stone::White),
        Err(BoardError::OutOfBounds { row: 5, col: 0, size: 5 })
    );
}

#[test]
fn test_provisional_stone_reverts_on_drop() {
    let mut board = Board::new(5);
    board.place_stone(Pos::new(2, 2), Stone::White);
    let before = board.clone();

    {
        let guard = board.provisional(Pos::new(2, 3), Stone::Black).unwrap();
        assert_eq!(guard.get(Pos::new(2, 3)), Stone::Black);
        assert_eq!(guard.stone_count(), 2);
    }

    assert_eq!(board, before);
}

#[test]
fn test_provisional_stone_refuses_occupied_cell() {
    let mut board = Board::new(5);
    board.place_stone(Pos::new(2, 2), Stone::White);

    assert!(board.provisional(Pos::new(2, 2), Stone::Black).is_none());
    assert!(board.provisional(Pos::new(1, 1), Stone::Empty).is_none());
    assert!(board.provisional(Pos::new(9, 9), Stone::Black).is_none());
    assert_eq!(board.get(Pos::new(2, 2)), Stone::White);
}

#[test]
fn test_layers_roundtrip() {
    let mut board = Board::new(4);
    board.place_stone(Pos::new(0, 1), Stone::Black);
    board.place_stone(Pos::new(3, 2), Stone::White);

    let layers = board.to_layers();
    assert_eq!(layers[0][0][0], 1);
    assert_eq!(layers[1][0][1], 1);
    assert_eq!(layers[2][3][2], 1);
    assert_eq!(layers[0][3][2], 0);

    let restored = Board::from_layers(&layers).unwrap();
    assert_eq!(restored, board);
}

#[test]
fn test_from_layers_rejects_overlap() {
    let mut layers = Board::new(3).to_layers().to_vec();
    layers[1][1][1] = 1; // also still empty

    assert_eq!(
        Board::from_layers(&layers),
        Err(BoardError::CellInvariant { row: 1, col: 1, flags: [1, 1, 0] })
    );
}

#[test]
fn test_from_layers_rejects_uncovered_cell() {
    let mut layers = Board::new(3).to_layers().to_vec();
    layers[0][2][0] = 0;

    assert!(matches!(
        Board::from_layers(&layers),
        Err(BoardError::CellInvariant { row: 2, col: 0, .. })
    ));
}

#[test]
fn test_from_layers_rejects_bad_shape() {
    let mut layers = Board::new(3).to_layers().to_vec();
    layers[2].pop();
    assert_eq!(
        Board::from_layers(&layers),
        Err(BoardError::LayerShape { layer: 2, size: 3 })
    );

    assert_eq!(
        Board::from_layers(&layers[..2]),
        Err(BoardError::LayerCount(2))
    );
}

#[test]
fn test_stones_of_iterates_row_major() {
    let mut board = Board::new(9);
    board.place_stone(Pos::new(8, 8), Stone::Black);
    board.place_stone(Pos::new(0, 5), Stone::Black);
    board.place_stone(Pos::new(4, 4), Stone::White);

    let black: Vec<Pos> = board.stones_of(Stone::Black).collect();
    assert_eq!(black, vec![Pos::new(0, 5), Pos::new(8, 8)]);
    assert_eq!(board.stones_of(Stone::Empty).count(), 0);
}

#[test]
fn test_bitboard_spans_multiple_words() {
    let mut bb = Bitboard::new(19 * 19);
    bb.set(0);
    bb.set(64);
    bb.set(360);
    assert_eq!(bb.count(), 3);
    assert_eq!(bb.iter_ones().collect::<Vec<_>>(), vec![0, 64, 360]);
    bb.clear(64);
    assert!(!bb.get(64));
    assert_eq!(bb.count(), 2);
}

#[test]
fn test_is_full() {
    let mut board = Board::new(2);
    assert!(!board.is_full());
    for pos in board.positions().collect::<Vec<_>>() {
        board.place_stone(pos, Stone::Black);
    }
    assert!(board.is_full());
}

#[test]
fn test_contains_rejects_wrapping_coordinates() {
    let mut board = Board::new(5);
    board.place_stone(Pos::new(1, 2), Stone::Black);
    // (0, 7) would alias (1, 2) in row-major order
    assert!(!board.contains(Pos::new(0, 7)));
    assert_eq!(
        board.try_place(Pos::new(0, 7), Stone::White),
        Err(BoardError::OutOfBounds { row: 0, col: 7, size: 5 })
    );
    assert_eq!(board.get(Pos::new(1, 2)), Stone::Black);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "outside the 5x5 board")]
fn test_get_off_board_panics_in_debug() {
    let mut board = Board::new(5);
    board.place_stone(Pos::new(1, 2), Stone::Black);
    let _ = board.get(Pos::new(0, 7));
}
