//! Board structure with per-player bitboards

use std::ops::Deref;

use super::bitboard::Bitboard;
use super::{Pos, Stone, MAX_BOARD_SIZE};
use crate::error::BoardError;

/// Layer index of the three-layer occupancy view: 0 = empty, 1 = player 1,
/// 2 = player 2.
pub type Layer = usize;

/// Square game board.
///
/// A cell is empty iff neither player's bitboard has it set. `place_stone`
/// clears the other color first, so a cell never belongs to both players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Black stones bitboard (player 1)
    pub black: Bitboard,
    /// White stones bitboard (player 2)
    pub white: Bitboard,
}

impl Board {
    /// Create an empty `size × size` board.
    ///
    /// # Panics
    /// If `size` is 0 or larger than [`MAX_BOARD_SIZE`]. Validated configs
    /// never hit this; see [`crate::config::AgentConfig::validate`].
    pub fn new(size: usize) -> Self {
        assert!(
            (1..=MAX_BOARD_SIZE).contains(&size),
            "board size {size} outside 1..={MAX_BOARD_SIZE}"
        );
        let cells = size * size;
        Self {
            size,
            black: Bitboard::new(cells),
            white: Bitboard::new(cells),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major cell index. `pos` must lie on the board.
    #[inline]
    pub fn index(&self, pos: Pos) -> usize {
        debug_assert!(self.contains(pos), "{pos:?} is outside the {size}x{size} board", size = self.size);
        pos.row as usize * self.size + pos.col as usize
    }

    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub fn pos_of(&self, idx: usize) -> Pos {
        Pos::new((idx / self.size) as u8, (idx % self.size) as u8)
    }

    /// Check whether a position lies on this board
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        (pos.row as usize) < self.size && (pos.col as usize) < self.size
    }

    /// Iterate over every position in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.size * self.size).map(move |idx| self.pos_of(idx))
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        let idx = self.index(pos);
        if self.black.get(idx) {
            Stone::Black
        } else if self.white.get(idx) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        let idx = self.index(pos);
        !self.black.get(idx) && !self.white.get(idx)
    }

    /// Place a stone, overwriting whatever occupied the cell.
    /// Placing `Stone::Empty` clears the cell.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        let idx = self.index(pos);
        self.black.clear(idx);
        self.white.clear(idx);
        match stone {
            Stone::Black => self.black.set(idx),
            Stone::White => self.white.set(idx),
            Stone::Empty => {}
        }
    }

    /// Place a stone on an empty in-bounds cell.
    pub fn try_place(&mut self, pos: Pos, stone: Stone) -> Result<(), BoardError> {
        if !self.contains(pos) {
            return Err(BoardError::OutOfBounds {
                row: pos.row as usize,
                col: pos.col as usize,
                size: self.size,
            });
        }
        if !self.is_empty(pos) {
            return Err(BoardError::Occupied {
                row: pos.row as usize,
                col: pos.col as usize,
            });
        }
        self.place_stone(pos, stone);
        Ok(())
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        let idx = self.index(pos);
        self.black.clear(idx);
        self.white.clear(idx);
    }

    /// Place `stone` at an empty `pos` for the lifetime of the returned guard.
    ///
    /// The stone is removed when the guard drops, leaving the board exactly as
    /// it was. Returns `None` if the cell is occupied, off the board, or
    /// `stone` is `Empty`.
    pub fn provisional(&mut self, pos: Pos, stone: Stone) -> Option<ProvisionalStone<'_>> {
        if stone == Stone::Empty || !self.contains(pos) || !self.is_empty(pos) {
            return None;
        }
        self.place_stone(pos, stone);
        Some(ProvisionalStone { board: self, pos })
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::Black => Some(&self.black),
            Stone::White => Some(&self.white),
            Stone::Empty => None,
        }
    }

    /// Iterate over the positions of one color's stones in row-major order
    pub fn stones_of(&self, stone: Stone) -> impl Iterator<Item = Pos> + '_ {
        self.stones(stone)
            .into_iter()
            .flat_map(|bb| bb.iter_ones())
            .map(move |idx| self.pos_of(idx))
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Check if every cell is occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == self.size * self.size
    }

    /// Occupancy flag (0/1) of `layer` at `pos` in the three-layer view
    pub fn layer(&self, layer: Layer, pos: Pos) -> u8 {
        u8::from(usize::from(self.get(pos).player_id()) == layer)
    }

    /// Export as `[layer][row][col]` flags; exactly one layer is 1 per cell.
    pub fn to_layers(&self) -> [Vec<Vec<u8>>; 3] {
        let mut layers: [Vec<Vec<u8>>; 3] =
            std::array::from_fn(|_| vec![vec![0u8; self.size]; self.size]);
        for pos in self.positions() {
            let layer = usize::from(self.get(pos).player_id());
            layers[layer][pos.row as usize][pos.col as usize] = 1;
        }
        layers
    }

    /// Build a board from `[layer][row][col]` occupancy flags.
    ///
    /// Every layer must be square with the same side, and every cell must be
    /// set in exactly one layer.
    pub fn from_layers(layers: &[Vec<Vec<u8>>]) -> Result<Self, BoardError> {
        if layers.len() != 3 {
            return Err(BoardError::LayerCount(layers.len()));
        }
        let size = layers[0].len();
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(BoardError::LayerShape { layer: 0, size });
        }
        for (layer, grid) in layers.iter().enumerate() {
            if grid.len() != size || grid.iter().any(|row| row.len() != size) {
                return Err(BoardError::LayerShape { layer, size });
            }
        }

        let mut board = Board::new(size);
        for pos in board.positions().collect::<Vec<_>>() {
            let (r, c) = (pos.row as usize, pos.col as usize);
            let flags = [layers[0][r][c], layers[1][r][c], layers[2][r][c]];
            let set: Vec<usize> = (0..3).filter(|&l| flags[l] == 1).collect();
            if set.len() != 1 || flags.iter().any(|&f| f > 1) {
                return Err(BoardError::CellInvariant { row: r, col: c, flags });
            }
            match set[0] {
                1 => board.place_stone(pos, Stone::Black),
                2 => board.place_stone(pos, Stone::White),
                _ => {}
            }
        }
        Ok(board)
    }
}

/// A stone placed by [`Board::provisional`], removed again on drop.
pub struct ProvisionalStone<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl Deref for ProvisionalStone<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for ProvisionalStone<'_> {
    fn drop(&mut self) {
        self.board.remove_stone(self.pos);
    }
}
