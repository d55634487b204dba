//! Go game state and move execution.
//!
//! This module provides the rules engine:
//! - Stone placement with capture of enemy groups left without liberties
//! - Rejection of self-capture and of the immediate single-stone ko recapture
//! - Passing, and the end of the game after two passes in a row
//! - Area and territory scoring
//!
//! A rejected move always leaves the state exactly as it was before the call.

use std::fmt;

use crate::board::{Board, Color, Island, Point, Vertex};
use crate::constants::COLUMN_LETTERS;

/// A move: a stone at a point, or a pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Place(Point),
    Pass,
}

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Point lies off the board
    OutOfBounds,
    /// Point is not empty
    Occupied,
    /// Placed stone's group would have no liberties and nothing is captured
    Suicide,
    /// Move recaptures the single stone that just captured
    Ko,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfBounds => write!(f, "illegal move: point off the board"),
            MoveError::Occupied => write!(f, "illegal move: point not empty"),
            MoveError::Suicide => write!(f, "illegal move: suicide"),
            MoveError::Ko => write!(f, "illegal move: retakes ko"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Points per color, from either scoring method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Score {
    pub black: u32,
    pub white: u32,
}

/// A Go position together with turn, capture and ko bookkeeping.
///
/// Cloning yields a fully independent copy; the search relies on this to
/// explore sibling moves without them seeing each other's stones.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameState<const N: usize> {
    board: Board<N>,
    to_move: Color,
    /// Passes in a row at the end of the move history (0, 1 or 2)
    passes: u8,
    black_captures: u32,
    white_captures: u32,
    /// Point of the last move, if that move captured exactly one stone
    ko: Option<Point>,
    /// Move number (0 = start of game); passes count
    n: usize,
}

impl<const N: usize> Default for GameState<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> GameState<N> {
    /// An empty board with Black to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Color::Black,
            passes: 0,
            black_captures: 0,
            white_captures: 0,
            ko: None,
            n: 0,
        }
    }

    /// Read-only view of the board contents.
    pub fn board(&self) -> &Board<N> {
        &self.board
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    /// Enemy stones removed by `color`'s own moves so far.
    pub fn captures(&self, color: Color) -> u32 {
        match color {
            Color::Black => self.black_captures,
            Color::White => self.white_captures,
        }
    }

    /// The point of the stone that captured exactly one stone last move.
    pub fn ko_point(&self) -> Option<Point> {
        self.ko
    }

    pub fn last_move_was_pass(&self) -> bool {
        self.passes > 0
    }

    /// True once the two most recent turns were both passes.
    pub fn is_finished(&self) -> bool {
        self.passes >= 2
    }

    pub fn move_number(&self) -> usize {
        self.n
    }

    /// Place a stone for the player to move at `(row, col)`.
    ///
    /// Returns `false` and leaves the state untouched if the move is illegal
    /// for any reason. Use [`GameState::try_play`] to learn which.
    pub fn play_stone(&mut self, row: usize, col: usize) -> bool {
        self.place_stone((row, col)).is_ok()
    }

    /// Pass the turn.
    ///
    /// Returns `true` if the previous turn was a pass as well, which ends the
    /// game. In that case the player to move does not change.
    pub fn pass_turn(&mut self) -> bool {
        if self.passes > 0 {
            self.passes = 2;
            return true;
        }
        self.passes = 1;
        self.ko = None;
        self.to_move = self.to_move.opponent();
        self.n += 1;
        false
    }

    /// Play any move. On success returns the number of stones captured.
    ///
    /// # Errors
    /// - [`MoveError::OutOfBounds`] - the point is off the board
    /// - [`MoveError::Occupied`] - the point is not empty
    /// - [`MoveError::Suicide`] - the stone would have no liberties
    /// - [`MoveError::Ko`] - the move retakes a ko immediately
    pub fn try_play(&mut self, mv: Move) -> Result<u32, MoveError> {
        match mv {
            Move::Place(pt) => self.place_stone(pt),
            Move::Pass => {
                self.pass_turn();
                Ok(0)
            }
        }
    }

    fn place_stone(&mut self, pt: Point) -> Result<u32, MoveError> {
        if !Board::<N>::contains(pt) {
            return Err(MoveError::OutOfBounds);
        }
        if self.board[pt] != Vertex::Empty {
            return Err(MoveError::Occupied);
        }

        let color = self.to_move;
        let enemy = Vertex::from(color.opponent());
        self.board[pt] = color.into();

        let mut captured = 0u32;
        for n in Board::<N>::neighbors(pt) {
            // A group touching the stone twice is already empty the second time.
            if self.board[n] != enemy {
                continue;
            }
            if let Some(group) = self.board.dead_group(n) {
                captured += self.board.clear(&group);
            }
        }

        // Nothing was removed, so undoing the placement restores the board.
        if captured == 0 && !self.board.has_liberty(pt) {
            self.board[pt] = Vertex::Empty;
            return Err(MoveError::Suicide);
        }

        if captured == 1 {
            if let Some(ko) = self.ko {
                if self.board[ko] == Vertex::Empty {
                    self.board[ko] = enemy;
                    self.board[pt] = Vertex::Empty;
                    return Err(MoveError::Ko);
                }
            }
        }

        match color {
            Color::Black => self.black_captures += captured,
            Color::White => self.white_captures += captured,
        }
        self.ko = (captured == 1).then_some(pt);
        self.passes = 0;
        self.to_move = color.opponent();
        self.n += 1;
        Ok(captured)
    }

    /// Stones on the board per color. Captures are ignored.
    ///
    /// Only meaningful for a finished game whose dead stones are gone.
    pub fn area_score(&self) -> Score {
        Score {
            black: self.board.stones(Color::Black),
            white: self.board.stones(Color::White),
        }
    }

    /// Captures plus empty regions bordered by a single color.
    ///
    /// Regions bordered by both colors, or by none, count for nobody.
    pub fn territory_score(&self) -> Score {
        let mut score = Score {
            black: self.black_captures,
            white: self.white_captures,
        };
        let mut evaluated = Island::<N>::new();

        for pt in Board::<N>::points() {
            if self.board[pt] != Vertex::Empty || evaluated.contains(pt) {
                continue;
            }
            let region = self.board.empty_region(pt);
            evaluated.merge(&region.island);

            let size = region.island.len() as u32;
            match region.owner() {
                Some(Color::Black) => score.black += size,
                Some(Color::White) => score.white += size,
                None => {}
            }
        }
        score
    }
}

/// Parse a vertex name (e.g. "B2", "pass") for an NxN board.
///
/// Columns use letters from `A`, skipping `I`; rows count up from 1 at the
/// bottom. Returns `None` for anything that is not a point on the board.
pub fn parse_coord<const N: usize>(s: &str) -> Option<Move> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("pass") {
        return Some(Move::Pass);
    }

    let (letter, digits) = s.split_at_checked(1)?;
    let letter = letter.as_bytes()[0].to_ascii_uppercase();
    let col = COLUMN_LETTERS.iter().position(|&c| c == letter)?;

    let number: usize = digits.parse().ok()?;
    if col >= N || number == 0 || number > N {
        return None;
    }
    Some(Move::Place((N - number, col)))
}

/// Name a move for an NxN board (e.g. "B2", "pass").
pub fn str_coord<const N: usize>(mv: Move) -> String {
    match mv {
        Move::Pass => "pass".into(),
        Move::Place((row, col)) => {
            let letter = COLUMN_LETTERS[col] as char;
            format!("{letter}{}", N - row)
        }
    }
}
