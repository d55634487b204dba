//! go-minimax: Go rules and exhaustive minimax search on tiny boards.
//!
//! The crate has two layers. [`position`] is the rules engine: it applies
//! moves, captures groups that run out of liberties, forbids self-capture
//! and the immediate ko recapture, and scores positions by area or by
//! territory. [`search`] sits on top of it and runs minimax with alpha-beta
//! pruning over every legal continuation, capped at one ply per vertex.
//!
//! ## Modules
//!
//! - [`constants`] - Board size for the binary and search bounds
//! - [`board`] - Grid storage, neighbours and flood fills
//! - [`position`] - Game state, move execution and scoring
//! - [`search`] - Minimax with alpha-beta pruning
//!
//! ## Example
//!
//! ```
//! use go_minimax::position::GameState;
//! use go_minimax::search::{best_move_value, Minimax};
//!
//! let mut state = GameState::<2>::new();
//! assert_eq!(best_move_value(&state), 1);
//!
//! let (mv, value) = Minimax::new().best_move(&state);
//! assert_eq!(value, 1);
//! state.try_play(mv).unwrap();
//! ```

pub mod board;
pub mod constants;
pub mod position;
pub mod search;

pub use board::{Board, Color, Point, Vertex};
pub use position::{GameState, Move, MoveError, Score};
pub use search::{Minimax, SearchStats, best_move_value, evaluate};
