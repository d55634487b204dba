//! Minimax search with alpha-beta pruning.
//!
//! Values are Black's stone count at the end of a line of play: Black
//! maximizes, White minimizes. A line ends when both players pass in a row
//! or when it is as long as the board has vertices. Without that cap the
//! tree is infinite, since captures let positions repeat.
//!
//! Every child is searched on its own clone of the parent state, so sibling
//! branches never share a board.

use std::iter;

use tracing::{debug, trace};

use crate::board::{Board, Color};
use crate::constants::{INFINITY, NEG_INFINITY};
use crate::position::{GameState, Move, str_coord};

/// Counters collected while searching.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited, including the root
    pub nodes: u64,
    /// Positions scored without expanding them
    pub terminals: u64,
    /// Times the remaining stone moves of a position were skipped
    pub cutoffs: u64,
}

/// A minimax searcher. Holds nothing but its statistics.
#[derive(Debug, Default)]
pub struct Minimax {
    stats: SearchStats,
}

/// Value of a position where the search stops: Black's stones on the board.
#[inline]
pub fn terminal_value<const N: usize>(state: &GameState<N>) -> i32 {
    state.area_score().black as i32
}

/// Minimax value of `state`, searched from ply `depth` within `(alpha, beta)`.
pub fn evaluate<const N: usize>(
    state: &GameState<N>,
    depth: usize,
    alpha: i32,
    beta: i32,
) -> i32 {
    Minimax::new().evaluate(state, depth, alpha, beta)
}

/// Minimax value of `state` with an unbounded window, starting at ply 0.
pub fn best_move_value<const N: usize>(state: &GameState<N>) -> i32 {
    evaluate(state, 0, NEG_INFINITY, INFINITY)
}

impl Minimax {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counters accumulated since this searcher was created, or since the
    /// last call to [`Minimax::best_move`].
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Minimax value of `state`, searched from ply `depth` within `(alpha, beta)`.
    pub fn evaluate<const N: usize>(
        &mut self,
        state: &GameState<N>,
        depth: usize,
        alpha: i32,
        beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;

        if state.is_finished() || depth >= N * N {
            self.stats.terminals += 1;
            return terminal_value(state);
        }

        match state.to_move() {
            Color::Black => self.maximize(state, depth, alpha, beta),
            Color::White => self.minimize(state, depth, alpha, beta),
        }
    }

    fn maximize<const N: usize>(
        &mut self,
        state: &GameState<N>,
        depth: usize,
        mut alpha: i32,
        beta: i32,
    ) -> i32 {
        let mut best = NEG_INFINITY;

        for (row, col) in Board::<N>::points() {
            let mut child = state.clone();
            if !child.play_stone(row, col) {
                continue;
            }
            best = best.max(self.evaluate(&child, depth + 1, alpha, beta));
            alpha = alpha.max(best);
            if best > beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        // Passing is always legal and is searched even after a cutoff.
        let mut child = state.clone();
        child.pass_turn();
        best.max(self.evaluate(&child, depth + 1, alpha, beta))
    }

    fn minimize<const N: usize>(
        &mut self,
        state: &GameState<N>,
        depth: usize,
        alpha: i32,
        mut beta: i32,
    ) -> i32 {
        let mut best = INFINITY;

        for (row, col) in Board::<N>::points() {
            let mut child = state.clone();
            if !child.play_stone(row, col) {
                continue;
            }
            best = best.min(self.evaluate(&child, depth + 1, alpha, beta));
            beta = beta.min(best);
            if best < alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        let mut child = state.clone();
        child.pass_turn();
        best.min(self.evaluate(&child, depth + 1, alpha, beta))
    }

    /// Choose a move for the player to move in `state`.
    ///
    /// Candidates are tried in row-major order with pass last. Returns the
    /// first candidate with the best value for the mover, together with that
    /// value, which equals [`best_move_value`] of `state`. A finished game
    /// is not searched: the answer is a pass and its terminal value.
    pub fn best_move<const N: usize>(&mut self, state: &GameState<N>) -> (Move, i32) {
        self.stats = SearchStats::default();
        self.stats.nodes += 1;

        if state.is_finished() {
            self.stats.terminals += 1;
            return (Move::Pass, terminal_value(state));
        }

        let maximizing = state.to_move() == Color::Black;
        let mut alpha = NEG_INFINITY;
        let mut beta = INFINITY;
        let mut best: Option<(Move, i32)> = None;

        let candidates = Board::<N>::points()
            .map(Move::Place)
            .chain(iter::once(Move::Pass));

        for mv in candidates {
            let mut child = state.clone();
            if let Err(err) = child.try_play(mv) {
                trace!(mv = %str_coord::<N>(mv), %err, "skipping candidate");
                continue;
            }

            let value = self.evaluate(&child, 1, alpha, beta);
            debug!(mv = %str_coord::<N>(mv), value, "root candidate");

            let improves = match best {
                None => true,
                Some((_, b)) if maximizing => value > b,
                Some((_, b)) => value < b,
            };
            if improves {
                best = Some((mv, value));
                if maximizing {
                    alpha = alpha.max(value);
                } else {
                    beta = beta.min(value);
                }
            }
        }

        let (mv, value) = best.unwrap_or_else(|| (Move::Pass, terminal_value(state)));
        debug!(
            best = %str_coord::<N>(mv),
            value,
            nodes = self.stats.nodes,
            terminals = self.stats.terminals,
            cutoffs = self.stats.cutoffs,
            "search finished"
        );
        (mv, value)
    }
}
