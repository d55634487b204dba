//! Board size selection and search constants.
//!
//! The library types are generic over the board size, but the binary has to
//! pick one. That choice is made with Cargo features:
//! - `board2x2`
//! - `board3x3` (default)
//! - `board4x4`
//!
//! ```sh
//! cargo build                                              # 3x3 (default)
//! cargo build --no-default-features --features board4x4    # 4x4
//! ```
//!
//! Exhaustive minimax grows with the number of vertices, so anything larger
//! than 4x4 is not offered.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN) used by the command line driver.
#[cfg(feature = "board2x2")]
pub const N: usize = 2;

#[cfg(feature = "board3x3")]
pub const N: usize = 3;

#[cfg(feature = "board4x4")]
pub const N: usize = 4;

#[cfg(any(
    all(feature = "board2x2", feature = "board3x3"),
    all(feature = "board2x2", feature = "board4x4"),
    all(feature = "board3x3", feature = "board4x4"),
))]
compile_error!("Enable only one of 'board2x2', 'board3x3' and 'board4x4'");

#[cfg(not(any(feature = "board2x2", feature = "board3x3", feature = "board4x4")))]
compile_error!("Must enable exactly one board size feature: 'board2x2', 'board3x3' or 'board4x4'");

/// Column letters for vertex names. `I` is skipped by Go convention.
pub const COLUMN_LETTERS: &[u8] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";

// =============================================================================
// Search
// =============================================================================

/// Stand-in for an unbounded alpha-beta window.
///
/// Only compared against, never negated, so `i32::MIN`/`i32::MAX` are safe.
pub const INFINITY: i32 = i32::MAX;

/// Lower end of the initial alpha-beta window.
pub const NEG_INFINITY: i32 = i32::MIN;
