//! Constants for board dimensions, the opening layout, and win thresholds.
//!
//! Kuba is always played on a 7x7 board, so unlike board-size-generic engines
//! the geometry here is fixed at compile time.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
pub const N: usize = 7;

/// Number of cells on the board.
pub const BOARDSIZE: usize = N * N;

// =============================================================================
// Marble Totals
// =============================================================================

/// Marbles of each player color at the start of a game.
pub const PLAYER_MARBLES: usize = 8;

/// Neutral (red) marbles at the start of a game.
pub const RED_MARBLES: usize = 13;

/// All marbles on the board at the start of a game.
pub const TOTAL_MARBLES: usize = 2 * PLAYER_MARBLES + RED_MARBLES;

// =============================================================================
// Win Conditions
// =============================================================================

/// Red marbles a player must capture to win.
pub const RED_TO_WIN: u32 = 7;

// =============================================================================
// Cell Characters
// =============================================================================

/// White marble.
pub const CELL_WHITE: char = 'W';

/// Black marble.
pub const CELL_BLACK: char = 'B';

/// Red (neutral) marble.
pub const CELL_RED: char = 'R';

/// Empty cell.
pub const CELL_EMPTY: char = '.';

// =============================================================================
// Opening Layout
// =============================================================================

/// The canonical opening position, top row first.
///
/// White holds the top-left and bottom-right 2x2 corners, Black the other two,
/// and the 13 red marbles form a diamond in the center.
pub const STARTING_ROWS: [&str; N] = [
    "WW...BB",
    "WW.R.BB",
    "..RRR..",
    ".RRRRR.",
    "..RRR..",
    "BB.R.WW",
    "BB...WW",
];

// =============================================================================
// Direction Offsets
// =============================================================================

/// Row/column offsets for each push direction.
/// Order: Left, Right, Forward (toward row 0), Backward (toward row 6).
pub const DELTA: [(isize, isize); 4] = [
    (0, -1), // Left
    (0, 1),  // Right
    (-1, 0), // Forward
    (1, 0),  // Backward
];
