//! The 7x7 marble grid and push mechanics.
//!
//! Rows are numbered from the top edge (row 0) and columns from the left edge
//! (column 0). Directions are absolute: `Forward` always moves toward row 0,
//! whichever player is pushing.

use std::fmt;
use std::str::FromStr;

use crate::constants::{
    BOARDSIZE, CELL_BLACK, CELL_EMPTY, CELL_RED, CELL_WHITE, DELTA, N, STARTING_ROWS,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Marble {
    White,
    Black,
    /// Neutral marble, scored toward the red-capture win.
    Red,
}

impl Marble {
    pub fn to_char(self) -> char {
        match self {
            Marble::White => CELL_WHITE,
            Marble::Black => CELL_BLACK,
            Marble::Red => CELL_RED,
        }
    }

    /// Parse one cell character: `Ok(None)` for an empty cell, `Err(c)` for a
    /// character that is not a cell.
    pub fn parse_cell(c: char) -> Result<Option<Marble>, char> {
        match c {
            CELL_WHITE => Ok(Some(Marble::White)),
            CELL_BLACK => Ok(Some(Marble::Black)),
            CELL_RED => Ok(Some(Marble::Red)),
            CELL_EMPTY => Ok(None),
            _ => Err(c),
        }
    }
}

impl fmt::Display for Marble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Push direction on the fixed board axes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Forward,
    Backward,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Forward,
        Direction::Backward,
    ];

    /// Row/column offset of one step in this direction.
    pub fn delta(self) -> (isize, isize) {
        DELTA[self as usize]
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Direction::Left => 'L',
            Direction::Right => 'R',
            Direction::Forward => 'F',
            Direction::Backward => 'B',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid direction '{0}', expected one of L, R, F, B")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(Direction::Left),
            "R" => Ok(Direction::Right),
            "F" => Ok(Direction::Forward),
            "B" => Ok(Direction::Backward),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

/// A `(row, column)` location. Values of `N` or more are off the board.
pub type Coord = (usize, usize);

/// Step one cell from `pt` in `dir`, or `None` when that leaves the board.
pub fn step(pt: Coord, dir: Direction) -> Option<Coord> {
    let (dr, dc) = dir.delta();
    let row = pt.0.checked_add_signed(dr)?;
    let col = pt.1.checked_add_signed(dc)?;
    (row < N && col < N).then_some((row, col))
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseBoardError {
    #[error("expected 7 rows, got {0}")]
    RowCount(usize),
    #[error("row {row} has {len} cells, expected 7")]
    RowLength { row: usize, len: usize },
    #[error("invalid cell '{ch}' at ({row}, {col})")]
    InvalidCell { row: usize, col: usize, ch: char },
}

/// A Kuba board: 49 cells, each empty or holding one marble.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Marble>; BOARDSIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Self {
            cells: [None; BOARDSIZE],
        }
    }

    /// The standard opening position.
    pub fn starting() -> Self {
        let mut board = Self::new();
        for (row, line) in STARTING_ROWS.iter().enumerate() {
            for (col, c) in line.chars().enumerate() {
                board.cells[row * N + col] = Marble::parse_cell(c).unwrap_or(None);
            }
        }
        board
    }

    /// Build a board from `N` rows of cell characters (`W`, `B`, `R`, `.`).
    /// Whitespace inside a row is ignored.
    pub fn from_rows(rows: &[&str]) -> Result<Self, ParseBoardError> {
        if rows.len() != N {
            return Err(ParseBoardError::RowCount(rows.len()));
        }
        let mut board = Self::new();
        for (row, line) in rows.iter().enumerate() {
            let chars: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if chars.len() != N {
                return Err(ParseBoardError::RowLength {
                    row,
                    len: chars.len(),
                });
            }
            for (col, &ch) in chars.iter().enumerate() {
                let cell = Marble::parse_cell(ch)
                    .map_err(|ch| ParseBoardError::InvalidCell { row, col, ch })?;
                board.cells[row * N + col] = cell;
            }
        }
        Ok(board)
    }

    fn idx(&self, (row, col): Coord) -> usize {
        row * N + col
    }

    pub fn in_bounds((row, col): Coord) -> bool {
        row < N && col < N
    }

    /// The marble at `pt`, or `None` for an empty or off-board cell.
    pub fn get(&self, pt: Coord) -> Option<Marble> {
        if !Self::in_bounds(pt) {
            return None;
        }
        self.cells[self.idx(pt)]
    }

    /// Place (or clear) a cell. Off-board coordinates are ignored.
    pub fn set(&mut self, pt: Coord, marble: Option<Marble>) {
        if Self::in_bounds(pt) {
            let i = self.idx(pt);
            self.cells[i] = marble;
        }
    }

    /// Whether the marble at `pt` may start a push in `dir`.
    ///
    /// The cell behind the marble (on the side opposite `dir`) must be empty
    /// or off the board. Empty and off-board origins can never be pushed.
    pub fn can_push(&self, pt: Coord, dir: Direction) -> bool {
        if self.get(pt).is_none() {
            return false;
        }
        match step(pt, dir.opposite()) {
            None => true,
            Some(behind) => self.get(behind).is_none(),
        }
    }

    /// Shift the contiguous line starting at `pt` one cell in `dir`.
    ///
    /// The line ends at the first empty cell or at the board edge. When it
    /// reaches the edge the last marble leaves the board and is returned.
    /// Legality is not checked here; see [`Board::can_push`].
    pub fn push(&mut self, pt: Coord, dir: Direction) -> Option<Marble> {
        let mut line: Vec<Coord> = Vec::with_capacity(N);
        let mut cur = Some(pt);
        while let Some(c) = cur {
            if self.get(c).is_none() {
                break;
            }
            line.push(c);
            cur = step(c, dir);
        }
        let &last = line.last()?;

        let pushed_off = match cur {
            Some(gap) => {
                self.set(gap, self.get(last));
                None
            }
            None => self.get(last),
        };
        for i in (1..line.len()).rev() {
            self.set(line[i], self.get(line[i - 1]));
        }
        self.set(pt, None);
        pushed_off
    }

    /// Number of marbles of one color on the board.
    pub fn count(&self, marble: Marble) -> usize {
        self.cells.iter().filter(|&&c| c == Some(marble)).count()
    }

    /// Marbles on the board as `(white, black, red)`.
    pub fn marble_count(&self) -> (usize, usize, usize) {
        (
            self.count(Marble::White),
            self.count(Marble::Black),
            self.count(Marble::Red),
        )
    }

    /// Whether any `color` marble on the board has a push available.
    pub fn has_push(&self, color: Marble) -> bool {
        self.marbles()
            .filter(|&(_, m)| m == color)
            .any(|(pt, _)| Direction::ALL.iter().any(|&d| self.can_push(pt, d)))
    }

    /// Iterate over every occupied cell.
    pub fn marbles(&self) -> impl Iterator<Item = (Coord, Marble)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, &c)| c.map(|m| ((i / N, i % N), m)))
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        Self::from_rows(&rows)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..N {
            for col in 0..N {
                let ch = self.get((row, col)).map_or(CELL_EMPTY, Marble::to_char);
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: [&str; N]) -> Board {
        Board::from_rows(&rows).unwrap()
    }

    #[test]
    fn test_starting_counts() {
        let b = Board::starting();
        assert_eq!(b.marble_count(), (8, 8, 13));
        assert_eq!(b.get((0, 0)), Some(Marble::White));
        assert_eq!(b.get((0, 6)), Some(Marble::Black));
        assert_eq!(b.get((3, 3)), Some(Marble::Red));
        assert_eq!(b.get((2, 6)), None);
    }

    #[test]
    fn test_parse_cell() {
        assert_eq!(Marble::parse_cell('W'), Ok(Some(Marble::White)));
        assert_eq!(Marble::parse_cell('R'), Ok(Some(Marble::Red)));
        assert_eq!(Marble::parse_cell('.'), Ok(None));
        assert_eq!(Marble::parse_cell('X'), Err('X'));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let b = Board::starting();
        assert_eq!(b.get((7, 0)), None);
        assert_eq!(b.get((0, 7)), None);
        assert_eq!(b.get((usize::MAX, 3)), None);
    }

    #[test]
    fn test_step_edges() {
        assert_eq!(step((0, 3), Direction::Forward), None);
        assert_eq!(step((6, 3), Direction::Backward), None);
        assert_eq!(step((3, 0), Direction::Left), None);
        assert_eq!(step((3, 6), Direction::Right), None);
        assert_eq!(step((3, 3), Direction::Forward), Some((2, 3)));
        assert_eq!(step((3, 3), Direction::Right), Some((3, 4)));
    }

    #[test]
    fn test_parse_direction() {
        assert_eq!("L".parse::<Direction>(), Ok(Direction::Left));
        assert_eq!("f".parse::<Direction>(), Ok(Direction::Forward));
        assert!("X".parse::<Direction>().is_err());
        assert!("LR".parse::<Direction>().is_err());
    }

    #[test]
    fn test_can_push_needs_gap_behind() {
        let b = Board::starting();
        // Edge marble pushing inward: behind is off the board.
        assert!(b.can_push((6, 6), Direction::Left));
        // (6,6) sits behind (6,5) when pushing left.
        assert!(!b.can_push((6, 5), Direction::Left));
        // (6,5) pushing forward has the edge behind it.
        assert!(b.can_push((6, 5), Direction::Forward));
        // Empty cell.
        assert!(!b.can_push((0, 2), Direction::Right));
    }

    #[test]
    fn test_has_push_surrounded() {
        let b = board([
            ".......",
            ".......",
            "...R...",
            "..RBW..",
            "...R...",
            ".......",
            ".......",
        ]);
        assert!(!b.has_push(Marble::Black));
        assert!(b.has_push(Marble::White));
        assert!(b.has_push(Marble::Red));
        assert!(!Board::new().has_push(Marble::White));
    }

    #[test]
    fn test_push_into_gap() {
        let mut b = Board::starting();
        let off = b.push((6, 5), Direction::Forward);
        assert_eq!(off, None);
        assert_eq!(b.get((6, 5)), None);
        assert_eq!(b.get((5, 5)), Some(Marble::White));
        assert_eq!(b.get((4, 5)), Some(Marble::White));
        assert_eq!(b.marble_count(), (8, 8, 13));
    }

    #[test]
    fn test_push_off_edge() {
        let mut b = board([
            ".......",
            ".......",
            ".......",
            "WRRRRRB",
            ".......",
            ".......",
            ".......",
        ]);
        let off = b.push((3, 0), Direction::Right);
        assert_eq!(off, Some(Marble::Black));
        assert_eq!(b.get((3, 0)), None);
        assert_eq!(b.get((3, 1)), Some(Marble::White));
        assert_eq!(b.get((3, 6)), Some(Marble::Red));
        assert_eq!(b.marble_count(), (1, 0, 5));
    }

    #[test]
    fn test_push_single_marble_off() {
        let mut b = board([
            "...W...",
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
        ]);
        assert!(b.can_push((0, 3), Direction::Forward));
        assert_eq!(b.push((0, 3), Direction::Forward), Some(Marble::White));
        assert_eq!(b.marble_count(), (0, 0, 0));
    }

    #[test]
    fn test_push_empty_origin_is_noop() {
        let mut b = Board::starting();
        let before = b.clone();
        assert_eq!(b.push((0, 3), Direction::Left), None);
        assert_eq!(b, before);
    }

    #[test]
    fn test_display_roundtrip() {
        let b = Board::starting();
        let text = b.to_string();
        assert_eq!(text.lines().next(), Some("W W . . . B B "));
        assert_eq!(text.parse::<Board>(), Ok(b));
    }

    #[test]
    fn test_from_rows_errors() {
        assert_eq!(
            Board::from_rows(&["......."]),
            Err(ParseBoardError::RowCount(1))
        );
        let mut rows = STARTING_ROWS;
        rows[2] = "..RRR.";
        assert_eq!(
            Board::from_rows(&rows),
            Err(ParseBoardError::RowLength { row: 2, len: 6 })
        );
        rows[2] = "..RRZ..";
        assert_eq!(
            Board::from_rows(&rows),
            Err(ParseBoardError::InvalidCell {
                row: 2,
                col: 4,
                ch: 'Z'
            })
        );
    }
}
