//! Kuba game state and move execution.
//!
//! This module provides the rules engine:
//! - Turn order and move legality checking
//! - Push simulation with captures off the board edge
//! - The anti-repetition rule (a move may not restore the position that
//!   existed before the opponent's last move)
//! - Win detection after every move
//!
//! Each [`KubaGame`] owns all of its state, so independent games can be kept
//! side by side.

use std::mem;

use crate::board::{Board, Coord, Direction, Marble};
use crate::constants::RED_TO_WIN;
use crate::player::{Player, Players, Seat, SetupError};

/// Why a move was rejected. A rejected move never changes the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("Error Illegal move: game is over")]
    GameOver,
    #[error("Error Illegal move: unknown player")]
    UnknownPlayer,
    #[error("Error Illegal move: not your turn")]
    NotYourTurn,
    #[error("Error Illegal move: off the board")]
    OutOfBounds,
    /// No marble at the origin
    #[error("Error Illegal move: point EMPTY")]
    EmptyCell,
    /// Origin holds an opponent or red marble
    #[error("Error Illegal move: not your marble")]
    NotYourMarble,
    /// The cell behind the origin is occupied
    #[error("Error Illegal move: no room to push")]
    Blocked,
    /// Move would undo the opponent's last move
    #[error("Error Illegal move: repeats previous position")]
    Repetition,
}

/// What a successful move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Marble pushed off the board, if any
    pub pushed_off: Option<Marble>,
    /// The move ended the game in the mover's favour
    pub won: bool,
}

/// A game of Kuba between two players.
#[derive(Debug, Clone)]
pub struct KubaGame {
    players: Players,
    board: Board,
    /// Player to move (`None` before the first move and after the game ends)
    turn: Option<Seat>,
    winner: Option<Seat>,
    /// Board as it was before the most recent move
    before_last: Option<Board>,
}

impl KubaGame {
    /// Start a game from the standard opening position.
    ///
    /// Each player is given as `(name, color)` where color is `"W"` or `"B"`.
    pub fn new(first: (&str, &str), second: (&str, &str)) -> Result<Self, SetupError> {
        Self::with_board(first, second, Board::starting())
    }

    /// Start a game from an arbitrary position.
    pub fn with_board(
        first: (&str, &str),
        second: (&str, &str),
        board: Board,
    ) -> Result<Self, SetupError> {
        Ok(Self {
            players: Players::new(first, second)?,
            board,
            turn: None,
            winner: None,
            before_last: None,
        })
    }

    /// Play a move, returning whether it was legal.
    pub fn make_move(&mut self, player: &str, pt: Coord, dir: Direction) -> bool {
        self.try_move(player, pt, dir).is_ok()
    }

    /// Play a move, reporting why it was rejected.
    pub fn try_move(
        &mut self,
        player: &str,
        pt: Coord,
        dir: Direction,
    ) -> Result<MoveOutcome, MoveError> {
        if self.winner.is_some() {
            return Err(MoveError::GameOver);
        }
        let seat = self.players.seat(player).ok_or(MoveError::UnknownPlayer)?;
        if self.turn.is_some_and(|t| t != seat) {
            return Err(MoveError::NotYourTurn);
        }
        let (next, pushed_off) = self.check(seat, pt, dir)?;

        self.before_last = Some(mem::replace(&mut self.board, next));
        let opponent = seat.other();
        let opponent_color = self.players.get(opponent).color();
        match pushed_off {
            Some(Marble::Red) => self.players.get_mut(seat).add_red(),
            Some(m) if m == opponent_color => self.players.get_mut(seat).add_opponent(),
            _ => {} // own marble: lost without score
        }
        self.turn = Some(opponent);

        let won = self.players.get(seat).red_captured() >= RED_TO_WIN
            || self.board.count(opponent_color) == 0
            || !self.board.has_push(opponent_color);
        if won {
            self.winner = Some(seat);
            self.turn = None;
        }
        Ok(MoveOutcome { pushed_off, won })
    }

    /// Validate a move for `seat` without touching the game, returning the
    /// resulting board and the marble pushed off.
    fn check(
        &self,
        seat: Seat,
        pt: Coord,
        dir: Direction,
    ) -> Result<(Board, Option<Marble>), MoveError> {
        if !Board::in_bounds(pt) {
            return Err(MoveError::OutOfBounds);
        }
        let marble = self.board.get(pt).ok_or(MoveError::EmptyCell)?;
        if marble != self.players.get(seat).color() {
            return Err(MoveError::NotYourMarble);
        }
        if !self.board.can_push(pt, dir) {
            return Err(MoveError::Blocked);
        }

        let mut next = self.board.clone();
        let pushed_off = next.push(pt, dir);
        if self.before_last.as_ref() == Some(&next) {
            return Err(MoveError::Repetition);
        }
        Ok((next, pushed_off))
    }

    /// Every legal move for `player` in the current position.
    ///
    /// Empty when the game is over, the name is unknown, or it is the other
    /// player's turn.
    pub fn legal_moves(&self, player: &str) -> Vec<(Coord, Direction)> {
        let Some(seat) = self.players.seat(player) else {
            return Vec::new();
        };
        if self.winner.is_some() || self.turn.is_some_and(|t| t != seat) {
            return Vec::new();
        }
        let color = self.players.get(seat).color();
        self.board
            .marbles()
            .filter(|&(_, m)| m == color)
            .flat_map(|(pt, _)| Direction::ALL.map(|d| (pt, d)))
            .filter(|&(pt, d)| self.check(seat, pt, d).is_ok())
            .collect()
    }

    /// The marble at `pt`; `None` for empty or off-board cells.
    pub fn get_marble(&self, pt: Coord) -> Option<Marble> {
        self.board.get(pt)
    }

    /// Marbles on the board as `(white, black, red)`.
    pub fn get_marble_count(&self) -> (usize, usize, usize) {
        self.board.marble_count()
    }

    /// Red marbles captured by `player`.
    pub fn get_captured(&self, player: &str) -> Option<u32> {
        self.players.by_name(player).map(Player::red_captured)
    }

    /// Opponent marbles captured by `player`.
    pub fn get_captured_opponent(&self, player: &str) -> Option<u32> {
        self.players.by_name(player).map(Player::opponent_captured)
    }

    /// Name of the player to move.
    pub fn get_current_turn(&self) -> Option<&str> {
        self.turn.map(|s| self.players.get(s).name())
    }

    /// Name of the winner, once the game is decided.
    pub fn get_winner(&self) -> Option<&str> {
        self.winner.map(|s| self.players.get(s).name())
    }

    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.by_name(name)
    }

    pub fn players(&self) -> &Players {
        &self.players
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
}
