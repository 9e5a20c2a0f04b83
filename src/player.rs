//! Player registry: names, colors, and capture tallies.

use crate::board::Marble;

/// Errors raised while setting up the two players of a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("both players are named '{0}'")]
    DuplicateName(String),
    #[error("both players chose color {0}")]
    DuplicateColor(Marble),
    #[error("invalid color '{0}', expected 'W' or 'B'")]
    InvalidColor(String),
}

/// Parse a player color token. Only single-letter `W` and `B` are accepted.
pub fn parse_color(token: &str) -> Result<Marble, SetupError> {
    match token {
        "W" => Ok(Marble::White),
        "B" => Ok(Marble::Black),
        _ => Err(SetupError::InvalidColor(token.to_string())),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    color: Marble,
    red_captured: u32,
    opponent_captured: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, color: Marble) -> Self {
        Self {
            name: name.into(),
            color,
            red_captured: 0,
            opponent_captured: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Marble {
        self.color
    }

    /// Red marbles this player has pushed off the board.
    pub fn red_captured(&self) -> u32 {
        self.red_captured
    }

    /// Opponent marbles this player has pushed off the board.
    pub fn opponent_captured(&self) -> u32 {
        self.opponent_captured
    }

    pub fn add_red(&mut self) {
        self.red_captured += 1;
    }

    pub fn add_opponent(&mut self) {
        self.opponent_captured += 1;
    }
}

/// Which of the two registered players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    /// The seat across the table.
    pub fn other(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

/// The two players of one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Players {
    seats: [Player; 2],
}

impl Players {
    /// Register two players from `(name, color)` pairs.
    pub fn new(first: (&str, &str), second: (&str, &str)) -> Result<Self, SetupError> {
        let c1 = parse_color(first.1)?;
        let c2 = parse_color(second.1)?;
        if first.0 == second.0 {
            return Err(SetupError::DuplicateName(first.0.to_string()));
        }
        if c1 == c2 {
            return Err(SetupError::DuplicateColor(c1));
        }
        Ok(Self {
            seats: [Player::new(first.0, c1), Player::new(second.0, c2)],
        })
    }

    /// Seat of the player called `name`.
    pub fn seat(&self, name: &str) -> Option<Seat> {
        [Seat::First, Seat::Second]
            .into_iter()
            .find(|&s| self.get(s).name == name)
    }

    pub fn get(&self, seat: Seat) -> &Player {
        &self.seats[seat.index()]
    }

    pub fn get_mut(&mut self, seat: Seat) -> &mut Player {
        &mut self.seats[seat.index()]
    }

    pub fn by_name(&self, name: &str) -> Option<&Player> {
        self.seat(name).map(|s| self.get(s))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.seats.iter()
    }
}
