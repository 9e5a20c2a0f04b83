//! Kuba-Rust: rules engine for the Kuba marble-pushing game.
//!
//! Two players push marbles around a 7x7 board, trying to shove red marbles
//! and opponent marbles off the edge.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions, opening layout, win thresholds
//! - [`board`] - The marble grid and push mechanics
//! - [`player`] - Player names, colors, and capture tallies
//! - [`game`] - Turn order, move legality, anti-repetition, and winning
//! - [`playout`] - Random games for testing and demonstration
//!
//! ## Example
//!
//! ```
//! use kuba_rust::board::{Direction, Marble};
//! use kuba_rust::game::KubaGame;
//!
//! let mut game = KubaGame::new(("PlayerA", "W"), ("PlayerB", "B")).unwrap();
//! assert_eq!(game.get_marble_count(), (8, 8, 13));
//!
//! assert!(game.make_move("PlayerA", (6, 5), Direction::Forward));
//! assert_eq!(game.get_current_turn(), Some("PlayerB"));
//! assert_eq!(game.get_marble((5, 5)), Some(Marble::White));
//! ```

pub mod board;
pub mod constants;
pub mod game;
pub mod player;
pub mod playout;
