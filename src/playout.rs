//! Random playouts (uniformly random legal moves until the game ends).
//!
//! Used by the self-play driver and by tests that check game invariants over
//! long random move sequences.

use crate::board::{Coord, Direction};
use crate::game::KubaGame;

/// Summary of one playout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playout {
    /// Moves played
    pub moves: usize,
    /// Winner's name, or `None` if the move limit was hit or the side to
    /// move was left with only repeating moves
    pub winner: Option<String>,
}

/// Name of the player who should move next. Before the first move the
/// first-registered player starts.
pub fn side_to_move(game: &KubaGame) -> Option<&str> {
    if game.get_winner().is_some() {
        return None;
    }
    game.get_current_turn()
        .or_else(|| game.players().iter().next().map(|p| p.name()))
}

/// Choose a random legal move for `player`.
pub fn random_move(
    game: &KubaGame,
    player: &str,
    rng: &mut fastrand::Rng,
) -> Option<(Coord, Direction)> {
    let moves = game.legal_moves(player);
    if moves.is_empty() {
        return None;
    }
    Some(moves[rng.usize(..moves.len())])
}

/// Play random moves until the game ends or `max_moves` have been played.
pub fn playout(game: &mut KubaGame, rng: &mut fastrand::Rng, max_moves: usize) -> Playout {
    let mut moves = 0;
    while moves < max_moves {
        let Some(player) = side_to_move(game).map(str::to_string) else {
            break;
        };
        let Some((pt, dir)) = random_move(game, &player, rng) else {
            break;
        };
        if !game.make_move(&player, pt, dir) {
            break;
        }
        moves += 1;
    }
    Playout {
        moves,
        winner: game.get_winner().map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn test_side_to_move() {
        let mut game = KubaGame::new(("Alice", "B"), ("Bob", "W")).unwrap();
        assert_eq!(side_to_move(&game), Some("Alice"));
        assert!(game.make_move("Bob", (0, 0), Direction::Right));
        assert_eq!(side_to_move(&game), Some("Alice"));
    }

    #[test]
    fn test_random_move_is_legal() {
        let game = KubaGame::new(("Alice", "W"), ("Bob", "B")).unwrap();
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..20 {
            let (pt, dir) = random_move(&game, "Alice", &mut rng).unwrap();
            assert!(game.legal_moves("Alice").contains(&(pt, dir)));
        }
        assert_eq!(random_move(&game, "Nobody", &mut rng), None);
    }

    #[test]
    fn test_playout_respects_limit() {
        let mut game = KubaGame::new(("Alice", "W"), ("Bob", "B")).unwrap();
        let mut rng = fastrand::Rng::with_seed(1);
        let result = playout(&mut game, &mut rng, 10);
        assert!(result.moves > 0);
        assert!(result.moves <= 10);
    }

    #[test]
    fn test_playout_on_finished_game() {
        let board = Board::from_rows(&[
            "W......",
            ".......",
            ".......",
            "WRRRRRB",
            ".......",
            ".......",
            ".......",
        ])
        .unwrap();
        let mut game = KubaGame::with_board(("Alice", "W"), ("Bob", "B"), board).unwrap();
        assert!(game.make_move("Alice", (3, 0), Direction::Right));
        let mut rng = fastrand::Rng::with_seed(3);
        let result = playout(&mut game, &mut rng, 100);
        assert_eq!(result.moves, 0);
        assert_eq!(result.winner.as_deref(), Some("Alice"));
    }
}
