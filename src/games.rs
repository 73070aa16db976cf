//! Boundary to the game session service.
//!
//! The front end only lists active games and asks for new ones; it never
//! interprets game state. [`GameSource`] is that boundary, and
//! [`PlaceholderGames`] stands in for the real service until it exists.

use std::time::{Duration, SystemTime};

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Opaque game identifier issued by the game service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First eight characters followed by `...`, as shown in game lists.
    pub fn short(&self) -> String {
        let head: String = self.0.chars().take(8).collect();
        format!("{}...", head)
    }

    /// Route of the per-game page.
    pub fn path(&self) -> String {
        format!("/spill/{}", self.0)
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    WaitingForPlayers,
    InProgress,
}

impl GameStatus {
    /// Wire name of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            GameStatus::WaitingForPlayers => "waiting_for_players",
            GameStatus::InProgress => "in_progress",
        }
    }

    /// Human-readable label: the wire name with underscores as spaces.
    pub fn label(self) -> String {
        self.as_str().replace('_', " ")
    }
}

/// Summary of an active game as listed by the game service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInfo {
    pub id: GameId,
    pub status: GameStatus,
    pub player_count: u8,
    pub created_at: SystemTime,
}

impl GameInfo {
    /// Whole minutes between creation and `now`; zero for future timestamps.
    pub fn minutes_since_created(&self, now: SystemTime) -> u64 {
        now.duration_since(self.created_at)
            .map(|d| d.as_secs() / 60)
            .unwrap_or(0)
    }
}

/// Error returned by a [`GameSource`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameSourceError {
    #[error("game service unavailable: {0}")]
    Unavailable(String),
}

/// The game session service, as seen from the front end.
pub trait GameSource {
    fn list_active_games(&self) -> Result<Vec<GameInfo>, GameSourceError>;
    fn create_game(&mut self) -> Result<GameId, GameSourceError>;
}

/// Maximum number of players in a game, as shown next to the player count.
pub const MAX_PLAYERS: u8 = 2;

/// Lines per side of the (not yet playable) board.
pub const BOARD_SIZE: u8 = 19;

const DEV_ID_PREFIX: &str = "dev-game-";
const DEV_ID_LEN: usize = 7;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Fixed placeholder data used while the game service does not exist.
///
/// Lists three games created a few minutes before the source was built and
/// hands out throwaway `dev-game-xxxxxxx` identifiers.
#[derive(Debug, Clone)]
pub struct PlaceholderGames {
    now: SystemTime,
}

impl PlaceholderGames {
    pub fn new() -> Self {
        Self::at(SystemTime::now())
    }

    /// Creates placeholder data relative to a fixed instant.
    pub fn at(now: SystemTime) -> Self {
        Self { now }
    }

    fn game(&self, id: &str, status: GameStatus, players: u8, minutes_ago: u64) -> GameInfo {
        GameInfo {
            id: GameId::new(id),
            status,
            player_count: players,
            created_at: self.now - Duration::from_secs(minutes_ago * 60),
        }
    }
}

impl Default for PlaceholderGames {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSource for PlaceholderGames {
    fn list_active_games(&self) -> Result<Vec<GameInfo>, GameSourceError> {
        Ok(vec![
            self.game("dummy-123", GameStatus::WaitingForPlayers, 1, 5),
            self.game("dummy-456", GameStatus::InProgress, 2, 15),
            self.game("dummy-789", GameStatus::WaitingForPlayers, 0, 2),
        ])
    }

    fn create_game(&mut self) -> Result<GameId, GameSourceError> {
        let mut rng = rand::thread_rng();
        let suffix: String = (0..DEV_ID_LEN)
            .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
            .collect();
        tracing::debug!(id = %suffix, "created placeholder game");
        Ok(GameId::new(format!("{}{}", DEV_ID_PREFIX, suffix)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_id() {
        assert_eq!(GameId::new("dummy-123").short(), "dummy-12...");
        assert_eq!(GameId::new("abc").short(), "abc...");
    }

    #[test]
    fn test_path() {
        assert_eq!(GameId::new("dummy-456").path(), "/spill/dummy-456");
    }

    #[test]
    fn test_status_label() {
        assert_eq!(GameStatus::WaitingForPlayers.label(), "waiting for players");
        assert_eq!(GameStatus::InProgress.label(), "in progress");
    }

    #[test]
    fn test_status_serde() {
        let json = serde_json::to_string(&GameStatus::WaitingForPlayers).unwrap();
        assert_eq!(json, "\"waiting_for_players\"");
    }

    #[test]
    fn test_placeholder_list() {
        let now = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000);
        let games = PlaceholderGames::at(now).list_active_games().unwrap();

        let ids: Vec<_> = games.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["dummy-123", "dummy-456", "dummy-789"]);

        let ages: Vec<_> = games.iter().map(|g| g.minutes_since_created(now)).collect();
        assert_eq!(ages, vec![5, 15, 2]);
        assert_eq!(games[1].status, GameStatus::InProgress);
        assert_eq!(games[1].player_count, MAX_PLAYERS);
    }

    #[test]
    fn test_created_ids_have_dev_shape() {
        let mut source = PlaceholderGames::new();
        let id = source.create_game().unwrap();
        let suffix = id.as_str().strip_prefix("dev-game-").unwrap();
        assert_eq!(suffix.len(), 7);
        assert!(suffix
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_future_timestamp_is_zero_minutes() {
        let now = SystemTime::UNIX_EPOCH + Duration::from_secs(60);
        let game = PlaceholderGames::at(now + Duration::from_secs(600))
            .list_active_games()
            .unwrap()
            .remove(0);
        assert_eq!(game.minutes_since_created(now), 0);
    }
}
