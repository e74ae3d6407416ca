//! Supported games. Only active games have a build table behind them.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Active,
    ComingSoon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Game {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub status: GameStatus,
}

pub static GAMES: [Game; 3] = [
    Game {
        id: "oblivion",
        name: "The Elder Scrolls IV: Oblivion",
        description: "Classic fantasy RPG with deep character customization",
        status: GameStatus::Active,
    },
    Game {
        id: "ashes_of_creation",
        name: "Ashes of Creation",
        description: "Upcoming MMORPG with dynamic world systems",
        status: GameStatus::ComingSoon,
    },
    Game {
        id: "skyrim",
        name: "The Elder Scrolls V: Skyrim",
        description: "Nordic adventure with shouts and dragons",
        status: GameStatus::ComingSoon,
    },
];

/// Look up a game by id, case-insensitively.
#[must_use]
pub fn find(id: &str) -> Option<&'static Game> {
    GAMES.iter().find(|g| g.id.eq_ignore_ascii_case(id.trim()))
}
