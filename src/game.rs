//! Shared game state and the map occupancy predicate.
//!
//! The engine does not own the map. The embedding game supplies geometry
//! through [`TileMap`]; [`Game::is_blocked`] layers monster and player
//! occupancy on top of it and is the single legality check used both at
//! spawn time and during movement.

use serde::{Deserialize, Serialize};

use crate::monster::{Hitpoints, Monster};

/// Grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another position.
    pub const fn distance(self, other: Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Exactly one tile apart along a single axis. Diagonal neighbors do
    /// not count.
    pub const fn orthogonally_adjacent(self, other: Position) -> bool {
        (self.x == other.x && (self.y - other.y).abs() == 1)
            || (self.y == other.y && (self.x - other.x).abs() == 1)
    }
}

/// Map geometry supplied by the embedding game.
///
/// Coordinates passed to `is_wall` are always within `0..width` x
/// `0..height`; `Game::is_blocked` bounds-checks first.
pub trait TileMap {
    fn width(&self) -> i32;
    fn height(&self) -> i32;
    fn is_wall(&self, x: i32, y: i32) -> bool;
}

/// Spawn configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOptions {
    /// Number of monsters to create at game start.
    pub num_monsters: usize,
}

/// Player state visible to the monster engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Position,
    pub hp: Hitpoints,
}

impl Player {
    pub fn new(pos: Position, hp: i32) -> Self {
        Self {
            pos,
            hp: Hitpoints::from_points(hp),
        }
    }
}

/// Game state shared between the engine and its caller.
pub struct Game {
    map: Box<dyn TileMap>,
    pub opts: GameOptions,
    pub player: Player,
    pub monsters: Vec<Monster>,
}

impl Game {
    pub fn new(map: Box<dyn TileMap>, opts: GameOptions, player: Player) -> Self {
        Self {
            map,
            opts,
            player,
            monsters: Vec::new(),
        }
    }

    pub fn map(&self) -> &dyn TileMap {
        &*self.map
    }

    /// Living monster at a position, if any. Dead monsters stay in the
    /// collection but no longer occupy their tile.
    pub fn monster_at(&self, pos: Position) -> Option<&Monster> {
        self.monsters
            .iter()
            .find(|m| m.pos == pos && m.hp != Hitpoints::ZERO)
    }

    /// Whether a tile is impassable: out of bounds, a wall, the player, or
    /// a living monster.
    pub fn is_blocked(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.map.width() || y >= self.map.height() {
            return true;
        }
        if self.map.is_wall(x, y) {
            return true;
        }
        let pos = Position::new(x, y);
        if self.player.pos == pos {
            return true;
        }
        self.monster_at(pos).is_some()
    }
}
