//! dungeon-monsters: monster behavior for a turn-based dungeon crawler.
//!
//! Pure game logic, no I/O. The embedding game supplies map geometry
//! through [`TileMap`] and drives one monster turn as two calls:
//!
//! 1. [`monster::update_intent`] — rebind each monster's movement
//!    disposition from its hitpoints and apply regeneration;
//! 2. [`monster::monster_action`] — every living monster attacks the
//!    player if orthogonally adjacent, otherwise takes one step.
//!
//! [`monster::create_monsters`] populates the map once at game start.
//! All randomness flows through a caller-seeded [`GameRng`], so a fixed
//! seed reproduces a whole game.

pub mod combat;
pub mod game;
pub mod monster;
mod rng;

pub use game::{Game, GameOptions, Player, Position, TileMap};
pub use rng::GameRng;
