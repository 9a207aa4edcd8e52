//! Monster spawning.
//!
//! Places the configured number of monsters on random free tiles and
//! seeds their stats from the archetype table. Placement is rejection
//! sampling against [`Game::is_blocked`], bounded so a crowded map fails
//! loudly instead of spinning forever.

use thiserror::Error;

use super::archetype::ArchetypeId;
use super::monst::{Monster, MonsterId};
use crate::game::{Game, Position};
use crate::rng::GameRng;

/// Candidate tiles tried for one monster before giving up.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 1000;

/// Spawn failure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnError {
    #[error("no free tile found after {attempts} attempts")]
    NoFreeTile { attempts: u32 },
}

/// Create `game.opts.num_monsters` monsters on random free tiles.
///
/// Each monster gets a uniformly random archetype, full hitpoints at the
/// archetype's high bound, and a tile that is in bounds, not a wall, and
/// not occupied by the player or an earlier monster. Replaces any
/// existing collection. On failure the monsters placed so far remain.
pub fn create_monsters(game: &mut Game, rng: &mut GameRng) -> Result<(), SpawnError> {
    let count = game.opts.num_monsters;
    game.monsters = Vec::with_capacity(count);

    for i in 0..count {
        let pos = random_free_tile(game, rng)?;
        let archetype = ArchetypeId::ALL[rng.rn2(ArchetypeId::ALL.len() as u32) as usize];
        game.monsters
            .push(Monster::from_archetype(MonsterId(i as u32 + 1), archetype, pos));
    }
    Ok(())
}

/// Sample map tiles until one is unblocked, up to the attempt bound.
fn random_free_tile(game: &Game, rng: &mut GameRng) -> Result<Position, SpawnError> {
    let width = game.map().width();
    let height = game.map().height();

    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let x = rng.rn2(width as u32) as i32;
        let y = rng.rn2(height as u32) as i32;
        if !game.is_blocked(x, y) {
            return Ok(Position::new(x, y));
        }
    }
    Err(SpawnError::NoFreeTile {
        attempts: MAX_PLACEMENT_ATTEMPTS,
    })
}
