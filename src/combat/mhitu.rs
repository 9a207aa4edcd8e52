//! Monster attacks against the player.
//!
//! Mechanics and narration are separate: [`punch`] resolves the attack
//! and returns an [`AttackOutcome`]; the message builders turn outcomes
//! into display text and never touch game state.

use serde::{Deserialize, Serialize};

use crate::game::Game;
use crate::rng::GameRng;

/// Chance out of 100 that a punch lands.
const PUNCH_HIT_CHANCE: u32 = 50;
/// Largest damage roll for a punch.
const PUNCH_MAX_DAMAGE: u32 = 4;

/// Mechanical result of one melee attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackOutcome {
    Miss,
    Hit { damage: u32, player_died: bool },
}

/// Resolve one punch against the player.
///
/// One draw for hit/miss; on a hit, a second draw for damage in
/// `1..=4`, subtracted from the player's hitpoints.
pub fn punch(game: &mut Game, rng: &mut GameRng) -> AttackOutcome {
    if !rng.percent(PUNCH_HIT_CHANCE) {
        return AttackOutcome::Miss;
    }
    let damage = rng.rnd(PUNCH_MAX_DAMAGE);
    game.player.hp.take_damage(damage);
    AttackOutcome::Hit {
        damage,
        player_died: game.player.hp.is_depleted(),
    }
}

/// "<name> punches you!" opener shared by hit and miss lines.
pub fn punch_message(attacker_name: &str) -> String {
    format!("{} punches you!", attacker_name)
}

pub fn hit_message(damage: u32) -> String {
    format!("Hit! Damage: {}", damage)
}

pub fn miss_message() -> String {
    "Miss!".to_string()
}

pub fn death_message() -> String {
    "You died!".to_string()
}

/// Full narration line for one attack outcome.
pub fn narrate(attacker_name: &str, outcome: AttackOutcome) -> String {
    match outcome {
        AttackOutcome::Miss => {
            format!("{} {}", punch_message(attacker_name), miss_message())
        }
        AttackOutcome::Hit {
            damage,
            player_died: false,
        } => format!("{} {}", punch_message(attacker_name), hit_message(damage)),
        AttackOutcome::Hit {
            damage,
            player_died: true,
        } => format!(
            "{} {} {}",
            punch_message(attacker_name),
            hit_message(damage),
            death_message()
        ),
    }
}
