//! Monster action dispatch and movement.
//!
//! One call to [`monster_action`] advances every living monster by one
//! action: a punch when orthogonally adjacent to the player, otherwise a
//! single step driven by the monster's bound movement behavior. Monsters
//! act in collection order; the whole pass is synchronous and, for a
//! fixed seed, deterministic.

use serde::{Deserialize, Serialize};

use super::monst::{AttackBehavior, Hitpoints, MonsterId, MoveBehavior};
use crate::combat::{AttackOutcome, punch};
use crate::game::{Game, Position};
use crate::rng::GameRng;

/// What one monster did on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiAction {
    /// No behavior bound, or every candidate step was blocked.
    None,
    /// Stepped to a new position.
    Moved(Position),
    /// Punched the player.
    Attacked(AttackOutcome),
}

/// One monster's entry in the turn log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnEvent {
    pub monster: MonsterId,
    pub action: AiAction,
}

/// Advance every living monster by one action.
///
/// Monsters with zero hitpoints are skipped entirely. Adjacency is
/// orthogonal only; a monster standing diagonally next to the player
/// moves instead of attacking. Returns the turn log for the caller to
/// narrate.
pub fn monster_action(game: &mut Game, rng: &mut GameRng) -> Vec<TurnEvent> {
    let mut events = Vec::with_capacity(game.monsters.len());

    for i in 0..game.monsters.len() {
        let m = &game.monsters[i];
        if m.hp == Hitpoints::ZERO {
            continue;
        }
        let id = m.id;
        let pos = m.pos;
        let attack = m.attack_behavior;
        let movement = m.move_behavior;

        let action = if pos.orthogonally_adjacent(game.player.pos) {
            match attack {
                AttackBehavior::None => AiAction::None,
                AttackBehavior::Punch => AiAction::Attacked(punch(game, rng)),
            }
        } else {
            match movement {
                MoveBehavior::None => AiAction::None,
                MoveBehavior::Approach => step_towards(game, i),
                MoveBehavior::Retreat => step_away(game, i),
            }
        };
        events.push(TurnEvent { monster: id, action });
    }
    events
}

/// Step one tile toward the player.
///
/// Fixed priority: close vertical distance first, then horizontal. The
/// first direction whose target tile is free wins; if all four fail the
/// monster stays put. Never diagonal, never onto a wall, the player, or
/// another living monster.
fn step_towards(game: &mut Game, idx: usize) -> AiAction {
    let Position { x: mx, y: my } = game.monsters[idx].pos;
    let player = game.player.pos;

    let dest = if player.y < my && !game.is_blocked(mx, my - 1) {
        Some(Position::new(mx, my - 1))
    } else if player.y > my && !game.is_blocked(mx, my + 1) {
        Some(Position::new(mx, my + 1))
    } else if player.x < mx && !game.is_blocked(mx - 1, my) {
        Some(Position::new(mx - 1, my))
    } else if player.x > mx && !game.is_blocked(mx + 1, my) {
        Some(Position::new(mx + 1, my))
    } else {
        None
    };
    apply_step(game, idx, dest)
}

/// Step one tile away from the player. Mirror of [`step_towards`]: same
/// priority order and legality rules, opposite directions.
fn step_away(game: &mut Game, idx: usize) -> AiAction {
    let Position { x: mx, y: my } = game.monsters[idx].pos;
    let player = game.player.pos;

    let dest = if player.y < my && !game.is_blocked(mx, my + 1) {
        Some(Position::new(mx, my + 1))
    } else if player.y > my && !game.is_blocked(mx, my - 1) {
        Some(Position::new(mx, my - 1))
    } else if player.x < mx && !game.is_blocked(mx + 1, my) {
        Some(Position::new(mx + 1, my))
    } else if player.x > mx && !game.is_blocked(mx - 1, my) {
        Some(Position::new(mx - 1, my))
    } else {
        None
    };
    apply_step(game, idx, dest)
}

fn apply_step(game: &mut Game, idx: usize, dest: Option<Position>) -> AiAction {
    match dest {
        Some(pos) => {
            game.monsters[idx].pos = pos;
            AiAction::Moved(pos)
        }
        None => AiAction::None,
    }
}
