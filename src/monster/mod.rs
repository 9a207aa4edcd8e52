//! Monster system.
//!
//! Templates ([`Archetype`]), instances ([`Monster`]), spawning, per-turn
//! intent selection, and action dispatch.

pub mod ai;
mod archetype;
mod intent;
mod makemon;
mod monst;

pub use ai::{AiAction, TurnEvent, monster_action};
pub use archetype::{Archetype, ArchetypeId};
pub use intent::update_intent;
pub use makemon::{MAX_PLACEMENT_ATTEMPTS, SpawnError, create_monsters};
pub use monst::{AttackBehavior, Hitpoints, Monster, MonsterId, MoveBehavior};
