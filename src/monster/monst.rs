//! Monster instances and the hitpoint counter.

use serde::{Deserialize, Serialize};

use super::archetype::ArchetypeId;
use crate::game::Position;

/// Tenths of a point per whole hitpoint.
const TENTHS: i32 = 10;

/// Hitpoint counter, stored in tenths of a point.
///
/// Passive regeneration adds a tenth of a point per turn. Storing tenths
/// keeps that exact in integer arithmetic and keeps the zero test for
/// death exact; whole-integer hitpoints would silently truncate the regen
/// away every turn. Player damage can drive the counter negative.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Hitpoints(i32);

impl Hitpoints {
    pub const ZERO: Hitpoints = Hitpoints(0);

    pub const fn from_points(points: i32) -> Self {
        Hitpoints(points * TENTHS)
    }

    /// Whole points, truncated (for display).
    pub const fn points(self) -> i32 {
        self.0 / TENTHS
    }

    /// At or below zero. Used for the player's death check; the monster
    /// dispatcher keeps its own strict `!= ZERO` test.
    pub const fn is_depleted(self) -> bool {
        self.0 <= 0
    }

    /// Add one tenth of a point, the per-turn regeneration step. Does
    /// nothing at or above `max`; below `max` the step cannot overshoot it
    /// because a tenth is the representation granularity.
    pub fn regenerate(&mut self, max: Hitpoints) {
        if *self < max {
            self.0 += 1;
        }
    }

    /// Subtract a whole number of points.
    pub fn take_damage(&mut self, points: u32) {
        self.0 -= points as i32 * TENTHS;
    }
}

/// Unique identifier for monster instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonsterId(pub u32);

/// Movement disposition, rebound every turn from hitpoints.
///
/// `None` means no movement this turn; it is the state of a freshly
/// spawned monster until the first intent pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MoveBehavior {
    #[default]
    None,
    /// Step toward the player.
    Approach,
    /// Step away from the player.
    Retreat,
}

/// Melee attack used when orthogonally adjacent to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AttackBehavior {
    #[default]
    None,
    Punch,
}

/// One monster on the map.
///
/// Monsters are never removed from the game's collection; `hp` reaching
/// zero permanently marks one dead and the dispatcher skips it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    pub id: MonsterId,
    pub pos: Position,
    pub name: String,
    /// Character shown on the map display.
    pub glyph: char,
    pub hp: Hitpoints,
    pub max_hp: Hitpoints,
    pub move_behavior: MoveBehavior,
    pub attack_behavior: AttackBehavior,
}

impl Monster {
    /// New monster seeded from an archetype. Starts at full health with
    /// the punch attack bound; movement is bound by the next intent pass.
    pub fn from_archetype(id: MonsterId, archetype: ArchetypeId, pos: Position) -> Self {
        let def = archetype.def();
        let hp = Hitpoints::from_points(def.hp_high);
        Self {
            id,
            pos,
            name: def.name.to_string(),
            glyph: def.glyph,
            hp,
            max_hp: hp,
            move_behavior: MoveBehavior::None,
            attack_behavior: AttackBehavior::Punch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_archetype_full_health() {
        let m = Monster::from_archetype(MonsterId(1), ArchetypeId::Dragon, Position::new(2, 3));
        assert_eq!(m.name, "Dragon");
        assert_eq!(m.glyph, 'D');
        assert_eq!(m.hp, Hitpoints::from_points(20));
        assert_eq!(m.hp, m.max_hp);
        assert_eq!(m.move_behavior, MoveBehavior::None);
        assert_eq!(m.attack_behavior, AttackBehavior::Punch);
    }

    #[test]
    fn test_regenerate_below_max() {
        let max = Hitpoints::from_points(5);
        let mut hp = Hitpoints::from_points(4);
        hp.regenerate(max);
        assert!(hp > Hitpoints::from_points(4));
        assert!(hp < max);
        assert_eq!(hp.points(), 4);
    }

    #[test]
    fn test_regenerate_reaches_max_exactly() {
        let max = Hitpoints::from_points(5);
        let mut hp = Hitpoints::from_points(4);
        for _ in 0..10 {
            hp.regenerate(max);
        }
        assert_eq!(hp, max);
        hp.regenerate(max);
        assert_eq!(hp, max);
    }

    #[test]
    fn test_take_damage_can_go_negative() {
        let mut hp = Hitpoints::from_points(3);
        hp.take_damage(5);
        assert!(hp.is_depleted());
        assert!(hp < Hitpoints::ZERO);
    }
}
