//! Per-turn intent selection and passive regeneration.

use super::monst::{Hitpoints, MoveBehavior};
use crate::game::Game;

/// Hitpoint level at or below which a monster turns to flee.
const FLEE_THRESHOLD: Hitpoints = Hitpoints::from_points(2);

/// Rebind every monster's movement behavior from its current hitpoints
/// and apply one regeneration step.
///
/// Must run once per turn, before [`monster_action`]. Dead monsters are
/// rebound like the rest (the dispatcher skips them anyway) but never
/// regenerate; death is permanent.
///
/// [`monster_action`]: super::monster_action
pub fn update_intent(game: &mut Game) {
    for monster in &mut game.monsters {
        monster.move_behavior = if monster.hp <= FLEE_THRESHOLD {
            MoveBehavior::Retreat
        } else {
            MoveBehavior::Approach
        };
        if monster.hp != Hitpoints::ZERO {
            monster.hp.regenerate(monster.max_hp);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Position;
    use crate::game::testmap::open_game;
    use crate::monster::{ArchetypeId, Monster, MonsterId};

    fn goblin_at(hp_points: i32) -> Monster {
        let mut m =
            Monster::from_archetype(MonsterId(1), ArchetypeId::Goblin, Position::new(1, 1));
        m.hp = Hitpoints::from_points(hp_points);
        m
    }

    #[test]
    fn test_low_hp_binds_retreat() {
        let mut game = open_game(10, 10, 5, 5);
        game.monsters.push(goblin_at(2));
        update_intent(&mut game);
        assert_eq!(game.monsters[0].move_behavior, MoveBehavior::Retreat);
    }

    #[test]
    fn test_healthy_binds_approach() {
        let mut game = open_game(10, 10, 5, 5);
        game.monsters.push(goblin_at(3));
        update_intent(&mut game);
        assert_eq!(game.monsters[0].move_behavior, MoveBehavior::Approach);
    }

    #[test]
    fn test_wounded_monster_regenerates() {
        let mut game = open_game(10, 10, 5, 5);
        game.monsters.push(goblin_at(4));
        let before = game.monsters[0].hp;
        update_intent(&mut game);
        let after = game.monsters[0].hp;
        assert!(after > before);
        assert!(after <= game.monsters[0].max_hp);
    }

    #[test]
    fn test_full_health_unchanged() {
        let mut game = open_game(10, 10, 5, 5);
        game.monsters
            .push(Monster::from_archetype(MonsterId(1), ArchetypeId::Rat, Position::new(1, 1)));
        update_intent(&mut game);
        assert_eq!(game.monsters[0].hp, game.monsters[0].max_hp);
    }

    #[test]
    fn test_dead_monster_rebound_but_not_healed() {
        let mut game = open_game(10, 10, 5, 5);
        game.monsters.push(goblin_at(0));
        update_intent(&mut game);
        assert_eq!(game.monsters[0].move_behavior, MoveBehavior::Retreat);
        assert_eq!(game.monsters[0].hp, Hitpoints::ZERO);
    }
}
