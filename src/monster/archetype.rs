//! Monster templates.
//!
//! A small fixed table of monster kinds; process-wide immutable data.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Template for one monster kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Archetype {
    pub name: &'static str,
    /// Character shown on the map display.
    pub glyph: char,
    /// Lowest possible starting max HP. Present in the table but not
    /// consulted at spawn time, which always takes `hp_high` (see
    /// `makemon`).
    pub hp_low: i32,
    /// Highest possible starting max HP.
    pub hp_high: i32,
}

/// Identifier for an entry in the archetype table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum ArchetypeId {
    Goblin,
    Rat,
    Dragon,
}

impl ArchetypeId {
    /// Every archetype, in table order. Spawning picks uniformly from this.
    pub const ALL: [ArchetypeId; 3] = [ArchetypeId::Goblin, ArchetypeId::Rat, ArchetypeId::Dragon];

    /// The static template this id names.
    pub const fn def(self) -> &'static Archetype {
        match self {
            ArchetypeId::Goblin => &Archetype {
                name: "Goblin",
                glyph: 'G',
                hp_low: 6,
                hp_high: 10,
            },
            ArchetypeId::Rat => &Archetype {
                name: "Rat",
                glyph: 'R',
                hp_low: 3,
                hp_high: 5,
            },
            ArchetypeId::Dragon => &Archetype {
                name: "Dragon",
                glyph: 'D',
                hp_low: 15,
                hp_high: 20,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_table_is_well_formed() {
        for id in ArchetypeId::iter() {
            let def = id.def();
            assert!(!def.name.is_empty());
            assert!(def.glyph.is_ascii_alphabetic());
            assert!(def.hp_low > 0);
            assert!(def.hp_low <= def.hp_high);
        }
    }

    #[test]
    fn test_all_matches_iter() {
        let from_iter: Vec<ArchetypeId> = ArchetypeId::iter().collect();
        assert_eq!(from_iter, ArchetypeId::ALL);
    }
}
