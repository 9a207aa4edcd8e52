//! Combat resolution.

mod mhitu;

pub use mhitu::{
    AttackOutcome, death_message, hit_message, miss_message, narrate, punch, punch_message,
};
