use crate::StatType;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString};

/// The 25 natures. Each one boosts one stat by 10% and hinders another by 10%,
/// except the five where both sides land on the same stat.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, EnumIter,
)]
pub enum Nature {
    Hardy,
    Lonely,
    Adamant,
    Naughty,
    Brave,
    Bold,
    Docile,
    Impish,
    Lax,
    Relaxed,
    Modest,
    Mild,
    Bashful,
    Rash,
    Quiet,
    Calm,
    Gentle,
    Careful,
    Quirky,
    Sassy,
    Timid,
    Hasty,
    Jolly,
    Naive,
    Serious,
}

impl Nature {
    /// Returns (boosted stat, hindered stat).
    pub const fn modifiers(self) -> (StatType, StatType) {
        use Nature::*;
        use StatType::*;

        match self {
            Hardy => (Attack, Attack),
            Lonely => (Attack, Defense),
            Adamant => (Attack, SpAttack),
            Naughty => (Attack, SpDefense),
            Brave => (Attack, Speed),

            Bold => (Defense, Attack),
            Docile => (Defense, Defense),
            Impish => (Defense, SpAttack),
            Lax => (Defense, SpDefense),
            Relaxed => (Defense, Speed),

            Modest => (SpAttack, Attack),
            Mild => (SpAttack, Defense),
            Bashful => (SpAttack, SpAttack),
            Rash => (SpAttack, SpDefense),
            Quiet => (SpAttack, Speed),

            Calm => (SpDefense, Attack),
            Gentle => (SpDefense, Defense),
            Careful => (SpDefense, SpAttack),
            Quirky => (SpDefense, SpDefense),
            Sassy => (SpDefense, Speed),

            Timid => (Speed, Attack),
            Hasty => (Speed, Defense),
            Jolly => (Speed, SpAttack),
            Naive => (Speed, SpDefense),
            Serious => (Speed, Speed),
        }
    }

    pub fn is_neutral(self) -> bool {
        let (plus, minus) = self.modifiers();
        plus == minus
    }

    /// Multiplier applied to `stat`: 1.1 boosted, 0.9 hindered, 1.0 otherwise.
    pub fn multiplier(self, stat: StatType) -> f32 {
        let (plus, minus) = self.modifiers();
        if plus == minus {
            1.0
        } else if stat == plus {
            1.1
        } else if stat == minus {
            0.9
        } else {
            1.0
        }
    }
}

/// Looks `nature` up by its canonical (case-sensitive) name.
/// Unknown names are treated as neutral.
pub fn nature_multiplier(stat: StatType, nature: &str) -> f32 {
    Nature::from_str(nature)
        .map(|n| n.multiplier(stat))
        .unwrap_or(1.0)
}
