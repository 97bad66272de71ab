use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The six battle stats, named the way the catalog file names them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum StatType {
    Hp,
    Attack,
    Defense,
    SpAttack,
    SpDefense,
    Speed,
}

impl StatType {
    /// Catalog order: HP, ATK, DEF, SP.ATK, SP.DEF, SPD
    pub const ALL: [StatType; 6] = [
        StatType::Hp,
        StatType::Attack,
        StatType::Defense,
        StatType::SpAttack,
        StatType::SpDefense,
        StatType::Speed,
    ];
}

/// One integer per stat. Used for base stats, effort values and derived stats alike.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatBlock {
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub sp_attack: i32,
    pub sp_defense: i32,
    pub speed: i32,
}

/// Base stats live on the entity, not on its variants.
pub type BaseStats = StatBlock;

impl StatBlock {
    /// Legacy "entity not found" marker.
    pub const NOT_FOUND: StatBlock = StatBlock::uniform(-1);

    pub const fn uniform(value: i32) -> Self {
        StatBlock {
            hp: value,
            attack: value,
            defense: value,
            sp_attack: value,
            sp_defense: value,
            speed: value,
        }
    }

    pub fn get(&self, stat: StatType) -> i32 {
        match stat {
            StatType::Hp => self.hp,
            StatType::Attack => self.attack,
            StatType::Defense => self.defense,
            StatType::SpAttack => self.sp_attack,
            StatType::SpDefense => self.sp_defense,
            StatType::Speed => self.speed,
        }
    }

    pub fn set(&mut self, stat: StatType, value: i32) {
        let slot = match stat {
            StatType::Hp => &mut self.hp,
            StatType::Attack => &mut self.attack,
            StatType::Defense => &mut self.defense,
            StatType::SpAttack => &mut self.sp_attack,
            StatType::SpDefense => &mut self.sp_defense,
            StatType::Speed => &mut self.speed,
        };
        *slot = value;
    }
}
