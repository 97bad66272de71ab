use crate::catalog::Catalog;
use crate::errors::{CatalogResult, StatDerivationError, StatResult};
use schema::{BaseStats, Nature, StatBlock, StatType};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

/// How a set was trained: effort values per stat, one IV for every stat,
/// level and nature name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingConfig {
    pub effort_values: StatBlock,
    pub individual_value: i32,
    pub level: i32,
    pub nature: String,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        TrainingConfig {
            effort_values: StatBlock::default(),
            individual_value: 0,
            level: 50,
            nature: Nature::Hardy.to_string(),
        }
    }
}

/// Outcome of a stat lookup against the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatLookup<T> {
    Found(T),
    /// The catalog could not be opened or has no such entity
    NotFound,
}

impl<T> StatLookup<T> {
    /// Collapse to a plain value, substituting `sentinel` when nothing was found.
    pub fn unwrap_or(self, sentinel: T) -> T {
        match self {
            StatLookup::Found(value) => value,
            StatLookup::NotFound => sentinel,
        }
    }

    pub fn found(self) -> Option<T> {
        match self {
            StatLookup::Found(value) => Some(value),
            StatLookup::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, StatLookup::Found(_))
    }
}

/// Narrow an intermediate to `i32`, pinning out-of-range values at the bounds.
fn saturate(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// HP = floor(0.01 * (2 * Base + IV + floor(0.25 * EV)) * Level) + Level + 10
///
/// Inputs are not range checked; sums are taken in `i64` and the result
/// saturates at the `i32` bounds.
pub fn calc_hp_stat(base: i32, ev: i32, iv: i32, level: i32) -> i32 {
    let base_calculation = 2 * i64::from(base) + i64::from(iv) + (0.25 * f64::from(ev)) as i64;
    let scaled = (0.01 * base_calculation as f64 * f64::from(level)) as i64;
    saturate(scaled + i64::from(level) + 10)
}

/// Other Stat = (floor(0.01 * (2 * Base + IV + floor(EV / 4)) * Level) + 5) * Nature
///
/// The nature multiply happens in single precision and the product is
/// truncated, so 70 hindered is 63 and 107 boosted is 117. `None` is a
/// neutral nature. Saturates like [`calc_hp_stat`].
pub fn calc_actual_stat(
    stat: StatType,
    base: i32,
    ev: i32,
    iv: i32,
    level: i32,
    nature: Option<Nature>,
) -> i32 {
    let multiplier = nature.map_or(1.0, |n| n.multiplier(stat));
    let base_calculation = 2 * i64::from(base) + i64::from(iv) + i64::from(ev / 4);
    let unmodified = (0.01 * base_calculation as f64 * f64::from(level)) as i64 + 5;
    saturate((unmodified as f32 * multiplier) as i64)
}

/// Resolve a nature by canonical name. Unknown names are neutral (`None`).
pub fn parse_nature(name: &str) -> Option<Nature> {
    match Nature::from_str(name) {
        Ok(nature) => Some(nature),
        Err(_) => {
            warn!("Unknown nature '{}', using neutral multipliers", name);
            None
        }
    }
}

/// Derive one stat from its base value.
pub fn derive_stat(
    base: &BaseStats,
    stat: StatType,
    ev: i32,
    iv: i32,
    level: i32,
    nature: &str,
) -> i32 {
    match stat {
        StatType::Hp => calc_hp_stat(base.hp, ev, iv, level),
        _ => calc_actual_stat(stat, base.get(stat), ev, iv, level, parse_nature(nature)),
    }
}

/// Derive all six stats from base stats and a training configuration.
pub fn derive_stats(base: &BaseStats, config: &TrainingConfig) -> StatBlock {
    let nature = parse_nature(&config.nature);

    let mut stats = StatBlock::default();
    for stat in StatType::ALL {
        let ev = config.effort_values.get(stat);
        let value = match stat {
            StatType::Hp => calc_hp_stat(base.hp, ev, config.individual_value, config.level),
            _ => calc_actual_stat(
                stat,
                base.get(stat),
                ev,
                config.individual_value,
                config.level,
                nature,
            ),
        };
        stats.set(stat, value);
    }
    stats
}

impl Catalog {
    /// All six stats for `entity_name`, or `NotFound` if the entity is absent.
    pub fn derive_all_stats(
        &self,
        entity_name: &str,
        config: &TrainingConfig,
    ) -> StatLookup<StatBlock> {
        match self.entity(entity_name) {
            Some(entity) => StatLookup::Found(derive_stats(&entity.base_stats, config)),
            None => {
                debug!("No catalog entity named '{}'", entity_name);
                StatLookup::NotFound
            }
        }
    }

    /// One stat for `entity_name`, named by its catalog key (`"hp"`, `"spAttack"`, ...).
    /// HP ignores `nature`.
    pub fn derive_one_stat(
        &self,
        entity_name: &str,
        stat: &str,
        ev: i32,
        iv: i32,
        level: i32,
        nature: &str,
    ) -> StatResult<StatLookup<i32>> {
        let Some(entity) = self.entity(entity_name) else {
            debug!("No catalog entity named '{}'", entity_name);
            return Ok(StatLookup::NotFound);
        };

        let stat = StatType::from_str(stat)
            .map_err(|_| StatDerivationError::UnknownStat(stat.to_string()))?;
        Ok(StatLookup::Found(derive_stat(
            &entity.base_stats,
            stat,
            ev,
            iv,
            level,
            nature,
        )))
    }
}

/// Load the catalog and derive all six stats for `entity_name`.
///
/// A catalog that cannot be opened and an unknown entity both give
/// `NotFound`; `unwrap_or(StatBlock::NOT_FOUND)` recovers the all `-1` marker.
pub fn derive_all_stats(
    catalog_path: impl AsRef<Path>,
    entity_name: &str,
    config: &TrainingConfig,
) -> CatalogResult<StatLookup<StatBlock>> {
    Ok(match Catalog::load(catalog_path)? {
        Some(catalog) => catalog.derive_all_stats(entity_name, config),
        None => StatLookup::NotFound,
    })
}

/// Load the catalog and derive a single stat for `entity_name`.
///
/// A catalog that cannot be opened and an unknown entity both give
/// `NotFound`; the legacy fallback is `unwrap_or(ev)`.
pub fn derive_one_stat(
    catalog_path: impl AsRef<Path>,
    entity_name: &str,
    stat: &str,
    ev: i32,
    iv: i32,
    level: i32,
    nature: &str,
) -> StatResult<StatLookup<i32>> {
    match Catalog::load(catalog_path)? {
        Some(catalog) => catalog.derive_one_stat(entity_name, stat, ev, iv, level, nature),
        None => Ok(StatLookup::NotFound),
    }
}
