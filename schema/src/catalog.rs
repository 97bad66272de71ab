use crate::BaseStats;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One precomputed set for an entity. Fields the searcher does not
/// understand are kept in `extra` and handed back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub moves: Vec<String>,
    pub item: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Wire shape of one catalog value: base stats inline next to the variant list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    #[serde(flatten)]
    pub base_stats: BaseStats,
    pub variants: Vec<Variant>,
}

/// A catalog entity with its key attached.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub name: String,
    pub base_stats: BaseStats,
    pub variants: Vec<Variant>,
}

impl Entity {
    pub fn from_record(name: String, record: EntityRecord) -> Self {
        Entity {
            name,
            base_stats: record.base_stats,
            variants: record.variants,
        }
    }

    /// Variants paired with their 1-based index.
    pub fn indexed_variants(&self) -> impl Iterator<Item = (usize, &Variant)> {
        self.variants.iter().enumerate().map(|(i, v)| (i + 1, v))
    }
}

/// A search hit: a copy of the variant with the owning entity's name attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedVariant {
    pub moves: Vec<String>,
    pub item: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    pub name: String,
}

impl MatchedVariant {
    /// The entity name wins over any `name` field the variant already carried.
    pub fn new(entity_name: &str, variant: &Variant) -> Self {
        let extra = variant
            .extra
            .iter()
            .filter(|(key, _)| key.as_str() != "name")
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        MatchedVariant {
            moves: variant.moves.clone(),
            item: variant.item.clone(),
            extra,
            name: entity_name.to_string(),
        }
    }

    /// The hit as a plain JSON object.
    pub fn to_json(&self) -> Value {
        let mut object = Map::new();
        object.insert(
            "moves".to_string(),
            Value::Array(self.moves.iter().cloned().map(Value::String).collect()),
        );
        object.insert("item".to_string(), Value::String(self.item.clone()));
        for (key, value) in &self.extra {
            object.insert(key.clone(), value.clone());
        }
        object.insert("name".to_string(), Value::String(self.name.clone()));
        Value::Object(object)
    }
}
