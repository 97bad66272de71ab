//! Loading the Battle Factory catalog.
//!
//! The catalog is a JSON object keyed by entity name. Every call that takes a
//! path reads the file from scratch; a loaded [`Catalog`] can be kept around
//! and queried repeatedly when the caller wants to avoid re-parsing.

use crate::errors::{CatalogError, CatalogResult};
use schema::{Entity, EntityRecord};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// File name the catalog ships under.
pub const DEFAULT_CATALOG_FILE: &str = "battle_factory_pokemon.json";

/// Parsed catalog, entities in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entities: Vec<Entity>,
}

impl Catalog {
    /// Load the catalog at `path`.
    ///
    /// Returns `Ok(None)` when the file cannot be opened. Parse failures are
    /// reported as [`CatalogError`].
    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Option<Catalog>> {
        let path = path.as_ref();

        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) => {
                debug!("Catalog {} unavailable: {}", path.display(), err);
                return Ok(None);
            }
        };

        let document: Map<String, Value> = serde_json::from_reader(BufReader::new(file))
            .map_err(|source| CatalogError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;

        let catalog = Self::from_document(document)?;
        debug!(
            "Loaded {} entities from catalog {}",
            catalog.len(),
            path.display()
        );
        Ok(Some(catalog))
    }

    /// Parse a catalog held in memory.
    pub fn from_json_str(json: &str) -> CatalogResult<Catalog> {
        let document: Map<String, Value> =
            serde_json::from_str(json).map_err(|source| CatalogError::Malformed {
                path: "<memory>".into(),
                source,
            })?;
        Self::from_document(document)
    }

    fn from_document(document: Map<String, Value>) -> CatalogResult<Catalog> {
        let entities = document
            .into_iter()
            .map(|(name, value)| match serde_json::from_value::<EntityRecord>(value) {
                Ok(record) => Ok(Entity::from_record(name, record)),
                Err(source) => Err(CatalogError::MalformedEntity {
                    entity: name,
                    source,
                }),
            })
            .collect::<CatalogResult<Vec<_>>>()?;

        Ok(Catalog { entities })
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Case-sensitive lookup by entity name.
    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.name == name)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
