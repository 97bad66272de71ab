//! Searching the catalog for sets that fit what has been seen in battle.
//!
//! A query is a conjunction of a name, any number of moves and an item. Each
//! part is matched either exactly (case-sensitive equality) or fuzzily (ASCII
//! case-insensitive substring containment), and only variants eligible for
//! the current round are considered.

use crate::catalog::Catalog;
use crate::errors::CatalogResult;
use schema::{MatchedVariant, Variant};
use std::path::Path;
use tracing::{debug, trace};

/// What the player knows about an opponent's set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub name: String,
    pub moves: Vec<String>,
    pub item: String,
    pub round: i32,
    pub fight_seven: bool,
    pub exact: bool,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_moves<I, S>(mut self, moves: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.moves = moves.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.item = item.into();
        self
    }

    pub fn in_round(mut self, round: i32) -> Self {
        self.round = round;
        self
    }

    /// Use the seventh-battle round window.
    pub fn fight_seven(mut self, fight_seven: bool) -> Self {
        self.fight_seven = fight_seven;
        self
    }

    /// Switch every field to case-sensitive equality.
    pub fn exact(mut self, exact: bool) -> Self {
        self.exact = exact;
        self
    }

    /// True when name, every move and item are all empty.
    /// Such a query would dump the whole catalog, so it matches nothing.
    pub fn is_unconstrained(&self) -> bool {
        self.name.is_empty() && self.moves.iter().all(|m| m.is_empty()) && self.item.is_empty()
    }

    /// Checks one variant (and its owner's name) against every part of the query.
    pub fn matches(&self, entity_name: &str, variant_index: usize, variant: &Variant) -> bool {
        round_eligible(variant_index, self.round, self.fight_seven)
            && name_matches(&self.name, entity_name, self.exact)
            && moves_match(&self.moves, &variant.moves, self.exact)
            && item_matches(&self.item, &variant.item, self.exact)
    }
}

/// Whether the variant at 1-based `variant_index` can appear in `round`.
///
/// Seventh battles before round 4 only use the variant one past the round
/// number. Regular battles before round 5 skip the variants at the round
/// number and the one before it. Later rounds admit everything.
pub fn round_eligible(variant_index: usize, round: i32, fight_seven: bool) -> bool {
    let index = variant_index as i64;
    let round = i64::from(round);

    let excluded = if fight_seven {
        round < 4 && index != round + 1
    } else {
        round < 5 && (index == round || index == round - 1)
    };

    !excluded
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack
        .to_ascii_lowercase()
        .contains(&needle.to_ascii_lowercase())
}

pub fn name_matches(query: &str, entity_name: &str, exact: bool) -> bool {
    if query.is_empty() {
        return true;
    }
    if exact {
        query == entity_name
    } else {
        contains_ignore_case(entity_name, query)
    }
}

/// Every queried move must be found in the variant's move list.
///
/// Exact mode needs an identical entry; fuzzy mode only needs some variant
/// move that contains the queried text.
pub fn moves_match(query: &[String], variant_moves: &[String], exact: bool) -> bool {
    if exact {
        return query
            .iter()
            .all(|wanted| variant_moves.iter().any(|known| known == wanted));
    }

    let known: Vec<String> = variant_moves
        .iter()
        .map(|m| m.to_ascii_lowercase())
        .collect();
    query.iter().all(|wanted| {
        let wanted = wanted.to_ascii_lowercase();
        known.iter().any(|m| m.contains(&wanted))
    })
}

pub fn item_matches(query: &str, variant_item: &str, exact: bool) -> bool {
    if query.is_empty() {
        return true;
    }
    if exact {
        query == variant_item
    } else {
        contains_ignore_case(variant_item, query)
    }
}

impl Catalog {
    /// All variants matching `query`, in catalog order then variant order.
    pub fn search(&self, query: &SearchQuery) -> Vec<MatchedVariant> {
        if query.is_unconstrained() {
            debug!("Ignoring search with no name, moves or item");
            return Vec::new();
        }

        let matches: Vec<MatchedVariant> = self
            .entities()
            .iter()
            .flat_map(|entity| {
                entity
                    .indexed_variants()
                    .filter(move |(index, variant)| query.matches(&entity.name, *index, variant))
                    .map(move |(_, variant)| MatchedVariant::new(&entity.name, variant))
            })
            .collect();

        trace!("Search {:?} matched {} variants", query, matches.len());
        matches
    }
}

/// Load the catalog at `catalog_path` and search it.
///
/// An unconstrained query or a catalog that cannot be opened yields no
/// matches. A catalog that cannot be parsed is an error.
pub fn search(
    query: &SearchQuery,
    catalog_path: impl AsRef<Path>,
) -> CatalogResult<Vec<MatchedVariant>> {
    if query.is_unconstrained() {
        debug!("Ignoring search with no name, moves or item");
        return Ok(Vec::new());
    }

    match Catalog::load(catalog_path)? {
        Some(catalog) => Ok(catalog.search(query)),
        None => Ok(Vec::new()),
    }
}
