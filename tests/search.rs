mod common;

use battle_factory::{search, Catalog, CatalogError, SearchQuery};
use common::{catalog_file, missing_catalog_path, CATALOG_JSON};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

fn names(matches: &[battle_factory::MatchedVariant]) -> Vec<&str> {
    matches.iter().map(|m| m.name.as_str()).collect()
}

#[rstest]
fn test_unconstrained_query_returns_nothing(
    #[values(0, 3, 7)] round: i32,
    #[values(false, true)] fight_seven: bool,
    #[values(false, true)] exact: bool,
) {
    let file = catalog_file(CATALOG_JSON);
    let query = SearchQuery::new()
        .with_moves(["", "", "", ""])
        .in_round(round)
        .fight_seven(fight_seven)
        .exact(exact);
    assert!(search(&query, file.path()).unwrap().is_empty());
}

#[test]
fn test_name_fuzzy_and_exact() {
    let file = catalog_file(CATALOG_JSON);
    let fuzzy = SearchQuery::new().with_name("pika").in_round(5);

    assert_eq!(search(&fuzzy, file.path()).unwrap().len(), 5);
    assert!(search(&fuzzy.clone().exact(true), file.path())
        .unwrap()
        .is_empty());

    let exact = SearchQuery::new().with_name("Pikachu").in_round(5).exact(true);
    assert_eq!(search(&exact, file.path()).unwrap().len(), 5);

    // "chu" is inside both Pikachu and Raichu
    let shared = SearchQuery::new().with_name("CHU").in_round(5);
    let matches = search(&shared, file.path()).unwrap();
    assert_eq!(
        names(&matches),
        vec!["Pikachu", "Pikachu", "Pikachu", "Pikachu", "Pikachu", "Raichu", "Raichu"]
    );
}

#[test]
fn test_moves_fuzzy_and_exact() {
    let file = catalog_file(CATALOG_JSON);

    let fuzzy = SearchQuery::new().with_moves(["thunder"]).in_round(5);
    let matches = search(&fuzzy, file.path()).unwrap();
    assert_eq!(
        names(&matches),
        vec!["Pikachu", "Pikachu", "Pikachu", "Raichu", "Raichu", "Lapras"]
    );

    let exact_lower = fuzzy.clone().exact(true);
    assert!(search(&exact_lower, file.path()).unwrap().is_empty());

    let exact = SearchQuery::new()
        .with_moves(["Thunder"])
        .in_round(5)
        .exact(true);
    let matches = search(&exact, file.path()).unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].item, "Leftovers");
}

#[test]
fn test_item_fuzzy_and_exact() {
    let file = catalog_file(CATALOG_JSON);

    let fuzzy = SearchQuery::new().with_item("band").in_round(5);
    assert_eq!(
        names(&search(&fuzzy, file.path()).unwrap()),
        vec!["Pikachu", "Raichu"]
    );
    assert!(search(&fuzzy.exact(true), file.path()).unwrap().is_empty());

    let exact = SearchQuery::new()
        .with_item("Choice Band")
        .in_round(5)
        .exact(true);
    assert_eq!(search(&exact, file.path()).unwrap().len(), 2);
}

#[test]
fn test_all_parts_must_match() {
    let file = catalog_file(CATALOG_JSON);
    let query = SearchQuery::new()
        .with_name("Pikachu")
        .with_moves(["quick"])
        .with_item("ball")
        .in_round(5);

    let matches = search(&query, file.path()).unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].item, "Light Ball");

    let query = query.with_item("orb");
    assert!(search(&query, file.path()).unwrap().is_empty());
}

#[test]
fn test_regular_rounds_skip_round_and_previous_variant() {
    let file = catalog_file(CATALOG_JSON);

    let query = SearchQuery::new()
        .with_name("Pikachu")
        .exact(true)
        .in_round(3);
    let items: Vec<String> = search(&query, file.path())
        .unwrap()
        .into_iter()
        .map(|m| m.item)
        .collect();
    // Variants 2 and 3 are skipped
    assert_eq!(items, vec!["Light Ball", "Life Orb", "Focus Sash"]);

    // Round 1 skips variant 1 only
    let query = SearchQuery::new().with_name("chu").in_round(1);
    assert_eq!(
        names(&search(&query, file.path()).unwrap()),
        vec!["Pikachu", "Pikachu", "Pikachu", "Pikachu", "Raichu"]
    );
}

#[test]
fn test_fight_seven_rounds_use_next_variant() {
    let file = catalog_file(CATALOG_JSON);
    let base = SearchQuery::new().with_name("chu").fight_seven(true);

    let matches = search(&base.clone().in_round(2), file.path()).unwrap();
    assert_eq!(names(&matches), vec!["Pikachu"]);
    assert_eq!(matches[0].item, "Choice Band");

    let matches = search(&base.clone().in_round(1), file.path()).unwrap();
    assert_eq!(names(&matches), vec!["Pikachu", "Raichu"]);
    assert!(matches.iter().all(|m| m.item != "Light Ball"));

    // From round 4 every variant is in play
    assert_eq!(search(&base.in_round(4), file.path()).unwrap().len(), 7);
}

#[test]
fn test_results_follow_catalog_order() {
    let file = catalog_file(CATALOG_JSON);
    let query = SearchQuery::new()
        .with_moves(["Thunderbolt"])
        .exact(true)
        .in_round(9);

    let matches = search(&query, file.path()).unwrap();
    assert_eq!(names(&matches), vec!["Pikachu", "Pikachu", "Raichu", "Lapras"]);
    assert_eq!(matches[0].item, "Light Ball");
    assert_eq!(matches[1].item, "Life Orb");
}

#[test]
fn test_matches_carry_whole_variant() {
    let file = catalog_file(CATALOG_JSON);
    let query = SearchQuery::new().with_name("Pikachu").exact(true).in_round(5);
    let matches = search(&query, file.path()).unwrap();

    let first = matches[0].to_json();
    assert_eq!(first["nature"], json!("Timid"));
    assert_eq!(first["name"], json!("Pikachu"));
    assert_eq!(first["moves"][3], json!("Thunder Wave"));

    // The variant's own name field is replaced by the entity name
    let second = matches[1].to_json();
    assert_eq!(second["name"], json!("Pikachu"));
    assert!(!matches[1].extra.contains_key("name"));
}

#[test]
fn test_missing_catalog_returns_nothing() {
    let query = SearchQuery::new().with_name("Pikachu").in_round(5);
    let matches = search(&query, missing_catalog_path()).unwrap();
    assert!(matches.is_empty());
}

#[test]
fn test_malformed_catalog_is_an_error() {
    let query = SearchQuery::new().with_name("Pikachu").in_round(5);

    let broken = catalog_file("{ \"Pikachu\": ");
    assert!(matches!(
        search(&query, broken.path()),
        Err(CatalogError::Malformed { .. })
    ));

    let bad_entity = catalog_file(r#"{"Pikachu": {"hp": 35, "variants": "none"}}"#);
    assert!(matches!(
        search(&query, bad_entity.path()),
        Err(CatalogError::MalformedEntity { .. })
    ));
}

#[test]
fn test_repeated_search_is_identical() {
    let file = catalog_file(CATALOG_JSON);
    let query = SearchQuery::new().with_moves(["attack"]).in_round(5);

    let first = search(&query, file.path()).unwrap();
    let second = search(&query, file.path()).unwrap();
    assert!(!first.is_empty());
    assert_eq!(first, second);

    // A loaded catalog gives the same answer
    let catalog = Catalog::load(file.path()).unwrap().unwrap();
    assert_eq!(catalog.search(&query), first);
}
