use food_swap_rs::models::{Food, MacroClass};
use food_swap_rs::search::{normalize, SearchIndex};

fn make_food(id: u32, name: &str, p: f64, c: f64, f: f64, class: MacroClass) -> Food {
    Food {
        id,
        name: name.to_string(),
        protein: p,
        carbs: c,
        fat: f,
        class,
    }
}

fn sample_catalog() -> Vec<Food> {
    vec![
        make_food(0, "Abacate", 1.2, 6.0, 8.4, MacroClass::Fat),
        make_food(1, "Açaí", 0.8, 6.2, 3.9, MacroClass::Fat),
        make_food(2, "Banana", 1.1, 23.0, 0.3, MacroClass::Carb),
        make_food(3, "Batata Doce", 1.3, 18.4, 0.1, MacroClass::Carb),
        make_food(4, "Pão Francês", 8.0, 58.6, 3.1, MacroClass::Carb),
    ]
}

#[test]
fn test_normalize_accent_and_case_insensitive() {
    assert_eq!(normalize("Açaí"), normalize("acai"));
    assert_eq!(normalize("AÇAÍ"), normalize("acai"));
    assert_eq!(normalize("Pão Francês"), "pao frances");
}

#[test]
fn test_normalize_idempotent() {
    for name in ["Açaí", "Pão Francês", "Batata Doce", ""] {
        let once = normalize(name);
        assert_eq!(normalize(&once), once);
    }
}

#[test]
fn test_empty_query_returns_all_in_catalog_order() {
    let index = SearchIndex::build(sample_catalog());

    let all = index.search("", None);
    let ids: Vec<u32> = all.iter().map(|e| e.food.id).collect();
    assert_eq!(ids, vec![0, 1, 2, 3, 4]);

    let minus_banana = index.search("", Some(2));
    let ids: Vec<u32> = minus_banana.iter().map(|e| e.food.id).collect();
    assert_eq!(ids, vec![0, 1, 3, 4]);
}

#[test]
fn test_multi_term_query_requires_every_term() {
    let index = SearchIndex::build(sample_catalog());

    let hits = index.search("ba na", None);
    let names: Vec<&str> = hits.iter().map(|e| e.food.name.as_str()).collect();
    assert_eq!(names, vec!["Banana"]);
}

#[test]
fn test_substring_matching_not_just_prefix() {
    let index = SearchIndex::build(sample_catalog());

    let hits = index.search("oce", None);
    let names: Vec<&str> = hits.iter().map(|e| e.food.name.as_str()).collect();
    assert_eq!(names, vec!["Batata Doce"]);
}

#[test]
fn test_accented_query_matches_entry() {
    let index = SearchIndex::build(sample_catalog());

    assert_eq!(index.search("açai", None).len(), 1);
    assert_eq!(index.search("acai", None).len(), 1);
    assert_eq!(index.search("pão", None).len(), 1);
    assert_eq!(index.search("pao", None).len(), 1);
}

#[test]
fn test_exclude_id_zero_is_still_an_exclusion() {
    let index = SearchIndex::build(sample_catalog());

    let hits = index.search("a", Some(0));
    assert!(!hits.is_empty());
    assert!(hits.iter().all(|e| e.food.id != 0));
}

#[test]
fn test_results_keep_catalog_order() {
    let index = SearchIndex::build(sample_catalog());

    let hits = index.search("a", None);
    let ids: Vec<u32> = hits.iter().map(|e| e.food.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
}

#[test]
fn test_whitespace_runs_between_terms() {
    let index = SearchIndex::build(sample_catalog());

    assert_eq!(index.search("  batata   doce  ", None).len(), 1);
}
