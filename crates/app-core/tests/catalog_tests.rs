// Catalog filtering: order preservation, the two predicates, the empty
// state, and the id fallback rule.

use app_core::catalog::{Catalog, StyleFilter, STYLE_FILTERS};
use app_core::types::TattooStyle;

fn ids(designs: &[&app_core::types::TattooDesign]) -> Vec<&'static str> {
    designs.iter().map(|d| d.id).collect()
}

#[test]
fn unfiltered_returns_full_catalog_in_order() {
    let catalog = Catalog::builtin();
    let all = catalog.filter("", StyleFilter::All);
    assert_eq!(
        ids(&all),
        vec!["rose", "dragon", "snake", "lotus", "wave", "mask"]
    );
}

#[test]
fn style_filter_keeps_only_that_style() {
    let catalog = Catalog::builtin();
    let blackwork = catalog.filter("", StyleFilter::Only(TattooStyle::Blackwork));
    assert_eq!(ids(&blackwork), vec!["snake", "mask"]);
    for design in &blackwork {
        assert_eq!(design.style, TattooStyle::Blackwork);
    }
    // nothing that matches was dropped
    let excluded = catalog
        .items()
        .iter()
        .filter(|d| !blackwork.iter().any(|kept| kept.id == d.id));
    for design in excluded {
        assert_ne!(design.style, TattooStyle::Blackwork);
    }
}

#[test]
fn search_matches_name_style_token_and_tags() {
    let catalog = Catalog::builtin();
    assert_eq!(ids(&catalog.filter("bloom", StyleFilter::All)), vec!["rose"]);
    assert_eq!(ids(&catalog.filter("japan", StyleFilter::All)), vec!["dragon"]);
    assert_eq!(ids(&catalog.filter("zen", StyleFilter::All)), vec!["lotus"]);
}

#[test]
fn search_is_case_insensitive_and_trimmed() {
    let catalog = Catalog::builtin();
    assert_eq!(ids(&catalog.filter("  ROSE ", StyleFilter::All)), vec!["rose"]);
}

#[test]
fn both_predicates_must_hold() {
    let catalog = Catalog::builtin();
    // "sea" only tags the linework wave; the blackwork filter empties it
    assert!(catalog
        .filter("sea", StyleFilter::Only(TattooStyle::Blackwork))
        .is_empty());
    assert_eq!(
        ids(&catalog.filter("sea", StyleFilter::Only(TattooStyle::Linework))),
        vec!["wave"]
    );
}

#[test]
fn results_are_a_subsequence_of_the_catalog() {
    let catalog = Catalog::builtin();
    for (filter, _label) in STYLE_FILTERS {
        for search in ["", "a", "o", "dark", "такого-нет"] {
            let results = catalog.filter(search, filter);
            let mut last_index = None;
            for design in &results {
                let index = catalog
                    .items()
                    .iter()
                    .position(|d| d.id == design.id)
                    .expect("result came from the catalog");
                if let Some(last) = last_index {
                    assert!(index > last, "order broken for {search:?}");
                }
                last_index = Some(index);
            }
        }
    }
}

#[test]
fn no_match_is_an_empty_result_not_an_error() {
    let catalog = Catalog::builtin();
    assert!(catalog.filter("xyzzy", StyleFilter::All).is_empty());
}

#[test]
fn unknown_id_resolves_to_first_entry() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.resolve("wave").id, "wave");
    assert_eq!(catalog.resolve("no-such-design").id, catalog.first().id);
    assert!(catalog.get("no-such-design").is_none());
}

#[test]
fn style_chip_table_covers_every_style_once() {
    assert_eq!(STYLE_FILTERS[0].0, StyleFilter::All);
    for style in TattooStyle::ALL {
        let count = STYLE_FILTERS
            .iter()
            .filter(|(f, _)| *f == StyleFilter::Only(style))
            .count();
        assert_eq!(count, 1, "{style} chip");
    }
}

#[test]
fn style_filter_tokens_round_trip() {
    for (filter, _label) in STYLE_FILTERS {
        assert_eq!(StyleFilter::from_token(filter.token()).unwrap(), filter);
    }
    assert!(StyleFilter::from_token("sepia").is_err());
}
