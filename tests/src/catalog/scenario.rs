#![cfg(test)]
use herbarium_common::models::{
    AyushSystem, Intent, PlantRecord, SystemFilter, UseFilter, ViewState,
};
use herbarium_core::Catalog;

/*************************************************************
                Two-plant collection scenarios
**************************************************************/

#[test]
fn partial_name_finds_turmeric() {
    assert_eq!(names(&catalog(), &ViewState::new().with_query("turm")), ["Turmeric"]);
}

#[test]
fn system_filter_finds_peppermint() {
    let state = ViewState::new().with_system(SystemFilter::Only(AyushSystem::Unani));
    assert_eq!(names(&catalog(), &state), ["Peppermint"]);
}

#[test]
fn use_filter_finds_peppermint() {
    let state = ViewState::new().with_use(UseFilter::from("digestive"));
    assert_eq!(names(&catalog(), &state), ["Peppermint"]);
}

#[test]
fn unmatched_query_is_empty_not_error() {
    let catalog = catalog();
    let state = ViewState::new().with_query("xyz");
    assert!(catalog.filter(&state).is_empty());
    let summary = catalog.summary(&state);
    assert!(summary.is_empty());
    assert_eq!(summary.total, 2);
}

#[test]
fn query_matches_uses_too() {
    assert_eq!(
        names(&catalog(), &ViewState::new().with_query("INFLAMMATORY")),
        ["Turmeric"]
    );
}

#[test]
fn system_filter_is_exact_while_use_filter_is_substring() {
    let catalog = catalog();
    // "health" is only part of a use tag, yet still matches.
    let state = ViewState::new().with_use(UseFilter::from("health"));
    assert_eq!(names(&catalog, &state), ["Peppermint"]);
    assert!("Una".parse::<SystemFilter>().is_err());
}

#[test]
fn intents_drive_the_gallery() {
    let catalog = catalog();
    let state = ViewState::new()
        .apply(Intent::SetQuery("p".into()))
        .apply(Intent::SetSystem(SystemFilter::Only(AyushSystem::Ayurveda)));
    assert!(names(&catalog, &state).is_empty());

    let state = state.apply(Intent::ClearFilters);
    assert_eq!(state.query, "p");
    assert_eq!(names(&catalog, &state), ["Peppermint"]);
}

#[test]
fn options_are_derived_in_first_seen_order() {
    let catalog = catalog();
    let options = catalog.filter_options();
    assert_eq!(options.systems, [AyushSystem::Ayurveda, AyushSystem::Unani]);
    assert_eq!(
        options.uses,
        ["Anti-inflammatory", "Skin Care", "Digestive Health", "Headache Relief"]
    );
}

/*************************************************************
                       Fixtures
**************************************************************/

fn catalog() -> Catalog {
    Catalog::new(
        vec![
            plant("1", "Turmeric", "Curcuma longa", AyushSystem::Ayurveda, &["Anti-inflammatory", "Skin Care"]),
            plant("2", "Peppermint", "Mentha piperita", AyushSystem::Unani, &["Digestive Health", "Headache Relief"]),
        ],
        Vec::new(),
    )
    .unwrap()
}

fn plant(id: &str, name: &str, botanical: &str, system: AyushSystem, uses: &[&str]) -> PlantRecord {
    PlantRecord {
        id: id.into(),
        name: name.into(),
        botanical_name: botanical.into(),
        image: format!("/assets/{}.jpg", name.to_lowercase()),
        uses: uses.iter().map(|u| u.to_string()).collect(),
        system,
        region: "India".into(),
        description: String::new(),
        cultivation_method: String::new(),
    }
}

fn names<'a>(catalog: &'a Catalog, state: &ViewState) -> Vec<&'a str> {
    catalog.filter(state).into_iter().map(|p| p.name.as_str()).collect()
}
