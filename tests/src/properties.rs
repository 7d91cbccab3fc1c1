#![cfg(test)]
use std::collections::BTreeSet;

use herbarium_common::models::{AyushSystem, PlantRecord, SystemFilter, UseFilter, ViewState};
use herbarium_core::{derived_filter_options, filter_plants};
use proptest::prelude::*;
use proptest::sample::select;

const WORDS: &[&str] = &[
    "Turmeric",
    "Curcuma longa",
    "Neem",
    "Ocimum sanctum",
    "Peppermint",
    "Digestive Health",
    "Skin Care",
    "Immunity",
    "Stress Relief",
    "Anti-inflammatory",
];

fn system() -> impl Strategy<Value = AyushSystem> {
    select(AyushSystem::ALL.to_vec())
}

fn plant() -> impl Strategy<Value = PlantRecord> {
    (
        select(WORDS),
        select(WORDS),
        system(),
        prop::collection::vec(select(WORDS), 1..4),
    )
        .prop_map(|(name, botanical, system, uses)| PlantRecord {
            id: String::new(),
            name: name.to_string(),
            botanical_name: botanical.to_string(),
            image: String::new(),
            uses: uses.into_iter().map(str::to_string).collect(),
            system,
            region: "India".into(),
            description: String::new(),
            cultivation_method: String::new(),
        })
}

fn collection() -> impl Strategy<Value = Vec<PlantRecord>> {
    prop::collection::vec(plant(), 0..16).prop_map(|mut plants| {
        for (idx, plant) in plants.iter_mut().enumerate() {
            plant.id = (idx + 1).to_string();
        }
        plants
    })
}

fn query() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[a-zA-Z ]{1,4}"]
}

fn system_filter() -> impl Strategy<Value = SystemFilter> {
    prop_oneof![Just(SystemFilter::Any), system().prop_map(SystemFilter::Only)]
}

fn use_filter() -> impl Strategy<Value = UseFilter> {
    prop_oneof![Just(UseFilter::Any), "[a-z]{1,3}".prop_map(UseFilter::Containing)]
}

fn ids(plants: &[&PlantRecord]) -> Vec<String> {
    plants.iter().map(|p| p.id.clone()).collect()
}

proptest! {
    #[test]
    fn no_filter_returns_everything_in_order(plants in collection()) {
        let visible = filter_plants(&plants, "", &SystemFilter::Any, &UseFilter::Any);
        let all: Vec<&PlantRecord> = plants.iter().collect();
        prop_assert_eq!(visible, all);
    }

    #[test]
    fn filtering_is_idempotent(
        plants in collection(),
        q in query(),
        s in system_filter(),
        u in use_filter()
    ) {
        let once = filter_plants(&plants, &q, &s, &u);
        let owned: Vec<PlantRecord> = once.iter().map(|p| (*p).clone()).collect();
        let twice = filter_plants(&owned, &q, &s, &u);
        prop_assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn results_keep_input_order(
        plants in collection(),
        q in query(),
        s in system_filter(),
        u in use_filter()
    ) {
        let positions: Vec<usize> = filter_plants(&plants, &q, &s, &u)
            .iter()
            .filter_map(|p| plants.iter().position(|c| c.id == p.id))
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn every_result_contains_the_query(plants in collection(), q in "[a-zA-Z]{1,3}") {
        let needle = q.to_lowercase();
        for plant in filter_plants(&plants, &q, &SystemFilter::Any, &UseFilter::Any) {
            prop_assert!(
                plant.name.to_lowercase().contains(&needle)
                    || plant.botanical_name.to_lowercase().contains(&needle)
                    || plant.uses.iter().any(|u| u.to_lowercase().contains(&needle))
            );
        }
    }

    #[test]
    fn every_result_has_the_filtered_system(plants in collection(), s in system()) {
        for plant in filter_plants(&plants, "", &SystemFilter::Only(s), &UseFilter::Any) {
            prop_assert_eq!(plant.system, s);
        }
    }

    #[test]
    fn every_result_has_a_matching_use(plants in collection(), needle in "[a-z]{1,3}") {
        let filter = UseFilter::Containing(needle.clone());
        for plant in filter_plants(&plants, "", &SystemFilter::Any, &filter) {
            prop_assert!(plant.uses.iter().any(|u| u.to_lowercase().contains(&needle)));
        }
    }

    #[test]
    fn derived_systems_are_distinct_and_complete(plants in collection()) {
        let options = derived_filter_options(&plants);
        let distinct: BTreeSet<AyushSystem> = options.systems.iter().copied().collect();
        let present: BTreeSet<AyushSystem> = plants.iter().map(|p| p.system).collect();
        prop_assert_eq!(distinct.len(), options.systems.len());
        prop_assert_eq!(distinct, present);
    }

    #[test]
    fn derived_uses_are_distinct_and_complete(plants in collection()) {
        let options = derived_filter_options(&plants);
        let distinct: BTreeSet<&String> = options.uses.iter().collect();
        let present: BTreeSet<&String> = plants.iter().flat_map(|p| &p.uses).collect();
        prop_assert_eq!(distinct.len(), options.uses.len());
        prop_assert_eq!(distinct, present);
    }

    #[test]
    fn clear_filters_keeps_the_query(q in query(), s in system_filter(), u in use_filter()) {
        let mut state = ViewState::new().with_query(q.clone()).with_system(s).with_use(u);
        state.clear_filters();
        prop_assert!(!state.has_active_filters());
        prop_assert_eq!(&state.query, &q);
    }
}
