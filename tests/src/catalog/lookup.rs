#![cfg(test)]
use herbarium_common::error::CatalogError;
use herbarium_common::models::{AyushSystem, ViewState};
use herbarium_core::Catalog;

#[test]
fn known_id_resolves() {
    let catalog = Catalog::embedded().unwrap();
    let plant = catalog.find_plant("1").unwrap();
    assert_eq!(plant.name, "Turmeric (Haldi)");
    assert_eq!(plant.system, AyushSystem::Ayurveda);
}

#[test]
fn unknown_id_is_not_found() {
    let catalog = Catalog::embedded().unwrap();
    assert_eq!(
        catalog.find_plant("999").unwrap_err(),
        CatalogError::NotFound { id: "999".into() }
    );
    assert!(catalog.find_tour("999").is_err());
}

#[test]
fn embedded_catalog_is_whole() {
    let catalog = Catalog::embedded().unwrap();
    assert_eq!(catalog.plants().len(), 12);
    assert_eq!(catalog.tours().len(), 3);
    assert_eq!(catalog.filter(&ViewState::new()).len(), 12);
}

#[test]
fn records_serialize_with_camel_case_keys() {
    let catalog = Catalog::embedded().unwrap();
    let json = serde_json::to_value(catalog.find_plant("1").unwrap()).unwrap();
    assert_eq!(json["botanicalName"], "Curcuma longa");
    assert_eq!(json["system"], "Ayurveda");
    assert!(json["cultivationMethod"].is_string());
}

#[test]
fn view_state_survives_json() {
    let state: ViewState = serde_json::from_str(r#"{"query":"tulsi","viewMode":"list"}"#).unwrap();
    assert_eq!(state.query, "tulsi");
    assert!(!state.has_active_filters());
    assert_eq!(state.selected, None);
}
