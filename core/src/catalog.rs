//! # Catalog Store
//!
//! Holds the plant and tour collections for the lifetime of the process.
//!
//! The collections are validated once when the catalog is built and are never
//! mutated afterwards. All queries are pure reads: the current search/filter
//! state lives in the caller's [`ViewState`] and is passed in on every call.

use std::collections::HashSet;

use herbarium_common::error::CatalogError;
use herbarium_common::models::{PlantRecord, TourRecord, ViewState};
use tracing::{debug, trace};

use crate::filter::{self, FilterOptions, FilterSummary};
use crate::source::{CatalogSource, EmbeddedSource};

#[derive(Debug, Clone)]
pub struct Catalog {
    plants: Vec<PlantRecord>,
    tours: Vec<TourRecord>,
    options: FilterOptions,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids and plants without uses.
    pub fn new(plants: Vec<PlantRecord>, tours: Vec<TourRecord>) -> Result<Self, CatalogError> {
        ensure_unique(plants.iter().map(|p| p.id.as_str()))?;
        ensure_unique(tours.iter().map(|t| t.id.as_str()))?;
        if let Some(plant) = plants.iter().find(|p| p.uses.is_empty()) {
            return Err(CatalogError::EmptyUses(plant.id.clone()));
        }

        let options = filter::derived_filter_options(&plants);
        debug!(
            plants = plants.len(),
            tours = tours.len(),
            uses = options.uses.len(),
            "catalog ready"
        );
        Ok(Self {
            plants,
            tours,
            options,
        })
    }

    pub fn from_source(source: &dyn CatalogSource) -> Result<Self, CatalogError> {
        Self::new(source.plants(), source.tours())
    }

    /// The compiled-in sample collection.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_source(&EmbeddedSource)
    }

    pub fn plants(&self) -> &[PlantRecord] {
        &self.plants
    }

    pub fn tours(&self) -> &[TourRecord] {
        &self.tours
    }

    /// The plants visible under `state`, in catalog order.
    pub fn filter(&self, state: &ViewState) -> Vec<&PlantRecord> {
        let visible =
            filter::filter_plants(&self.plants, &state.query, &state.system, &state.use_filter);
        trace!(query = %state.query, visible = visible.len(), "filtered gallery");
        visible
    }

    /// Selectable filter values. Computed once, since the collection never changes.
    pub fn filter_options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn summary(&self, state: &ViewState) -> FilterSummary {
        FilterSummary::new(self.filter(state).len(), self.plants.len(), state)
    }

    pub fn find_plant(&self, id: &str) -> Result<&PlantRecord, CatalogError> {
        self.plants
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CatalogError::not_found(id))
    }

    pub fn find_tour(&self, id: &str) -> Result<&TourRecord, CatalogError> {
        self.tours
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| CatalogError::not_found(id))
    }
}

fn ensure_unique<'a>(ids: impl Iterator<Item = &'a str>) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId(id.to_string()));
        }
    }
    Ok(())
}
