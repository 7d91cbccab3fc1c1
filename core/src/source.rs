//! # Catalog Sources
//!
//! A [`CatalogSource`] supplies the records the [`crate::Catalog`] is built
//! from. The catalog depends on this trait rather than on the compiled-in
//! data, so tests and alternative front ends can inject their own collections.

use herbarium_common::models::{PlantRecord, TourRecord};

mod embedded;

pub use embedded::EmbeddedSource;

pub trait CatalogSource {
    fn plants(&self) -> Vec<PlantRecord>;
    fn tours(&self) -> Vec<TourRecord>;
}

/// A source backed by collections handed in at construction time.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    plants: Vec<PlantRecord>,
    tours: Vec<TourRecord>,
}

impl StaticSource {
    pub fn new(plants: Vec<PlantRecord>, tours: Vec<TourRecord>) -> Self {
        Self { plants, tours }
    }
}

impl CatalogSource for StaticSource {
    fn plants(&self) -> Vec<PlantRecord> {
        self.plants.clone()
    }

    fn tours(&self) -> Vec<TourRecord> {
        self.tours.clone()
    }
}
