//! # Gallery Filtering
//!
//! The visible subset of the gallery is the logical AND of three independent
//! predicates:
//!
//! 1. **Text**: the lower-cased query is a substring of the name, the botanical
//!    name, or any use tag. An empty query matches everything.
//! 2. **System**: exact match against [`SystemFilter`].
//! 3. **Use**: substring match against [`UseFilter`].
//!
//! Filtering never reorders and never fails; no match is an empty `Vec`.

use std::collections::HashSet;

use herbarium_common::models::{AyushSystem, PlantRecord, SystemFilter, UseFilter, ViewState};

/// Returns the plants matching all three predicates, in input order.
pub fn filter_plants<'a>(
    all: &'a [PlantRecord],
    query: &str,
    system: &SystemFilter,
    use_filter: &UseFilter,
) -> Vec<&'a PlantRecord> {
    let query = query.to_lowercase();
    all.iter()
        .filter(|plant| {
            matches_query(plant, &query) && system.matches(plant.system) && use_filter.matches(&plant.uses)
        })
        .collect()
}

/// `query` must already be lower-cased.
fn matches_query(plant: &PlantRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    plant.name.to_lowercase().contains(query)
        || plant.botanical_name.to_lowercase().contains(query)
        || plant.uses.iter().any(|u| u.to_lowercase().contains(query))
}

/// The values offered in the system and use selection menus.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterOptions {
    pub systems: Vec<AyushSystem>,
    pub uses: Vec<String>,
}

/// Collects the distinct systems and uses present in `all`, in first-seen order.
pub fn derived_filter_options(all: &[PlantRecord]) -> FilterOptions {
    let mut seen_systems: HashSet<AyushSystem> = HashSet::new();
    let mut seen_uses: HashSet<&str> = HashSet::new();
    let mut options = FilterOptions::default();

    for plant in all {
        if seen_systems.insert(plant.system) {
            options.systems.push(plant.system);
        }
        for use_tag in &plant.uses {
            if seen_uses.insert(use_tag.as_str()) {
                options.uses.push(use_tag.clone());
            }
        }
    }
    options
}

/// What the gallery header shows above the results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSummary {
    pub shown: usize,
    pub total: usize,
    pub query: Option<String>,
    pub system: Option<AyushSystem>,
    pub use_filter: Option<String>,
}

impl FilterSummary {
    pub fn new(shown: usize, total: usize, state: &ViewState) -> Self {
        Self {
            shown,
            total,
            query: (!state.query.is_empty()).then(|| state.query.clone()),
            system: match state.system {
                SystemFilter::Any => None,
                SystemFilter::Only(system) => Some(system),
            },
            use_filter: match &state.use_filter {
                UseFilter::Any => None,
                UseFilter::Containing(needle) => Some(needle.clone()),
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.shown == 0
    }

    /// Active badges as `(label, value)` pairs, in display order.
    pub fn badges(&self) -> Vec<(&'static str, String)> {
        let mut badges = Vec::new();
        if let Some(query) = &self.query {
            badges.push(("Search", format!("\"{query}\"")));
        }
        if let Some(system) = self.system {
            badges.push(("System", system.to_string()));
        }
        if let Some(use_filter) = &self.use_filter {
            badges.push(("Use", use_filter.clone()));
        }
        badges
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
