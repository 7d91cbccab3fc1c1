//! # Herbarium Core
//!
//! The catalog logic behind every view.
//!
//! * **[`filter`]**: the pure search/filter predicates and derived filter options.
//! * **[`catalog`]**: the read-only store built once at startup.
//! * **[`source`]**: where the records come from. Only the embedded sample set ships.
//! * **[`detail`]**, **[`landing`]**, **[`about`]**: static copy the views display.
//! * **[`model`]**: primitive geometry for the decorative plant model.
//!
//! Presentation code calls into this crate and renders whatever comes back.
//! Nothing here touches the terminal.

pub mod about;
pub mod catalog;
pub mod detail;
pub mod filter;
pub mod landing;
pub mod model;
pub mod source;

pub use catalog::Catalog;
pub use filter::{FilterOptions, FilterSummary, derived_filter_options, filter_plants};
