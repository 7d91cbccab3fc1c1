//! # Catalog Models
//!
//! The data structures the catalog is made of.
//!
//! ## Core Entities
//! * [`plant::PlantRecord`]: a medicinal plant shown in the gallery.
//! * [`tour::TourRecord`]: a themed virtual tour.
//!
//! ## Value Objects
//! * [`plant::AyushSystem`] and [`tour::Difficulty`]: closed enumerations.
//! * [`descriptor::Descriptor`]: how an enum value is labelled and toned on screen.
//! * [`view::ViewState`]: the transient search/filter state owned by the top view.
//!
//! Records are immutable once seeded. Nothing in here performs IO.

pub mod descriptor;
pub mod plant;
pub mod tour;
pub mod view;

pub use descriptor::{Descriptor, Tone};
pub use plant::{AyushSystem, PlantRecord};
pub use tour::{Difficulty, TourRecord};
pub use view::{Intent, SystemFilter, UseFilter, ViewMode, ViewState};
