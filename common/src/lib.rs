//! # Herbarium Common
//!
//! Types shared by every crate in the workspace.
//!
//! * **[`models`]**: plant and tour records, the closed enums they use, and the
//!   view state the presentation layer owns.
//! * **[`config`]**: runtime configuration, loaded from an optional TOML file.
//! * **[`error`]**: the error types returned by the library crates.

pub mod config;
pub mod error;
pub mod models;
