//! # View State
//!
//! The search and filter state that drives the gallery.
//!
//! The state is owned by whichever view sits on top (a single command, or the
//! interactive browse session) and handed to the catalog read-only. Every user
//! action is expressed as an [`Intent`] and applied with [`ViewState::apply`],
//! which keeps the transitions pure and testable without a terminal.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::models::plant::AyushSystem;

/// Restricts the gallery to one system. Matching is exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SystemFilter {
    #[default]
    Any,
    Only(AyushSystem),
}

impl SystemFilter {
    pub fn matches(&self, system: AyushSystem) -> bool {
        match self {
            Self::Any => true,
            Self::Only(wanted) => *wanted == system,
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

impl FromStr for SystemFilter {
    type Err = CatalogError;

    /// `"all"` and `"any"` clear the filter, anything else must name a system.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if is_wildcard(trimmed) {
            return Ok(Self::Any);
        }
        trimmed.parse().map(Self::Only)
    }
}

impl fmt::Display for SystemFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("All Systems"),
            Self::Only(system) => write!(f, "{system}"),
        }
    }
}

/// Restricts the gallery to plants with a matching use tag.
///
/// Unlike [`SystemFilter`] this is a case-insensitive substring match, so
/// `"digestive"` selects "Digestive Health".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UseFilter {
    #[default]
    Any,
    Containing(String),
}

impl UseFilter {
    pub fn matches(&self, uses: &[String]) -> bool {
        match self {
            Self::Any => true,
            Self::Containing(needle) => {
                let needle = needle.to_lowercase();
                uses.iter().any(|u| u.to_lowercase().contains(&needle))
            }
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

impl From<&str> for UseFilter {
    fn from(s: &str) -> Self {
        let trimmed = s.trim();
        if trimmed.is_empty() || is_wildcard(trimmed) {
            Self::Any
        } else {
            Self::Containing(trimmed.to_string())
        }
    }
}

impl FromStr for UseFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for UseFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("All Uses"),
            Self::Containing(needle) => f.write_str(needle),
        }
    }
}

fn is_wildcard(s: &str) -> bool {
    s.eq_ignore_ascii_case("all") || s.eq_ignore_ascii_case("any")
}

/// How the gallery lays out its cards. Has no effect on which plants are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl FromStr for ViewMode {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grid" => Ok(Self::Grid),
            "list" => Ok(Self::List),
            _ => Err(CatalogError::UnknownViewMode(s.to_string())),
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid => f.write_str("grid"),
            Self::List => f.write_str("list"),
        }
    }
}

/// A single user action against the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    SetQuery(String),
    SetSystem(SystemFilter),
    SetUse(UseFilter),
    SetViewMode(ViewMode),
    /// Resets the system and use filters. The query is kept.
    ClearFilters,
    Open(String),
    Close,
    ToggleBookmark(String),
    ToggleLike(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewState {
    pub query: String,
    pub system: SystemFilter,
    pub use_filter: UseFilter,
    pub view_mode: ViewMode,
    /// Id of the plant whose detail view is open.
    pub selected: Option<String>,
    pub bookmarked: BTreeSet<String>,
    pub liked: BTreeSet<String>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    #[must_use]
    pub fn with_system(mut self, system: SystemFilter) -> Self {
        self.system = system;
        self
    }

    #[must_use]
    pub fn with_use(mut self, use_filter: UseFilter) -> Self {
        self.use_filter = use_filter;
        self
    }

    #[must_use]
    pub fn with_view_mode(mut self, view_mode: ViewMode) -> Self {
        self.view_mode = view_mode;
        self
    }

    pub fn clear_filters(&mut self) {
        self.system = SystemFilter::Any;
        self.use_filter = UseFilter::Any;
    }

    /// True when the system or use filter is set. The query does not count.
    pub fn has_active_filters(&self) -> bool {
        !self.system.is_any() || !self.use_filter.is_any()
    }

    /// Returns the state that results from performing `intent`.
    #[must_use]
    pub fn apply(mut self, intent: Intent) -> Self {
        match intent {
            Intent::SetQuery(query) => self.query = query,
            Intent::SetSystem(system) => self.system = system,
            Intent::SetUse(use_filter) => self.use_filter = use_filter,
            Intent::SetViewMode(view_mode) => self.view_mode = view_mode,
            Intent::ClearFilters => self.clear_filters(),
            Intent::Open(id) => self.selected = Some(id),
            Intent::Close => self.selected = None,
            Intent::ToggleBookmark(id) => toggle(&mut self.bookmarked, id),
            Intent::ToggleLike(id) => toggle(&mut self.liked, id),
        }
        self
    }
}

fn toggle(set: &mut BTreeSet<String>, id: String) {
    if !set.remove(&id) {
        set.insert(id);
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_filter_from_str() {
        assert_eq!("all".parse::<SystemFilter>(), Ok(SystemFilter::Any));
        assert_eq!("ANY".parse::<SystemFilter>(), Ok(SystemFilter::Any));
        assert_eq!(
            "unani".parse::<SystemFilter>(),
            Ok(SystemFilter::Only(AyushSystem::Unani))
        );
        assert!("tai chi".parse::<SystemFilter>().is_err());
    }

    #[test]
    fn test_system_filter_is_exact() {
        let filter = SystemFilter::Only(AyushSystem::Yoga);
        assert!(filter.matches(AyushSystem::Yoga));
        assert!(!filter.matches(AyushSystem::Naturopathy));
        assert!(SystemFilter::Any.matches(AyushSystem::Siddha));
    }

    #[test]
    fn test_use_filter_is_substring() {
        let uses = vec!["Digestive Health".to_string(), "Nausea Relief".to_string()];
        assert!(UseFilter::from("digestive").matches(&uses));
        assert!(UseFilter::from("RELIEF").matches(&uses));
        assert!(!UseFilter::from("skin").matches(&uses));
        assert!(UseFilter::Any.matches(&uses));
    }

    #[test]
    fn test_use_filter_wildcards() {
        assert_eq!(UseFilter::from("all"), UseFilter::Any);
        assert_eq!(UseFilter::from("   "), UseFilter::Any);
        assert_eq!(
            UseFilter::from(" Immunity "),
            UseFilter::Containing("Immunity".into())
        );
    }

    #[test]
    fn test_view_mode_from_str() {
        assert_eq!("List".parse::<ViewMode>(), Ok(ViewMode::List));
        assert_eq!("grid".parse::<ViewMode>(), Ok(ViewMode::Grid));
        assert!("table".parse::<ViewMode>().is_err());
    }

    #[test]
    fn test_clear_filters_keeps_query() {
        let state = ViewState::new()
            .with_query("tulsi")
            .with_system(SystemFilter::Only(AyushSystem::Ayurveda))
            .with_use(UseFilter::from("immunity"))
            .apply(Intent::ClearFilters);

        assert_eq!(state.query, "tulsi");
        assert_eq!(state.system, SystemFilter::Any);
        assert_eq!(state.use_filter, UseFilter::Any);
        assert!(!state.has_active_filters());
    }

    #[test]
    fn test_has_active_filters_ignores_query() {
        let state = ViewState::new().with_query("neem");
        assert!(!state.has_active_filters());
        let state = state.with_use(UseFilter::from("skin"));
        assert!(state.has_active_filters());
    }

    #[test]
    fn test_open_and_close() {
        let state = ViewState::new().apply(Intent::Open("3".into()));
        assert_eq!(state.selected.as_deref(), Some("3"));
        let state = state.apply(Intent::Close);
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_toggles_flip() {
        let state = ViewState::new()
            .apply(Intent::ToggleBookmark("1".into()))
            .apply(Intent::ToggleLike("2".into()))
            .apply(Intent::ToggleLike("1".into()));
        assert!(state.bookmarked.contains("1"));
        assert!(state.liked.contains("1") && state.liked.contains("2"));

        let state = state.apply(Intent::ToggleBookmark("1".into()));
        assert!(state.bookmarked.is_empty());
    }

    #[test]
    fn test_view_mode_does_not_touch_filters() {
        let before = ViewState::new().with_query("ginger");
        let after = before.clone().apply(Intent::SetViewMode(ViewMode::List));
        assert_eq!(after.query, before.query);
        assert_eq!(after.view_mode, ViewMode::List);
    }

    #[test]
    fn test_state_serializes() {
        let state = ViewState::new()
            .with_system(SystemFilter::Only(AyushSystem::Unani))
            .apply(Intent::ToggleBookmark("7".into()));
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["system"]["Only"], "Unani");
        assert_eq!(json["viewMode"], "grid");
        assert_eq!(json["bookmarked"][0], "7");
    }
}
