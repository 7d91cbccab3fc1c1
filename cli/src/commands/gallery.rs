use colored::*;
use herbarium_common::config::Config;
use herbarium_common::models::{PlantRecord, ViewMode, ViewState};
use herbarium_core::{Catalog, FilterSummary};
use tracing::debug;

use crate::hprint;
use crate::terminal::{colors, format, print};

/// Display columns taken by one card.
pub const CARD_WIDTH: usize = 34;
const MAX_COLUMNS: usize = 3;
const FALLBACK_COLUMNS: usize = 2;


pub fn gallery(catalog: &Catalog, state: &ViewState, cfg: &Config, json: bool) -> anyhow::Result<()> {
    if json {
        let visible: Vec<&PlantRecord> = catalog.filter(state);
        hprint!(&serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }
    render(catalog, state, cfg, &clear_hint(state));
    Ok(())
}

/// The command that resets the system and use filters while keeping the search.
pub fn clear_hint(state: &ViewState) -> String {
    if state.query.is_empty() {
        "herbarium gallery --system all --use all".to_string()
    } else {
        format!("herbarium gallery \"{}\" --system all --use all", state.query)
    }
}

/// Prints the gallery for `state`. `clear_hint` is how the caller resets filters.
pub fn render(catalog: &Catalog, state: &ViewState, cfg: &Config, clear_hint: &str) {
    let visible: Vec<&PlantRecord> = catalog.filter(state);
    let summary = FilterSummary::new(visible.len(), catalog.plants().len(), state);

    print::header("plant gallery", cfg.quiet);
    print_summary(&summary, cfg);

    if summary.is_empty() {
        no_plants_found(state, cfg, clear_hint);
        return;
    }

    match (cfg.quiet, state.view_mode) {
        (2, _) => print_bare(&visible),
        (_, ViewMode::Grid) => print_grid(&visible, state, cfg),
        (_, ViewMode::List) => print_list(&visible, state),
    }
}

fn print_summary(summary: &FilterSummary, cfg: &Config) {
    if cfg.quiet > 1 {
        return;
    }
    let count = format!(
        "Showing {} of {} plants",
        summary.shown.to_string().color(colors::PRIMARY).bold(),
        summary.total
    );
    print::print_status(count);

    let badges: Vec<String> = summary
        .badges()
        .into_iter()
        .map(|(label, value)| {
            format!(
                "{}{} {}",
                label.color(colors::SEPARATOR),
                ":".color(colors::SEPARATOR),
                value.color(colors::ACCENT)
            )
        })
        .collect();
    if !badges.is_empty() {
        print::print_status(badges.join("  "));
    }
    hprint!();
}

fn no_plants_found(state: &ViewState, cfg: &Config, clear_hint: &str) {
    if cfg.quiet < 2 {
        print::no_results();
    }
    print::centerln(&"No plants found".color(colors::PRIMARY).bold().to_string());
    print::centerln("Try adjusting your search terms or filters");
    if state.has_active_filters() {
        print::print_status(format!(
            "Clear filters: {}",
            clear_hint.color(colors::PRIMARY)
        ));
    }
}

fn print_bare(visible: &[&PlantRecord]) {
    for plant in visible {
        hprint!(&format!("{}\t{}", plant.id, plant.name));
    }
}

fn print_grid(visible: &[&PlantRecord], state: &ViewState, cfg: &Config) {
    let columns = grid_columns(cfg);
    debug!(columns, "grid layout");
    let cards: Vec<Vec<String>> = visible
        .iter()
        .map(|plant| format::card_lines(plant, state, CARD_WIDTH))
        .collect();
    for line in format::grid_rows(cards, columns, CARD_WIDTH) {
        hprint!(&line);
    }
}

fn print_list(visible: &[&PlantRecord], state: &ViewState) {
    for (idx, plant) in visible.iter().enumerate() {
        let name = format!("{}{}", plant.name, format::markers(plant, state));
        print::tree_head(&plant.id, &name);
        print::as_tree_one_level(format::plant_to_detail(plant));
        if idx + 1 != visible.len() {
            hprint!();
        }
    }
}

fn grid_columns(cfg: &Config) -> usize {
    if let Some(columns) = cfg.columns {
        return columns.clamp(1, MAX_COLUMNS);
    }
    match crossterm::terminal::size() {
        Ok((width, _)) => columns_for_width(width as usize),
        Err(_) => FALLBACK_COLUMNS,
    }
}

/// Cards are separated by one space.
fn columns_for_width(width: usize) -> usize {
    ((width + 1) / (CARD_WIDTH + 1)).clamp(1, MAX_COLUMNS)
}
