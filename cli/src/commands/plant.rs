use colored::*;
use herbarium_common::config::Config;
use herbarium_common::error::CatalogError;
use herbarium_common::models::{PlantRecord, ViewState};
use herbarium_core::Catalog;
use herbarium_core::detail::{self, DetailTab, Section};
use herbarium_core::model::{Camera, PlantModel};
use tracing::warn;

use crate::hprint;
use crate::terminal::{colors, format, model_view, print};

/// What the detail view draws beyond the record itself.
#[derive(Debug, Clone, Copy)]
pub struct DetailOptions {
    pub tab: DetailTab,
    pub angle: f32,
    pub show_model: bool,
}

impl Default for DetailOptions {
    fn default() -> Self {
        Self {
            tab: DetailTab::Overview,
            angle: 0.0,
            show_model: true,
        }
    }
}

/// Renders the detail view of plant `id`. An unknown id renders the
/// not-found view and is not an error. Returns whether the plant exists.
pub fn plant(
    catalog: &Catalog,
    id: &str,
    state: &ViewState,
    opts: DetailOptions,
    cfg: &Config,
) -> bool {
    match catalog.find_plant(id) {
        Ok(record) => {
            print_detail(record, state, opts, cfg);
            true
        }
        Err(CatalogError::NotFound { id }) => {
            warn!(%id, "no plant with this id");
            not_found(cfg);
            false
        }
        Err(e) => {
            warn!("{e}");
            false
        }
    }
}

fn not_found(cfg: &Config) {
    print::header("plant not found", cfg.quiet);
    print::centerln(&"Plant not found".color(colors::PRIMARY).bold().to_string());
    print::print_status(format!(
        "Back to Garden: {}",
        "herbarium gallery".color(colors::PRIMARY)
    ));
}

fn print_detail(plant: &PlantRecord, state: &ViewState, opts: DetailOptions, cfg: &Config) {
    print::header(&plant.name, cfg.quiet);
    let title = format!("{}{}", plant.name, format::markers(plant, state));
    print::tree_head(&plant.id, &title);

    let mut details = format::plant_to_detail(plant);
    if let Some(uses) = details.iter_mut().find(|(key, _)| key == "Uses") {
        uses.1 = format::use_badges(plant, None);
    }
    print::as_tree_one_level(details);

    if cfg.quiet > 1 {
        return;
    }

    if opts.show_model {
        hprint!();
        print_model(plant, opts.angle);
    }

    hprint!();
    print_tabs(opts.tab);
    for section in detail::detail_sections(plant, opts.tab) {
        print_section(&section);
    }
}

fn print_model(plant: &PlantRecord, angle: f32) {
    let model = PlantModel::for_plant(plant);
    let camera = Camera::new(angle);
    let pad = " ".repeat(print::TOTAL_WIDTH.saturating_sub(model_view::WIDTH) / 2);
    for line in model_view::render(&model, &camera) {
        hprint!(&format!("{pad}{line}"));
    }
}

/// Tab strip with the active tab highlighted.
fn print_tabs(active: DetailTab) {
    let tabs: Vec<String> = DetailTab::ALL
        .iter()
        .map(|tab| {
            if *tab == active {
                format!("[{}]", tab.as_str().color(colors::PRIMARY).bold())
            } else {
                format!(" {} ", tab.as_str().color(colors::SEPARATOR))
            }
        })
        .collect();
    hprint!(&tabs.join(" "));
    print::fat_separator();
}

fn print_section(section: &Section) {
    hprint!(&section.heading.color(colors::SECONDARY).bold().to_string());
    if let Some(body) = &section.body {
        print::paragraph(body, 2);
    }
    for bullet in &section.bullets {
        hprint!(&format!("  {} {}", "•".color(colors::ACCENT), bullet));
    }
    hprint!();
}
