use colored::*;
use herbarium_common::config::Config;
use herbarium_core::Catalog;

use crate::hprint;
use crate::terminal::{colors, format, print};

/// Lists the values the gallery filters accept, derived from the collection.
pub fn options(catalog: &Catalog, cfg: &Config) {
    let options = catalog.filter_options();

    print::header("systems", cfg.quiet);
    for system in &options.systems {
        hprint!(&format!("  {}", format::system_badge(*system)));
    }

    hprint!();
    print::header("uses", cfg.quiet);
    for use_tag in &options.uses {
        hprint!(&format!("  {} {}", "•".color(colors::ACCENT), use_tag));
    }

    if cfg.quiet == 0 {
        hprint!();
        print::print_status(format!(
            "Filter with {}",
            "herbarium gallery --system <SYSTEM> --use <USE>".color(colors::PRIMARY)
        ));
    }
}
