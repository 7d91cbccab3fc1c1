use colored::*;
use herbarium_common::config::Config;
use herbarium_core::Catalog;

use crate::hprint;
use crate::terminal::{colors, format, print};

pub fn tours(catalog: &Catalog, cfg: &Config) {
    print::header("virtual tours", cfg.quiet);
    let tours = catalog.tours();
    for (idx, tour) in tours.iter().enumerate() {
        if cfg.quiet > 1 {
            hprint!(&format!("{}\t{}", tour.id, tour.title));
            continue;
        }
        print::tree_head(&tour.id, &tour.title);
        print::paragraph(&tour.description, 4);
        print::as_tree_one_level(format::tour_to_detail(tour));
        if idx + 1 != tours.len() {
            hprint!();
        }
    }

    if cfg.quiet == 0 {
        print::fat_separator();
        print::centerln(
            &format!("{} tours available", tours.len())
                .color(colors::PRIMARY)
                .to_string(),
        );
    }
}
