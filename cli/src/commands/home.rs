use colored::*;
use herbarium_common::config::Config;
use herbarium_core::landing::{self, FEATURES, STATISTICS, TIPS};

use crate::hprint;
use crate::terminal::{colors, print};

pub fn home(cfg: &Config) {
    print::header("welcome", cfg.quiet);
    print::centerln(&landing::TITLE.color(colors::PRIMARY).bold().to_string());
    print::paragraph(landing::TAGLINE, 2);

    if cfg.quiet < 2 {
        hprint!();
        print_features();
        hprint!();
        print_statistics(cfg);
    }

    let tip: &str = landing::tip_at(rand::random_range(0..TIPS.len()));
    hprint!();
    print::print_status(format!("{} {}", "Tip:".color(colors::ACCENT).bold(), tip));
    print::print_status(format!(
        "Start exploring with {}",
        "herbarium gallery".color(colors::PRIMARY)
    ));
}

fn print_features() {
    for (idx, feature) in FEATURES.iter().enumerate() {
        print::tree_head(&(idx + 1).to_string(), feature.title);
        print::as_tree_one_level(vec![(
            "About".to_string(),
            feature.description.color(colors::TEXT_DEFAULT),
        )]);
    }
}

fn print_statistics(cfg: &Config) {
    print::header("at a glance", cfg.quiet);
    let key_width = STATISTICS.iter().map(|s| s.label.len()).max().unwrap_or(0);
    print::GLOBAL_KEY_WIDTH.set(key_width);
    for stat in STATISTICS {
        print::aligned_line(
            stat.label,
            format!(
                "{} {}",
                stat.figure.color(colors::ACCENT).bold(),
                stat.caption.color(colors::SEPARATOR)
            ),
        );
    }
}
