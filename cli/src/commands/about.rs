use colored::*;
use herbarium_common::config::Config;
use herbarium_common::models::AyushSystem;
use herbarium_core::about::{self, DocumentLink};

use crate::terminal::{colors, format, print};

pub fn about(cfg: &Config) {
    print::header("about ayush", cfg.quiet);
    if cfg.quiet < 2 {
        for system in AyushSystem::ALL {
            print::print_status(format!("{}", format::system_badge(system)));
            print::paragraph(about::summary(system), 4);
        }
        print::fat_separator();
    }

    let link = DocumentLink::from_config(cfg);
    print::aligned_line(link.title, link.url.color(colors::ACCENT).underline());
}
