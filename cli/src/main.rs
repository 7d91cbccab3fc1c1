mod commands;
mod terminal;

use commands::{CommandLine, Commands, about, browse, gallery, home, options, plant, tours};
use herbarium_common::models::ViewState;
use herbarium_core::Catalog;
use terminal::{logging, print};
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    let cfg = commands.resolve_config()?;
    debug!(?cfg, "configuration resolved");

    let catalog = Catalog::embedded()?;

    // JSON output must stay machine readable.
    let decorated = !matches!(commands.command, Commands::Gallery { json: true, .. });
    if decorated {
        print::banner(cfg.no_banner, cfg.quiet);
    }

    match commands.command {
        Commands::Home => home::home(&cfg),
        Commands::Gallery {
            query,
            system,
            use_filter,
            view,
            json,
        } => {
            let state = ViewState::new()
                .with_query(query.unwrap_or_default())
                .with_system(system.unwrap_or_default())
                .with_use(use_filter.unwrap_or_default())
                .with_view_mode(view.unwrap_or(cfg.view_mode));
            gallery::gallery(&catalog, &state, &cfg, json)?;
        }
        Commands::Plant {
            id,
            tab,
            angle,
            no_model,
        } => {
            let opts = plant::DetailOptions {
                tab,
                angle,
                show_model: !no_model,
            };
            plant::plant(&catalog, &id, &ViewState::new(), opts, &cfg);
        }
        Commands::Tours => tours::tours(&catalog, &cfg),
        Commands::Options => options::options(&catalog, &cfg),
        Commands::About => about::about(&cfg),
        Commands::Browse => browse::browse(&catalog, &cfg)?,
    }

    if decorated && cfg.quiet == 0 {
        print::end_of_program();
    }
    Ok(())
}
