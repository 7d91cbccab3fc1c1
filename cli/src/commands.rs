pub mod about;
pub mod browse;
pub mod gallery;
pub mod home;
pub mod options;
pub mod plant;
pub mod tours;

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use herbarium_common::config::Config;
use herbarium_common::error::ConfigError;
use herbarium_common::models::{SystemFilter, UseFilter, ViewMode};
use herbarium_core::detail::DetailTab;

#[derive(Parser)]
#[command(name = "herbarium")]
#[command(version, about = "A virtual garden of AYUSH medicinal plants.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce decoration; repeat for bare output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Read settings from a TOML file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the landing page
    #[command(alias = "h")]
    Home,
    /// Search and filter the plant collection
    #[command(alias = "g")]
    Gallery {
        /// Matches name, botanical name or any use
        query: Option<String>,
        /// Only plants from this system ('all' for any)
        #[arg(long, short)]
        system: Option<SystemFilter>,
        /// Only plants with a use containing this text ('all' for any)
        #[arg(long = "use", short)]
        use_filter: Option<UseFilter>,
        /// Card layout: grid or list
        #[arg(long, short)]
        view: Option<ViewMode>,
        /// Print the matching records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one plant in detail
    #[command(alias = "p")]
    Plant {
        id: String,
        /// overview, cultivation, preparation or research
        #[arg(long, short, default_value = "overview")]
        tab: DetailTab,
        /// Camera angle around the model, in degrees
        #[arg(
            long,
            short,
            default_value_t = 0.0,
            allow_negative_numbers = true,
            value_parser = parse_degrees
        )]
        angle: f32,
        /// Skip the model rendering
        #[arg(long)]
        no_model: bool,
    },
    /// List the virtual garden tours
    #[command(alias = "t")]
    Tours,
    /// List the systems and uses the gallery can be filtered by
    #[command(alias = "o")]
    Options,
    /// About the AYUSH systems
    #[command(alias = "a")]
    About,
    /// Explore the gallery interactively
    #[command(alias = "b")]
    Browse,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Loads the config file, then lets command line flags override it.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut cfg = Config::load(self.config.as_deref())?;
        cfg.no_banner |= self.no_banner;
        cfg.quiet = cfg.quiet.max(self.quiet);
        Ok(cfg)
    }
}

/// Parses a camera angle in degrees. Infinite and NaN angles are rejected.
pub fn parse_degrees(s: &str) -> anyhow::Result<f32> {
    let degrees: f32 = s
        .trim()
        .parse()
        .with_context(|| format!("'{s}' is not a number of degrees"))?;
    if !degrees.is_finite() {
        bail!("'{s}' is not a finite angle");
    }
    Ok(degrees)
}

#[cfg(test)]
mod tests {
    use super::*;
    use herbarium_common::models::AyushSystem;

    #[test]
    fn test_parse_gallery_filters() {
        let cli = CommandLine::try_parse_from([
            "herbarium", "gallery", "tea", "--system", "unani", "--use", "digestive", "-v", "list",
        ])
        .unwrap();
        match cli.command {
            Commands::Gallery {
                query,
                system,
                use_filter,
                view,
                json,
            } => {
                assert_eq!(query.as_deref(), Some("tea"));
                assert_eq!(system, Some(SystemFilter::Only(AyushSystem::Unani)));
                assert_eq!(use_filter, Some(UseFilter::Containing("digestive".into())));
                assert_eq!(view, Some(ViewMode::List));
                assert!(!json);
            }
            _ => panic!("expected gallery"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_system() {
        assert!(CommandLine::try_parse_from(["herbarium", "g", "--system", "reiki"]).is_err());
    }

    #[test]
    fn test_parse_plant_defaults() {
        let cli = CommandLine::try_parse_from(["herbarium", "p", "7"]).unwrap();
        match cli.command {
            Commands::Plant {
                id,
                tab,
                angle,
                no_model,
            } => {
                assert_eq!(id, "7");
                assert_eq!(tab, DetailTab::Overview);
                assert_eq!(angle, 0.0);
                assert!(!no_model);
            }
            _ => panic!("expected plant"),
        }
    }

    #[test]
    fn test_parse_plant_rejects_non_finite_angle() {
        for angle in ["inf", "-inf", "NaN"] {
            let parsed = CommandLine::try_parse_from(["herbarium", "p", "1", "--angle", angle]);
            assert!(parsed.is_err(), "{angle} was accepted");
        }
        let cli = CommandLine::try_parse_from(["herbarium", "p", "1", "--angle", "-90"]).unwrap();
        assert!(matches!(cli.command, Commands::Plant { angle, .. } if angle == -90.0));
    }

    #[test]
    fn test_global_flags_override_config() {
        let cli = CommandLine::try_parse_from(["herbarium", "tours", "-qq", "--no-banner"]).unwrap();
        let cfg = cli.resolve_config().unwrap();
        assert_eq!(cfg.quiet, 2);
        assert!(cfg.no_banner);
    }
}
