//! # Interactive Browse Session
//!
//! Reads one command per line, turns it into an [`Intent`] (or a session
//! command), applies it to the session's [`ViewState`] and re-renders.
//! The catalog is never mutated; all state lives in the session.

use std::io::{self, BufRead};
use std::str::FromStr;

use anyhow::{Context, bail};
use colored::*;
use herbarium_common::config::Config;
use herbarium_common::models::{Intent, UseFilter, ViewState};
use herbarium_core::Catalog;
use herbarium_core::detail::DetailTab;
use herbarium_core::model::Camera;
use tracing::{debug, warn};

use crate::commands::{gallery, parse_degrees, plant::{self, DetailOptions}};
use crate::hprint;
use crate::terminal::{colors, print};

const HELP: [(&str, &str); 14] = [
    ("/TEXT", "search names, botanical names and uses"),
    ("search TEXT", "same as /TEXT; empty clears the search"),
    ("system NAME", "filter by AYUSH system ('all' to reset)"),
    ("use TEXT", "filter by medicinal use ('all' to reset)"),
    ("view grid|list", "switch the gallery layout"),
    ("clear", "reset system and use filters"),
    ("open ID", "open the detail view of a plant"),
    ("back", "return to the gallery"),
    ("tab NAME", "overview, cultivation, preparation or research"),
    ("rotate DEG", "orbit the model camera"),
    ("reset", "reset the model camera"),
    ("bookmark ID", "toggle a bookmark; like ID toggles a like"),
    ("state", "print the session state as JSON"),
    ("quit", "leave the session"),
];

#[derive(Debug, Clone, PartialEq)]
pub enum BrowseCommand {
    Apply(Intent),
    Tab(DetailTab),
    Rotate(f32),
    ResetCamera,
    State,
    Help,
    Quit,
}

impl FromStr for BrowseCommand {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        if let Some(query) = line.strip_prefix('/') {
            return Ok(Self::Apply(Intent::SetQuery(query.trim().to_string())));
        }

        let (verb, arg) = match line.split_once(char::is_whitespace) {
            Some((verb, arg)) => (verb, arg.trim()),
            None => (line, ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "search" => Self::Apply(Intent::SetQuery(arg.to_string())),
            "system" => Self::Apply(Intent::SetSystem(arg.parse()?)),
            "use" => Self::Apply(Intent::SetUse(UseFilter::from(arg))),
            "view" => Self::Apply(Intent::SetViewMode(arg.parse()?)),
            "clear" => Self::Apply(Intent::ClearFilters),
            "open" => Self::Apply(Intent::Open(required(verb, arg)?)),
            "back" => Self::Apply(Intent::Close),
            "bookmark" => Self::Apply(Intent::ToggleBookmark(required(verb, arg)?)),
            "like" => Self::Apply(Intent::ToggleLike(required(verb, arg)?)),
            "tab" => Self::Tab(arg.parse()?),
            "rotate" => Self::Rotate(parse_degrees(arg)?),
            "reset" => Self::ResetCamera,
            "state" => Self::State,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => bail!("unknown command '{verb}', type 'help' for the list"),
        };
        Ok(command)
    }
}

fn required(verb: &str, arg: &str) -> anyhow::Result<String> {
    if arg.is_empty() {
        bail!("'{verb}' needs a plant id");
    }
    Ok(arg.to_string())
}

/// State of one interactive session.
#[derive(Debug, Clone)]
pub struct Session {
    pub state: ViewState,
    pub detail: DetailOptions,
}

impl Session {
    pub fn new(cfg: &Config) -> Self {
        Self {
            state: ViewState::new().with_view_mode(cfg.view_mode),
            detail: DetailOptions::default(),
        }
    }

    /// Applies `command`. Returns false once the session should end.
    pub fn handle(&mut self, command: BrowseCommand, catalog: &Catalog, cfg: &Config) -> bool {
        debug!(?command, "browse command");
        match command {
            BrowseCommand::Quit => return false,
            BrowseCommand::Help => {
                help();
                return true;
            }
            BrowseCommand::State => {
                match serde_json::to_string_pretty(&self.state) {
                    Ok(json) => {
                        hprint!(&json);
                    }
                    Err(e) => warn!("could not serialize state: {e}"),
                }
                return true;
            }
            BrowseCommand::Apply(intent) => {
                if !self.accepts(&intent, catalog) {
                    return true;
                }
                if matches!(intent, Intent::Open(_)) {
                    self.detail = DetailOptions::default();
                }
                self.state = std::mem::take(&mut self.state).apply(intent);
            }
            BrowseCommand::Tab(tab) => self.detail.tab = tab,
            BrowseCommand::Rotate(delta) => {
                let mut camera = Camera::new(self.detail.angle);
                camera.orbit(delta);
                self.detail.angle = camera.yaw_degrees;
            }
            BrowseCommand::ResetCamera => {
                let mut camera = Camera::new(self.detail.angle);
                camera.reset();
                self.detail.angle = camera.yaw_degrees;
            }
        }
        self.redraw(catalog, cfg);
        true
    }

    /// Bookmarks and likes only make sense for plants that exist.
    fn accepts(&self, intent: &Intent, catalog: &Catalog) -> bool {
        match intent {
            Intent::ToggleBookmark(id) | Intent::ToggleLike(id) => match catalog.find_plant(id) {
                Ok(_) => true,
                Err(e) => {
                    warn!("{e}");
                    false
                }
            },
            _ => true,
        }
    }

    pub fn redraw(&mut self, catalog: &Catalog, cfg: &Config) {
        match self.state.selected.clone() {
            Some(id) => {
                if !plant::plant(catalog, &id, &self.state, self.detail, cfg) {
                    self.state = std::mem::take(&mut self.state).apply(Intent::Close);
                }
            }
            None => gallery::render(catalog, &self.state, cfg, "clear"),
        }
    }
}

pub fn browse(catalog: &Catalog, cfg: &Config) -> anyhow::Result<()> {
    let stdin = io::stdin();
    run(catalog, cfg, stdin.lock())?;
    Ok(())
}

/// Drives a session from `input` until it ends. Returns the final state.
pub fn run<R: BufRead>(catalog: &Catalog, cfg: &Config, input: R) -> anyhow::Result<ViewState> {
    let mut session = Session::new(cfg);
    session.redraw(catalog, cfg);
    if cfg.quiet == 0 {
        print::print_status(format!(
            "Type {} for commands, {} to leave",
            "help".color(colors::PRIMARY),
            "quit".color(colors::PRIMARY)
        ));
    }

    for line in input.lines() {
        let line = line.context("failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<BrowseCommand>() {
            Ok(command) => {
                if !session.handle(command, catalog, cfg) {
                    break;
                }
            }
            Err(e) => warn!("{e:#}"),
        }
    }
    Ok(session.state)
}

fn help() {
    print::header("commands", 0);
    let key_width = HELP.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    print::GLOBAL_KEY_WIDTH.set(key_width);
    for (usage, about) in HELP {
        print::aligned_line(usage, about);
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
