use colored::*;
use herbarium_common::models::{AyushSystem, Difficulty, PlantRecord, TourRecord, ViewState};

use crate::terminal::colors;

type Detail = (String, ColoredString);

/// Number of use tags a card shows before collapsing the rest.
pub const CARD_USES: usize = 3;

pub fn system_badge(system: AyushSystem) -> ColoredString {
    let descriptor = system.descriptor();
    format!("◆ {}", descriptor.label).color(colors::tone(descriptor.tone)).bold()
}

pub fn difficulty_badge(difficulty: Difficulty) -> ColoredString {
    let descriptor = difficulty.descriptor();
    descriptor.label.color(colors::tone(descriptor.tone)).bold()
}

/// `[Tag] [Tag] [Tag] +N more`, or every tag when `limit` is `None`.
pub fn use_badges(plant: &PlantRecord, limit: Option<usize>) -> ColoredString {
    let (shown, rest) = plant.top_uses(limit.unwrap_or(plant.uses.len()));
    let mut parts: Vec<String> = shown
        .iter()
        .map(|u| format!("[{}]", u.color(colors::SECONDARY)))
        .collect();
    if rest > 0 {
        parts.push(format!("+{rest} more").color(colors::SEPARATOR).to_string());
    }
    parts.join(" ").normal()
}

/// ♥ and ★ markers for the plant, from the session's view state.
pub fn markers(plant: &PlantRecord, state: &ViewState) -> String {
    let mut out = String::new();
    if state.liked.contains(&plant.id) {
        out.push_str(&format!(" {}", "♥".color(colors::LIKE)));
    }
    if state.bookmarked.contains(&plant.id) {
        out.push_str(&format!(" {}", "★".color(colors::BOOKMARK)));
    }
    out
}

pub fn plant_to_detail(plant: &PlantRecord) -> Vec<Detail> {
    vec![
        (
            "Botanical".to_string(),
            plant.botanical_name.color(colors::BOTANICAL).italic(),
        ),
        ("System".to_string(), system_badge(plant.system)),
        ("Region".to_string(), plant.region.color(colors::TEXT_DEFAULT)),
        ("Uses".to_string(), use_badges(plant, Some(CARD_USES))),
    ]
}

pub fn tour_to_detail(tour: &TourRecord) -> Vec<Detail> {
    vec![
        ("Level".to_string(), difficulty_badge(tour.difficulty)),
        (
            "Rating".to_string(),
            format!("★ {:.1}", tour.rating).color(colors::RATING),
        ),
        ("Duration".to_string(), tour.duration.color(colors::TEXT_DEFAULT)),
        (
            "Visitors".to_string(),
            tour.participants.to_string().color(colors::TEXT_DEFAULT),
        ),
        (
            "Plants".to_string(),
            format!("{} plants", tour.plant_count).color(colors::SECONDARY),
        ),
        ("Theme".to_string(), tour.theme.color(colors::ACCENT)),
    ]
}

/// Lines of a fixed-width gallery card. Every line is padded to `width` columns.
pub fn card_lines(plant: &PlantRecord, state: &ViewState, width: usize) -> Vec<String> {
    let inner = width.saturating_sub(4);
    let title = format!(
        "{} {}{}",
        format!("[{}]", plant.id).color(colors::ACCENT),
        plant.name.color(colors::PRIMARY).bold(),
        markers(plant, state)
    );
    let (shown, rest) = plant.top_uses(CARD_USES);
    let mut lines = vec![
        title,
        plant.botanical_name.color(colors::BOTANICAL).italic().to_string(),
        format!(
            "{} {}",
            system_badge(plant.system),
            plant.region.color(colors::SEPARATOR)
        ),
    ];
    lines.extend(
        shown
            .iter()
            .map(|u| format!("• {}", u.color(colors::SECONDARY))),
    );
    if rest > 0 {
        lines.push(format!("+{rest} more").color(colors::SEPARATOR).to_string());
    }

    let border = "─".repeat(width.saturating_sub(2));
    let mut out = vec![format!("┌{border}┐").color(colors::SEPARATOR).to_string()];
    for line in lines {
        let clipped = console::truncate_str(&line, inner, "…");
        let pad = inner.saturating_sub(console::measure_text_width(&clipped));
        out.push(format!(
            "{} {}{} {}",
            "│".color(colors::SEPARATOR),
            clipped,
            " ".repeat(pad),
            "│".color(colors::SEPARATOR)
        ));
    }
    out.push(format!("└{border}┘").color(colors::SEPARATOR).to_string());
    out
}

/// Places cards side by side, `columns` per row. Shorter cards are padded
/// with blank lines so the rows stay aligned.
pub fn grid_rows(cards: Vec<Vec<String>>, columns: usize, width: usize) -> Vec<String> {
    let columns = columns.max(1);
    let mut rows = Vec::new();
    for chunk in cards.chunks(columns) {
        let height = chunk.iter().map(Vec::len).max().unwrap_or(0);
        for i in 0..height {
            let line: Vec<String> = chunk
                .iter()
                .map(|card| card.get(i).cloned().unwrap_or_else(|| " ".repeat(width)))
                .collect();
            rows.push(line.join(" "));
        }
    }
    rows
}
