//! Character-cell rendering of the decorative plant model.
//!
//! Primitives are sampled into points, rotated by the camera, and splatted
//! onto a fixed grid with a depth buffer so nearer surfaces win.

use colored::*;
use herbarium_core::model::{Camera, Part, PlantModel, Rgb, Vec3};

use crate::terminal::colors;

pub const WIDTH: usize = 48;
pub const HEIGHT: usize = 20;

const X_RANGE: (f32, f32) = (-1.3, 1.3);
const Y_RANGE: (f32, f32) = (-2.1, 2.2);
const SAMPLES: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub glyph: char,
    pub color: Rgb,
    depth: f32,
}

pub type Canvas = Vec<Vec<Option<Cell>>>;

fn to_cell(point: Vec3) -> Option<(usize, usize)> {
    let (x_min, x_max) = X_RANGE;
    let (y_min, y_max) = Y_RANGE;
    let col = ((point.x - x_min) / (x_max - x_min) * (WIDTH - 1) as f32).round();
    let row = ((y_max - point.y) / (y_max - y_min) * (HEIGHT - 1) as f32).round();
    if col < 0.0 || row < 0.0 || col >= WIDTH as f32 || row >= HEIGHT as f32 {
        return None;
    }
    Some((row as usize, col as usize))
}

fn glyph(part: Part) -> char {
    match part {
        Part::Stem => '┃',
        Part::Leaf => '▒',
        Part::Accent => '●',
    }
}

pub fn rasterize(model: &PlantModel, camera: &Camera) -> Canvas {
    let mut canvas: Canvas = vec![vec![None; WIDTH]; HEIGHT];

    for primitive in &model.primitives {
        for point in primitive.surface_points(SAMPLES) {
            let view = camera.project(point);
            let Some((row, col)) = to_cell(view) else {
                continue;
            };
            let slot = &mut canvas[row][col];
            // Accents sit inside the leaves; let them win ties so they stay visible.
            let bias = if primitive.part == Part::Accent { 0.5 } else { 0.0 };
            let depth = view.z + bias;
            if slot.is_none_or(|cell| depth > cell.depth) {
                *slot = Some(Cell {
                    glyph: glyph(primitive.part),
                    color: primitive.color,
                    depth,
                });
            }
        }
    }
    canvas
}

/// Renders the model as coloured lines, label on top and a ground line below.
pub fn render(model: &PlantModel, camera: &Camera) -> Vec<String> {
    let canvas = rasterize(model, camera);
    let mut lines = Vec::with_capacity(HEIGHT + 2);

    let label_pad = WIDTH.saturating_sub(console::measure_text_width(&model.label.text)) / 2;
    lines.push(format!(
        "{}{}",
        " ".repeat(label_pad),
        model.label.text.color(colors::rgb(model.label.color)).bold()
    ));

    for row in canvas {
        let line: String = row
            .into_iter()
            .map(|cell| match cell {
                Some(cell) => cell.glyph.to_string().color(colors::rgb(cell.color)).to_string(),
                None => " ".to_string(),
            })
            .collect();
        lines.push(line);
    }

    lines.push(format!(
        "{}{}",
        " ".repeat(WIDTH / 4),
        "▁".repeat(WIDTH / 2).color(colors::SEPARATOR)
    ));
    lines
}
