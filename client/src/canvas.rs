use macroquad::color::{BLACK, Color, GRAY, RED, WHITE};
use macroquad::math::Rect;
use macroquad::shapes::{draw_line, draw_rectangle};
use macroquad::text::draw_text;
use macroquad::window::clear_background;

use common::{CellBuffer, Coordinate, Editor, PaintColor, StatusLevel};

pub const LINE_WIDTH: f32 = 2.0;
pub const STATUS_BAR_HEIGHT: f32 = 36.0;

const FONT_SIZE: f32 = 22.0;
const SIDE_PAD: f32 = 12.0;
const LINE_COLOR: Color = GRAY;
const BACKGROUND_COLOR: Color = BLACK;
const TEXT_COLOR: Color = WHITE;
const ERROR_COLOR: Color = RED;

pub fn paint_color(color: PaintColor) -> Color {
    match color {
        PaintColor::Neutral => Color::from_hex(0xf5f5f5),
        PaintColor::Obstacle => Color::from_hex(0x1e1e1e),
        PaintColor::Start => Color::from_hex(0x00bb00),
        PaintColor::Destination => Color::from_hex(0xbb0000),
        PaintColor::Visiting => Color::from_hex(0x0000bb),
    }
}

/// The filled part of a cell, leaving the grid lines around it uncovered.
pub fn cell_rect(coordinate: Coordinate, cell_size: f32) -> Rect {
    let inset = LINE_WIDTH / 2.0;
    Rect::new(
        coordinate.x as f32 * cell_size + inset,
        coordinate.y as f32 * cell_size + inset,
        cell_size - LINE_WIDTH,
        cell_size - LINE_WIDTH,
    )
}

pub fn draw(cells: &CellBuffer, cell_size: f32, editor: &Editor) {
    clear_background(BACKGROUND_COLOR);
    draw_grid_lines(cells, cell_size);

    for (coordinate, color) in cells.iter() {
        let rect = cell_rect(coordinate, cell_size);
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, paint_color(color));
    }

    draw_status(cells, cell_size, editor);
}

fn draw_grid_lines(cells: &CellBuffer, cell_size: f32) {
    let (rows, cols) = cells.grid().dimensions();
    let width = cols as f32 * cell_size;
    let height = rows as f32 * cell_size;

    for col in 0..=cols {
        let x = col as f32 * cell_size;
        draw_line(x, 0.0, x, height, LINE_WIDTH, LINE_COLOR);
    }
    for row in 0..=rows {
        let y = row as f32 * cell_size;
        draw_line(0.0, y, width, y, LINE_WIDTH, LINE_COLOR);
    }
}

fn draw_status(cells: &CellBuffer, cell_size: f32, editor: &Editor) {
    let top = cells.grid().rows() as f32 * cell_size;
    let baseline = top + (STATUS_BAR_HEIGHT + FONT_SIZE) / 2.0 - 4.0;

    let mut text = format!("mode: {}", editor.mode());
    let mut color = TEXT_COLOR;
    if let Some(status) = editor.status() {
        text.push_str("   ");
        text.push_str(&status.text);
        if status.level == StatusLevel::Error {
            color = ERROR_COLOR;
        }
    }

    draw_text(&text, SIDE_PAD, baseline, FONT_SIZE, color);
}
