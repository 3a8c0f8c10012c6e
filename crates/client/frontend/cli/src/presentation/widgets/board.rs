//! Board widget: the grid of cells plus tiles, settled or in flight.

use client_frontend_core::{PresentationMapper, Transition, ViewModel, layout};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

/// Terminal cells are roughly twice as tall as wide.
const CELL_ASPECT: u16 = 2;

/// Render the board. While `transition` is presenting, tiles are drawn at
/// their interpolated positions instead of the settled view model.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    view_model: &ViewModel,
    transition: Option<&Transition>,
    theme: &RatatuiTheme,
) {
    let block = Block::default().borders(Borders::ALL).title("Board");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let size = view_model.size;
    if size == 0 || inner.width == 0 || inner.height == 0 {
        return;
    }

    let board = board_rect(inner, size);
    frame.render_widget(Block::default().style(theme.style_board()), board);

    for row in 0..size {
        for col in 0..size {
            let cell = cell_rect(board, size, row, col);
            frame.render_widget(Block::default().style(theme.style_empty()), cell);
        }
    }

    match transition {
        Some(transition) => {
            let mut tiles = transition.tiles();
            // Absorbed tiles slide underneath their survivors.
            tiles.sort_by_key(|tile| !tile.absorbed);
            for tile in tiles {
                let rect = tile_rect(
                    board,
                    size,
                    layout::offset_percent_f32(tile.row, size),
                    layout::offset_percent_f32(tile.col, size),
                );
                render_tile(frame, rect, &tile.value.to_string(), theme.style_tile(tile.value));
            }
        }
        None => {
            for (position, tile) in view_model.tiles() {
                let rect = cell_rect(board, size, position.row, position.col);
                render_tile(frame, rect, &tile.label, theme.style_tile(tile.value));
            }
        }
    }
}

/// Largest centred board whose cells keep the terminal aspect ratio.
fn board_rect(inner: Rect, size: usize) -> Rect {
    let size = u16::try_from(size).unwrap_or(u16::MAX).max(1);
    let cell_height = (inner.height / size)
        .min(inner.width / size.saturating_mul(CELL_ASPECT))
        .max(1);
    let cell_width = cell_height * CELL_ASPECT;

    let width = cell_width.saturating_mul(size).min(inner.width);
    let height = cell_height.saturating_mul(size).min(inner.height);
    Rect {
        x: inner.x + (inner.width - width) / 2,
        y: inner.y + (inner.height - height) / 2,
        width,
        height,
    }
}

/// Screen rectangle of the settled cell at `row`, `col`.
fn cell_rect(board: Rect, size: usize, row: usize, col: usize) -> Rect {
    tile_rect(
        board,
        size,
        layout::offset_percent(row, size) as f32,
        layout::offset_percent(col, size) as f32,
    )
}

/// Screen rectangle of a tile whose top-left corner sits at the given
/// board percentages, leaving a one-unit gutter when there is room for it.
fn tile_rect(board: Rect, size: usize, top_percent: f32, left_percent: f32) -> Rect {
    let tile_percent = layout::tile_size_percent(size) as f32;
    let width = layout::scale(tile_percent, board.width).max(1);
    let height = layout::scale(tile_percent, board.height).max(1);

    let x = board.x.saturating_add(layout::scale(left_percent, board.width));
    let y = board.y.saturating_add(layout::scale(top_percent, board.height));

    let gutter_x = u16::from(width > 2);
    let gutter_y = u16::from(height > 2);
    Rect {
        x,
        y,
        width: width - gutter_x,
        height: height - gutter_y,
    }
    .intersection(board)
}

fn render_tile(frame: &mut Frame, rect: Rect, label: &str, style: Style) {
    if rect.is_empty() {
        return;
    }
    let padding = rect.height.saturating_sub(1) / 2;
    let mut lines = vec![Line::default(); padding as usize];
    lines.push(Line::from(label.to_string()));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(style);
    frame.render_widget(paragraph, rect);
}
