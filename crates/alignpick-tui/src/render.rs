//! Picker rendering.
//!
//! Draws the 3×3 cell grid centered in the terminal, with the current cell
//! highlighted, a header naming the current label, a status line with the
//! last reported label, and a key-hint footer. Cell rects are recorded into
//! `AppState::cell_areas` for mouse click routing.

use alignpick_core::Position;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::state::AppState;

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
const GRID_WIDTH: u16 = CELL_WIDTH * 3;
const GRID_HEIGHT: u16 = CELL_HEIGHT * 3;

// Borders (2) + padding, header, blank, grid, status, hints.
const POPUP_WIDTH: u16 = GRID_WIDTH + 12;
const POPUP_HEIGHT: u16 = GRID_HEIGHT + 6;

pub fn render(state: &AppState, frame: &mut Frame) {
    let area = frame.area();
    if area.width < POPUP_WIDTH || area.height < POPUP_HEIGHT {
        state.cell_areas.set([Rect::default(); 9]);
        frame.render_widget(
            Paragraph::new("Terminal too small for alignpick")
                .style(Style::default().fg(Color::Red))
                .alignment(Alignment::Center),
            area,
        );
        return;
    }

    let popup = centered(area, POPUP_WIDTH, POPUP_HEIGHT);
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta))
            .title(" alignpick ")
            .title_style(
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
        popup,
    );
    let inner = Rect::new(
        popup.x + 1,
        popup.y + 1,
        popup.width.saturating_sub(2),
        popup.height.saturating_sub(2),
    );

    let current = state.controller.current();

    // Header: the current label
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            current.label(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        Rect::new(inner.x, inner.y, inner.width, 1),
    );

    render_grid(state, frame, inner, current);

    // Status line: the label last reported to the change listener
    let reported = state.last_reported.as_deref().unwrap_or("—");
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("reported: {reported}"),
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Center),
        Rect::new(inner.x, inner.y + 2 + GRID_HEIGHT, inner.width, 1),
    );

    render_hints(
        frame,
        Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1),
    );
}

fn render_grid(state: &AppState, frame: &mut Frame, inner: Rect, current: Position) {
    let grid_x = inner.x + (inner.width - GRID_WIDTH) / 2;
    let grid_y = inner.y + 2;

    let mut areas = [Rect::default(); 9];
    for (index, position) in Position::ALL.into_iter().enumerate() {
        let col = (index % 3) as u16;
        let row = (index / 3) as u16;
        let cell = Rect::new(
            grid_x + col * CELL_WIDTH,
            grid_y + row * CELL_HEIGHT,
            CELL_WIDTH,
            CELL_HEIGHT,
        );
        areas[index] = cell;

        let selected = position == current;
        let (border_style, marker, marker_style) = if selected {
            (
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
                "●",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (
                Style::default().fg(Color::DarkGray),
                "·",
                Style::default().fg(Color::DarkGray),
            )
        };

        frame.render_widget(
            Block::default().borders(Borders::ALL).border_style(border_style),
            cell,
        );
        frame.render_widget(
            Paragraph::new(marker)
                .style(marker_style)
                .alignment(Alignment::Center),
            Rect::new(cell.x + 1, cell.y + 1, cell.width - 2, 1),
        );
    }
    state.cell_areas.set(areas);
}

fn render_hints(frame: &mut Frame, area: Rect) {
    let hints = [("↑↓←→", "move"), ("Enter", "pick"), ("Esc", "cancel")];

    let mut spans = Vec::new();
    for (i, (hint_key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            *hint_key,
            Style::default().fg(Color::Magenta),
        ));
        spans.push(Span::styled(
            format!(" {action}"),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

/// Returns a rect of the given size centered within `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
