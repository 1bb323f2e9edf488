use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::tiers::Container;

use super::layout::tier_layout;

const TIER_COLORS: [Color; 5] = [
    Color::Red,
    Color::LightRed,
    Color::Yellow,
    Color::Green,
    Color::Blue,
];

pub fn render(frame: &mut Frame, area: Rect, heading: &str, app: &App) {
    let board = app.board();
    let layout = tier_layout(area, board);

    frame.render_widget(
        Paragraph::new(heading)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::LightRed).bold()),
        layout.heading,
    );

    for (container, rect) in &layout.rows {
        let (label, color) = match container {
            Container::Tier(index) => (
                board.tiers()[*index].as_str(),
                TIER_COLORS[index % TIER_COLORS.len()],
            ),
            Container::Pool => ("Pool", Color::DarkGray),
        };

        let border = if app.drag_over() == Some(*container) {
            Style::default().fg(Color::Yellow).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default().borders(Borders::ALL).border_style(border);
        frame.render_widget(block, *rect);

        if rect.height > 1 {
            let label_area = Rect::new(rect.x + 1, rect.y + 1, 5.min(rect.width.saturating_sub(2)), 1);
            frame.render_widget(
                Paragraph::new(label).style(Style::default().fg(Color::Black).bg(color).bold()),
                label_area,
            );
        }
    }

    let selected = app.selected_item();
    for (token, rect) in &layout.tokens {
        let label = board.item(*token).unwrap_or_default();
        let mut style = Style::default().fg(Color::White).bg(Color::DarkGray);
        if Some(*token) == app.dragging() {
            style = style.fg(Color::Gray).italic();
        } else if Some(*token) == selected {
            style = style.fg(Color::Black).bg(Color::Cyan).bold();
        }

        frame.render_widget(Paragraph::new(format!(" {} ", label)).style(style), *rect);
    }
}
