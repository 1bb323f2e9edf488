use std::time::Instant;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::effects::format_thousands;
use crate::models::Stat;

use super::Scene;
use super::layout::stats_layout;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    heading: &str,
    achievements: &[String],
    stats: &[Stat],
    scene: &Scene,
    now: Instant,
) {
    let layout = stats_layout(area, achievements);

    let title = Paragraph::new(heading)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::LightRed).bold());
    frame.render_widget(title, layout.heading);

    if !stats.is_empty() {
        let cells = Layout::horizontal(vec![Constraint::Fill(1); stats.len()]).split(layout.counters);
        for (stat, cell) in stats.iter().zip(cells.iter()) {
            render_stat(frame, *cell, stat, scene.counter_value(stat.count, now));
        }
    }

    // drawn one rect per line so hover hit-testing sees the same cells
    for (line, rect) in achievements.iter().zip(&layout.achievements) {
        frame.render_widget(Paragraph::new(line.as_str().fg(Color::Yellow)), *rect);
    }
}

fn render_stat(frame: &mut Frame, area: Rect, stat: &Stat, value: u64) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            format_thousands(value),
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from(stat.label.as_str().fg(Color::Gray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}
