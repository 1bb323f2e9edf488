//! Effects drawn on top of the page: confetti, sparkles and the easter egg.

use std::time::Instant;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
    let scene = app.scene();

    if scene.easter_egg_visible(now) {
        render_easter_egg(frame, area, &app.card().easter_egg_message);
    }

    let buf = frame.buffer_mut();
    for burst in scene.bursts() {
        for particle in burst.frames(now) {
            let x = area.x + (particle.x * area.width.saturating_sub(1) as f64).round() as u16;
            let y = area.y + (particle.y * area.height.saturating_sub(1) as f64).round() as u16;
            let (r, g, b) = particle.color;
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(particle.glyph).set_fg(Color::Rgb(r, g, b));
            }
        }
    }

    for sparkle in scene.sparkles() {
        if let Some((glyph, row)) = sparkle.frame(now) {
            if let Some(cell) = buf.cell_mut((sparkle.column, row)) {
                cell.set_symbol(glyph).set_fg(Color::Yellow);
            }
        }
    }
}

fn render_easter_egg(frame: &mut Frame, area: Rect, message: &str) {
    let width = (message.chars().count() as u16 + 8).min(area.width);
    let popup = centered(area, width, 5);

    let widget = Paragraph::new(message)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::White).bg(Color::Red).bold())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::LightRed).bg(Color::Red))
                .padding(Padding::vertical(1)),
        );

    frame.render_widget(Clear, popup);
    frame.render_widget(widget, popup);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
