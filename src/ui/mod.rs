pub mod layout;
mod overlay;
mod pages;
mod quiz;
mod scene;
mod stats;
mod tiers;

pub use scene::{QuestionView, Scene};

use std::time::Instant;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::models::{PageKind, PageSpec};
use crate::surface::PageMark;

pub fn render(frame: &mut Frame, app: &App, now: Instant) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(Color::DarkGray)
        .title(Span::styled(
            format!(" {} ", app.card().title),
            Style::default().fg(Color::LightRed).bold(),
        ))
        .title_alignment(Alignment::Center);
    frame.render_widget(outer, area);

    let areas = layout::card_areas(area);
    render_header(frame, areas.header, app);

    let scene = app.scene();
    let body = layout::shifted(areas.body, scene.slide_offset(now), areas.body);
    match app.current_page() {
        Some(PageSpec::Stats { heading, lines }) => {
            stats::render(frame, body, heading, lines, &app.card().stats, scene, now)
        }
        Some(PageSpec::Tiers { heading }) => tiers::render(frame, body, heading, app),
        Some(PageSpec::Quiz { heading }) => quiz::render(frame, body, heading, app),
        Some(page) => pages::render(frame, body, page),
        None => {}
    }

    render_footer(frame, &areas, app);
    overlay::render(frame, area, app, now);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.scene().page();
    let mut spans: Vec<Span> = view
        .marks
        .iter()
        .map(|mark| match mark {
            PageMark::Active => Span::styled("◉ ", Style::default().fg(Color::LightRed).bold()),
            PageMark::Prior => Span::styled("● ", Style::default().fg(Color::Red)),
            PageMark::Upcoming => Span::styled("○ ", Style::default().fg(Color::DarkGray)),
        })
        .collect();
    spans.push(Span::styled(
        format!(" {} / {}", view.current, view.total),
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Center), area);
}

fn render_footer(frame: &mut Frame, areas: &layout::CardAreas, app: &App) {
    let view = app.scene().page();
    let enabled = Style::default().fg(Color::White).bold();
    let disabled = Style::default().fg(Color::DarkGray);

    let prev = Paragraph::new("◀ Prev").style(if view.can_go_back() { enabled } else { disabled });
    let next = Paragraph::new("Next ▶")
        .alignment(Alignment::Right)
        .style(if view.can_go_forward() { enabled } else { disabled });
    let hints = Paragraph::new(controls_hint(app))
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);

    frame.render_widget(prev, areas.prev);
    frame.render_widget(hints, areas.hints);
    frame.render_widget(next, areas.next);
}

fn controls_hint(app: &App) -> String {
    match app.page_kind() {
        Some(PageKind::Tiers) => format!(
            "j/k pick  ·  {} tier  ·  0 pool  ·  drag with mouse  ·  q quit",
            digit_keys(app.board().tiers().len())
        ),
        Some(PageKind::Quiz) if app.quiz().is_completed() => {
            "r retry  ·  ←/→ pages  ·  q quit".to_string()
        }
        Some(PageKind::Quiz) => {
            let options = app.scene().question().map_or(0, |q| q.options.len());
            format!(
                "{} answer  ·  j/k + enter  ·  ←/→ pages  ·  q quit",
                digit_keys(options)
            )
        }
        _ => "←/→ or space to turn the page  ·  q quit".to_string(),
    }
}

/// Digit keys `1..=count`, capped at 9.
fn digit_keys(count: usize) -> String {
    match count.min(9) {
        0 | 1 => "1".to_string(),
        n => format!("1-{}", n),
    }
}
