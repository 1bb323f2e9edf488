use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::models::{PageKind, PageSpec};

/// Cover, message and finale pages: a heading over centred lines of text.
pub fn render(frame: &mut Frame, area: Rect, page: &PageSpec) {
    let lines = page.lines();
    let height = (lines.len() as u16 + 3).min(area.height);

    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .split(area);

    let heading_color = match page.kind() {
        PageKind::Finale => Color::Yellow,
        _ => Color::LightRed,
    };

    let mut content = vec![
        Line::from(Span::styled(
            page.heading(),
            Style::default().fg(heading_color).bold(),
        )),
        Line::from(""),
    ];
    content.extend(
        lines
            .iter()
            .map(|line| Line::from(line.as_str().fg(Color::Gray))),
    );

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, chunks[1]);
}
