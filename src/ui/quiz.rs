use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::surface::OptionMark;

use super::QuestionView;

const OPTION_LABELS: [char; 9] = ['1', '2', '3', '4', '5', '6', '7', '8', '9'];

pub fn render(frame: &mut Frame, area: Rect, heading: &str, app: &App) {
    let scene = app.scene();

    match (scene.question(), scene.score()) {
        (_, Some((score, total))) => render_result(frame, area, heading, score, total),
        (Some(question), None) => render_question(frame, area, heading, question, app),
        (None, None) => {
            let waiting = Paragraph::new("The quiz starts when you arrive here...")
                .alignment(Alignment::Center)
                .fg(Color::DarkGray);
            frame.render_widget(waiting, area);
        }
    }
}

fn render_question(frame: &mut Frame, area: Rect, heading: &str, question: &QuestionView, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // Heading
        Constraint::Length(1), // Progress label
        Constraint::Length(1), // Progress bar
        Constraint::Length(4), // Question text
        Constraint::Min(4),    // Options
        Constraint::Length(2), // Explanation
    ])
    .split(area);

    frame.render_widget(
        Paragraph::new(heading)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::LightRed).bold()),
        chunks[0],
    );
    render_progress(frame, chunks[1], chunks[2], question, app.scene().progress());
    render_question_text(frame, chunks[3], question);
    render_options(frame, chunks[4], question, app);

    let explanation = question.explanation.as_deref();
    if let (true, Some(explanation)) = (app.scene().is_answered(), explanation) {
        let widget = Paragraph::new(explanation)
            .wrap(Wrap { trim: true })
            .fg(Color::Gray)
            .italic();
        frame.render_widget(widget, chunks[5]);
    }
}

fn render_progress(frame: &mut Frame, label_area: Rect, bar_area: Rect, question: &QuestionView, progress: f64) {
    let label = Paragraph::new(format!("Question {} of {}", question.index + 1, question.total))
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(label, label_area);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::LightRed).bg(Color::Black))
        .ratio(progress)
        .label("");
    frame.render_widget(gauge, bar_area);
}

fn render_question_text(frame: &mut Frame, area: Rect, question: &QuestionView) {
    let widget = Paragraph::new(format!("{}. {}", question.index + 1, question.text))
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::White).bold())
        .block(Block::default().padding(Padding::vertical(1)));
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, question: &QuestionView, app: &App) {
    let scene = app.scene();
    let answered = scene.is_answered();
    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len());

    for (index, option) in question.options.iter().enumerate() {
        let is_highlighted = !answered && index == app.highlight();
        let (marker, style) = match scene.mark(index) {
            Some(OptionMark::Correct) => ("✓", Style::default().fg(Color::Green).bold()),
            Some(OptionMark::Incorrect) => ("✗", Style::default().fg(Color::Red).bold()),
            None if is_highlighted => (">", Style::default().fg(Color::Cyan).bold()),
            None if answered => (" ", Style::default().fg(Color::DarkGray)),
            None => (" ", Style::default().fg(Color::Gray)),
        };
        let label = OPTION_LABELS.get(index).copied().unwrap_or('?');

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", label), style),
            Span::styled(option.as_str(), style),
        ]));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Options ")
            .title_style(Style::default().fg(Color::LightRed))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_result(frame: &mut Frame, area: Rect, heading: &str, score: usize, total: usize) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(8),
        Constraint::Fill(1),
    ])
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(heading, Style::default().fg(Color::LightRed).bold())),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} / {}", score, total),
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled("R", Style::default().fg(Color::Green).bold())),
        Line::from("to try again".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);
}
