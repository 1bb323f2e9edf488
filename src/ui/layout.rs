//! Screen geometry shared by the renderer and mouse hit-testing.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders};

use crate::tiers::{Container, TierBoard, TokenId};

const TIER_ROW_HEIGHT: u16 = 3;
const TIER_LABEL_WIDTH: u16 = 6;
const TOKEN_GAP: u16 = 1;
const NAV_BUTTON_WIDTH: u16 = 8;

pub struct CardAreas {
    pub header: Rect,
    pub body: Rect,
    /// Footer buttons and the hint line between them.
    pub prev: Rect,
    pub hints: Rect,
    pub next: Rect,
}

pub fn card_areas(area: Rect) -> CardAreas {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .horizontal_margin(1)
    .split(inner);
    let footer = Layout::horizontal([
        Constraint::Length(NAV_BUTTON_WIDTH),
        Constraint::Fill(1),
        Constraint::Length(NAV_BUTTON_WIDTH),
    ])
    .split(chunks[2]);

    CardAreas {
        header: chunks[0],
        body: chunks[1],
        prev: footer[0],
        hints: footer[1],
        next: footer[2],
    }
}

/// Move `rect` sideways, keeping it inside `bounds`.
pub fn shifted(rect: Rect, offset: i16, bounds: Rect) -> Rect {
    let x = (rect.x as i32 + offset as i32).max(bounds.x as i32) as u16;
    let right = bounds.x.saturating_add(bounds.width);
    let width = rect.width.min(right.saturating_sub(x));
    Rect { x, width, ..rect }
}

pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

pub fn token_width(label: &str) -> u16 {
    u16::try_from(label.chars().count())
        .unwrap_or(u16::MAX)
        .saturating_add(2)
}

pub struct StatsLayout {
    pub heading: Rect,
    pub counters: Rect,
    /// One rect per achievement line that fits, sized to its text.
    pub achievements: Vec<Rect>,
}

impl StatsLayout {
    pub fn achievement_at(&self, column: u16, row: u16) -> Option<usize> {
        self.achievements
            .iter()
            .position(|rect| contains(*rect, column, row))
    }
}

pub fn stats_layout(body: Rect, achievements: &[String]) -> StatsLayout {
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(5),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .split(body);

    let list = chunks[3];
    let achievements = achievements
        .iter()
        .zip(list.y..list.y.saturating_add(list.height))
        .map(|(line, y)| {
            let width = u16::try_from(Span::raw(line.as_str()).width())
                .unwrap_or(u16::MAX)
                .min(list.width);
            Rect::new(list.x + (list.width - width) / 2, y, width, 1)
        })
        .collect();

    StatsLayout {
        heading: chunks[0],
        counters: chunks[1],
        achievements,
    }
}

pub struct TierLayout {
    pub heading: Rect,
    pub rows: Vec<(Container, Rect)>,
    /// Only tokens that fit on screen.
    pub tokens: Vec<(TokenId, Rect)>,
}

impl TierLayout {
    pub fn container_at(&self, column: u16, row: u16) -> Option<Container> {
        self.rows
            .iter()
            .find(|(_, rect)| contains(*rect, column, row))
            .map(|(container, _)| *container)
    }

    pub fn token_at(&self, column: u16, row: u16) -> Option<TokenId> {
        self.tokens
            .iter()
            .find(|(_, rect)| contains(*rect, column, row))
            .map(|(token, _)| *token)
    }

    #[cfg(test)]
    pub fn token_rect(&self, token: TokenId) -> Option<Rect> {
        self.tokens
            .iter()
            .find(|(t, _)| *t == token)
            .map(|(_, rect)| *rect)
    }
}

pub fn tier_layout(body: Rect, board: &TierBoard) -> TierLayout {
    let containers: Vec<Container> = board.containers().collect();

    let mut constraints = vec![Constraint::Length(2)];
    constraints.extend(containers.iter().map(|_| Constraint::Length(TIER_ROW_HEIGHT)));
    constraints.push(Constraint::Fill(1));
    let chunks = Layout::vertical(constraints).split(body);

    let mut rows = Vec::with_capacity(containers.len());
    let mut tokens = Vec::with_capacity(board.len());

    for (container, row) in containers.iter().zip(chunks.iter().skip(1)) {
        rows.push((*container, *row));
        if row.height < TIER_ROW_HEIGHT {
            continue;
        }

        let right = row.x + row.width.saturating_sub(1);
        let mut x = row.x + 1 + TIER_LABEL_WIDTH;
        for token in board.tokens_in(*container) {
            let label = board.item(*token).unwrap_or_default();
            let width = token_width(label);
            if x + width > right {
                break;
            }
            tokens.push((*token, Rect::new(x, row.y + 1, width, 1)));
            x += width + TOKEN_GAP;
        }
    }

    TierLayout {
        heading: chunks[0],
        rows,
        tokens,
    }
}
