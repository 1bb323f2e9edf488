use std::time::{Duration, Instant};

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::{debug, info};

use crate::easter::KonamiDetector;
use crate::input::{Intent, KeyContext, intent_for_key};
use crate::models::{CardConfig, PageKind, PageSpec};
use crate::pager::{PageChange, Pager};
use crate::quiz::{FEEDBACK_DELAY, QuizController, QuizState};
use crate::surface::{Effect, Surface};
use crate::tiers::{Container, TierBoard, TokenId};
use crate::ui::{Scene, layout};

/// Deferred work the event loop runs after a delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    AdvanceQuiz { epoch: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduled {
    pub delay: Duration,
    pub timer: Timer,
}

/// Things that sparkle when the pointer moves onto them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Hovered {
    Token(TokenId),
    Achievement(usize),
}

pub struct App {
    card: CardConfig,
    pager: Pager,
    quiz: QuizController,
    board: TierBoard,
    konami: KonamiDetector,
    scene: Scene,
    highlight: usize,
    selected_item: usize,
    dragging: Option<TokenId>,
    drag_over: Option<Container>,
    hovered: Option<Hovered>,
    viewport: Rect,
    scheduled: Vec<Scheduled>,
    should_quit: bool,
}

impl App {
    pub fn new(card: CardConfig) -> Self {
        let pager = Pager::new(card.total_pages(), card.landmarks());
        let quiz = QuizController::new(card.quiz.clone());
        let board = TierBoard::new(card.tiers.clone(), card.items.clone());
        let scene = Scene::new(card.total_pages());

        let mut app = Self {
            card,
            pager,
            quiz,
            board,
            konami: KonamiDetector::new(),
            scene,
            highlight: 0,
            selected_item: 0,
            dragging: None,
            drag_over: None,
            hovered: None,
            viewport: Rect::default(),
            scheduled: Vec::new(),
            should_quit: false,
        };
        app.go_to(1);
        app
    }

    pub fn card(&self) -> &CardConfig {
        &self.card
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn quiz(&self) -> &QuizController {
        &self.quiz
    }

    pub fn board(&self) -> &TierBoard {
        &self.board
    }

    pub fn current_page(&self) -> Option<&PageSpec> {
        self.card.page(self.pager.current())
    }

    pub fn page_kind(&self) -> Option<PageKind> {
        self.current_page().map(PageSpec::kind)
    }

    pub fn highlight(&self) -> usize {
        self.highlight
    }

    pub fn selected_item(&self) -> Option<TokenId> {
        self.board.display_order().get(self.selected_item).copied()
    }

    pub fn dragging(&self) -> Option<TokenId> {
        self.dragging
    }

    pub fn drag_over(&self) -> Option<Container> {
        self.drag_over
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn set_viewport(&mut self, area: Rect) {
        self.viewport = area;
    }

    /// Timers requested since the last call.
    pub fn take_scheduled(&mut self) -> Vec<Scheduled> {
        std::mem::take(&mut self.scheduled)
    }

    pub fn tick(&mut self, now: Instant) {
        self.scene.prune(now);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.konami.push(key.code) {
            info!("easter egg found");
            self.scene.trigger_effect(Effect::EasterEgg);
        }

        if let Some(intent) = intent_for_key(key, &self.key_context()) {
            self.dispatch(intent);
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let areas = layout::card_areas(self.viewport);
        let (column, row) = (mouse.column, mouse.row);

        if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
            let view = self.pager.view();
            if layout::contains(areas.prev, column, row) {
                if view.can_go_back() {
                    self.dispatch(Intent::Previous);
                }
                return;
            }
            if layout::contains(areas.next, column, row) {
                if view.can_go_forward() {
                    self.dispatch(Intent::Next);
                }
                return;
            }
        }

        match self.page_kind() {
            Some(PageKind::Tiers) => self.handle_tier_mouse(mouse, areas.body),
            Some(PageKind::Stats) => self.handle_stats_mouse(mouse, areas.body),
            _ => {}
        }
    }

    fn handle_tier_mouse(&mut self, mouse: MouseEvent, body: Rect) {
        let tiers = layout::tier_layout(body, &self.board);
        let (column, row) = (mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(token) = tiers.token_at(column, row) {
                    self.dragging = Some(token);
                    self.select_token(token);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if self.dragging.is_some() {
                    self.drag_over = tiers.container_at(column, row);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.drag_over = None;
                if let Some(token) = self.dragging.take() {
                    if let Some(target) = tiers.container_at(column, row) {
                        self.dispatch(Intent::MoveToken { token, target });
                    }
                }
            }
            MouseEventKind::Moved => {
                let hovered = tiers.token_at(column, row).map(Hovered::Token);
                self.hover(hovered, column, row);
            }
            _ => {}
        }
    }

    fn handle_stats_mouse(&mut self, mouse: MouseEvent, body: Rect) {
        if mouse.kind != MouseEventKind::Moved {
            return;
        }
        let Some(PageSpec::Stats { lines, .. }) = self.current_page() else {
            return;
        };

        let (column, row) = (mouse.column, mouse.row);
        let hovered = layout::stats_layout(body, lines)
            .achievement_at(column, row)
            .map(Hovered::Achievement);
        self.hover(hovered, column, row);
    }

    fn hover(&mut self, hovered: Option<Hovered>, column: u16, row: u16) {
        if hovered.is_some() && hovered != self.hovered {
            self.scene.trigger_effect(Effect::Sparkle { column, row });
        }
        self.hovered = hovered;
    }

    pub fn handle_timer(&mut self, timer: Timer) {
        match timer {
            Timer::AdvanceQuiz { epoch } => {
                if self.quiz.advance(epoch, &mut self.scene) {
                    self.highlight = 0;
                }
            }
        }
    }

    pub fn dispatch(&mut self, intent: Intent) {
        match intent {
            Intent::Next => {
                let change = self.pager.next(&mut self.scene);
                self.after_page_change(change);
            }
            Intent::Previous => {
                let change = self.pager.previous(&mut self.scene);
                self.after_page_change(change);
            }
            Intent::GoTo(page) => self.go_to(page),
            Intent::SubmitAnswer(option) => self.submit_answer(option),
            Intent::SubmitHighlighted => self.submit_answer(self.highlight),
            Intent::HighlightNext => {
                let options = self.option_count();
                if options > 0 {
                    self.highlight = (self.highlight + 1) % options;
                }
            }
            Intent::HighlightPrevious => {
                let options = self.option_count();
                if options > 0 {
                    self.highlight = (self.highlight + options - 1) % options;
                }
            }
            Intent::ResetQuiz => {
                if self.quiz.is_completed() {
                    self.quiz.reset(&mut self.scene);
                    self.highlight = 0;
                } else {
                    debug!("retry ignored, quiz still in progress");
                }
            }
            Intent::SelectNextItem => {
                let items = self.board.len();
                if items > 0 {
                    self.selected_item = (self.selected_item + 1) % items;
                }
            }
            Intent::SelectPreviousItem => {
                let items = self.board.len();
                if items > 0 {
                    self.selected_item = (self.selected_item + items - 1) % items;
                }
            }
            Intent::MoveSelected(target) => {
                if let Some(token) = self.selected_item() {
                    self.move_item(token, target);
                }
            }
            Intent::MoveToken { token, target } => self.move_item(token, target),
            Intent::Quit => self.should_quit = true,
        }
    }

    fn go_to(&mut self, page: usize) {
        let change = self.pager.go_to(page, &mut self.scene);
        self.after_page_change(change);
    }

    fn after_page_change(&mut self, change: Option<PageChange>) {
        let Some(change) = change else {
            return;
        };
        self.hovered = None;

        if change.quiz_entered {
            self.quiz.start(&mut self.scene);
            self.highlight = 0;
        }
    }

    fn submit_answer(&mut self, option: usize) {
        match self.quiz.submit_answer(option, &mut self.scene) {
            Ok(feedback) => self.scheduled.push(Scheduled {
                delay: FEEDBACK_DELAY,
                timer: Timer::AdvanceQuiz {
                    epoch: feedback.epoch,
                },
            }),
            Err(err) => debug!(%err, "answer rejected"),
        }
    }

    /// Both the keyboard and mouse drag end up here.
    fn move_item(&mut self, token: TokenId, target: Container) {
        match self.board.move_token(token, target) {
            Ok(_) => self.select_token(token),
            Err(err) => debug!(%err, "move rejected"),
        }
    }

    fn select_token(&mut self, token: TokenId) {
        if let Some(position) = self.board.display_order().iter().position(|t| *t == token) {
            self.selected_item = position;
        }
    }

    fn option_count(&self) -> usize {
        match self.quiz.state() {
            QuizState::InProgress { index, .. } => self
                .quiz
                .bank()
                .get(index)
                .map(|q| q.options.len())
                .unwrap_or(0),
            QuizState::Completed { .. } => 0,
        }
    }

    fn key_context(&self) -> KeyContext {
        KeyContext {
            page: self.page_kind().unwrap_or(PageKind::Cover),
            total_pages: self.pager.total(),
            tiers: self.board.tiers().len(),
            quiz_completed: self.quiz.is_completed(),
        }
    }
}
