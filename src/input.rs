//! Keyboard mapping. Every key press becomes at most one [`Intent`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::PageKind;
use crate::tiers::{Container, TokenId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Next,
    Previous,
    /// 1-based page number.
    GoTo(usize),
    SubmitAnswer(usize),
    SubmitHighlighted,
    HighlightNext,
    HighlightPrevious,
    ResetQuiz,
    SelectNextItem,
    SelectPreviousItem,
    MoveSelected(Container),
    MoveToken { token: TokenId, target: Container },
    Quit,
}

/// What the mapping needs to know about the current screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyContext {
    pub page: PageKind,
    pub total_pages: usize,
    pub tiers: usize,
    pub quiz_completed: bool,
}

pub fn intent_for_key(key: KeyEvent, ctx: &KeyContext) -> Option<Intent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Intent::Quit);
    }

    let global = match key.code {
        KeyCode::Right | KeyCode::Char(' ') => Some(Intent::Next),
        KeyCode::Left => Some(Intent::Previous),
        KeyCode::Home => Some(Intent::GoTo(1)),
        KeyCode::End => Some(Intent::GoTo(ctx.total_pages)),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Intent::Quit),
        _ => None,
    };
    if global.is_some() {
        return global;
    }

    match ctx.page {
        PageKind::Quiz => quiz_intent(key.code, ctx),
        PageKind::Tiers => tier_intent(key.code, ctx),
        _ => None,
    }
}

fn quiz_intent(code: KeyCode, ctx: &KeyContext) -> Option<Intent> {
    if ctx.quiz_completed {
        return match code {
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => Some(Intent::ResetQuiz),
            _ => None,
        };
    }

    match code {
        KeyCode::Up | KeyCode::Char('k') => Some(Intent::HighlightPrevious),
        KeyCode::Down | KeyCode::Char('j') => Some(Intent::HighlightNext),
        KeyCode::Enter => Some(Intent::SubmitHighlighted),
        KeyCode::Char(c @ '1'..='9') => Some(Intent::SubmitAnswer(digit(c) - 1)),
        _ => None,
    }
}

fn tier_intent(code: KeyCode, ctx: &KeyContext) -> Option<Intent> {
    match code {
        KeyCode::Up | KeyCode::Char('k') => Some(Intent::SelectPreviousItem),
        KeyCode::Down | KeyCode::Char('j') => Some(Intent::SelectNextItem),
        KeyCode::Char('0') => Some(Intent::MoveSelected(Container::Pool)),
        KeyCode::Char(c @ '1'..='9') if digit(c) <= ctx.tiers => {
            Some(Intent::MoveSelected(Container::Tier(digit(c) - 1)))
        }
        _ => None,
    }
}

fn digit(c: char) -> usize {
    c.to_digit(10).map(|d| d as usize).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(page: PageKind) -> KeyContext {
        KeyContext {
            page,
            total_pages: 6,
            tiers: 5,
            quiz_completed: false,
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_keys_work_everywhere() {
        for page in [PageKind::Cover, PageKind::Quiz, PageKind::Tiers] {
            let ctx = ctx(page);
            assert_eq!(intent_for_key(press(KeyCode::Right), &ctx), Some(Intent::Next));
            assert_eq!(intent_for_key(press(KeyCode::Char(' ')), &ctx), Some(Intent::Next));
            assert_eq!(intent_for_key(press(KeyCode::Left), &ctx), Some(Intent::Previous));
            assert_eq!(intent_for_key(press(KeyCode::End), &ctx), Some(Intent::GoTo(6)));
        }
    }

    #[test]
    fn test_quit_keys() {
        let ctx = ctx(PageKind::Cover);
        assert_eq!(intent_for_key(press(KeyCode::Char('q')), &ctx), Some(Intent::Quit));
        assert_eq!(intent_for_key(press(KeyCode::Esc), &ctx), Some(Intent::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(intent_for_key(ctrl_c, &ctx), Some(Intent::Quit));
    }

    #[test]
    fn test_quiz_keys() {
        let ctx = ctx(PageKind::Quiz);
        assert_eq!(intent_for_key(press(KeyCode::Char('1')), &ctx), Some(Intent::SubmitAnswer(0)));
        assert_eq!(intent_for_key(press(KeyCode::Char('4')), &ctx), Some(Intent::SubmitAnswer(3)));
        assert_eq!(intent_for_key(press(KeyCode::Enter), &ctx), Some(Intent::SubmitHighlighted));
        assert_eq!(intent_for_key(press(KeyCode::Down), &ctx), Some(Intent::HighlightNext));
        assert_eq!(intent_for_key(press(KeyCode::Char('r')), &ctx), None);
    }

    #[test]
    fn test_letters_do_not_answer() {
        // the Konami code ends in `b a`
        let ctx = ctx(PageKind::Quiz);
        for c in ['a', 'b', 'c', 'd'] {
            assert_eq!(intent_for_key(press(KeyCode::Char(c)), &ctx), None);
        }
    }

    #[test]
    fn test_retry_only_when_completed() {
        let ctx = KeyContext {
            quiz_completed: true,
            ..ctx(PageKind::Quiz)
        };
        assert_eq!(intent_for_key(press(KeyCode::Char('r')), &ctx), Some(Intent::ResetQuiz));
        assert_eq!(intent_for_key(press(KeyCode::Char('1')), &ctx), None);
    }

    #[test]
    fn test_tier_keys() {
        let ctx = ctx(PageKind::Tiers);
        assert_eq!(
            intent_for_key(press(KeyCode::Char('1')), &ctx),
            Some(Intent::MoveSelected(Container::Tier(0)))
        );
        assert_eq!(
            intent_for_key(press(KeyCode::Char('0')), &ctx),
            Some(Intent::MoveSelected(Container::Pool))
        );
        assert_eq!(intent_for_key(press(KeyCode::Char('6')), &ctx), None);
        assert_eq!(intent_for_key(press(KeyCode::Char('j')), &ctx), Some(Intent::SelectNextItem));
    }

    #[test]
    fn test_page_keys_do_nothing_elsewhere() {
        let ctx = ctx(PageKind::Message);
        assert_eq!(intent_for_key(press(KeyCode::Char('1')), &ctx), None);
        assert_eq!(intent_for_key(press(KeyCode::Enter), &ctx), None);
    }
}
