//! Konami code detection over the trailing window of key presses.

use crossterm::event::KeyCode;

pub const KONAMI_LEN: usize = 10;

/// The subset of keys the sequence cares about. Everything else is `Other`
/// and still occupies a slot in the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Char(char),
    Other,
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Char(c) => Key::Char(c),
            _ => Key::Other,
        }
    }
}

pub const KONAMI_SEQUENCE: [Key; KONAMI_LEN] = [
    Key::Up,
    Key::Up,
    Key::Down,
    Key::Down,
    Key::Left,
    Key::Right,
    Key::Left,
    Key::Right,
    Key::Char('b'),
    Key::Char('a'),
];

/// Fixed-size sliding window compared against [`KONAMI_SEQUENCE`] after
/// every push. Matching is exact and case-sensitive.
#[derive(Debug, Clone)]
pub struct KonamiDetector {
    window: [Key; KONAMI_LEN],
    filled: usize,
}

impl Default for KonamiDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl KonamiDetector {
    pub fn new() -> Self {
        Self {
            window: [Key::Other; KONAMI_LEN],
            filled: 0,
        }
    }

    /// Record a key; true when the last ten keys spell the sequence.
    pub fn push(&mut self, key: impl Into<Key>) -> bool {
        self.window.copy_within(1.., 0);
        self.window[KONAMI_LEN - 1] = key.into();
        self.filled = (self.filled + 1).min(KONAMI_LEN);

        self.filled == KONAMI_LEN && self.window == KONAMI_SEQUENCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(detector: &mut KonamiDetector, keys: &[Key]) -> Vec<bool> {
        keys.iter().map(|k| detector.push(*k)).collect()
    }

    #[test]
    fn test_exact_sequence_triggers_on_last_key() {
        let mut detector = KonamiDetector::new();
        let hits = feed(&mut detector, &KONAMI_SEQUENCE);
        assert_eq!(hits.iter().filter(|h| **h).count(), 1);
        assert!(hits[KONAMI_LEN - 1]);
    }

    #[test]
    fn test_trailing_window_ignores_earlier_noise() {
        let mut detector = KonamiDetector::new();
        feed(&mut detector, &[Key::Char('x'), Key::Other, Key::Up, Key::Left]);
        let hits = feed(&mut detector, &KONAMI_SEQUENCE);
        assert!(hits[KONAMI_LEN - 1]);
    }

    #[test]
    fn test_interruption_breaks_match() {
        let mut detector = KonamiDetector::new();
        let mut keys = KONAMI_SEQUENCE.to_vec();
        keys.insert(5, Key::Char('z'));
        let hits = feed(&mut detector, &keys);
        assert!(hits.iter().all(|h| !h));
    }

    #[test]
    fn test_order_and_case_matter() {
        let mut detector = KonamiDetector::new();
        let mut swapped = KONAMI_SEQUENCE;
        swapped.swap(8, 9);
        assert!(!feed(&mut detector, &swapped).iter().any(|h| *h));

        let mut upper = KONAMI_SEQUENCE;
        upper[8] = Key::Char('B');
        upper[9] = Key::Char('A');
        assert!(!feed(&mut detector, &upper).iter().any(|h| *h));
    }

    #[test]
    fn test_triggers_again_after_repeat() {
        let mut detector = KonamiDetector::new();
        assert!(feed(&mut detector, &KONAMI_SEQUENCE)[KONAMI_LEN - 1]);
        assert!(feed(&mut detector, &KONAMI_SEQUENCE)[KONAMI_LEN - 1]);
    }

    #[test]
    fn test_key_from_keycode() {
        assert_eq!(Key::from(KeyCode::Up), Key::Up);
        assert_eq!(Key::from(KeyCode::Char('a')), Key::Char('a'));
        assert_eq!(Key::from(KeyCode::Enter), Key::Other);
    }
}
