use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::{CardConfig, PageKind};

const BUNDLED_CARD: &str = include_str!("../../assets/card.json");

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse card: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid card: {0}")]
    Invalid(String),
}

/// The card shipped with the binary.
pub fn bundled_card() -> Result<CardConfig, LoadError> {
    parse_card(BUNDLED_CARD)
}

pub fn load_card_from_json<P: AsRef<Path>>(path: P) -> Result<CardConfig, LoadError> {
    let path = path.as_ref();
    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_card(&json_content)
}

pub fn parse_card(json: &str) -> Result<CardConfig, LoadError> {
    let card: CardConfig = serde_json::from_str(json)?;
    validate_card(&card)?;
    Ok(card)
}

pub fn validate_card(card: &CardConfig) -> Result<(), LoadError> {
    if card.pages.is_empty() {
        return Err(invalid("card must contain at least one page"));
    }

    for kind in [PageKind::Stats, PageKind::Tiers, PageKind::Quiz, PageKind::Finale] {
        let count = card.pages.iter().filter(|page| page.kind() == kind).count();
        if count > 1 {
            return Err(invalid(format!("at most one {:?} page is allowed, found {}", kind, count)));
        }
    }

    if card.page_of_kind(PageKind::Quiz).is_some() && card.quiz.is_empty() {
        return Err(invalid("a quiz page needs at least one question"));
    }

    for (index, question) in card.quiz.iter().enumerate() {
        if question.options.is_empty() {
            return Err(invalid(format!("question {} has no options", index + 1)));
        }
        if question.correct >= question.options.len() {
            return Err(invalid(format!(
                "question {} marks option {} correct but only has {} options",
                index + 1,
                question.correct,
                question.options.len()
            )));
        }
    }

    let mut seen = HashSet::new();
    for tier in &card.tiers {
        if !seen.insert(tier.as_str()) {
            return Err(invalid(format!("tier {:?} is defined twice", tier)));
        }
    }

    Ok(())
}

fn invalid(message: impl Into<String>) -> LoadError {
    LoadError::Invalid(message.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "title": "t",
        "pages": [
            { "kind": "cover", "heading": "hi" },
            { "kind": "quiz", "heading": "quiz" }
        ],
        "quiz": [
            { "text": "q", "options": ["a", "b"], "correct": 1 }
        ]
    }"#;

    #[test]
    fn test_bundled_card_is_valid() {
        let card = bundled_card().unwrap();
        assert_eq!(card.total_pages(), 6);
        assert_eq!(card.quiz.len(), 10);
        assert_eq!(card.quiz[0].correct, 2);
        assert_eq!(card.quiz[1].correct, 0);

        let landmarks = card.landmarks();
        assert_eq!(landmarks.stats, Some(2));
        assert_eq!(landmarks.quiz, Some(5));
        assert_eq!(landmarks.finale, Some(6));
    }

    #[test]
    fn test_minimal_card_uses_defaults() {
        let card = parse_card(MINIMAL).unwrap();
        assert!(card.stats.is_empty());
        assert!(card.tiers.is_empty());
        assert_eq!(card.easter_egg_message, "You found the secret!");
        assert_eq!(card.quiz[0].explanation, "");
    }

    #[test]
    fn test_rejects_out_of_range_correct_index() {
        let json = MINIMAL.replace("\"correct\": 1", "\"correct\": 2");
        let err = parse_card(&json).unwrap_err();
        assert!(matches!(err, LoadError::Invalid(_)));
    }

    #[test]
    fn test_rejects_quiz_page_without_questions() {
        let json = r#"{ "title": "t", "pages": [{ "kind": "quiz", "heading": "q" }] }"#;
        assert!(matches!(parse_card(json), Err(LoadError::Invalid(_))));
    }

    #[test]
    fn test_rejects_duplicate_landmark_pages() {
        let json = r#"{ "title": "t", "pages": [
            { "kind": "finale", "heading": "a" },
            { "kind": "finale", "heading": "b" }
        ] }"#;
        assert!(matches!(parse_card(json), Err(LoadError::Invalid(_))));
    }

    #[test]
    fn test_rejects_duplicate_tiers() {
        let json = r#"{ "title": "t", "pages": [{ "kind": "tiers", "heading": "a" }],
            "tiers": ["S", "S"], "items": ["x"] }"#;
        assert!(matches!(parse_card(json), Err(LoadError::Invalid(_))));
    }

    #[test]
    fn test_rejects_empty_card() {
        let json = r#"{ "title": "t", "pages": [] }"#;
        assert!(matches!(parse_card(json), Err(LoadError::Invalid(_))));
    }

    #[test]
    fn test_parse_error_is_reported() {
        assert!(matches!(parse_card("{"), Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_card_from_json("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
