mod loader;

pub use loader::{LoadError, bundled_card, load_card_from_json, parse_card, validate_card};
