//! # greeting-card
//!
//! A terminal greeting card: a paged slideshow with a stats count-up, a tier
//! list you can sort with keys or the mouse, a multiple-choice quiz and a few
//! celebratory effects.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use greeting_card::{Card, CardError};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), CardError> {
//!     // Load a card from a JSON file, or use Card::bundled()
//!     let card = Card::from_json("card.json")?;
//!
//!     // Run it in the terminal
//!     card.run().await?;
//!
//!     Ok(())
//! }
//! ```

mod app;
mod data;
pub mod easter;
pub mod effects;
mod input;
pub mod logging;
mod models;
pub mod pager;
pub mod quiz;
mod runtime;
pub mod surface;
pub mod terminal;
pub mod tiers;
mod ui;

#[cfg(test)]
mod testing;

use std::io;
use std::path::Path;

use thiserror::Error;

pub use app::{App, Scheduled, Timer};
pub use data::{LoadError, bundled_card, load_card_from_json, parse_card, validate_card};
pub use input::{Intent, KeyContext, intent_for_key};
pub use models::{CardConfig, Landmarks, PageKind, PageSpec, Question, Stat};
pub use ui::Scene;

/// Error type for card operations.
#[derive(Debug, Error)]
pub enum CardError {
    #[error("failed to load card: {0}")]
    Load(#[from] LoadError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to set up logging: {0}")]
    Logging(String),
}

/// A card ready to be shown in the terminal.
pub struct Card {
    app: App,
}

impl Card {
    pub fn new(config: CardConfig) -> Self {
        Self {
            app: App::new(config),
        }
    }

    /// The card shipped with the crate.
    pub fn bundled() -> Result<Self, CardError> {
        Ok(Self::new(bundled_card()?))
    }

    /// Load a card from a JSON file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use greeting_card::Card;
    ///
    /// let card = Card::from_json("card.json").expect("Failed to load card");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, CardError> {
        Ok(Self::new(load_card_from_json(path)?))
    }

    /// Take over the terminal and show the card until the user quits.
    pub async fn run(mut self) -> Result<(), CardError> {
        let mut term = terminal::init()?;
        let result = runtime::run_event_loop(&mut term, &mut self.app).await;
        terminal::restore()?;
        result
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}
