//! Tier list board: items sorted into named tiers or left in the pool.

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Container {
    /// Index into the board's tier names.
    Tier(usize),
    Pool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TierError {
    #[error("no item with id {0}")]
    UnknownToken(usize),
    #[error("no tier with index {0}")]
    UnknownTier(usize),
}

/// Every token is in exactly one container at all times.
#[derive(Debug, Clone)]
pub struct TierBoard {
    tiers: Vec<String>,
    items: Vec<String>,
    /// One slot per tier followed by the pool.
    slots: Vec<Vec<TokenId>>,
}

impl TierBoard {
    /// All items start in the pool.
    pub fn new(tiers: Vec<String>, items: Vec<String>) -> Self {
        let mut slots = vec![Vec::new(); tiers.len() + 1];
        slots[tiers.len()] = (0..items.len()).map(TokenId).collect();

        Self {
            tiers,
            items,
            slots,
        }
    }

    pub fn tiers(&self) -> &[String] {
        &self.tiers
    }

    pub fn item(&self, token: TokenId) -> Option<&str> {
        self.items.get(token.0).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Tiers in order, then the pool.
    pub fn containers(&self) -> impl Iterator<Item = Container> + '_ {
        (0..self.tiers.len())
            .map(Container::Tier)
            .chain(std::iter::once(Container::Pool))
    }

    pub fn tokens_in(&self, container: Container) -> &[TokenId] {
        self.slot_index(container)
            .map(|slot| self.slots[slot].as_slice())
            .unwrap_or_default()
    }

    pub fn container_of(&self, token: TokenId) -> Option<Container> {
        self.containers()
            .find(|container| self.tokens_in(*container).contains(&token))
    }

    /// Tokens in the order they are shown: tier by tier, then the pool.
    pub fn display_order(&self) -> Vec<TokenId> {
        self.slots.iter().flatten().copied().collect()
    }

    /// Reparent `token` to the end of `target`. Returns false when it is
    /// already there.
    pub fn move_token(&mut self, token: TokenId, target: Container) -> Result<bool, TierError> {
        let to = self.slot_index(target)?;
        let from = self
            .slots
            .iter()
            .position(|slot| slot.contains(&token))
            .ok_or(TierError::UnknownToken(token.0))?;

        if from == to {
            return Ok(false);
        }

        self.slots[from].retain(|t| *t != token);
        self.slots[to].push(token);
        debug!(token = token.0, ?target, "item moved");
        Ok(true)
    }

    fn slot_index(&self, container: Container) -> Result<usize, TierError> {
        match container {
            Container::Tier(index) if index < self.tiers.len() => Ok(index),
            Container::Tier(index) => Err(TierError::UnknownTier(index)),
            Container::Pool => Ok(self.tiers.len()),
        }
    }
}
