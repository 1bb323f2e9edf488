//! Card definition as loaded from JSON.

use serde::Deserialize;

use super::Question;

const DEFAULT_EASTER_EGG_MESSAGE: &str = "You found the secret!";

/// A complete greeting card: its pages plus the content those pages show.
#[derive(Debug, Clone, Deserialize)]
pub struct CardConfig {
    pub title: String,
    pub pages: Vec<PageSpec>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub tiers: Vec<String>,
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default)]
    pub quiz: Vec<Question>,
    #[serde(default = "default_easter_egg_message")]
    pub easter_egg_message: String,
}

fn default_easter_egg_message() -> String {
    DEFAULT_EASTER_EGG_MESSAGE.to_string()
}

/// One page of the card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageSpec {
    Cover {
        heading: String,
        #[serde(default)]
        lines: Vec<String>,
    },
    Stats {
        heading: String,
        #[serde(default)]
        lines: Vec<String>,
    },
    Tiers {
        heading: String,
    },
    Message {
        heading: String,
        #[serde(default)]
        lines: Vec<String>,
    },
    Quiz {
        heading: String,
    },
    Finale {
        heading: String,
        #[serde(default)]
        lines: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    Cover,
    Stats,
    Tiers,
    Message,
    Quiz,
    Finale,
}

impl PageSpec {
    pub fn kind(&self) -> PageKind {
        match self {
            PageSpec::Cover { .. } => PageKind::Cover,
            PageSpec::Stats { .. } => PageKind::Stats,
            PageSpec::Tiers { .. } => PageKind::Tiers,
            PageSpec::Message { .. } => PageKind::Message,
            PageSpec::Quiz { .. } => PageKind::Quiz,
            PageSpec::Finale { .. } => PageKind::Finale,
        }
    }

    pub fn heading(&self) -> &str {
        match self {
            PageSpec::Cover { heading, .. }
            | PageSpec::Stats { heading, .. }
            | PageSpec::Tiers { heading }
            | PageSpec::Message { heading, .. }
            | PageSpec::Quiz { heading }
            | PageSpec::Finale { heading, .. } => heading,
        }
    }

    pub fn lines(&self) -> &[String] {
        match self {
            PageSpec::Cover { lines, .. }
            | PageSpec::Stats { lines, .. }
            | PageSpec::Message { lines, .. }
            | PageSpec::Finale { lines, .. } => lines,
            PageSpec::Tiers { .. } | PageSpec::Quiz { .. } => &[],
        }
    }
}

/// A number the stats page counts up to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Stat {
    pub label: String,
    pub count: u64,
}

/// 1-based page numbers of the pages that carry side effects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Landmarks {
    pub stats: Option<usize>,
    pub quiz: Option<usize>,
    pub finale: Option<usize>,
}

impl CardConfig {
    pub fn total_pages(&self) -> usize {
        self.pages.len()
    }

    /// Page spec for a 1-based page number.
    pub fn page(&self, number: usize) -> Option<&PageSpec> {
        number.checked_sub(1).and_then(|index| self.pages.get(index))
    }

    pub fn page_of_kind(&self, kind: PageKind) -> Option<usize> {
        self.pages
            .iter()
            .position(|page| page.kind() == kind)
            .map(|index| index + 1)
    }

    pub fn landmarks(&self) -> Landmarks {
        Landmarks {
            stats: self.page_of_kind(PageKind::Stats),
            quiz: self.page_of_kind(PageKind::Quiz),
            finale: self.page_of_kind(PageKind::Finale),
        }
    }
}
