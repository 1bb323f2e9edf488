mod card;
mod question;

pub use card::{CardConfig, Landmarks, PageKind, PageSpec, Stat};
pub use question::Question;
