use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::book::BookError;

/// Categories a book may be filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Autobiography,
}

impl Category {
    /// The full allow-list
    pub const ALL: &'static [Category] = &[Category::Autobiography];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Autobiography => "Autobiography",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = BookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| BookError::UnknownCategory(s.to_string()))
    }
}
