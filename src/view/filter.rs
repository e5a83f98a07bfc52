use crate::catalog::{Difficulty, Recipe};
use crate::view::favorites::FavoriteSet;

/// Recipes at or under this many minutes count as quick.
pub const QUICK_MAX_MINUTES: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    #[default]
    All,
    Favorites,
    Quick,
    Easy,
    Medium,
    Hard,
}

impl Filter {
    /// All variants in the order the filter bar shows them.
    pub fn all() -> &'static [Filter] {
        &[
            Self::All,
            Self::Favorites,
            Self::Quick,
            Self::Easy,
            Self::Medium,
            Self::Hard,
        ]
    }

    /// Parse a filter tag. Unknown tags fall back to [`Filter::All`].
    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "favorites" => Self::Favorites,
            "quick" => Self::Quick,
            "easy" => Self::Easy,
            "medium" => Self::Medium,
            "hard" => Self::Hard,
            _ => Self::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Favorites => "favorites",
            Self::Quick => "quick",
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Favorites => "Favorites",
            Self::Quick => "Quick",
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Difficulty this filter selects, if it is a difficulty filter.
    pub fn difficulty(&self) -> Option<Difficulty> {
        match self {
            Self::Easy => Some(Difficulty::Easy),
            Self::Medium => Some(Difficulty::Medium),
            Self::Hard => Some(Difficulty::Hard),
            Self::All | Self::Favorites | Self::Quick => None,
        }
    }

    /// Next filter in bar order, wrapping around.
    pub fn next(&self) -> Self {
        let all = Self::all();
        let index = all.iter().position(|f| f == self).unwrap_or(0);
        all[(index + 1) % all.len()]
    }

    pub fn matches(&self, recipe: &Recipe, favorites: &FavoriteSet) -> bool {
        match self {
            Self::All => true,
            Self::Favorites => favorites.contains(recipe.id),
            Self::Quick => recipe.time <= QUICK_MAX_MINUTES,
            Self::Easy | Self::Medium | Self::Hard => Some(recipe.difficulty) == self.difficulty(),
        }
    }
}
