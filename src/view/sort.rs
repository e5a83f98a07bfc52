use std::cmp::Ordering;

use feruca::Collator;

use crate::catalog::Recipe;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    #[default]
    None,
    Name,
    Time,
}

impl SortOrder {
    pub fn all() -> &'static [SortOrder] {
        &[Self::None, Self::Name, Self::Time]
    }

    /// Parse a sort tag. Unknown tags fall back to [`SortOrder::None`].
    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "name" => Self::Name,
            "time" => Self::Time,
            _ => Self::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Name => "name",
            Self::Time => "time",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "Default",
            Self::Name => "Name",
            Self::Time => "Time",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::None => Self::Name,
            Self::Name => Self::Time,
            Self::Time => Self::None,
        }
    }

    /// Reorders `recipes` in place. The sort is stable, so equal keys keep
    /// their incoming order.
    pub fn apply(&self, recipes: &mut [&Recipe]) {
        match self {
            Self::None => {}
            Self::Name => {
                let mut collator = Collator::default();
                recipes.sort_by(|a, b| collate_titles(&mut collator, &a.title, &b.title));
            }
            Self::Time => recipes.sort_by_key(|recipe| recipe.time),
        }
    }
}

/// Title comparison under the Unicode Collation Algorithm (CLDR root).
/// Accented letters sort with their base letter and lower case precedes
/// upper case. Raw text is the last key, so the order is total.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    collate_titles(&mut Collator::default(), a, b)
}

fn collate_titles(collator: &mut Collator, a: &str, b: &str) -> Ordering {
    collator.collate(a, b).then_with(|| a.cmp(b))
}
