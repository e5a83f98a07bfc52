use crate::catalog::Recipe;

/// Normalized search text: trimmed and lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Substring match against title, description and ingredients.
    /// An empty query matches everything.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        if self.is_empty() {
            return true;
        }
        let needle = self.as_str();
        recipe.title.to_lowercase().contains(needle)
            || recipe.description.to_lowercase().contains(needle)
            || recipe
                .ingredients
                .iter()
                .any(|ingredient| ingredient.to_lowercase().contains(needle))
    }
}
