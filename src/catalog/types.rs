use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity key of a recipe. Always positive.
pub type RecipeId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Stable lowercase tag, also used in catalog files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single instruction in a recipe.
///
/// Catalog files write a leaf as a bare string and a composite as
/// `{ "text": ..., "substeps": [...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Step {
    Leaf(String),
    Composite { text: String, substeps: Vec<Step> },
}

impl Step {
    pub fn leaf(text: impl Into<String>) -> Self {
        Self::Leaf(text.into())
    }

    pub fn composite(text: impl Into<String>, substeps: Vec<Step>) -> Self {
        Self::Composite {
            text: text.into(),
            substeps,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Leaf(text) => text,
            Self::Composite { text, .. } => text,
        }
    }

    /// Child steps in declaration order. Empty for leaves.
    pub fn substeps(&self) -> &[Step] {
        match self {
            Self::Leaf(_) => &[],
            Self::Composite { substeps, .. } => substeps,
        }
    }
}

/// Immutable recipe record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Total time in minutes.
    pub time: u32,
    pub difficulty: Difficulty,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Recipe {
    pub fn new(id: RecipeId, title: impl Into<String>, time: u32, difficulty: Difficulty) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            time,
            difficulty,
            category: None,
            ingredients: Vec::new(),
            steps: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_steps(mut self, steps: Vec<Step>) -> Self {
        self.steps = steps;
        self
    }
}
