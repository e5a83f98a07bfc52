use std::collections::BTreeSet;

use crate::catalog::{Recipe, RecipeId};
use crate::ui::mvi::UiState;
use crate::view::{compute_display_list, DisplayList, FavoriteSet, Filter, SearchQuery, SortOrder};

/// Collapsible part of a recipe card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Steps,
    Ingredients,
}

impl Section {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Steps => "Steps",
            Self::Ingredients => "Ingredients",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Browse,
    /// Keystrokes edit the search box.
    Search,
}

/// Everything the browser screen shows, apart from the catalog itself.
///
/// Only `filter`, `sort`, `search_query` and `favorites` decide which
/// recipes are listed. The other fields are cursor and layout state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub filter: Filter,
    pub sort: SortOrder,
    /// Applied query. Lags `search_input` by the debounce delay.
    pub search_query: SearchQuery,
    pub favorites: FavoriteSet,
    /// Raw text in the search box.
    pub search_input: String,
    pub mode: InputMode,
    pub selected: usize,
    pub expanded: BTreeSet<(RecipeId, Section)>,
}

impl UiState for ViewState {}

impl ViewState {
    pub fn display_list<'a>(&self, recipes: &'a [Recipe]) -> DisplayList<'a> {
        compute_display_list(
            recipes,
            self.filter,
            self.sort,
            &self.search_query,
            &self.favorites,
        )
    }

    pub fn is_expanded(&self, id: RecipeId, section: Section) -> bool {
        self.expanded.contains(&(id, section))
    }

    pub fn is_searching(&self) -> bool {
        self.mode == InputMode::Search
    }

    /// Selected row clamped to a list of `visible` rows.
    pub fn selected_within(&self, visible: usize) -> Option<usize> {
        if visible == 0 {
            None
        } else {
            Some(self.selected.min(visible - 1))
        }
    }
}
