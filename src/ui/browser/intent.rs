use crate::catalog::RecipeId;
use crate::ui::browser::state::Section;
use crate::ui::mvi::Intent;
use crate::view::{FavoriteSet, Filter, SortOrder};

#[derive(Debug, Clone)]
pub enum BrowserIntent {
    /// Favorites read from storage at startup.
    RestoreFavorites { favorites: FavoriteSet },
    SetFilter(Filter),
    NextFilter,
    SetSort(SortOrder),
    NextSort,
    BeginSearch,
    EndSearch,
    InsertChar(char),
    DeleteChar,
    /// Replace the search box contents without applying them.
    SetSearchInput { raw: String },
    /// Debounce elapsed: normalize `raw` and make it the active query.
    ApplySearch { raw: String },
    ClearSearch,
    ToggleFavorite { id: RecipeId },
    ToggleSection { id: RecipeId, section: Section },
    /// `visible` is the length of the current display list.
    SelectNext { visible: usize },
    SelectPrevious { visible: usize },
}

impl Intent for BrowserIntent {}
