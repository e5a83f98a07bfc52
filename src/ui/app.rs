use crate::catalog::{Recipe, RecipeId, RecipeStore};
use crate::debounce::Debouncer;
use crate::storage::FavoritesRepository;
use crate::ui::browser::{BrowserIntent, BrowserReducer, Section, ViewState};
use crate::ui::mvi::Reducer;
use crate::view::{DisplayList, Filter, SortOrder};
use std::time::{Duration, Instant};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Owns the browser state and the resources around it.
///
/// The reducer stays pure; persistence and debouncing happen here.
pub struct App {
    should_quit: bool,
    store: RecipeStore,
    view: ViewState,
    favorites: FavoritesRepository,
    search_debounce: Debouncer<String>,
}

impl App {
    /// Create the app and restore persisted favorites.
    pub fn new(store: RecipeStore, favorites: FavoritesRepository, debounce: Duration) -> Self {
        let restored = favorites.load();
        let mut app = Self {
            should_quit: false,
            store,
            view: ViewState::default(),
            favorites,
            search_debounce: Debouncer::new(debounce),
        };
        app.dispatch(BrowserIntent::RestoreFavorites {
            favorites: restored,
        });
        app
    }

    /// Apply a starting filter, sort and search without debouncing.
    pub fn start_with(&mut self, filter: Filter, sort: SortOrder, search: &str) {
        self.dispatch(BrowserIntent::SetFilter(filter));
        self.dispatch(BrowserIntent::SetSort(sort));
        if !search.is_empty() {
            self.dispatch(BrowserIntent::SetSearchInput {
                raw: search.to_string(),
            });
            self.dispatch(BrowserIntent::ApplySearch {
                raw: search.to_string(),
            });
        }
    }

    pub fn dispatch(&mut self, intent: BrowserIntent) {
        dispatch_mvi!(self, view, BrowserReducer, intent);
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn store(&self) -> &RecipeStore {
        &self.store
    }

    /// Recomputed from scratch on every call.
    pub fn display_list(&self) -> DisplayList<'_> {
        self.view.display_list(self.store.all())
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.view.selected_within(self.display_list().len())
    }

    pub fn selected_recipe(&self) -> Option<&Recipe> {
        let list = self.display_list();
        self.view
            .selected_within(list.len())
            .and_then(|index| list.get(index))
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Fire the search debounce if it is due. Returns true when the
    /// active query was updated.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        let Some(raw) = self.search_debounce.poll(now) else {
            return false;
        };
        tracing::debug!(query = %raw.trim(), "Applying debounced search");
        self.dispatch(BrowserIntent::ApplySearch { raw });
        true
    }

    /// How long the event loop may block before the next tick or debounce.
    pub fn next_timeout(&self, now: Instant, tick_rate: Duration) -> Duration {
        match self.search_debounce.time_until_due(now) {
            Some(due) => due.min(tick_rate),
            None => tick_rate,
        }
    }

    pub fn is_search_pending(&self) -> bool {
        self.search_debounce.is_pending()
    }

    pub fn set_filter(&mut self, filter: Filter) {
        tracing::debug!(filter = filter.as_str(), "Filter changed");
        self.dispatch(BrowserIntent::SetFilter(filter));
    }

    pub fn next_filter(&mut self) {
        self.dispatch(BrowserIntent::NextFilter);
        tracing::debug!(filter = self.view.filter.as_str(), "Filter changed");
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        tracing::debug!(sort = sort.as_str(), "Sort changed");
        self.dispatch(BrowserIntent::SetSort(sort));
    }

    pub fn next_sort(&mut self) {
        self.dispatch(BrowserIntent::NextSort);
        tracing::debug!(sort = self.view.sort.as_str(), "Sort changed");
    }

    pub fn begin_search(&mut self) {
        self.dispatch(BrowserIntent::BeginSearch);
    }

    pub fn on_search_char(&mut self, ch: char, now: Instant) {
        self.dispatch(BrowserIntent::InsertChar(ch));
        self.schedule_search(now);
    }

    pub fn on_search_backspace(&mut self, now: Instant) {
        self.dispatch(BrowserIntent::DeleteChar);
        self.schedule_search(now);
    }

    /// Apply the search box immediately and return to browsing.
    pub fn submit_search(&mut self) {
        self.search_debounce.cancel_pending();
        let raw = self.view.search_input.clone();
        self.dispatch(BrowserIntent::ApplySearch { raw });
        self.dispatch(BrowserIntent::EndSearch);
    }

    pub fn clear_search(&mut self) {
        self.search_debounce.cancel_pending();
        self.dispatch(BrowserIntent::ClearSearch);
    }

    /// Toggle and persist. Storage failures are logged, never shown.
    pub fn toggle_favorite(&mut self, id: RecipeId) {
        self.dispatch(BrowserIntent::ToggleFavorite { id });
        if let Err(err) = self.favorites.save(&self.view.favorites) {
            tracing::warn!(error = %err, recipe = id, "Failed to persist favorites");
        }
    }

    pub fn toggle_selected_favorite(&mut self) {
        if let Some(id) = self.selected_recipe().map(|recipe| recipe.id) {
            self.toggle_favorite(id);
        }
    }

    pub fn toggle_selected_section(&mut self, section: Section) {
        if let Some(id) = self.selected_recipe().map(|recipe| recipe.id) {
            self.dispatch(BrowserIntent::ToggleSection { id, section });
        }
    }

    pub fn select_next(&mut self) {
        let visible = self.display_list().len();
        self.dispatch(BrowserIntent::SelectNext { visible });
    }

    pub fn select_previous(&mut self) {
        let visible = self.display_list().len();
        self.dispatch(BrowserIntent::SelectPrevious { visible });
    }

    fn schedule_search(&mut self, now: Instant) {
        let raw = self.view.search_input.clone();
        self.search_debounce.schedule(raw, now);
    }
}
