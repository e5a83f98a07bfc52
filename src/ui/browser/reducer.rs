use crate::ui::browser::intent::BrowserIntent;
use crate::ui::browser::state::{InputMode, ViewState};
use crate::ui::mvi::Reducer;
use crate::view::SearchQuery;

pub struct BrowserReducer;

impl Reducer for BrowserReducer {
    type State = ViewState;
    type Intent = BrowserIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            BrowserIntent::RestoreFavorites { favorites } => ViewState { favorites, ..state },
            BrowserIntent::SetFilter(filter) => ViewState {
                filter,
                selected: 0,
                ..state
            },
            BrowserIntent::NextFilter => ViewState {
                filter: state.filter.next(),
                selected: 0,
                ..state
            },
            BrowserIntent::SetSort(sort) => ViewState {
                sort,
                selected: 0,
                ..state
            },
            BrowserIntent::NextSort => ViewState {
                sort: state.sort.next(),
                selected: 0,
                ..state
            },
            BrowserIntent::BeginSearch => ViewState {
                mode: InputMode::Search,
                ..state
            },
            BrowserIntent::EndSearch => ViewState {
                mode: InputMode::Browse,
                ..state
            },
            BrowserIntent::InsertChar(ch) => {
                let mut search_input = state.search_input;
                search_input.push(ch);
                ViewState {
                    search_input,
                    ..state
                }
            }
            BrowserIntent::DeleteChar => {
                let mut search_input = state.search_input;
                search_input.pop();
                ViewState {
                    search_input,
                    ..state
                }
            }
            BrowserIntent::SetSearchInput { raw } => ViewState {
                search_input: raw,
                ..state
            },
            BrowserIntent::ApplySearch { raw } => {
                let search_query = SearchQuery::new(&raw);
                if search_query == state.search_query {
                    // Same normalized query: keep the cursor where it is
                    return state;
                }
                ViewState {
                    search_query,
                    selected: 0,
                    ..state
                }
            }
            BrowserIntent::ClearSearch => ViewState {
                search_input: String::new(),
                search_query: SearchQuery::default(),
                mode: InputMode::Browse,
                selected: 0,
                ..state
            },
            BrowserIntent::ToggleFavorite { id } => ViewState {
                favorites: state.favorites.toggle(id),
                ..state
            },
            BrowserIntent::ToggleSection { id, section } => {
                let mut expanded = state.expanded;
                if !expanded.remove(&(id, section)) {
                    expanded.insert((id, section));
                }
                ViewState { expanded, ..state }
            }
            BrowserIntent::SelectNext { visible } => {
                let selected = match state.selected_within(visible) {
                    Some(current) if current + 1 < visible => current + 1,
                    _ => 0,
                };
                ViewState { selected, ..state }
            }
            BrowserIntent::SelectPrevious { visible } => {
                let selected = match state.selected_within(visible) {
                    Some(0) => visible - 1,
                    Some(current) => current - 1,
                    None => 0,
                };
                ViewState { selected, ..state }
            }
        }
    }
}
