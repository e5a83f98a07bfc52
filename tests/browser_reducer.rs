use recipe_deck::ui::browser::{BrowserIntent, BrowserReducer, InputMode, Section, ViewState};
use recipe_deck::ui::mvi::Reducer;
use recipe_deck::view::{Filter, SortOrder};

fn reduce_all(state: ViewState, intents: Vec<BrowserIntent>) -> ViewState {
    intents
        .into_iter()
        .fold(state, |state, intent| BrowserReducer::reduce(state, intent))
}

fn selected_at(selected: usize) -> ViewState {
    ViewState {
        selected,
        ..ViewState::default()
    }
}

#[test]
fn set_filter_resets_selection() {
    let state = BrowserReducer::reduce(selected_at(3), BrowserIntent::SetFilter(Filter::Hard));
    assert_eq!(state.filter, Filter::Hard);
    assert_eq!(state.selected, 0);
}

#[test]
fn next_filter_cycles_through_all() {
    let mut state = ViewState::default();
    let mut seen = Vec::new();
    for _ in 0..Filter::all().len() {
        seen.push(state.filter);
        state = BrowserReducer::reduce(state, BrowserIntent::NextFilter);
    }
    assert_eq!(seen, Filter::all());
    assert_eq!(state.filter, Filter::All);
}

#[test]
fn next_sort_cycles() {
    let state = reduce_all(
        ViewState::default(),
        vec![BrowserIntent::NextSort, BrowserIntent::NextSort],
    );
    assert_eq!(state.sort, SortOrder::Time);
    let state = BrowserReducer::reduce(state, BrowserIntent::NextSort);
    assert_eq!(state.sort, SortOrder::None);
}

#[test]
fn typing_edits_input_but_not_query() {
    let state = reduce_all(
        ViewState::default(),
        vec![
            BrowserIntent::BeginSearch,
            BrowserIntent::InsertChar('F'),
            BrowserIntent::InsertChar('e'),
            BrowserIntent::InsertChar('x'),
            BrowserIntent::DeleteChar,
        ],
    );
    assert_eq!(state.mode, InputMode::Search);
    assert_eq!(state.search_input, "Fe");
    assert!(state.search_query.is_empty());
}

#[test]
fn apply_search_normalizes_and_resets_selection() {
    let state = BrowserReducer::reduce(
        selected_at(2),
        BrowserIntent::ApplySearch {
            raw: "  FETA ".to_string(),
        },
    );
    assert_eq!(state.search_query.as_str(), "feta");
    assert_eq!(state.selected, 0);
}

#[test]
fn apply_same_query_keeps_selection() {
    let state = BrowserReducer::reduce(
        ViewState::default(),
        BrowserIntent::ApplySearch {
            raw: "feta".to_string(),
        },
    );
    let state = BrowserReducer::reduce(
        ViewState {
            selected: 2,
            ..state
        },
        BrowserIntent::ApplySearch {
            raw: "Feta ".to_string(),
        },
    );
    assert_eq!(state.selected, 2);
}

#[test]
fn clear_search_resets_input_query_and_mode() {
    let state = reduce_all(
        ViewState::default(),
        vec![
            BrowserIntent::BeginSearch,
            BrowserIntent::InsertChar('a'),
            BrowserIntent::ApplySearch {
                raw: "a".to_string(),
            },
            BrowserIntent::ClearSearch,
        ],
    );
    assert!(state.search_input.is_empty());
    assert!(state.search_query.is_empty());
    assert_eq!(state.mode, InputMode::Browse);
}

#[test]
fn toggle_favorite_twice_restores_set() {
    let start = BrowserReducer::reduce(
        ViewState::default(),
        BrowserIntent::RestoreFavorites {
            favorites: [1, 5].into_iter().collect(),
        },
    );
    let once = BrowserReducer::reduce(start.clone(), BrowserIntent::ToggleFavorite { id: 5 });
    assert!(!once.favorites.contains(5));
    let twice = BrowserReducer::reduce(once, BrowserIntent::ToggleFavorite { id: 5 });
    assert_eq!(twice.favorites, start.favorites);
}

#[test]
fn toggle_section_is_per_recipe_and_section() {
    let state = reduce_all(
        ViewState::default(),
        vec![
            BrowserIntent::ToggleSection {
                id: 1,
                section: Section::Steps,
            },
            BrowserIntent::ToggleSection {
                id: 2,
                section: Section::Ingredients,
            },
        ],
    );
    assert!(state.is_expanded(1, Section::Steps));
    assert!(!state.is_expanded(1, Section::Ingredients));
    assert!(state.is_expanded(2, Section::Ingredients));

    let state = BrowserReducer::reduce(
        state,
        BrowserIntent::ToggleSection {
            id: 1,
            section: Section::Steps,
        },
    );
    assert!(!state.is_expanded(1, Section::Steps));
}

#[test]
fn select_next_wraps() {
    let state = BrowserReducer::reduce(selected_at(2), BrowserIntent::SelectNext { visible: 3 });
    assert_eq!(state.selected, 0);
    let state = BrowserReducer::reduce(state, BrowserIntent::SelectNext { visible: 3 });
    assert_eq!(state.selected, 1);
}

#[test]
fn select_previous_wraps() {
    let state = BrowserReducer::reduce(selected_at(0), BrowserIntent::SelectPrevious { visible: 4 });
    assert_eq!(state.selected, 3);
}

#[test]
fn selection_clamps_when_list_shrank() {
    // Cursor was on row 5, list now has 2 rows
    let state = BrowserReducer::reduce(selected_at(5), BrowserIntent::SelectPrevious { visible: 2 });
    assert_eq!(state.selected, 0);
    let state = BrowserReducer::reduce(selected_at(5), BrowserIntent::SelectNext { visible: 2 });
    assert_eq!(state.selected, 0);
}

#[test]
fn selection_on_empty_list_stays_zero() {
    let state = BrowserReducer::reduce(selected_at(0), BrowserIntent::SelectNext { visible: 0 });
    assert_eq!(state.selected, 0);
    let state = BrowserReducer::reduce(state, BrowserIntent::SelectPrevious { visible: 0 });
    assert_eq!(state.selected, 0);
}
