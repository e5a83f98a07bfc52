use crate::ui::app::App;
use crate::ui::browser::Section;
use crate::view::{Filter, SortOrder};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if app.view().is_searching() {
        handle_search_key(app, key, now);
    } else {
        handle_browse_key(app, key);
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Esc => app.clear_search(),
        KeyCode::Enter => app.submit_search(),
        KeyCode::Backspace => app.on_search_backspace(now),
        KeyCode::Up => app.select_previous(),
        KeyCode::Down => app.select_next(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.on_search_char(ch, now)
        }
        _ => {}
    }
}

fn handle_browse_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('/') => app.begin_search(),
        KeyCode::Char('x') => app.clear_search(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Char('f') | KeyCode::Tab => app.next_filter(),
        KeyCode::Char('s') => app.next_sort(),
        KeyCode::Char('n') => app.set_sort(SortOrder::Name),
        KeyCode::Char('t') => app.set_sort(SortOrder::Time),
        KeyCode::Char('o') => app.set_sort(SortOrder::None),
        KeyCode::Char(' ') | KeyCode::Char('*') => app.toggle_selected_favorite(),
        KeyCode::Enter | KeyCode::Char('e') => app.toggle_selected_section(Section::Steps),
        KeyCode::Char('i') => app.toggle_selected_section(Section::Ingredients),
        KeyCode::Char(ch) => {
            if let Some(filter) = filter_for_digit(ch) {
                app.set_filter(filter);
            }
        }
        _ => {}
    }
}

/// `1`..`6` select filters in bar order.
fn filter_for_digit(ch: char) -> Option<Filter> {
    let index = ch.to_digit(10)? as usize;
    index
        .checked_sub(1)
        .and_then(|index| Filter::all().get(index))
        .copied()
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
