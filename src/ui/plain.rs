//! Plain-text rendering of the display list, used by `--print`.

use crate::catalog::Recipe;
use crate::ui::app::App;
use crate::view::{flatten_steps, render_steps, FavoriteSet};
use std::fmt::Write;

/// Every listed recipe with steps and ingredients fully expanded.
pub fn render_plain(app: &App) -> String {
    let list = app.display_list();
    let favorites = &app.view().favorites;
    let mut out = String::new();

    let _ = writeln!(out, "{}", list.counter_text());
    for recipe in list.recipes() {
        out.push('\n');
        write_recipe(&mut out, recipe, favorites);
    }
    out
}

fn write_recipe(out: &mut String, recipe: &Recipe, favorites: &FavoriteSet) {
    let mark = if favorites.contains(recipe.id) { "[*]" } else { "[ ]" };
    let _ = writeln!(out, "{mark} {} (#{})", recipe.title, recipe.id);

    let mut meta = format!("    {} min | {}", recipe.time, recipe.difficulty);
    if let Some(category) = &recipe.category {
        let _ = write!(meta, " | {category}");
    }
    let _ = writeln!(out, "{meta}");
    if !recipe.description.is_empty() {
        let _ = writeln!(out, "    {}", recipe.description);
    }

    if !recipe.steps.is_empty() {
        let _ = writeln!(out, "    Steps:");
        for step in flatten_steps(&render_steps(&recipe.steps)) {
            let nesting = "  ".repeat(step.depth + 1);
            let _ = writeln!(out, "    {nesting}{}. {}", step.number(), step.text);
        }
    }
    if !recipe.ingredients.is_empty() {
        let _ = writeln!(out, "    Ingredients:");
        for ingredient in &recipe.ingredients {
            let _ = writeln!(out, "      - {ingredient}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RecipeStore;
    use crate::storage::{FavoritesRepository, MemoryStore, FAVORITES_KEY};
    use crate::view::{Filter, SortOrder};
    use std::time::Duration;

    #[test]
    fn prints_counter_and_expanded_recipes() {
        let mut app = App::new(
            RecipeStore::builtin(),
            FavoritesRepository::new(Box::new(MemoryStore::with_entry(FAVORITES_KEY, "[1]"))),
            Duration::from_millis(300),
        );
        app.start_with(Filter::Favorites, SortOrder::None, "");
        let text = render_plain(&app);

        assert!(text.starts_with("Showing 1 of 6 recipes\n"));
        assert!(text.contains("[*] Classic Spaghetti Carbonara (#1)"));
        assert!(text.contains("      3. Prepare sauce\n        3.1. Beat eggs\n        3.2. Mix with cheese\n"));
        assert!(text.contains("      - Pancetta"));
    }
}
