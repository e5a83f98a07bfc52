use crate::catalog::{Difficulty, Recipe};
use crate::ui::browser::{Section, ViewState};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, EASY, FAVORITE, HARD, HEADER_TEXT, MEDIUM, MUTED_TEXT};
use crate::view::{flatten_steps, render_steps};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

const INDENT: &str = "    ";

/// Lines for one recipe card.
pub fn recipe_card_lines(recipe: &Recipe, view: &ViewState, selected: bool) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let favorite = view.favorites.contains(recipe.id);

    let marker = if selected { "▶ " } else { "  " };
    let heart = if favorite { "♥ " } else { "♡ " };
    let mut title_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD);
    if selected {
        title_style = title_style.fg(ACCENT);
    }
    let mut title_line = Line::from(vec![
        Span::styled(marker, Style::default().fg(ACCENT)),
        Span::styled(heart, Style::default().fg(FAVORITE)),
        Span::styled(recipe.title.clone(), title_style),
    ]);
    if selected {
        title_line = title_line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
    }
    lines.push(title_line);

    let muted = Style::default().fg(MUTED_TEXT);
    let mut meta = vec![
        Span::styled(INDENT, muted),
        Span::styled(format!("{} min", recipe.time), muted),
        Span::styled(" │ ", muted),
        Span::styled(
            recipe.difficulty.as_str(),
            Style::default().fg(difficulty_color(recipe.difficulty)),
        ),
    ];
    if let Some(category) = &recipe.category {
        meta.push(Span::styled(" │ ", muted));
        meta.push(Span::styled(category.clone(), muted));
    }
    lines.push(Line::from(meta));

    if !recipe.description.is_empty() {
        lines.push(Line::from(format!("{INDENT}{}", recipe.description)));
    }

    let steps_open = view.is_expanded(recipe.id, Section::Steps);
    lines.push(section_toggle(Section::Steps, recipe.steps.len(), steps_open));
    if steps_open {
        let rendered = render_steps(&recipe.steps);
        for step in flatten_steps(&rendered) {
            let nesting = "  ".repeat(step.depth + 1);
            lines.push(Line::from(format!(
                "{INDENT}{nesting}{}. {}",
                step.number(),
                step.text
            )));
        }
    }

    let ingredients_open = view.is_expanded(recipe.id, Section::Ingredients);
    lines.push(section_toggle(
        Section::Ingredients,
        recipe.ingredients.len(),
        ingredients_open,
    ));
    if ingredients_open {
        for ingredient in &recipe.ingredients {
            lines.push(Line::from(format!("{INDENT}  • {ingredient}")));
        }
    }

    lines
}

fn section_toggle(section: Section, count: usize, open: bool) -> Line<'static> {
    let action = if open { "Hide" } else { "Show" };
    let glyph = if open { "▾" } else { "▸" };
    Line::from(Span::styled(
        format!("{INDENT}{glyph} {action} {} ({count})", section.label()),
        Style::default().fg(MUTED_TEXT),
    ))
}

fn difficulty_color(difficulty: Difficulty) -> ratatui::style::Color {
    match difficulty {
        Difficulty::Easy => EASY,
        Difficulty::Medium => MEDIUM,
        Difficulty::Hard => HARD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Step;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    fn recipe() -> Recipe {
        Recipe::new(9, "Stew", 60, Difficulty::Medium)
            .with_description("Hearty.")
            .with_ingredients(["Beef", "Carrots"])
            .with_steps(vec![
                Step::leaf("Brown beef"),
                Step::composite("Simmer", vec![Step::leaf("Add carrots")]),
            ])
    }

    #[test]
    fn collapsed_card_hides_lists() {
        let lines = recipe_card_lines(&recipe(), &ViewState::default(), false);
        let text: Vec<_> = lines.iter().map(line_text).collect();
        assert_eq!(lines.len(), 5);
        assert!(text[0].contains("♡ Stew"));
        assert!(text[3].contains("Show Steps (2)"));
        assert!(text[4].contains("Show Ingredients (2)"));
    }

    #[test]
    fn expanded_steps_are_numbered_and_indented() {
        let mut view = ViewState::default();
        view.expanded.insert((9, Section::Steps));
        let text: Vec<_> = recipe_card_lines(&recipe(), &view, true)
            .iter()
            .map(line_text)
            .collect();
        assert!(text[0].starts_with("▶ "));
        assert!(text.contains(&"      1. Brown beef".to_string()));
        assert!(text.contains(&"      2. Simmer".to_string()));
        assert!(text.contains(&"        2.1. Add carrots".to_string()));
    }

    #[test]
    fn favorite_shows_filled_heart() {
        let view = ViewState {
            favorites: [9].into_iter().collect(),
            ..ViewState::default()
        };
        let lines = recipe_card_lines(&recipe(), &view, false);
        assert!(line_text(&lines[0]).contains("♥ Stew"));
    }
}
