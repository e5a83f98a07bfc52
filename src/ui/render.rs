use crate::ui::app::App;
use crate::ui::card::recipe_card_lines;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, scroll_offset};
use crate::ui::theme::{GLOBAL_BORDER, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let view = app.view();
    let list = app.display_list();

    frame.render_widget(
        Header::new().widget(view, app.is_search_pending()),
        header,
    );

    frame.render_widget(Clear, body);
    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(body);

    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut selected_range = (0, 0);
    let selected = view.selected_within(list.len());
    for (index, recipe) in list.recipes().iter().enumerate() {
        let is_selected = selected == Some(index);
        let start = lines.len();
        lines.extend(recipe_card_lines(recipe, view, is_selected));
        if is_selected {
            selected_range = (start, lines.len());
        }
        lines.push(Line::from(""));
    }
    if list.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No recipes match the current filter and search.",
            Style::default()
                .fg(MUTED_TEXT)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    let offset = scroll_offset(selected_range.0, selected_range.1, inner.height as usize);
    let offset = u16::try_from(offset).unwrap_or(u16::MAX);
    frame.render_widget(Paragraph::new(lines).block(block).scroll((offset, 0)), body);

    frame.render_widget(
        Footer::new().widget(footer, &list.counter_text(), view.is_searching()),
        footer,
    );
}
