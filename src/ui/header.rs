use crate::ui::browser::ViewState;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT};
use crate::view::{Filter, SortOrder};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Filter bar, sort bar and search box.
pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, view: &ViewState, search_pending: bool) -> Paragraph<'static> {
        let filters = Filter::all()
            .iter()
            .map(|filter| (filter.label(), *filter == view.filter));
        let sorts = SortOrder::all()
            .iter()
            .map(|sort| (sort.label(), *sort == view.sort));

        let lines = vec![
            option_bar("Filter", filters),
            option_bar("Sort  ", sorts),
            search_line(view, search_pending),
        ];

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn option_bar<'a>(title: &'static str, options: impl Iterator<Item = (&'a str, bool)>) -> Line<'static> {
    let text_style = Style::default().fg(HEADER_TEXT);
    let separator_style = Style::default().fg(HEADER_SEPARATOR);
    let active_style = Style::default()
        .fg(ACCENT)
        .bg(ACTIVE_HIGHLIGHT)
        .add_modifier(Modifier::BOLD);

    let mut spans = vec![Span::styled(format!("  {title}  "), separator_style)];
    for (index, (label, active)) in options.enumerate() {
        if index > 0 {
            spans.push(Span::styled(" │ ", separator_style));
        }
        let style = if active { active_style } else { text_style };
        spans.push(Span::styled(format!(" {label} "), style));
    }
    Line::from(spans)
}

fn search_line(view: &ViewState, search_pending: bool) -> Line<'static> {
    let label_style = Style::default().fg(HEADER_SEPARATOR);
    let mut spans = vec![Span::styled("  Search  ", label_style)];

    if view.search_input.is_empty() && !view.is_searching() {
        spans.push(Span::styled(
            "press / to search",
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
        ));
    } else {
        spans.push(Span::styled(
            view.search_input.clone(),
            Style::default().fg(HEADER_TEXT),
        ));
        if view.is_searching() {
            spans.push(Span::styled("▏", Style::default().fg(ACCENT)));
        }
    }
    if search_pending {
        spans.push(Span::styled("  …", Style::default().fg(MUTED_TEXT)));
    }
    Line::from(spans)
}
