use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const BROWSE_HINTS: &str =
    " ↑↓: Move │ f: Filter │ s: Sort │ /: Search │ x: Clear │ Space: Favorite │ Enter: Steps │ i: Ingredients │ q: Quit";
const SEARCH_HINTS: &str = " Type to search │ Enter: Apply │ Esc: Clear";

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    /// Key hints on the left, recipe counter on the right.
    pub fn widget(&self, area: Rect, counter: &str, searching: bool) -> Paragraph<'static> {
        let hints = if searching { SEARCH_HINTS } else { BROWSE_HINTS };
        let counter = format!("{counter} ");

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let counter_width = counter.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(counter_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let counter_style = Style::default().fg(HEADER_TEXT);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(counter, counter_style),
        ]);

        Paragraph::new(line)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
