use crate::catalog::Quote;
use crate::ui::favorites::reducer::MAX_VISIBLE_ROWS;
use crate::ui::favorites::state::FavoritesPanelState;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_SEPARATOR, HEADER_TEXT, POPUP_BORDER};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const PANEL_WIDTH: u16 = 60;

pub fn render_favorites_panel(
    frame: &mut Frame<'_>,
    state: &FavoritesPanelState,
    favorites: &[&Quote],
    area: Rect,
) {
    let FavoritesPanelState::Visible { selected, offset } = state else {
        return;
    };

    let width = PANEL_WIDTH.min(area.width);
    let inner_width = width.saturating_sub(2) as usize;

    let mut lines: Vec<Line> = Vec::new();
    if favorites.is_empty() {
        lines.push(Line::from(Span::styled(
            " No favorites yet. Press f to save the current quote.",
            Style::default().fg(HEADER_TEXT),
        )));
    } else {
        for (index, quote) in favorites
            .iter()
            .enumerate()
            .skip(*offset)
            .take(MAX_VISIBLE_ROWS)
        {
            let entry = format!(" \"{}\" — {}", quote.text, quote.author);
            let mut line = Line::from(Span::styled(
                truncated(&entry, inner_width),
                Style::default().fg(HEADER_TEXT),
            ));
            if index == *selected {
                line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
            }
            lines.push(line);
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Up/Down: Move  d: Remove  Esc: Close",
        Style::default().fg(HEADER_SEPARATOR),
    )));

    let height = (lines.len() as u16).saturating_add(2).min(area.height);
    let popup_area = centered_rect_by_size(area, width, height);

    frame.render_widget(Clear, popup_area);
    let block = Block::default()
        .title(Span::styled(
            format!(" Favorites ({}) ", favorites.len()),
            Style::default().fg(ACCENT),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), popup_area);
}

/// Truncate to the panel width using char counts, with an ellipsis.
fn truncated(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
