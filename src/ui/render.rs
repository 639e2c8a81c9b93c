use crate::ui::app::App;
use crate::ui::favorites::render_favorites_panel;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR,
    STATUS_OK,
};
use crate::ui::toast::{ToastKind, ToastState};
use crate::catalog::CategoryFilter;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new();
    frame.render_widget(
        header_widget.widget(app.session().filter(), app.session().favorites_count()),
        header,
    );

    frame.render_widget(Clear, body);
    let (tabs, card) = split_body(body);
    draw_category_tabs(frame, app.session().filter(), tabs);
    draw_quote_card(frame, app, card);

    let footer_widget = Footer::new();
    frame.render_widget(footer_widget.widget(footer), footer);

    render_favorites_panel(frame, app.panel(), &app.session().favorite_quotes(), body);
    draw_toast(frame, app.toast(), body);
}

fn split_body(body: Rect) -> (Rect, Rect) {
    let tabs_height = body.height.min(1);
    let tabs = Rect {
        x: body.x,
        y: body.y,
        width: body.width,
        height: tabs_height,
    };
    let card = Rect {
        x: body.x,
        y: body.y + tabs_height,
        width: body.width,
        height: body.height.saturating_sub(tabs_height),
    };
    (tabs, card)
}

fn draw_category_tabs(frame: &mut Frame<'_>, active: CategoryFilter, area: Rect) {
    if area.height == 0 {
        return;
    }
    let mut spans = Vec::new();
    for (index, filter) in CategoryFilter::CHOICES.iter().enumerate() {
        let label = format!(" {}:{} ", index + 1, filter.tag());
        let style = if *filter == active {
            Style::default().fg(ACCENT).bg(ACTIVE_HIGHLIGHT)
        } else {
            Style::default().fg(HEADER_SEPARATOR)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn draw_quote_card(frame: &mut Frame<'_>, app: &App, area: Rect) {
    if area.width < 12 || area.height < 5 {
        return;
    }

    let dimmed = app.transition().is_transitioning();
    let base = if dimmed {
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(HEADER_TEXT)
    };

    let Some(quote) = app.session().current_quote() else {
        frame.render_widget(
            Paragraph::new("No quote available for this category.")
                .style(base)
                .alignment(Alignment::Center),
            centered_rect_by_size(area, area.width.min(44), 3),
        );
        return;
    };

    let text = format!("\"{}\"", quote.text);
    let author = format!("— {}", quote.author);
    let marker = if app.session().is_current_favorite() {
        " ♥"
    } else {
        ""
    };

    let width = area.width.saturating_sub(6).clamp(24, 64);
    let wrap_width = width.saturating_sub(4).max(1) as usize;
    let text_rows = text.chars().count().div_ceil(wrap_width) as u16;
    let height = (text_rows + 5).min(area.height);
    let card = centered_rect_by_size(area, width, height);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(text, base)),
        Line::from(""),
        Line::from(vec![
            Span::styled(author, base.add_modifier(Modifier::ITALIC)),
            Span::styled(marker, Style::default().fg(STATUS_ERROR)),
        ]),
    ];

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", quote.category),
            Style::default().fg(ACCENT),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center)
            .block(block),
        card,
    );
}

fn draw_toast(frame: &mut Frame<'_>, toast: &ToastState, area: Rect) {
    let ToastState::Shown { message, kind, .. } = toast else {
        return;
    };
    if area.height < 3 {
        return;
    }

    let color = match kind {
        ToastKind::Success => STATUS_OK,
        ToastKind::Error => STATUS_ERROR,
    };
    let width = (message.chars().count() as u16 + 4).min(area.width);
    let toast_area = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + area.height.saturating_sub(3),
        width,
        height: 3,
    };

    frame.render_widget(Clear, toast_area);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(HEADER_TEXT),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        ),
        toast_area,
    );
}
