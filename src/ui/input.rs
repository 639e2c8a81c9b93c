use crate::catalog::CategoryFilter;
use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || matches!(key.code, KeyCode::Char('q')) {
        app.request_quit();
        return;
    }

    // Everything below is plain keys; modified chords are not bound.
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return;
    }

    if app.panel().is_visible() {
        match key.code {
            KeyCode::Esc | KeyCode::Char('v') => app.close_favorites(),
            KeyCode::Up | KeyCode::Char('k') => app.panel_move_up(),
            KeyCode::Down | KeyCode::Char('j') => app.panel_move_down(),
            KeyCode::Char('d') | KeyCode::Delete => app.remove_selected(now),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('n') | KeyCode::Char(' ') => app.request_new_quote(now),
        KeyCode::Char('f') => app.toggle_favorite(now),
        KeyCode::Char('c') => app.copy_current(now),
        KeyCode::Char('t') => app.share_current(now),
        KeyCode::Char('v') => app.open_favorites(),
        KeyCode::Left => {
            let prev = app.session().filter().prev();
            app.select_category(prev, now);
        }
        KeyCode::Right => {
            let next = app.session().filter().next();
            app.select_category(next, now);
        }
        KeyCode::Char(ch @ '1'..='6') => {
            let index = ch as usize - '1' as usize;
            app.select_category(CategoryFilter::CHOICES[index], now);
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
