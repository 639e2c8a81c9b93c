use crate::catalog::CategoryFilter;
use crate::config::UiConfig;
use crate::favorites::FavoriteOutcome;
use crate::session::Session;
use crate::share::{share_text, tweet_url, ShareTarget};
use crate::ui::favorites::{FavoritesPanelIntent, FavoritesPanelReducer, FavoritesPanelState};
use crate::ui::mvi::Reducer;
use crate::ui::toast::{ToastIntent, ToastKind, ToastReducer, ToastState};
use crate::ui::transition::{TransitionIntent, TransitionReducer, TransitionState};
use rand::rngs::StdRng;
use std::time::{Duration, Instant};
use tracing::warn;

/// Fixed display durations, sourced from config.
#[derive(Debug, Clone, Copy)]
pub struct UiTimings {
    pub transition: Duration,
    pub toast: Duration,
    pub tick: Duration,
}

impl UiTimings {
    pub fn from_config(ui: &UiConfig) -> Self {
        Self {
            transition: Duration::from_millis(ui.transition_ms),
            toast: Duration::from_millis(ui.toast_ms),
            tick: Duration::from_millis(ui.tick_ms),
        }
    }
}

impl Default for UiTimings {
    fn default() -> Self {
        Self::from_config(&UiConfig::default())
    }
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    session: Session,
    share: Box<dyn ShareTarget>,
    rng: StdRng,
    timings: UiTimings,
    /// Transition guard state (MVI pattern).
    transition: TransitionState,
    /// Toast notification state (MVI pattern).
    toast: ToastState,
    /// Favorites panel state (MVI pattern).
    panel: FavoritesPanelState,
    should_quit: bool,
}

impl App {
    /// Build the app and draw the initial quote immediately — no transition
    /// window, the session starts with a quote on screen.
    pub fn new(
        session: Session,
        share: Box<dyn ShareTarget>,
        timings: UiTimings,
        rng: StdRng,
    ) -> Self {
        let mut app = Self {
            session,
            share,
            rng,
            timings,
            transition: TransitionState::default(),
            toast: ToastState::default(),
            panel: FavoritesPanelState::default(),
            should_quit: false,
        };
        app.session.advance(&mut app.rng);
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn transition(&self) -> &TransitionState {
        &self.transition
    }

    pub fn toast(&self) -> &ToastState {
        &self.toast
    }

    pub fn panel(&self) -> &FavoritesPanelState {
        &self.panel
    }

    /// Draw a new quote under the active filter. Dropped while the panel is
    /// open or a transition window is running.
    pub fn request_new_quote(&mut self, now: Instant) {
        if self.panel.is_visible() || self.transition.is_transitioning() {
            return;
        }
        self.draw_quote(now);
    }

    /// Change the active category. The filter change always applies; the
    /// follow-up draw is dropped while a transition is running.
    pub fn select_category(&mut self, filter: CategoryFilter, now: Instant) {
        if self.panel.is_visible() {
            return;
        }
        self.session.set_filter(filter);
        if self.transition.is_transitioning() {
            return;
        }
        self.draw_quote(now);
    }

    /// Toggle the current quote's favorite status.
    pub fn toggle_favorite(&mut self, now: Instant) {
        let Some(outcome) = self.session.toggle_current() else {
            return;
        };
        let message = match outcome {
            FavoriteOutcome::Added => "Added to favorites",
            FavoriteOutcome::Removed => "Removed from favorites",
        };
        self.show_toast(message, ToastKind::Success, now);
    }

    /// Copy the current quote to the clipboard.
    pub fn copy_current(&mut self, now: Instant) {
        let Some(quote) = self.session.current_quote() else {
            return;
        };
        match self.share.copy(&share_text(quote)) {
            Ok(()) => self.show_toast("Copied to clipboard", ToastKind::Success, now),
            Err(err) => {
                warn!(%err, "clipboard copy failed");
                self.show_toast("Copy failed", ToastKind::Error, now);
            }
        }
    }

    /// Open the tweet intent link for the current quote.
    pub fn share_current(&mut self, now: Instant) {
        let Some(quote) = self.session.current_quote() else {
            return;
        };
        match self.share.open(&tweet_url(quote)) {
            Ok(()) => self.show_toast("Opening share link", ToastKind::Success, now),
            Err(err) => {
                warn!(%err, "share link open failed");
                self.show_toast("Share failed", ToastKind::Error, now);
            }
        }
    }

    pub fn open_favorites(&mut self) {
        self.dispatch_panel(FavoritesPanelIntent::Open);
    }

    pub fn close_favorites(&mut self) {
        self.dispatch_panel(FavoritesPanelIntent::Close);
    }

    pub fn panel_move_up(&mut self) {
        self.dispatch_panel(FavoritesPanelIntent::MoveUp);
    }

    pub fn panel_move_down(&mut self) {
        let len = self.session.favorites_count();
        self.dispatch_panel(FavoritesPanelIntent::MoveDown { len });
    }

    /// Delete the favorite under the panel selection.
    pub fn remove_selected(&mut self, now: Instant) {
        let FavoritesPanelState::Visible { selected, .. } = self.panel else {
            return;
        };
        let favorites = self.session.favorite_quotes();
        let Some(quote) = favorites.get(selected) else {
            return;
        };
        let id = quote.id;
        if self.session.remove_favorite(id) {
            let len = self.session.favorites_count();
            self.dispatch_panel(FavoritesPanelIntent::Removed { len });
            self.show_toast("Removed from favorites", ToastKind::Success, now);
        }
    }

    /// Periodic tick: clears the transition window and the toast once their
    /// deadlines pass.
    pub fn on_tick(&mut self, now: Instant) {
        self.dispatch_transition(TransitionIntent::TimerElapsed { now });
        self.dispatch_toast(ToastIntent::TimerElapsed { now });
    }

    fn draw_quote(&mut self, now: Instant) {
        if self.session.advance(&mut self.rng).is_some() {
            self.dispatch_transition(TransitionIntent::Start {
                now,
                duration: self.timings.transition,
            });
        }
    }

    fn show_toast(&mut self, message: &str, kind: ToastKind, now: Instant) {
        self.dispatch_toast(ToastIntent::Show {
            message: message.to_string(),
            kind,
            now,
            duration: self.timings.toast,
        });
    }

    fn dispatch_transition(&mut self, intent: TransitionIntent) {
        dispatch_mvi!(self, transition, TransitionReducer, intent);
    }

    fn dispatch_toast(&mut self, intent: ToastIntent) {
        dispatch_mvi!(self, toast, ToastReducer, intent);
    }

    fn dispatch_panel(&mut self, intent: FavoritesPanelIntent) {
        dispatch_mvi!(self, panel, FavoritesPanelReducer, intent);
    }
}
