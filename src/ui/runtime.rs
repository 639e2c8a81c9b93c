use crate::session::Session;
use crate::share::ShareTarget;
use crate::ui::app::{App, UiTimings};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;
use std::time::Instant;

pub fn run(session: Session, share: Box<dyn ShareTarget>, timings: UiTimings) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = timings.tick;
    let mut app = App::new(session, share, timings, StdRng::from_entropy());
    let events = EventHandler::new(tick_rate);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key, Instant::now()),
            Ok(AppEvent::Tick) => app.on_tick(Instant::now()),
            // The next draw picks up the new size
            Ok(AppEvent::Resize(_, _)) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
