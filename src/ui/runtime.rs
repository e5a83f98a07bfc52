use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::{Duration, Instant};

/// Run the interactive browser until the user quits.
pub fn run(mut app: App, tick_rate: Duration) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);
    tracing::info!(recipes = app.store().len(), "Recipe browser started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        let timeout = app.next_timeout(Instant::now(), tick_rate);
        match events.next(timeout) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key, Instant::now()),
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::trace!(cols, rows, "Terminal resized");
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
        app.on_tick(Instant::now());
    }

    drop(guard);
    tracing::info!("Recipe browser stopped");
    Ok(())
}
