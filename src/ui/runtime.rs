use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::{RecvTimeoutError, TryRecvError};

/// Run the interactive counter until the user quits.
///
/// Each iteration draws, waits for one event, drains whatever else is
/// already queued, shows the queued presses for one frame, then commits them
/// all at once.
pub fn run(config: &Config) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(&config.ui);
    let tick_rate = app.tick_rate();
    let events = EventHandler::new(tick_rate);
    tracing::info!(?tick_rate, increment_key = %app.increment_key(), "counter started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(event) => apply_event(&mut app, event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
        loop {
            match events.try_next() {
                Ok(event) => apply_event(&mut app, event),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    app.request_quit();
                    break;
                }
            }
        }

        commit_with_preview(&mut app, |app| {
            terminal.draw(|frame| draw(frame, app)).map(|_| ())
        })?;
    }

    tracing::info!(value = app.counter_value(), "counter stopped");
    drop(guard);
    Ok(())
}

/// Commit queued presses, calling `render` first when any are pending so the
/// queued count is on screen before the state advances.
pub fn commit_with_preview<E>(
    app: &mut App,
    mut render: impl FnMut(&App) -> Result<(), E>,
) -> Result<usize, E> {
    if app.pending_increments() > 0 {
        render(app)?;
    }
    Ok(app.commit())
}

fn apply_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        // Redraw only; ratatui picks up the new size on the next draw
        AppEvent::Tick | AppEvent::Resize(..) => {}
    }
}
