use crossterm::event::{self, Event, KeyEvent};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
}

/// Reads terminal input on a background thread and forwards it as
/// [`AppEvent`]s. The thread exits once the receiver is dropped.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                // Short poll so a dropped receiver is noticed quickly
                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));

                let forwarded = match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => tx.send(AppEvent::Key(key)).is_ok(),
                        Ok(Event::Resize(cols, rows)) => {
                            tx.send(AppEvent::Resize(cols, rows)).is_ok()
                        }
                        Ok(_) => true,
                        Err(err) => {
                            tracing::error!(error = %err, "Failed to read terminal event");
                            false
                        }
                    },
                    Ok(false) => true,
                    Err(err) => {
                        tracing::error!(error = %err, "Failed to poll terminal events");
                        false
                    }
                };
                if !forwarded {
                    break;
                }

                if last_tick.elapsed() >= tick_rate {
                    if tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}
