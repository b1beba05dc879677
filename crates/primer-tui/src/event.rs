//! The session's single event queue.
//!
//! Terminal input, redraws, notification expiry and the home banner's
//! rotation timer all arrive here as [`Event`]s, so a banner tick queued
//! behind a key press is handled after it. The terminal side only starts
//! once [`EventReader::listen`] is called; the banner side is wired up
//! earlier through [`banner_driver`], before the controller exists.

use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use primer_core::IntervalDriver;
use primer_core::notification::NOTIFICATION_TTL;

/// Redraw cadence (~30 FPS).
const RENDER_RATE: Duration = Duration::from_millis(33);

/// Expiry checks per notification lifetime.
const EXPIRY_CHECK_DIVISOR: u32 = 12;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Key(KeyEvent),
    /// Terminal was resized to (cols, rows).
    Resize(u16, u16),
    /// Drop notifications older than their lifetime.
    Expire,
    Render,
    /// Banner rotation tick, tagged with the timer generation that sent it.
    Banner(u64),
}

pub struct EventReader {
    tx: mpsc::UnboundedSender<Event>,
    rx: mpsc::UnboundedReceiver<Event>,
    cancel: CancellationToken,
}

impl EventReader {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            tx,
            rx,
            cancel: CancellationToken::new(),
        }
    }

    /// Sender for producers outside the terminal task.
    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.tx.clone()
    }

    /// Start reading the terminal. Call once raw mode is on.
    pub fn listen(&self) {
        let tx = self.tx.clone();
        let cancel = self.cancel.clone();

        tokio::spawn(async move {
            let mut input = EventStream::new();
            let mut render = tokio::time::interval(RENDER_RATE);
            let mut expire = tokio::time::interval(NOTIFICATION_TTL / EXPIRY_CHECK_DIVISOR);
            render.set_missed_tick_behavior(MissedTickBehavior::Skip);
            expire.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                let event = tokio::select! {
                    () = cancel.cancelled() => break,
                    _ = expire.tick() => Event::Expire,
                    _ = render.tick() => Event::Render,
                    Some(Ok(raw)) = input.next() => match raw {
                        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Event::Key(key),
                        CrosstermEvent::Resize(w, h) => Event::Resize(w, h),
                        _ => continue,
                    },
                };
                if tx.send(event).is_err() {
                    break;
                }
            }
            debug!("terminal reader stopped");
        });
    }

    /// Next queued event. The reader holds a sender itself, so this only
    /// waits; it never reports a closed queue while `self` is alive.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }

    pub fn stop(&self) {
        self.cancel.cancel();
    }
}

impl Default for EventReader {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for EventReader {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Banner timer whose ticks are queued as [`Event::Banner`].
pub fn banner_driver(
    tx: mpsc::UnboundedSender<Event>,
) -> IntervalDriver<impl Fn(u64) -> bool + Clone + Send + 'static> {
    IntervalDriver::new(move |generation| tx.send(Event::Banner(generation)).is_ok())
}
