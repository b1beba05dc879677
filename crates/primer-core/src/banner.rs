// ── Banner rotation ──
//
// A cyclic index over the home-page banners, advanced by one repeating
// timer while the home page is showing. Timers are owned through a
// `TimerHandle`; dropping or cancelling the handle stops the task. Each
// start bumps a generation number so a tick already in flight from a
// cancelled timer is recognised and dropped.

use std::time::Duration;

use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

/// Time between banner advances.
pub const BANNER_PERIOD: Duration = Duration::from_secs(5);

// ── Timer plumbing ───────────────────────────────────────────────────

/// Cancels its timer when cancelled explicitly or dropped.
#[derive(Debug)]
pub struct TimerHandle {
    cancel: CancellationToken,
}

impl TimerHandle {
    pub fn new(cancel: CancellationToken) -> Self {
        Self { cancel }
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Something that can start a repeating timer which reports ticks tagged
/// with `generation`.
pub trait TimerDriver {
    fn start(&mut self, period: Duration, generation: u64) -> TimerHandle;
}

/// Tokio-backed driver. The first tick fires one full period after start;
/// `on_tick` returning `false` (e.g. a closed channel) ends the task.
pub struct IntervalDriver<F> {
    on_tick: F,
}

impl<F> IntervalDriver<F>
where
    F: Fn(u64) -> bool + Clone + Send + 'static,
{
    pub fn new(on_tick: F) -> Self {
        Self { on_tick }
    }
}

impl<F> TimerDriver for IntervalDriver<F>
where
    F: Fn(u64) -> bool + Clone + Send + 'static,
{
    fn start(&mut self, period: Duration, generation: u64) -> TimerHandle {
        let cancel = CancellationToken::new();
        let task_cancel = cancel.clone();
        let on_tick = self.on_tick.clone();

        tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    () = task_cancel.cancelled() => break,
                    _ = interval.tick() => {
                        if !on_tick(generation) {
                            break;
                        }
                    }
                }
            }
            trace!(generation, "banner timer stopped");
        });

        TimerHandle::new(cancel)
    }
}

/// Starts no task; the host delivers ticks itself (headless runs, tests).
#[derive(Debug, Default, Clone, Copy)]
pub struct ManualDriver;

impl TimerDriver for ManualDriver {
    fn start(&mut self, _period: Duration, _generation: u64) -> TimerHandle {
        TimerHandle::new(CancellationToken::new())
    }
}

// ── Scheduler ────────────────────────────────────────────────────────

pub struct BannerScheduler<D> {
    len: usize,
    index: usize,
    generation: u64,
    timer: Option<TimerHandle>,
    driver: D,
}

impl<D: TimerDriver> BannerScheduler<D> {
    pub fn new(len: usize, driver: D) -> Self {
        Self {
            len,
            index: 0,
            generation: 0,
            timer: None,
            driver,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Home became active: replace any running timer with a fresh one.
    /// Nothing starts for an empty banner list.
    pub fn enter_home(&mut self) {
        self.stop();
        if self.len == 0 {
            return;
        }
        self.generation += 1;
        self.timer = Some(self.driver.start(BANNER_PERIOD, self.generation));
        debug!(generation = self.generation, "banner rotation started");
    }

    /// Home is no longer active.
    pub fn leave_home(&mut self) {
        if self.timer.is_some() {
            debug!(generation = self.generation, "banner rotation stopped");
        }
        self.stop();
    }

    /// Apply one tick. Returns `true` if the index advanced; ticks from an
    /// older timer, or arriving while home is not showing, are dropped.
    pub fn tick(&mut self, generation: u64, home_active: bool) -> bool {
        if generation != self.generation || self.timer.is_none() || !home_active || self.len == 0 {
            trace!(generation, current = self.generation, "dropping stale banner tick");
            return false;
        }
        self.index = (self.index + 1) % self.len;
        true
    }

    fn stop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use pretty_assertions::assert_eq;
    use tokio::sync::mpsc;

    /// Records every start and keeps a clone of each cancellation token.
    #[derive(Clone, Default)]
    struct RecordingDriver {
        started: Arc<Mutex<Vec<(u64, CancellationToken)>>>,
    }

    impl RecordingDriver {
        fn live(&self) -> usize {
            self.started
                .lock()
                .unwrap()
                .iter()
                .filter(|(_, t)| !t.is_cancelled())
                .count()
        }

        fn starts(&self) -> usize {
            self.started.lock().unwrap().len()
        }
    }

    impl TimerDriver for RecordingDriver {
        fn start(&mut self, _period: Duration, generation: u64) -> TimerHandle {
            let token = CancellationToken::new();
            self.started.lock().unwrap().push((generation, token.clone()));
            TimerHandle::new(token)
        }
    }

    #[test]
    fn three_banners_three_ticks_wraps() {
        let mut s = BannerScheduler::new(3, RecordingDriver::default());
        s.enter_home();
        let g = s.generation();
        for _ in 0..3 {
            assert!(s.tick(g, true));
        }
        assert_eq!(s.index(), 0);
        assert!(s.tick(g, true));
        assert_eq!(s.index(), 1);
    }

    #[test]
    fn at_most_one_live_timer() {
        let driver = RecordingDriver::default();
        let mut s = BannerScheduler::new(2, driver.clone());
        s.enter_home();
        s.enter_home();
        s.enter_home();
        assert_eq!(driver.starts(), 3);
        assert_eq!(driver.live(), 1);

        s.leave_home();
        assert_eq!(driver.live(), 0);
        assert!(!s.is_running());
    }

    #[test]
    fn empty_list_never_starts() {
        let driver = RecordingDriver::default();
        let mut s = BannerScheduler::new(0, driver.clone());
        s.enter_home();
        assert_eq!(driver.starts(), 0);
        assert!(!s.tick(s.generation(), true));
    }

    #[test]
    fn stale_ticks_are_dropped() {
        let mut s = BannerScheduler::new(3, RecordingDriver::default());
        s.enter_home();
        let old = s.generation();
        s.enter_home();

        assert!(!s.tick(old, true));
        assert!(!s.tick(s.generation(), false));
        s.leave_home();
        assert!(!s.tick(s.generation(), true));
        assert_eq!(s.index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn interval_driver_ticks_every_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut driver = IntervalDriver::new(move |g| tx.send(g).is_ok());
        let handle = driver.start(BANNER_PERIOD, 7);

        tokio::time::sleep(BANNER_PERIOD / 2).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(BANNER_PERIOD).await;
        assert_eq!(rx.recv().await, Some(7));

        tokio::time::sleep(BANNER_PERIOD).await;
        assert_eq!(rx.recv().await, Some(7));

        drop(handle);
        drop(driver);
        tokio::time::sleep(BANNER_PERIOD * 3).await;
        // the task may have queued nothing further after cancellation
        while let Ok(g) = rx.try_recv() {
            assert_eq!(g, 7);
        }
        assert!(rx.recv().await.is_none());
    }
}
