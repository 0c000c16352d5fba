//! Performance measurement tools.

use std::{
    fmt,
    sync::Mutex,
    time::{Duration, Instant},
};

/// A timer that can measure and average the time an operation takes.
///
/// Collected timings are averaged and reset when the timer is displayed using `{}`
/// ([`std::fmt::Display`]).
pub struct Timer {
    name: &'static str,
    state: Mutex<State>,
}

struct State {
    total: Duration,
    /// The number of time measurements that contributed to the current total.
    count: usize,
}

impl Timer {
    /// Creates a new timer.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: Mutex::new(State {
                total: Duration::ZERO,
                count: 0,
            }),
        }
    }

    /// Invokes a closure, measuring and recording the time it takes.
    pub fn time<T>(&self, timee: impl FnOnce() -> T) -> T {
        let _guard = self.start();
        timee()
    }

    /// Starts timing an operation using a drop guard.
    ///
    /// When the returned [`TimerGuard`] is dropped, the time between the call to `start` and the
    /// drop is measured and recorded.
    pub fn start(&self) -> TimerGuard<'_> {
        TimerGuard {
            start: Instant::now(),
            timer: self,
        }
    }

    fn stop(&self, start: Instant) {
        let duration = start.elapsed();
        let mut state = self.state.lock().unwrap();
        state.total += duration;
        state.count += 1;
    }
}

/// Displays the average recorded time and resets it.
impl fmt::Display for Timer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut state = self.state.lock().unwrap();
        let avg = if state.count == 0 {
            Duration::ZERO
        } else {
            state.total / state.count as u32
        };
        write!(f, "{}: {:.1?}/{}", self.name, avg, state.count)?;
        state.total = Duration::ZERO;
        state.count = 0;
        Ok(())
    }
}

/// Guard returned by [`Timer::start`]. Records the elapsed time when dropped.
pub struct TimerGuard<'a> {
    start: Instant,
    timer: &'a Timer,
}

impl Drop for TimerGuard<'_> {
    fn drop(&mut self) {
        self.timer.stop(self.start);
    }
}
