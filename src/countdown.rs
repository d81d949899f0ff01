use gloo_timers::callback::Interval;
use log::debug;
use std::fmt;

use crate::config;

/// Remaining registration time. Never negative, never above the start value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    seconds_remaining: u32,
}

impl Countdown {
    pub fn new() -> Self {
        Self::from_seconds(config::COUNTDOWN_START_SECONDS)
    }

    pub fn from_seconds(seconds: u32) -> Self {
        Self {
            seconds_remaining: seconds.min(config::COUNTDOWN_START_SECONDS),
        }
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn is_expired(&self) -> bool {
        self.seconds_remaining == 0
    }

    /// One elapsed second. Holds at zero.
    pub fn tick(self) -> Self {
        Self {
            seconds_remaining: self.seconds_remaining.saturating_sub(1),
        }
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_clock(self.seconds_remaining()))
    }
}

/// Renders seconds as `MM:SS`. There is no hour component.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Owned handle to the repeating tick. Dropping the inner handle cancels the
/// schedule, so the component holding the task stops ticking exactly when it
/// is torn down. `H` is a `gloo_timers` interval in the app.
pub struct CountdownTask<H = Interval> {
    handle: Option<H>,
}

impl CountdownTask<Interval> {
    pub fn start<F>(on_tick: F) -> Self
    where
        F: FnMut() + 'static,
    {
        debug!("Starting countdown task");
        Self::from_handle(Interval::new(config::COUNTDOWN_TICK_MILLIS, on_tick))
    }
}

impl<H> CountdownTask<H> {
    pub fn from_handle(handle: H) -> Self {
        Self {
            handle: Some(handle),
        }
    }

    pub fn cancel(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            debug!("Stopping countdown task");
            drop(handle);
        }
    }
}

impl<H> Drop for CountdownTask<H> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use std::rc::Rc;

    fn after(seconds: u32) -> Countdown {
        (0..seconds).fold(Countdown::new(), |countdown, _| countdown.tick())
    }

    #[test]
    fn starts_at_five_minutes() {
        assert_eq!(Countdown::new().seconds_remaining(), 300);
        assert_eq!(Countdown::new().to_string(), "05:00");
    }

    #[test]
    fn counts_down_once_per_tick() {
        assert_eq!(after(1).to_string(), "04:59");
        assert_eq!(after(61).to_string(), "03:59");
        assert_eq!(after(299).to_string(), "00:01");
    }

    #[test]
    fn follows_start_minus_elapsed_and_floors_at_zero() {
        for elapsed in [0, 1, 59, 60, 150, 299, 300, 301, 1_000] {
            let countdown = after(elapsed);
            assert_eq!(countdown.seconds_remaining(), 300u32.saturating_sub(elapsed));
            assert!(countdown.seconds_remaining() <= 300);
        }
    }

    #[test]
    fn ticks_after_expiry_are_no_ops() {
        let expired = after(300);
        assert!(expired.is_expired());
        assert_eq!(expired.tick(), expired);
        assert_eq!(expired.tick().tick().to_string(), "00:00");
    }

    #[test]
    fn formats_with_zero_padding() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(9), "00:09");
        assert_eq!(format_clock(60), "01:00");
        assert_eq!(format_clock(599), "09:59");
        assert_eq!(format_clock(5_999), "99:59");
    }

    #[test]
    fn clamps_to_start_value() {
        assert_eq!(Countdown::from_seconds(10_000).seconds_remaining(), 300);
    }

    /// Stands in for the interval; counts how often it was released.
    struct ReleaseCounter(Rc<Cell<u32>>);

    impl Drop for ReleaseCounter {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn cancel_releases_the_schedule_exactly_once() {
        let released = Rc::new(Cell::new(0));
        let task = CountdownTask::from_handle(ReleaseCounter(released.clone()));
        assert_eq!(released.get(), 0);

        task.cancel();
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn dropping_the_owner_releases_the_schedule() {
        let released = Rc::new(Cell::new(0));
        {
            let _task = CountdownTask::from_handle(ReleaseCounter(released.clone()));
        }
        assert_eq!(released.get(), 1);
    }
}
