//! Cancellable scheduled tasks driven by the event loop clock.
//!
//! Timers never run callbacks on their own. The owner polls them with the
//! current [`Instant`] and performs its own transition when a poll reports
//! that the timer fired. A timer lives inside the controller it drives, so
//! tearing the controller down (or dropping it) cancels the timer with it.

use std::time::{Duration, Instant};

/// Periodic timer that fires once per elapsed period.
#[derive(Debug, Clone)]
pub struct Interval {
	period: Duration,
	next_due: Option<Instant>,
}

impl Interval {
	/// Start a timer whose first tick is due one period after `now`.
	///
	/// A zero period is bumped to one millisecond so a poll can never spin.
	#[must_use]
	pub fn start(period: Duration, now: Instant) -> Self {
		let period = period.max(Duration::from_millis(1));
		Self {
			period,
			next_due: Some(now + period),
		}
	}

	#[must_use]
	pub fn period(&self) -> Duration {
		self.period
	}

	#[must_use]
	pub fn is_active(&self) -> bool {
		self.next_due.is_some()
	}

	/// Instant of the next tick, if the timer is still running.
	#[must_use]
	pub fn next_due(&self) -> Option<Instant> {
		self.next_due
	}

	/// Report whether a tick is due at `now` and schedule the following one.
	///
	/// Missed periods collapse into a single tick.
	pub fn poll(&mut self, now: Instant) -> bool {
		let Some(due) = self.next_due else {
			return false;
		};
		if now < due {
			return false;
		}
		let mut next = due + self.period;
		if next <= now {
			next = now + self.period;
		}
		self.next_due = Some(next);
		true
	}

	/// Stop the timer; later polls never fire.
	pub fn cancel(&mut self) {
		self.next_due = None;
	}
}

/// One-shot timer.
#[derive(Debug, Clone, Default)]
pub struct Timeout {
	deadline: Option<Instant>,
}

impl Timeout {
	/// A timeout that is not scheduled.
	#[must_use]
	pub fn idle() -> Self {
		Self::default()
	}

	/// Arm (or re-arm) the timeout to fire `delay` after `now`.
	pub fn schedule(&mut self, delay: Duration, now: Instant) {
		self.deadline = Some(now + delay);
	}

	#[must_use]
	pub fn is_pending(&self) -> bool {
		self.deadline.is_some()
	}

	#[must_use]
	pub fn deadline(&self) -> Option<Instant> {
		self.deadline
	}

	/// Time left before the deadline, saturating at zero.
	#[must_use]
	pub fn remaining(&self, now: Instant) -> Option<Duration> {
		self.deadline
			.map(|deadline| deadline.saturating_duration_since(now))
	}

	/// Fire at most once when `now` reaches the deadline.
	pub fn poll(&mut self, now: Instant) -> bool {
		match self.deadline {
			Some(deadline) if now >= deadline => {
				self.deadline = None;
				true
			}
			_ => false,
		}
	}

	pub fn cancel(&mut self) {
		self.deadline = None;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const SECOND: Duration = Duration::from_secs(1);

	#[test]
	fn interval_fires_once_per_period() {
		let start = Instant::now();
		let mut interval = Interval::start(SECOND, start);

		assert!(!interval.poll(start));
		assert!(!interval.poll(start + Duration::from_millis(999)));
		assert!(interval.poll(start + SECOND));
		assert!(!interval.poll(start + SECOND));
		assert!(interval.poll(start + 2 * SECOND));
	}

	#[test]
	fn interval_collapses_missed_periods() {
		let start = Instant::now();
		let mut interval = Interval::start(SECOND, start);

		assert!(interval.poll(start + 5 * SECOND));
		assert!(!interval.poll(start + 5 * SECOND + Duration::from_millis(500)));
		assert_eq!(interval.next_due(), Some(start + 6 * SECOND));
	}

	#[test]
	fn cancelled_interval_never_fires() {
		let start = Instant::now();
		let mut interval = Interval::start(SECOND, start);
		interval.cancel();

		assert!(!interval.is_active());
		assert!(!interval.poll(start + 10 * SECOND));
	}

	#[test]
	fn timeout_fires_exactly_once() {
		let start = Instant::now();
		let mut timeout = Timeout::idle();
		assert!(!timeout.poll(start + SECOND));

		timeout.schedule(SECOND, start);
		assert!(timeout.is_pending());
		assert_eq!(timeout.remaining(start), Some(SECOND));
		assert!(!timeout.poll(start));
		assert!(timeout.poll(start + SECOND));
		assert!(!timeout.poll(start + 2 * SECOND));
		assert!(!timeout.is_pending());
	}

	#[test]
	fn cancelled_timeout_never_fires() {
		let start = Instant::now();
		let mut timeout = Timeout::idle();
		timeout.schedule(SECOND, start);
		timeout.cancel();

		assert!(!timeout.poll(start + 2 * SECOND));
	}
}
