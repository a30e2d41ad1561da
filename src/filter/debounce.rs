use std::time::{Duration, Instant};

/// Quiet period used by the picker unless configured otherwise.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

struct Pending<T> {
	value: T,
	deadline: Instant,
	revision: u64,
}

/// A single cancellable delayed value.
///
/// Scheduling replaces whatever is pending and restarts the quiet period, so
/// only the most recently scheduled value can ever be released. Time is passed
/// in by the caller; the event loop polls once per tick.
pub struct Debouncer<T> {
	delay: Duration,
	pending: Option<Pending<T>>,
	revision: u64,
}

impl<T> Debouncer<T> {
	pub fn new(delay: Duration) -> Self {
		Self {
			delay,
			pending: None,
			revision: 0,
		}
	}

	/// Replace any pending value and restart the timer. Returns its revision.
	pub fn schedule(&mut self, value: T, now: Instant) -> u64 {
		self.revision = self.revision.wrapping_add(1);
		self.pending = Some(Pending {
			value,
			deadline: now + self.delay,
			revision: self.revision,
		});
		self.revision
	}

	/// Release the pending value if its quiet period has elapsed.
	pub fn poll(&mut self, now: Instant) -> Option<(u64, T)> {
		match &self.pending {
			Some(pending) if now >= pending.deadline => self
				.pending
				.take()
				.map(|pending| (pending.revision, pending.value)),
			_ => None,
		}
	}

	pub fn cancel(&mut self) {
		self.pending = None;
	}

	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}

	pub fn deadline(&self) -> Option<Instant> {
		self.pending.as_ref().map(|pending| pending.deadline)
	}

	/// Revision handed out by the most recent [`schedule`](Self::schedule).
	pub fn latest_revision(&self) -> u64 {
		self.revision
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const DELAY: Duration = Duration::from_millis(300);

	#[test]
	fn releases_after_quiet_period() {
		let start = Instant::now();
		let mut debouncer = Debouncer::new(DELAY);
		debouncer.schedule("fr", start);

		assert!(debouncer.poll(start + Duration::from_millis(299)).is_none());
		let (_, value) = debouncer.poll(start + DELAY).expect("released");
		assert_eq!(value, "fr");
		assert!(!debouncer.is_pending());
		assert!(debouncer.poll(start + DELAY * 2).is_none());
	}

	#[test]
	fn rescheduling_restarts_the_timer_and_keeps_last_value() {
		let start = Instant::now();
		let mut debouncer = Debouncer::new(DELAY);
		debouncer.schedule("f", start);
		let later = start + Duration::from_millis(200);
		let revision = debouncer.schedule("fr", later);

		assert!(debouncer.poll(start + DELAY).is_none());
		assert_eq!(debouncer.deadline(), Some(later + DELAY));

		let (released, value) = debouncer.poll(later + DELAY).expect("released");
		assert_eq!(released, revision);
		assert_eq!(value, "fr");
	}

	#[test]
	fn cancel_drops_pending_value() {
		let start = Instant::now();
		let mut debouncer = Debouncer::new(DELAY);
		debouncer.schedule(1, start);
		debouncer.cancel();
		assert!(debouncer.poll(start + DELAY).is_none());
		assert_eq!(debouncer.latest_revision(), 1);
	}

	#[test]
	fn zero_delay_releases_on_next_poll() {
		let start = Instant::now();
		let mut debouncer = Debouncer::new(Duration::ZERO);
		debouncer.schedule('x', start);
		assert_eq!(debouncer.poll(start).map(|(_, value)| value), Some('x'));
	}
}
