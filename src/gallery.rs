//! Cyclic image index state for galleries and carousels.

use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

use crate::error::GalleryError;
use crate::timer::Interval;

/// Default auto-advance period for carousels.
pub const DEFAULT_AUTOPLAY_INTERVAL: Duration = Duration::from_millis(5000);

/// Index into an ordered, non-empty image sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gallery {
	index: usize,
	len: NonZeroUsize,
}

impl Gallery {
	#[must_use]
	pub fn new(len: NonZeroUsize) -> Self {
		Self { index: 0, len }
	}

	#[must_use]
	pub fn index(&self) -> usize {
		self.index
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.len.get()
	}

	/// Whether there is more than one image to cycle through.
	#[must_use]
	pub fn is_navigable(&self) -> bool {
		self.len.get() > 1
	}

	pub fn next(&mut self) {
		self.index = (self.index + 1) % self.len.get();
	}

	pub fn prev(&mut self) {
		let len = self.len.get();
		self.index = (self.index + len - 1) % len;
	}

	/// Jump directly to `index`, leaving the position untouched when it is out
	/// of range.
	pub fn jump_to(&mut self, index: usize) -> Result<(), GalleryError> {
		if index >= self.len.get() {
			return Err(GalleryError::OutOfRange {
				index,
				len: self.len.get(),
			});
		}
		self.index = index;
		Ok(())
	}

	/// Bind the gallery to a different sequence and start from its first image.
	pub fn retarget(&mut self, len: NonZeroUsize) {
		self.len = len;
		self.index = 0;
	}
}

/// A [`Gallery`] that can advance on its own.
#[derive(Debug, Clone)]
pub struct Carousel {
	gallery: Gallery,
	autoplay: Option<Interval>,
}

impl Carousel {
	/// A carousel that only moves when told to.
	#[must_use]
	pub fn manual(len: NonZeroUsize) -> Self {
		Self {
			gallery: Gallery::new(len),
			autoplay: None,
		}
	}

	/// A carousel that advances every `period`, starting from `now`.
	#[must_use]
	pub fn autoplay(len: NonZeroUsize, period: Duration, now: Instant) -> Self {
		Self {
			gallery: Gallery::new(len),
			autoplay: Some(Interval::start(period, now)),
		}
	}

	#[must_use]
	pub fn gallery(&self) -> &Gallery {
		&self.gallery
	}

	#[must_use]
	pub fn index(&self) -> usize {
		self.gallery.index()
	}

	#[must_use]
	pub fn is_playing(&self) -> bool {
		self.autoplay.as_ref().is_some_and(Interval::is_active)
	}

	pub fn next(&mut self) {
		self.gallery.next();
	}

	pub fn prev(&mut self) {
		self.gallery.prev();
	}

	pub fn jump_to(&mut self, index: usize) -> Result<(), GalleryError> {
		self.gallery.jump_to(index)
	}

	/// Advance once if the auto-advance period elapsed. Returns whether the
	/// index moved.
	pub fn tick(&mut self, now: Instant) -> bool {
		let fired = self
			.autoplay
			.as_mut()
			.is_some_and(|interval| interval.poll(now));
		if fired {
			self.gallery.next();
		}
		fired
	}

	/// Cancel auto-advance. Manual navigation keeps working.
	pub fn stop(&mut self) {
		if let Some(interval) = self.autoplay.as_mut() {
			interval.cancel();
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn len(n: usize) -> NonZeroUsize {
		NonZeroUsize::new(n).unwrap()
	}

	#[test]
	fn next_wraps_after_a_full_cycle() {
		let mut gallery = Gallery::new(len(4));
		for _ in 0..4 {
			gallery.next();
		}
		assert_eq!(gallery.index(), 0);
	}

	#[test]
	fn prev_from_start_goes_to_last() {
		let mut gallery = Gallery::new(len(3));
		gallery.prev();
		assert_eq!(gallery.index(), 2);
	}

	#[test]
	fn single_image_gallery_stays_put() {
		let mut gallery = Gallery::new(len(1));
		gallery.next();
		gallery.prev();
		assert_eq!(gallery.index(), 0);
		assert!(!gallery.is_navigable());
	}

	#[test]
	fn jump_out_of_range_is_rejected_without_moving() {
		let mut gallery = Gallery::new(len(3));
		gallery.jump_to(2).unwrap();
		assert_eq!(
			gallery.jump_to(3),
			Err(GalleryError::OutOfRange { index: 3, len: 3 })
		);
		assert_eq!(gallery.index(), 2);
	}

	#[test]
	fn retarget_resets_into_shorter_sequence() {
		let mut gallery = Gallery::new(len(5));
		gallery.jump_to(4).unwrap();
		gallery.retarget(len(2));
		assert_eq!(gallery.index(), 0);
		assert_eq!(gallery.len(), 2);
	}

	#[test]
	fn carousel_advances_on_each_elapsed_period() {
		let start = Instant::now();
		let mut carousel = Carousel::autoplay(len(3), DEFAULT_AUTOPLAY_INTERVAL, start);

		assert!(!carousel.tick(start + Duration::from_millis(4999)));
		assert!(carousel.tick(start + DEFAULT_AUTOPLAY_INTERVAL));
		assert_eq!(carousel.index(), 1);
		assert!(carousel.tick(start + 2 * DEFAULT_AUTOPLAY_INTERVAL));
		assert!(carousel.tick(start + 3 * DEFAULT_AUTOPLAY_INTERVAL));
		assert_eq!(carousel.index(), 0);
	}

	#[test]
	fn stopped_carousel_ignores_ticks() {
		let start = Instant::now();
		let mut carousel = Carousel::autoplay(len(3), DEFAULT_AUTOPLAY_INTERVAL, start);
		carousel.stop();

		assert!(!carousel.is_playing());
		assert!(!carousel.tick(start + 10 * DEFAULT_AUTOPLAY_INTERVAL));
		assert_eq!(carousel.index(), 0);

		carousel.next();
		assert_eq!(carousel.index(), 1);
	}

	#[test]
	fn manual_carousel_never_ticks() {
		let start = Instant::now();
		let mut carousel = Carousel::manual(len(2));
		assert!(!carousel.tick(start + Duration::from_secs(60)));
	}
}
