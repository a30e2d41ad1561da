use std::ops::Range;

/// Scroll position of a fixed-height viewport that follows a cursor.
///
/// Only the rows inside [`Window::follow`]'s range are materialized when the
/// list is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Window {
	offset: usize,
}

impl Window {
	pub fn offset(&self) -> usize {
		self.offset
	}

	pub fn reset(&mut self) {
		self.offset = 0;
	}

	/// Scroll the minimum amount needed to keep `cursor` visible.
	///
	/// `cursor` is `None` when the cursor is outside this list; the offset is
	/// then only clamped to the content.
	pub fn follow(&mut self, cursor: Option<usize>, len: usize, height: usize) -> Range<usize> {
		if len == 0 || height == 0 {
			self.offset = 0;
			return 0..0;
		}

		if let Some(cursor) = cursor {
			if cursor < self.offset {
				self.offset = cursor;
			} else if cursor >= self.offset + height {
				self.offset = cursor + 1 - height;
			}
		}

		let max_offset = len.saturating_sub(height);
		self.offset = self.offset.min(max_offset);
		self.offset..(self.offset + height).min(len)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn short_lists_fit_entirely() {
		let mut window = Window::default();
		assert_eq!(window.follow(Some(2), 4, 10), 0..4);
	}

	#[test]
	fn scrolls_down_only_when_cursor_leaves_view() {
		let mut window = Window::default();
		assert_eq!(window.follow(Some(4), 100, 5), 0..5);
		assert_eq!(window.follow(Some(5), 100, 5), 1..6);
		assert_eq!(window.follow(Some(3), 100, 5), 1..6);
		assert_eq!(window.follow(Some(0), 100, 5), 0..5);
	}

	#[test]
	fn clamps_when_list_shrinks() {
		let mut window = Window::default();
		window.follow(Some(90), 100, 5);
		assert_eq!(window.offset(), 86);
		assert_eq!(window.follow(None, 3, 5), 0..3);
	}

	#[test]
	fn empty_viewport_renders_nothing() {
		let mut window = Window::default();
		assert_eq!(window.follow(Some(1), 10, 0), 0..0);
		assert_eq!(window.follow(Some(1), 0, 5), 0..0);
	}
}
