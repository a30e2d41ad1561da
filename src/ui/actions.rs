use std::time::Instant;

use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, PickOutcome};
use crate::catalog::Country;
use crate::picker::{PickerEvent, PickerProps};

impl<'a> App<'a> {
	pub(crate) fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Result<Option<PickOutcome>> {
		if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
			return Ok(Some(self.outcome(false)));
		}

		let current = self.selected.clone();
		let mut chosen: Option<Country> = None;
		let mut on_select = |country: Country| chosen = Some(country);
		let mut props = PickerProps {
			selected: &current,
			on_select: &mut on_select,
		};
		let event = self.picker.handle_key(key, &mut props, now);
		drop(props);

		if let Some(country) = chosen {
			self.selected = country;
		}

		match event {
			PickerEvent::Ignored if !self.picker.is_open() => match key.code {
				KeyCode::Char('q') | KeyCode::Esc => Ok(Some(self.outcome(true))),
				_ => Ok(None),
			},
			_ => Ok(None),
		}
	}
}
