use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use super::{App, PickOutcome};

/// Construct an [`App`] and run it to completion.
pub fn run(mut app: App<'_>) -> Result<PickOutcome> {
	app.run()
}

impl<'a> App<'a> {
	/// Pump the terminal event loop until the user finishes.
	///
	/// The terminal is restored and the input thread stopped on every exit
	/// path, including errors.
	pub fn run(&mut self) -> Result<PickOutcome> {
		let mut terminal = ratatui::init();

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let result = match terminal.clear() {
			Ok(()) => {
				self.mount();
				self.event_loop(&mut terminal, &event_rx)
			}
			Err(err) => Err(err.into()),
		};

		ratatui::restore();

		event_loop_running.store(false, Ordering::Relaxed);
		drop(event_rx);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		result
	}

	/// Drive the picker from `events` until an outcome is reached or
	/// something fails.
	pub(crate) fn event_loop<B: Backend>(
		&mut self,
		terminal: &mut Terminal<B>,
		events: &mpsc::Receiver<Event>,
	) -> Result<PickOutcome> {
		let mut pending_events = VecDeque::new();
		let mut needs_redraw = true;

		'event_loop: loop {
			if self.tick(Instant::now()) {
				needs_redraw = true;
			}

			loop {
				match events.try_recv() {
					Ok(Event::Resize(_, _)) => needs_redraw = true,
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						if pending_events.is_empty() {
							break 'event_loop Err(anyhow!("input event channel disconnected"));
						}
						break;
					}
				}
			}

			while let Some(event) = pending_events.pop_front() {
				if let Event::Key(key) = event
					&& key.kind == KeyEventKind::Press
				{
					needs_redraw = true;
					match self.handle_key(key, Instant::now()) {
						Ok(Some(outcome)) => break 'event_loop Ok(outcome),
						Ok(None) => {}
						Err(err) => break 'event_loop Err(err),
					}
				}
			}

			if needs_redraw {
				if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
					break 'event_loop Err(err.into());
				}
				needs_redraw = false;
			}

			thread::sleep(Duration::from_millis(16));
		}
	}
}

#[cfg(test)]
mod tests {
	use ratatui::backend::TestBackend;
	use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

	use super::*;
	use crate::catalog::Country;
	use crate::config::PickerConfig;
	use crate::picker::Picker;

	fn app() -> App<'static> {
		let mut picker = Picker::detached(PickerConfig::default());
		picker.load(
			vec![
				Country::new("France", "+33", "🇫🇷"),
				Country::new("Japan", "+81", "🇯🇵"),
			],
			Instant::now(),
		);
		App::with_picker(picker, Country::new("France", "+33", "🇫🇷"))
	}

	fn key(code: KeyCode) -> Event {
		Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
	}

	#[test]
	fn queued_keys_select_and_finish() {
		let mut app = app();
		let mut terminal = Terminal::new(TestBackend::new(48, 20)).expect("terminal");
		let (tx, rx) = mpsc::channel();
		for code in [KeyCode::Enter, KeyCode::Down, KeyCode::Enter, KeyCode::Char('q')] {
			tx.send(key(code)).unwrap();
		}

		let outcome = app.event_loop(&mut terminal, &rx).expect("outcome");
		assert!(outcome.accepted);
		assert!(outcome.changed);
		assert_eq!(outcome.country.name, "Japan");
	}

	#[test]
	fn closed_input_channel_ends_the_loop_with_an_error() {
		let mut app = app();
		let mut terminal = Terminal::new(TestBackend::new(48, 20)).expect("terminal");
		let (tx, rx) = mpsc::channel::<Event>();
		drop(tx);

		let err = app.event_loop(&mut terminal, &rx).unwrap_err();
		assert!(err.to_string().contains("disconnected"));
	}
}
