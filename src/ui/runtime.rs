use std::collections::VecDeque;
use std::io::stdout;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;

use super::App;
use crate::SessionOutcome;

/// Runs its closure when dropped, so early returns still restore the terminal.
struct RestoreOnDrop<F: FnOnce()>(Option<F>);

impl<F: FnOnce()> RestoreOnDrop<F> {
	fn new(restore: F) -> Self {
		Self(Some(restore))
	}
}

impl<F: FnOnce()> Drop for RestoreOnDrop<F> {
	fn drop(&mut self) {
		if let Some(restore) = self.0.take() {
			restore();
		}
	}
}

impl<'a> App<'a> {
	/// Pump the terminal event loop until the user exits.
	pub fn run(&mut self) -> Result<SessionOutcome> {
		let mut terminal = ratatui::init();
		let _restore = RestoreOnDrop::new(|| {
			let _ = execute!(stdout(), DisableMouseCapture);
			ratatui::restore();
		});
		execute!(stdout(), EnableMouseCapture)?;
		terminal.clear()?;

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

		let mut pending_events = VecDeque::new();

		let result: Result<SessionOutcome> = 'event_loop: loop {
			self.pump_search_results();
			self.throbber_state.calc_next();

			loop {
				match event_rx.try_recv() {
					Ok(Event::Resize(_, _)) => {}
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
				break 'event_loop Err(err.into());
			}

			let mut maybe_outcome = None;
			while let Some(event) = pending_events.pop_front() {
				match event {
					Event::Key(key) if key.kind == KeyEventKind::Press => {
						match self.handle_key(key) {
							Ok(Some(outcome)) => {
								maybe_outcome = Some(outcome);
								break;
							}
							Ok(None) => {}
							Err(err) => break 'event_loop Err(err),
						}
					}
					Event::Mouse(mouse) => self.handle_mouse(mouse),
					_ => {}
				}
			}

			if let Some(outcome) = maybe_outcome {
				break Ok(outcome);
			}

			thread::sleep(Duration::from_millis(16));
		};

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		result
	}
}

#[cfg(test)]
mod tests {
	use std::cell::Cell;

	use super::*;

	#[test]
	fn restore_runs_when_setup_bails_out() {
		let restored = Cell::new(false);
		let setup = || -> Result<()> {
			let _restore = RestoreOnDrop::new(|| restored.set(true));
			Err(anyhow!("mouse capture unavailable"))
		};
		assert!(setup().is_err());
		assert!(restored.get());
	}
}
