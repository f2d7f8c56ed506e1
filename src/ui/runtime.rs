use std::collections::VecDeque;
use std::io::stdout;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;
use tracing::{debug, info};

use super::App;
use super::state::{AppOptions, Flow};
use crate::catalog::CatalogSet;
use crate::outcome::SessionOutcome;

const INPUT_POLL: Duration = Duration::from_millis(50);
const FRAME_DELAY: Duration = Duration::from_millis(16);

/// Construct an [`App`] for the catalogues and run it to completion.
pub fn run(catalogs: CatalogSet, options: AppOptions) -> Result<SessionOutcome> {
	let mut app = App::new(catalogs, options, Instant::now());
	app.run()
}

impl App {
	/// Pump the terminal event loop until the user quits.
	pub fn run(&mut self) -> Result<SessionOutcome> {
		let mut terminal = ratatui::init();
		terminal.clear()?;
		if let Err(err) = execute!(stdout(), EnableMouseCapture) {
			debug!(%err, "mouse capture unavailable");
		}
		info!(tab = %self.tab, "session started");

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(INPUT_POLL)? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending_events = VecDeque::new();

		let result: Result<()> = 'event_loop: loop {
			self.throbber_state.calc_next();
			self.tick(Instant::now());

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
				break Err(err.into());
			}

			let mut quit = false;
			while let Some(event) = pending_events.pop_front() {
				let now = Instant::now();
				match event {
					Event::Key(key) if key.kind == KeyEventKind::Press => {
						if self.handle_key(key, now) == Flow::Quit {
							quit = true;
							break;
						}
					}
					Event::Mouse(mouse) => self.handle_mouse(mouse, now),
					_ => {}
				}
			}

			if quit {
				break Ok(());
			}

			thread::sleep(FRAME_DELAY);
		};

		if let Err(err) = execute!(stdout(), DisableMouseCapture) {
			debug!(%err, "failed to release mouse capture");
		}
		ratatui::restore();

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		result?;
		let outcome = self.finish();
		info!(
			links = outcome.links.len(),
			inquiries = outcome.inquiries.len(),
			"session finished"
		);
		Ok(outcome)
	}
}
