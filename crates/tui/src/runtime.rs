//! Terminal setup and the event loop.

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
use tracing::debug;

use crate::{App, FinderOutcome};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

impl App<'_> {
	/// Take over the terminal until the user leaves the finder.
	pub fn run(&mut self) -> Result<FinderOutcome> {
		let mut terminal = ratatui::init();
		terminal.clear()?;
		execute!(stdout(), EnableMouseCapture)?;

		let (event_tx, event_rx) = mpsc::channel();
		let running = Arc::new(AtomicBool::new(true));
		let running_flag = Arc::clone(&running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while running_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending = VecDeque::new();
		let result: Result<FinderOutcome> = 'event_loop: loop {
			loop {
				match event_rx.try_recv() {
					Ok(event) => pending.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			let now = Instant::now();
			let mut outcome = None;
			while let Some(event) = pending.pop_front() {
				match event {
					Event::Key(key) if key.kind == KeyEventKind::Press => {
						outcome = self.handle_key(key, now);
						if outcome.is_some() {
							break;
						}
					}
					Event::Mouse(mouse) => self.handle_mouse(mouse, now),
					_ => {}
				}
			}
			if let Some(outcome) = outcome {
				break Ok(outcome);
			}

			if self.tick(now) {
				debug!("copy notice expired");
			}
			if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
				break Err(err.into());
			}

			thread::sleep(FRAME_INTERVAL);
		};

		let reader = stop_reader(&running, event_thread);

		ratatui::restore();
		execute!(stdout(), DisableMouseCapture)?;
		match reader {
			Ok(reader_result) => reader_result?,
			Err(panic) => std::panic::resume_unwind(panic),
		}

		result
	}
}

type ReaderJoin = thread::Result<Result<()>>;

/// Signal the input reader to stop and wait for it, before the terminal is
/// restored.
fn stop_reader(running: &AtomicBool, reader: thread::JoinHandle<Result<()>>) -> ReaderJoin {
	running.store(false, Ordering::Relaxed);
	reader.join()
}
