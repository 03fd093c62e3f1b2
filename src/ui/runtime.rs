use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use crate::catalog::FilterInput;

use super::state::{App, DatasetUpdate};

/// Construct an [`App`] for the provided filter, attach the dataset channel
/// and run it to completion.
pub fn run(filter: FilterInput, updates: mpsc::Receiver<DatasetUpdate>) -> Result<()> {
    let mut app = App::new(filter);
    app.attach_updates(updates);
    let result = app.run();
    ratatui::restore();
    result
}

impl App {
    /// Pump the terminal event loop until the user exits.
    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::init();
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

        let result: Result<()> = 'event_loop: loop {
            self.pump_updates();
            if self.loading {
                self.throbber_state.calc_next();
            }

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

            terminal.draw(|frame| self.draw(frame))?;

            let mut should_exit = false;
            while let Some(event) = pending_events.pop_front() {
                if let Event::Key(key) = event
                    && key.kind == KeyEventKind::Press
                    && self.handle_key(key)
                {
                    should_exit = true;
                    break;
                }
            }

            if should_exit {
                break Ok(());
            }

            thread::sleep(Duration::from_millis(15));
        };

        event_loop_running.store(false, Ordering::Relaxed);
        match event_thread.join() {
            Ok(thread_result) => thread_result?,
            Err(_) => return Err(anyhow!("input event thread panicked")),
        }

        result
    }
}
