use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use super::components::{header, programs, resources};
use super::state::{App, Tab};

impl App {
    /// Draw the whole application: header row, body pane and key hints.
    pub fn draw(&mut self, frame: &mut Frame) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(frame.area());

        header::render(frame, rows[0], self);

        match self.tab {
            Tab::Programmes => programs::render(frame, rows[1], self),
            Tab::Resources => resources::render(frame, rows[1], self),
        }

        header::render_hints(frame, rows[2], self);
    }
}
