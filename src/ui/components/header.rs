use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use throbber_widgets_tui::Throbber;

use crate::ui::state::{App, Tab};

const TABS_WIDTH: u16 = 26;

/// Render the query input with the tab strip on the right.
pub(crate) fn render(frame: &mut Frame, area: Rect, app: &mut App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(TABS_WIDTH)])
        .split(area);

    let input_block = Block::default().borders(Borders::ALL).title("Search");
    let inner = input_block.inner(columns[0]);
    frame.render_widget(input_block, columns[0]);

    let query_line = Line::from(vec![
        Span::styled("> ", Style::default().fg(Color::Green)),
        Span::raw(app.input.value().to_string()),
        Span::styled("▏", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(query_line), inner);

    if app.loading {
        let throbber = Throbber::default().label("loading…");
        let spinner_area = Rect {
            x: inner.x + inner.width.saturating_sub(12),
            width: 12.min(inner.width),
            ..inner
        };
        frame.render_stateful_widget(throbber, spinner_area, &mut app.throbber_state);
    }

    let selected = match app.tab {
        Tab::Programmes => 0,
        Tab::Resources => 1,
    };
    let tabs = Tabs::new(vec!["Programmes", "Resources"])
        .select(selected)
        .highlight_style(Style::default().add_modifier(Modifier::BOLD).fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(tabs, columns[1]);
}

/// Render the bottom row: active filters, suggestion hints and key help.
pub(crate) fn render_hints(frame: &mut Frame, area: Rect, app: &App) {
    let hints = app.matching_suggestions(4);
    let line = if hints.is_empty() {
        let region = if app.region.is_empty() {
            "all".to_string()
        } else {
            app.region.clone()
        };
        format!(
            " paid-only:{} region:{} duration:{} · {} match(es) · ^P ^R ^D filters · Tab switch · Enter more · Esc quit",
            if app.paid_only { "on" } else { "off" },
            region,
            app.duration.label(),
            app.catalog.view_len(),
        )
    } else {
        format!(" try: {}", hints.join(", "))
    };

    frame.render_widget(
        Paragraph::new(line).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
