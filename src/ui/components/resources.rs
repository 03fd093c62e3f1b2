use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::state::App;

use super::truncate_to_width;

/// Render the support-resource catalog.
pub(crate) fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title("Resources");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.resources.is_empty() {
        frame.render_widget(Paragraph::new("No resources found."), inner);
        return;
    }

    let width = inner.width as usize;
    let mut lines = Vec::new();
    for resource in &app.resources {
        let mut heading = vec![Span::styled(
            resource.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if let Some(kind) = &resource.kind {
            heading.push(Span::raw("  "));
            heading.push(Span::styled(
                format!("[{kind}]"),
                Style::default().fg(Color::DarkGray),
            ));
        }
        if !resource.region.is_empty() {
            heading.push(Span::raw("  "));
            heading.push(Span::styled(
                format!("[{}]", resource.region.join(", ")),
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines.push(Line::from(heading));

        if !resource.description_text().is_empty() {
            lines.push(Line::from(truncate_to_width(
                resource.description_text(),
                width,
            )));
        }
        lines.push(Line::from(Span::styled(
            resource.url.clone(),
            Style::default().fg(Color::Blue),
        )));
        lines.push(Line::default());
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
