use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::catalog::normalize::to_hashtag;
use crate::types::Program;
use crate::ui::state::App;

use super::truncate_to_width;

/// Render the visible window of the programme view as a card list.
pub(crate) fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title("Programmes");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.loading {
        frame.render_widget(Paragraph::new("Loading programmes…"), inner);
        return;
    }

    if let Some(status) = &app.status {
        frame.render_widget(
            Paragraph::new(status.as_str()).style(Style::default().fg(Color::Red)),
            inner,
        );
        return;
    }

    if app.catalog.view_len() == 0 {
        frame.render_widget(
            Paragraph::new("No programmes match your filters. Try clearing filters."),
            inner,
        );
        return;
    }

    let width = inner.width as usize;
    let mut lines = Vec::new();
    for program in app.catalog.visible() {
        lines.extend(card_lines(program, width));
    }

    if !app.catalog.is_exhausted() {
        let remaining = app.catalog.view_len() - app.catalog.visible().count();
        lines.push(Line::from(Span::styled(
            format!("— press Enter to load more ({remaining} remaining) —"),
            Style::default().fg(Color::Yellow),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn card_lines(program: &Program, width: usize) -> Vec<Line<'static>> {
    let title = if program.title_text().is_empty() {
        "Untitled"
    } else {
        program.title_text()
    };
    let heading = Line::from(vec![
        Span::styled(
            title.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            program.company_text().to_string(),
            Style::default().fg(Color::Cyan),
        ),
    ]);

    let weeks = match program.duration_weeks {
        0 => "—".to_string(),
        weeks => format!("{weeks} wks"),
    };
    let regions = if program.region.is_empty() {
        "—".to_string()
    } else {
        program.region.join(", ")
    };
    let meta = Line::from(Span::styled(
        format!(
            "[{}] [{weeks}] [{regions}]",
            if program.paid { "Paid" } else { "Unpaid/Varies" }
        ),
        Style::default().fg(Color::DarkGray),
    ));

    let mut lines = vec![heading];
    if !program.description_text().is_empty() {
        lines.push(Line::from(truncate_to_width(
            program.description_text(),
            width,
        )));
    }
    lines.push(meta);

    let hashtags: Vec<String> = program
        .tags
        .iter()
        .map(|tag| to_hashtag(tag))
        .filter(|tag| !tag.is_empty())
        .collect();
    if !hashtags.is_empty() {
        lines.push(Line::from(Span::styled(
            hashtags.join(" "),
            Style::default().fg(Color::Magenta),
        )));
    }

    lines.push(Line::default());
    lines
}
