//! Drawing for the summarizer view.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::summarizer::SummarizerState;
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_TEXT, PLACEHOLDER_TEXT, STATUS_ERROR, STATUS_NOTICE, STATUS_OK,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const INPUT_PLACEHOLDER: &str = "Paste your article, blog post, or paragraph here...";
const SUMMARY_PLACEHOLDER: &str = "The summary will appear here.";

pub fn draw(frame: &mut Frame<'_>, state: &SummarizerState) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // header
            Constraint::Percentage(40), // input
            Constraint::Length(1),      // status line
            Constraint::Min(3),         // summary
            Constraint::Length(3),      // footer
        ])
        .split(area);

    draw_header(frame, chunks[0]);
    draw_input(frame, chunks[1], state);
    draw_status(frame, chunks[2], state);
    draw_summary(frame, chunks[3], state);
    draw_footer(frame, chunks[4]);
}

fn draw_header(frame: &mut Frame<'_>, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            " brevity ",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "— summarize your content instantly",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
        ),
    ]);

    frame.render_widget(
        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        area,
    );
}

fn draw_input(frame: &mut Frame<'_>, area: Rect, state: &SummarizerState) {
    let block = Block::default()
        .title(" Input ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    let paragraph = if state.input.is_empty() {
        Paragraph::new(INPUT_PLACEHOLDER).style(Style::default().fg(PLACEHOLDER_TEXT))
    } else {
        Paragraph::new(state.input.as_str()).style(Style::default().fg(HEADER_TEXT))
    };

    frame.render_widget(paragraph.block(block).wrap(Wrap { trim: false }), area);
}

fn draw_status(frame: &mut Frame<'_>, area: Rect, state: &SummarizerState) {
    let line = if state.loading {
        let frame_idx = state.animation_tick as usize % SPINNER_FRAMES.len();
        Line::from(vec![
            Span::styled(
                format!(" {} ", SPINNER_FRAMES[frame_idx]),
                Style::default().fg(ACCENT),
            ),
            Span::styled("Summarizing...", Style::default().fg(HEADER_TEXT)),
        ])
    } else if let Some(error) = &state.error {
        Line::from(Span::styled(
            format!(" ✗ {}", error),
            Style::default().fg(STATUS_ERROR),
        ))
    } else if let Some(notice) = &state.notice {
        Line::from(Span::styled(
            format!(" ! {}", notice),
            Style::default().fg(STATUS_NOTICE),
        ))
    } else {
        Line::from(Span::styled(
            " Ready",
            Style::default().fg(PLACEHOLDER_TEXT),
        ))
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn draw_summary(frame: &mut Frame<'_>, area: Rect, state: &SummarizerState) {
    let title = if state.copied {
        Line::from(vec![
            Span::raw(" Summary "),
            Span::styled("✓ Copied ", Style::default().fg(STATUS_OK)),
        ])
    } else {
        Line::from(" Summary ")
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    let paragraph = match &state.summary {
        Some(summary) if !summary.is_empty() => {
            Paragraph::new(summary.as_str()).style(Style::default().fg(HEADER_TEXT))
        }
        _ => Paragraph::new(SUMMARY_PLACEHOLDER).style(Style::default().fg(PLACEHOLDER_TEXT)),
    };

    frame.render_widget(paragraph.block(block).wrap(Wrap { trim: false }), area);
}

fn draw_footer(frame: &mut Frame<'_>, area: Rect) {
    let hints = " Ctrl+S: Summarize │ Ctrl+Y: Copy │ Ctrl+X: Clear │ Esc: Dismiss │ Ctrl+Q: Quit";
    let version = format!("v{} ", VERSION);

    // Pad with char count, not byte count (hints contain Unicode).
    let hints_width = hints.chars().count();
    let version_width = version.chars().count();
    let content_width = area.width.saturating_sub(2) as usize;
    let padding = content_width
        .saturating_sub(hints_width)
        .saturating_sub(version_width);

    let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

    let line = Line::from(vec![
        Span::styled(hints, text_style),
        Span::styled(" ".repeat(padding), text_style),
        Span::styled(version, text_style),
    ]);

    frame.render_widget(
        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            ),
        area,
    );
}
