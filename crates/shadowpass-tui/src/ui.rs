//! UI rendering with Ratatui.

use crate::app::{App, InputMode, NoticeKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};
use shadowpass_core::Tier;

const HELP: &str =
    "g: generate | c: copy | s: save | x: clear | v: show/hide | e/l/t: edit | a: apply tag | q: quit";

/// Main render function.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Banner + tag
            Constraint::Min(8),    // Panels
            Constraint::Length(1), // Status line
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_controls(frame, app, panels[0]);
    render_log(frame, app, panels[1]);
    render_status(frame, app, chunks[2]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", app.session.banner_title()),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let editing = app.input_mode == InputMode::Tag;
    let tag = if editing {
        app.input.as_str()
    } else {
        app.session.tag_input()
    };
    let line = Line::from(vec![
        Span::styled("Tag: ", Style::default().fg(Color::DarkGray)),
        field_span(tag, editing, Color::White),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_controls(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Password ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Password
            Constraint::Length(1), // Strength label
            Constraint::Length(1), // Strength gauge
            Constraint::Length(1),
            Constraint::Length(1), // Length
            Constraint::Min(0),
        ])
        .split(inner);

    // Typing into a masked field stays masked
    let editing = app.input_mode == InputMode::Password;
    let password = if !editing {
        app.displayed_password()
    } else if app.session.visibility().is_masked() {
        "*".repeat(app.input.chars().count())
    } else {
        app.input.clone()
    };
    let line = Line::from(vec![
        Span::styled("▸ ", Style::default().fg(Color::Cyan)),
        field_span(&password, editing, Color::Yellow),
        Span::styled(
            format!("  [{}]", app.session.visibility().toggle_label()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), chunks[0]);

    let strength = app.session.strength();
    let color = tier_color(strength.tier());

    let label = Line::from(vec![
        Span::styled("Strength: ", Style::default().fg(Color::DarkGray)),
        Span::styled(strength.label(), Style::default().fg(color)),
    ]);
    frame.render_widget(Paragraph::new(label), chunks[1]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color).bg(Color::Black))
        .ratio(strength.fraction())
        .label(format!("{}/5", strength.score()));
    frame.render_widget(gauge, chunks[2]);

    let editing = app.input_mode == InputMode::Length;
    let length = if editing {
        app.input.as_str()
    } else {
        app.session.length_input()
    };
    let line = Line::from(vec![
        Span::styled("Len: ", Style::default().fg(Color::DarkGray)),
        field_span(length, editing, Color::White),
    ]);
    frame.render_widget(Paragraph::new(line), chunks[4]);
}

/// Render the most recent log lines that fit.
fn render_log(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Activity ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let entries = app.session.log().entries();
    let skip = entries.len().saturating_sub(inner.height as usize);
    let lines: Vec<Line> = entries[skip..]
        .iter()
        .map(|entry| Line::styled(entry.to_string(), Style::default().fg(Color::Green)))
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let line = if app.input_mode == InputMode::SavePath {
        Line::from(vec![
            Span::styled("Save to: ", Style::default().fg(Color::Magenta)),
            field_span(&app.input, true, Color::White),
            Span::styled("  (Enter: save | Esc: cancel)", Style::default().fg(Color::DarkGray)),
        ])
    } else if let Some(ref notice) = app.notice {
        let color = match notice.kind {
            NoticeKind::Info => Color::Green,
            NoticeKind::Warning => Color::Yellow,
            NoticeKind::Error => Color::Red,
        };
        Line::from(vec![
            Span::styled(
                format!("{}: ", notice.title),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(notice.message.as_str(), Style::default().fg(color)),
        ])
    } else if app.input_mode != InputMode::Normal {
        Line::styled(
            "Enter: submit | Esc: done",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Line::styled(HELP, Style::default().fg(Color::DarkGray))
    };

    frame.render_widget(Paragraph::new(line), area);
}

/// Field text, with a cursor while it is being edited.
fn field_span(text: &str, editing: bool, color: Color) -> Span<'static> {
    if editing {
        Span::styled(
            format!("{text}_"),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(text.to_string(), Style::default().fg(color))
    }
}

fn tier_color(tier: Tier) -> Color {
    match tier {
        Tier::Danger => Color::Red,
        Tier::Warning => Color::Yellow,
        Tier::Positive => Color::Green,
    }
}
