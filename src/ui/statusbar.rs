use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{StatusKind, StatusMessage};
use crate::ui::theme::Theme;

pub fn render_command_line(frame: &mut Frame, area: Rect, input: &str, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled(
            " Command: ",
            Style::default()
                .fg(theme.prompt)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(input, Style::default().fg(theme.text_primary)),
        Span::styled("\u{2588}", Style::default().fg(theme.prompt)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    status_message: Option<&StatusMessage>,
    theme: &Theme,
) {
    let bg_style = Style::default().bg(theme.statusbar_bg);

    // Status message takes priority
    if let Some(msg) = status_message {
        let color = match msg.kind {
            StatusKind::Ok => theme.status_ok,
            StatusKind::Error => theme.status_err,
        };
        let line = Line::from(Span::styled(
            format!(" {}", msg.text),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(line).style(bg_style), area);
        return;
    }

    let mut spans = Vec::new();
    spans.extend(pill_spans("Enter", "Refresh", theme));
    spans.extend(pill_spans("m", "Sort by memory", theme));
    spans.extend(pill_spans("n", "No sort", theme));
    spans.extend(pill_spans("k <PID>", "Kill", theme));
    spans.extend(pill_spans("q", "Quit", theme));
    frame.render_widget(Paragraph::new(Line::from(spans)).style(bg_style), area);
}

fn pill_spans<'a>(key: &'a str, desc: &'a str, theme: &Theme) -> Vec<Span<'a>> {
    vec![
        Span::raw(" "),
        Span::styled(
            format!(" {key} "),
            Style::default()
                .fg(theme.pill_key_fg)
                .bg(theme.pill_key_bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {desc}"), Style::default().fg(theme.pill_desc_fg)),
    ]
}
