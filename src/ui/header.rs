use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

use crate::system::snapshot::Snapshot;
use crate::ui::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, snapshot: &Snapshot, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ])
        .split(area);

    render_branding(frame, chunks[0], snapshot, theme);
    render_cpu_gauge(frame, chunks[1], snapshot, theme);
    render_ram_gauge(frame, chunks[2], snapshot, theme);
}

fn bordered(theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
}

fn render_branding(frame: &mut Frame, area: Rect, snapshot: &Snapshot, theme: &Theme) {
    let block = bordered(theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = Line::from(vec![
        Span::styled(
            " proctop ",
            Style::default()
                .fg(theme.header_accent_fg)
                .bg(theme.header_accent_bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("Procs: {}", snapshot.processes.len()),
            Style::default().fg(theme.text_secondary),
        ),
        Span::raw("  "),
        Span::styled(
            format!("Sort: {}", snapshot.sort_mode.label()),
            Style::default().fg(theme.text_secondary),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), inner);
}

fn render_cpu_gauge(frame: &mut Frame, area: Rect, snapshot: &Snapshot, theme: &Theme) {
    let percent = snapshot.cpu_usage_percent.clamp(0.0, 100.0);
    let gauge = Gauge::default()
        .block(bordered(theme).title(title(" CPU ", theme)))
        .gauge_style(Style::default().fg(theme.gauge_cpu).bg(theme.gauge_unfilled))
        .ratio(f64::from(percent) / 100.0)
        .label(format!("{percent:.1}%"));
    frame.render_widget(gauge, area);
}

fn render_ram_gauge(frame: &mut Frame, area: Rect, snapshot: &Snapshot, theme: &Theme) {
    let memory = &snapshot.memory;
    let ratio = memory.used_ratio();
    let gauge = Gauge::default()
        .block(bordered(theme).title(title(" RAM ", theme)))
        .gauge_style(
            Style::default()
                .fg(theme.gauge_memory)
                .bg(theme.gauge_unfilled),
        )
        .ratio(ratio)
        .label(format!(
            "{}/{} MB ({:.0}%)",
            memory.used_mb(),
            memory.total_mb,
            ratio * 100.0
        ));
    frame.render_widget(gauge, area);
}

fn title<'a>(text: &'a str, theme: &Theme) -> Span<'a> {
    Span::styled(
        text,
        Style::default()
            .fg(theme.text_secondary)
            .add_modifier(Modifier::BOLD),
    )
}
