use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Cell, Row, Table};

use crate::format::{format_kb, truncate_unicode};
use crate::report::visible_rows;
use crate::system::process::ProcessRecord;
use crate::ui::theme::Theme;

const NAME_WIDTH: usize = 40;

/// Renders as many rows as both `max_rows` and the area allow.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    processes: &[ProcessRecord],
    max_rows: usize,
    theme: &Theme,
) {
    // Two border rows plus the header row.
    let fits = usize::from(area.height.saturating_sub(3));
    let shown = visible_rows(processes.len(), max_rows).min(fits);

    let header = Row::new(["PID", "Memory(KB)", "Size", "Name"]).style(
        Style::default()
            .fg(theme.table_header)
            .add_modifier(Modifier::BOLD),
    );

    let rows = processes[..shown].iter().enumerate().map(|(i, p)| {
        let style = if i % 2 == 1 {
            Style::default().fg(theme.text_primary).bg(theme.row_alt_bg)
        } else {
            Style::default().fg(theme.text_primary)
        };
        Row::new([
            Cell::from(p.pid.to_string()),
            Cell::from(p.memory_kb.to_string()),
            Cell::from(format_kb(p.memory_kb)),
            Cell::from(truncate_unicode(&p.name, NAME_WIDTH)),
        ])
        .style(style)
    });

    let title = if shown < processes.len() {
        format!(" Processes ({shown} of {}) ", processes.len())
    } else {
        format!(" Processes ({}) ", processes.len())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(
            title,
            Style::default()
                .fg(theme.text_secondary)
                .add_modifier(Modifier::BOLD),
        ));

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Length(12),
            Constraint::Length(10),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .block(block)
    .column_spacing(1);

    frame.render_widget(table, area);
}
