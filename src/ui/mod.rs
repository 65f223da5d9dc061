pub mod header;
pub mod process_table;
pub mod statusbar;
pub mod theme;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::app::App;

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    header::render(frame, chunks[0], &app.snapshot, &app.theme);
    process_table::render(
        frame,
        chunks[1],
        &app.snapshot.processes,
        app.max_rows,
        &app.theme,
    );
    statusbar::render_command_line(frame, chunks[2], &app.input, &app.theme);
    statusbar::render(frame, chunks[3], app.status_message.as_ref(), &app.theme);
}
