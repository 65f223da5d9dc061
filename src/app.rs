use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::action::{Action, parse_command};
use crate::config::Config;
use crate::system::collector::Collector;
use crate::system::kill::terminate_process;
use crate::system::snapshot::{SortMode, Snapshot};
use crate::system::source::ProcFs;
use crate::ui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Ok,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    fn ok(text: impl Into<String>) -> Self {
        StatusMessage {
            kind: StatusKind::Ok,
            text: text.into(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        StatusMessage {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

/// Interactive state: the collector (and its CPU baseline), the sort mode,
/// the command line being typed, and the snapshot on screen.
pub struct App {
    pub running: bool,
    pub collector: Collector,
    pub snapshot: Snapshot,
    pub sort_mode: SortMode,
    pub input: String,
    pub status_message: Option<StatusMessage>,
    pub max_rows: usize,
    pub theme: Theme,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let collector = Collector::new(ProcFs::new(&config.general.proc_root));
        let sort_mode = SortMode::from_str_config(&config.general.default_sort);
        let theme = Theme::from_config(&config.colors.theme);
        Self::with_collector(collector, sort_mode, config.general.max_rows, theme)
    }

    /// Takes the first snapshot straight away, so there is always something
    /// to draw.
    pub fn with_collector(
        mut collector: Collector,
        sort_mode: SortMode,
        max_rows: usize,
        theme: Theme,
    ) -> Self {
        let snapshot = collector.refresh(sort_mode);
        App {
            running: true,
            collector,
            snapshot,
            sort_mode,
            input: String::new(),
            status_message: None,
            max_rows,
            theme,
        }
    }

    pub fn refresh_data(&mut self) {
        self.snapshot = self.collector.refresh(self.sort_mode);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        // Ctrl+C always quits, whatever is on the command line.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.running = false;
            return;
        }

        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Esc => self.input.clear(),
            KeyCode::Char(c) => self.input.push(c),
            _ => {}
        }
    }

    /// Runs the typed command line. Every command except quit ends with a
    /// fresh snapshot.
    pub fn submit(&mut self) {
        let line = std::mem::take(&mut self.input);
        match parse_command(&line) {
            Ok(action) => self.dispatch(action),
            Err(err) => {
                tracing::debug!(input = %line, error = %err, "rejected command");
                self.status_message = Some(StatusMessage::error(err.to_string()));
                self.refresh_data();
            }
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => {
                self.running = false;
                return;
            }
            Action::Refresh => {
                self.status_message = None;
            }
            Action::SetSort(mode) => {
                self.sort_mode = mode;
                self.status_message = Some(StatusMessage::ok(format!("Sort: {}", mode.label())));
            }
            Action::Kill(pid) => {
                self.status_message = Some(match terminate_process(pid) {
                    Ok(()) => {
                        tracing::info!(pid, "process killed");
                        StatusMessage::ok(format!("Process {pid} killed."))
                    }
                    Err(err) => {
                        tracing::info!(pid, cause = %err.cause, "kill failed");
                        StatusMessage::error(err.to_string())
                    }
                });
            }
        }
        self.refresh_data();
    }
}
