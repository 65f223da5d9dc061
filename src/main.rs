use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use color_eyre::Result;
use color_eyre::eyre::eyre;
use proctop::app::App;
use proctop::config::{Config, load_config, load_config_from_path};
use proctop::event::{Event, next_event};
use proctop::system::collector::Collector;
use proctop::system::snapshot::SortMode;
use proctop::system::source::ProcFs;
use proctop::{logging, report, ui};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SortArg {
    None,
    Memory,
}

impl SortArg {
    fn config_str(self) -> &'static str {
        match self {
            SortArg::None => "none",
            SortArg::Memory => "memory",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(
    name = "proctop",
    about = "Interactive process and resource monitor driven by typed commands"
)]
struct Cli {
    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial sort order
    #[arg(long, value_enum)]
    sort: Option<SortArg>,

    /// Root of the procfs mount to read
    #[arg(long)]
    proc_root: Option<PathBuf>,

    /// Maximum process rows to display (0 = no cap)
    #[arg(long)]
    max_rows: Option<usize>,

    /// Color theme: dark, light
    #[arg(long)]
    theme: Option<String>,

    /// Print one snapshot to stdout and exit.
    #[arg(long, default_value_t = false)]
    once: bool,

    /// Output format for --once.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write JSON logs to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level for --log-file.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        logging::init_file_logging(path, &cli.log_level)?;
    }
    let config = load_config_for_cli(&cli);
    tracing::info!(
        proc_root = %config.general.proc_root.display(),
        sort = %config.general.default_sort,
        "starting"
    );

    if cli.once {
        return run_once(&config, cli.format);
    }

    let app = App::new(&config);
    let mut terminal = ratatui::try_init()?;
    let result = run(&mut terminal, app);
    ratatui::restore();
    result?;

    println!("Exiting proctop.");
    Ok(())
}

fn run(terminal: &mut ratatui::DefaultTerminal, mut app: App) -> Result<()> {
    terminal.draw(|frame| ui::draw(frame, &app))?;

    while app.running {
        match next_event()? {
            Event::Key(key) => app.handle_key(key),
            Event::Resize => {}
        }
        if app.running {
            terminal.draw(|frame| ui::draw(frame, &app))?;
        }
    }

    Ok(())
}

fn run_once(config: &Config, format: OutputFormat) -> Result<()> {
    let mut collector = Collector::new(ProcFs::new(&config.general.proc_root));
    std::thread::sleep(Duration::from_millis(config.general.once_delay_ms));
    let snapshot = collector.refresh(SortMode::from_str_config(&config.general.default_sort));

    match format {
        OutputFormat::Text => {
            print!("{}", report::render_text(&snapshot, config.general.max_rows));
        }
        OutputFormat::Json => {
            let json = report::render_json(&snapshot)
                .map_err(|e| eyre!("failed to encode snapshot: {e}"))?;
            println!("{json}");
        }
    }
    Ok(())
}

fn load_config_for_cli(cli: &Cli) -> Config {
    let mut config = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };

    if let Some(sort) = cli.sort {
        config.general.default_sort = sort.config_str().to_string();
    }
    if let Some(ref root) = cli.proc_root {
        config.general.proc_root = root.clone();
    }
    if let Some(rows) = cli.max_rows {
        config.general.max_rows = rows;
    }
    if let Some(ref theme) = cli.theme {
        config.colors.theme = theme.clone();
    }

    config
}
