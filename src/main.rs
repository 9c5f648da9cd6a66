use std::fs::File;
use std::io::stdout;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use ratatui::DefaultTerminal;

use symptom_intake::analysis::{AnalysisClient, HttpAnalysisClient, spawn_worker};
use symptom_intake::app::App;
use symptom_intake::config::load_config;
use symptom_intake::symptoms::Vocabulary;
use symptom_intake::wizard::Wizard;

/// How long to wait for input before ticking timers and worker outcomes
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Symptom intake wizard for the terminal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Config file (defaults to <config dir>/symptom-intake/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Analysis endpoint, overriding the config file
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the symptom vocabulary and exit
    #[arg(long)]
    list_symptoms: bool,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let cli = Cli::parse();
    let vocabulary = Vocabulary::default();

    if cli.list_symptoms {
        for symptom in vocabulary.entries() {
            println!("{symptom}");
        }
        return Ok(());
    }

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(endpoint) = cli.endpoint {
        config.analysis.endpoint = endpoint;
    }
    log::info!("Using analysis endpoint {}", config.analysis.endpoint);

    let (job_tx, job_rx) = mpsc::channel();
    let (outcome_tx, outcome_rx) = mpsc::channel();
    let client = HttpAnalysisClient::new(&config.analysis)
        .map(|client| Box::new(client) as Box<dyn AnalysisClient>);
    spawn_worker(client, job_rx, outcome_tx);

    let mut app = App::new(Wizard::new(vocabulary, config.overlay.blur_close_delay()));
    app.set_channels(job_tx, outcome_rx);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    let result = crossterm::execute!(stdout(), EnableMouseCapture)
        .map_err(Into::into)
        .and_then(|()| run(terminal, &mut app));

    // Restore terminal even if the loop failed
    let _ = crossterm::execute!(stdout(), DisableMouseCapture);
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(POLL_INTERVAL)? {
            let event = event::read()?;
            app.handle_event(event, Instant::now());
        }
        app.tick(Instant::now());

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
