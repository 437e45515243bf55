use std::{collections::HashSet, io, path::PathBuf, sync::Arc, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tokio::sync::mpsc;

use nfl_predictor::app::{load_schedule, App, Update};
use nfl_predictor::data::{DataClient, Source};
use nfl_predictor::logos::LogoStore;
use nfl_predictor::ui::ui;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Predictions document: a file path or an http(s) URL
    #[arg(short, long, default_value = "public/nfl_2025_predictions.json")]
    source: String,

    /// Directory of <TEAM>.png logos
    #[arg(long)]
    logo_dir: Option<PathBuf>,

    /// Logo URL template, `{team}` is replaced by the team code
    #[arg(long)]
    logo_url: Option<String>,

    /// Log file (the terminal belongs to the UI)
    #[arg(long, default_value = "nfl-predictor.log")]
    log_file: PathBuf,

    /// Log level for this crate
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_file = std::fs::File::create(&args.log_file)
        .with_context(|| format!("creating {}", args.log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(format!("nfl_predictor={}", args.log_level))
        .with_writer(log_file)
        .with_ansi(false)
        .init();

    let logos = match &args.logo_dir {
        Some(dir) => match LogoStore::load_dir(dir) {
            Ok(store) => {
                tracing::info!(count = store.len(), dir = %dir.display(), "logos loaded");
                store
            }
            Err(e) => {
                tracing::warn!("logo directory unavailable: {:#}", e);
                LogoStore::new()
            }
        },
        None => LogoStore::new(),
    };
    let known_logos: HashSet<String> = logos.codes().map(str::to_string).collect();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::with_logos(logos);

    let (tx, mut rx) = mpsc::channel::<Update>(100);
    let client = Arc::new(DataClient::new());
    let source = Source::parse(&args.source);
    let logo_template = args.logo_url.clone();

    tokio::spawn(load_schedule(client, source, tx, logo_template, known_logos));

    let res = run_app(&mut terminal, &mut app, &mut rx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("ui loop failed: {:?}", err);
        println!("{:?}", err)
    }

    Ok(())
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    rx: &mut mpsc::Receiver<Update>,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key.code);
                }
            }
        }

        while let Ok(update) = rx.try_recv() {
            app.apply(update);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
