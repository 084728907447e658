//! CX TUI - Terminal client for the customer ticketing API.
//!
//! Main entry point and event loop for the application.

mod api;
mod app;
mod config;
mod input;
mod logging;
mod screens;
mod ui;

use api::ApiClient;
use app::{App, Route};
use clap::Parser;
use config::{API_URL_ENV, Config};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "cx-tui", version, about = "Terminal client for the CX ticketing API")]
struct Cli {
    /// Path to the config file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Override the API base url
    #[arg(long)]
    api_url: Option<String>,
    /// Screen to open, e.g. `/company/42/tickets` or `/ticket/create`
    #[arg(default_value = "/")]
    route: String,
}

/// Main application entry point.
///
/// # Returns
/// * `Result<()>` - Success or error
///
/// # Details
/// Loads configuration, sets up logging and the API client, then runs the
/// event loop until the user quits.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?
        .with_api_url_overrides(std::env::var(API_URL_ENV).ok(), cli.api_url);
    let route = Route::parse(&cli.route)?;

    let log_path = config.log_file_path()?;
    if let Err(e) = logging::init(&log_path, &config.log_level) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    let client = ApiClient::new(&config)?;
    tracing::info!(api_url = %config.api_url, route = %route, "starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(Arc::new(client), route, config.notification_duration());

    // Run event loop
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "exiting with error");
    }
    result
}

/// Main event loop.
///
/// # Arguments
/// * `terminal` - Terminal instance
/// * `app` - Application state
///
/// # Returns
/// * `Result<()>` - Success or error
///
/// # Details
/// Applies finished requests, draws, and handles keyboard and mouse events.
/// Polling with a timeout keeps the UI responsive while requests run.
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> anyhow::Result<()> {
    loop {
        let now = Instant::now();
        app.poll(now).await;
        app.tick(now);

        terminal.draw(|f| {
            app.viewport = ui::body_area(f.area());
            ui::render(f, app);
        })?;

        if app.should_quit() {
            break;
        }

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                _ => {}
            }
        }
    }

    tracing::info!("quit");
    Ok(())
}
