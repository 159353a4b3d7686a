//! Menu Order — Entry Point
//!
//! Runs the ordering widget in a terminal until `quit` or end of input.
//!
//! Wiring sequence:
//! 1. Load config.toml (path from the first argument) + validate
//! 2. Init tracing (stderr, text or JSON)
//! 3. Pick the menu source (config `[[menu]]` or built-in) and build the catalog
//! 4. Start an OrderingSession rendering to stdout
//! 5. Read commands line by line from stdin

use std::io::{self, BufRead, Stdout};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use menu_order::adapters::menu::{ConfigMenuSource, StaticMenuSource};
use menu_order::adapters::terminal::{HELP, TerminalCommand, TerminalView, parse_command};
use menu_order::config::{self, AppConfig};
use menu_order::domain::Catalog;
use menu_order::ports::menu_source::MenuSource;
use menu_order::ports::order_view::OrderView;
use menu_order::usecases::OrderingSession;

fn main() -> Result<()> {
    // ── 1. Load configuration ───────────────────────────────
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());
    let config = config::loader::load_config(&config_path)
        .context("Failed to load configuration")?;

    // ── 2. Initialize logging on stderr ─────────────────────
    init_tracing(&config);

    info!(
        name = %config.app.name,
        version = env!("CARGO_PKG_VERSION"),
        config = %config_path,
        "Starting menu order"
    );

    // ── 3. Build the catalog ────────────────────────────────
    let config_source = ConfigMenuSource::new(config.menu.clone());
    let source: &dyn MenuSource = if config_source.is_empty() {
        &StaticMenuSource
    } else {
        &config_source
    };
    let catalog = Arc::new(source.load_catalog().context("Failed to build menu")?);
    info!(source = source.name(), items = catalog.len(), "Menu loaded");

    // ── 4. Start the session ────────────────────────────────
    let mut view = TerminalView::new(io::stdout());
    view.print(&format!("Welcome to {}!\n{HELP}", config.app.name));

    let mut session = OrderingSession::new(Arc::clone(&catalog), view);
    session.start();

    // ── 5. Command loop ─────────────────────────────────────
    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        if !run_line(&mut session, &catalog, &line)? {
            break;
        }
    }

    info!("Session ended");
    Ok(())
}

/// Execute one input line. Returns `false` when the user quits.
fn run_line(
    session: &mut OrderingSession<TerminalView<Stdout>>,
    catalog: &Catalog,
    line: &str,
) -> Result<bool> {
    let command = match parse_command(line) {
        Ok(command) => command,
        Err(e) => {
            session.view_mut().show_error(&e.to_string());
            return Ok(true);
        }
    };

    match command {
        TerminalCommand::Session(command) => {
            // Rejections are already shown to the user by the session.
            if let Err(e) = session.handle(command) {
                debug!(error = %e, "Session command failed");
            }
        }
        TerminalCommand::ShowMenu => session.view_mut().render_menu(catalog),
        TerminalCommand::Json => {
            let json = serde_json::to_string_pretty(&session.order().snapshot())
                .context("Failed to serialize order")?;
            session.view_mut().print(&format!("{json}\n"));
        }
        TerminalCommand::Help => session.view_mut().print(HELP),
        TerminalCommand::Quit => return Ok(false),
        TerminalCommand::Nothing => {}
    }

    Ok(true)
}

fn init_tracing(config: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.app.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    if config.app.json_logs {
        builder.json().init();
    } else {
        builder.init();
    }
}
