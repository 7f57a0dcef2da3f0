use std::fs::OpenOptions;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tiledbrowse::config::Config;
use tiledbrowse::handlers::command::{parse_command, write_view, Session};
use tiledbrowse::snapshot::snapshot_factory;
use tiledbrowse::utils::{get_config_path, get_debug_log_path};
use tiledbrowse::CatalogSelector;

/// Browse a Tiled data catalog
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Catalog url to connect to at start-up
    url: Option<String>,

    /// Enable debug logging to the temp-dir tiledbrowse-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Serve this catalog snapshot (YAML or JSON) instead of a remote service
    #[arg(short, long)]
    snapshot: Option<PathBuf>,

    /// Rows per page
    #[arg(short, long)]
    rows: Option<usize>,
}

fn init_tracing(debug: bool) -> Result<()> {
    let default_level = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::new(std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.into()));
    let registry = tracing_subscriber::registry().with(filter);

    if debug {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(get_debug_log_path())?;
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }
    Ok(())
}

/// Print every notification the selector raises
fn connect_slots(selector: &mut CatalogSelector) {
    let signals = &mut selector.signals;
    signals.client_connected.connect(|connected| {
        println!("Connected to {} (api: {})", connected.url, connected.api_url);
    });
    signals.client_connection_error.connect(|message| {
        println!("Connection error: {}", message);
    });
    signals.url_validation_error.connect(|message| {
        println!("Invalid url: {}", message);
    });
    signals.url_changed.connect(|_| {
        println!("Url committed");
    });
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.debug)?;
    debug!("Debug mode enabled");

    let config_path = get_config_path(args.config)?;
    if let Some(path) = &config_path {
        info!("Loading config from {}", path.display());
    }
    let mut config = Config::load(config_path.as_deref())?;

    // Override config with CLI flags
    if let Some(snapshot) = args.snapshot {
        config.snapshot = Some(snapshot);
    }
    if let Some(rows) = args.rows {
        config.rows_per_page = rows;
    }
    if let Some(url) = args.url {
        config.url = url;
    }

    let mut selector = CatalogSelector::new(snapshot_factory(config.snapshot.clone()))
        .with_validators(config.validators())
        .with_rows_per_page(config.rows_per_page)
        .with_breadcrumb_width(config.breadcrumb_max_width);
    connect_slots(&mut selector);

    if !config.url.is_empty() {
        selector.set_url_draft(&config.url);
        if selector.commit_url_edit() {
            selector.connect();
        }
    }

    let mut session = Session::new(selector, config.rows_per_page_choices.clone());
    run(&mut session)
}

fn run(session: &mut Session) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    write_view(&session.selector, &mut stdout)?;
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        // Errors are reported and the session goes on
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{:#}", e);
                continue;
            }
        };
        match session.execute(&command, &mut stdout) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => println!("Error: {:#}", e),
        }
    }
    Ok(())
}
