//! # Stockdesk Terminal
//!
//! The interactive terminal front end: a line-driven shell wrapping the form
//! controller, which is the only thing that talks to the store.
//!
//! ## Module Organization
//! ```text
//! stockdesk_terminal/
//! ├── lib.rs          ◄─── You are here (startup & shell loop)
//! ├── controller.rs   ◄─── Form state machine (fields, rows, selection)
//! ├── commands.rs     ◄─── Command language parser (pure)
//! ├── render.rs       ◄─── Results table rendering (pure)
//! └── error.rs        ◄─── AppError surfaced to the user
//! ```
//!
//! ## Session Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  $ stockdesk                                                            │
//! │  Stockdesk — type 'help' for commands.                                  │
//! │    (no records)                                                         │
//! │  > product Laptop                                                       │
//! │  > description 14-inch ultrabook                                        │
//! │  > quantity 4                                                           │
//! │  > code 4006381333931                                                   │
//! │  > add                                                                  │
//! │  Added #1 Laptop                                                        │
//! │    id  product  description        quantity  code           date added │
//! │    --  -------  -----------------  --------  -------------  ---------- │
//! │     1  Laptop   14-inch ultrabook         4  4006381333931  2024-11-05…│
//! │  > exit                                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every store operation runs to completion before the next line is read;
//! the loop is the whole concurrency story.

pub mod commands;
pub mod controller;
pub mod error;
pub mod render;

use std::io::{self, Write};
use std::path::PathBuf;

use directories::ProjectDirs;
use tracing::info;
use tracing_subscriber::EnvFilter;

use stockdesk_db::{Database, DbConfig};

use commands::Command;
use controller::FormController;
use error::AppError;

/// Runs the application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, writing to stderr             │
/// │     • Default: INFO, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Determine Database Path ──────────────────────────────────────────► │
/// │     • macOS: ~/Library/Application Support/com.stockdesk.stockdesk/     │
/// │     • Windows: %APPDATA%\stockdesk\stockdesk\data\                      │
/// │     • Linux: ~/.local/share/stockdesk/                                  │
/// │                                                                         │
/// │  3. Connect to Database ──────────────────────────────────────────────► │
/// │     • SQLite with WAL mode, single connection                           │
/// │     • Stock table created on first run                                  │
/// │                                                                         │
/// │  4. Shell Loop ───────────────────────────────────────────────────────► │
/// │     • Read a line, parse, dispatch to the controller                    │
/// │     • Render the table after every refresh                              │
/// │     • 'exit' (or end of input) closes the store and returns             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> Result<(), AppError> {
    init_tracing();

    info!("Starting Stockdesk");

    let db_path = database_path()?;
    info!(path = %db_path.display(), "Database path determined");

    let db = Database::new(DbConfig::new(db_path)).await?;

    let mut controller = FormController::new(db);
    controller.show_all().await?;

    println!("Stockdesk — type 'help' for commands.");
    print_table(&controller);

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            // End of input behaves like 'exit'
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let command = match commands::parse(input) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match dispatch(&mut controller, command).await {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => println!("Error: {}", e),
        }
    }

    controller.close().await;
    info!("Stockdesk stopped");
    Ok(())
}

/// Applies one command to the controller.
///
/// ## Returns
/// * `Ok(true)` - Keep reading input
/// * `Ok(false)` - The user asked to exit
/// * `Err(AppError)` - The action failed; the loop reports it and continues
async fn dispatch(controller: &mut FormController, command: Command) -> Result<bool, AppError> {
    match command {
        Command::SetProduct(value) => {
            controller.set_product(value);
            println!("product = {:?}", controller.fields().product);
        }
        Command::SetDescription(value) => {
            controller.set_description(value);
            println!("description = {:?}", controller.fields().description);
        }
        Command::SetQuantity(value) => {
            controller.set_quantity(value);
            println!("quantity = {:?}", controller.fields().quantity);
        }
        Command::SetCode(value) => {
            controller.set_code(value);
            println!("code = {:?}", controller.fields().code);
        }
        Command::Search(term) => {
            if let Some(term) = term {
                controller.set_search_term(term);
            }
            controller.search().await?;
            print_table(controller);
        }
        Command::ShowAll => {
            controller.show_all().await?;
            print_table(controller);
        }
        Command::Select(id) => {
            controller.select(id)?;
            println!("Selected #{}", id);
        }
        Command::Add => {
            let record = controller.add().await?;
            println!("Added #{} {}", record.id, record.product);
            print_table(controller);
        }
        Command::Update => {
            let id = controller.update_selected().await?;
            println!("Updated #{}", id);
            print_table(controller);
        }
        Command::Delete => {
            let id = controller.delete_selected().await?;
            println!("Deleted #{}", id);
            print_table(controller);
        }
        Command::Clear => {
            controller.clear_form();
            println!("Form cleared");
        }
        Command::Help => println!("{}", commands::HELP_TEXT),
        Command::Exit => return Ok(false),
    }
    Ok(true)
}

fn print_table(controller: &FormController) {
    print!(
        "{}",
        render::render_table(controller.rows(), controller.selected_id())
    );
}

/// Initializes the tracing subscriber for structured logging.
///
/// Diagnostics go to stderr so the table output on stdout stays clean.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages everywhere
/// - `RUST_LOG=stockdesk_db=trace` - Trace the store layer only
/// - Default: INFO, plus DEBUG for the stockdesk crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info,stockdesk_db=debug,stockdesk_terminal=debug,sqlx=warn")
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Determines the database file path from the platform app-data directory.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.stockdesk.stockdesk/stock.db`
/// - **Windows**: `%APPDATA%\stockdesk\stockdesk\data\stock.db`
/// - **Linux**: `~/.local/share/stockdesk/stock.db`
fn database_path() -> Result<PathBuf, AppError> {
    let proj_dirs =
        ProjectDirs::from("com", "stockdesk", "stockdesk").ok_or(AppError::DataDir)?;

    let data_dir = proj_dirs.data_dir();

    // Create directory if it doesn't exist
    std::fs::create_dir_all(data_dir)?;

    Ok(data_dir.join("stock.db"))
}
