use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use expenses::cli::{
    handle_categories_command, handle_check_command, handle_list_command, session_store,
    CheckArgs, ListArgs,
};
use expenses::config::{paths::ExpensePaths, settings::Settings};
use expenses::models::CategoryRegistry;
use expenses::tui::{run_tui, App};

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Terminal expense tracker",
    long_about = "Add expenses through a validated form, filter them by category \
                  and see the total of what is shown. Expenses live in memory \
                  for the length of a session."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui {
        /// Seed the session from a JSON file of expenses
        #[arg(short, long)]
        from: Option<PathBuf>,
    },

    /// List the available categories
    Categories,

    /// Validate a single expense without storing it
    Check(CheckArgs),

    /// Print expenses from a JSON file, optionally filtered by category
    List(ListArgs),

    /// Write the default configuration
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // One-shot commands never create the data directory just to log
    let interactive = matches!(cli.command, None | Some(Commands::Tui { .. }));
    if interactive || paths.base_dir().is_dir() {
        if let Err(e) = expenses::logging::init(&paths, &settings.log_level) {
            eprintln!("Warning: logging disabled: {}", e);
        }
    }
    info!(base_dir = %paths.base_dir().display(), "settings loaded");

    let registry = settings.category_registry()?;
    let symbol = settings.currency_symbol.as_str();

    match cli.command {
        None => launch_tui(registry, symbol, None)?,
        Some(Commands::Tui { from }) => launch_tui(registry, symbol, from)?,
        Some(Commands::Categories) => handle_categories_command(&registry)?,
        Some(Commands::Check(args)) => handle_check_command(&registry, symbol, args)?,
        Some(Commands::List(args)) => handle_list_command(&registry, symbol, args)?,
        Some(Commands::Init) => {
            println!("Initializing expense tracker at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Categories: {}", registry);
            println!("Edit {} to change them.", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Log file:       {}", paths.log_file().display());
            println!("Initialized:    {}", if paths.is_initialized() { "yes" } else { "no" });
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Categories:      {}", registry);
            println!("  Log level:       {}", settings.log_level);
        }
    }

    Ok(())
}

fn launch_tui(registry: CategoryRegistry, symbol: &str, from: Option<PathBuf>) -> Result<()> {
    let (store, report) = session_store(from.as_deref(), &registry)?;
    for line in report.skipped_lines() {
        eprintln!("{}", line);
    }

    let mut app = App::with_store(registry, symbol, store);
    run_tui(&mut app)
}
