//! navsh - Interactive filesystem navigation shell
//!
//! A small shell for moving around a directory tree, with readline-style
//! path completion backed by an async filesystem gateway.
//!
//! # Features
//!
//! - Interactive REPL with Tab completion for paths
//! - `cd`, `ls`, `pwd` and `help` built-ins
//! - Persistent command history with inline hints
//! - Multiple output formats (plain, json, json-pretty)
//! - Configuration management
//!
//! # Usage
//!
//! ```bash
//! # Start in the current directory
//! navsh
//!
//! # Start in a specific directory
//! navsh /srv/data
//! ```

use std::sync::Arc;
use tracing::Level;

mod cli;
mod config;
mod error;
mod executor;
mod formatter;
mod gateway;
mod nav;
mod parser;
mod repl;

use cli::CliInterface;
use error::Result;
use executor::ExecutionContext;
use formatter::Formatter;
use gateway::{AsyncFsGateway, TokioFsGateway};
use nav::PathResolver;
use repl::{ReplEngine, SharedState};

/// Application entry point
#[tokio::main]
async fn main() {
    // Initialize the application and handle any errors
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Main application logic
///
/// This function orchestrates the application startup:
/// 1. Parse command-line arguments
/// 2. Load configuration
/// 3. Initialize logging
/// 4. Handle subcommands or start the interactive shell
///
/// # Returns
/// * `Result<()>` - Success or error
async fn run() -> Result<()> {
    // Parse command-line arguments and load configuration
    let cli = CliInterface::new()?;

    // Initialize logging based on verbosity
    initialize_logging(&cli);

    // Handle subcommands (version, completion, config)
    if cli.handle_subcommand().await? {
        return Ok(());
    }

    // Print banner if not in quiet mode
    cli.print_banner();

    // Run in interactive mode
    run_interactive_mode(&cli).await
}

/// Run application in interactive REPL mode
async fn run_interactive_mode(cli: &CliInterface) -> Result<()> {
    let fs_gateway: Arc<dyn AsyncFsGateway> = Arc::new(TokioFsGateway::new());
    let start_dir = resolve_start_dir(cli, fs_gateway.clone()).await?;
    let shared_state = initialize_shared_state(cli, start_dir);
    let exec_context = ExecutionContext::new(fs_gateway, shared_state.clone());
    let mut repl = create_repl_engine(cli, shared_state.clone(), exec_context.clone())?;

    run_repl_loop(cli, &mut repl, &exec_context, &shared_state).await?;

    println!("Goodbye!");
    Ok(())
}

/// Resolve and validate the directory the session starts in
async fn resolve_start_dir(
    cli: &CliInterface,
    fs_gateway: Arc<dyn AsyncFsGateway>,
) -> Result<String> {
    let process_dir = std::env::current_dir()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|_| "/".to_string());

    let resolver = PathResolver::with_default_dir(fs_gateway, process_dir);
    Ok(resolver.resolve_dir(None, &cli.get_start_dir()).await?)
}

/// Initialize shared state with configuration
fn initialize_shared_state(cli: &CliInterface, start_dir: String) -> SharedState {
    let shared_state = SharedState::with_config(start_dir, &cli.config().display);

    if cli.args().no_color {
        shared_state.set_color_enabled(false);
    }

    shared_state
}

/// Create REPL engine with configuration
fn create_repl_engine(
    cli: &CliInterface,
    shared_state: SharedState,
    exec_context: ExecutionContext,
) -> Result<ReplEngine> {
    ReplEngine::new(
        shared_state,
        cli.config().history.clone(),
        Arc::new(exec_context),
    )
}

/// Main REPL loop
async fn run_repl_loop(
    cli: &CliInterface,
    repl: &mut ReplEngine,
    exec_context: &ExecutionContext,
    shared_state: &SharedState,
) -> Result<()> {
    while repl.is_running() {
        // Reset cancellation token for each command
        let mut context_clone = exec_context.clone();
        context_clone.reset_cancel_token();

        let input = match repl.read_line()? {
            Some(line) if !line.trim().is_empty() => line,
            Some(_) => continue,
            None => break,
        };

        let command = match repl.process_input(&input) {
            Ok(cmd) => cmd,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };

        if matches!(command, parser::Command::Exit) {
            break;
        }

        // Setup Ctrl+C handler for this command execution
        let cancel_token = context_clone.get_cancel_token();

        let ctrl_c_handle = tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    cancel_token.cancel();
                }
                Err(err) => {
                    eprintln!("Failed to listen for Ctrl+C: {}", err);
                }
            }
        });

        execute_and_display(cli, &context_clone, shared_state, command).await;

        // Cancel the Ctrl+C listener for the next command
        ctrl_c_handle.abort();
    }

    Ok(())
}

/// Execute command and display result
async fn execute_and_display(
    cli: &CliInterface,
    exec_context: &ExecutionContext,
    shared_state: &SharedState,
    command: parser::Command,
) {
    match exec_context.execute(command).await {
        Ok(result) => display_result(cli, shared_state, &result),
        Err(e) => eprintln!("{}", e),
    }
}

/// Display execution result with proper formatting
fn display_result(
    cli: &CliInterface,
    shared_state: &SharedState,
    result: &executor::ExecutionResult,
) {
    let mut display_config = cli.config().display.clone();
    display_config.format = shared_state.get_format();
    display_config.color_output = shared_state.get_color_enabled();

    let formatter = Formatter::from_config(&display_config);

    match formatter.format(result) {
        Ok(output) => {
            // Silent results (a successful cd) print nothing
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => eprintln!("Format error: {}", e),
    }
}

/// Initialize logging system based on verbosity level
///
/// # Arguments
/// * `cli` - CLI interface with verbosity settings
fn initialize_logging(cli: &CliInterface) {
    let level = if cli.args().very_verbose {
        Level::TRACE
    } else if cli.args().verbose {
        Level::DEBUG
    } else {
        cli.config().logging.level.to_tracing_level()
    };

    // Build subscriber with level filter
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false);

    // Configure timestamps
    if cli.config().logging.timestamps {
        subscriber.init();
    } else {
        subscriber.without_time().init();
    }
}
