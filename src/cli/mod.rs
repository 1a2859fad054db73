//! Command-line interface for navsh
//!
//! This module handles:
//! - Command-line argument parsing using clap
//! - Configuration loading and validation
//! - Application initialization and startup
//! - Subcommands (version, completion, config)

pub mod completion;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{Config, OutputFormat};
use crate::error::Result;

/// navsh - Interactive filesystem navigation shell
#[derive(Parser, Debug)]
#[command(
    name = "navsh",
    version,
    about = "Interactive filesystem navigation shell",
    long_about = "An interactive shell for navigating directory trees, with readline-style
path completion, persistent history and configurable output formats."
)]
pub struct CliArgs {
    /// Directory to start the session in
    ///
    /// Defaults to the current directory, or to `session.start_dir`
    /// from the configuration file.
    #[arg(value_name = "DIR")]
    pub dir: Option<String>,

    /// Configuration file path
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Output format (plain, json, json-pretty)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Quiet mode (minimal output)
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Verbose mode (detailed logging)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Very verbose mode (debug logging)
    #[arg(long = "vv")]
    pub very_verbose: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands for navsh
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show version information
    Version,

    /// Generate shell completion script
    Completion {
        /// Shell type (bash, zsh, fish)
        #[arg(value_name = "SHELL")]
        shell: String,
    },

    /// Show configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Validate configuration file
        #[arg(long)]
        validate: bool,
    },
}

/// CLI interface handler
pub struct CliInterface {
    /// Parsed command-line arguments
    args: CliArgs,

    /// Loaded configuration
    config: Config,
}

impl CliInterface {
    /// Create a new CLI interface
    ///
    /// # Returns
    /// * `Result<Self>` - New CLI interface or error
    pub fn new() -> Result<Self> {
        let args = CliArgs::parse();
        let config = Self::load_config(&args)?;

        Ok(Self { args, config })
    }

    /// Load configuration from file and merge with arguments
    ///
    /// # Arguments
    /// * `args` - Command-line arguments
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    fn load_config(args: &CliArgs) -> Result<Config> {
        // Load config from file (or fall back to defaults if not present)
        let config_path = args.config_file.as_deref();
        let mut config = Config::load_from_file(config_path)?;

        // Validate loaded configuration
        if let Err(e) = config.validate() {
            eprintln!("Warning: Configuration validation failed: {}", e);
            eprintln!("Using default configuration instead.");
            config = Config::default();
        }

        // Apply CLI arguments to override config values
        Self::apply_args_to_config(&mut config, args);

        Ok(config)
    }

    /// Get the directory to start the session in
    ///
    /// Priority:
    /// 1. DIR command line argument
    /// 2. `session.start_dir` from configuration
    /// 3. The process working directory
    ///
    /// The returned value may be relative; it is resolved and validated
    /// against the process working directory at startup.
    ///
    /// # Returns
    /// * `String` - Start directory
    pub fn get_start_dir(&self) -> String {
        if let Some(dir) = &self.args.dir {
            return dir.clone();
        }

        if let Some(dir) = &self.config.session.start_dir {
            return dir.clone();
        }

        ".".to_string()
    }

    /// Get the configuration
    ///
    /// # Returns
    /// * `&Config` - Reference to configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the CLI arguments
    ///
    /// # Returns
    /// * `&CliArgs` - Reference to arguments
    pub fn args(&self) -> &CliArgs {
        &self.args
    }

    /// Apply CLI arguments to configuration
    ///
    /// Overrides configuration values with CLI arguments where provided
    ///
    /// # Arguments
    /// * `config` - Configuration to modify
    fn apply_args_to_config(config: &mut Config, args: &CliArgs) {
        Self::apply_display_args(config, args);
        Self::apply_logging_args(config, args);
    }

    /// Apply display-related CLI arguments to configuration
    fn apply_display_args(config: &mut Config, args: &CliArgs) {
        if let Some(format_str) = &args.format {
            config.display.format = Self::parse_output_format(format_str);
        }

        if args.no_color {
            config.display.color_output = false;
        }
    }

    /// Apply logging-related CLI arguments to configuration
    fn apply_logging_args(config: &mut Config, args: &CliArgs) {
        use crate::config::LogLevel;

        config.logging.level = if args.very_verbose {
            LogLevel::Trace
        } else if args.verbose {
            LogLevel::Debug
        } else if args.quiet {
            LogLevel::Error
        } else {
            config.logging.level
        };
    }

    /// Parse output format string
    fn parse_output_format(format_str: &str) -> OutputFormat {
        match format_str.to_lowercase().as_str() {
            "plain" => OutputFormat::Plain,
            "json" => OutputFormat::Json,
            "json-pretty" | "jsonpretty" => OutputFormat::JsonPretty,
            _ => {
                eprintln!("Warning: Unknown format '{}', using default", format_str);
                OutputFormat::Plain
            }
        }
    }

    /// Handle subcommands
    ///
    /// # Returns
    /// * `Result<bool>` - True if subcommand was handled, false to continue
    pub async fn handle_subcommand(&self) -> Result<bool> {
        match &self.args.command {
            Some(Commands::Version) => {
                self.show_version();
                Ok(true)
            }
            Some(Commands::Completion { shell }) => {
                completion::generate_completion(shell)?;
                Ok(true)
            }
            Some(Commands::Config { show, validate }) => {
                self.handle_config_command(*show, *validate)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Show version information
    fn show_version(&self) {
        println!("navsh version {}", env!("CARGO_PKG_VERSION"));
        println!("Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    }

    /// Handle config subcommand
    ///
    /// # Arguments
    /// * `show` - Whether to show configuration
    /// * `validate` - Whether to validate configuration
    ///
    /// # Returns
    /// * `Result<()>` - Success or error
    fn handle_config_command(&self, show: bool, validate: bool) -> Result<()> {
        if validate {
            self.validate_config_file()?;
        }

        if show {
            self.show_config()?;
        }

        Ok(())
    }

    /// Validate configuration file
    fn validate_config_file(&self) -> Result<()> {
        let path = self.get_config_path();
        println!("Validating configuration file: {}", path.display());

        if !path.exists() {
            println!("❌ Configuration file does not exist");
            return Ok(());
        }

        match Config::load_from_file(self.args.config_file.as_deref()) {
            Ok(config) => match config.validate() {
                Ok(_) => println!("✅ Configuration is valid"),
                Err(e) => println!("❌ Configuration validation failed: {}", e),
            },
            Err(e) => println!("❌ Failed to load configuration: {}", e),
        }

        Ok(())
    }

    /// Show effective configuration
    fn show_config(&self) -> Result<()> {
        let path = self.get_config_path();
        println!("Configuration file: {}", path.display());
        println!();
        println!("=== Effective Configuration ===");
        println!();

        match self.config.to_toml() {
            Ok(toml_str) => println!("{}", toml_str),
            Err(e) => {
                eprintln!("Error formatting configuration: {}", e);
                println!("{:#?}", self.config);
            }
        }

        Ok(())
    }

    /// Get configuration file path (from args or default)
    fn get_config_path(&self) -> PathBuf {
        self.args
            .config_file
            .as_ref()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(Config::default_config_path)
    }

    /// Print banner with version info
    pub fn print_banner(&self) {
        if !self.args.quiet {
            println!("navsh {}", env!("CARGO_PKG_VERSION"));
            println!("Type 'help' for available commands.");
        }
    }
}
