//! CLI command definitions, routing, and tracing setup.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use docpress_core::pipeline::{BuildOutcome, ProgressReporter};
use docpress_shared::{AppConfig, BuildConfig, init_config, load_config, load_config_from};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// DocPress — build API documentation with an external compiler.
#[derive(Parser)]
#[command(
    name = "docpress",
    version,
    about = "Mirror a source tree, compile its documentation, and post-process the HTML.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Run the full documentation build.
    Build {
        /// Project root all relative paths resolve against.
        #[arg(long, default_value = ".")]
        root: String,

        /// Source tree to scan, relative to the project root.
        #[arg(long)]
        source_dir: Option<String>,

        /// Output directory, relative to the project root.
        #[arg(short, long)]
        out: Option<String>,

        /// External compiler executable.
        #[arg(long)]
        compiler: Option<String>,

        /// Base URL for generated source links.
        #[arg(long)]
        src_url: Option<String>,

        /// Config file to use instead of the default lookup.
        #[arg(long)]
        config: Option<String>,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Write a default docpress.toml in the current directory.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "docpress=info",
        1 => "docpress=debug",
        _ => "docpress=trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Build {
            root,
            source_dir,
            out,
            compiler,
            src_url,
            config,
        } => cmd_build(
            &root,
            source_dir.as_deref(),
            out.as_deref(),
            compiler.as_deref(),
            src_url.as_deref(),
            config.as_deref(),
        ),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(),
        },
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn cmd_build(
    root: &str,
    source_dir: Option<&str>,
    out: Option<&str>,
    compiler: Option<&str>,
    src_url: Option<&str>,
    config_path: Option<&str>,
) -> Result<()> {
    let project_root = std::fs::canonicalize(root)
        .map_err(|e| eyre!("cannot resolve project root '{root}': {e}"))?;

    let app_config = match config_path {
        Some(p) => load_config_from(&PathBuf::from(p))?,
        None => load_config(&project_root)?,
    };

    let mut build_config = BuildConfig::for_root(&project_root, &app_config);

    // CLI flags override config file values.
    if let Some(dir) = source_dir {
        build_config.source_dir = dir.to_string();
    }
    if let Some(dir) = out {
        build_config.output_dir = dir.to_string();
    }
    if let Some(cmd) = compiler {
        build_config.compiler = cmd.to_string();
    }
    if let Some(url) = src_url {
        build_config.src_link_base = url.to_string();
    }

    info!(
        root = %project_root.display(),
        source_dir = %build_config.source_dir,
        output_dir = %build_config.output_dir,
        compiler = %build_config.compiler,
        "starting documentation build"
    );

    let reporter = CliProgress::new();
    let outcome = docpress_core::pipeline::run_build(&build_config, &reporter)?;

    println!();
    println!("  Documentation build complete!");
    println!("  Sources:      {}", outcome.sources);
    println!("  Markup:       {}", outcome.markup_converted);
    println!("  HTML files:   {}", outcome.html_rewritten);
    println!("  Style blocks: {}", outcome.style_blocks_replaced);
    println!("  Time:         {:.1}s", outcome.elapsed.as_secs_f64());
    println!();

    Ok(())
}

fn cmd_config_init() -> Result<()> {
    let cwd = std::env::current_dir()?;
    let path = init_config(&cwd)?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show() -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config: AppConfig = load_config(&cwd)?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter using an indicatif spinner.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { spinner }
    }
}

impl ProgressReporter for CliProgress {
    fn phase(&self, name: &str) {
        self.spinner.set_message(name.to_string());
    }

    fn file_processed(&self, path: &str, current: usize, total: usize) {
        self.spinner
            .set_message(format!("[{current}/{total}] {path}"));
    }

    fn done(&self, _outcome: &BuildOutcome) {
        self.spinner.finish_and_clear();
    }
}
