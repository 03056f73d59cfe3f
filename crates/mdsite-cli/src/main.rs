use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use mdsite_config::{Config, OnError};
use mdsite_engine::{FailurePolicy, SiteOptions, build_site, markdown_to_html};
use std::{fs, path::PathBuf};

#[derive(Parser)]
#[command(name = "mdsite")]
#[command(about = "Build a static HTML site from a tree of markdown files")]
struct Cli {
    /// Log at debug level (RUST_LOG still applies on top)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render every page and copy static assets into the output directory
    Build {
        /// Config file (defaults to ./mdsite.toml; built-in defaults if absent)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// URL prefix the site is served under, overriding the config
        #[arg(short, long)]
        basepath: Option<String>,
    },
    /// Print the HTML fragment for one markdown file
    Render {
        /// Input markdown file
        input: PathBuf,
    },
    /// Write a config file with the default settings
    Init {
        /// Where to write the config (defaults to ./mdsite.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    match cli.command {
        Command::Build { config, basepath } => build(config, basepath),
        Command::Render { input } => render(input),
        Command::Init { config, force } => init(config, force),
    }
}

/// The `--config` value, or `mdsite.toml` in the working directory.
fn resolve_config_path(config_path: Option<PathBuf>) -> PathBuf {
    config_path.unwrap_or_else(Config::config_path)
}

fn build(config_path: Option<PathBuf>, basepath: Option<String>) -> Result<()> {
    let config_path = resolve_config_path(config_path);
    log::info!("Config path: {}", config_path.display());

    let mut config = match Config::load_from_path(&config_path)? {
        Some(config) => config,
        None => {
            log::info!("No config file found, using defaults");
            Config::default()
        }
    };
    if let Some(basepath) = basepath {
        config.basepath = basepath;
    }

    let options = site_options(config);
    let report = build_site(&options)
        .with_context(|| format!("Failed to build site into {}", options.output_dir.display()))?;

    for (path, err) in &report.skipped {
        log::warn!("Skipped {}: {err}", path.display());
    }
    log::info!(
        "Wrote {} pages to {}",
        report.pages.len(),
        options.output_dir.display()
    );
    Ok(())
}

fn site_options(config: Config) -> SiteOptions {
    let static_dir = if config.static_dir.is_dir() {
        Some(config.static_dir)
    } else {
        log::info!(
            "No static directory at {}, skipping asset copy",
            config.static_dir.display()
        );
        None
    };

    SiteOptions {
        content_dir: config.content_dir,
        static_dir,
        output_dir: config.output_dir,
        template_path: config.template_path,
        basepath: config.basepath,
        on_error: match config.on_error {
            OnError::Abort => FailurePolicy::Abort,
            OnError::Skip => FailurePolicy::Skip,
        },
    }
}

fn render(input: PathBuf) -> Result<()> {
    let markdown = fs::read_to_string(&input)
        .with_context(|| format!("Error reading {}", input.display()))?;
    let html = markdown_to_html(&markdown)
        .with_context(|| format!("Error converting {}", input.display()))?;
    println!("{html}");
    Ok(())
}

fn init(config_path: Option<PathBuf>, force: bool) -> Result<()> {
    let config_path = resolve_config_path(config_path);
    if config_path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        );
    }

    Config::default().save_to_path(&config_path)?;
    log::info!("Created default config file at {}", config_path.display());
    Ok(())
}
