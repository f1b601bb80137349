use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use routedoc_core::config::{self, CONFIG_FILE_NAME, RoutedocConfig};
use routedoc_core::registry::{self, RouteTable};
use routedoc_core::{Document, DocumentBuilder, model};

#[derive(Parser)]
#[command(name = "routedoc", about = "OpenAPI documents from route tables", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an OpenAPI document from a route file
    Generate {
        /// Path to the route file (YAML or JSON)
        #[arg(short, long)]
        routes: PathBuf,

        /// Write the document here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, default_value = "json")]
        format: OutputFormat,

        /// Config file (defaults to .routedoc.yaml in the working directory)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Build a document from a route file and report what it contains
    Validate {
        /// Path to the route file
        #[arg(short, long)]
        routes: PathBuf,

        /// Config file (defaults to .routedoc.yaml in the working directory)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Initialize a new routedoc configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            routes,
            output,
            format,
            config,
        } => cmd_generate(&routes, output.as_deref(), format, config.as_deref()),

        Commands::Validate { routes, config } => cmd_validate(&routes, config.as_deref()),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "routedoc", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Load the given config file, or `.routedoc.yaml` from the current
/// directory when none is given. An explicit path must exist.
fn load_config(path: Option<&Path>) -> Result<RoutedocConfig> {
    match path {
        Some(path) => config::load_config(path)?
            .with_context(|| format!("config file {} not found", path.display())),
        None => Ok(config::load_config(Path::new(CONFIG_FILE_NAME))?.unwrap_or_default()),
    }
}

fn load_routes(path: &Path) -> Result<RouteTable> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");

    let table = match ext {
        "json" => registry::from_json(&content),
        _ => registry::from_yaml(&content),
    }
    .with_context(|| format!("failed to load routes from {}", path.display()))?;
    log::debug!(
        "loaded {} endpoints from {}",
        table.endpoints.len(),
        path.display()
    );
    Ok(table)
}

fn build(routes: &Path, config: Option<&Path>) -> Result<Document> {
    let cfg = load_config(config)?;
    let table = load_routes(routes)?;
    let document = DocumentBuilder::new(cfg).build(&table)?;
    Ok(document)
}

fn cmd_generate(
    routes: &Path,
    output: Option<&Path>,
    format: OutputFormat,
    config: Option<&Path>,
) -> Result<()> {
    let document = build(routes, config)?;

    let rendered = match format {
        OutputFormat::Json => model::to_json(&document)?,
        OutputFormat::Yaml => model::to_yaml(&document)?,
    };

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create directory {}", parent.display()))?;
            }
            fs::write(path, &rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("  wrote {}", path.display());
        }
        None => println!("{}", rendered.trim_end()),
    }
    Ok(())
}

fn cmd_validate(routes: &Path, config: Option<&Path>) -> Result<()> {
    let document = build(routes, config)?;
    document.validate()?;

    eprintln!(
        "Valid OpenAPI {} document: {}",
        document.openapi,
        document.info.title()
    );
    eprintln!("  Version: {}", document.info.version());
    eprintln!("  Paths: {}", document.paths.len());
    eprintln!("  Operations: {}", document.operations().count());
    eprintln!("  Tags: {}", document.tags.len());
    Ok(())
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
