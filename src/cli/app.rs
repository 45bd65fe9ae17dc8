//! Main CLI application structure

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{catalog, demo, member};
use crate::domain::{ItemId, LibraryManager};
use crate::storage::{Config, Seed};

#[derive(Parser)]
#[command(name = "shelf")]
#[command(author, version, about = "In-memory library catalog and membership tracker")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the configured format, then text)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Build the library from this TOML seed file instead of the built-in catalog
    #[arg(long, global = true, env = "SHELF_SEED")]
    pub seed: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the scripted lending demonstration
    Demo,

    /// Show the catalog grouped by media type
    Catalog,

    /// Show item, member and loan totals
    Stats,

    /// List members and the items they hold
    Members,

    /// Show one item's details
    Show {
        /// Item ID
        id: ItemId,
    },

    /// Look up a member by name (case-insensitive)
    FindMember {
        /// Member name
        name: String,
    },

    /// Borrow items for a member, in the order given
    Borrow {
        /// Member name
        member: String,

        /// Item IDs to borrow
        #[arg(required = true)]
        ids: Vec<ItemId>,
    },
}

/// A freshly built library plus the settings commands render with
pub struct Session {
    pub library: LibraryManager,
    pub date_format: String,
}

impl Session {
    /// Builds the library from the seed flag, the configured seed, or the built-in seed
    pub fn open(seed_flag: Option<PathBuf>, config: &Config, output: &Output) -> Result<Self> {
        let seed = match seed_flag.or_else(|| config.seed_path()) {
            Some(path) => {
                output.verbose_ctx("seed", &format!("Loading seed from: {}", path.display()));
                Seed::from_file(&path)
                    .with_context(|| format!("Failed to load seed: {}", path.display()))?
            }
            None => {
                output.verbose_ctx("seed", "Using built-in seed");
                Seed::builtin()
            }
        };

        let library = seed.build();
        output.verbose_ctx(
            "seed",
            &format!(
                "Built library with {} items and {} members",
                library.items().len(),
                library.members().len()
            ),
        );

        Ok(Self {
            library,
            date_format: config.date_format().to_string(),
        })
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "shelf_cli=debug" } else { "warn" };
    // A logger may already be installed when embedded; keep the existing one
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .try_init();
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load()?;
    let format = cli
        .format
        .unwrap_or_else(|| config.global.default_format.into());
    let output = Output::new(format, cli.verbose);

    output.verbose_ctx("config", "shelf starting");
    if let Some(root) = &config.project_root {
        output.verbose_ctx("config", &format!("Project root: {}", root.display()));
    }

    // Only commands that read the library load a seed
    let open = || Session::open(cli.seed.clone(), &config, &output);

    match cli.command {
        Commands::Demo => demo::run(&output, config.date_format())?,
        Commands::Catalog => catalog::show_catalog(&output, &open()?),
        Commands::Stats => catalog::show_stats(&output, &open()?),
        Commands::Members => member::show_members(&output, &open()?),
        Commands::Show { id } => catalog::show_item(&output, &open()?, id),
        Commands::FindMember { name } => member::find_member(&output, &open()?, &name),
        Commands::Borrow { member, ids } => member::borrow(&output, &mut open()?, &member, &ids),
    }

    Ok(())
}
