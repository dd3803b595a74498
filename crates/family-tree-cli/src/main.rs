//! Family Tree CLI
//!
//! Loads a JSON snapshot of person records and prints what the core derives
//! from it.
//!
//! # Commands
//!
//! - `tree`: indented outline of every lineage
//! - `timeline`: dated life events in chronological order
//! - `issues`: structural problems found in the records
//! - `person <ID>`: parents, spouses and children of one member
//! - `add <JSON>` / `remove <ID>`: edit the snapshot file

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use family_tree::{
    BuildContext, DuplicatePolicy, FamilyTree, ParentPrecedence, PersonRecord, RecordStore,
};
use tracing_subscriber::{fmt, EnvFilter};

mod render;
mod store;

use store::JsonFileStore;

/// Family tree viewer
#[derive(Parser)]
#[command(name = "family-tree")]
#[command(version)]
#[command(about = "Build and inspect a family tree from a JSON snapshot of person records")]
struct Cli {
    /// Snapshot file: a JSON array of person records
    snapshot: std::path::PathBuf,

    /// Place children under their mother when both parents are known
    #[arg(long, global = true)]
    mother_first: bool,

    /// Keep the first record when an id repeats
    #[arg(long, global = true)]
    first_wins: bool,

    /// Skip dangling checks on the parent not used for placement
    #[arg(long, global = true)]
    primary_parent_only: bool,

    /// Report spouse links that are not returned
    #[arg(long, global = true)]
    strict_spouses: bool,

    /// Include deaths in the timeline
    #[arg(long, global = true)]
    deaths: bool,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the tree outline
    Tree,
    /// Print the timeline
    Timeline,
    /// Print structural issues
    Issues,
    /// Print one member's relatives
    Person {
        /// Record id
        id: String,
    },
    /// Add a record given as a JSON object
    Add {
        /// e.g. '{"id":"7","firstName":"Ada","fatherId":"1"}'
        record: String,
    },
    /// Remove a record and every reference to it
    Remove {
        /// Record id
        id: String,
    },
}

impl Cli {
    fn context(&self) -> BuildContext {
        BuildContext::new()
            .with_parent_precedence(if self.mother_first {
                ParentPrecedence::MotherFirst
            } else {
                ParentPrecedence::FatherFirst
            })
            .with_duplicate_policy(if self.first_wins {
                DuplicatePolicy::FirstWriteWins
            } else {
                DuplicatePolicy::LastWriteWins
            })
            .with_secondary_dangling(!self.primary_parent_only)
            .with_spouse_symmetry_check(self.strict_spouses)
            .with_deaths(self.deaths)
    }
}

fn load(store: &JsonFileStore, ctx: &BuildContext) -> FamilyTree {
    FamilyTree::build(&store.read(), ctx)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let ctx = cli.context();
    let mut store = JsonFileStore::open(&cli.snapshot)?;

    let output = match &cli.command {
        Commands::Add { record } => {
            let record: PersonRecord =
                serde_json::from_str(record).context("parsing record JSON")?;
            store.create(record)?;
            return Ok(());
        }
        Commands::Remove { id } => {
            store.delete(id)?;
            return Ok(());
        }
        Commands::Tree => {
            let tree = load(&store, &ctx);
            if cli.json {
                serde_json::to_string_pretty(tree.layout())?
            } else {
                render::outline(tree.graph(), tree.layout())
            }
        }
        Commands::Timeline => {
            let events = load(&store, &ctx).timeline(&ctx);
            if cli.json {
                serde_json::to_string_pretty(&events)?
            } else {
                render::events(&events)
            }
        }
        Commands::Issues => {
            let tree = load(&store, &ctx);
            if cli.json {
                serde_json::to_string_pretty(tree.issues())?
            } else {
                tree.issues().iter().map(|issue| format!("{issue}\n")).collect()
            }
        }
        Commands::Person { id } => {
            let tree = load(&store, &ctx);
            let Some(relatives) = tree.graph().relatives(id) else {
                bail!("no member with id `{id}`");
            };
            if cli.json {
                serde_json::to_string_pretty(&relatives)?
            } else {
                render::relatives(tree.graph(), &relatives)
            }
        }
    };

    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}
