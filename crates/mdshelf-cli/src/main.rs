//! mdshelf CLI — reorganize flat markdown folders into grouped
//! subdirectories, rewriting intra-collection links along the way.

use std::path::PathBuf;

use clap::Parser;

use mdshelf_core::ShelfError;
use mdshelf_vault::{plan_folder, refactor_folder};

#[derive(Parser)]
#[command(name = "mdshelf")]
#[command(version)]
#[command(about = "Markdown folder refactoring with link rewriting")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Move prefix-grouped documents into subdirectories and rewrite links
    Refactor {
        /// Folder holding the flat document collection
        folder: PathBuf,
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the grouping a refactor would apply, without moving anything
    Plan {
        /// Folder holding the flat document collection
        folder: PathBuf,
        /// Emit the plan as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli.command) {
        eprintln!("error: {err:#}");
        let code = match err.downcast_ref::<ShelfError>() {
            Some(ShelfError::NotEligible { .. }) => 2,
            _ => 1,
        };
        std::process::exit(code);
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Refactor { folder, json } => {
            let report = refactor_folder(&folder)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!(
                    "Refactored {}: moved {} files into {} groups, rewrote {} links",
                    report.folder.display(),
                    report.files_moved,
                    report.groups.len(),
                    report.links_rewritten
                );
                for group in &report.groups {
                    println!("  {group}/");
                }
            }
        }
        Commands::Plan { folder, json } => {
            let plan = plan_folder(&folder)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                println!("Plan for {}:", plan.folder.display());
                for group in &plan.groups {
                    println!(
                        "  {}/ <- {} files ({})",
                        group.key,
                        group.members.len(),
                        group.members.join(", ")
                    );
                }
                for name in &plan.singletons {
                    println!("  unchanged: {name}");
                }
            }
        }
    }
    Ok(())
}
