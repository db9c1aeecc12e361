//! CLI frontend for the item shop: rolls the magic items a settlement sells.

mod commands;
mod state;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(
    name = "shop",
    about = "Item shop — which magic items can be bought in a settlement",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the settlement sizes and their availability rules
    Towns,

    /// List the sourcebooks present in a catalog
    Sources {
        /// Catalog JSON file
        #[arg(short, long, env = "SHOP_CATALOG")]
        catalog: PathBuf,
    },

    /// Roll the magic items available in a settlement
    Roll {
        /// Catalog JSON file
        #[arg(short, long, env = "SHOP_CATALOG")]
        catalog: PathBuf,

        /// Settlement size (see `shop towns`)
        #[arg(short, long, default_value = "Großstadt")]
        town: String,

        /// Allowed sourcebook; repeat for several (default: the core rule sets)
        #[arg(short, long = "source")]
        sources: Vec<String>,

        /// Allow every sourcebook in the catalog
        #[arg(long, conflicts_with = "sources")]
        all_sources: bool,

        /// RNG seed for reproducible rolls
        #[arg(long)]
        seed: Option<u64>,

        /// Where the last roll is saved
        #[arg(long, env = "SHOP_STATE", default_value = "shop-last.json")]
        state: PathBuf,

        /// Do not save this roll
        #[arg(long)]
        no_save: bool,

        /// Print the selection as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the last saved roll without rolling again
    Last {
        /// Where the last roll is saved
        #[arg(long, env = "SHOP_STATE", default_value = "shop-last.json")]
        state: PathBuf,

        /// Print the saved roll as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Towns => commands::towns::run(),
        Commands::Sources { catalog } => commands::sources::run(&catalog),
        Commands::Roll {
            catalog,
            town,
            sources,
            all_sources,
            seed,
            state,
            no_save,
            json,
        } => commands::roll::run(commands::roll::RollArgs {
            catalog: &catalog,
            town: &town,
            sources,
            all_sources,
            seed,
            state: (!no_save).then_some(state.as_path()),
            json,
        }),
        Commands::Last { state, json } => commands::last::run(&state, json),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
