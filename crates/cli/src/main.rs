use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use multiverse_cli::commands::{members, neighbors, related, show};
use multiverse_cli::engine::SessionOptions;

#[derive(Parser)]
#[command(name = "multiverse")]
#[command(about = "Zn-Multiverse Inspector - residue classes and their refinement graph", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Shared options describing which multiverse to build.
#[derive(Args, Debug, Clone)]
struct MultiverseArgs {
    /// Start from an empty multiverse instead of the seed catalog.
    #[arg(long)]
    empty: bool,

    /// Out-degree cap applied during edge recomputation.
    #[arg(long, env = "ZN_MAX_OUT_DEGREE")]
    max_degree: Option<usize>,

    /// Seed catalog moduli (comma separated), e.g. 2,3,4
    #[arg(long, value_delimiter = ',')]
    moduli: Option<Vec<i64>>,

    /// Universe to add after seeding, as a:n (repeatable)
    #[arg(long)]
    add: Vec<String>,

    /// Universe to remove after additions, as a:n (repeatable)
    #[arg(long)]
    remove: Vec<String>,
}

impl From<MultiverseArgs> for SessionOptions {
    fn from(args: MultiverseArgs) -> Self {
        SessionOptions {
            empty: args.empty,
            max_degree: args.max_degree,
            moduli: args.moduli,
            add: args.add,
            remove: args.remove,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show every universe with its outgoing connections
    Show {
        #[command(flatten)]
        multiverse: MultiverseArgs,
    },
    /// Show the outgoing connections of one universe
    Neighbors {
        a: i64,
        n: i64,
        #[command(flatten)]
        multiverse: MultiverseArgs,
    },
    /// List universes connected to one universe in either direction
    Related {
        a: i64,
        n: i64,
        #[command(flatten)]
        multiverse: MultiverseArgs,
    },
    /// Enumerate members of [a]Zn within a closed range
    Members {
        a: i64,
        n: i64,
        #[arg(allow_hyphen_values = true)]
        lower: i64,
        #[arg(allow_hyphen_values = true)]
        upper: i64,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "zn_multiverse=info,multiverse_cli=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show { multiverse } => show::run(&multiverse.into()),
        Commands::Neighbors { a, n, multiverse } => neighbors::run(&multiverse.into(), a, n),
        Commands::Related { a, n, multiverse } => related::run(&multiverse.into(), a, n),
        Commands::Members { a, n, lower, upper } => members::run(a, n, lower, upper),
    }
}
