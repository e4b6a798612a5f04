use clap::{ArgAction, Parser, Subcommand};

/// CLI arguments for dealermap
#[derive(Debug, Parser)]
#[command(
    name = "dealermap",
    version,
    about = "CLI for searching and inspecting a dealer catalog"
)]
pub struct CliArgs {
    /// Path to the catalog (.json, .json.gz or .bin snapshot; default: bundled dealers.json)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Path to a JSON map config overriding the default rendering constants
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the catalog contents
    Stats,

    /// List all dealers in catalog order
    Dealers,

    /// List all reference cities
    Cities,

    /// List reference districts, optionally for one city
    Districts {
        /// City name (case- and Turkish-letter-insensitive)
        city: Option<String>,
    },

    /// Run the dealer search and print the results and viewport command
    Search {
        /// Free-text query (matched against city first, then district/name)
        query: String,

        /// Print the full frame as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Report dealers whose city is missing from the city list
    Check,

    /// Write the validated catalog as a binary snapshot
    Compile {
        /// Output path for the snapshot
        out: String,
    },
}
