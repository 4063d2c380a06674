use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "prompt-gallery")]
#[command(version, about = "A tag-filtered prompt gallery with a rating leaderboard")]
#[command(propagate_version = true)]
pub struct Cli {
    /// YAML config file
    #[arg(long, global = true, default_value = "gallery.yaml")]
    pub config: PathBuf,

    /// Catalog JSON file (overrides the config)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the gallery as a static HTML page
    Build {
        /// Output directory
        #[arg(long, short = 'o', default_value = "site")]
        out: PathBuf,

        /// Search term applied before writing
        #[arg(long)]
        filter: Option<String>,
    },

    /// List prompts whose tags match a term
    Search {
        /// Tag text, with or without a leading '#'
        term: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the best-rated prompts
    Leaderboard {
        /// Number of rows (defaults to the config value)
        #[arg(long, short = 'n')]
        limit: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Jump to a prompt card by ID
    Show {
        /// Prompt ID
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play the header intro (once per session)
    Intro {
        /// Forget that the intro was already shown
        #[arg(long)]
        reset: bool,
    },
}
