use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "docportal")]
#[command(about = "Render and search a static documentation portal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the portal data files (docs.json, resources.json)
    #[arg(short, long, global = true, default_value = "data")]
    pub data_dir: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a portal page (or its fragments) as HTML
    #[command(alias = "r")]
    Render {
        /// Which page pipeline to run
        #[arg(long, value_enum, default_value = "home")]
        page: Page,

        /// HTML shell with <!-- slot:NAME --> markers to splice into
        #[arg(long)]
        template: Option<PathBuf>,

        /// Fill the search results panel with hits for this query
        #[arg(short, long)]
        query: Option<String>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Search documents by free text
    #[command(alias = "s")]
    Search {
        /// Query matched against title, summary, tags, and area
        query: String,
    },

    /// List resources, optionally filtered
    #[command(alias = "ls")]
    Resources {
        /// Keep only resources of this exact type
        #[arg(long = "type")]
        kind: Option<String>,

        /// Keep only resources of this exact area
        #[arg(long)]
        area: Option<String>,

        /// Substring search over title and tags
        #[arg(short, long)]
        query: Option<String>,

        /// Keep only resources carrying this exact tag
        #[arg(long, conflicts_with_all = ["kind", "area", "query"])]
        tag: Option<String>,
    },

    /// Show document counts per section
    Stats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Page {
    Home,
    Resources,
}
