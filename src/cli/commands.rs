use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::model::filter::{Session, YEAR_MAX, YEAR_MIN};

#[derive(Parser)]
#[command(name = "pdx", about = concat!("paperdex v", env!("CARGO_PKG_VERSION"), " - browse a paper manifest as folders"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Manifest file (default: source.manifest from the config)
    #[arg(short = 'm', long, global = true)]
    pub manifest: Option<PathBuf>,

    /// Config file (default: $XDG_CONFIG_HOME/paperdex/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory for favorites and recents (default: store.dir from the config)
    #[arg(long = "store-dir", global = true)]
    pub store_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List a folder, with optional search and filters
    Ls(LsArgs),
    /// Check that every manifest path is reachable in the tree
    Check,
    /// Print the URL of a file and add it to recents
    Open(PathArg),
    /// Print the download URL of a file
    Url(PathArg),
    /// Toggle a file as favorite
    Fav(PathArg),
    /// List favorites
    Favs,
    /// List recently opened files
    Recent,
}

#[derive(Args)]
pub struct LsArgs {
    /// Folder address, e.g. "2023/w" (default: root)
    pub address: Option<String>,
    /// Case-insensitive substring to match against names and paths
    #[arg(short, long, default_value = "")]
    pub search: String,
    /// Session filter: all, m/march, s/summer, w/winter
    #[arg(long, default_value = "all")]
    pub session: Session,
    /// Earliest year to include
    #[arg(long, default_value_t = YEAR_MIN)]
    pub year_min: i32,
    /// Latest year to include
    #[arg(long, default_value_t = YEAR_MAX)]
    pub year_max: i32,
}

#[derive(Args)]
pub struct PathArg {
    /// File path as listed in the manifest
    pub path: String,
}
