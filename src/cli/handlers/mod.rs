use std::error::Error;
use std::path::PathBuf;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io;
use crate::io::manifest_io::{self, ManifestError};
use crate::io::store_io::LibraryStore;
use crate::model::catalog::Catalog;
use crate::model::config::Config;
use crate::model::filter::FilterState;
use crate::model::nav::NavPath;
use crate::model::node::Node;
use crate::ops::check::{self, IntegrityReport};
use crate::ops::links::action_url;
use crate::ops::view;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn Error>> {
    let ctx = Context::load(&cli)?;
    let json = cli.json;

    match cli.command {
        Commands::Ls(args) => cmd_ls(&ctx, args, json),
        Commands::Check => cmd_check(&ctx, json),
        Commands::Open(args) => cmd_open(&ctx, args, json),
        Commands::Url(args) => cmd_url(&ctx, args, json),
        Commands::Fav(args) => cmd_fav(&ctx, args, json),
        Commands::Favs => cmd_favs(&ctx, json),
        Commands::Recent => cmd_recent(&ctx, json),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Resolved settings for one invocation: config file values with flag
/// overrides applied.
struct Context {
    config: Config,
    manifest: PathBuf,
    store_dir: PathBuf,
}

impl Context {
    fn load(cli: &Cli) -> Result<Self, Box<dyn Error>> {
        let config = match &cli.config {
            Some(path) => config_io::read_config_from(path)?,
            None => config_io::read_config()?,
        };
        let manifest = cli
            .manifest
            .clone()
            .unwrap_or_else(|| config.source.manifest.clone());
        let store_dir = cli
            .store_dir
            .clone()
            .unwrap_or_else(|| config_io::store_dir(&config));
        Ok(Context {
            config,
            manifest,
            store_dir,
        })
    }

    fn base_url(&self) -> &str {
        &self.config.source.base_url
    }

    fn catalog(&self) -> Result<Catalog, ManifestError> {
        manifest_io::load_catalog(&self.manifest)
    }

    fn store(&self) -> LibraryStore {
        LibraryStore::open(&self.store_dir)
    }
}

/// Look up a file node by manifest path. Folders and unknown paths are errors.
fn find_file<'a>(catalog: &'a Catalog, path: &str) -> Result<&'a Node, String> {
    let normalized = NavPath::from_address(path).to_address();
    match catalog.tree.get(&normalized) {
        Some(node) if node.is_file() => Ok(node),
        Some(_) => Err(format!("'{}' is a folder, not a file", normalized)),
        None => Err(format!("no such file in manifest: '{}'", normalized)),
    }
}

// ---------------------------------------------------------------------------
// Read command handlers
// ---------------------------------------------------------------------------

fn cmd_ls(ctx: &Context, args: LsArgs, json: bool) -> Result<(), Box<dyn Error>> {
    let catalog = ctx.catalog()?;
    let store = ctx.store();

    let nav = NavPath::from_address(args.address.as_deref().unwrap_or(""));
    let filter = FilterState {
        session: args.session,
        year_min: args.year_min,
        year_max: args.year_max,
    };
    let folder = nav.resolve(&catalog.tree);
    let entries = view::compute_view(folder, &args.search, &filter);

    if json {
        let out = ViewJson {
            address: nav.to_address(),
            breadcrumbs: nav.segments().to_vec(),
            found: folder.exists(),
            search: args.search.clone(),
            filter,
            total: folder.len(),
            entries: entries
                .iter()
                .map(|node| entry_to_json(node, ctx.base_url(), store.is_favorite(&node.path)))
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{}", format_breadcrumbs(nav.segments()));
    if !folder.exists() {
        println!("  (no such folder)");
        return Ok(());
    }
    if entries.is_empty() {
        println!("  (no files match)");
        return Ok(());
    }
    for node in &entries {
        println!("{}", format_entry(node, store.is_favorite(&node.path)));
    }
    if entries.len() != folder.len() {
        println!("\n{} of {} shown", entries.len(), folder.len());
    }
    Ok(())
}

fn cmd_check(ctx: &Context, json: bool) -> Result<(), Box<dyn Error>> {
    let catalog = ctx.catalog()?;
    let report = check::check_catalog(&catalog);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &IntegrityReport) {
    println!("Manifest paths:  {}", report.manifest_paths);
    println!("Files in tree:   {}", report.files_in_tree);
    println!("Missing:         {}", report.missing);
    println!("Malformed lines: {}", report.malformed_lines);
    if !report.missing_preview.is_empty() {
        println!();
        println!("Missing from tree:");
        for path in &report.missing_preview {
            println!("  {}", path);
        }
        if report.missing > report.missing_preview.len() {
            println!(
                "  ... and {} more",
                report.missing - report.missing_preview.len()
            );
        }
    }
    if report.is_consistent() {
        println!("✓ all manifest paths are in the tree");
    } else {
        println!("✗ some manifest paths are not reachable in the tree");
    }
}

fn cmd_url(ctx: &Context, args: PathArg, json: bool) -> Result<(), Box<dyn Error>> {
    let catalog = ctx.catalog()?;
    let node = find_file(&catalog, &args.path)?;
    print_url(&node.path, &action_url(ctx.base_url(), &node.path), json)
}

fn print_url(path: &str, url: &str, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        let out = UrlJson {
            path: path.to_string(),
            url: url.to_string(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", url);
    }
    Ok(())
}

fn cmd_favs(ctx: &Context, json: bool) -> Result<(), Box<dyn Error>> {
    let store = ctx.store();
    if json {
        println!("{}", serde_json::to_string_pretty(store.favorites())?);
        return Ok(());
    }
    if store.favorites().is_empty() {
        println!("No favorites yet");
    }
    for fav in store.favorites() {
        println!(
            "  {}  {}  (added {})",
            fav.name,
            fav.path,
            format_timestamp(fav.added_at)
        );
    }
    Ok(())
}

fn cmd_recent(ctx: &Context, json: bool) -> Result<(), Box<dyn Error>> {
    let store = ctx.store();
    if json {
        println!("{}", serde_json::to_string_pretty(store.recents())?);
        return Ok(());
    }
    if store.recents().is_empty() {
        println!("No recent files");
    }
    for recent in store.recents() {
        println!(
            "  {}  {}  {}",
            format_timestamp(recent.accessed_at),
            recent.name,
            recent.path
        );
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write command handlers
// ---------------------------------------------------------------------------

fn cmd_open(ctx: &Context, args: PathArg, json: bool) -> Result<(), Box<dyn Error>> {
    let catalog = ctx.catalog()?;
    let node = find_file(&catalog, &args.path)?;
    let mut store = ctx.store();
    store.record_recent(&node.path, &node.name)?;
    print_url(&node.path, &action_url(ctx.base_url(), &node.path), json)
}

fn cmd_fav(ctx: &Context, args: PathArg, json: bool) -> Result<(), Box<dyn Error>> {
    let mut store = ctx.store();
    let normalized = NavPath::from_address(&args.path).to_address();

    // Removing never needs the manifest, so stale favorites can be cleared
    let favorite = if store.is_favorite(&normalized) {
        store.toggle_favorite(&normalized, "")?
    } else {
        let catalog = ctx.catalog()?;
        let node = find_file(&catalog, &normalized)?;
        store.toggle_favorite(&node.path, &node.name)?
    };

    if json {
        let out = FavoriteToggleJson {
            path: normalized,
            favorite,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else if favorite {
        println!("\u{2605} added {}", normalized);
    } else {
        println!("removed {}", normalized);
    }
    Ok(())
}
