//! vispager: load a listing description, paginate it and replay clicks

mod listing;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vp_core::PageSubscriber;
use vp_dom::Document;
use vp_ui::{companion_id, render_links, render_table, PageLogger};

use crate::listing::{apply_toggles, build_view, ListingFile, TableSpec};

#[derive(Parser, Debug)]
#[command(name = "vispager", about = "Paginate review listings described in a JSON file")]
struct Cli {
    /// Listing description (JSON)
    listing: PathBuf,

    /// Link element ids to click, in order
    #[arg(long = "click", value_name = "ID")]
    clicks: Vec<String>,

    /// Element ids whose visibility is flipped after the clicks
    #[arg(long = "toggle", value_name = "ID")]
    toggles: Vec<String>,

    /// Table to show (overrides the listing default)
    #[arg(long)]
    table: Option<String>,

    /// Print hidden tables too
    #[arg(long)]
    all: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Loading listing {:?}", cli.listing);
    let listing = ListingFile::load(&cli.listing)?;
    let mut view = build_view(&listing)?;

    // Weak references only; keep the logger alive until exit
    let logger: Arc<dyn PageSubscriber> = Arc::new(PageLogger);
    for paginator in view.paginators_mut() {
        paginator.add_subscriber(logger.clone());
    }

    view.init()?;
    view.switcher().add_counts()?;
    view.switcher().nullify_empty()?;
    if let Some(post) = cli.table.as_ref().or(listing.default_table.as_ref()) {
        view.switcher().reveal(post)?;
    }

    for id in &cli.clicks {
        info!("Clicking '{}'", id);
        view.click(id).with_context(|| format!("Click on '{}' failed", id))?;
    }
    apply_toggles(&view, &cli.toggles)?;

    let doc = view.document().read();
    for table in &listing.tables {
        print_table(&doc, table, cli.all)?;
    }
    Ok(())
}

fn print_table(doc: &Document, table: &TableSpec, all: bool) -> Result<()> {
    let id = table.element_id();
    let shown = doc.is_visible(&id)?;
    let sorry = doc.is_visible(&companion_id(&id, "sorry"))?;
    if !shown && !sorry && !all {
        return Ok(());
    }

    let anchor = doc.element(&companion_id(&id, "anchor"))?;
    println!("== {} ==", anchor.text);
    if sorry {
        println!("  {}", doc.element(&companion_id(&id, "sorry"))?.text);
        return Ok(());
    }
    let body = companion_id(&id, "body");
    if doc.contains(&body) {
        for line in render_table(doc, &body)? {
            println!("  {}", line);
        }
    }
    let captions = companion_id(&id, "captions");
    if doc.contains(&captions) {
        for line in render_table(doc, &captions)? {
            println!("  {}", line);
        }
    }
    let links = render_links(doc, &table.link_div())?;
    if !links.is_empty() {
        println!("  pages: {}", links);
    }
    Ok(())
}
