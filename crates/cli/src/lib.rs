//! Text-fixture runner: prints the stock day by day.

use std::io::Write;
use std::path::Path;

use anyhow::Context;

use gilded_rose_inventory::fixtures::standard_inventory;
use gilded_rose_inventory::{Catalog, Inventory, Item};

pub mod args;

pub use args::{Args, OutputFormat};

pub fn run(args: &Args, out: &mut impl Write) -> anyhow::Result<()> {
    let catalog = build_catalog(args)?;
    let items = match &args.inventory {
        Some(path) => load_items(path)?,
        None => standard_inventory(),
    };

    tracing::info!(
        days = args.days,
        items = items.len(),
        catalog_entries = catalog.len(),
        "starting simulation"
    );

    let snapshots = Inventory::with_catalog(items, catalog).simulate(args.days);

    match args.format {
        OutputFormat::Text => {
            writeln!(out, "OMGHAI!")?;
            for snapshot in &snapshots {
                writeln!(out, "{snapshot}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &snapshots)
                .context("failed to write snapshots as JSON")?;
            writeln!(out)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn build_catalog(args: &Args) -> anyhow::Result<Catalog> {
    let mut catalog = if args.classic {
        Catalog::classic()
    } else {
        Catalog::standard()
    };

    for (name, category) in &args.categories {
        if let Some(previous) = catalog.register(name.clone(), *category)? {
            tracing::warn!(%name, %previous, %category, "overriding catalog entry");
        }
    }

    Ok(catalog)
}

fn load_items(path: &Path) -> anyhow::Result<Vec<Item>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read inventory from {}", path.display()))?;
    let items: Vec<Item> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse inventory in {}", path.display()))?;
    if items.is_empty() {
        tracing::warn!(path = %path.display(), "inventory file has no items");
    }
    Ok(items)
}
