use std::path::PathBuf;

use gilded_rose_inventory::Category;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// `-------- day N --------` blocks.
    #[default]
    Text,
    /// A JSON array of day snapshots.
    Json,
}

/// Simulate the shop's stock over a number of days.
#[derive(Debug, Clone, clap::Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Number of days to simulate.
    #[clap(long, env = "GILDED_ROSE_DAYS", default_value_t = 2)]
    pub days: u32,

    /// JSON file with the starting items (`[{"name", "sellIn", "quality"}]`).
    /// Defaults to the standard stock.
    #[clap(long)]
    pub inventory: Option<PathBuf>,

    #[clap(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Treat Conjured items as ordinary.
    #[clap(long)]
    pub classic: bool,

    /// Extra catalog entry, as `<name>=<category>`. Repeatable.
    #[clap(long = "category", value_parser = parse_category_entry)]
    pub categories: Vec<(String, Category)>,
}

/// Split on the last `=` so item names may themselves contain one.
fn parse_category_entry(value: &str) -> Result<(String, Category), String> {
    let (name, tag) = value
        .rsplit_once('=')
        .ok_or_else(|| format!("expected <name>=<category>, got `{value}`"))?;
    let category = tag.parse::<Category>().map_err(|e| e.to_string())?;
    Ok((name.to_string(), category))
}
