// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! skein CLI
//!
//! Developer front door for the supply-chain map core: assign the palette,
//! resolve the scene, and inspect supplier data from the terminal.

#![allow(clippy::print_stdout)]

use anyhow::{Context, Result};
use clap::Parser;
use comfy_table::Table;
use rand::rngs::StdRng;
use rand::SeedableRng;
use skein_model::{SupplierRecord, ZipLookup};
use skein_palette::{assign_colors, ColorAssignment};
use skein_scene::resolve_geometry;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Command to execute
    #[clap(subcommand)]
    cmd: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Resolve the full scene and emit it as JSON on stdout
    Render {
        /// Seed the palette RNG for reproducible colors
        #[clap(long)]
        seed: Option<u64>,
        /// Load supplier records from a JSON file instead of the demo set
        #[clap(long)]
        records: Option<PathBuf>,
        /// Pretty-print the JSON
        #[clap(long)]
        pretty: bool,
    },
    /// Show supplier records and how their sites geocode
    Suppliers {
        /// Load supplier records from a JSON file instead of the demo set
        #[clap(long)]
        records: Option<PathBuf>,
    },
    /// Show the color each supplier was assigned
    Palette {
        /// Seed the palette RNG for reproducible colors
        #[clap(long)]
        seed: Option<u64>,
        /// Load supplier records from a JSON file instead of the demo set
        #[clap(long)]
        records: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    match args.cmd {
        Command::Render {
            seed,
            records,
            pretty,
        } => render(seed, records.as_deref(), pretty),
        Command::Suppliers { records } => suppliers(records.as_deref()),
        Command::Palette { seed, records } => palette(seed, records.as_deref()),
    }
}

/// Load records from a JSON file, or fall back to the builtin demo set.
fn load_records(path: Option<&Path>) -> Result<Vec<SupplierRecord>> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading records from {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing records from {}", path.display()))
        }
        None => Ok(skein_model::demo_records()),
    }
}

fn make_palette(records: &[SupplierRecord], seed: Option<u64>) -> Result<ColorAssignment> {
    let mut rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
    assign_colors(records, &mut rng).context("assigning supplier colors")
}

fn render(seed: Option<u64>, records: Option<&Path>, pretty: bool) -> Result<()> {
    let records = load_records(records)?;
    let colors = make_palette(&records, seed)?;
    let scene = resolve_geometry(&records, &colors, skein_geo::builtin_index());

    if !scene.stats.is_clean() {
        tracing::warn!(
            sites_skipped = scene.stats.sites_skipped,
            centers_skipped = scene.stats.centers_skipped,
            skipped_zips = ?scene.stats.skipped_zips,
            "some postal codes did not geocode; their primitives were dropped"
        );
    }

    let json = if pretty {
        serde_json::to_string_pretty(&scene)?
    } else {
        serde_json::to_string(&scene)?
    };
    println!("{json}");
    Ok(())
}

fn suppliers(records: Option<&Path>) -> Result<()> {
    let records = load_records(records)?;
    let index = skein_geo::builtin_index();

    let mut table = Table::new();
    table.set_header(["Supplier", "Site Zip", "Coordinates", "Delivery Centers"]);
    for record in &records {
        for site in &record.manufacturing_sites {
            let coords = index.lookup(&site.zip).map_or_else(
                || "unmapped".to_owned(),
                |p| format!("{:.4}, {:.4}", p.latitude, p.longitude),
            );
            table.add_row([
                record.supplier_id.to_string(),
                site.zip.to_string(),
                coords,
                site.delivery_centers.len().to_string(),
            ]);
        }
    }
    println!("{table}");
    Ok(())
}

fn palette(seed: Option<u64>, records: Option<&Path>) -> Result<()> {
    let records = load_records(records)?;
    let colors = make_palette(&records, seed)?;

    let mut table = Table::new();
    table.set_header(["Supplier", "Color"]);
    for (id, color) in colors.iter() {
        table.add_row([id.to_string(), color.to_hex()]);
    }
    println!("{table}");
    Ok(())
}
