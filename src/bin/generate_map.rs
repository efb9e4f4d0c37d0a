use std::error::Error;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use tile_workspace::tilemap::config::DEFAULT_OUTPUT_PATH;
use tile_workspace::tilemap::{create_tilemap, save};

/// Generate the starter Tiled map: grass, a river on the right and the edge between them
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Output map path
    #[clap(default_value = DEFAULT_OUTPUT_PATH, short, long, value_parser)]
    output_path: PathBuf,
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let tilemap = create_tilemap();
    tilemap.validate().map_err(|e| format!("❌ {}", e))?;

    save(&tilemap, &cli.output_path).map_err(|e| {
        format!(
            "❌ {}\n💡 Ensure the directory is writable and has sufficient disk space",
            e
        )
    })?;

    eprintln!();
    eprintln!("{}", tilemap);
    eprintln!();
    eprintln!("You can edit it in Tiled:");
    eprintln!("  open -a Tiled \"{}\"", cli.output_path.display());
    Ok(())
}

fn main() {
    if let Err(e) = run(Cli::parse()) {
        eprintln!("{}", e);
        process::exit(1);
    }
}
