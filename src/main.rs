use std::error::Error;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use tile_workspace::seamless::error::SeamlessError;
use tile_workspace::seamless::viewer::open_in_viewer;
use tile_workspace::seamless::{
    check, offset_preview, slice_to_tiles, validate_tile_size, DEFAULT_TILE_SIZE,
};

/// Check whether a texture tiles seamlessly
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Path to input image
    #[clap(value_parser)]
    img: PathBuf,

    /// `offset` or `slice`; anything else runs the 2x2 check
    #[clap(value_parser)]
    command: Option<String>,

    /// Tile size used by `slice`
    #[clap(default_value_t = DEFAULT_TILE_SIZE, short = 's', long, value_parser)]
    tile_size: u32,

    #[clap(long)]
    /// Don't open the result in the image viewer
    no_open: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Command {
    /// Tile the image 2x2 to look for visible edges
    Check,
    /// Move the seams to the centre of the image
    Offset,
    /// Cut the image into square tiles
    Slice,
}

impl Command {
    fn from_word(word: Option<&str>) -> Command {
        match word {
            Some("offset") => Command::Offset,
            Some("slice") => Command::Slice,
            _ => Command::Check,
        }
    }
}

/// Validates that the input image path exists and is a file
fn validate_input_image(path: &Path) -> Result<(), String> {
    if !path.exists() {
        return Err(report(SeamlessError::NotFound(path.to_owned())));
    }
    if !path.is_file() {
        return Err(format!(
            "❌ Input path is not a file: {}\n💡 Please provide a path to an image file, not a directory",
            path.display()
        ));
    }
    Ok(())
}

fn hint(error: &SeamlessError) -> &'static str {
    match error {
        SeamlessError::NotFound(_) => "Check the file path and ensure the file exists",
        SeamlessError::InvalidTileSize(_) => "Try using a value like 16, 32, or 64",
        SeamlessError::Decode { .. } => "Supported formats include png, jpg, bmp, gif, tiff and webp",
        SeamlessError::Save { .. } | SeamlessError::CreateDir { .. } => {
            "Ensure the directory is writable and has sufficient disk space"
        }
        SeamlessError::Viewer { .. } => "Open the file manually",
    }
}

fn report(error: SeamlessError) -> String {
    format!("❌ {}\n💡 {}", error, hint(&error))
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let Cli {
        img,
        command,
        tile_size,
        no_open,
    } = cli;

    validate_input_image(&img)?;

    let output = match Command::from_word(command.as_deref()) {
        Command::Check => check(&img).map_err(report)?,
        Command::Offset => offset_preview(&img).map_err(report)?,
        Command::Slice => {
            validate_tile_size(tile_size).map_err(report)?;
            slice_to_tiles(&img, tile_size).map_err(report)?.dir
        }
    };

    if !no_open {
        // the output is already on disk, a missing viewer is not fatal
        if let Err(e) = open_in_viewer(&output) {
            eprintln!("⚠️  {}", e);
        }
    }
    Ok(())
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            process::exit(1);
        }
        // --help and --version
        Err(e) => e.exit(),
    };

    if let Err(e) = run(cli) {
        eprintln!("{}", e);
        process::exit(1);
    }
}
