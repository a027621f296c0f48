use clap::Parser;
use contact_sheet::generate;
use contact_sheet::imaging::RustBackend;
use std::path::PathBuf;

/// Fixed destination for `--log`.
const LOG_FILE: &str = "contact-sheet.log";

#[derive(Parser)]
#[command(name = "contact-sheet")]
#[command(about = "Static HTML gallery generator for photo albums")]
#[command(long_about = "\
Static HTML gallery generator for photo albums

Your filesystem is the data source. Each subdirectory of the gallery root
is an album; photos are files named IMG_ + four digits + .jpg.

Gallery structure:

  photos/
  ├── 2019-iceland/              # Album
  │   ├── IMG_0004.jpg           # Source photo (needs EXIF exposure tags)
  │   └── IMG_0017.jpg
  └── trip/
      └── IMG_0001.jpg

The build writes, next to each photo, a 256px-wide thumbnail
(IMG_0004_thumb.jpg) and a detail page (IMG_0004.html) with previous/next
navigation, plus index.html and style.css at the gallery root. Rerunning
regenerates everything in place.")]
#[command(version)]
struct Cli {
    /// Gallery root: a directory of album subdirectories
    root: PathBuf,

    /// Print per-album progress to standard output
    #[arg(short, long)]
    verbose: bool,

    /// Write progress to contact-sheet.log instead of the terminal
    #[arg(short, long)]
    log: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log)?;

    log::info!("building gallery at {}", cli.root.display());
    let summary = generate::build(&cli.root, &RustBackend::new())?;

    println!(
        "==> Build complete: {} albums, {} images",
        summary.albums, summary.images
    );
    Ok(())
}

/// Route the logger: `--log` pipes everything to [`LOG_FILE`], `--verbose`
/// raises the filter to `info` on stdout, otherwise only warnings reach
/// stderr. `RUST_LOG` still overrides the filter either way.
fn init_logging(verbose: bool, to_file: bool) -> Result<(), std::io::Error> {
    let default_filter = if verbose || to_file { "info" } else { "warn" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));

    if to_file {
        let file = std::fs::File::create(LOG_FILE)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    } else if verbose {
        builder.target(env_logger::Target::Stdout);
    }

    builder.init();
    Ok(())
}
