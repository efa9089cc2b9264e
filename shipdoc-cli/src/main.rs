#![deny(missing_docs)]
//! shipdoc command-line interface.
//!
//! Generates a naevpedia page source from a single ship XML file.

use clap::Parser;
use shipdoc_core::{FileSystem, ShipPage, generate_page};
use std::io::Write;
use std::path::PathBuf;

pub(crate) type CliResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[derive(Parser, Debug)]
#[command(
    name = "shipdoc",
    version,
    about = "Generate naevpedia markdown from ship XML files."
)]
struct Cli {
    /// Name of the ship XML file.
    #[arg(value_name = "PATH")]
    path: PathBuf,
    /// Output path.
    #[arg(short, long, env = "SHIPDOC_OUTPUT")]
    output: Option<PathBuf>,
    /// Print the flattened ship record as JSON on stdout.
    #[arg(long)]
    dump_record: bool,
}

#[cfg(not(test))]
fn main() -> CliResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    run(&cli, &shipdoc_core::StdFileSystem::new(), &mut stdout.lock())?;
    Ok(())
}

#[cfg(test)]
fn main() {}

fn run<F: FileSystem, W: Write>(cli: &Cli, fs: &F, out: &mut W) -> CliResult<ShipPage> {
    log::debug!("generating page for {}", cli.path.display());
    let page = generate_page(fs, &cli.path, cli.output.as_deref())?;
    if cli.dump_record {
        let json = serde_json::to_string_pretty(&page.record)?;
        writeln!(out, "{json}")?;
    }
    Ok(page)
}
