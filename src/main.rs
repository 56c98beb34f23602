use anyhow::Result;
use clap::Parser;
use gamedl::cli::Args;
use gamedl::downloader::Downloader;
use gamedl::error::GamedlError;
use gamedl::progress::ConsoleReporter;
use gamedl::{catalog, menu};
use std::io;
use std::path::Path;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(err) = run(args).await {
        println!("Error: {err}");
        let code = err
            .downcast_ref::<GamedlError>()
            .map_or(1, GamedlError::exit_code);
        std::process::exit(code);
    }
}

async fn run(args: Args) -> Result<()> {
    let entries = catalog::load(Path::new(&args.catalog))?;

    if entries.is_empty() {
        println!("No games found in {}", args.catalog);
        return Ok(());
    }

    let stdin = io::stdin();
    let index = menu::choose(&entries, stdin.lock(), io::stdout())?;
    let entry = &entries[index];

    println!("You picked: {}", entry.name);
    println!("Download link: {}", entry.download_link);

    let downloader = Downloader::new(&args.output)?;
    let reporter = Arc::new(ConsoleReporter::new(&entry.name));
    let path = downloader
        .download(&entry.download_link, &entry.name, reporter)
        .await?;

    println!("{} downloaded successfully to {}", entry.name, path.display());
    Ok(())
}
