use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "gamedl")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Catalog file path
    #[arg(short, long, default_value = "games.json")]
    pub catalog: String,

    /// Output directory for downloaded files
    #[arg(short, long, default_value = ".")]
    pub output: String,
}
