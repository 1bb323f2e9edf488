use std::path::PathBuf;

use clap::Parser;
use greeting_card::{Card, CardError, logging};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file describing the card (defaults to the bundled card)
    #[arg(short, long)]
    card: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("Error running card: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), CardError> {
    if let Some(path) = &args.log_file {
        logging::init(path, &args.log_level)?;
    }

    let card = match &args.card {
        Some(path) => Card::from_json(path)?,
        None => Card::bundled()?,
    };
    tracing::info!(pages = card.app().pager().total(), "card loaded");

    card.run().await
}
