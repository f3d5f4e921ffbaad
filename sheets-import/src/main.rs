use clap::Parser;
use env_logger::Env;

use sheets_import::cli::{Cli, handle_import};

#[tokio::main]
async fn main() {
    let args = Cli::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_filter()))
        .format_timestamp(None)
        .init();

    if let Err(e) = handle_import(&args).await {
        log::error!("Import failed: {:#}", e);
        std::process::exit(1);
    }
}
