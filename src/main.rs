use clap::Parser;
use liftoff::cli_app::{handle_command, Cli};
use liftoff::constants::SPACEX_API_BASE_URL;
use liftoff::SpacexApi;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let spacex_api = SpacexApi::new(SPACEX_API_BASE_URL)?;
    handle_command(cli, &spacex_api).await;
    Ok(())
}
