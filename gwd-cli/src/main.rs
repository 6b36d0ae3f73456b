//! GWD CLI - Command line tool for querying India-WRIS groundwater data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "gwd-cli",
    version,
    about = "India groundwater data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: gwd_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    gwd_cmd::run(cli.command).await
}
