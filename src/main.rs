use anyhow::Result;
use clap::Parser;

use greenhouse_fanout::utils::logging;
use greenhouse_fanout::{App, Cli, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // load configuration
    let mut config = Config::from_env()?;
    cli.apply_to(&mut config);

    // init logging
    logging::init(config.verbose_logging);

    // initialise and run
    App::initialize(config, &cli).await?.run().await?;

    Ok(())
}
