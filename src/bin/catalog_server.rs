use std::error::Error;

use movie_grid::config::Config;
use movie_grid::{logging, server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::load()?;
    logging::init_stderr_logging(&config);

    let provider = server::provider_from_config(&config.server)?;
    server::serve(provider, &config.server.bind_addr()).await?;

    Ok(())
}
