use nasa_media_connector::config::Config;
use nasa_media_connector::logging;
use nasa_media_connector::mcp::NasaMediaServer;
use nasa_media_connector::nasa::NasaClient;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("failed to load configuration: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = logging::init(&config.logging) {
        eprintln!("failed to initialize logging: {err}");
        std::process::exit(1);
    }

    info!(
        base_url = config.nasa.base_url.as_str(),
        "starting NASA Image and Video Library MCP server"
    );

    let client = Arc::new(NasaClient::new(&config.nasa));
    let server = NasaMediaServer::new(client);

    if let Err(err) = server.run_stdio().await {
        error!(error = %err, "server terminated with error");
        std::process::exit(1);
    }
}
