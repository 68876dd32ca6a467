// Standalone MCP server binary

use anyhow::Result;
use clap::Parser;
use hnscout_mcp::tools::build_registry;
use hnscout_mcp::{McpServer, ServerConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hnscout-mcp", version, about = "Hacker News and Firecrawl tools over MCP stdio")]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "hnscout.toml")]
    config: PathBuf,

    /// Firecrawl API key used for page scraping and search
    #[arg(long, env = "FIRECRAWL_API_KEY", hide_env_values = true)]
    firecrawl_api_key: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A local .env may supply FIRECRAWL_API_KEY
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Stdout is reserved for protocol messages
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("hnscout MCP server starting...");

    let config = ServerConfig::load(&args.config)?.with_firecrawl_api_key(args.firecrawl_api_key);

    let registry = build_registry(&config)?;
    tracing::info!("Registered {} tools", registry.len());

    let server = McpServer::new(registry);
    server.start().await?;

    Ok(())
}
