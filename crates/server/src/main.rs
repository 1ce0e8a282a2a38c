//! Replicheck server binary - question similarity and replica detection
//! over HTTP.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up GEMINI_API_KEY and friends from a local .env, if present
    dotenvy::dotenv().ok();

    let config = ServerConfig::load()?;
    server::start_server(config).await?;

    Ok(())
}
