use std::io;

use reachsms::ReachSmsClient;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let username = std::env::var("REACHSMS_USERNAME").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "REACHSMS_USERNAME environment variable is required",
        )
    })?;
    let password = std::env::var("REACHSMS_PASSWORD").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "REACHSMS_PASSWORD environment variable is required",
        )
    })?;

    let client = ReachSmsClient::new(username, password)?;
    let balance = client.get_balance().await?;
    println!(
        "balance: {}",
        balance.balance.as_deref().unwrap_or("<not reported>")
    );

    Ok(())
}
