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
    let to = std::env::var("REACHSMS_TO").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "REACHSMS_TO environment variable is required",
        )
    })?;
    let from = std::env::var("REACHSMS_FROM").unwrap_or_else(|_| "reachsms".to_owned());
    let text = std::env::var("REACHSMS_TEXT")
        .unwrap_or_else(|_| "Hello from the reachsms example.".to_owned());

    let client = ReachSmsClient::new(username, password)?;
    let message = ReachSmsClient::construct_message(to, from, text);

    for result in client.send_message(&message).await? {
        println!(
            "success: {}, id: {:?}, description: {:?}",
            result.success, result.id, result.description
        );
    }

    Ok(())
}
