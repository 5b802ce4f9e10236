use std::io;

use reachsms::{MessageId, ReachSmsClient};
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
    let id_raw = std::env::var("REACHSMS_MESSAGE_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "REACHSMS_MESSAGE_ID environment variable is required",
        )
    })?;

    let client = ReachSmsClient::new(username, password)?;
    let id = MessageId::new(id_raw)?;
    for details in client.get_message(&id).await? {
        println!(
            "to: {}, status: {}, sent: {}, delivered: {}, dlr: {}, success: {}",
            details.to,
            details.status,
            details.sent_date,
            details.delivered_date,
            details.dlr_code,
            details.success
        );
    }

    Ok(())
}
