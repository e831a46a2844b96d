use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, data::Worksheet, error::AppError, router};

/// Fixed bind address of the liveness endpoint.
pub const LIVENESS_ADDR: &str = "0.0.0.0:8080";

/// Installs the global tracing subscriber.
///
/// Honors `RUST_LOG` when set and falls back to `info` otherwise.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Authenticates with Google and opens the configured spreadsheet.
///
/// Must succeed before the bot connects; a failure here is fatal and is not
/// retried.
///
/// # Arguments
/// - `config` - Application configuration holding the key and spreadsheet name
///
/// # Returns
/// - `Ok(Worksheet)` - Handle to the first worksheet
/// - `Err(AppError)` - Authentication failed or the spreadsheet could not be opened
pub async fn connect_to_spreadsheet(config: &Config) -> Result<Worksheet, AppError> {
    let worksheet = Worksheet::connect(
        config.service_account_key.clone(),
        &config.spreadsheet_name,
    )
    .await?;

    Ok(worksheet)
}

/// Binds the liveness endpoint and serves it on a background task.
///
/// Binding happens before returning so an occupied port fails startup. Serving
/// errors after that are only logged; the bot keeps running.
///
/// # Arguments
/// - `addr` - Address to bind, `LIVENESS_ADDR` in production
///
/// # Returns
/// - `Ok(SocketAddr)` - Address actually bound
/// - `Err(AppError)` - The address could not be bound
pub async fn start_liveness_server(addr: &str) -> Result<SocketAddr, AppError> {
    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!("Liveness endpoint listening on {}", local_addr);

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router::router()).await {
            tracing::error!("Liveness endpoint error: {}", e);
        }
    });

    Ok(local_addr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::controller::health::ALIVE_BODY;

    /// Tests the liveness server answers over a real socket.
    ///
    /// Expected: 200 OK with "Bot is alive!" from the bound address
    #[tokio::test]
    async fn serves_liveness_in_background() {
        let addr = start_liveness_server("127.0.0.1:0").await.unwrap();

        let response = reqwest::get(format!("http://{}/", addr)).await.unwrap();

        assert_eq!(response.status(), reqwest::StatusCode::OK);
        assert_eq!(response.text().await.unwrap(), ALIVE_BODY);
    }

    /// Tests that an occupied port is reported instead of ignored.
    ///
    /// Expected: Err(AppError::IoErr)
    #[tokio::test]
    async fn fails_when_port_taken() {
        let addr = start_liveness_server("127.0.0.1:0").await.unwrap();

        let result = start_liveness_server(&addr.to_string()).await;

        assert!(matches!(result, Err(AppError::IoErr(_))));
    }
}
