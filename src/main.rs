mod server;

use std::process::ExitCode;

use crate::server::{bot, config::Config, error::AppError, startup, state::AppState};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), AppError> {
    // All three variables are checked before anything touches the network
    let config = Config::from_env()?;

    let worksheet = startup::connect_to_spreadsheet(&config).await?;
    let state = AppState::new(worksheet);

    startup::start_liveness_server(startup::LIVENESS_ADDR).await?;

    let client = bot::start::init_bot(&config, state).await?;
    bot::start::start_bot(client).await?;

    Ok(())
}
