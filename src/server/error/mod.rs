//! Error types for startup and interaction handling.
//!
//! `AppError` is the top-level error returned from startup. Any variant reaching
//! `main` is fatal: it is logged and the process exits before or instead of
//! serving the bot. `SheetError` is also produced per interaction when an append
//! fails, in which case it is turned into an ephemeral reply rather than being
//! propagated.

pub mod config;
pub mod sheet;

use thiserror::Error;

use crate::server::error::{config::ConfigError, sheet::SheetError};

/// Top-level application error type.
///
/// Aggregates every error that can abort startup. Most variants use `#[from]`
/// so startup code can use `?` throughout.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error while reading the environment.
    ///
    /// Raised before any network connection is attempted.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Spreadsheet authentication, lookup or open failure.
    #[error(transparent)]
    SheetErr(#[from] SheetError),

    /// Socket error binding the liveness endpoint.
    #[error("Failed to bind liveness endpoint: {0}")]
    IoErr(#[from] std::io::Error),

    /// Discord client error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
