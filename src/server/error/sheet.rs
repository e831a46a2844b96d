use google_sheets4::oauth2;
use thiserror::Error;

/// Errors talking to Google Sheets or Drive.
///
/// At startup every variant is fatal. When raised by an append during an
/// interaction the message is shown to the submitting user.
#[derive(Error, Debug)]
pub enum SheetError {
    /// No usable root certificates were found in the platform store.
    #[error("Failed to load native TLS root certificates: {0}")]
    TlsRoots(#[source] std::io::Error),

    /// Failed to build the service-account authenticator from the key.
    #[error("Failed to create service account authenticator: {0}")]
    Authenticator(#[source] std::io::Error),

    /// Token exchange with Google failed.
    #[error("Failed to authenticate with Google: {0}")]
    Auth(#[from] oauth2::Error),

    /// Google answered the token request without an access token.
    #[error("Google returned no access token")]
    MissingAccessToken,

    /// Drive file lookup request failed.
    #[error("Failed to search Drive for the spreadsheet: {0}")]
    Drive(#[from] reqwest::Error),

    /// No spreadsheet with the configured name is visible to the service account.
    #[error("Spreadsheet '{0}' not found or not shared with the service account")]
    SpreadsheetNotFound(String),

    /// The spreadsheet exists but has no worksheets.
    #[error("Spreadsheet '{0}' has no worksheets")]
    NoWorksheet(String),

    /// Sheets API call failed.
    #[error("{0}")]
    Api(#[from] google_sheets4::Error),
}
