use google_sheets4::{
    api::{Spreadsheet, ValueRange},
    hyper, hyper_rustls,
    oauth2::{self, ServiceAccountKey},
    Sheets,
};
use serenity::async_trait;

use super::{drive::DriveClient, value_range::ValueRangeFactory, ReportSheet};
use crate::server::error::sheet::SheetError;

pub const SPREADSHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
pub const DRIVE_SCOPE: &str = "https://www.googleapis.com/auth/drive";

/// Both scopes are requested together so one cached token serves every call.
const SCOPES: [&str; 2] = [SPREADSHEETS_SCOPE, DRIVE_SCOPE];

type HttpsConnector = hyper_rustls::HttpsConnector<hyper::client::HttpConnector>;

/// Handle to the first worksheet of a spreadsheet.
///
/// Created once at startup and shared read-only by every interaction. The
/// underlying authenticator refreshes its token on demand.
pub struct Worksheet {
    hub: Sheets<HttpsConnector>,
    spreadsheet_id: String,
    title: String,
}

impl Worksheet {
    /// Authenticates with the service account and opens the named spreadsheet.
    ///
    /// Exchanges the key for an access token, resolves the spreadsheet ID by name
    /// through Drive, then reads the spreadsheet metadata to find the title of
    /// its first worksheet. No step is retried.
    ///
    /// # Arguments
    /// - `key` - Service-account key parsed from the environment
    /// - `spreadsheet_name` - Exact name of the target spreadsheet
    ///
    /// # Returns
    /// - `Ok(Worksheet)` - Handle ready for appends
    /// - `Err(SheetError)` - Authentication, lookup or metadata request failed
    pub async fn connect(
        key: ServiceAccountKey,
        spreadsheet_name: &str,
    ) -> Result<Self, SheetError> {
        let client = http_client()?;

        let auth = oauth2::ServiceAccountAuthenticator::with_client(key, client.clone())
            .build()
            .await
            .map_err(SheetError::Authenticator)?;

        let token = auth.token(&SCOPES).await?;
        let access_token = token.token().ok_or(SheetError::MissingAccessToken)?;

        let file = DriveClient::new(reqwest::Client::new(), access_token)
            .find_spreadsheet(spreadsheet_name)
            .await?
            .ok_or_else(|| SheetError::SpreadsheetNotFound(spreadsheet_name.to_string()))?;

        let hub = Sheets::new(client, auth);

        let (_, spreadsheet) = hub
            .spreadsheets()
            .get(&file.id)
            .add_scope(SPREADSHEETS_SCOPE)
            .add_scope(DRIVE_SCOPE)
            .doit()
            .await?;

        let title = first_worksheet_title(&spreadsheet)
            .ok_or_else(|| SheetError::NoWorksheet(spreadsheet_name.to_string()))?;

        tracing::info!(
            "Connected to spreadsheet '{}' ({}), worksheet '{}'",
            file.name,
            file.id,
            title
        );

        Ok(Self {
            hub,
            spreadsheet_id: file.id,
            title,
        })
    }
}

#[async_trait]
impl ReportSheet for Worksheet {
    async fn append_row(&self, values: [String; 2]) -> Result<(), SheetError> {
        let value_range = ValueRange::from_row(&values);

        self.hub
            .spreadsheets()
            .values_append(value_range, &self.spreadsheet_id, &append_range(&self.title))
            .value_input_option("RAW")
            .insert_data_option("INSERT_ROWS")
            .add_scope(SPREADSHEETS_SCOPE)
            .add_scope(DRIVE_SCOPE)
            .doit()
            .await?;

        Ok(())
    }
}

/// HTTPS client trusting the platform's native root certificates.
fn http_client() -> Result<hyper::Client<HttpsConnector>, SheetError> {
    let connector = hyper_rustls::HttpsConnectorBuilder::new()
        .with_native_roots()
        .map_err(SheetError::TlsRoots)?
        .https_or_http()
        .enable_http1()
        .build();

    Ok(hyper::Client::builder().build(connector))
}

/// Title of the worksheet listed first in the spreadsheet metadata.
fn first_worksheet_title(spreadsheet: &Spreadsheet) -> Option<String> {
    spreadsheet
        .sheets
        .as_ref()?
        .first()?
        .properties
        .as_ref()?
        .title
        .clone()
}

/// A1 range anchoring the append table at the top-left of the worksheet.
///
/// The title is always quoted so names with spaces work; embedded single
/// quotes are doubled.
fn append_range(title: &str) -> String {
    format!("'{}'!A1", title.replace('\'', "''"))
}

#[cfg(test)]
mod tests {
    use google_sheets4::api::{Sheet, SheetProperties};

    use super::*;

    fn sheet_titled(title: &str) -> Sheet {
        Sheet {
            properties: Some(SheetProperties {
                title: Some(title.to_string()),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn picks_first_worksheet_title() {
        let spreadsheet = Spreadsheet {
            sheets: Some(vec![sheet_titled("シート1"), sheet_titled("Archive")]),
            ..Default::default()
        };

        assert_eq!(
            first_worksheet_title(&spreadsheet),
            Some("シート1".to_string())
        );
    }

    #[test]
    fn no_title_without_worksheets() {
        assert_eq!(first_worksheet_title(&Spreadsheet::default()), None);

        let empty = Spreadsheet {
            sheets: Some(Vec::new()),
            ..Default::default()
        };
        assert_eq!(first_worksheet_title(&empty), None);
    }

    #[test]
    fn quotes_range_title() {
        assert_eq!(append_range("Sheet1"), "'Sheet1'!A1");
        assert_eq!(append_range("Bob's reports"), "'Bob''s reports'!A1");
    }

    /// Tests building the HTTPS client never panics on a host without a CA store.
    ///
    /// Expected: Ok, or Err(TlsRoots) when no native roots are installed
    #[test]
    fn http_client_returns_error_instead_of_panicking() {
        match http_client() {
            Ok(_) => {}
            Err(SheetError::TlsRoots(_)) => {}
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    /// Tests a missing root store aborts startup through the normal error path.
    ///
    /// Expected: AppError::SheetErr whose message names the TLS roots
    #[test]
    fn missing_tls_roots_is_a_startup_error() {
        let source =
            std::io::Error::new(std::io::ErrorKind::NotFound, "no CA certificates found");
        let err: crate::server::error::AppError = SheetError::TlsRoots(source).into();

        assert!(matches!(
            err,
            crate::server::error::AppError::SheetErr(SheetError::TlsRoots(_))
        ));
        assert_eq!(
            err.to_string(),
            "Failed to load native TLS root certificates: no CA certificates found"
        );
    }
}
