use serde::Deserialize;

const FILES_URL: &str = "https://www.googleapis.com/drive/v3/files";
const SPREADSHEET_MIME_TYPE: &str = "application/vnd.google-apps.spreadsheet";

/// A file entry returned by Drive `files.list`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DriveFile {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct FileList {
    #[serde(default)]
    files: Vec<DriveFile>,
}

/// Minimal Drive v3 client used to resolve a spreadsheet name to its ID.
///
/// The Sheets API only addresses spreadsheets by ID, so the configured name has
/// to be looked up through Drive first. Requires an access token carrying the
/// drive scope.
pub struct DriveClient<'a> {
    http: reqwest::Client,
    access_token: &'a str,
}

impl<'a> DriveClient<'a> {
    pub fn new(http: reqwest::Client, access_token: &'a str) -> Self {
        Self { http, access_token }
    }

    /// Finds a spreadsheet the service account can see by its exact name.
    ///
    /// Trashed files are excluded and shared drives are searched as well. When
    /// several spreadsheets share the name, the first one Drive returns is used.
    ///
    /// # Arguments
    /// - `name` - Exact spreadsheet title
    ///
    /// # Returns
    /// - `Ok(Some(DriveFile))` - Spreadsheet found
    /// - `Ok(None)` - No spreadsheet with that name is shared with the account
    /// - `Err(reqwest::Error)` - Request failed or Drive returned an error status
    pub async fn find_spreadsheet(&self, name: &str) -> Result<Option<DriveFile>, reqwest::Error> {
        let query = spreadsheet_query(name);

        let list: FileList = self
            .http
            .get(FILES_URL)
            .bearer_auth(self.access_token)
            .query(&[
                ("q", query.as_str()),
                ("fields", "files(id,name)"),
                ("supportsAllDrives", "true"),
                ("includeItemsFromAllDrives", "true"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(list.files.into_iter().next())
    }
}

/// Builds the Drive search query matching a spreadsheet by exact name.
pub fn spreadsheet_query(name: &str) -> String {
    format!(
        "mimeType='{}' and name='{}' and trashed=false",
        SPREADSHEET_MIME_TYPE,
        escape_query_value(name)
    )
}

// Drive query strings are single-quoted; backslash and quote need escaping
fn escape_query_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_query_for_plain_name() {
        assert_eq!(
            spreadsheet_query("Reports"),
            "mimeType='application/vnd.google-apps.spreadsheet' and name='Reports' and trashed=false"
        );
    }

    #[test]
    fn escapes_quotes_and_backslashes() {
        assert_eq!(escape_query_value(r"Bob's \ sheet"), r"Bob\'s \\ sheet");
    }

    #[test]
    fn parses_file_list() {
        let list: FileList = serde_json::from_str(
            r#"{"files": [{"id": "abc123", "name": "Reports"}, {"id": "def456", "name": "Reports"}]}"#,
        )
        .unwrap();

        assert_eq!(list.files.len(), 2);
        assert_eq!(list.files[0].id, "abc123");
    }

    #[test]
    fn parses_empty_file_list() {
        let list: FileList = serde_json::from_str("{}").unwrap();

        assert!(list.files.is_empty());
    }
}
