use crate::server::{data::ReportSheet, error::sheet::SheetError, model::report::ReportRow};

pub struct ReportService<'a> {
    sheet: &'a dyn ReportSheet,
}

impl<'a> ReportService<'a> {
    pub fn new(sheet: &'a dyn ReportSheet) -> Self {
        Self { sheet }
    }

    /// Persists a report as one new row at the end of the sheet.
    ///
    /// Failures are returned as-is; nothing is retried or queued, and repeated
    /// submissions of the same report each produce their own row.
    pub async fn record(&self, row: ReportRow) -> Result<(), SheetError> {
        tracing::debug!("Recording report from {}", row.display_name);

        self.sheet.append_row(row.into_values()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::data::stub::StubSheet;

    /// Tests recording a report appends exactly one row in column order.
    ///
    /// Expected: Ok with row ["Alice", "Server down"] stored
    #[tokio::test]
    async fn appends_single_row() {
        let sheet = StubSheet::new();
        let service = ReportService::new(&sheet);

        let result = service
            .record(ReportRow::new("Alice", "Server down"))
            .await;

        assert!(result.is_ok());
        assert_eq!(
            sheet.rows(),
            vec![["Alice".to_string(), "Server down".to_string()]]
        );
    }

    /// Tests that a failing sheet surfaces its error and stores nothing.
    ///
    /// Expected: Err(SheetError::MissingAccessToken) with no rows stored
    #[tokio::test]
    async fn propagates_append_failure() {
        let sheet = StubSheet::failing(|| SheetError::MissingAccessToken);
        let service = ReportService::new(&sheet);

        let result = service.record(ReportRow::new("Alice", "Server down")).await;

        assert!(matches!(result, Err(SheetError::MissingAccessToken)));
        assert!(sheet.rows().is_empty());
    }

    /// Tests that double submissions are not deduplicated.
    ///
    /// Expected: Ok twice with two identical rows stored
    #[tokio::test]
    async fn keeps_duplicate_submissions() {
        let sheet = StubSheet::new();
        let service = ReportService::new(&sheet);

        service.record(ReportRow::new("Bob", "Same")).await.unwrap();
        service.record(ReportRow::new("Bob", "Same")).await.unwrap();

        assert_eq!(sheet.rows().len(), 2);
        assert_eq!(sheet.rows()[0], sheet.rows()[1]);
    }
}
