use std::sync::Mutex;

use serenity::async_trait;

use super::ReportSheet;
use crate::server::error::sheet::SheetError;

/// In-memory sheet recording every appended row.
///
/// When built with `failing`, every append returns the produced error and
/// nothing is recorded.
#[derive(Default)]
pub struct StubSheet {
    rows: Mutex<Vec<[String; 2]>>,
    fail_with: Option<fn() -> SheetError>,
}

impl StubSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(fail_with: fn() -> SheetError) -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            fail_with: Some(fail_with),
        }
    }

    pub fn rows(&self) -> Vec<[String; 2]> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReportSheet for StubSheet {
    async fn append_row(&self, values: [String; 2]) -> Result<(), SheetError> {
        if let Some(fail_with) = self.fail_with {
            return Err(fail_with());
        }
        self.rows.lock().unwrap().push(values);
        Ok(())
    }
}
