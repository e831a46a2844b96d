//! Google API access layer.
//!
//! This module contains the spreadsheet handle used to persist reports and the
//! Drive lookup used to resolve a spreadsheet by its name. Callers depend on the
//! `ReportSheet` trait rather than the concrete `Worksheet` so the append path
//! can be exercised without network access.

pub mod drive;
pub mod sheet;
pub mod value_range;

#[cfg(test)]
pub mod stub;

pub use sheet::Worksheet;

use serenity::async_trait;

use crate::server::error::sheet::SheetError;

/// Destination for report rows.
#[async_trait]
pub trait ReportSheet: Send + Sync {
    /// Appends one row after the last non-empty row of the sheet.
    async fn append_row(&self, values: [String; 2]) -> Result<(), SheetError>;
}
