//! Server-side domain models.
//!
//! A report is the only entity this application produces. It exists in memory
//! for the duration of one modal submission and is persisted by appending it to
//! the worksheet.

pub mod report;
