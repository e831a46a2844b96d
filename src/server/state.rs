//! Application context shared with the bot event handler.
//!
//! Replaces process-wide globals: the spreadsheet handle is built once during
//! startup, wrapped here, and moved into the Serenity handler. Every interaction
//! reads it through a shared reference; nothing in the state is mutated after
//! construction.

use std::sync::Arc;

use crate::server::data::ReportSheet;

/// Application state containing shared resources.
///
/// Cloning is cheap: the sheet handle sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Destination for submitted reports.
    ///
    /// The concrete `Worksheet` in production; a stub in tests.
    pub sheet: Arc<dyn ReportSheet>,
}

impl AppState {
    /// Creates the application state around a sheet handle.
    ///
    /// # Arguments
    /// - `sheet` - Opened worksheet (or any other `ReportSheet`)
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(sheet: impl ReportSheet + 'static) -> Self {
        Self {
            sheet: Arc::new(sheet),
        }
    }
}
