/// One submitted report, persisted as a single worksheet row.
///
/// Column order is fixed: submitter display name, then report text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub display_name: String,
    pub content: String,
}

impl ReportRow {
    pub fn new(display_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            content: content.into(),
        }
    }

    /// Cell values in column order.
    pub fn into_values(self) -> [String; 2] {
        [self.display_name, self.content]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_follow_column_order() {
        let row = ReportRow::new("Alice", "Server down");

        assert_eq!(
            row.into_values(),
            ["Alice".to_string(), "Server down".to_string()]
        );
    }
}
