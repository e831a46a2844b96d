//! Test factory for the components of a submitted modal.
//!
//! Discord returns modal submissions as action rows each holding one text input
//! with only its custom id and value set. These factories mirror that payload.

use serenity::all::ActionRow;

/// Creates a single action row holding one text input.
///
/// # Arguments
/// - `custom_id` - Custom id of the text input
/// - `value` - Submitted value, or `None` for an input without a value
///
/// # Returns
/// - `ActionRow` - A valid Serenity ActionRow struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into an ActionRow (indicates invalid test data)
pub fn create_test_text_input_row(custom_id: &str, value: Option<&str>) -> ActionRow {
    serde_json::from_value(serde_json::json!({
        "type": 1,
        "components": [{
            "type": 4,
            "custom_id": custom_id,
            "style": 2,
            "label": "Test Input",
            "required": true,
            "value": value,
            "placeholder": "",
        }],
    }))
    .expect("Failed to create test action row - invalid JSON structure")
}

/// Creates the component list of a modal with a single text input.
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::modal::create_test_modal_rows;
///
/// let rows = create_test_modal_rows("content", Some("Server down"));
/// assert_eq!(rows.len(), 1);
/// ```
pub fn create_test_modal_rows(custom_id: &str, value: Option<&str>) -> Vec<ActionRow> {
    vec![create_test_text_input_row(custom_id, value)]
}
