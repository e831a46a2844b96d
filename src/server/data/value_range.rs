use google_sheets4::api::ValueRange;
use serde_json::Value;

pub trait ValueRangeFactory {
    fn from_row<T: AsRef<str>>(row: &[T]) -> Self;
}

fn wrap_value<T: AsRef<str>>(value: T) -> Value {
    Value::String(value.as_ref().to_owned())
}

impl ValueRangeFactory for ValueRange {
    fn from_row<T: AsRef<str>>(row: &[T]) -> Self {
        Self {
            major_dimension: Some("ROWS".to_string()),
            range: None,
            values: Some(vec![row.iter().map(wrap_value).collect()]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_value() {
        let value = wrap_value("1");
        assert_eq!(value, Value::String("1".to_string()));
    }

    #[test]
    fn test_from_row() {
        let value_range = ValueRange::from_row(&["Alice", "Server down"]);
        assert_eq!(value_range.major_dimension, Some("ROWS".to_string()));
        assert_eq!(value_range.range, None);
        assert_eq!(
            value_range.values,
            Some(vec![vec![
                Value::String("Alice".to_string()),
                Value::String("Server down".to_string()),
            ]])
        );
    }
}
