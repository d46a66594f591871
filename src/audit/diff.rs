//! One-line summaries of what an update changed

use serde_json::Value;

const MAX_TEXT: usize = 50;

/// List the top-level fields whose values differ, as `field: old -> new`
///
/// Returns `None` when nothing changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    let (Value::Object(old), Value::Object(new)) = (before, after) else {
        return (before != after).then(|| format!("{} -> {}", brief(before), brief(after)));
    };

    let changes: Vec<String> = old
        .iter()
        .filter_map(|(field, old_value)| {
            let new_value = new.get(field).unwrap_or(&Value::Null);
            (old_value != new_value)
                .then(|| format!("{}: {} -> {}", field, brief(old_value), brief(new_value)))
        })
        .collect();

    (!changes.is_empty()).then(|| changes.join(", "))
}

/// Short display form; long strings are cut at a char boundary
fn brief(value: &Value) -> String {
    match value {
        Value::String(text) if text.chars().count() > MAX_TEXT => {
            let head: String = text.chars().take(MAX_TEXT - 3).collect();
            format!("\"{}...\"", head)
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_changed_fields_only() {
        let before = json!({"name": "Coffee", "amount": 4.5, "category": "Food"});
        let after = json!({"name": "Coffee", "amount": 6.0, "category": "Drinks"});

        assert_eq!(
            generate_diff(&before, &after).as_deref(),
            Some("amount: 4.5 -> 6.0, category: \"Food\" -> \"Drinks\"")
        );
    }

    #[test]
    fn test_unchanged_is_none() {
        let value = json!({"category": "Food", "remaining": 0.0});
        assert_eq!(generate_diff(&value, &value), None);
    }

    #[test]
    fn test_scalar_values() {
        assert_eq!(generate_diff(&json!(1), &json!(2)).as_deref(), Some("1 -> 2"));
    }

    #[test]
    fn test_long_text_is_shortened() {
        let text = brief(&json!("é".repeat(80)));
        assert!(text.ends_with("...\""));
        assert_eq!(text.chars().count(), MAX_TEXT + 2);
    }
}
