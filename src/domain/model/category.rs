use super::common::{has_number, has_string};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    #[serde(default)]
    pub sort_order: i64,
    #[serde(default)]
    pub post_count: u64,
    pub created_at: Option<String>,
}

pub fn is_valid_category(value: &serde_json::Value) -> bool {
    let Some(obj) = value.as_object() else {
        return false;
    };

    has_number(obj, "id")
        && has_string(obj, "name")
        && has_string(obj, "slug")
        && has_number(obj, "sort_order")
        && has_number(obj, "post_count")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_with_null_description() {
        let raw = json!({
            "id": 1,
            "name": "Development",
            "slug": "development",
            "description": null,
            "sort_order": 1,
            "post_count": 10,
            "created_at": "2024-01-01T00:00:00Z"
        });
        let category: Category = serde_json::from_value(raw.clone()).unwrap();
        assert!(category.description.is_none());
        assert_eq!(serde_json::to_value(&category).unwrap(), raw);
        assert!(is_valid_category(&raw));
    }

    #[test]
    fn test_is_valid_category_rejects_malformed() {
        assert!(!is_valid_category(&json!(null)));
        assert!(!is_valid_category(&json!({"id": 1, "name": "Dev", "slug": "dev"})));
        assert!(!is_valid_category(&json!({
            "id": 1, "name": "Dev", "slug": "dev", "sort_order": "1", "post_count": 0
        })));
    }
}
