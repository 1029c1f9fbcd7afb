use super::common::{has_number, has_string};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub post_count: u64,
    pub created_at: Option<String>,
}

pub fn is_valid_tag(value: &serde_json::Value) -> bool {
    let Some(obj) = value.as_object() else {
        return false;
    };

    has_number(obj, "id")
        && has_string(obj, "name")
        && has_string(obj, "slug")
        && has_number(obj, "post_count")
}
