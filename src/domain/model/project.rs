use super::common::{has_array, has_bool, has_number, has_string};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectListItem {
    pub id: u64,
    pub title: String,
    pub slug: String,
    pub description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    pub thumbnail: Option<String>,
    pub thumbnail_sm: Option<String>,
    pub thumbnail_md: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub sort_order: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(flatten)]
    pub listing: ProjectListItem,
    pub content: String,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl std::ops::Deref for Project {
    type Target = ProjectListItem;

    fn deref(&self) -> &ProjectListItem {
        &self.listing
    }
}

pub fn is_valid_project_list_item(value: &serde_json::Value) -> bool {
    let Some(obj) = value.as_object() else {
        return false;
    };

    has_number(obj, "id")
        && has_string(obj, "title")
        && has_string(obj, "slug")
        && has_string(obj, "description")
        && has_array(obj, "tech_stack")
        && has_bool(obj, "is_featured")
}

pub fn is_valid_project(value: &serde_json::Value) -> bool {
    is_valid_project_list_item(value)
        && value
            .as_object()
            .is_some_and(|obj| has_string(obj, "content") && has_array(obj, "images"))
}
