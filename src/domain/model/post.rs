use super::common::{has_number, has_string, parse_timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Published,
    Draft,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagBrief {
    pub id: u64,
    pub name: String,
    pub slug: String,
}

/// Previous/next navigation stub on a post detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostNavItem {
    pub slug: String,
    pub title: String,
}

/// Post as it appears in list endpoints (no content).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostListItem {
    pub id: u64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub category_id: Option<u64>,
    #[serde(default)]
    pub category_name: String,
    #[serde(default)]
    pub category_slug: String,
    pub status: PostStatus,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub reading_time: u32,
    pub thumbnail: Option<String>,
    pub thumbnail_sm: Option<String>,
    pub thumbnail_md: Option<String>,
    #[serde(default)]
    pub tags: Vec<TagBrief>,
    pub created_at: Option<String>,
    pub published_at: Option<String>,
}

impl PostListItem {
    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published
    }

    /// Publication date, falling back to the creation date for drafts.
    pub fn display_date(&self) -> Option<NaiveDate> {
        self.published_at
            .as_deref()
            .or(self.created_at.as_deref())
            .and_then(parse_timestamp)
            .map(|dt| dt.date_naive())
    }
}

/// Full post detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(flatten)]
    pub listing: PostListItem,
    pub content: String,
    pub prev_post: Option<PostNavItem>,
    pub next_post: Option<PostNavItem>,
    pub updated_at: Option<String>,
}

impl Post {
    pub fn into_list_item(self) -> PostListItem {
        self.listing
    }
}

impl std::ops::Deref for Post {
    type Target = PostListItem;

    fn deref(&self) -> &PostListItem {
        &self.listing
    }
}

fn has_status(obj: &serde_json::Map<String, serde_json::Value>) -> bool {
    matches!(
        obj.get("status").and_then(|s| s.as_str()),
        Some("published") | Some("draft")
    )
}

pub fn is_valid_post_list_item(value: &serde_json::Value) -> bool {
    let Some(obj) = value.as_object() else {
        return false;
    };

    has_number(obj, "id")
        && has_string(obj, "title")
        && has_string(obj, "slug")
        && has_string(obj, "excerpt")
        && has_status(obj)
}

pub fn is_valid_post(value: &serde_json::Value) -> bool {
    is_valid_post_list_item(value)
        && value
            .as_object()
            .is_some_and(|obj| has_string(obj, "content"))
}
