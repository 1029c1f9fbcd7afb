mod category;
mod common;
mod post;
mod project;
mod tag;

pub use category::{is_valid_category, Category};
pub use common::{
    parse_timestamp, ApiErrorBody, ApiErrorCode, ApiErrorDetail, ApiResponse, PaginationMeta,
    ViewCountResponse,
};
pub use post::{is_valid_post, is_valid_post_list_item, Post, PostListItem, PostNavItem, PostStatus, TagBrief};
pub use project::{is_valid_project, is_valid_project_list_item, Project, ProjectListItem};
pub use tag::{is_valid_tag, Tag};
