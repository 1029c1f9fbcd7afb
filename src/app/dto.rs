use crate::domain::model::ApiResponse;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PER_PAGE: i64 = 10;
pub const MAX_PER_PAGE: i64 = 100;

/// Raw, caller-supplied paging input. Anything goes until it is normalised.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationRequest {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl PaginationRequest {
    pub fn new(page: Option<i64>, per_page: Option<i64>) -> Self {
        Self { page, per_page }
    }

    pub fn normalize(&self) -> Pagination {
        normalize_pagination(self)
    }
}

/// Paging values that are always inside the accepted bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
}

/// `page >= 1`, `1 <= per_page <= 100`; unset values take the defaults.
pub fn normalize_pagination(request: &PaginationRequest) -> Pagination {
    let page = request.page.unwrap_or(DEFAULT_PAGE).max(1);
    let per_page = request
        .per_page
        .unwrap_or(DEFAULT_PER_PAGE)
        .clamp(1, MAX_PER_PAGE);

    Pagination {
        page: u32::try_from(page).unwrap_or(u32::MAX),
        per_page: u32::try_from(per_page).unwrap_or(u32::MAX),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetPostsRequest {
    pub pagination: PaginationRequest,
    pub category_id: Option<u64>,
    pub tag_id: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPostsRequest {
    pub query: String,
    pub pagination: PaginationRequest,
}

impl SearchPostsRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            pagination: PaginationRequest::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetPostsByCategoryRequest {
    pub category_slug: String,
    pub pagination: PaginationRequest,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetPostsByTagRequest {
    pub tag_slug: String,
    pub pagination: PaginationRequest,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetPostRequest {
    pub slug: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncrementViewRequest {
    pub slug: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncrementViewResponse {
    pub view_count: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetProjectsRequest {
    pub featured: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetProjectRequest {
    pub slug: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationResponse {
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub total_pages: u64,
}

/// List payload with camelCase paging info for display layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedList<T> {
    pub data: Vec<T>,
    pub pagination: PaginationResponse,
}

impl<T> PaginatedList<T> {
    /// Uses the envelope's meta when present. Without it the requested page is
    /// reported and the returned items are taken as the whole result set.
    pub fn from_response(response: ApiResponse<Vec<T>>, requested: Pagination) -> Self {
        let pagination = match response.meta {
            Some(meta) => PaginationResponse {
                page: meta.page,
                per_page: meta.per_page,
                total: meta.total,
                total_pages: meta.total_pages,
            },
            None => {
                let total = response.data.len() as u64;
                PaginationResponse {
                    page: u64::from(requested.page),
                    per_page: u64::from(requested.per_page),
                    total,
                    total_pages: total.div_ceil(u64::from(requested.per_page)).max(1),
                }
            }
        };

        Self {
            data: response.data,
            pagination,
        }
    }

    pub fn has_next_page(&self) -> bool {
        self.pagination.page < self.pagination.total_pages
    }
}
