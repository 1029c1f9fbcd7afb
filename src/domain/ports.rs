use crate::domain::model::{
    ApiResponse, Category, Post, PostListItem, Project, ProjectListItem, Tag, ViewCountResponse,
};
use crate::utils::error::ApiResult;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::time::Duration;

/// Per-request options layered on top of the client defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestConfig {
    pub params: BTreeMap<String, serde_json::Value>,
    pub headers: BTreeMap<String, String>,
}

impl RequestConfig {
    pub fn param(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    pub fn header(mut self, key: &str, value: &str) -> Self {
        self.headers.insert(key.to_string(), value.to_string());
        self
    }
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn timeout(&self) -> Duration;
}

/// Outbound HTTP seam. Every failure surfaces as a normalised `ApiError`.
pub trait ApiClient: Send + Sync {
    fn get<T: DeserializeOwned + Send>(
        &self,
        path: &str,
        config: Option<RequestConfig>,
    ) -> impl std::future::Future<Output = ApiResult<T>> + Send;

    fn post<T: DeserializeOwned + Send>(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
        config: Option<RequestConfig>,
    ) -> impl std::future::Future<Output = ApiResult<T>> + Send;

    fn put<T: DeserializeOwned + Send>(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
        config: Option<RequestConfig>,
    ) -> impl std::future::Future<Output = ApiResult<T>> + Send;

    fn delete<T: DeserializeOwned + Send>(
        &self,
        path: &str,
        config: Option<RequestConfig>,
    ) -> impl std::future::Future<Output = ApiResult<T>> + Send;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageParams {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetPostsParams {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub category_id: Option<u64>,
    pub tag_id: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPostsParams {
    pub query: String,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetProjectsParams {
    pub featured: Option<bool>,
}

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn get_posts(&self, params: GetPostsParams) -> ApiResult<ApiResponse<Vec<PostListItem>>>;
    async fn get_post(&self, slug: &str) -> ApiResult<ApiResponse<Post>>;
    async fn search_posts(
        &self,
        params: SearchPostsParams,
    ) -> ApiResult<ApiResponse<Vec<PostListItem>>>;
    async fn increment_view(&self, slug: &str) -> ApiResult<ViewCountResponse>;
    async fn get_posts_by_category(
        &self,
        category_slug: &str,
        params: PageParams,
    ) -> ApiResult<ApiResponse<Vec<PostListItem>>>;
    async fn get_posts_by_tag(
        &self,
        tag_slug: &str,
        params: PageParams,
    ) -> ApiResult<ApiResponse<Vec<PostListItem>>>;
}

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn get_projects(
        &self,
        params: GetProjectsParams,
    ) -> ApiResult<ApiResponse<Vec<ProjectListItem>>>;
    async fn get_project(&self, slug: &str) -> ApiResult<ApiResponse<Project>>;
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn get_categories(&self) -> ApiResult<ApiResponse<Vec<Category>>>;
}

#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn get_tags(&self) -> ApiResult<ApiResponse<Vec<Tag>>>;
}
