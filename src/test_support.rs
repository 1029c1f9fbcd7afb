//! Fixtures and recording doubles shared by the unit tests.

use crate::domain::model::{
    ApiResponse, Category, PaginationMeta, Post, PostListItem, PostStatus, Project, ProjectListItem,
    Tag, TagBrief, ViewCountResponse,
};
use crate::domain::ports::{
    ApiClient, CategoryRepository, GetPostsParams, GetProjectsParams, PageParams, PostRepository,
    ProjectRepository, RequestConfig, SearchPostsParams, TagRepository,
};
use crate::utils::error::{ApiError, ApiResult};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::sync::Mutex;

pub fn sample_post_list_item() -> PostListItem {
    PostListItem {
        id: 1,
        title: "Test Post".to_string(),
        slug: "test-post".to_string(),
        excerpt: "Test excerpt".to_string(),
        category_id: Some(1),
        category_name: "Development".to_string(),
        category_slug: "development".to_string(),
        status: PostStatus::Published,
        view_count: 100,
        reading_time: 5,
        thumbnail: None,
        thumbnail_sm: None,
        thumbnail_md: None,
        tags: vec![TagBrief {
            id: 1,
            name: "Rust".to_string(),
            slug: "rust".to_string(),
        }],
        created_at: Some("2024-01-15T00:00:00Z".to_string()),
        published_at: Some("2024-01-15T00:00:00Z".to_string()),
    }
}

pub fn sample_post() -> Post {
    Post {
        listing: sample_post_list_item(),
        content: "<p>Test content</p>".to_string(),
        prev_post: None,
        next_post: None,
        updated_at: None,
    }
}

pub fn sample_project_list_item() -> ProjectListItem {
    ProjectListItem {
        id: 1,
        title: "Test Project".to_string(),
        slug: "test-project".to_string(),
        description: "A project".to_string(),
        tech_stack: vec!["Rust".to_string(), "PostgreSQL".to_string()],
        thumbnail: None,
        thumbnail_sm: None,
        thumbnail_md: None,
        is_featured: true,
        sort_order: 1,
    }
}

pub fn sample_project() -> Project {
    Project {
        listing: sample_project_list_item(),
        content: "## Overview".to_string(),
        demo_url: None,
        github_url: Some("https://github.com/example/test-project".to_string()),
        images: vec![],
        created_at: Some("2024-01-01T00:00:00Z".to_string()),
        updated_at: None,
    }
}

pub fn sample_category() -> Category {
    Category {
        id: 1,
        name: "Development".to_string(),
        slug: "development".to_string(),
        description: None,
        sort_order: 1,
        post_count: 10,
        created_at: Some("2024-01-01T00:00:00Z".to_string()),
    }
}

pub fn sample_tag() -> Tag {
    Tag {
        id: 1,
        name: "Rust".to_string(),
        slug: "rust".to_string(),
        post_count: 3,
        created_at: Some("2024-01-01T00:00:00Z".to_string()),
    }
}

pub fn sample_meta() -> PaginationMeta {
    PaginationMeta {
        page: 1,
        per_page: 10,
        total: 1,
        total_pages: 1,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub path: String,
    pub body: Option<serde_json::Value>,
    pub config: Option<RequestConfig>,
}

/// API client double that returns one canned JSON value and records every call.
pub struct RecordingApiClient {
    response: ApiResult<serde_json::Value>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl RecordingApiClient {
    pub fn returning(response: serde_json::Value) -> Self {
        Self {
            response: Ok(response),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: ApiError) -> Self {
        Self {
            response: Err(error),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn single_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests[0].clone()
    }

    fn respond<T: DeserializeOwned>(
        &self,
        method: &'static str,
        path: &str,
        body: Option<serde_json::Value>,
        config: Option<RequestConfig>,
    ) -> ApiResult<T> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            path: path.to_string(),
            body,
            config,
        });

        match &self.response {
            Ok(value) => serde_json::from_value(value.clone())
                .map_err(|e| ApiError::new(format!("fixture mismatch: {e}"), 0)),
            Err(error) => Err(error.clone()),
        }
    }
}

impl ApiClient for RecordingApiClient {
    async fn get<T: DeserializeOwned + Send>(
        &self,
        path: &str,
        config: Option<RequestConfig>,
    ) -> ApiResult<T> {
        self.respond("GET", path, None, config)
    }

    async fn post<T: DeserializeOwned + Send>(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
        config: Option<RequestConfig>,
    ) -> ApiResult<T> {
        self.respond("POST", path, body, config)
    }

    async fn put<T: DeserializeOwned + Send>(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
        config: Option<RequestConfig>,
    ) -> ApiResult<T> {
        self.respond("PUT", path, body, config)
    }

    async fn delete<T: DeserializeOwned + Send>(
        &self,
        path: &str,
        config: Option<RequestConfig>,
    ) -> ApiResult<T> {
        self.respond("DELETE", path, None, config)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PostCall {
    GetPosts(GetPostsParams),
    GetPost(String),
    SearchPosts(SearchPostsParams),
    IncrementView(String),
    GetPostsByCategory(String, PageParams),
    GetPostsByTag(String, PageParams),
}

/// Post repository double; fails every call when built with `failing`.
#[derive(Default)]
pub struct MockPostRepository {
    calls: Mutex<Vec<PostCall>>,
    failure: Option<ApiError>,
}

impl MockPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(error: ApiError) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failure: Some(error),
        }
    }

    pub fn calls(&self) -> Vec<PostCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record<T>(&self, call: PostCall, value: T) -> ApiResult<T> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(value),
        }
    }

    pub fn list_response() -> ApiResponse<Vec<PostListItem>> {
        ApiResponse::new(vec![sample_post_list_item()]).with_meta(sample_meta())
    }
}

#[async_trait]
impl PostRepository for MockPostRepository {
    async fn get_posts(&self, params: GetPostsParams) -> ApiResult<ApiResponse<Vec<PostListItem>>> {
        self.record(PostCall::GetPosts(params), Self::list_response())
    }

    async fn get_post(&self, slug: &str) -> ApiResult<ApiResponse<Post>> {
        self.record(PostCall::GetPost(slug.to_string()), ApiResponse::new(sample_post()))
    }

    async fn search_posts(
        &self,
        params: SearchPostsParams,
    ) -> ApiResult<ApiResponse<Vec<PostListItem>>> {
        self.record(PostCall::SearchPosts(params), Self::list_response())
    }

    async fn increment_view(&self, slug: &str) -> ApiResult<ViewCountResponse> {
        self.record(
            PostCall::IncrementView(slug.to_string()),
            ViewCountResponse { view_count: 101 },
        )
    }

    async fn get_posts_by_category(
        &self,
        category_slug: &str,
        params: PageParams,
    ) -> ApiResult<ApiResponse<Vec<PostListItem>>> {
        self.record(
            PostCall::GetPostsByCategory(category_slug.to_string(), params),
            Self::list_response(),
        )
    }

    async fn get_posts_by_tag(
        &self,
        tag_slug: &str,
        params: PageParams,
    ) -> ApiResult<ApiResponse<Vec<PostListItem>>> {
        self.record(
            PostCall::GetPostsByTag(tag_slug.to_string(), params),
            Self::list_response(),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProjectCall {
    GetProjects(GetProjectsParams),
    GetProject(String),
}

#[derive(Default)]
pub struct MockProjectRepository {
    calls: Mutex<Vec<ProjectCall>>,
    failure: Option<ApiError>,
}

impl MockProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(error: ApiError) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failure: Some(error),
        }
    }

    pub fn calls(&self) -> Vec<ProjectCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record<T>(&self, call: ProjectCall, value: T) -> ApiResult<T> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(value),
        }
    }
}

#[async_trait]
impl ProjectRepository for MockProjectRepository {
    async fn get_projects(
        &self,
        params: GetProjectsParams,
    ) -> ApiResult<ApiResponse<Vec<ProjectListItem>>> {
        self.record(
            ProjectCall::GetProjects(params),
            ApiResponse::new(vec![sample_project_list_item()]),
        )
    }

    async fn get_project(&self, slug: &str) -> ApiResult<ApiResponse<Project>> {
        self.record(
            ProjectCall::GetProject(slug.to_string()),
            ApiResponse::new(sample_project()),
        )
    }
}

/// Category and tag repositories take no input, so a call counter is enough.
#[derive(Default)]
pub struct MockTaxonomyRepository {
    calls: Mutex<usize>,
    failure: Option<ApiError>,
}

impl MockTaxonomyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(error: ApiError) -> Self {
        Self {
            calls: Mutex::new(0),
            failure: Some(error),
        }
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }

    fn record<T>(&self, value: T) -> ApiResult<T> {
        *self.calls.lock().unwrap() += 1;
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(value),
        }
    }
}

#[async_trait]
impl CategoryRepository for MockTaxonomyRepository {
    async fn get_categories(&self) -> ApiResult<ApiResponse<Vec<Category>>> {
        self.record(ApiResponse::new(vec![sample_category()]))
    }
}

#[async_trait]
impl TagRepository for MockTaxonomyRepository {
    async fn get_tags(&self) -> ApiResult<ApiResponse<Vec<Tag>>> {
        self.record(ApiResponse::new(vec![sample_tag()]))
    }
}
