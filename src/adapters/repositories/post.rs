use super::{page_query, push_positive};
use crate::domain::model::{ApiResponse, Post, PostListItem, ViewCountResponse};
use crate::domain::ports::{
    ApiClient, GetPostsParams, PageParams, PostRepository, SearchPostsParams,
};
use crate::utils::error::ApiResult;
use async_trait::async_trait;
use std::sync::Arc;

pub struct PostApiRepository<C: ApiClient> {
    client: Arc<C>,
}

impl<C: ApiClient> PostApiRepository<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<C: ApiClient> PostRepository for PostApiRepository<C> {
    async fn get_posts(&self, params: GetPostsParams) -> ApiResult<ApiResponse<Vec<PostListItem>>> {
        let config = page_query(params.page, params.per_page);
        let config = push_positive(config, "category_id", params.category_id);
        let config = push_positive(config, "tag_id", params.tag_id);

        self.client.get("/posts", Some(config)).await
    }

    async fn get_post(&self, slug: &str) -> ApiResult<ApiResponse<Post>> {
        self.client.get(&format!("/posts/{}", slug), None).await
    }

    async fn search_posts(
        &self,
        params: SearchPostsParams,
    ) -> ApiResult<ApiResponse<Vec<PostListItem>>> {
        // q goes out even when empty; rejecting blank queries is the caller's job
        let config = page_query(params.page, params.per_page).param("q", params.query);

        self.client.get("/posts/search", Some(config)).await
    }

    async fn increment_view(&self, slug: &str) -> ApiResult<ViewCountResponse> {
        self.client
            .post(&format!("/posts/{}/view", slug), None, None)
            .await
    }

    async fn get_posts_by_category(
        &self,
        category_slug: &str,
        params: PageParams,
    ) -> ApiResult<ApiResponse<Vec<PostListItem>>> {
        let config = page_query(params.page, params.per_page);
        self.client
            .get(&format!("/categories/{}/posts", category_slug), Some(config))
            .await
    }

    async fn get_posts_by_tag(
        &self,
        tag_slug: &str,
        params: PageParams,
    ) -> ApiResult<ApiResponse<Vec<PostListItem>>> {
        let config = page_query(params.page, params.per_page);
        self.client
            .get(&format!("/tags/{}/posts", tag_slug), Some(config))
            .await
    }
}
