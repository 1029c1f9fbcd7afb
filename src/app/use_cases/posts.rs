use crate::app::dto::{
    GetPostRequest, GetPostsByCategoryRequest, GetPostsByTagRequest, GetPostsRequest,
    IncrementViewRequest, IncrementViewResponse, SearchPostsRequest,
};
use crate::domain::model::{ApiResponse, Post, PostListItem};
use crate::domain::ports::{GetPostsParams, PageParams, PostRepository, SearchPostsParams};
use crate::utils::error::Result;
use crate::utils::validation::{require_non_blank, require_present};
use std::sync::Arc;

pub const SLUG_REQUIRED: &str = "Slug is required";
pub const SEARCH_QUERY_REQUIRED: &str = "Search query is required";
pub const CATEGORY_SLUG_REQUIRED: &str = "Category slug is required";
pub const TAG_SLUG_REQUIRED: &str = "Tag slug is required";

pub struct GetPostsUseCase {
    repository: Arc<dyn PostRepository>,
}

impl GetPostsUseCase {
    pub fn new(repository: Arc<dyn PostRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, request: GetPostsRequest) -> Result<ApiResponse<Vec<PostListItem>>> {
        let pagination = request.pagination.normalize();
        let params = GetPostsParams {
            page: Some(pagination.page),
            per_page: Some(pagination.per_page),
            category_id: request.category_id,
            tag_id: request.tag_id,
        };

        Ok(self.repository.get_posts(params).await?)
    }
}

pub struct GetPostUseCase {
    repository: Arc<dyn PostRepository>,
}

impl GetPostUseCase {
    pub fn new(repository: Arc<dyn PostRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, request: GetPostRequest) -> Result<ApiResponse<Post>> {
        require_present(&request.slug, SLUG_REQUIRED)?;

        Ok(self.repository.get_post(&request.slug).await?)
    }
}

pub struct SearchPostsUseCase {
    repository: Arc<dyn PostRepository>,
}

impl SearchPostsUseCase {
    pub fn new(repository: Arc<dyn PostRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(
        &self,
        request: SearchPostsRequest,
    ) -> Result<ApiResponse<Vec<PostListItem>>> {
        let query = require_non_blank(&request.query, SEARCH_QUERY_REQUIRED)?;
        let pagination = request.pagination.normalize();

        tracing::debug!("searching posts for {:?} (page {})", query, pagination.page);

        let params = SearchPostsParams {
            query: query.to_string(),
            page: Some(pagination.page),
            per_page: Some(pagination.per_page),
        };

        Ok(self.repository.search_posts(params).await?)
    }
}

/// Bumps the remote view counter. Not idempotent: every call counts.
pub struct IncrementViewUseCase {
    repository: Arc<dyn PostRepository>,
}

impl IncrementViewUseCase {
    pub fn new(repository: Arc<dyn PostRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, request: IncrementViewRequest) -> Result<IncrementViewResponse> {
        require_present(&request.slug, SLUG_REQUIRED)?;

        let result = self.repository.increment_view(&request.slug).await?;

        Ok(IncrementViewResponse {
            view_count: result.view_count,
        })
    }
}

pub struct GetPostsByCategoryUseCase {
    repository: Arc<dyn PostRepository>,
}

impl GetPostsByCategoryUseCase {
    pub fn new(repository: Arc<dyn PostRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(
        &self,
        request: GetPostsByCategoryRequest,
    ) -> Result<ApiResponse<Vec<PostListItem>>> {
        require_present(&request.category_slug, CATEGORY_SLUG_REQUIRED)?;
        let pagination = request.pagination.normalize();

        let params = PageParams {
            page: Some(pagination.page),
            per_page: Some(pagination.per_page),
        };

        Ok(self
            .repository
            .get_posts_by_category(&request.category_slug, params)
            .await?)
    }
}

pub struct GetPostsByTagUseCase {
    repository: Arc<dyn PostRepository>,
}

impl GetPostsByTagUseCase {
    pub fn new(repository: Arc<dyn PostRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(
        &self,
        request: GetPostsByTagRequest,
    ) -> Result<ApiResponse<Vec<PostListItem>>> {
        require_present(&request.tag_slug, TAG_SLUG_REQUIRED)?;
        let pagination = request.pagination.normalize();

        let params = PageParams {
            page: Some(pagination.page),
            per_page: Some(pagination.per_page),
        };

        Ok(self
            .repository
            .get_posts_by_tag(&request.tag_slug, params)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::dto::PaginationRequest;
    use crate::test_support::{sample_post, MockPostRepository, PostCall};
    use crate::utils::error::{ApiError, BlogError};

    fn repository() -> Arc<MockPostRepository> {
        Arc::new(MockPostRepository::new())
    }

    #[tokio::test]
    async fn test_get_posts_defaults() {
        let repo = repository();
        let use_case = GetPostsUseCase::new(repo.clone());

        let result = use_case.execute(GetPostsRequest::default()).await.unwrap();

        assert_eq!(result, MockPostRepository::list_response());
        assert_eq!(
            repo.calls(),
            vec![PostCall::GetPosts(GetPostsParams {
                page: Some(1),
                per_page: Some(10),
                category_id: None,
                tag_id: None,
            })]
        );
    }

    #[tokio::test]
    async fn test_get_posts_normalizes_and_passes_filters() {
        let repo = repository();
        let use_case = GetPostsUseCase::new(repo.clone());

        use_case
            .execute(GetPostsRequest {
                pagination: PaginationRequest::new(Some(-1), Some(1000)),
                category_id: Some(3),
                tag_id: Some(7),
            })
            .await
            .unwrap();

        assert_eq!(
            repo.calls(),
            vec![PostCall::GetPosts(GetPostsParams {
                page: Some(1),
                per_page: Some(100),
                category_id: Some(3),
                tag_id: Some(7),
            })]
        );
    }

    #[tokio::test]
    async fn test_get_post_requires_slug() {
        let repo = repository();
        let use_case = GetPostUseCase::new(repo.clone());

        let err = use_case.execute(GetPostRequest::default()).await.unwrap_err();

        assert!(matches!(err, BlogError::ValidationError { .. }));
        assert_eq!(err.to_string(), SLUG_REQUIRED);
        assert!(repo.calls().is_empty());
    }

    #[tokio::test]
    async fn test_get_post_returns_repository_result() {
        let repo = repository();
        let use_case = GetPostUseCase::new(repo.clone());

        let result = use_case
            .execute(GetPostRequest { slug: "test-post".to_string() })
            .await
            .unwrap();

        assert_eq!(result.data, sample_post());
        assert_eq!(repo.calls(), vec![PostCall::GetPost("test-post".to_string())]);
    }

    #[tokio::test]
    async fn test_get_post_propagates_api_error() {
        let repo = Arc::new(MockPostRepository::failing(ApiError::new("Not found", 404)));
        let use_case = GetPostUseCase::new(repo);

        let err = use_case
            .execute(GetPostRequest { slug: "missing".to_string() })
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Not found");
    }

    #[tokio::test]
    async fn test_search_trims_query() {
        let repo = repository();
        let use_case = SearchPostsUseCase::new(repo.clone());

        use_case
            .execute(SearchPostsRequest::new("  typescript  "))
            .await
            .unwrap();

        assert_eq!(
            repo.calls(),
            vec![PostCall::SearchPosts(SearchPostsParams {
                query: "typescript".to_string(),
                page: Some(1),
                per_page: Some(10),
            })]
        );
    }

    #[tokio::test]
    async fn test_search_rejects_blank_query() {
        let repo = repository();
        let use_case = SearchPostsUseCase::new(repo.clone());

        for query in ["", "   ", "\t\n"] {
            let err = use_case
                .execute(SearchPostsRequest::new(query))
                .await
                .unwrap_err();
            assert_eq!(err.to_string(), SEARCH_QUERY_REQUIRED);
        }
        assert!(repo.calls().is_empty());
    }

    #[tokio::test]
    async fn test_search_normalizes_pagination() {
        let repo = repository();
        let use_case = SearchPostsUseCase::new(repo.clone());

        use_case
            .execute(SearchPostsRequest {
                query: "rust".to_string(),
                pagination: PaginationRequest::new(Some(0), Some(0)),
            })
            .await
            .unwrap();

        assert!(matches!(
            &repo.calls()[0],
            PostCall::SearchPosts(p) if p.page == Some(1) && p.per_page == Some(1)
        ));
    }

    #[tokio::test]
    async fn test_increment_view_reshapes_response() {
        let repo = repository();
        let use_case = IncrementViewUseCase::new(repo.clone());

        let result = use_case
            .execute(IncrementViewRequest { slug: "test-post".to_string() })
            .await
            .unwrap();

        assert_eq!(result, IncrementViewResponse { view_count: 101 });
        assert_eq!(repo.calls(), vec![PostCall::IncrementView("test-post".to_string())]);
    }

    #[tokio::test]
    async fn test_increment_view_requires_slug() {
        let repo = repository();
        let use_case = IncrementViewUseCase::new(repo.clone());

        let err = use_case
            .execute(IncrementViewRequest::default())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), SLUG_REQUIRED);
        assert!(repo.calls().is_empty());
    }

    #[tokio::test]
    async fn test_posts_by_category() {
        let repo = repository();
        let use_case = GetPostsByCategoryUseCase::new(repo.clone());

        use_case
            .execute(GetPostsByCategoryRequest {
                category_slug: "development".to_string(),
                pagination: PaginationRequest::new(Some(2), None),
            })
            .await
            .unwrap();

        assert_eq!(
            repo.calls(),
            vec![PostCall::GetPostsByCategory(
                "development".to_string(),
                PageParams { page: Some(2), per_page: Some(10) }
            )]
        );

        let err = use_case
            .execute(GetPostsByCategoryRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), CATEGORY_SLUG_REQUIRED);
        assert_eq!(repo.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_posts_by_tag() {
        let repo = repository();
        let use_case = GetPostsByTagUseCase::new(repo.clone());

        use_case
            .execute(GetPostsByTagRequest {
                tag_slug: "rust".to_string(),
                pagination: PaginationRequest::new(None, Some(250)),
            })
            .await
            .unwrap();

        assert_eq!(
            repo.calls(),
            vec![PostCall::GetPostsByTag(
                "rust".to_string(),
                PageParams { page: Some(1), per_page: Some(100) }
            )]
        );

        let err = use_case
            .execute(GetPostsByTagRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), TAG_SLUG_REQUIRED);
        assert_eq!(repo.calls().len(), 1);
    }
}
