use crate::adapters::http::{shared_client, ReqwestApiClient};
use crate::adapters::repositories::{
    CategoryApiRepository, PostApiRepository, ProjectApiRepository, TagApiRepository,
};
use crate::app::use_cases::{
    GetCategoriesUseCase, GetPostUseCase, GetPostsByCategoryUseCase, GetPostsByTagUseCase,
    GetPostsUseCase, GetProjectUseCase, GetProjectsUseCase, GetTagsUseCase, IncrementViewUseCase,
    SearchPostsUseCase,
};
use crate::domain::ports::{
    ApiClient, CategoryRepository, ConfigProvider, PostRepository, ProjectRepository,
    TagRepository,
};
use crate::utils::error::Result;
use std::sync::Arc;

/// Every use case, wired to one set of REST repositories over one API client.
pub struct BlogServices {
    pub get_posts: GetPostsUseCase,
    pub get_post: GetPostUseCase,
    pub search_posts: SearchPostsUseCase,
    pub increment_view: IncrementViewUseCase,
    pub get_posts_by_category: GetPostsByCategoryUseCase,
    pub get_posts_by_tag: GetPostsByTagUseCase,
    pub get_projects: GetProjectsUseCase,
    pub get_project: GetProjectUseCase,
    pub get_categories: GetCategoriesUseCase,
    pub get_tags: GetTagsUseCase,
}

impl BlogServices {
    pub fn new<C: ApiClient + 'static>(client: Arc<C>) -> Self {
        let posts: Arc<dyn PostRepository> = Arc::new(PostApiRepository::new(client.clone()));
        let projects: Arc<dyn ProjectRepository> =
            Arc::new(ProjectApiRepository::new(client.clone()));
        let categories: Arc<dyn CategoryRepository> =
            Arc::new(CategoryApiRepository::new(client.clone()));
        let tags: Arc<dyn TagRepository> = Arc::new(TagApiRepository::new(client));

        Self::from_repositories(posts, projects, categories, tags)
    }

    pub fn from_repositories(
        posts: Arc<dyn PostRepository>,
        projects: Arc<dyn ProjectRepository>,
        categories: Arc<dyn CategoryRepository>,
        tags: Arc<dyn TagRepository>,
    ) -> Self {
        Self {
            get_posts: GetPostsUseCase::new(posts.clone()),
            get_post: GetPostUseCase::new(posts.clone()),
            search_posts: SearchPostsUseCase::new(posts.clone()),
            increment_view: IncrementViewUseCase::new(posts.clone()),
            get_posts_by_category: GetPostsByCategoryUseCase::new(posts.clone()),
            get_posts_by_tag: GetPostsByTagUseCase::new(posts),
            get_projects: GetProjectsUseCase::new(projects.clone()),
            get_project: GetProjectUseCase::new(projects),
            get_categories: GetCategoriesUseCase::new(categories),
            get_tags: GetTagsUseCase::new(tags),
        }
    }

    /// Builds a dedicated client for `config`. Use `from_shared` to reuse the process-wide one.
    pub fn from_config<P: ConfigProvider>(config: &P) -> Result<Self> {
        let client = ReqwestApiClient::new(config)?;
        Ok(Self::new(Arc::new(client)))
    }

    pub async fn from_shared<P: ConfigProvider>(config: &P) -> Result<Self> {
        let client = shared_client(config).await?;
        Ok(Self::new(client))
    }
}
