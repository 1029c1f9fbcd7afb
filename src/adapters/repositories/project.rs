use crate::domain::model::{ApiResponse, Project, ProjectListItem};
use crate::domain::ports::{ApiClient, GetProjectsParams, ProjectRepository, RequestConfig};
use crate::utils::error::ApiResult;
use async_trait::async_trait;
use std::sync::Arc;

pub struct ProjectApiRepository<C: ApiClient> {
    client: Arc<C>,
}

impl<C: ApiClient> ProjectApiRepository<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<C: ApiClient> ProjectRepository for ProjectApiRepository<C> {
    async fn get_projects(
        &self,
        params: GetProjectsParams,
    ) -> ApiResult<ApiResponse<Vec<ProjectListItem>>> {
        // false is a real filter here, only an unset flag is dropped
        let config = match params.featured {
            Some(featured) => RequestConfig::default().param("featured", featured),
            None => RequestConfig::default(),
        };

        self.client.get("/projects", Some(config)).await
    }

    async fn get_project(&self, slug: &str) -> ApiResult<ApiResponse<Project>> {
        self.client.get(&format!("/projects/{}", slug), None).await
    }
}
