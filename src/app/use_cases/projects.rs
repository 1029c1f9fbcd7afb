use crate::app::dto::{GetProjectRequest, GetProjectsRequest};
use crate::app::use_cases::posts::SLUG_REQUIRED;
use crate::domain::model::{ApiResponse, Project, ProjectListItem};
use crate::domain::ports::{GetProjectsParams, ProjectRepository};
use crate::utils::error::Result;
use crate::utils::validation::require_present;
use std::sync::Arc;

pub struct GetProjectsUseCase {
    repository: Arc<dyn ProjectRepository>,
}

impl GetProjectsUseCase {
    pub fn new(repository: Arc<dyn ProjectRepository>) -> Self {
        Self { repository }
    }

    /// `featured` is forwarded as-is, unset included; the repository decides what reaches the wire.
    pub async fn execute(
        &self,
        request: GetProjectsRequest,
    ) -> Result<ApiResponse<Vec<ProjectListItem>>> {
        let params = GetProjectsParams {
            featured: request.featured,
        };

        Ok(self.repository.get_projects(params).await?)
    }
}

pub struct GetProjectUseCase {
    repository: Arc<dyn ProjectRepository>,
}

impl GetProjectUseCase {
    pub fn new(repository: Arc<dyn ProjectRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, request: GetProjectRequest) -> Result<ApiResponse<Project>> {
        require_present(&request.slug, SLUG_REQUIRED)?;

        Ok(self.repository.get_project(&request.slug).await?)
    }
}
