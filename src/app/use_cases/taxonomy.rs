use crate::domain::model::{ApiResponse, Category, Tag};
use crate::domain::ports::{CategoryRepository, TagRepository};
use crate::utils::error::Result;
use std::sync::Arc;

pub struct GetCategoriesUseCase {
    repository: Arc<dyn CategoryRepository>,
}

impl GetCategoriesUseCase {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<ApiResponse<Vec<Category>>> {
        Ok(self.repository.get_categories().await?)
    }
}

pub struct GetTagsUseCase {
    repository: Arc<dyn TagRepository>,
}

impl GetTagsUseCase {
    pub fn new(repository: Arc<dyn TagRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<ApiResponse<Vec<Tag>>> {
        Ok(self.repository.get_tags().await?)
    }
}
