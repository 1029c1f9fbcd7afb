use crate::domain::model::{ApiResponse, Category};
use crate::domain::ports::{ApiClient, CategoryRepository};
use crate::utils::error::ApiResult;
use async_trait::async_trait;
use std::sync::Arc;

pub struct CategoryApiRepository<C: ApiClient> {
    client: Arc<C>,
}

impl<C: ApiClient> CategoryApiRepository<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<C: ApiClient> CategoryRepository for CategoryApiRepository<C> {
    async fn get_categories(&self) -> ApiResult<ApiResponse<Vec<Category>>> {
        self.client.get("/categories", None).await
    }
}
