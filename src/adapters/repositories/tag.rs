use crate::domain::model::{ApiResponse, Tag};
use crate::domain::ports::{ApiClient, TagRepository};
use crate::utils::error::ApiResult;
use async_trait::async_trait;
use std::sync::Arc;

pub struct TagApiRepository<C: ApiClient> {
    client: Arc<C>,
}

impl<C: ApiClient> TagApiRepository<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<C: ApiClient> TagRepository for TagApiRepository<C> {
    async fn get_tags(&self) -> ApiResult<ApiResponse<Vec<Tag>>> {
        self.client.get("/tags", None).await
    }
}
