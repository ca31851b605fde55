use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct RemoveBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl RemoveBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RemoveBookCommandRequest {
    pub index: i64,
}

impl RemoveBookCommandRequest {
    pub fn new(index: i64) -> Self {
        Self {
            index,
        }
    }
}


#[derive(Debug, Serialize, Default)]
pub struct RemoveBookCommandResponse {}

impl RemoveBookCommandResponse {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        self.catalog_service.remove_book(req.index).await
            .map_err(CommandError::from).map(|_| RemoveBookCommandResponse::new())
    }
}
