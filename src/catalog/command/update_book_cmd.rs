use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct UpdateBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateBookCommandRequest {
    #[serde(default)]
    pub index: i64,
    #[serde(flatten)]
    pub book: BookDto,
}

impl UpdateBookCommandRequest {
    pub fn new(index: i64, title: &str, author: &str, isbn: &str) -> Self {
        Self {
            index,
            book: BookDto::new(title, author, isbn),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct UpdateBookCommandResponse {
    pub book: BookDto,
}

impl UpdateBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        self.catalog_service.update_book(req.index, &req.book).await
            .map_err(CommandError::from).map(UpdateBookCommandResponse::new)
    }
}
