use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

const TOKEN_PREVIEW_CHARS: usize = 10;

// BookSummaryCommand only checks that a bearer token was presented. The token is
// passed through untouched and never verified.
pub struct BookSummaryCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl BookSummaryCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BookSummaryCommandRequest {
    pub token: Option<String>,
}

impl BookSummaryCommandRequest {
    pub fn new(token: Option<&str>) -> Self {
        Self {
            token: token.map(str::to_string),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct BookSummaryCommandResponse {
    pub message: String,
    pub token_preview: String,
    pub total_books: usize,
}

impl BookSummaryCommandResponse {
    pub fn new(token: &str, total_books: usize) -> Self {
        let preview: String = token.chars().take(TOKEN_PREVIEW_CHARS).collect();
        Self {
            message: "You have access to protected book data!".to_string(),
            token_preview: format!("{}...", preview),
            total_books,
        }
    }
}

#[async_trait]
impl Command<BookSummaryCommandRequest, BookSummaryCommandResponse> for BookSummaryCommand {
    async fn execute(&self, req: BookSummaryCommandRequest) -> Result<BookSummaryCommandResponse, CommandError> {
        let token = req.token.ok_or_else(|| CommandError::Access { message: "Not authenticated".to_string() })?;
        let total_books = self.catalog_service.count_books().await.map_err(CommandError::from)?;
        Ok(BookSummaryCommandResponse::new(token.as_str(), total_books))
    }
}
