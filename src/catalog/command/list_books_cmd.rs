use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::{PaginatedResult, PaginationParams, DEFAULT_LIMIT};

pub struct ListBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl ListBooksCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

// Raw query values; clamping happens when the request is turned into PaginationParams.
#[derive(Debug, Deserialize)]
pub struct ListBooksCommandRequest {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
    pub author: Option<String>,
}

impl ListBooksCommandRequest {
    pub fn new(author: Option<&str>, skip: i64, limit: i64) -> Self {
        Self {
            skip,
            limit,
            author: author.map(str::to_string),
        }
    }

    pub fn pagination(&self) -> PaginationParams {
        PaginationParams::new(self.skip, self.limit)
    }

    // an empty author is the same as no filter at all
    pub fn author_filter(&self) -> Option<&str> {
        self.author.as_deref().filter(|a| !a.is_empty())
    }
}


#[derive(Debug, Serialize)]
pub struct ListBooksCommandResponse {
    pub books: Vec<BookDto>,
    pub total: usize,
    pub skip: usize,
    pub limit: usize,
}

impl ListBooksCommandResponse {
    pub fn new(res: PaginatedResult<BookDto>) -> Self {
        Self {
            books: res.records,
            total: res.total,
            skip: res.skip,
            limit: res.limit,
        }
    }
}

#[async_trait]
impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        self.catalog_service.list_books(req.author_filter(), req.pagination())
            .await.map_err(CommandError::from).map(ListBooksCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_parse_defaults() {
        let req: ListBooksCommandRequest = serde_json::from_value(json!({})).expect("should parse request");
        assert_eq!(0, req.skip);
        assert_eq!(10, req.limit);
        assert_eq!(None, req.author_filter());
        assert_eq!(None, ListBooksCommandRequest::new(Some(""), 0, 10).author_filter());
    }

    #[tokio::test]
    async fn test_should_run_list_books() {
        let svc = factory::create_catalog_service(&Configuration::new("test"));
        let add_cmd = AddBookCommand::new(svc.clone());
        let list_cmd = ListBooksCommand::new(svc);

        let _ = add_cmd.execute(AddBookCommandRequest::new("Test Book", "Test Author", "978-0-306-40615-7"))
            .await.expect("should add book");
        let _ = add_cmd.execute(AddBookCommandRequest::new("Another Test Book", "Another Author", "978-1-234-56789-7"))
            .await.expect("should add book");

        let res = list_cmd.execute(ListBooksCommandRequest::new(Some("Test Author"), -3, 500))
            .await.expect("should list books");
        assert_eq!(1, res.total);
        assert_eq!(0, res.skip);
        assert_eq!(100, res.limit);
        assert!(res.books.iter().all(|b| b.author.name == "Test Author"));

        let res = list_cmd.execute(ListBooksCommandRequest::new(Some(""), 0, 10))
            .await.expect("should list books");
        assert_eq!(2, res.total);
    }
}
