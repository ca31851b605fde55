use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct FindBookByKeyCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl FindBookByKeyCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FindBookByKeyCommandRequest {
    pub book_id: String,
}

impl FindBookByKeyCommandRequest {
    pub fn new(book_id: &str) -> Self {
        Self {
            book_id: book_id.to_string(),
        }
    }
}


// index is where the book sits right now; it moves if an earlier book is removed.
#[derive(Debug, Serialize)]
pub struct FindBookByKeyCommandResponse {
    pub index: usize,
    pub book: BookDto,
}

impl FindBookByKeyCommandResponse {
    pub fn new(index: usize, book: BookDto) -> Self {
        Self {
            index,
            book,
        }
    }
}

#[async_trait]
impl Command<FindBookByKeyCommandRequest, FindBookByKeyCommandResponse> for FindBookByKeyCommand {
    async fn execute(&self, req: FindBookByKeyCommandRequest) -> Result<FindBookByKeyCommandResponse, CommandError> {
        self.catalog_service.find_book_by_key(req.book_id.as_str()).await
            .map_err(CommandError::from).map(|(index, book)| FindBookByKeyCommandResponse::new(index, book))
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::find_book_by_key_cmd::{FindBookByKeyCommand, FindBookByKeyCommandRequest};
    use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_run_find_book_by_key() {
        let svc = factory::create_catalog_service(&Configuration::new("test"));
        let add_cmd = AddBookCommand::new(svc.clone());
        let remove_cmd = RemoveBookCommand::new(svc.clone());
        let find_cmd = FindBookByKeyCommand::new(svc);

        let _ = add_cmd.execute(AddBookCommandRequest::new("Test Book", "Test Author", "978-0-306-40615-7"))
            .await.expect("should add book");
        let added = add_cmd.execute(AddBookCommandRequest::new("Another Test Book", "Another Author", "978-1-234-56789-7"))
            .await.expect("should add book");
        let _ = remove_cmd.execute(RemoveBookCommandRequest::new(0)).await.expect("should remove book");

        let key = added.book.book_id.clone().expect("should have key");
        let res = find_cmd.execute(FindBookByKeyCommandRequest::new(key.as_str())).await.expect("should find book");
        assert_eq!(0, res.index);
        assert_eq!(added.book, res.book);

        let res = find_cmd.execute(FindBookByKeyCommandRequest::new("missing")).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
