pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::{LibraryResult, PaginatedResult, PaginationParams};

// CatalogService is the ordered book catalog. Books are addressed by position, so
// removing a book renumbers every book after it.
#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    async fn remove_book(&self, index: i64) -> LibraryResult<()>;
    async fn update_book(&self, index: i64, book: &BookDto) -> LibraryResult<BookDto>;
    async fn find_book_by_index(&self, index: i64) -> LibraryResult<BookDto>;
    async fn find_book_by_key(&self, book_id: &str) -> LibraryResult<(usize, BookDto)>;
    async fn list_books(&self, author: Option<&str>,
                        pagination: PaginationParams) -> LibraryResult<PaginatedResult<BookDto>>;
    async fn count_books(&self) -> LibraryResult<usize>;
}
