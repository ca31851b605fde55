pub mod memory_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::{LibraryResult, PaginatedResult, PaginationParams};
use crate::core::repository::Repository;


#[async_trait]
pub trait BookRepository: Repository<BookEntity> {
    async fn find_by_author(&self, author: &str,
                            pagination: PaginationParams) -> LibraryResult<PaginatedResult<BookEntity>>;

    // resolves a stable key to the book's current position
    async fn find_by_key(&self, book_id: &str) -> LibraryResult<(usize, BookEntity)>;

    async fn count(&self) -> LibraryResult<usize>;
}
