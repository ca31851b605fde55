use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult, PaginatedResult, PaginationParams};
use crate::core::repository::Repository;

// MemoryBookRepository keeps the catalog in process memory. Writers hold the lock for
// the whole mutation so no reader ever observes positions half way through a shift.
#[derive(Debug)]
pub struct MemoryBookRepository {
    books: RwLock<Vec<BookEntity>>,
}

impl MemoryBookRepository {
    pub(crate) fn new() -> Self {
        Self {
            books: RwLock::new(Vec::new()),
        }
    }
}

fn position(index: i64, len: usize) -> LibraryResult<usize> {
    match usize::try_from(index) {
        Ok(pos) if pos < len => Ok(pos),
        _ => Err(LibraryError::book_not_found(index)),
    }
}

impl MemoryBookRepository {
    async fn page(&self, author: Option<&str>, pagination: PaginationParams) -> LibraryResult<PaginatedResult<BookEntity>> {
        let books = self.books.read().await;
        let filtered: Vec<&BookEntity> = books.iter()
            .filter(|b| author.map_or(true, |a| b.author_name() == a))
            .collect();
        let records = filtered.iter()
            .skip(pagination.skip)
            .take(pagination.limit)
            .map(|b| (*b).clone())
            .collect();
        Ok(PaginatedResult::new(pagination, filtered.len(), records))
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut books = self.books.write().await;
        books.push(entity.clone());
        Ok(books.len() - 1)
    }

    async fn update(&self, index: i64, entity: &BookEntity) -> LibraryResult<BookEntity> {
        let mut books = self.books.write().await;
        let pos = position(index, books.len())?;
        let existing = &mut books[pos];
        existing.title = entity.title.to_string();
        existing.author_name = entity.author_name.to_string();
        existing.isbn = entity.isbn.to_string();
        Ok(existing.clone())
    }

    async fn get(&self, index: i64) -> LibraryResult<BookEntity> {
        let books = self.books.read().await;
        let pos = position(index, books.len())?;
        Ok(books[pos].clone())
    }

    async fn delete(&self, index: i64) -> LibraryResult<usize> {
        let mut books = self.books.write().await;
        let pos = position(index, books.len())?;
        books.remove(pos);
        Ok(1)
    }

    async fn query(&self, pagination: PaginationParams) -> LibraryResult<PaginatedResult<BookEntity>> {
        self.page(None, pagination).await
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn find_by_author(&self, author: &str, pagination: PaginationParams) -> LibraryResult<PaginatedResult<BookEntity>> {
        self.page(Some(author), pagination).await
    }

    async fn find_by_key(&self, book_id: &str) -> LibraryResult<(usize, BookEntity)> {
        let books = self.books.read().await;
        books.iter().enumerate()
            .find(|(_, b)| b.id() == book_id)
            .map(|(i, b)| (i, b.clone()))
            .ok_or_else(|| LibraryError::not_found(
                format!("Book with key {} not found", book_id).as_str(), None))
    }

    async fn count(&self) -> LibraryResult<usize> {
        Ok(self.books.read().await.len())
    }
}
