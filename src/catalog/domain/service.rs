use async_trait::async_trait;
use crate::books::domain::isbn;
use crate::books::domain::model::BookEntity;
use crate::books::dto::{AuthorDto, BookDto};
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::{Configuration, EmptyPagePolicy};
use crate::core::library::{LibraryError, LibraryResult, PaginatedResult, PaginationParams};

pub const MAX_TITLE_CHARS: usize = 200;

pub(crate) struct CatalogServiceImpl {
    empty_page_policy: EmptyPagePolicy,
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            empty_page_policy: config.empty_page_policy,
            book_repository,
        }
    }
}

// validate_book is run on every write; a stored book never carries a bad ISBN.
pub(crate) fn validate_book(book: &BookDto) -> LibraryResult<()> {
    let title_len = book.title.chars().count();
    if title_len == 0 || title_len > MAX_TITLE_CHARS {
        return Err(LibraryError::validation(
            format!("title must be between 1 and {} characters", MAX_TITLE_CHARS).as_str(),
            Some("InvalidTitle".to_string())));
    }
    isbn::validate(book.isbn.as_str())?;
    Ok(())
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        validate_book(book)?;
        let entity = BookEntity::from(book);
        let _ = self.book_repository.create(&entity).await?;
        Ok(BookDto::from(&entity))
    }

    async fn remove_book(&self, index: i64) -> LibraryResult<()> {
        self.book_repository.delete(index).await.map(|_| ())
    }

    async fn update_book(&self, index: i64, book: &BookDto) -> LibraryResult<BookDto> {
        // a missing book is reported ahead of a malformed replacement
        let _ = self.book_repository.get(index).await?;
        validate_book(book)?;
        // update re-checks the index under the write lock
        self.book_repository.update(index, &BookEntity::from(book)).await.map(|b| BookDto::from(&b))
    }

    async fn find_book_by_index(&self, index: i64) -> LibraryResult<BookDto> {
        self.book_repository.get(index).await.map(|b| BookDto::from(&b))
    }

    async fn find_book_by_key(&self, book_id: &str) -> LibraryResult<(usize, BookDto)> {
        self.book_repository.find_by_key(book_id).await.map(|(i, b)| (i, BookDto::from(&b)))
    }

    async fn list_books(&self, author: Option<&str>,
                        pagination: PaginationParams) -> LibraryResult<PaginatedResult<BookDto>> {
        let res = match author {
            Some(author) => self.book_repository.find_by_author(author, pagination).await?,
            None => self.book_repository.query(pagination).await?,
        };
        if res.records.is_empty() && self.empty_page_policy == EmptyPagePolicy::NotFound {
            return Err(LibraryError::not_found("No books found", None));
        }
        Ok(res.map(|b| BookDto::from(b)))
    }

    async fn count_books(&self) -> LibraryResult<usize> {
        self.book_repository.count().await
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            book_id: Some(other.book_id.to_string()),
            title: other.title.to_string(),
            author: AuthorDto::new(other.author_name.as_str()),
            isbn: other.isbn.to_string(),
        }
    }
}

// Any book_id on the incoming dto is ignored; keys are only ever assigned here.
impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        BookEntity::new(other.title.as_str(), other.author.name.as_str(), other.isbn.as_str())
    }
}
