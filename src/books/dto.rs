use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorDto {
    pub name: String,
}

impl AuthorDto {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

// BookDto is a data transfer object for the catalog. Callers send it without a
// book_id; the catalog fills the key in on the copies it hands back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book_id: Option<String>,
    pub title: String,
    pub author: AuthorDto,
    pub isbn: String,
}

impl BookDto {
    pub fn new(title: &str, author: &str, isbn: &str) -> BookDto {
        BookDto {
            book_id: None,
            title: title.to_string(),
            author: AuthorDto::new(author),
            isbn: isbn.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use crate::books::dto::BookDto;

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookDto::new("title", "author", "0-306-40615-2");
        assert_eq!("title", book.title.as_str());
        assert_eq!("author", book.author.name.as_str());
        assert_eq!(None, book.book_id);
    }

    #[tokio::test]
    async fn test_should_parse_candidate_without_key() {
        let book: BookDto = serde_json::from_value(json!({
            "title": "Test Book",
            "author": {"name": "Test Author"},
            "isbn": "978-0-306-40615-7"
        })).expect("should parse book");
        assert_eq!(BookDto::new("Test Book", "Test Author", "978-0-306-40615-7"), book);
        let value = serde_json::to_value(&book).expect("should serialize book");
        assert!(value.get("book_id").is_none());
    }
}
