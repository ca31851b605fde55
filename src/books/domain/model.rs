use uuid::Uuid;
use crate::books::domain::Book;
use crate::core::domain::Identifiable;

// BookEntity is the stored form of a catalog record. Its position in the catalog is
// its public identity; book_id is a stable key that survives positions shifting
// after a delete.
#[derive(Debug, Clone, PartialEq)]
pub struct BookEntity {
    pub book_id: String,
    pub title: String,
    pub author_name: String,
    pub isbn: String,
}

impl BookEntity {
    pub fn new(title: &str, author_name: &str, isbn: &str) -> Self {
        Self {
            book_id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            author_name: author_name.to_string(),
            isbn: isbn.to_string(),
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.book_id.to_string()
    }
}

impl Book for BookEntity {
    fn isbn(&self) -> &str {
        self.isbn.as_str()
    }

    fn author_name(&self) -> &str {
        self.author_name.as_str()
    }
}
