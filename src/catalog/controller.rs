use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::Json,
};
use serde_json::{json, Value};
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::find_book_by_key_cmd::{FindBookByKeyCommand, FindBookByKeyCommandRequest, FindBookByKeyCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::summary_cmd::{BookSummaryCommand, BookSummaryCommandRequest, BookSummaryCommandResponse};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest, UpdateBookCommandResponse};
use crate::core::command::{Command, CommandError};
use crate::core::controller::{AppState, json_to_server_error, ServerError};

fn log_failure(op: &str, err: CommandError) -> ServerError {
    tracing::debug!(op, error = %err, "command failed");
    ServerError::from(err)
}

// Authorization must read "Bearer <token>"; the scheme is case-insensitive and the
// token may be empty.
fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ').unwrap_or((value, ""));
    if scheme.eq_ignore_ascii_case("bearer") {
        Some(token.to_string())
    } else {
        None
    }
}

pub async fn welcome(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "message": format!("Welcome to the {}", state.config.service_name),
        "documentation": "/docs",
        "openapi_spec": "/openapi.json",
    }))
}

pub async fn list_books(
    State(state): State<AppState>,
    Query(req): Query<ListBooksCommandRequest>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    let res = ListBooksCommand::new(state.catalog).execute(req).await
        .map_err(|err| log_failure("list_books", err))?;
    Ok(Json(res))
}

pub async fn add_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<(StatusCode, Json<AddBookCommandResponse>), ServerError> {
    let req: AddBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = AddBookCommand::new(state.catalog).execute(req).await
        .map_err(|err| log_failure("add_book", err))?;
    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn find_book_by_index(
    State(state): State<AppState>,
    Path(index): Path<i64>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let req = GetBookCommandRequest { index };
    let res = GetBookCommand::new(state.catalog).execute(req).await
        .map_err(|err| log_failure("find_book_by_index", err))?;
    Ok(Json(res))
}

pub async fn find_book_by_key(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<FindBookByKeyCommandResponse>, ServerError> {
    let req = FindBookByKeyCommandRequest { book_id };
    let res = FindBookByKeyCommand::new(state.catalog).execute(req).await
        .map_err(|err| log_failure("find_book_by_key", err))?;
    Ok(Json(res))
}

pub async fn update_book(
    State(state): State<AppState>,
    Path(index): Path<i64>,
    json: Json<Value>) -> Result<Json<UpdateBookCommandResponse>, ServerError> {
    let mut req: UpdateBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    req.index = index;
    let res = UpdateBookCommand::new(state.catalog).execute(req).await
        .map_err(|err| log_failure("update_book", err))?;
    Ok(Json(res))
}

pub async fn remove_book(
    State(state): State<AppState>,
    Path(index): Path<i64>) -> Result<StatusCode, ServerError> {
    let req = RemoveBookCommandRequest { index };
    let _ = RemoveBookCommand::new(state.catalog).execute(req).await
        .map_err(|err| log_failure("remove_book", err))?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn protected_summary(
    State(state): State<AppState>,
    headers: HeaderMap) -> Result<Json<BookSummaryCommandResponse>, ServerError> {
    let req = BookSummaryCommandRequest { token: bearer_token(&headers) };
    let res = BookSummaryCommand::new(state.catalog).execute(req).await
        .map_err(|err| log_failure("protected_summary", err))?;
    Ok(Json(res))
}

#[cfg(test)]
mod tests {
    use axum::extract::{Path, Query, State};
    use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
    use axum::response::Json;
    use serde_json::{json, Value};
    use crate::catalog::command::list_books_cmd::ListBooksCommandRequest;
    use crate::catalog::controller::{add_book, bearer_token, find_book_by_index, find_book_by_key, list_books, protected_summary, remove_book, update_book, welcome};
    use crate::core::controller::AppState;
    use crate::core::domain::Configuration;

    fn new_state() -> AppState {
        AppState::new(Configuration::new("Book Inventory API"))
    }

    fn book_json(title: &str, author: &str, isbn: &str) -> Json<Value> {
        Json(json!({
            "title": title,
            "author": {"name": author},
            "isbn": isbn
        }))
    }

    #[tokio::test]
    async fn test_should_welcome() {
        let Json(body) = welcome(State(new_state())).await;
        assert_eq!(json!({
            "message": "Welcome to the Book Inventory API",
            "documentation": "/docs",
            "openapi_spec": "/openapi.json"
        }), body);
    }

    #[tokio::test]
    async fn test_should_create_and_get_book() {
        let state = new_state();
        let (status, Json(created)) = add_book(State(state.clone()), book_json("Test Book", "Test Author", "978-0-306-40615-7"))
            .await.expect("should create book");
        assert_eq!(StatusCode::CREATED, status);
        assert_eq!("Test Book", created.book.title.as_str());
        assert_eq!("Test Author", created.book.author.name.as_str());

        let Json(loaded) = find_book_by_index(State(state), Path(0)).await.expect("should get book");
        assert_eq!(created.book, loaded.book);
    }

    #[tokio::test]
    async fn test_should_reject_invalid_isbn() {
        let err = add_book(State(new_state()), book_json("Invalid ISBN Book", "Some Author", "123-456"))
            .await.expect_err("should reject book");
        assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, err.0);
    }

    #[tokio::test]
    async fn test_should_reject_malformed_payload() {
        let err = add_book(State(new_state()), Json(json!({"title": "No Author"})))
            .await.expect_err("should reject book");
        assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, err.0);
    }

    #[tokio::test]
    async fn test_should_not_find_missing_book() {
        let err = find_book_by_index(State(new_state()), Path(999)).await.expect_err("should not find book");
        assert_eq!(StatusCode::NOT_FOUND, err.0);
        assert!(err.1.contains("not found"));
    }

    #[tokio::test]
    async fn test_should_update_and_remove_book() {
        let state = new_state();
        let _ = add_book(State(state.clone()), book_json("Test Book", "Test Author", "978-0-306-40615-7"))
            .await.expect("should create book");

        let Json(updated) = update_book(State(state.clone()), Path(0), book_json("New Title", "Test Author", "0-306-40615-2"))
            .await.expect("should update book");
        assert_eq!("New Title", updated.book.title.as_str());
        let err = update_book(State(state.clone()), Path(4), book_json("New Title", "Test Author", "0-306-40615-2"))
            .await.expect_err("should not update book");
        assert_eq!(StatusCode::NOT_FOUND, err.0);

        let status = remove_book(State(state.clone()), Path(0)).await.expect("should remove book");
        assert_eq!(StatusCode::NO_CONTENT, status);
        let err = remove_book(State(state), Path(0)).await.expect_err("should not remove book");
        assert_eq!(StatusCode::NOT_FOUND, err.0);
    }

    #[tokio::test]
    async fn test_should_list_books_by_author() {
        let state = new_state();
        let _ = add_book(State(state.clone()), book_json("Test Book", "Test Author", "978-0-306-40615-7"))
            .await.expect("should create book");
        let _ = add_book(State(state.clone()), book_json("Another Test Book", "Another Author", "978-1-234-56789-7"))
            .await.expect("should create book");

        let Json(res) = list_books(State(state.clone()), Query(ListBooksCommandRequest::new(Some("Test Author"), 0, 10)))
            .await.expect("should list books");
        assert_eq!(1, res.total);
        assert!(res.books.iter().all(|b| b.author.name == "Test Author"));

        let Json(res) = list_books(State(state), Query(ListBooksCommandRequest::new(None, 0, 10)))
            .await.expect("should list books");
        assert_eq!(2, res.books.len());
        assert_eq!(10, res.limit);
    }

    #[tokio::test]
    async fn test_should_find_book_by_key() {
        let state = new_state();
        let (_, Json(created)) = add_book(State(state.clone()), book_json("Test Book", "Test Author", "978-0-306-40615-7"))
            .await.expect("should create book");
        let key = created.book.book_id.clone().expect("should have key");

        let Json(res) = find_book_by_key(State(state.clone()), Path(key)).await.expect("should find book");
        assert_eq!(0, res.index);
        let err = find_book_by_key(State(state), Path("missing".to_string())).await.expect_err("should not find book");
        assert_eq!(StatusCode::NOT_FOUND, err.0);
    }

    #[tokio::test]
    async fn test_should_require_token_for_summary() {
        let err = protected_summary(State(new_state()), HeaderMap::new()).await.expect_err("should reject");
        assert_eq!(StatusCode::UNAUTHORIZED, err.0);
        assert_eq!("Not authenticated", err.1.as_str());

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer fake-token-for-testing"));
        let Json(res) = protected_summary(State(new_state()), headers).await.expect("should summarize");
        assert_eq!(0, res.total_books);
        assert_eq!("fake-token...", res.token_preview.as_str());
    }

    #[tokio::test]
    async fn test_should_parse_bearer_token() {
        let mut headers = HeaderMap::new();
        assert_eq!(None, bearer_token(&headers));
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert_eq!(None, bearer_token(&headers));
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("bearer abc"));
        assert_eq!(Some("abc".to_string()), bearer_token(&headers));
    }
}
