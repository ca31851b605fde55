use axum::{
    routing::get,
    Router,
};
use lambda_http::{run, Error};
use book_inventory::catalog::controller::{add_book, find_book_by_index, find_book_by_key, list_books,
                                          protected_summary, remove_book, update_book, welcome};
use book_inventory::core::controller::AppState;
use book_inventory::core::domain::Configuration;
use book_inventory::utils::trace::setup_tracing;

// See https://docs.aws.amazon.com/lambda/latest/dg/lambda-rust.html
// https://docs.aws.amazon.com/lambda/latest/dg/rust-http-events.html

const DEV_MODE: bool = true;

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_tracing();

    if DEV_MODE {
        std::env::set_var("AWS_LAMBDA_FUNCTION_NAME", "_");
        std::env::set_var("AWS_LAMBDA_FUNCTION_MEMORY_SIZE", "4096");
        std::env::set_var("AWS_LAMBDA_FUNCTION_VERSION", "1");
        std::env::set_var("AWS_LAMBDA_RUNTIME_API", "http://[::]:9000/.rt");
    }

    let config = Configuration::from_env("Book Inventory API");
    tracing::info!(service = config.service_name.as_str(), version = config.version.as_str(),
        empty_page_policy = %config.empty_page_policy, "starting");
    let state = AppState::new(config);

    let app = Router::new()
        .route("/", get(welcome))
        .route("/books", get(list_books).post(add_book))
        .route("/books/key/:book_id", get(find_book_by_key))
        .route("/books/protected/summary", get(protected_summary))
        .route("/books/:index",
               get(find_book_by_index).put(update_book).delete(remove_book))
        .with_state(state);

    run(app).await
}
