use std::sync::Arc;
use axum::http::StatusCode;
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::library::LibraryError;

#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub catalog: Arc<dyn CatalogService>,
}

impl AppState {
    pub fn new(config: Configuration) -> AppState {
        let catalog = factory::create_catalog_service(&config);
        AppState {
            config,
            catalog,
        }
    }
}

pub type ServerError = (StatusCode, String);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    ServerError::from(CommandError::from(LibraryError::from(err)))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Access { .. } => {
                (StatusCode::UNAUTHORIZED, err.to_string())
            }
            CommandError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, err.to_string())
            }
            CommandError::Validation { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
            }
            CommandError::Serialization { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
            }
            CommandError::Runtime { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        }
    }
}
