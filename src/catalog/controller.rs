use std::io::ErrorKind;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::{Html, Json},
    routing::{delete, get, patch, post},
    Router,
};
use serde_json::Value;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest, RemoveBookCommandResponse};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest, UpdateBookCommandResponse};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::command::{Command, CommandError};
use crate::core::controller::{cors, json_to_server_error, AppState, ErrorResponse, ServerError};
use crate::core::domain::Identifiable;
use crate::core::library::LibraryError;

fn build_service(state: &AppState) -> Box<dyn CatalogService> {
    factory::create_catalog_service(&state.config)
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/listBooks", get(list_books))
        .route("/addBook", post(add_book))
        .route("/updateBook", patch(update_book))
        .route("/removeBook", delete(remove_book_without_id))
        .route("/removeBook/:id", delete(remove_book))
        .route("/admin", get(admin_page))
        .layer(middleware::from_fn(cors))
        .with_state(state)
}

pub(crate) async fn list_books(
    State(state): State<AppState>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    let res = ListBooksCommand::new(build_service(&state)).execute(ListBooksCommandRequest::default()).await?;
    Ok(Json(res))
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<AddBookCommandResponse>, ServerError> {
    let req: AddBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = AddBookCommand::new(build_service(&state)).execute(req).await?;
    tracing::info!(id = ?res.book.id(), "added book");
    Ok(Json(res))
}

pub(crate) async fn update_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<UpdateBookCommandResponse>, ServerError> {
    let req: UpdateBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = UpdateBookCommand::new(build_service(&state)).execute(req).await?;
    tracing::info!(id = ?res.book.id(), "updated book");
    Ok(Json(res))
}

pub(crate) async fn remove_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<RemoveBookCommandResponse>, ServerError> {
    let req = RemoveBookCommandRequest::new(Some(book_id));
    let res = RemoveBookCommand::new(build_service(&state)).execute(req).await?;
    tracing::info!(id = ?res.book.id(), "removed book");
    Ok(Json(res))
}

pub(crate) async fn remove_book_without_id(
    State(state): State<AppState>) -> Result<Json<RemoveBookCommandResponse>, ServerError> {
    let res = RemoveBookCommand::new(build_service(&state)).execute(RemoveBookCommandRequest::new(None)).await?;
    Ok(Json(res))
}

pub(crate) async fn admin_page(
    State(state): State<AppState>) -> Result<Html<String>, ServerError> {
    match tokio::fs::read_to_string(&state.config.admin_page_path).await {
        Ok(page) => Ok(Html(page)),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            Err((StatusCode::NOT_FOUND, Json(ErrorResponse::new("admin page not found"))))
        }
        Err(err) => {
            tracing::warn!(path = %state.config.admin_page_path.display(), "failed to read admin page");
            Err(CommandError::from(LibraryError::from(err)).into())
        }
    }
}
