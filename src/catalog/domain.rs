pub mod service;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

// CatalogService runs one load, mutate and save cycle against the store per call
#[async_trait]
pub(crate) trait CatalogService: Sync + Send {
    async fn list_books(&self) -> LibraryResult<Vec<BookEntity>>;
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookEntity>;
    async fn update_book(&self, id: i64, changes: &BookDto) -> LibraryResult<BookEntity>;
    async fn remove_book(&self, id: i64) -> LibraryResult<BookEntity>;
}
