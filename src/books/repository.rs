pub mod json_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;


#[async_trait]
pub(crate) trait BookRepository: Repository<BookEntity> {
    // creates an empty catalog when none exists yet, returns true if one was created
    async fn init(&self) -> LibraryResult<bool>;
}
