use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::next_id;

pub(crate) struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn list_books(&self) -> LibraryResult<Vec<BookEntity>> {
        self.book_repository.load().await
    }

    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookEntity> {
        let mut books = self.book_repository.load().await?;
        let created = BookEntity::new(next_id(&books), book);
        books.push(created.clone());
        let size = self.book_repository.save(&books).await?;
        tracing::debug!(id = ?created.id(), books = size, "stored new book");
        Ok(created)
    }

    async fn update_book(&self, id: i64, changes: &BookDto) -> LibraryResult<BookEntity> {
        let mut books = self.book_repository.load().await?;
        let book = books.iter_mut().find(|b| b.id() == Some(id))
            .ok_or_else(|| LibraryError::book_not_found(id))?;
        book.merge(changes);
        let updated = book.clone();
        let _ = self.book_repository.save(&books).await?;
        Ok(updated)
    }

    async fn remove_book(&self, id: i64) -> LibraryResult<BookEntity> {
        let mut books = self.book_repository.load().await?;
        let pos = books.iter().position(|b| b.id() == Some(id))
            .ok_or_else(|| LibraryError::book_not_found(id))?;
        let removed = books.remove(pos);
        let size = self.book_repository.save(&books).await?;
        tracing::debug!(id, books = size, "book removed from catalog");
        Ok(removed)
    }
}
