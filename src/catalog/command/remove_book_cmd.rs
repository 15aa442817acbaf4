use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::{LibraryError, LibraryResult};
use crate::utils::json::parse_leading_int;

pub(crate) struct RemoveBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl RemoveBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RemoveBookCommandRequest {
    pub(crate) book_id: Option<String>,
}

impl RemoveBookCommandRequest {
    pub fn new(book_id: Option<String>) -> Self {
        Self {
            book_id,
        }
    }

    // book_id reads the leading integer of the path id ("5abc" is 5); text without
    // leading digits matches no book
    pub fn book_id(&self) -> LibraryResult<i64> {
        match self.book_id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => {
                parse_leading_int(id).ok_or_else(|| LibraryError::book_not_found(id))
            }
            _ => Err(LibraryError::missing_field("id", "removeBook", "path")),
        }
    }
}


#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct RemoveBookCommandResponse {
    pub book: BookEntity,
}

impl RemoveBookCommandResponse {
    pub fn new(book: BookEntity) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        let id = req.book_id()?;
        self.catalog_service.remove_book(id).await
            .map_err(CommandError::from).map(RemoveBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tempfile::TempDir;
    use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
    use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
    use crate::catalog::domain::service::tests::catalog_config;
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Identifiable;

    const CATALOG: &str = r#"{"books":[{"id":1,"title":"One"},{"id":5,"title":"Five","quantity":2}]}"#;

    #[tokio::test]
    async fn test_should_run_remove_book() {
        let dir = TempDir::new().expect("should create temp dir");
        let config = catalog_config(&dir, CATALOG);
        let remove_cmd = RemoveBookCommand::new(factory::create_catalog_service(&config));
        let list_cmd = ListBooksCommand::new(factory::create_catalog_service(&config));

        let res = remove_cmd.execute(RemoveBookCommandRequest::new(Some("5".to_string()))).await.expect("should remove book");
        assert_eq!(json!({"id": 5, "title": "Five", "quantity": 2}), serde_json::to_value(&res).expect("should serialize"));

        let listed = list_cmd.execute(ListBooksCommandRequest::default()).await.expect("should list books");
        assert_eq!(vec![Some(1)], listed.books.iter().map(|b| b.id()).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_should_remove_by_leading_digits() {
        let dir = TempDir::new().expect("should create temp dir");
        let remove_cmd = RemoveBookCommand::new(factory::create_catalog_service(&catalog_config(&dir, CATALOG)));

        let res = remove_cmd.execute(RemoveBookCommandRequest::new(Some("5abc".to_string()))).await.expect("should remove book");
        assert_eq!(Some(5), res.book.id());
    }

    #[tokio::test]
    async fn test_should_require_id() {
        for id in [None, Some("".to_string()), Some("  ".to_string())] {
            let res = RemoveBookCommandRequest::new(id).book_id();
            assert!(matches!(res, Err(crate::core::library::LibraryError::Validation { .. })));
        }
    }

    #[tokio::test]
    async fn test_should_not_find_unknown_or_invalid_id() {
        let dir = TempDir::new().expect("should create temp dir");
        let remove_cmd = RemoveBookCommand::new(factory::create_catalog_service(&catalog_config(&dir, CATALOG)));

        for id in ["42", "abc"] {
            match remove_cmd.execute(RemoveBookCommandRequest::new(Some(id.to_string()))).await {
                Err(CommandError::NotFound { message }) => assert!(message.contains(id)),
                other => panic!("expected not found error, got {:?}", other),
            }
        }
    }
}
