use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::{LibraryError, LibraryResult};
use crate::utils::json::is_present;

const OPERATION: &str = "addBook";

pub(crate) struct AddBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddBookCommandRequest {
    #[serde(flatten)]
    pub(crate) book: BookDto,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, quantity: Value, description: &str) -> Self {
        Self {
            book: BookDto::new(title, quantity, description),
        }
    }

    // build_book checks the required fields in order, the first missing one is reported
    pub fn build_book(&self) -> LibraryResult<&BookDto> {
        let required = [
            ("title", &self.book.title),
            ("quantity", &self.book.quantity),
            ("description", &self.book.description),
        ];
        for (field, value) in required {
            if !is_present(value) {
                return Err(LibraryError::missing_field(field, OPERATION, "body"));
            }
        }
        Ok(&self.book)
    }
}


#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct AddBookCommandResponse {
    pub book: BookEntity,
}

impl AddBookCommandResponse {
    pub fn new(book: BookEntity) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book()?;
        self.catalog_service.add_book(book).await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
