use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::{LibraryError, LibraryResult};
use crate::utils::json::{as_integer, is_present};

pub(crate) struct UpdateBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateBookCommandRequest {
    #[serde(default, deserialize_with = "crate::utils::json::keep_null::deserialize")]
    pub id: Option<Value>,
    #[serde(flatten)]
    pub changes: BookDto,
}

impl UpdateBookCommandRequest {
    pub fn new(id: i64, changes: BookDto) -> Self {
        Self {
            id: Some(Value::from(id)),
            changes,
        }
    }

    // book_id returns the integer id to update; an id of any other type matches no book
    pub fn book_id(&self) -> LibraryResult<i64> {
        match &self.id {
            Some(id) if is_present(&self.id) => {
                as_integer(id).ok_or_else(|| LibraryError::book_not_found(id))
            }
            _ => Err(LibraryError::missing_field("id", "updateBook", "body")),
        }
    }
}


#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct UpdateBookCommandResponse {
    pub book: BookEntity,
}

impl UpdateBookCommandResponse {
    pub fn new(book: BookEntity) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        let id = req.book_id()?;
        self.catalog_service.update_book(id, &req.changes).await.map_err(CommandError::from).map(UpdateBookCommandResponse::new)
    }
}
