use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// CatalogDocument is the whole file: `{ "books": [...] }`
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    books: Vec<BookEntity>,
}

#[derive(Debug, Serialize)]
struct CatalogDocumentRef<'a> {
    books: &'a [BookEntity],
}

#[derive(Debug, Clone)]
pub struct JsonBookRepository {
    path: PathBuf,
}

impl JsonBookRepository {
    pub(crate) fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    fn store_error(&self, action: &str, err: impl std::fmt::Display, reason: Option<String>) -> LibraryError {
        LibraryError::database(
            format!("failed to {} catalog {} due to {}", action, self.path.display(), err).as_str(), reason)
    }

    async fn write(&self, books: &[BookEntity]) -> LibraryResult<()> {
        let json = serde_json::to_string_pretty(&CatalogDocumentRef { books })
            .map_err(|err| self.store_error("serialize", err, None))?;
        tokio::fs::write(&self.path, json).await
            .map_err(|err| self.store_error("write", &err, Some(format!("{:?}", err.kind()))))
    }
}

#[async_trait]
impl Repository<BookEntity> for JsonBookRepository {
    async fn load(&self) -> LibraryResult<Vec<BookEntity>> {
        let bytes = tokio::fs::read(&self.path).await
            .map_err(|err| self.store_error("read", &err, Some(format!("{:?}", err.kind()))))?;
        let doc: CatalogDocument = serde_json::from_slice(&bytes)
            .map_err(|err| self.store_error("parse", err, None))?;
        let mut seen = HashSet::new();
        for (pos, book) in doc.books.iter().enumerate() {
            match book.id() {
                Some(id) if !seen.insert(id) => {
                    tracing::warn!(path = %self.path.display(), id, "duplicate book id in catalog");
                }
                Some(_) => {}
                None => {
                    tracing::warn!(path = %self.path.display(), pos, id = ?book.id, "book without an integer id in catalog");
                }
            }
        }
        tracing::debug!(path = %self.path.display(), books = doc.books.len(), "loaded catalog");
        Ok(doc.books)
    }

    async fn save(&self, entities: &[BookEntity]) -> LibraryResult<usize> {
        self.write(entities).await?;
        tracing::debug!(path = %self.path.display(), books = entities.len(), "saved catalog");
        Ok(entities.len())
    }
}

#[async_trait]
impl BookRepository for JsonBookRepository {
    async fn init(&self) -> LibraryResult<bool> {
        match tokio::fs::metadata(&self.path).await {
            Ok(_) => Ok(false),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                self.write(&[]).await?;
                tracing::info!(path = %self.path.display(), "created empty catalog");
                Ok(true)
            }
            Err(err) => Err(self.store_error("inspect", &err, Some(format!("{:?}", err.kind())))),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};
    use tempfile::TempDir;

    use crate::books::domain::model::BookEntity;
    use crate::books::dto::BookDto;
    use crate::books::repository::BookRepository;
    use crate::books::repository::json_book_repository::JsonBookRepository;
    use crate::core::domain::Identifiable;
    use crate::core::library::LibraryError;
    use crate::core::repository::Repository;

    fn write_doc(dir: &TempDir, doc: &str) -> JsonBookRepository {
        let path = dir.path().join("db.json");
        std::fs::write(&path, doc).expect("should write catalog");
        JsonBookRepository::new(&path)
    }

    #[tokio::test]
    async fn test_should_load_books_in_order() {
        let dir = TempDir::new().expect("should create temp dir");
        let books_repo = write_doc(&dir, r#"{"books":[{"id":3,"title":"C"},{"id":1,"title":"A"}]}"#);
        let books = books_repo.load().await.expect("should load books");
        assert_eq!(vec![Some(3), Some(1)], books.iter().map(|b| b.id()).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_should_fail_load_for_missing_file() {
        let dir = TempDir::new().expect("should create temp dir");
        let books_repo = JsonBookRepository::new(&dir.path().join("missing.json"));
        let res = books_repo.load().await;
        assert!(matches!(res, Err(LibraryError::Database { reason_code: Some(ref kind), .. }) if kind == "NotFound"));
    }

    #[tokio::test]
    async fn test_should_fail_load_for_invalid_documents() {
        let dir = TempDir::new().expect("should create temp dir");
        for doc in ["not json", r#"{"items":[]}"#, r#"{"books":{}}"#] {
            let books_repo = write_doc(&dir, doc);
            let res = books_repo.load().await;
            assert!(matches!(res, Err(LibraryError::Database { .. })), "doc {} should fail", doc);
        }
    }

    #[tokio::test]
    async fn test_should_load_duplicate_ids_as_is() {
        let dir = TempDir::new().expect("should create temp dir");
        let books_repo = write_doc(&dir, r#"{"books":[{"id":1,"title":"A"},{"id":1,"title":"B"}]}"#);
        let books = books_repo.load().await.expect("should load books");
        assert_eq!(2, books.len());
    }

    #[tokio::test]
    async fn test_should_load_records_without_integer_id() {
        let dir = TempDir::new().expect("should create temp dir");
        let original = json!({"books": [
            {"id": 1, "title": "A"},
            {"title": "hand edited, no id"},
            {"id": 2.0, "title": "B"},
            {"id": "7", "title": "C"}
        ]});
        let books_repo = write_doc(&dir, original.to_string().as_str());
        let books = books_repo.load().await.expect("should load books");
        assert_eq!(vec![Some(1), None, Some(2), None], books.iter().map(|b| b.id()).collect::<Vec<_>>());

        let _ = books_repo.save(&books).await.expect("should save books");
        let written = std::fs::read_to_string(dir.path().join("db.json")).expect("should read catalog");
        let reloaded: Value = serde_json::from_str(written.as_str()).expect("should parse catalog");
        assert_eq!(original, reloaded);
    }

    #[tokio::test]
    async fn test_should_save_indented_document() {
        let dir = TempDir::new().expect("should create temp dir");
        let books_repo = write_doc(&dir, r#"{"books":[]}"#);
        let book = BookEntity::new(1, &BookDto::new("A", json!(2), "d"));
        let size = books_repo.save(&[book]).await.expect("should save books");
        assert_eq!(1, size);

        let written = std::fs::read_to_string(dir.path().join("db.json")).expect("should read catalog");
        assert_eq!("{\n  \"books\": [\n    {\n      \"id\": 1,\n      \"title\": \"A\",\n      \"quantity\": 2,\n      \"description\": \"d\"\n    }\n  ]\n}", written);
    }

    #[tokio::test]
    async fn test_should_round_trip_document() {
        let dir = TempDir::new().expect("should create temp dir");
        let original = json!({"books": [
            {"id": 1, "title": "A", "year": 2001, "quantity": "3", "imageURL": "http://a", "description": "d"},
            {"id": 2, "title": "B", "year": null, "quantity": 0, "description": "e", "shelf": "top"},
            {"id": 7, "title": 42}
        ]});
        let books_repo = write_doc(&dir, original.to_string().as_str());
        let books = books_repo.load().await.expect("should load books");
        let _ = books_repo.save(&books).await.expect("should save books");

        let written = std::fs::read_to_string(dir.path().join("db.json")).expect("should read catalog");
        let reloaded: Value = serde_json::from_str(written.as_str()).expect("should parse catalog");
        assert_eq!(original, reloaded);
    }

    #[tokio::test]
    async fn test_should_init_missing_catalog_once() {
        let dir = TempDir::new().expect("should create temp dir");
        let books_repo = JsonBookRepository::new(&dir.path().join("db.json"));
        assert!(books_repo.init().await.expect("should init catalog"));
        assert!(books_repo.load().await.expect("should load books").is_empty());

        let _ = books_repo.save(&[BookEntity::new(1, &BookDto::new("A", json!(1), "d"))]).await.expect("should save books");
        assert!(!books_repo.init().await.expect("should init catalog"));
        assert_eq!(1, books_repo.load().await.expect("should load books").len());
    }
}
