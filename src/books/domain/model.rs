use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use crate::books::dto::BookDto;
use crate::core::domain::Identifiable;
use crate::utils::json::as_integer;

// BookEntity is one record of the catalog document. Every field, `id` included, is
// stored as given and keys this service does not know about are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookEntity {
    #[serde(default, deserialize_with = "crate::utils::json::keep_null::deserialize", skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, deserialize_with = "crate::utils::json::keep_null::deserialize", skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    #[serde(default, deserialize_with = "crate::utils::json::keep_null::deserialize", skip_serializing_if = "Option::is_none")]
    pub year: Option<Value>,
    #[serde(default, deserialize_with = "crate::utils::json::keep_null::deserialize", skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Value>,
    #[serde(rename = "imageURL", default, deserialize_with = "crate::utils::json::keep_null::deserialize", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<Value>,
    #[serde(default, deserialize_with = "crate::utils::json::keep_null::deserialize", skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BookEntity {
    pub fn new(id: i64, book: &BookDto) -> Self {
        Self {
            id: Some(Value::from(id)),
            title: book.title.clone(),
            year: book.year.clone(),
            quantity: book.quantity.clone(),
            image_url: book.image_url.clone(),
            description: book.description.clone(),
            extra: Map::new(),
        }
    }

    // merge overlays every field sent in `changes`, the id and unknown keys are left alone
    pub fn merge(&mut self, changes: &BookDto) {
        if let Some(title) = &changes.title {
            self.title = Some(title.clone());
        }
        if let Some(year) = &changes.year {
            self.year = Some(year.clone());
        }
        if let Some(quantity) = &changes.quantity {
            self.quantity = Some(quantity.clone());
        }
        if let Some(image_url) = &changes.image_url {
            self.image_url = Some(image_url.clone());
        }
        if let Some(description) = &changes.description {
            self.description = Some(description.clone());
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> Option<i64> {
        self.id.as_ref().and_then(as_integer)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};
    use crate::books::domain::model::BookEntity;
    use crate::books::dto::BookDto;
    use crate::core::domain::Identifiable;

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookEntity::new(1, &BookDto::new("A", json!(2), "d"));
        assert_eq!(json!({"id": 1, "title": "A", "quantity": 2, "description": "d"}),
                   serde_json::to_value(&book).expect("should serialize"));
    }

    #[tokio::test]
    async fn test_should_merge_present_fields_only() {
        let mut book: BookEntity = serde_json::from_value(json!({
            "id": 5, "title": "T", "year": 1999, "quantity": 3, "imageURL": "u", "description": "d"
        })).expect("should parse book");
        book.merge(&BookDto { quantity: Some(json!(10)), year: Some(Value::Null), ..BookDto::default() });
        assert_eq!(Some(5), book.id());
        assert_eq!(Some(json!("T")), book.title);
        assert_eq!(Some(json!(10)), book.quantity);
        assert_eq!(Some(Value::Null), book.year);
        assert_eq!(Some(json!("u")), book.image_url);
        assert_eq!(Some(json!("d")), book.description);
    }

    #[tokio::test]
    async fn test_should_keep_unknown_keys() {
        let raw = json!({"id": 2, "title": "T", "author": "X", "isbn": null});
        let book: BookEntity = serde_json::from_value(raw.clone()).expect("should parse book");
        assert_eq!(Some(&json!("X")), book.extra.get("author"));
        assert_eq!(raw, serde_json::to_value(&book).expect("should serialize"));
    }

    #[tokio::test]
    async fn test_should_pass_through_records_without_integer_id() {
        for raw in [json!({"title": "no id"}), json!({"id": "2", "title": "T"}), json!({"id": null}), json!({"id": 2.5})] {
            let book: BookEntity = serde_json::from_value(raw.clone()).expect("should parse book");
            assert_eq!(None, book.id());
            assert_eq!(raw, serde_json::to_value(&book).expect("should serialize"));
        }
        let book: BookEntity = serde_json::from_value(json!({"id": 2.0})).expect("should parse book");
        assert_eq!(Some(2), book.id());
    }
}
