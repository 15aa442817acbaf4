use serde::{Deserialize, Serialize};
use serde_json::Value;

// BookDto carries the client-editable fields of a book; a `None` field was not sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookDto {
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
}

impl BookDto {
    pub fn new(title: &str, quantity: Value, description: &str) -> BookDto {
        BookDto {
            title: Some(Value::from(title)),
            quantity: Some(quantity),
            description: Some(Value::from(description)),
            ..BookDto::default()
        }
    }
}
