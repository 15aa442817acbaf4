use serde_json::Value;

// is_present follows the request presence rule: absent, null, false, 0 and "" are missing
pub(crate) fn is_present(value: &Option<Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() != Some(0.0),
        Some(_) => true,
    }
}

// as_integer reads a JSON number with no fractional part, so `2` and `2.0` are the same id
pub(crate) fn as_integer(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    match value.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => Some(f as i64),
        _ => None,
    }
}

// parse_leading_int reads an id the lenient way browsers and path helpers do: optional
// sign, then the leading digits ("5abc" is 5, "0x1f" is hex). Returns None without digits.
pub(crate) fn parse_leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let (radix, rest) = if rest.starts_with("0x") || rest.starts_with("0X") {
        (16, &rest[2..])
    } else {
        (10, rest)
    };
    let end = rest.find(|c: char| !c.is_digit(radix)).unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    let n = i64::from_str_radix(&rest[..end], radix).ok()?;
    Some(if negative { -n } else { n })
}

// Keeps an explicit `null` as `Some(Value::Null)` so it is not confused with an absent key.
// Use with `#[serde(default)]` so absent keys become `None`.
pub mod keep_null {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
        Value::deserialize(deserializer).map(Some)
    }
}
