use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Reference to a user-selected file. The wizard never reads the file;
/// it only carries the reference into the submitted payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    pub name: String,
    pub path: Option<PathBuf>,
    pub size_bytes: Option<u64>,
}

impl FileRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
            size_bytes: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_size_bytes(mut self, size_bytes: u64) -> Self {
        self.size_bytes = Some(size_bytes);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    None,
    Text(String),
    Bool(bool),
    Number(i64),
    List(Vec<String>),
    File(FileRef),
}

impl Value {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::None => true,
            Self::Text(v) => v.trim().is_empty(),
            Self::List(v) => v.is_empty(),
            _ => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v.as_str()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(v) => Some(*v),
            // Numeric fields frequently arrive as raw input text.
            Self::Text(v) => v.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    pub fn as_file(&self) -> Option<&FileRef> {
        match self {
            Self::File(v) => Some(v),
            _ => None,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::None => serde_json::Value::Null,
            Self::Text(v) => serde_json::json!(v),
            Self::Bool(v) => serde_json::json!(v),
            Self::Number(v) => serde_json::json!(v),
            Self::List(v) => serde_json::json!(v),
            Self::File(v) => serde_json::json!({
                "file_name": v.name,
                "size_bytes": v.size_bytes,
            }),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<FileRef> for Value {
    fn from(value: FileRef) -> Self {
        Self::File(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{FileRef, Value};

    #[test]
    fn emptiness_follows_variant_content() {
        assert!(Value::None.is_empty());
        assert!(Value::Text("   ".to_string()).is_empty());
        assert!(Value::List(vec![]).is_empty());
        assert!(!Value::Text("x".to_string()).is_empty());
        assert!(!Value::Bool(false).is_empty());
        assert!(!Value::Number(0).is_empty());
    }

    #[test]
    fn numeric_text_parses_as_number() {
        assert_eq!(Value::Text(" 42 ".to_string()).as_number(), Some(42));
        assert_eq!(Value::Text("4x2".to_string()).as_number(), None);
        assert_eq!(Value::Number(7).as_number(), Some(7));
    }

    #[test]
    fn file_value_serializes_name_and_size() {
        let value = Value::File(FileRef::new("statutes.pdf").with_size_bytes(2048));
        assert_eq!(
            value.to_json(),
            serde_json::json!({"file_name": "statutes.pdf", "size_bytes": 2048})
        );
    }
}
