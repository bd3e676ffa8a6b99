//! # Listing Serialization
//!
//! Renders a store snapshot as `{"todos": [...]}`. Encoding goes through
//! serde_json, so titles containing quotes, braces, backslashes or control
//! characters come back out of any JSON decoder unchanged.

use serde::{Deserialize, Serialize};

use super::record::Record;

/// Wrapper object for a full listing
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TodoList {
    pub todos: Vec<Record>,
}

impl TodoList {
    /// Wrap a snapshot returned by [`TodoStore::list`](super::TodoStore::list)
    pub fn from_snapshot(todos: Vec<Record>) -> Self {
        Self { todos }
    }

    /// Encode as a JSON string
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Decode from a JSON string
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Number of records in the listing
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// Whether the listing holds no records
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_empty_listing_has_empty_array() {
        let json = TodoList::default().to_json().unwrap();
        assert_eq!(json, r#"{"todos":[]}"#);
    }

    #[test]
    fn test_listing_members_are_strings() {
        let list = TodoList::from_snapshot(vec![Record::new("7", "Walk dog", "true")]);
        let value: Value = serde_json::from_str(&list.to_json().unwrap()).unwrap();

        let first = &value["todos"][0];
        assert!(first["id"].is_string());
        assert!(first["title"].is_string());
        assert!(first["completed"].is_string());
        assert_eq!(first["completed"], "true");
    }

    #[test]
    fn test_hostile_values_survive_a_standard_decoder() {
        let nasty = [
            Record::new("q\"uote", "he said \"hi\"", "false"),
            Record::new("b\\slash", "C:\\temp\\", "true"),
            Record::new("brace", "}]},{\"id\":\"injected", "\u{0}\t\n"),
        ];
        let list = TodoList::from_snapshot(nasty.to_vec());
        let json = list.to_json().unwrap();

        let value: Value = serde_json::from_str(&json).unwrap();
        let todos = value["todos"].as_array().unwrap();
        assert_eq!(todos.len(), 3);
        for (decoded, original) in todos.iter().zip(nasty.iter()) {
            assert_eq!(decoded["id"], original.id.as_str());
            assert_eq!(decoded["title"], original.title.as_str());
            assert_eq!(decoded["completed"], original.completed.as_str());
        }

        assert_eq!(TodoList::from_json(&json).unwrap(), list);
    }
}
