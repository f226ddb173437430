use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single task in the list.
///
/// `id` and `title` are fixed at creation; only the completion flag changes
/// afterwards. Field names are part of the on-disk format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    id: Uuid,
    title: String,
    #[serde(default)]
    is_completed: bool,
}

impl Item {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            is_completed: false,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    pub fn toggle(&mut self) {
        self.is_completed = !self.is_completed;
    }

    /// Two-symbol completion marker shown before the title.
    pub fn marker(&self) -> &'static str {
        if self.is_completed { "[x]" } else { "[ ]" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_is_open() {
        let item = Item::new("Buy milk");
        assert_eq!(item.title(), "Buy milk");
        assert!(!item.is_completed());
        assert_eq!(item.marker(), "[ ]");
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Item::new("a");
        let b = Item::new("a");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_toggle_flips_and_keeps_identity() {
        let mut item = Item::new("Write report");
        let id = item.id();
        item.toggle();
        assert!(item.is_completed());
        assert_eq!(item.marker(), "[x]");
        item.toggle();
        assert!(!item.is_completed());
        assert_eq!(item.id(), id);
    }

    #[test]
    fn test_json_field_names() {
        let item = Item::new("Ship it");
        let value = serde_json::to_value(&item).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(object["title"], "Ship it");
        assert_eq!(object["isCompleted"], false);
        assert_eq!(object["id"], item.id().to_string());
    }

    #[test]
    fn test_missing_completion_flag_defaults_to_false() {
        let json = r#"{"id":"67e55044-10b1-426f-9247-bb680e5fe0c8","title":"Old entry"}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.title(), "Old entry");
        assert!(!item.is_completed());
    }
}
