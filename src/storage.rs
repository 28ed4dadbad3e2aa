use super::*;

/// A string-to-string persistence backend, shaped after `window.localStorage`.
///
/// A [`Page`] holds at most one store. A page without a store behaves like a
/// host where the storage API is missing.
pub trait KeyValueStore: fmt::Debug {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str);
    fn remove_item(&mut self, key: &str);
    fn keys(&self) -> Vec<String>;
    fn clear(&mut self);

    fn len(&self) -> usize {
        self.keys().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory store. Keys keep their first insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    entries: Vec<(String, String)>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: &[(&str, &str)]) -> Self {
        let mut storage = Self::new();
        for (key, value) in entries {
            storage.set_item(key, value);
        }
        storage
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.clone())
    }

    fn set_item(&mut self, key: &str, value: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|(existing, _)| existing == key) {
            entry.1 = value.to_string();
        } else {
            self.entries.push((key.to_string(), value.to_string()));
        }
    }

    fn remove_item(&mut self, key: &str) {
        self.entries.retain(|(existing, _)| existing != key);
    }

    fn keys(&self) -> Vec<String> {
        self.entries.iter().map(|(key, _)| key.clone()).collect()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_item_overwrites_in_place_and_keeps_key_order() {
        let mut storage = MemoryStorage::with_entries(&[("a", "1"), ("b", "2")]);
        storage.set_item("a", "3");
        assert_eq!(storage.keys(), vec!["a".to_string(), "b".to_string()]);
        assert_eq!(storage.get_item("a").as_deref(), Some("3"));
    }

    #[test]
    fn remove_item_only_touches_the_given_key() {
        let mut storage = MemoryStorage::with_entries(&[("a", "1"), ("b", "2")]);
        storage.remove_item("a");
        storage.remove_item("missing");
        assert_eq!(storage.get_item("a"), None);
        assert_eq!(storage.get_item("b").as_deref(), Some("2"));
        assert_eq!(storage.len(), 1);
    }
}
