use super::*;

impl Page {
    pub fn storage_available(&self) -> bool {
        self.storage.is_some()
    }

    /// Stored value for `key`. `None` covers both a missing key and a page
    /// without storage; use [`Page::storage_try_get_item`] to tell them apart.
    pub fn storage_get_item(&self, key: &str) -> Option<String> {
        self.storage_try_get_item(key).ok().flatten()
    }

    pub fn storage_try_get_item(&self, key: &str) -> Result<Option<String>> {
        let Some(storage) = self.storage.as_deref() else {
            self.trace_line(|| format!("[storage] get {key:?} unavailable"));
            return Err(Error::StorageUnavailable);
        };
        let value = storage.get_item(key);
        self.trace_line(|| format!("[storage] get {key:?} hit={}", value.is_some()));
        Ok(value)
    }

    pub fn storage_set_item(&mut self, key: &str, value: &str) {
        let Some(storage) = self.storage.as_deref_mut() else {
            self.trace_line(|| format!("[storage] set {key:?} unavailable"));
            return;
        };
        storage.set_item(key, value);
        self.trace_line(|| format!("[storage] set {key:?}"));
    }

    pub fn storage_remove_item(&mut self, key: &str) {
        let Some(storage) = self.storage.as_deref_mut() else {
            self.trace_line(|| format!("[storage] remove {key:?} unavailable"));
            return;
        };
        storage.remove_item(key);
        self.trace_line(|| format!("[storage] remove {key:?}"));
    }

    pub fn storage_clear(&mut self) {
        let Some(storage) = self.storage.as_deref_mut() else {
            self.trace_line(|| "[storage] clear unavailable".to_string());
            return;
        };
        storage.clear();
        self.trace_line(|| "[storage] clear".to_string());
    }

    pub fn storage_keys(&self) -> Vec<String> {
        let Some(storage) = self.storage.as_deref() else {
            self.trace_line(|| "[storage] keys unavailable".to_string());
            return Vec::new();
        };
        storage.keys()
    }
}
