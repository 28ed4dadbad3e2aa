use super::*;

#[test]
fn set_then_get_round_trips_through_the_store() -> Result<()> {
    let mut page = Page::from_html("<main></main>")?;
    assert!(page.storage_available());
    assert_eq!(page.storage_get_item("theme"), None);

    page.storage_set_item("theme", "dark");
    assert_eq!(page.storage_get_item("theme").as_deref(), Some("dark"));
    page.storage_set_item("theme", "light");
    assert_eq!(page.storage_try_get_item("theme")?.as_deref(), Some("light"));
    Ok(())
}

#[test]
fn remove_item_deletes_exactly_the_given_key() -> Result<()> {
    let mut page =
        Page::from_html_with_local_storage("<main></main>", &[("a", "1"), ("b", "2"), ("c", "3")])?;
    page.storage_remove_item("b");
    assert_eq!(page.storage_get_item("b"), None);
    assert_eq!(page.storage_keys(), vec!["a".to_string(), "c".to_string()]);

    page.storage_remove_item("missing");
    assert_eq!(page.storage_keys().len(), 2);

    page.storage_clear();
    assert!(page.storage_keys().is_empty());
    Ok(())
}

#[test]
fn unavailable_storage_falls_through_quietly() -> Result<()> {
    let mut page = Page::without_storage("<main></main>")?;
    assert!(!page.storage_available());
    page.storage_set_item("k", "v");
    page.storage_remove_item("k");
    page.storage_clear();
    assert_eq!(page.storage_get_item("k"), None);
    assert!(page.storage_keys().is_empty());
    assert_eq!(page.storage_try_get_item("k"), Err(Error::StorageUnavailable));
    Ok(())
}

#[derive(Debug, Default)]
struct UppercaseStore {
    inner: MemoryStorage,
}

impl KeyValueStore for UppercaseStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.inner.get_item(&key.to_ascii_uppercase())
    }

    fn set_item(&mut self, key: &str, value: &str) {
        self.inner.set_item(&key.to_ascii_uppercase(), value);
    }

    fn remove_item(&mut self, key: &str) {
        self.inner.remove_item(&key.to_ascii_uppercase());
    }

    fn keys(&self) -> Vec<String> {
        self.inner.keys()
    }

    fn clear(&mut self) {
        self.inner.clear();
    }
}

#[test]
fn injected_store_receives_every_call() -> Result<()> {
    let mut page = Page::from_html_with_storage("<main></main>", Box::new(UppercaseStore::default()))?;
    page.storage_set_item("token", "abc");
    assert_eq!(page.storage_keys(), vec!["TOKEN".to_string()]);
    assert_eq!(page.storage_get_item("Token").as_deref(), Some("abc"));
    page.storage_remove_item("token");
    assert_eq!(page.storage_get_item("TOKEN"), None);
    Ok(())
}
