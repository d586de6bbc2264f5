use std::rc::Rc;

use super::*;

fn pair(access: &str, refresh: &str) -> TokenPair {
    TokenPair {
        access: access.to_owned(),
        refresh: refresh.to_owned(),
    }
}

#[test]
fn load_on_empty_store_is_none() {
    let store = MemoryTokenStore::new();
    assert_eq!(store.load(), None);
}

#[test]
fn save_then_load_returns_the_pair() {
    let store = MemoryTokenStore::new();
    store.save(&pair("a1", "r1"));
    assert_eq!(store.load(), Some(pair("a1", "r1")));
}

#[test]
fn save_replaces_both_values() {
    let store = MemoryTokenStore::new();
    store.save(&pair("a1", "r1"));
    store.save(&pair("a2", "r2"));
    assert_eq!(store.load(), Some(pair("a2", "r2")));
}

#[test]
fn clear_removes_both_values() {
    let store = MemoryTokenStore::new();
    store.save(&pair("a1", "r1"));
    store.clear();
    assert_eq!(store.load(), None);
}

#[test]
fn clear_on_empty_store_is_a_noop() {
    let store = MemoryTokenStore::new();
    store.clear();
    assert_eq!(store.load(), None);
}

#[test]
fn clones_share_the_same_backing_state() {
    let store = MemoryTokenStore::new();
    let alias = store.clone();
    store.save(&pair("a1", "r1"));
    assert_eq!(alias.load(), Some(pair("a1", "r1")));
    alias.clear();
    assert_eq!(store.load(), None);
}

#[test]
fn works_behind_a_trait_object() {
    let store: Rc<dyn TokenStore> = Rc::new(MemoryTokenStore::new());
    store.save(&pair("a1", "r1"));
    assert_eq!(store.load(), Some(pair("a1", "r1")));
    store.clear();
    assert_eq!(store.load(), None);
}
