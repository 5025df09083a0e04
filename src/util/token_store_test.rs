use super::*;

// =============================================================
// LocalTokenStore
// =============================================================

#[test]
fn local_store_starts_empty() {
    let store = LocalTokenStore::with_key("test_starts_empty");
    assert_eq!(store.get(), None);
}

#[test]
fn local_store_set_is_visible_to_other_instances() {
    let writer = LocalTokenStore::with_key("test_shared");
    let reader = LocalTokenStore::with_key("test_shared");
    writer.set("abc");
    assert_eq!(reader.get(), Some("abc".to_owned()));
    writer.clear();
    assert_eq!(reader.get(), None);
}

#[test]
fn local_store_set_overwrites() {
    let store = LocalTokenStore::with_key("test_overwrite");
    store.set("first");
    store.set("second");
    assert_eq!(store.get(), Some("second".to_owned()));
}

#[test]
fn local_store_keys_are_isolated() {
    let a = LocalTokenStore::with_key("test_key_a");
    let b = LocalTokenStore::with_key("test_key_b");
    a.set("token-a");
    assert_eq!(b.get(), None);
}

#[test]
fn local_store_default_uses_auth_token_key() {
    assert_eq!(LocalTokenStore::default(), LocalTokenStore::with_key("authToken"));
}

// =============================================================
// MemoryTokenStore
// =============================================================

#[test]
fn memory_store_clones_share_slot() {
    let store = MemoryTokenStore::default();
    let clone = store.clone();
    store.set("xyz");
    assert_eq!(clone.get(), Some("xyz".to_owned()));
    clone.clear();
    assert_eq!(store.get(), None);
}

#[test]
fn memory_store_blank_token_reads_as_absent() {
    let store = MemoryTokenStore::with_token("   ");
    assert_eq!(store.get(), None);
}
