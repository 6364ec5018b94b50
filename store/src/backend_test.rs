use super::*;

#[test]
fn memory_backend_starts_empty() {
    let backend = MemoryBackend::new();
    assert_eq!(backend.read("ritualState").unwrap(), None);
}

#[test]
fn memory_backend_clones_share_entries() {
    let a = MemoryBackend::new();
    let b = a.clone();
    a.write("k", "{\"v\":1}").unwrap();
    assert_eq!(b.read("k").unwrap().as_deref(), Some("{\"v\":1}"));
}

#[test]
fn memory_backend_remove_missing_key_is_ok() {
    let backend = MemoryBackend::new();
    assert!(backend.remove("nope").is_ok());
}

#[test]
fn memory_backend_failing_writes_leave_entries_untouched() {
    let backend = MemoryBackend::new();
    backend.insert_raw("k", "old");
    backend.set_fail_writes(true);

    let err = backend.write("k", "new").unwrap_err();
    assert!(matches!(err, StoreError::Write { .. }));
    assert_eq!(backend.raw("k").as_deref(), Some("old"));
}
