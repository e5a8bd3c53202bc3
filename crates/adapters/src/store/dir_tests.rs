use super::*;

fn path(name: &str) -> FilePath {
    FilePath::new("inbox", name)
}

fn item(name: &str, bytes: &[u8]) -> FileItem {
    FileItem::new(name, bytes.to_vec())
}

#[test]
fn write_then_read_round_trips_bytes() {
    let store = DirFileStore::open_temp().unwrap();
    store.write(&path("a.txt"), &item("a.txt", b"hello")).unwrap();

    let read = store.read(&path("a.txt")).unwrap();

    assert_eq!(read.filename, "a.txt");
    assert_eq!(read.bytes, b"hello");
}

#[test]
fn write_replaces_existing_content() {
    let store = DirFileStore::open_temp().unwrap();
    store.write(&path("a.txt"), &item("a.txt", b"old")).unwrap();
    store.write(&path("a.txt"), &item("a.txt", b"new")).unwrap();

    assert_eq!(store.read(&path("a.txt")).unwrap().bytes, b"new");
}

#[test]
fn read_missing_file_is_not_found() {
    let store = DirFileStore::open_temp().unwrap();
    let err = store.read(&path("missing.txt")).unwrap_err();
    assert!(matches!(err, FileStoreError::NotFound(_)));
}

#[test]
fn delete_removes_the_file() {
    let store = DirFileStore::open_temp().unwrap();
    store.write(&path("a.txt"), &item("a.txt", b"x")).unwrap();

    store.delete(&path("a.txt")).unwrap();

    assert!(matches!(
        store.read(&path("a.txt")).unwrap_err(),
        FileStoreError::NotFound(_)
    ));
}

#[test]
fn delete_missing_file_is_not_found() {
    let store = DirFileStore::open_temp().unwrap();
    let err = store.delete(&path("missing.txt")).unwrap_err();
    assert!(matches!(err, FileStoreError::NotFound(_)));
}

#[test]
fn list_returns_sorted_paths_in_one_directory() {
    let store = DirFileStore::open_temp().unwrap();
    store.write(&path("b.txt"), &item("b.txt", b"x")).unwrap();
    store.write(&path("a.txt"), &item("a.txt", b"x")).unwrap();
    store
        .write(&FilePath::new("other", "c.txt"), &item("c.txt", b"x"))
        .unwrap();

    let listed = store.list("inbox").unwrap();

    assert_eq!(listed, vec![path("a.txt"), path("b.txt")]);
}

#[test]
fn list_missing_directory_is_empty() {
    let store = DirFileStore::open_temp().unwrap();
    assert!(store.list("nowhere").unwrap().is_empty());
}

#[test]
fn open_respects_an_existing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let store = DirFileStore::open(dir.path()).unwrap();
    store.write(&path("a.txt"), &item("a.txt", b"x")).unwrap();

    // a second handle over the same root sees the same files
    let reopened = DirFileStore::open(dir.path()).unwrap();
    assert_eq!(reopened.read(&path("a.txt")).unwrap().bytes, b"x");
}
