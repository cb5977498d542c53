use examforge::application::ports::{OutputStore, OutputStoreError};
use examforge::infrastructure::storage::LocalOutputStore;

fn create_test_store() -> (tempfile::TempDir, LocalOutputStore) {
    let dir = tempfile::TempDir::new().unwrap();
    let store = LocalOutputStore::new(dir.path().to_path_buf()).unwrap();
    (dir, store)
}

#[tokio::test]
async fn given_generated_bytes_when_persisting_then_fetch_round_trips() {
    let (_dir, store) = create_test_store();
    let content = b"PK fake docx content";

    store
        .persist("Math-final-1700000000000.docx", content)
        .await
        .unwrap();

    let fetched = store.fetch("Math-final-1700000000000.docx").await.unwrap();
    assert_eq!(fetched, content);
}

#[tokio::test]
async fn given_unknown_filename_when_fetching_then_not_found() {
    let (_dir, store) = create_test_store();
    let err = store.fetch("missing.docx").await.unwrap_err();
    assert!(matches!(err, OutputStoreError::NotFound(_)));
}

#[tokio::test]
async fn given_missing_output_directory_when_creating_store_then_it_is_created() {
    let dir = tempfile::TempDir::new().unwrap();
    let nested = dir.path().join("generated");

    let store = LocalOutputStore::new(nested.clone()).unwrap();
    store.persist("file.docx", b"data").await.unwrap();

    assert!(nested.join("file.docx").exists());
}
