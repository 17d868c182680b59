//! Store-and-search flow across the infrastructure layer, no network:
//! chunks written by one handle are ranked correctly by a fresh handle,
//! mirroring the query path's open-per-request discipline.

use domain::models::Embedding;
use infrastructure::file_scanner::FileScanner;
use infrastructure::search::SearchEngine;
use infrastructure::vector_store::VectorStore;
use std::fs;

fn chunk(id: &str, path: &str, vector: Vec<f32>, text: &str) -> Embedding {
    Embedding {
        id: id.to_string(),
        vector,
        text: text.to_string(),
        path: path.to_string(),
    }
}

#[tokio::test]
async fn stored_chunks_are_ranked_by_a_fresh_handle() {
    let dir = tempfile::tempdir().unwrap();
    let config = tests::temp_config(dir.path());

    let store = VectorStore::open(config.index_path()).unwrap();
    store
        .insert_embeddings(&[
            chunk("a:0", "a.txt", vec![1.0, 0.0, 0.0], "renewal terms"),
            chunk("b:0", "b.txt", vec![0.0, 1.0, 0.0], "payment schedule"),
            chunk("c:0", "c.txt", vec![0.0, 0.0, 1.0], "termination clause"),
        ])
        .unwrap();
    drop(store);

    // Reopen the way the query path does, then take the top-1.
    let store = VectorStore::open(config.index_path()).unwrap();
    let embeddings = store.get_all_embeddings().unwrap();
    let top = SearchEngine::top_matches(&[0.9, 0.1, 0.0], &embeddings, 1);
    assert_eq!(top, vec!["renewal terms".to_string()]);
}

#[tokio::test]
async fn empty_index_produces_no_matches() {
    let dir = tempfile::tempdir().unwrap();
    let config = tests::temp_config(dir.path());

    let store = VectorStore::open(config.index_path()).unwrap();
    let embeddings = store.get_all_embeddings().unwrap();
    assert!(SearchEngine::top_matches(&[1.0, 0.0], &embeddings, 1).is_empty());
}

#[tokio::test]
async fn rescanning_an_unchanged_file_reports_the_same_hash() {
    let dir = tempfile::tempdir().unwrap();
    let config = tests::temp_config(dir.path());
    fs::create_dir_all(&config.source_directory).unwrap();
    fs::write(config.source_directory.join("doc.txt"), "stable content").unwrap();

    let scanner = FileScanner::new(&config.source_directory);
    let first = scanner.scan_files().unwrap();
    let second = scanner.scan_files().unwrap();
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].hash, second[0].hash);

    // The skip decision the ingest pipeline makes:
    let store = VectorStore::open(config.index_path()).unwrap();
    store.upsert_file_hash(&first[0].path, &first[0].hash).unwrap();
    let recorded = store.get_file_hash(&second[0].path).unwrap();
    assert_eq!(recorded.as_deref(), Some(second[0].hash.as_str()));
}
