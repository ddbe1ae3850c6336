use depgraph_util::errors::DepgraphError;
use depgraph_util::fs::{ensure_dir, find_ancestor_with, write_graph_file};
use tempfile::TempDir;

#[test]
fn test_find_ancestor_with_direct() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("depgraph.toml"), "").unwrap();
    let result = find_ancestor_with(tmp.path(), "depgraph.toml");
    assert_eq!(result, Some(tmp.path().to_path_buf()));
}

#[test]
fn test_find_ancestor_with_nested() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("depgraph.toml"), "").unwrap();
    let nested = tmp.path().join("a").join("b").join("c");
    std::fs::create_dir_all(&nested).unwrap();
    let result = find_ancestor_with(&nested, "depgraph.toml");
    assert_eq!(result, Some(tmp.path().to_path_buf()));
}

#[test]
fn test_find_ancestor_with_not_found() {
    let tmp = TempDir::new().unwrap();
    let result = find_ancestor_with(tmp.path(), "NonExistent.file");
    assert_eq!(result, None);
}

#[test]
fn test_ensure_dir_creates_nested() {
    let tmp = TempDir::new().unwrap();
    let deep = tmp.path().join("x").join("y").join("z");
    assert!(!deep.exists());
    ensure_dir(&deep).unwrap();
    assert!(deep.is_dir());
}

#[test]
fn test_write_graph_file_creates_parents() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("target").join("graphs").join("app.txt");
    write_graph_file(&path, "com.example:app:compile\n").unwrap();
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "com.example:app:compile\n"
    );
}

#[test]
fn test_write_graph_file_reports_output_error() {
    let tmp = TempDir::new().unwrap();
    // A regular file where a directory is expected.
    let blocker = tmp.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();
    let path = blocker.join("app.txt");

    let err = write_graph_file(&path, "x").unwrap_err();
    match err {
        DepgraphError::Output { path: p, .. } => assert_eq!(p, path),
        other => panic!("expected output error, got {other:?}"),
    }
}
