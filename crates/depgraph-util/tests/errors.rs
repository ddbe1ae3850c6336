use depgraph_util::errors::DepgraphError;

#[test]
fn test_io_error_display() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
    let err = DepgraphError::from(io_err);
    assert!(err.to_string().contains("I/O error"), "got: {err}");
}

#[test]
fn test_config_error_display() {
    let err = DepgraphError::config("bad pattern");
    assert_eq!(err.to_string(), "Configuration error: bad pattern");
}

#[test]
fn test_resolution_error_keeps_cause() {
    let cause = std::io::Error::new(std::io::ErrorKind::NotFound, "tree.json missing");
    let err = DepgraphError::resolution("could not read tree", cause);
    assert_eq!(
        err.to_string(),
        "Dependency resolution failed: could not read tree"
    );
    let source = std::error::Error::source(&err).expect("cause is kept");
    assert_eq!(source.to_string(), "tree.json missing");
}

#[test]
fn test_store_error_display() {
    let err = DepgraphError::Store {
        message: "connection refused".to_string(),
    };
    assert_eq!(err.to_string(), "Graph store error: connection refused");
}

#[test]
fn test_output_error_names_path() {
    let err = DepgraphError::Output {
        path: "target/app.txt".into(),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    let msg = err.to_string();
    assert!(msg.contains("target/app.txt"), "got: {msg}");
    assert!(msg.contains("denied"), "got: {msg}");
}
