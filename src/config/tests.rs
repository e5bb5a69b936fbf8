//! Config Module Tests
//!
//! Validates node-list parsing rules and the change-notification watcher.
//!
//! ## Test Scopes
//! - **Loader**: JSON shapes, default weight, every rejection rule.
//! - **Watcher**: fires on content change, stays quiet on identical rewrites,
//!   and survives malformed intermediate writes.

#[cfg(test)]
mod tests {
    use crate::config::loader::{load_nodes, parse_nodes};
    use crate::config::watcher::NodeListWatcher;
    use crate::error::GatewayError;
    use std::path::PathBuf;
    use std::time::Duration;

    fn temp_node_file(content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("gateway-nodes-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, content).expect("failed to write temp node file");
        path
    }

    // ============================================================
    // LOADER TESTS
    // ============================================================

    #[test]
    fn test_parse_full_records() {
        let nodes =
            parse_nodes(br#"[{"address":"127.0.0.1:3001","weight":42}]"#).unwrap();

        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].address, "127.0.0.1:3001");
        assert_eq!(nodes[0].weight, 42);
    }

    #[test]
    fn test_parse_applies_default_weight() {
        let nodes = parse_nodes(br#"[{"address":"127.0.0.1:3001"}]"#).unwrap();

        assert_eq!(nodes[0].weight, 100);
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(parse_nodes(b"{not json").is_err());
        assert!(parse_nodes(br#"{"address":"127.0.0.1:3001"}"#).is_err(), "must be an array");
    }

    #[test]
    fn test_parse_rejects_empty_list() {
        assert!(parse_nodes(b"[]").is_err());
    }

    #[test]
    fn test_parse_rejects_blank_address() {
        assert!(parse_nodes(br#"[{"address":"  "}]"#).is_err());
    }

    #[test]
    fn test_parse_rejects_zero_weight() {
        assert!(parse_nodes(br#"[{"address":"127.0.0.1:3001","weight":0}]"#).is_err());
    }

    #[test]
    fn test_load_missing_file_is_config_error() {
        let path = std::env::temp_dir().join("gateway-nodes-does-not-exist.json");
        let result = load_nodes(&path);

        assert!(matches!(result, Err(GatewayError::Config(_))));
    }

    #[test]
    fn test_load_round_trip() {
        let path = temp_node_file(r#"[{"address":"127.0.0.1:3001"},{"address":"127.0.0.1:3002","weight":10}]"#);

        let nodes = load_nodes(&path).unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[1].weight, 10);

        std::fs::remove_file(&path).ok();
    }

    // ============================================================
    // WATCHER TESTS
    // ============================================================

    #[tokio::test]
    async fn test_watcher_fires_on_content_change() {
        let path = temp_node_file(r#"[{"address":"127.0.0.1:3001"}]"#);
        let initial = load_nodes(&path).unwrap();

        let mut rx = NodeListWatcher::new(&path, Duration::from_millis(20)).spawn(initial);

        std::fs::write(&path, r#"[{"address":"127.0.0.1:3002"}]"#).unwrap();

        tokio::time::timeout(Duration::from_secs(5), rx.changed())
            .await
            .expect("watcher did not fire within 5s")
            .expect("watcher channel closed");

        let nodes = rx.borrow_and_update().clone();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].address, "127.0.0.1:3002");

        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn test_watcher_ignores_identical_rewrite() {
        let content = r#"[{"address":"127.0.0.1:3001"}]"#;
        let path = temp_node_file(content);
        let initial = load_nodes(&path).unwrap();

        let mut rx = NodeListWatcher::new(&path, Duration::from_millis(20)).spawn(initial);

        // Rewrite the same bytes; the digest is unchanged so nothing fires.
        std::fs::write(&path, content).unwrap();
        tokio::time::sleep(Duration::from_millis(200)).await;

        assert!(!rx.has_changed().unwrap());

        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn test_watcher_skips_malformed_write_then_recovers() {
        let path = temp_node_file(r#"[{"address":"127.0.0.1:3001"}]"#);
        let initial = load_nodes(&path).unwrap();

        let mut rx = NodeListWatcher::new(&path, Duration::from_millis(20)).spawn(initial);

        std::fs::write(&path, "{half a json").unwrap();
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(
            !rx.has_changed().unwrap(),
            "malformed write must not publish"
        );

        std::fs::write(&path, r#"[{"address":"127.0.0.1:3009","weight":5}]"#).unwrap();
        tokio::time::timeout(Duration::from_secs(5), rx.changed())
            .await
            .expect("watcher did not recover after malformed write")
            .expect("watcher channel closed");

        let nodes = rx.borrow_and_update().clone();
        assert_eq!(nodes[0].address, "127.0.0.1:3009");
        assert_eq!(nodes[0].weight, 5);

        std::fs::remove_file(&path).ok();
    }
}
