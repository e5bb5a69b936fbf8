use axum::routing::{any, get};
use axum::{Extension, Router};
use search_gateway::config::loader::load_nodes;
use search_gateway::config::watcher::NodeListWatcher;
use search_gateway::gateway::handlers::{handle_nodes, handle_proxy};
use search_gateway::metasearch::handlers::handle_meta_search;
use search_gateway::metasearch::orchestrator::MetaSearchOrchestrator;
use search_gateway::ring::manager::RingManager;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 5 {
        eprintln!(
            "Usage: {} --bind <addr:port> --nodes <path> [--poll-ms <n>]",
            args[0]
        );
        eprintln!(
            "Example: {} --bind 127.0.0.1:8080 --nodes nodes.json",
            args[0]
        );
        std::process::exit(1);
    }

    let mut bind_addr: Option<SocketAddr> = None;
    let mut nodes_path: Option<PathBuf> = None;
    let mut poll_ms: u64 = 1000;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = Some(args[i + 1].parse()?);
                i += 2;
            }
            "--nodes" => {
                nodes_path = Some(PathBuf::from(&args[i + 1]));
                i += 2;
            }
            "--poll-ms" => {
                poll_ms = args[i + 1].parse()?;
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    let bind_addr = bind_addr.expect("--bind is required");
    let nodes_path = nodes_path.expect("--nodes is required");

    tracing::info!("Starting gateway on {}", bind_addr);
    tracing::info!("Node list: {}", nodes_path.display());

    // 1. Ring: the initial node list must load; later reload failures only log.
    let manager = Arc::new(RingManager::new());
    let initial = load_nodes(&nodes_path)?;
    manager.reload(&initial)?;

    // 2. Config watcher: rebuild the ring on every node-list change.
    let mut changes =
        NodeListWatcher::new(&nodes_path, Duration::from_millis(poll_ms)).spawn(initial);
    let reload_manager = manager.clone();
    tokio::spawn(async move {
        while changes.changed().await.is_ok() {
            let nodes = changes.borrow_and_update().clone();
            if let Err(e) = reload_manager.reload(&nodes) {
                tracing::error!("Reload rejected, keeping previous ring: {}", e);
            }
        }
    });

    // 3. Shared upstream client and the orchestrator.
    let client = reqwest::Client::new();
    let orchestrator = Arc::new(MetaSearchOrchestrator::new(manager.clone(), client.clone()));

    // 4. HTTP router:
    let app = Router::new()
        .route("/search", get(handle_meta_search))
        .route("/api/query", any(handle_proxy))
        .route("/nodes", get(handle_nodes))
        .layer(Extension(manager))
        .layer(Extension(orchestrator))
        .layer(Extension(client));

    tracing::info!("Gateway listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
