//! Vellum server binary.
//!
//! Wires configuration to a storage backend and serves the router:
//! in-memory KV by default, SQLite when `--data-dir` is set.

use std::path::Path;
use std::sync::Arc;

use clap::Parser;

use vellum_server::build_router;
use vellum_server::kv::{KvStore, MemoryKv, SqliteKv};
use vellum_server::state::{AppState, ServerConfig};

// ── CLI Arguments ─────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "vellum-server", version, about = "Vellum Markdown scratchpad server")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = 8080, env = "VELLUM_PORT")]
    port: u16,

    /// Data directory for persistent storage (omit for in-memory)
    #[arg(long, env = "VELLUM_DATA_DIR")]
    data_dir: Option<String>,

    /// Maximum note body size in bytes
    #[arg(long, default_value_t = 1024 * 1024, env = "VELLUM_MAX_NOTE_BYTES")]
    max_note_bytes: usize,

    /// Maximum share snapshot content size in bytes
    #[arg(long, default_value_t = 2 * 1024 * 1024, env = "VELLUM_MAX_SNAPSHOT_BYTES")]
    max_snapshot_bytes: usize,
}

// ── Entry Point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vellum_server=info,tower_http=info".into()),
        )
        .init();

    let args = Args::parse();

    let config = ServerConfig {
        port: args.port,
        data_dir: args.data_dir,
        max_note_bytes: args.max_note_bytes,
        max_snapshot_bytes: args.max_snapshot_bytes,
    };

    let kv: Arc<dyn KvStore> = match &config.data_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir).expect("Failed to create data directory");
            let db_path = Path::new(dir).join("vellum.db");
            let kv = SqliteKv::open(&db_path).expect("Failed to open database");
            tracing::info!(path = %db_path.display(), "Using SQLite storage");
            Arc::new(kv)
        }
        None => {
            tracing::info!("Using in-memory storage (notes vanish on restart)");
            Arc::new(MemoryKv::new())
        }
    };

    let state = AppState::new(config, kv);
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", args.port);
    tracing::info!("Vellum server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server error");
}

// ── Tests ─────────────────────────────────────────────────────────────────────
