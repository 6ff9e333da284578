use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::{routing::get, Extension, Router};

use inventory_server::inventory::handlers::{
    handle_delete, handle_home, handle_list, handle_price, handle_update,
};
use inventory_server::inventory::service::InventoryService;
use inventory_server::store::db::InventoryDb;

/// Whole-request deadline; requests running longer are aborted.
const REQUEST_DEADLINE: Duration = Duration::from_secs(5);

const DEFAULT_BIND: &str = "127.0.0.1:8000";
const DEFAULT_DB: &str = "db/inventory.redb";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_arg: Option<String> = None;
    let mut db_arg: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_arg = Some(args[i + 1].clone());
                i += 2;
            }
            "--db" => {
                db_arg = Some(args[i + 1].clone());
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    let bind_addr: SocketAddr = bind_arg
        .or_else(|| std::env::var("INVENTORY_BIND").ok())
        .unwrap_or_else(|| DEFAULT_BIND.to_string())
        .parse()?;

    let db_path = PathBuf::from(
        db_arg
            .or_else(|| std::env::var("INVENTORY_DB").ok())
            .unwrap_or_else(|| DEFAULT_DB.to_string()),
    );

    // The data directory has to exist before the database file can be
    // created inside it.
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    // Failing to open the store is the one fatal startup error.
    let db = match InventoryDb::open(&db_path) {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to open inventory database: {}", e);
            std::process::exit(1);
        }
    };

    // Load the cache before accepting the first connection.
    let inventory = match InventoryService::open(db) {
        Ok(service) => Arc::new(service),
        Err(e) => {
            tracing::error!("Failed to load inventory from store: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Database file: {}", db_path.display());
    tracing::info!("Inventory loaded: {} item(s) in memory", inventory.len());

    let app = Router::new()
        .route("/home", get(handle_home))
        .route("/list", get(handle_list))
        .route("/price", get(handle_price))
        .route("/update", get(handle_update))
        .route("/delete", get(handle_delete))
        .layer(Extension(inventory))
        .layer(middleware::from_fn(enforce_deadline));

    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Request deadline: {:?}", REQUEST_DEADLINE);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Abort any request that outlives the fixed per-request deadline.
async fn enforce_deadline(request: Request, next: Next) -> Response {
    match tokio::time::timeout(REQUEST_DEADLINE, next.run(request)).await {
        Ok(response) => response,
        Err(_) => {
            tracing::error!("request aborted: deadline exceeded");
            StatusCode::REQUEST_TIMEOUT.into_response()
        }
    }
}
