//! HTTP Integration Tests
//!
//! Serves the real router on an ephemeral port and drives every endpoint
//! through an HTTP client, covering the observable contract end to end:
//! update → price round-trips, validation rejections, not-found paths, and
//! restart reconciliation.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tempfile::TempDir;

use inventory_server::inventory::handlers::{
    handle_delete, handle_home, handle_list, handle_price, handle_update,
};
use inventory_server::inventory::service::InventoryService;
use inventory_server::store::db::InventoryDb;

/// Spin up a server over the given database file and return its address.
async fn serve(db_path: &Path) -> SocketAddr {
    let db = InventoryDb::open(db_path).unwrap();
    let inventory = Arc::new(InventoryService::open(db).unwrap());

    let app = Router::new()
        .route("/home", get(handle_home))
        .route("/list", get(handle_list))
        .route("/price", get(handle_price))
        .route("/update", get(handle_update))
        .route("/delete", get(handle_delete))
        .layer(Extension(inventory));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn get_text(
    client: &reqwest::Client,
    addr: SocketAddr,
    path: &str,
    query: &[(&str, &str)],
) -> (u16, String) {
    let resp = client
        .get(format!("http://{}{}", addr, path))
        .query(query)
        .send()
        .await
        .unwrap();
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap();
    (status, body)
}

#[tokio::test]
async fn test_home_and_empty_list() {
    let dir = TempDir::new().unwrap();
    let addr = serve(&dir.path().join("inventory.redb")).await;
    let client = reqwest::Client::new();

    let (status, body) = get_text(&client, addr, "/home", &[]).await;
    assert_eq!(status, 200);
    assert!(body.contains("Inventory Server"));

    let (status, body) = get_text(&client, addr, "/list", &[]).await;
    assert_eq!(status, 200);
    assert!(body.contains("<table>"));
}

#[tokio::test]
async fn test_update_then_price_round_trip() {
    let dir = TempDir::new().unwrap();
    let addr = serve(&dir.path().join("inventory.redb")).await;
    let client = reqwest::Client::new();

    let (status, body) =
        get_text(&client, addr, "/update", &[("name", "Widget"), ("price", "12.5")]).await;
    assert_eq!(status, 200);
    assert!(body.contains("Widget"));
    assert!(body.contains("$12.50"));

    let (status, body) = get_text(&client, addr, "/price", &[("name", "Widget")]).await;
    assert_eq!(status, 200);
    assert!(body.contains("$12.50"));

    let (status, body) = get_text(&client, addr, "/list", &[]).await;
    assert_eq!(status, 200);
    assert!(body.contains("Widget"));
    assert!(body.contains("$12.50"));
}

#[tokio::test]
async fn test_update_validation_rejections() {
    let dir = TempDir::new().unwrap();
    let addr = serve(&dir.path().join("inventory.redb")).await;
    let client = reqwest::Client::new();

    // Missing price field.
    let (status, body) = get_text(&client, addr, "/update", &[("name", "Widget")]).await;
    assert_eq!(status, 400);
    assert!(body.contains("price not set"));

    // Non-numeric price.
    let (status, body) =
        get_text(&client, addr, "/update", &[("name", "Widget"), ("price", "abc")]).await;
    assert_eq!(status, 400);
    assert!(body.contains("numerical value"));

    // Negative price.
    let (status, body) =
        get_text(&client, addr, "/update", &[("name", "Widget"), ("price", "-5")]).await;
    assert_eq!(status, 400);
    assert!(body.contains("greater than or equal to 0"));

    // None of the rejected updates may have created the item.
    let (status, _) = get_text(&client, addr, "/price", &[("name", "Widget")]).await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn test_price_and_delete_of_unknown_item() {
    let dir = TempDir::new().unwrap();
    let addr = serve(&dir.path().join("inventory.redb")).await;
    let client = reqwest::Client::new();

    let (status, body) = get_text(&client, addr, "/price", &[("name", "ghost")]).await;
    assert_eq!(status, 404);
    assert!(body.contains("ghost"));

    let (status, body) = get_text(&client, addr, "/delete", &[("name", "ghost")]).await;
    assert_eq!(status, 404);
    assert!(body.contains("ghost"));
}

#[tokio::test]
async fn test_delete_removes_item() {
    let dir = TempDir::new().unwrap();
    let addr = serve(&dir.path().join("inventory.redb")).await;
    let client = reqwest::Client::new();

    let (status, _) =
        get_text(&client, addr, "/update", &[("name", "Widget"), ("price", "12.5")]).await;
    assert_eq!(status, 200);

    let (status, body) = get_text(&client, addr, "/delete", &[("name", "Widget")]).await;
    assert_eq!(status, 200);
    assert!(body.contains("Widget"));

    let (status, _) = get_text(&client, addr, "/price", &[("name", "Widget")]).await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn test_concurrent_updates_to_distinct_names_all_land() {
    let dir = TempDir::new().unwrap();
    let addr = serve(&dir.path().join("inventory.redb")).await;
    let client = reqwest::Client::new();

    let mut handles = Vec::new();
    for i in 0..8u32 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            let name = format!("item-{}", i);
            let price = format!("{}", i);
            let resp = client
                .get(format!("http://{}/update", addr))
                .query(&[("name", name.as_str()), ("price", price.as_str())])
                .send()
                .await
                .unwrap();
            assert_eq!(resp.status().as_u16(), 200);
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let (status, body) = get_text(&client, addr, "/list", &[]).await;
    assert_eq!(status, 200);
    for i in 0..8u32 {
        assert!(body.contains(&format!("item-{}", i)));
    }
}

#[tokio::test]
async fn test_restart_reproduces_inventory() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("inventory.redb");

    {
        let addr = serve(&db_path).await;
        let client = reqwest::Client::new();
        get_text(&client, addr, "/update", &[("name", "apples"), ("price", "1")]).await;
        get_text(&client, addr, "/update", &[("name", "pears"), ("price", "3.25")]).await;
        get_text(&client, addr, "/delete", &[("name", "apples")]).await;
    }

    // A second server over the same file sees exactly the surviving state.
    let addr = serve(&db_path).await;
    let client = reqwest::Client::new();

    let (status, body) = get_text(&client, addr, "/price", &[("name", "pears")]).await;
    assert_eq!(status, 200);
    assert!(body.contains("$3.25"));

    let (status, _) = get_text(&client, addr, "/price", &[("name", "apples")]).await;
    assert_eq!(status, 404);
}
