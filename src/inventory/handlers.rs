use axum::extract::{Extension, Query};
use axum::http::StatusCode;
use axum::response::Html;
use serde::Deserialize;
use std::sync::Arc;

use super::service::InventoryService;
use super::types::{Dollars, InventoryError};
use crate::view::pages::{render, Page};

/// Query parameters shared by all item endpoints. A missing `name` behaves
/// like an empty one.
#[derive(Debug, Deserialize)]
pub struct ItemQuery {
    #[serde(default)]
    pub name: String,
    pub price: Option<String>,
}

/// GET /home
pub async fn handle_home() -> Html<String> {
    render(&Page::Home)
}

/// GET /list: full inventory snapshot, no lock taken.
pub async fn handle_list(Extension(inventory): Extension<Arc<InventoryService>>) -> Html<String> {
    let items = inventory.snapshot();
    tracing::debug!(count = items.len(), "list rendered");
    render(&Page::List { items })
}

/// GET /price?name=...: cache-only lookup, no lock taken.
pub async fn handle_price(
    Extension(inventory): Extension<Arc<InventoryService>>,
    Query(query): Query<ItemQuery>,
) -> (StatusCode, Html<String>) {
    match inventory.price_of(&query.name) {
        Some(price) => (
            StatusCode::OK,
            render(&Page::Price {
                name: query.name,
                price,
            }),
        ),
        None => {
            tracing::debug!(name = %query.name, "price lookup for unknown item");
            (
                StatusCode::NOT_FOUND,
                render(&Page::PriceMissing { name: query.name }),
            )
        }
    }
}

/// GET /update?name=...&price=...: create or overwrite an item.
///
/// Validation happens before the lock is taken; only a valid price reaches
/// the store.
pub async fn handle_update(
    Extension(inventory): Extension<Arc<InventoryService>>,
    Query(query): Query<ItemQuery>,
) -> (StatusCode, Html<String>) {
    let price = match parse_price(query.price.as_deref()) {
        Ok(price) => price,
        Err(err) => {
            tracing::debug!(name = %query.name, %err, "update rejected");
            return (
                StatusCode::BAD_REQUEST,
                render(&Page::UpdateRejected {
                    reason: err.to_string(),
                }),
            );
        }
    };

    match inventory.upsert(&query.name, price).await {
        Ok(product) => (
            StatusCode::OK,
            render(&Page::Updated {
                name: product.name,
                price: product.price,
            }),
        ),
        Err(err) => {
            tracing::error!(name = %query.name, %err, "store write failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                render(&Page::StoreFailure {
                    detail: err.to_string(),
                }),
            )
        }
    }
}

/// GET /delete?name=...: remove an item from store and cache.
pub async fn handle_delete(
    Extension(inventory): Extension<Arc<InventoryService>>,
    Query(query): Query<ItemQuery>,
) -> (StatusCode, Html<String>) {
    match inventory.remove(&query.name).await {
        Ok(product) => (StatusCode::OK, render(&Page::Deleted { name: product.name })),
        Err(InventoryError::NotFound(name)) => {
            tracing::debug!(name = %name, "delete of unknown item");
            (StatusCode::NOT_FOUND, render(&Page::DeleteMissing { name }))
        }
        Err(err) => {
            tracing::error!(name = %query.name, %err, "store delete failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                render(&Page::StoreFailure {
                    detail: err.to_string(),
                }),
            )
        }
    }
}

/// Validate the raw price field: present, numeric, finite, non-negative.
/// An empty field counts as not set, matching form submission behavior.
pub fn parse_price(raw: Option<&str>) -> Result<Dollars, InventoryError> {
    match raw {
        None | Some("") => Err(InventoryError::MissingPrice),
        Some(value) => value.parse(),
    }
}
