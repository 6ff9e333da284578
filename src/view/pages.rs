use axum::response::Html;

use crate::inventory::types::{Dollars, Product};

/// Every page the server renders, one typed variant per view.
#[derive(Debug)]
pub enum Page {
    /// Landing page.
    Home,
    /// Full inventory listing.
    List { items: Vec<Product> },
    /// Price of one item.
    Price { name: String, price: Dollars },
    /// Price lookup for an unknown item.
    PriceMissing { name: String },
    /// Confirmation of a create/update, echoing the stored values.
    Updated { name: String, price: Dollars },
    /// Create/update rejected by validation.
    UpdateRejected { reason: String },
    /// Confirmation of a delete.
    Deleted { name: String },
    /// Delete of an unknown item.
    DeleteMissing { name: String },
    /// A durable-store operation failed.
    StoreFailure { detail: String },
}

/// Render a page to a complete HTML response.
pub fn render(page: &Page) -> Html<String> {
    let (title, body) = match page {
        Page::Home => (
            "inventory".to_string(),
            "<h1>Inventory Server</h1>\
             <p>Endpoints: <a href=\"/list\">/list</a>, /price?name=, \
             /update?name=&amp;price=, /delete?name=</p>"
                .to_string(),
        ),
        Page::List { items } => ("inventory: list".to_string(), list_body(items)),
        Page::Price { name, price } => (
            format!("price: {}", name),
            format!("<p>{}: {}</p>", escape(name), price),
        ),
        Page::PriceMissing { name } => (
            "price: not found".to_string(),
            format!("<p>no such item: '{}'</p>", escape(name)),
        ),
        Page::Updated { name, price } => (
            format!("updated: {}", name),
            format!("<p>stored '{}' at {}</p>", escape(name), price),
        ),
        Page::UpdateRejected { reason } => (
            "update rejected".to_string(),
            format!("<p>{}</p>", escape(reason)),
        ),
        Page::Deleted { name } => (
            format!("deleted: {}", name),
            format!("<p>deleted '{}'</p>", escape(name)),
        ),
        Page::DeleteMissing { name } => (
            "delete: not found".to_string(),
            format!("<p>no such item: '{}'</p>", escape(name)),
        ),
        Page::StoreFailure { detail } => (
            "inventory database failure".to_string(),
            format!(
                "<p>inventory database failure, try again later</p><p>{}</p>",
                escape(detail)
            ),
        ),
    };

    Html(format!(
        "<!DOCTYPE html>\n<html><head><title>{}</title></head>\n<body>\n{}\n</body></html>\n",
        escape(&title),
        body
    ))
}

fn list_body(items: &[Product]) -> String {
    let mut body = String::from("<h1>Inventory</h1>\n<table>\n<tr><th>item</th><th>price</th></tr>\n");
    for item in items {
        body.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>\n",
            escape(&item.name),
            item.price
        ));
    }
    body.push_str("</table>");
    body
}

/// Minimal HTML escaping for interpolated user input.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
