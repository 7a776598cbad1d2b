//! Plain-text greeting routes.

use axum::extract::Query;
use std::collections::HashMap;

pub async fn root() -> &'static str {
    "Hello world - successfully connected"
}

/// GET /hello?name=Steve
pub async fn hello(Query(params): Query<HashMap<String, String>>) -> String {
    greeting(params.get("name").map(String::as_str))
}

pub fn greeting(name: Option<&str>) -> String {
    match name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => format!("Hello {}! Welcome to National Parks finder!", name),
        None => "Hello! Welcome to National Parks finder!".to_string(),
    }
}
