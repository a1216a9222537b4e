use std::sync::Arc;

use axum_test::TestServer;
use fake::faker::company::en::{Buzzword, CompanyName};
use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use serde_json::{json, Value};

use crate::core::config::AppConfig;
use crate::core::router::{api_routes, with_layers};
use crate::modules::store::MemoryStore;

/// Full application router over a fresh in-memory store
pub fn test_server() -> TestServer {
    let app = with_layers(
        api_routes(Arc::new(MemoryStore::new())),
        &AppConfig::default(),
    );
    TestServer::new(app).expect("failed to build test server")
}

pub fn service_payload(status: i64) -> Value {
    json!({
        "name": CompanyName().fake::<String>(),
        "description": Sentence(3..8).fake::<String>(),
        "status": status,
    })
}

pub fn blog_payload(title: &str, service_id: &str, status: i64) -> Value {
    json!({
        "title": title,
        "subtitle": Buzzword().fake::<String>(),
        "description": Sentence(5..12).fake::<String>(),
        "image_url": "https://cdn.example.com/cover.png",
        "service": service_id,
        "status": status,
    })
}

pub fn contact_payload(service_id: &str) -> Value {
    json!({
        "name": Name().fake::<String>(),
        "email": SafeEmail().fake::<String>(),
        "phone": PhoneNumber().fake::<String>(),
        "message": Sentence(4..10).fake::<String>(),
        "service": service_id,
    })
}

/// Create a service over HTTP and return its id
pub async fn create_service(server: &TestServer, status: i64) -> String {
    let body: Value = server
        .post("/api/services")
        .json(&service_payload(status))
        .await
        .json();
    body["data"]["id"]
        .as_str()
        .expect("service id in response")
        .to_string()
}

/// Create a blog over HTTP and return the `data` object
pub async fn create_blog(server: &TestServer, title: &str, service_id: &str, status: i64) -> Value {
    let body: Value = server
        .post("/api/blog/create")
        .json(&blog_payload(title, service_id, status))
        .await
        .json();
    body["data"].clone()
}
