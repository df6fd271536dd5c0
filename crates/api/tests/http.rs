//! HTTP contract tests for the client and supplier routes.
//!
//! The router is wired to the in-memory stores, so these run without a
//! database.

use std::sync::Arc;

use api::{router, AppState};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use db::DbError;
use registry::store::memory::{MemoryOwnerStore, MemoryStore};
use registry::{Client, ClientManager, OwnedStore, Owner, OwnerStore, Supplier, SupplierManager};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

fn test_app(owner_ids: &[Uuid]) -> Router {
    let owners: Arc<dyn OwnerStore> = Arc::new(MemoryOwnerStore::with_owners(
        owner_ids.iter().map(|id| Owner { id: *id, name: "owner".into() }),
    ));
    let state = AppState::new(
        ClientManager::new(owners.clone(), Arc::new(MemoryStore::<Client>::new())),
        SupplierManager::new(owners, Arc::new(MemoryStore::<Supplier>::new())),
    );
    router(state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(b) => request
            .header("content-type", "application/json")
            .body(Body::from(b.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let resp = app.clone().oneshot(request).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn client_lifecycle_over_http() {
    let u1 = Uuid::new_v4();
    let app = test_app(&[u1]);

    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/clients",
        Some(json!({
            "owner_id": u1,
            "cpf": "111",
            "name": "Ana",
            "birth_date": "1990-05-17",
            "phone": "5555-0000"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, Value::Null);

    let (status, body) = send(&app, "GET", &format!("/api/v1/owners/{u1}/clients/cpf/111"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Ana");
    assert_eq!(body["birth_date"], "1990-05-17");
    let id = body["id"].as_str().unwrap().to_string();

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/v1/clients/{id}"),
        Some(json!({ "cpf": "111", "name": "Ana2" })),
    )
    .await;
    assert_eq!(status, StatusCode::ACCEPTED);

    let (status, body) = send(&app, "GET", &format!("/api/v1/clients/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Ana2");
    assert_eq!(body["owner_id"], u1.to_string());

    let (status, body) = send(&app, "GET", &format!("/api/v1/owners/{u1}/clients"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, _) = send(&app, "DELETE", &format!("/api/v1/clients/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, "GET", &format!("/api/v1/clients/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "client not found");
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn duplicate_cpf_returns_conflict_details() {
    let u1 = Uuid::new_v4();
    let app = test_app(&[u1]);
    let payload = json!({ "owner_id": u1, "cpf": "111", "name": "Ana" });

    let (status, _) = send(&app, "POST", "/api/v1/clients", Some(payload.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, "POST", "/api/v1/clients", Some(payload)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "CPF already registered");
    assert_eq!(body["status"], 422);
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn unknown_owner_is_not_found() {
    let app = test_app(&[]);

    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/suppliers",
        Some(json!({ "owner_id": Uuid::new_v4(), "cnpj": "42", "name": "Acme" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "owner not found");
}

#[tokio::test]
async fn supplier_routes_scope_cnpj_per_owner() {
    let (u1, u2) = (Uuid::new_v4(), Uuid::new_v4());
    let app = test_app(&[u1, u2]);

    for owner in [u1, u2] {
        let (status, _) = send(
            &app,
            "POST",
            "/api/v1/suppliers",
            Some(json!({ "owner_id": owner, "cnpj": "42", "name": "Acme" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(&app, "GET", &format!("/api/v1/owners/{u1}/suppliers"), None).await;
    assert_eq!(status, StatusCode::OK);
    let listed = body.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["owner_id"], u1.to_string());

    let (status, _) = send(&app, "GET", &format!("/api/v1/owners/{u2}/suppliers/cnpj/99"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", &format!("/api/v1/suppliers/{}", Uuid::new_v4()), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_body_is_a_bad_request_with_error_details() {
    let app = test_app(&[]);

    let (status, body) = send(&app, "POST", "/api/v1/clients", Some(json!({ "owner_id": "x" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert!(body["message"].is_string());
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn non_uuid_path_segment_is_a_bad_request_with_error_details() {
    let app = test_app(&[]);

    let (status, body) = send(&app, "GET", "/api/v1/suppliers/not-a-uuid", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn supplier_update_onto_a_sibling_cnpj_conflicts() {
    let u1 = Uuid::new_v4();
    let app = test_app(&[u1]);

    for cnpj in ["42", "43"] {
        let (status, _) = send(
            &app,
            "POST",
            "/api/v1/suppliers",
            Some(json!({ "owner_id": u1, "cnpj": cnpj, "name": "Acme" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, second) = send(&app, "GET", &format!("/api/v1/owners/{u1}/suppliers/cnpj/43"), None).await;
    let id = second["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/v1/suppliers/{id}"),
        Some(json!({ "cnpj": "42", "name": "Acme" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "CNPJ already registered");

    let (_, unchanged) = send(&app, "GET", &format!("/api/v1/suppliers/{id}"), None).await;
    assert_eq!(unchanged["cnpj"], "43");
}

#[tokio::test]
async fn client_update_of_unknown_id_is_not_found() {
    let app = test_app(&[]);

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/v1/clients/{}", Uuid::new_v4()),
        Some(json!({ "cpf": "111", "name": "Ana" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "client not found");
}

/// A client store whose backend is always down.
struct BrokenStore;

#[async_trait]
impl OwnedStore<Client> for BrokenStore {
    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Client>, DbError> {
        Err(DbError::NotFound)
    }

    async fn find_by_owner(&self, _owner_id: Uuid) -> Result<Vec<Client>, DbError> {
        Err(DbError::NotFound)
    }

    async fn find_by_tax_id(&self, _tax_id: &str, _owner_id: Uuid) -> Result<Option<Client>, DbError> {
        Err(DbError::NotFound)
    }

    async fn insert(&self, _record: &Client) -> Result<Client, DbError> {
        Err(DbError::NotFound)
    }

    async fn update(&self, _record: &Client) -> Result<Client, DbError> {
        Err(DbError::NotFound)
    }

    async fn delete_by_id(&self, _id: Uuid) -> Result<(), DbError> {
        Err(DbError::NotFound)
    }
}

#[tokio::test]
async fn persistence_failure_is_an_internal_error_with_error_details() {
    let owners: Arc<dyn OwnerStore> = Arc::new(MemoryOwnerStore::default());
    let app = router(AppState::new(
        ClientManager::new(owners.clone(), Arc::new(BrokenStore)),
        SupplierManager::new(owners, Arc::new(MemoryStore::<Supplier>::new())),
    ));

    let (status, body) = send(&app, "GET", &format!("/api/v1/clients/{}", Uuid::new_v4()), None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "internal server error");
    assert_eq!(body["status"], 500);
}
