use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use inventario_storage::InventoryStore;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use crate::api::system::NOME_SERVICO;
use crate::app::build_http_app;
use crate::config::ServerConfig;
use crate::state::AppState;

const TOKEN: &str = "segredo-de-teste";

async fn build_test_app() -> (TempDir, Arc<InventoryStore>, Router) {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("inventario.db");
    let url = format!("sqlite://{}?mode=rwc", db_path.display());
    let store = Arc::new(InventoryStore::connect(&url).await.unwrap());

    let config = ServerConfig {
        http_port: 8000,
        database_url: url,
        api_token: TOKEN.to_string(),
        cors_allowed_origin: None,
    };
    let state = AppState::new(store.clone(), config);
    (dir, store, build_http_app(state))
}

fn get(uri: &str, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    builder.body(Body::empty()).unwrap()
}

fn post_inventario(body: &Value, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/api/inventario")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn raiz_is_public_and_returns_service_name() {
    let (_dir, _store, app) = build_test_app().await;

    let response = app.oneshot(get("/", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["mensagem"], NOME_SERVICO);
}

#[tokio::test]
async fn protected_routes_reject_missing_token() {
    let (_dir, store, app) = build_test_app().await;

    for uri in ["/api/computadores", "/api/historico", "/api/ativos"] {
        let response = app.clone().oneshot(get(uri, None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{uri}");
        let json = body_json(response).await;
        assert_eq!(json["status"], "erro");
        assert_eq!(json["mensagem"], "Não autorizado");
    }

    let payload = json!({"hostname": "PC01", "sistema_operacional": "Linux"});
    let response = app
        .oneshot(post_inventario(&payload, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // a rejected submission must leave no trace in the store
    assert_eq!(store.contar().await.unwrap(), 0);
}

#[tokio::test]
async fn wrong_scheme_and_wrong_token_are_rejected() {
    let (_dir, store, app) = build_test_app().await;
    let payload = json!({"hostname": "PC01", "sistema_operacional": "Linux"});

    for auth in ["Token abc", TOKEN, "Bearer errado", "bearer segredo-de-teste"] {
        let response = app
            .clone()
            .oneshot(post_inventario(&payload, Some(auth)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{auth}");
    }

    assert_eq!(store.contar().await.unwrap(), 0);
}

#[tokio::test]
async fn submit_then_listed_with_wire_field_names() {
    let (_dir, _store, app) = build_test_app().await;

    let payload = json!({
        "hostname": "PC01",
        "sistema_operacional": "Windows 11 Pro",
        "usuario": "maria.silva",
        "memoria_gb": 15.88,
        "processador": "Intel Core i5-10400"
    });
    let response = app
        .clone()
        .oneshot(post_inventario(&payload, Some(&bearer(TOKEN))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "sucesso");
    assert_eq!(json["mensagem"], "Dados recebidos");

    let response = app
        .oneshot(get("/api/computadores", Some(&bearer(TOKEN))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let computadores = json["computadores"].as_array().unwrap();
    assert_eq!(computadores.len(), 1);
    assert_eq!(computadores[0]["hostname"], "PC01");
    assert_eq!(computadores[0]["sistema_operacional"], "Windows 11 Pro");
    assert_eq!(computadores[0]["usuario"], "maria.silva");
    assert_eq!(computadores[0]["memoria_gb"], 15.88);
    assert_eq!(computadores[0]["processador"], "Intel Core i5-10400");
    assert!(computadores[0].get("ultima_coleta").is_some());
}

#[tokio::test]
async fn resubmission_overwrites_instead_of_duplicating() {
    let (_dir, store, app) = build_test_app().await;

    let primeiro = json!({"hostname": "PC01", "sistema_operacional": "Linux"});
    let segundo = json!({"hostname": "PC01", "sistema_operacional": "Windows"});

    for payload in [&primeiro, &segundo] {
        let response = app
            .clone()
            .oneshot(post_inventario(payload, Some(&bearer(TOKEN))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    assert_eq!(store.contar().await.unwrap(), 1);
    let response = app
        .oneshot(get("/api/computadores", Some(&bearer(TOKEN))))
        .await
        .unwrap();
    let json = body_json(response).await;
    let computadores = json["computadores"].as_array().unwrap();
    assert_eq!(computadores.len(), 1);
    assert_eq!(computadores[0]["sistema_operacional"], "Windows");
}

#[tokio::test]
async fn empty_required_fields_are_rejected() {
    let (_dir, store, app) = build_test_app().await;

    for payload in [
        json!({"hostname": "", "sistema_operacional": "Linux"}),
        json!({"hostname": "PC01", "sistema_operacional": "   "}),
        json!({"hostname": "PC01", "sistema_operacional": "Linux", "memoria_gb": -1.0}),
    ] {
        let response = app
            .clone()
            .oneshot(post_inventario(&payload, Some(&bearer(TOKEN))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = body_json(response).await;
        assert_eq!(json["status"], "erro");
    }

    assert_eq!(store.contar().await.unwrap(), 0);
}

#[tokio::test]
async fn malformed_json_is_a_client_error() {
    let (_dir, store, app) = build_test_app().await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/inventario")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, bearer(TOKEN))
        .body(Body::from("{nao é json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert!(response.status().is_client_error());
    assert_eq!(store.contar().await.unwrap(), 0);
}

#[tokio::test]
async fn historico_and_ativos_agree() {
    let (_dir, _store, app) = build_test_app().await;

    for hostname in ["PC02", "PC01"] {
        let payload = json!({"hostname": hostname, "sistema_operacional": "Linux"});
        let response = app
            .clone()
            .oneshot(post_inventario(&payload, Some(&bearer(TOKEN))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .clone()
        .oneshot(get("/api/historico", Some(&bearer(TOKEN))))
        .await
        .unwrap();
    let historico = body_json(response).await;
    let mut nomes_historico: Vec<String> = historico["historico"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["hostname"].as_str().unwrap().to_string())
        .collect();

    let response = app
        .oneshot(get("/api/ativos", Some(&bearer(TOKEN))))
        .await
        .unwrap();
    let ativos = body_json(response).await;
    let nomes_ativos: Vec<String> = ativos["ativos"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["hostname"].as_str().unwrap().to_string())
        .collect();

    // ativos comes back in hostname order
    assert_eq!(nomes_ativos, vec!["PC01", "PC02"]);

    nomes_historico.sort();
    assert_eq!(nomes_historico, nomes_ativos);
}
