use std::sync::Arc;

use vellum_server::build_router;
use vellum_server::kv::MemoryKv;
use vellum_server::state::{AppState, ServerConfig};

/// Spin up the HTTP server on an OS-assigned port, returning the base URL.
async fn spawn_test_server() -> String {
    let state = AppState::new(ServerConfig::default(), Arc::new(MemoryKv::new()));
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://127.0.0.1:{}", port)
}

/// Client that reports redirects instead of following them.
fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

#[tokio::test]
async fn save_and_read_note_round_trip() {
    let base = spawn_test_server().await;
    let client = client();

    let resp = client
        .post(format!("{}/notes1", base))
        .body("hello from the wire")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 204);

    let resp = client
        .get(format!("{}/notes1?raw", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "hello from the wire");
}

#[tokio::test]
async fn form_post_saves_decoded_text() {
    let base = spawn_test_server().await;
    let client = client();

    let resp = client
        .post(format!("{}/formnote", base))
        .header("content-type", "application/x-www-form-urlencoded")
        .body("text=hello+world%21")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 204);

    let resp = client
        .get(format!("{}/formnote?raw", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.text().await.unwrap(), "hello world!");
}

#[tokio::test]
async fn empty_post_deletes_note() {
    let base = spawn_test_server().await;
    let client = client();

    let resp = client
        .post(format!("{}/fleeting", base))
        .body("keep me around")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 204);

    let resp = client
        .post(format!("{}/fleeting", base))
        .body("   \n  ")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "Note will be deleted");

    let resp = client
        .get(format!("{}/fleeting?raw", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn root_redirects_to_fresh_note() {
    let base = spawn_test_server().await;
    let resp = client().get(format!("{}/", base)).send().await.unwrap();

    assert_eq!(resp.status(), 302);
    let location = resp.headers().get("location").unwrap().to_str().unwrap();
    let name = location.strip_prefix('/').unwrap();
    assert_eq!(name.len(), 5);
    assert!(name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
}

#[tokio::test]
async fn invalid_note_name_redirects() {
    let base = spawn_test_server().await;
    let client = client();

    let resp = client
        .get(format!("{}/bad.name", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 302);
    assert!(resp.headers().contains_key("location"));

    let resp = client
        .get(format!("{}/{}", base, "a".repeat(65)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 302);

    // The password sub-routes recover the same way
    let resp = client
        .get(format!("{}/bad.name/password-check", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 302);
    assert!(resp.headers().contains_key("location"));
}

#[tokio::test]
async fn missing_note_raw_read_returns_404() {
    let base = spawn_test_server().await;
    let resp = client()
        .get(format!("{}/neverwritten?raw", base))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 404);
    assert_eq!(resp.text().await.unwrap(), "Note not found");
}

#[tokio::test]
async fn cli_user_agent_gets_plaintext() {
    let base = spawn_test_server().await;
    let client = client();

    client
        .post(format!("{}/pipeme", base))
        .body("# Heading\n\nplain body")
        .send()
        .await
        .unwrap();

    let resp = client
        .get(format!("{}/pipeme", base))
        .header("user-agent", "curl/8.4.0")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let content_type = resp.headers().get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("text/plain"));
    assert_eq!(resp.text().await.unwrap(), "# Heading\n\nplain body");
}

#[tokio::test]
async fn browser_gets_editor_page() {
    let base = spawn_test_server().await;
    let client = client();

    client
        .post(format!("{}/editme", base))
        .body("draft <script>alert(1)</script>")
        .send()
        .await
        .unwrap();

    let resp = client
        .get(format!("{}/editme", base))
        .header("user-agent", "Mozilla/5.0")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let html = resp.text().await.unwrap();
    assert!(html.contains("<textarea"));
    assert!(html.contains("Editing <b>editme</b>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!html.contains("<script>alert(1)</script>"));
}

#[tokio::test]
async fn oversized_note_is_rejected() {
    let base = spawn_test_server().await;
    let resp = client()
        .post(format!("{}/biggie", base))
        .body("x".repeat(1024 * 1024 + 1))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 413);
}

#[tokio::test]
async fn password_protection_lifecycle() {
    let base = spawn_test_server().await;
    let client = client();

    // Fresh note reports no protection
    let resp = client
        .get(format!("{}/padlock/password-check", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    // Set a password
    let resp = client
        .post(format!("{}/padlock/password", base))
        .json(&serde_json::json!({"password": "hunter2"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    // Check now reports protected
    let resp = client
        .get(format!("{}/padlock/password-check", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["ok"], true);
    assert_eq!(body["data"]["protected"], true);

    // Verify accepts the right password and refuses the wrong one
    let resp = client
        .post(format!("{}/padlock/password-verify", base))
        .json(&serde_json::json!({"password": "hunter2"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = client
        .post(format!("{}/padlock/password-verify", base))
        .json(&serde_json::json!({"password": "letmein"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);

    // Removal requires the right password
    let resp = client
        .delete(format!("{}/padlock/password", base))
        .json(&serde_json::json!({"password": "letmein"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);

    let resp = client
        .delete(format!("{}/padlock/password", base))
        .json(&serde_json::json!({"password": "hunter2"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    // Back to unprotected
    let resp = client
        .get(format!("{}/padlock/password-check", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn share_snapshot_counts_visits() {
    let base = spawn_test_server().await;
    let client = client();

    let resp = client
        .post(format!("{}/share/doc42", base))
        .json(&serde_json::json!({
            "content": "# Shared\n\nBody text.",
            "lastEditTime": "2024-05-01T10:00:00Z",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["ok"], true);
    assert_eq!(body["data"]["url"], "/share/doc42");

    let resp = client
        .get(format!("{}/share/doc42", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let html = resp.text().await.unwrap();
    assert!(html.contains("# Shared"));
    assert!(html.contains("viewed 1 time(s)"));

    let html = client
        .get(format!("{}/share/doc42", base))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(html.contains("viewed 2 time(s)"));
}

#[tokio::test]
async fn invalid_share_id_rejected() {
    let base = spawn_test_server().await;
    let resp = client()
        .post(format!("{}/share/has-dash", base))
        .json(&serde_json::json!({"content": "x"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn oversized_share_is_rejected() {
    let base = spawn_test_server().await;
    let resp = client()
        .post(format!("{}/share/bigshare", base))
        .json(&serde_json::json!({
            "content": "x".repeat(2 * 1024 * 1024 + 1),
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 413);
}

#[tokio::test]
async fn unknown_share_returns_404() {
    let base = spawn_test_server().await;
    let resp = client()
        .get(format!("{}/share/nothere9", base))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn wrong_method_returns_405() {
    let base = spawn_test_server().await;
    let resp = client()
        .delete(format!("{}/somenote", base))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 405);
}
