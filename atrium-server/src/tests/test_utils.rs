//! Shared scaffolding for the server test suite: an in-memory-backed
//! application with seeded sample data behind an `axum-test` server.

use std::sync::Arc;

use axum_test::TestServer;
use tempfile::TempDir;

use atrium_config::{
    AuthConfig, Config, DatabaseConfig, SeedConfig, ServerConfig,
    UploadsConfig,
};
use atrium_core::{seed, DocumentStore, MemoryStore};

use crate::{build_router, AppState};

pub const TEST_JWT_SECRET: &str = "test_secret_key_for_testing_only";
pub const TEST_ADMIN: &str = "test_admin";
pub const TEST_PASSWORD: &str = "test_password";

pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
    /// Keeps the uploads directory alive for the test's duration.
    pub uploads_dir: TempDir,
}

fn test_config(uploads_root: std::path::PathBuf) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig { url: None },
        uploads: UploadsConfig { root: uploads_root },
        auth: AuthConfig {
            jwt_secret: TEST_JWT_SECRET.to_string(),
            token_expiry_minutes: 60,
        },
        seed: SeedConfig {
            admin_username: TEST_ADMIN.to_string(),
            admin_password: TEST_PASSWORD.to_string(),
        },
    }
}

/// Seeded application over a fresh in-memory store.
pub async fn spawn_app() -> TestApp {
    let uploads_dir = TempDir::new().expect("tempdir");
    let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());
    seed::initialize_database(&store, TEST_ADMIN, TEST_PASSWORD)
        .await
        .expect("seeding");
    let state = AppState::new(store, test_config(uploads_dir.path().into()));
    let server = TestServer::new(build_router(state.clone())).expect("server");
    TestApp {
        server,
        state,
        uploads_dir,
    }
}

/// Log in with the seeded admin and return a bearer token.
pub async fn login(app: &TestApp) -> String {
    let response = app
        .server
        .post("/api/admin/login")
        .json(&serde_json::json!({
            "username": TEST_ADMIN,
            "password": TEST_PASSWORD,
        }))
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], serde_json::json!(true));
    body["access_token"]
        .as_str()
        .expect("access_token in login response")
        .to_string()
}
