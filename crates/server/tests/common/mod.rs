//! # Common Test Utilities
//!
//! `TestApp` spawns the real server on a random port, configured from a
//! generated `config.yml` whose provider URLs point at an
//! `httpmock::MockServer` standing in for the upstream generation APIs.

// Allow unused code because this is a test utility module, and not all
// functions might be used by every test file that includes it.
#![allow(unused)]

use anyhow::Result;
use httpmock::MockServer;
use reqwest::Client;
use std::{fs::File, io::Write, net::SocketAddr};
use tahrir_server::{config, router, state::build_app_state};
use tempfile::{tempdir, TempDir};
use tokio::{net::TcpListener, task::JoinHandle};

/// The mock-server path standing in for the GapGPT chat-completions API.
pub const GAPGPT_PATH: &str = "/v1/chat/completions";
/// The mock-server path standing in for the Gemini generateContent API.
pub const GEMINI_PATH: &str = "/v1beta/models/gemini-2.0-flash:generateContent";

pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub mock_server: MockServer,
    _config_dir: TempDir,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestApp {
    /// Spawns the server with both providers configured with test keys.
    pub async fn spawn() -> Result<Self> {
        Self::spawn_with_keys(Some("gapgpt-test-key"), Some("gemini-test-key")).await
    }

    /// Spawns the server with explicit per-provider keys; `None` leaves the
    /// key unset, the way an unconfigured deployment would.
    pub async fn spawn_with_keys(
        gapgpt_key: Option<&str>,
        gemini_key: Option<&str>,
    ) -> Result<Self> {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();

        let mock_server = MockServer::start();
        let config_dir = tempdir()?;
        let config_path = config_dir.path().join("config.yml");
        let config_content = format!(
            r#"
port: 0
providers:
  gapgpt:
    api_url: "{gapgpt_url}"
    api_key: {gapgpt_key}
    model_name: "gpt-4o"
  gemini:
    api_url: "{gemini_url}"
    api_key: {gemini_key}
    model_name: "gemini-2.0-flash"
"#,
            gapgpt_url = mock_server.url(GAPGPT_PATH),
            gemini_url = mock_server.url(GEMINI_PATH),
            gapgpt_key = yaml_string(gapgpt_key),
            gemini_key = yaml_string(gemini_key),
        );
        let mut file = File::create(&config_path)?;
        file.write_all(config_content.as_bytes())?;

        let config = config::get_config(Some(config_path.to_str().unwrap()))?;
        let app_state = build_app_state(config);

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr: SocketAddr = listener.local_addr()?;
        let address = format!("http://{addr}");

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
        let server_handle = tokio::spawn(async move {
            let app = router::create_router(app_state);
            let server = axum::serve(listener, app).with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            });
            if let Err(e) = server.await {
                tracing::error!("[TestApp] Server error: {}", e);
            }
        });

        Ok(Self {
            address,
            client: Client::new(),
            mock_server,
            _config_dir: config_dir,
            _server_handle: server_handle,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    /// POSTs a payload to the generation endpoint.
    pub async fn generate(&self, payload: &serde_json::Value) -> Result<reqwest::Response> {
        Ok(self
            .client
            .post(format!("{}/generate/article", self.address))
            .json(payload)
            .send()
            .await?)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

fn yaml_string(value: Option<&str>) -> String {
    match value {
        Some(v) => format!("\"{v}\""),
        None => "null".to_string(),
    }
}
