#![allow(dead_code)]

use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use anyhow::{Context, Result, anyhow};
use axum::Json;
use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use serde_json::{Value, json};

use portfolio::model::{ApplicationRecord, Enablement};

/// In-memory backend state shared with the stub's handlers.
#[derive(Default)]
pub struct StubState {
    pub apps: Vec<ApplicationRecord>,
    /// Raw `GET /api/submissions` entries.
    pub submissions: Vec<Value>,
    pub fail_load: bool,
    pub fail_save: bool,
    pub fail_update: bool,
    /// Answer `PUT /api/app/{name}` with 204 and no body.
    pub quiet_update: bool,
    /// `METHOD path` of every API request, in arrival order.
    pub requests: Vec<String>,
}

type Shared = Arc<Mutex<StubState>>;

pub struct ServerGuard {
    pub base_url: String,
    state: Shared,
    shutdown: Option<tokio::sync::oneshot::Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl ServerGuard {
    pub fn state(&self) -> MutexGuard<'_, StubState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    pub fn remote(&self, environment: &str) -> portfolio::model::RemoteConfig {
        portfolio::model::RemoteConfig {
            base_url: self.base_url.clone(),
            environment: environment.to_string(),
        }
    }
}

impl Drop for ServerGuard {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

pub fn app(name: &str, change: &str) -> ApplicationRecord {
    ApplicationRecord {
        app_name: name.to_string(),
        change_number: change.to_string(),
        application_owner: "ops".to_string(),
        hosts: vec![format!("{}.example.com", name.to_lowercase().replace(' ', "-"))],
        ..Default::default()
    }
    .with_enablement(Enablement::Enabled)
}

pub fn submission(app: &str, decision: &str, submitted_at: &str, env: &str) -> Value {
    json!({
        "appData": { "appName": app, "changeNumber": "CHG-1", "hosts": [] },
        "formSubmission": {
            "changeNumber": "CHG-1",
            "approverName": "Dana Approver",
            "approverEmail": "dana@example.com",
            "decision": decision,
            "environment": env
        },
        "submittedAt": submitted_at,
        "status": "processed"
    })
}

pub fn spawn_stub(initial: StubState) -> Result<ServerGuard> {
    let state: Shared = Arc::new(Mutex::new(initial));
    let (addr_tx, addr_rx) = std::sync::mpsc::channel::<Result<String, String>>();
    let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();

    let app = router(state.clone());
    let thread = thread::spawn(move || {
        let rt = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(err) => {
                let _ = addr_tx.send(Err(format!("build runtime: {}", err)));
                return;
            }
        };
        rt.block_on(async move {
            let listener = match tokio::net::TcpListener::bind("127.0.0.1:0").await {
                Ok(l) => l,
                Err(err) => {
                    let _ = addr_tx.send(Err(format!("bind: {}", err)));
                    return;
                }
            };
            let addr = match listener.local_addr() {
                Ok(a) => a,
                Err(err) => {
                    let _ = addr_tx.send(Err(format!("local addr: {}", err)));
                    return;
                }
            };
            let _ = addr_tx.send(Ok(format!("http://{}", addr)));
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = stop_rx.await;
                })
                .await;
        });
    });

    let base_url = addr_rx
        .recv_timeout(Duration::from_secs(5))
        .context("stub server did not report its address")?
        .map_err(|e| anyhow!(e))?;
    let guard = ServerGuard {
        base_url,
        state,
        shutdown: Some(stop_tx),
        thread: Some(thread),
    };
    wait_for_healthz(&guard.base_url)?;
    Ok(guard)
}

pub fn wait_for_healthz(base_url: &str) -> Result<()> {
    let client = reqwest::blocking::Client::new();
    let start = Instant::now();
    loop {
        if start.elapsed() > Duration::from_secs(5) {
            anyhow::bail!("stub did not become healthy at {}/healthz", base_url);
        }
        match client.get(format!("{}/healthz", base_url)).send() {
            Ok(resp) if resp.status().is_success() => return Ok(()),
            _ => thread::sleep(Duration::from_millis(20)),
        }
    }
}

fn router(state: Shared) -> Router {
    Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .route("/api/apps", get(list_apps).put(replace_apps))
        .route("/api/app/:name", put(update_app).delete(delete_app))
        .route("/api/submissions", get(list_submissions))
        .with_state(state)
}

fn lock(state: &Shared) -> MutexGuard<'_, StubState> {
    match state.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

async fn list_apps(State(state): State<Shared>) -> Response {
    let mut st = lock(&state);
    st.requests.push("GET /api/apps".to_string());
    if st.fail_load {
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    }
    Json(st.apps.clone()).into_response()
}

async fn replace_apps(
    State(state): State<Shared>,
    Json(apps): Json<Vec<ApplicationRecord>>,
) -> Response {
    let mut st = lock(&state);
    st.requests.push("PUT /api/apps".to_string());
    if st.fail_save {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    st.apps = apps;
    Json(json!({ "message": "saved" })).into_response()
}

async fn update_app(
    State(state): State<Shared>,
    Path(name): Path<String>,
    Json(record): Json<ApplicationRecord>,
) -> Response {
    let mut st = lock(&state);
    st.requests.push(format!("PUT /api/app/{}", name));
    if st.fail_update {
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    }
    let quiet = st.quiet_update;
    let Some(slot) = st.apps.iter_mut().find(|a| a.app_name == name) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    *slot = record.clone();
    if quiet {
        StatusCode::NO_CONTENT.into_response()
    } else {
        Json(record).into_response()
    }
}

async fn delete_app(State(state): State<Shared>, Path(name): Path<String>) -> Response {
    let mut st = lock(&state);
    st.requests.push(format!("DELETE /api/app/{}", name));
    let before = st.apps.len();
    st.apps.retain(|a| a.app_name != name);
    if st.apps.len() == before {
        return StatusCode::NOT_FOUND.into_response();
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn list_submissions(State(state): State<Shared>) -> Response {
    let mut st = lock(&state);
    st.requests.push("GET /api/submissions".to_string());
    if st.fail_load {
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    }
    Json(st.submissions.clone()).into_response()
}
