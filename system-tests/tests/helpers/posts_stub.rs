// system-tests/tests/helpers/posts_stub.rs
// ============================================================================
// Module: Posts Stub
// Description: Minimal posts collection endpoint for system-tests.
// Purpose: Exercise the contract scenarios without network access.
// Dependencies: axum, serde_json, tokio
// ============================================================================

//! ## Overview
//! Serves `GET /posts` (filtered by `userId` and `title`) and `GET /posts/{id}`
//! from fixture data with the same `content-type` as the live endpoint. Options
//! let tests serve a wrong content type, ignore filters, or return a raw body.

use std::net::TcpListener as StdTcpListener;
use std::sync::Arc;
use std::sync::Mutex;
use std::thread;

use axum::Router;
use axum::extract::Path;
use axum::extract::Query;
use axum::extract::State;
use axum::http::HeaderValue;
use axum::http::StatusCode;
use axum::http::Uri;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use axum::routing::get;
use posts_contract::check::EXPECTED_CONTENT_TYPE;
use serde::Deserialize;
use serde_json::Value;
use serde_json::json;
use tokio::runtime::Builder;
use tokio::sync::oneshot;
use url::Url;

/// Behavior of the stub endpoint.
#[derive(Clone, Debug)]
pub struct PostsStubOptions {
    /// Posts served by the stub.
    pub posts: Vec<Value>,
    /// `content-type` header sent with every response.
    pub content_type: String,
    /// Return the whole collection regardless of query filters.
    pub ignore_filters: bool,
    /// Body sent verbatim instead of JSON for every request.
    pub raw_body: Option<String>,
}

impl Default for PostsStubOptions {
    fn default() -> Self {
        Self {
            posts: fixture_posts(),
            content_type: EXPECTED_CONTENT_TYPE.to_string(),
            ignore_filters: false,
            raw_body: None,
        }
    }
}

/// Fixture posts mirroring the public endpoint's first records.
pub fn fixture_posts() -> Vec<Value> {
    vec![
        post(1, 1, "sunt aut facere repellat provident occaecati excepturi optio reprehenderit"),
        post(1, 2, "qui est esse"),
        post(1, 3, "ea molestias quasi exercitationem repellat qui ipsa sit aut"),
        post(2, 11, "et ea vero quia laudantium autem"),
        post(2, 12, "in quibusdam tempore odit est dolorem"),
        post(3, 21, "asperiores ea ipsam voluptatibus modi minima quia sint"),
    ]
}

/// Builds one post record.
pub fn post(user_id: u64, id: u64, title: &str) -> Value {
    json!({
        "userId": user_id,
        "id": id,
        "title": title,
        "body": format!("body of post {id}"),
    })
}

#[derive(Clone)]
struct StubState {
    posts: Arc<Vec<Value>>,
    content_type: HeaderValue,
    ignore_filters: bool,
    raw_body: Option<String>,
    requests: Arc<Mutex<Vec<String>>>,
}

/// Handle for the stub posts server; shuts the server down on drop.
pub struct PostsStubHandle {
    base_url: Url,
    shutdown: Option<oneshot::Sender<()>>,
    join: Option<thread::JoinHandle<()>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl PostsStubHandle {
    /// Returns the posts collection URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the path and query of every request received, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().map_or_else(|_| Vec::new(), |entries| entries.clone())
    }
}

impl Drop for PostsStubHandle {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }
}

/// Spawns a stub serving the fixture posts.
pub fn spawn_posts_stub() -> Result<PostsStubHandle, String> {
    spawn_posts_stub_with(PostsStubOptions::default())
}

/// Spawns a stub with custom behavior.
pub fn spawn_posts_stub_with(options: PostsStubOptions) -> Result<PostsStubHandle, String> {
    let content_type = HeaderValue::from_str(&options.content_type)
        .map_err(|err| format!("posts stub content type invalid: {err}"))?;
    let listener = StdTcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("posts stub bind failed: {err}"))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("posts stub listener nonblocking failed: {err}"))?;
    let addr = listener.local_addr().map_err(|err| format!("posts stub local addr failed: {err}"))?;
    let base_url = Url::parse(&format!("http://{addr}/posts"))
        .map_err(|err| format!("posts stub url invalid: {err}"))?;

    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        posts: Arc::new(options.posts),
        content_type,
        ignore_filters: options.ignore_filters,
        raw_body: options.raw_body,
        requests: Arc::clone(&requests),
    };
    let app = Router::new()
        .route("/posts", get(list_posts))
        .route("/posts/{id}", get(get_post))
        .with_state(state);
    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let join = thread::spawn(move || {
        let Ok(runtime) = Builder::new_current_thread().enable_all().build() else {
            return;
        };
        runtime.block_on(async move {
            let Ok(listener) = tokio::net::TcpListener::from_std(listener) else {
                return;
            };
            let server = axum::serve(listener, app).with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            });
            let _ = server.await;
        });
    });
    Ok(PostsStubHandle {
        base_url,
        shutdown: Some(shutdown_tx),
        join: Some(join),
        requests,
    })
}

#[derive(Debug, Deserialize)]
struct ListParams {
    #[serde(rename = "userId")]
    user_id: Option<u64>,
    title: Option<String>,
}

async fn list_posts(
    State(state): State<StubState>,
    Query(params): Query<ListParams>,
    uri: Uri,
) -> impl IntoResponse {
    record_request(&state, &uri);
    let matches: Vec<&Value> = state
        .posts
        .iter()
        .filter(|post| {
            state.ignore_filters
                || (params.user_id.is_none_or(|user_id| post["userId"] == json!(user_id))
                    && params.title.as_ref().is_none_or(|title| post["title"] == json!(title)))
        })
        .collect();
    respond(&state, StatusCode::OK, &json!(matches))
}

async fn get_post(
    State(state): State<StubState>,
    Path(id): Path<String>,
    uri: Uri,
) -> impl IntoResponse {
    record_request(&state, &uri);
    let found = id
        .parse::<u64>()
        .ok()
        .and_then(|id| state.posts.iter().find(|post| post["id"] == json!(id)));
    match found {
        Some(post) => respond(&state, StatusCode::OK, post),
        None => respond(&state, StatusCode::NOT_FOUND, &json!({})),
    }
}

fn respond(
    state: &StubState,
    status: StatusCode,
    body: &Value,
) -> (StatusCode, [(axum::http::HeaderName, HeaderValue); 1], String) {
    let body = state.raw_body.clone().unwrap_or_else(|| body.to_string());
    (status, [(CONTENT_TYPE, state.content_type.clone())], body)
}

fn record_request(state: &StubState, uri: &Uri) {
    let entry = uri.path_and_query().map_or_else(|| uri.path().to_string(), ToString::to_string);
    if let Ok(mut guard) = state.requests.lock() {
        guard.push(entry);
    }
}
