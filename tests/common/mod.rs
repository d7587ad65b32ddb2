#![allow(dead_code)]

use axum::{
    Router,
    extract::{Path, RawQuery, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use serde_json::{Value, json};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use castfinder::config::Config;

/// Canned answer for one fake upstream endpoint.
#[derive(Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub body: String,
    pub delay: Option<Duration>,
}

impl Reply {
    pub fn json(body: Value) -> Reply {
        Reply {
            status: StatusCode::OK,
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn status(status: StatusCode) -> Reply {
        Reply {
            status,
            body: json!({"status_message": "nope"}).to_string(),
            delay: None,
        }
    }

    pub fn raw(body: &str) -> Reply {
        Reply {
            status: StatusCode::OK,
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Reply {
        self.delay = Some(delay);
        self
    }
}

#[derive(Default)]
pub struct Recorded {
    search_hits: AtomicUsize,
    credits_hits: AtomicUsize,
    search_queries: Mutex<Vec<String>>,
    credits_queries: Mutex<Vec<String>>,
    credit_ids: Mutex<Vec<u64>>,
}

impl Recorded {
    pub fn search_hits(&self) -> usize {
        self.search_hits.load(Ordering::SeqCst)
    }

    pub fn credits_hits(&self) -> usize {
        self.credits_hits.load(Ordering::SeqCst)
    }

    /// Raw, still percent-encoded query string of the last search.
    pub fn last_search_query(&self) -> Option<String> {
        self.search_queries.lock().unwrap().last().cloned()
    }

    pub fn last_credits_query(&self) -> Option<String> {
        self.credits_queries.lock().unwrap().last().cloned()
    }

    pub fn credit_ids(&self) -> Vec<u64> {
        self.credit_ids.lock().unwrap().clone()
    }
}

struct FakeState {
    search: Reply,
    credits: Reply,
    recorded: Arc<Recorded>,
}

pub struct FakeUpstream {
    pub base_url: String,
    pub recorded: Arc<Recorded>,
}

impl FakeUpstream {
    pub fn config(&self) -> Config {
        Config::for_upstream(&self.base_url, "secret")
    }
}

type Canned = (StatusCode, [(header::HeaderName, &'static str); 1], String);

async fn respond(reply: &Reply) -> Canned {
    if let Some(delay) = reply.delay {
        tokio::time::sleep(delay).await;
    }
    (
        reply.status,
        [(header::CONTENT_TYPE, "application/json")],
        reply.body.clone(),
    )
}

async fn search_person(
    State(state): State<Arc<FakeState>>,
    RawQuery(query): RawQuery,
) -> impl IntoResponse {
    state.recorded.search_hits.fetch_add(1, Ordering::SeqCst);
    state
        .recorded
        .search_queries
        .lock()
        .unwrap()
        .push(query.unwrap_or_default());
    respond(&state.search).await
}

async fn movie_credits(
    State(state): State<Arc<FakeState>>,
    Path(id): Path<u64>,
    RawQuery(query): RawQuery,
) -> impl IntoResponse {
    state.recorded.credits_hits.fetch_add(1, Ordering::SeqCst);
    state.recorded.credit_ids.lock().unwrap().push(id);
    state
        .recorded
        .credits_queries
        .lock()
        .unwrap()
        .push(query.unwrap_or_default());
    respond(&state.credits).await
}

/// Starts a fake upstream API on an ephemeral port.
pub async fn spawn_upstream(search: Reply, credits: Reply) -> FakeUpstream {
    let recorded = Arc::new(Recorded::default());
    let state = Arc::new(FakeState {
        search,
        credits,
        recorded: recorded.clone(),
    });
    let app = Router::new()
        .route("/3/search/person", get(search_person))
        .route("/3/person/:id/movie_credits", get(movie_credits))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeUpstream {
        base_url: format!("http://{addr}/3"),
        recorded,
    }
}

/// Base URL of a port nobody listens on.
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/3")
}

pub fn person_json(id: u64, name: &str, profile_path: Option<&str>) -> Value {
    json!({
        "adult": false,
        "id": id,
        "name": name,
        "profile_path": profile_path,
        "popularity": 10.5,
        "known_for_department": "Acting",
        "known_for": [{"title": "Forrest Gump", "media_type": "movie"}, {"name": "Band of Brothers", "media_type": "tv"}],
    })
}

pub fn search_results(people: Vec<Value>) -> Reply {
    let total = people.len();
    Reply::json(json!({
        "page": 1,
        "results": people,
        "total_pages": 1,
        "total_results": total,
    }))
}
