use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

/// A stored mem. `content` accumulates every append, newline-separated.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mem {
    pub id: String,
    pub url: String,
    pub content: String,
    pub is_read: bool,
    pub is_archived: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMem {
    pub content: String,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub is_archived: bool,
}

#[derive(Deserialize)]
pub struct AppendMem {
    pub content: String,
}

#[derive(Serialize, Deserialize)]
pub struct MemRef {
    pub id: String,
    pub url: String,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorDetail {
    pub message: String,
}

pub type Db = Arc<RwLock<HashMap<String, Mem>>>;

type ApiError = (StatusCode, Json<ErrorBody>);

/// Shared between the router and whoever started it, so tests can look at
/// what was stored.
#[derive(Clone)]
pub struct AppState {
    pub mems: Db,
    authorization: Arc<str>,
}

impl AppState {
    pub fn new(token: &str) -> Self {
        Self {
            mems: Arc::new(RwLock::new(HashMap::new())),
            authorization: format!("ApiAccessToken {token}").into(),
        }
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/v0/mems", post(create_mem))
        .route("/v0/mems/{id}/append", post(append_mem))
        .with_state(state)
}

pub async fn run(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    axum::serve(listener, app(state)).await
}

fn error(status: StatusCode, message: &str) -> ApiError {
    (
        status,
        Json(ErrorBody {
            error: ErrorDetail {
                message: message.to_string(),
            },
        }),
    )
}

fn authorize(state: &AppState, headers: &HeaderMap) -> Result<(), ApiError> {
    let presented = headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok());
    if presented == Some(&*state.authorization) {
        Ok(())
    } else {
        tracing::warn!("rejecting request with bad authorization");
        Err(error(StatusCode::UNAUTHORIZED, "Invalid API access token"))
    }
}

async fn create_mem(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(input): Json<CreateMem>,
) -> Result<Json<MemRef>, ApiError> {
    authorize(&state, &headers)?;
    let id = Uuid::new_v4().to_string();
    let mem = Mem {
        url: format!("https://mem.ai/m/{id}"),
        id: id.clone(),
        content: input.content,
        is_read: input.is_read,
        is_archived: input.is_archived,
    };
    let reply = MemRef {
        id: mem.id.clone(),
        url: mem.url.clone(),
    };
    state.mems.write().await.insert(id, mem);
    tracing::info!(id = %reply.id, "created mem");
    Ok(Json(reply))
}

async fn append_mem(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(input): Json<AppendMem>,
) -> Result<Json<MemRef>, ApiError> {
    authorize(&state, &headers)?;
    let mut mems = state.mems.write().await;
    let mem = mems
        .get_mut(&id)
        .ok_or_else(|| error(StatusCode::NOT_FOUND, "Mem not found"))?;
    mem.content.push('\n');
    mem.content.push_str(&input.content);
    tracing::info!(id = %mem.id, "appended to mem");
    Ok(Json(MemRef {
        id: mem.id.clone(),
        url: mem.url.clone(),
    }))
}
