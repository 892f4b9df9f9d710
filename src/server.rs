//! Preview server: renders the site and exposes the language layer over HTTP.

use crate::config::Config;
use crate::i18n::{
    Direction, DocumentAttributes, FileStore, I18nError, Language, LanguageManager, Message,
    MetricsReport, Translation,
};
use crate::pages;
use anyhow::{Context, Result};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

pub type SiteManager = LanguageManager<FileStore, DocumentAttributes>;

/// Shared application state.
///
/// One manager per server: the preview stands in for a single visitor's
/// browser session, so every request sees the same active language.
///
/// Language changes write the preference file synchronously while the lock
/// is held. The file holds a single small JSON object.
#[derive(Clone)]
pub struct AppState {
    i18n: Arc<Mutex<SiteManager>>,
}

impl AppState {
    pub fn new(manager: SiteManager) -> Self {
        Self {
            i18n: Arc::new(Mutex::new(manager)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, SiteManager>, ApiError> {
        self.i18n.lock().map_err(|_| ApiError::StatePoisoned)
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    InvalidLanguage(#[from] I18nError),

    #[error("unknown language '{0}'")]
    UnknownCatalog(String),

    #[error("language state is unavailable")]
    StatePoisoned,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::InvalidLanguage(_) => StatusCode::BAD_REQUEST,
            ApiError::UnknownCatalog(_) => StatusCode::NOT_FOUND,
            ApiError::StatePoisoned => {
                error!("Language manager mutex poisoned");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

#[derive(Debug, Serialize, PartialEq)]
pub struct LanguageState {
    pub language: Language,
    pub direction: Direction,
    pub rtl: bool,
    pub native_name: &'static str,
}

impl LanguageState {
    fn from_manager(i18n: &SiteManager) -> Self {
        let language = i18n.language();
        Self {
            language,
            direction: i18n.direction(),
            rtl: i18n.is_rtl(),
            native_name: language.native_name(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SetLanguageRequest {
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub key: String,
    pub value: serde_json::Value,
    pub found: bool,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/toggle-language", post(toggle_and_redirect))
        .route("/api/language", get(get_language).put(set_language))
        .route("/api/language/toggle", post(toggle_language))
        .route("/api/translate/:key", get(translate))
        .route("/api/catalog/:lang", get(catalog))
        .route("/api/metrics", get(metrics))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the preview server and run until the process is stopped.
pub async fn serve(config: &Config) -> Result<()> {
    let manager = LanguageManager::new(
        FileStore::new(&config.preferences_file),
        DocumentAttributes::default(),
    );
    info!(
        "Restored language '{}' from {}",
        manager.language(),
        config.preferences_file.display()
    );

    let app = router(AppState::new(manager));
    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("✓ Listening on http://{}", addr);
    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

async fn home(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let i18n = state.lock()?;
    Ok(Html(pages::render_home(&*i18n)))
}

async fn health() -> &'static str {
    "OK"
}

async fn toggle_and_redirect(State(state): State<AppState>) -> Result<Redirect, ApiError> {
    state.lock()?.toggle();
    Ok(Redirect::to("/"))
}

async fn get_language(State(state): State<AppState>) -> Result<Json<LanguageState>, ApiError> {
    let i18n = state.lock()?;
    Ok(Json(LanguageState::from_manager(&i18n)))
}

async fn set_language(
    State(state): State<AppState>,
    Json(request): Json<SetLanguageRequest>,
) -> Result<Json<LanguageState>, ApiError> {
    let mut i18n = state.lock()?;
    i18n.set_language_code(&request.code)?;
    Ok(Json(LanguageState::from_manager(&i18n)))
}

async fn toggle_language(State(state): State<AppState>) -> Result<Json<LanguageState>, ApiError> {
    let mut i18n = state.lock()?;
    i18n.toggle();
    Ok(Json(LanguageState::from_manager(&i18n)))
}

async fn translate(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let i18n = state.lock()?;
    let translation = i18n.translate(&key);
    let value = match translation {
        Translation::Text(text) | Translation::Missing(text) => serde_json::json!(text),
        Translation::List(items) => serde_json::json!(items),
    };
    let found = translation.is_found();

    Ok(Json(TranslateResponse { key, value, found }))
}

async fn catalog(
    State(state): State<AppState>,
    Path(lang): Path<String>,
) -> Result<Json<BTreeMap<String, Message>>, ApiError> {
    let language =
        Language::from_code(&lang).map_err(|_| ApiError::UnknownCatalog(lang.clone()))?;
    let catalog = state.lock()?.catalog();

    let entries = catalog
        .subtree(language, "")
        .into_iter()
        .map(|(key, message)| (key.to_string(), message.clone()))
        .collect();
    Ok(Json(entries))
}

async fn metrics(State(state): State<AppState>) -> Result<Json<MetricsReport>, ApiError> {
    Ok(Json(state.lock()?.metrics()))
}
