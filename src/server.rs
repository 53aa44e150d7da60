//! HTTP server: routes every site path through the language router.

use crate::api::ApiClient;
use crate::config::Config;
use crate::forms::{submit_booking, submit_contact, BookingForm, ContactForm};
use crate::i18n::Language;
use crate::metrics::{MetricsReport, SiteMetrics};
use crate::pages::{FormState, PageContext};
use crate::routing::{resolve, PageKind, Resolution, RouteEntry, RouteTable, RouteTree};
use anyhow::{Context, Result};
use axum::{
    extract::{Form, FromRequest, Request, State},
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Redirect, Response},
    routing::{any, get},
    Json, Router,
};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, TraceLayer};
use tracing::info;

/// Shared, read-only state of all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub api: ApiClient,
    pub routes: Arc<RouteTable>,
}

impl AppState {
    /// Build the state, validating the route table.
    pub fn new(config: Config) -> Result<Self> {
        let api = ApiClient::from_config(&config)?;
        let routes = RouteTable::validated()?;

        Ok(Self {
            config: Arc::new(config),
            api,
            routes: Arc::new(routes),
        })
    }

    fn page_context<'a>(&'a self, tree: &'a RouteTree) -> PageContext<'a> {
        PageContext {
            api: &self.api,
            tree,
            news_limit: self.config.news_limit,
        }
    }

    fn not_found(&self, language: Language) -> Response {
        match self.routes.tree(language) {
            Some(tree) => html_response(
                StatusCode::NOT_FOUND,
                self.page_context(tree).render_not_found(),
            ),
            None => StatusCode::NOT_FOUND.into_response(),
        }
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .route("/api", any(api_not_found))
        .route("/api/*path", any(api_not_found))
        .route("/", get(show_page))
        .route("/*path", get(show_page).post(submit_page))
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(state: AppState) -> Result<()> {
    let addr = state.config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("✓ Listening on {}", listener.local_addr()?);
    info!("  API base URL: {}", state.api.base_url());

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}

async fn health() -> &'static str {
    "OK"
}

async fn metrics() -> Json<MetricsReport> {
    Json(SiteMetrics::global().report())
}

/// The backend API is not served by the site; `/api` paths never reach the
/// language router.
async fn api_not_found(uri: Uri) -> StatusCode {
    tracing::debug!("No backend API on this site: {}", uri.path());
    StatusCode::NOT_FOUND
}

/// Markup responds as `text/html; charset=utf-8`.
fn html_response(status: StatusCode, markup: maud::Markup) -> Response {
    (status, markup).into_response()
}

async fn show_page(State(state): State<AppState>, uri: Uri) -> Response {
    match resolve(&state.routes, uri.path()) {
        Resolution::Redirect { location } => Redirect::to(&location).into_response(),
        Resolution::NotFound { language } => state.not_found(language),
        Resolution::Page { language, entry } => match state.routes.tree(language) {
            Some(tree) => html_response(
                StatusCode::OK,
                state.page_context(tree).render(entry, None).await,
            ),
            None => StatusCode::NOT_FOUND.into_response(),
        },
    }
}

/// Deserialize the urlencoded body into the form of the resolved page.
/// Missing fields take the form's defaults; unknown fields such as `lang`
/// are ignored.
async fn extract_form<T: DeserializeOwned>(
    state: &AppState,
    request: Request,
) -> Result<T, Response> {
    Form::<T>::from_request(request, state)
        .await
        .map(|Form(form)| form)
        .map_err(IntoResponse::into_response)
}

async fn submit_form(
    state: &AppState,
    tree: &RouteTree,
    entry: RouteEntry,
    request: Request,
) -> Response {
    let language = tree.language;

    let form_state = match entry.page {
        PageKind::Contact => {
            let form: ContactForm = match extract_form(state, request).await {
                Ok(form) => form,
                Err(rejection) => return rejection,
            };
            let notice = submit_contact(&state.api, language, &form).await;
            FormState::Contact(form, notice)
        }
        PageKind::Tours => {
            let form: BookingForm = match extract_form(state, request).await {
                Ok(form) => form,
                Err(rejection) => return rejection,
            };
            let notice = submit_booking(&state.api, language, &form).await;
            FormState::Booking(form, notice)
        }
        _ => {
            return (StatusCode::METHOD_NOT_ALLOWED, [(header::ALLOW, "GET")]).into_response()
        }
    };

    let markup = state
        .page_context(tree)
        .render(entry, Some(form_state))
        .await;
    html_response(StatusCode::OK, markup)
}

async fn submit_page(State(state): State<AppState>, request: Request) -> Response {
    let path = request.uri().path().to_string();

    match resolve(&state.routes, &path) {
        Resolution::Redirect { location } => Redirect::to(&location).into_response(),
        Resolution::NotFound { language } => state.not_found(language),
        Resolution::Page { language, entry } => match state.routes.tree(language) {
            Some(tree) => submit_form(&state, tree, entry, request).await,
            None => StatusCode::NOT_FOUND.into_response(),
        },
    }
}
