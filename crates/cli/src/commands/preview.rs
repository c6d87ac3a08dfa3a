use anyhow::{Context, Result};
use axum::{
    Form, Router,
    extract::{Query, State},
    http::{StatusCode, Uri, header},
    response::{
        Html, IntoResponse, Response,
        sse::{Event, KeepAlive, Sse},
    },
    routing::{get, post},
};
use chrono::Utc;
use folio_core::contact::{ContactForm, ContactStatus};
use folio_core::theme::{Theme, ThemeContext};
use folio_generator::assets::{content_type, site_script, stylesheet};
use folio_generator::{
    ContactState, RenderMode, RenderOptions, Route, SiteData, render_home, render_route,
    render_stats_panel,
};
use folio_remote::{ActivityCache, ContactClient};
use notify::{Event as NotifyEvent, EventKind, RecursiveMode, Watcher};
use serde::Deserialize;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tokio::sync::{RwLock, broadcast};
use tower_http::{services::ServeDir, trace::TraceLayer};

use super::site::{ASSETS_DIR, activity_cache, fetch_activity, fetch_stats, load_portfolio, load_site};

#[derive(Clone)]
struct AppState {
    root: PathBuf,
    reload_tx: broadcast::Sender<()>,
    /// Written only by the theme toggle, read by every page render
    theme: Arc<RwLock<ThemeContext>>,
    offline: bool,
    cache: Option<ActivityCache>,
}

#[derive(Debug, Default, Deserialize)]
struct PageQuery {
    /// Blog search text
    q: Option<String>,
    /// Gallery technology, by name or slug
    tech: Option<String>,
    /// Blog category, by name or slug
    category: Option<String>,
    /// Theme toggle
    theme: Option<String>,
}

/// Start preview server with hot reload for local development.
///
/// This command:
/// - Validates and loads portfolio.toml
/// - Renders every page on request from the current files
/// - Serves media from assets/
/// - Forwards contact form posts and statistics requests
/// - Watches for file changes and triggers hot reload
pub async fn run(path: PathBuf, port: u16, offline: bool, cache_dir: Option<PathBuf>) -> Result<()> {
    println!("🖥  Starting preview server...");
    println!("   Portfolio: {}", path.display());

    let portfolio = load_portfolio(&path)?;
    println!("   ✓ Loaded: {}", portfolio.profile.name);
    println!("   ✓ Projects: {}", portfolio.projects.len());

    // Create broadcast channel for reload events
    let (reload_tx, _) = broadcast::channel::<()>(100);

    let state = AppState {
        root: path.clone(),
        reload_tx: reload_tx.clone(),
        theme: Arc::new(RwLock::new(ThemeContext::new(portfolio.site.default_theme))),
        offline,
        cache: activity_cache(cache_dir.as_ref()),
    };
    if let Some(cache) = &state.cache {
        println!("   ✓ Activity cache: {}", cache.path().display());
    }
    let app = router(state);

    // Start file watcher
    let watcher_path = path.clone();
    let watcher_tx = reload_tx.clone();
    tokio::spawn(async move {
        if let Err(e) = watch_files(watcher_path, watcher_tx).await {
            tracing::error!("File watcher error: {}", e);
        }
    });

    // Start server
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    println!("\n🚀 Preview ready at: http://localhost:{}", port);
    println!("   Press Ctrl+C to stop\n");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to port")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn router(state: AppState) -> Router {
    let assets = ServeDir::new(state.root.join(ASSETS_DIR));

    Router::new()
        .route("/_reload", get(sse_handler))
        .route("/stats", get(stats_handler))
        .route("/contact", post(contact_handler))
        .route("/style.css", get(|| async { asset("style.css", stylesheet()) }))
        .route("/site.js", get(|| async { asset("site.js", site_script()) }))
        .nest_service("/assets", assets)
        .fallback(page_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn asset(name: &str, body: &'static str) -> Response {
    ([(header::CONTENT_TYPE, content_type(name))], body).into_response()
}

/// Watch for file changes and trigger reload
async fn watch_files(path: PathBuf, reload_tx: broadcast::Sender<()>) -> Result<()> {
    let (tx, mut rx) = tokio::sync::mpsc::channel(100);

    let mut watcher =
        notify::recommended_watcher(move |res: Result<NotifyEvent, notify::Error>| {
            if let Ok(event) = res {
                let _ = tx.blocking_send(event);
            }
        })?;

    watcher.watch(&path, RecursiveMode::Recursive)?;

    while let Some(event) = rx.recv().await {
        if let EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_) = event.kind {
            // Filter out temporary files and hidden files
            if event.paths.iter().any(|p| {
                let filename = p.file_name().unwrap_or_default().to_string_lossy();
                !filename.starts_with('.') && !filename.ends_with('~')
            }) {
                println!("   📝 File changed, reloading...");
                let _ = reload_tx.send(());
            }
        }
    }

    Ok(())
}

/// SSE endpoint for hot reload
async fn sse_handler(
    State(state): State<AppState>,
) -> Sse<impl futures::Stream<Item = Result<Event, std::convert::Infallible>>> {
    let mut rx = state.reload_tx.subscribe();

    let stream = async_stream::stream! {
        loop {
            if rx.recv().await.is_ok() {
                yield Ok(Event::default().data("reload"));
            }
        }
    };

    Sse::new(stream).keep_alive(KeepAlive::default())
}

fn error_page(e: anyhow::Error) -> Response {
    let message: String = format!("{:#}", e)
        .chars()
        .map(|c| match c {
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '&' => "&amp;".to_string(),
            c => c.to_string(),
        })
        .collect();
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(format!(
            "<!DOCTYPE html>\n<html><head><title>Error</title></head><body>\n<h1>Configuration Error</h1>\n<pre>{}</pre>\n</body></html>",
            message
        )),
    )
        .into_response()
}

/// Current files plus activity, rendered with the shared theme
async fn prepare(state: &AppState) -> Result<(SiteData, RenderOptions)> {
    let mut site = load_site(&state.root)?;
    site.generated_at = Utc::now();
    if !state.offline {
        site.activity = fetch_activity(&site.portfolio, state.cache.clone(), site.generated_at).await;
    }
    let options = RenderOptions {
        theme: *state.theme.read().await,
        mode: RenderMode::Preview,
    };
    Ok((site, options))
}

async fn page_handler(
    State(state): State<AppState>,
    uri: Uri,
    Query(query): Query<PageQuery>,
) -> Response {
    if let Some(requested) = query.theme.as_deref() {
        match requested.parse::<Theme>() {
            Ok(theme) => {
                let mut context = state.theme.write().await;
                if context.theme() != theme {
                    context.toggle();
                }
            }
            Err(e) => tracing::debug!("Ignoring theme parameter: {}", e),
        }
    }

    let (site, options) = match prepare(&state).await {
        Ok(prepared) => prepared,
        Err(e) => return error_page(e),
    };

    let mut route = Route::from_path(uri.path());
    match &mut route {
        Route::Projects { tech } => {
            if let Some(selected) = query.tech {
                *tech = selected;
            }
        }
        Route::Blog { query: search, category } => {
            *search = query.q.unwrap_or_default();
            if let Some(selected) = query.category {
                *category = selected;
            }
        }
        _ => {}
    }

    let page = render_route(&route, &site, &options);
    let status = if page.found {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };
    (status, Html(page.html)).into_response()
}

/// Statistics popup body; one request per opening
async fn stats_handler(State(state): State<AppState>) -> Response {
    let portfolio = match load_portfolio(&state.root) {
        Ok(portfolio) => portfolio,
        Err(e) => return error_page(e),
    };
    let Some(username) = portfolio.integrations.leetcode_username.clone() else {
        return (StatusCode::NOT_FOUND, "No statistics account configured").into_response();
    };

    let stats = fetch_stats(&portfolio).await;
    Html(render_stats_panel(&username, stats)).into_response()
}

/// Validate, forward to the configured endpoint, re-render the home page
async fn contact_handler(State(state): State<AppState>, Form(form): Form<ContactForm>) -> Response {
    let (site, options) = match prepare(&state).await {
        Ok(prepared) => prepared,
        Err(e) => return error_page(e),
    };

    let status = match site.portfolio.integrations.contact_endpoint.as_deref() {
        Some(endpoint) => match ContactClient::new(endpoint) {
            Ok(client) => client.send(&form).await,
            Err(e) => {
                tracing::warn!("Contact client unavailable: {}", e);
                ContactStatus::Failed
            }
        },
        None => match form.validate() {
            Err(errors) => ContactStatus::Invalid(errors),
            Ok(()) => {
                tracing::warn!("No contact_endpoint configured, message from {} dropped", form.email);
                ContactStatus::Failed
            }
        },
    };

    // A delivered message clears the form.
    let form = if status == ContactStatus::Sent {
        ContactForm::default()
    } else {
        form
    };
    Html(render_home(&site, &options, ContactState { form, status })).into_response()
}
