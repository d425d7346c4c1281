//! Blog HTTP server
//!
//! Every request re-reads content from disk; the shared state is immutable
//! (config, resolved paths, renderers), so requests need no coordination.

use anyhow::Result;
use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Router,
};
use percent_encoding::percent_decode_str;
use std::net::SocketAddr;
use std::sync::Arc;
use tera::Context;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::content::{load_index, MarkdownRenderer, PostError, PostLoader};
use crate::router::{dispatch, ViewSelector};
use crate::templates::TemplateRenderer;
use crate::Blog;

/// Fixed redirect target for missing posts
const NOT_FOUND_PATH: &str = "/404";

/// State shared across requests
struct ServerState {
    blog: Blog,
    templates: TemplateRenderer,
    markdown: MarkdownRenderer,
}

/// Wrapper that turns unexpected failures into 500 responses
#[derive(Debug)]
struct ServeError(anyhow::Error);

impl IntoResponse for ServeError {
    fn into_response(self) -> Response {
        tracing::error!("request failed: {:#}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}

impl<E> From<E> for ServeError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

/// Start the blog server
pub async fn start(blog: &Blog, ip: &str, port: u16) -> Result<()> {
    let state = Arc::new(ServerState {
        blog: blog.clone(),
        templates: TemplateRenderer::new()?,
        markdown: MarkdownRenderer::new(),
    });

    let app = build_app(state);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_app(state: Arc<ServerState>) -> Router {
    Router::new()
        .nest_service("/styles", ServeDir::new(&state.blog.styles_dir))
        .nest_service("/images", ServeDir::new(&state.blog.images_dir))
        .fallback(page_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Dispatch the request path to a view and render it
async fn page_handler(
    State(state): State<Arc<ServerState>>,
    uri: Uri,
) -> Result<Response, ServeError> {
    let path = percent_decode_str(uri.path()).decode_utf8_lossy();

    match dispatch(&path) {
        // A bare /posts carries no identifier and degenerates to the listing
        ViewSelector::Home | ViewSelector::Show { slug: None } => home(&state),
        ViewSelector::Show { slug: Some(slug) } => show(&state, &slug),
        ViewSelector::About => about(&state),
        ViewSelector::NotFound => not_found(&state),
    }
}

/// Index listing: rebuilt from disk on every request
fn home(state: &ServerState) -> Result<Response, ServeError> {
    let posts = load_index(&state.blog.posts_dir)?;

    let mut context = Context::new();
    context.insert("site", &state.blog.config);
    context.insert("posts", &posts);

    let html = state.templates.render("home.html", &context)?;
    Ok(Html(html).into_response())
}

/// Single-post view
fn show(state: &ServerState, slug: &str) -> Result<Response, ServeError> {
    let loader = PostLoader::new(&state.blog.posts_dir, &state.markdown);
    let doc = match loader.load(slug) {
        Ok(doc) => doc,
        Err(PostError::NotFound(slug)) => {
            tracing::debug!("post {} not found, redirecting to {}", slug, NOT_FOUND_PATH);
            return Ok(redirect_found(NOT_FOUND_PATH));
        }
        Err(e) => return Err(e.into()),
    };

    // Show the post image only when the referenced file is actually present
    let image_url = match doc.front_matter.get("image") {
        Some(image)
            if !image.is_empty() && state.blog.images_dir.join("posts").join(image).exists() =>
        {
            Some(format!("/images/posts/{}", image))
        }
        _ => None,
    };

    let mut context = Context::new();
    context.insert("site", &state.blog.config);
    context.insert("post", &doc.front_matter);
    context.insert("body", &doc.body);
    context.insert("image_url", &image_url);

    let html = state.templates.render("show.html", &context)?;
    Ok(Html(html).into_response())
}

/// Static about page
fn about(state: &ServerState) -> Result<Response, ServeError> {
    let mut context = Context::new();
    context.insert("site", &state.blog.config);

    let html = state.templates.render("about.html", &context)?;
    Ok(Html(html).into_response())
}

/// Unmatched route: the 404 view with a 404 status
fn not_found(state: &ServerState) -> Result<Response, ServeError> {
    let mut context = Context::new();
    context.insert("site", &state.blog.config);

    let html = state.templates.render("404.html", &context)?;
    Ok((StatusCode::NOT_FOUND, Html(html)).into_response())
}

/// 302 Found, the redirect status a missing post has always answered with
fn redirect_found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}
