/*!
 * Web form surface.
 *
 * - `GET /`: the URL form
 * - `POST /generate`: run the pipeline and return download links
 * - `GET /health`: liveness probe
 *
 * Generated PDFs are embedded in the response as base64 `data:` links, so the
 * server keeps no per-request files.
 */

use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::{error, info};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::errors::AppError;
use crate::pipeline::{Pipeline, PipelineOutput};
use crate::render::RenderedDocument;

const PAGE_TITLE: &str = "YouTube Transcript to PDF";

/// Shared, read-only request state
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Pipeline,
}

impl AppState {
    pub fn new(pipeline: Pipeline) -> Self {
        Self { pipeline }
    }
}

/// Form body of `POST /generate`
#[derive(Debug, Deserialize)]
pub struct GenerateForm {
    #[serde(default)]
    pub url: String,
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/generate", post(generate))
        .route("/health", get(health))
        .with_state(Arc::new(state))
}

/// Bind `addr` and serve until the process is stopped
pub async fn serve(addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(state)).await?;
    Ok(())
}

async fn index() -> Html<String> {
    Html(page("", ""))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn generate(State(state): State<Arc<AppState>>, Form(form): Form<GenerateForm>) -> Response {
    let url = form.url.trim().to_string();
    info!("Generate request for '{}'", url);

    match state.pipeline.run(&url).await {
        Ok(output) => Html(page(&url, &results_html(&output))).into_response(),
        Err(AppError::Url(e)) => {
            info!("Rejected input: {}", e);
            let body = r#"<p class="error">Invalid YouTube URL.</p>"#;
            (StatusCode::BAD_REQUEST, Html(page(&url, body))).into_response()
        }
        Err(e) => {
            error!("Pipeline failed for '{}': {}", url, e);
            let body = format!(r#"<p class="error">{}</p>"#, escape_html(&e.to_string()));
            (StatusCode::INTERNAL_SERVER_ERROR, Html(page(&url, &body))).into_response()
        }
    }
}

fn results_html(output: &PipelineOutput) -> String {
    let mut html = download_link(&output.transcript_pdf, "Download Transcript PDF");

    if let Some(summary) = output.summary_text() {
        html.push_str("<h2>Transcript Summary</h2>\n");
        html.push_str(&format!("<pre class=\"summary\">{}</pre>\n", escape_html(&summary)));
        if let Some(doc) = &output.summary_pdf {
            html.push_str(&download_link(doc, "Download Summary PDF"));
        }
    }
    html
}

fn download_link(doc: &RenderedDocument, label: &str) -> String {
    format!(
        "<p><a download=\"{name}\" href=\"{href}\">{label}</a></p>\n",
        name = escape_html(doc.file_name()),
        href = data_uri(doc),
        label = label,
    )
}

/// `data:application/pdf;base64,...` for the document
pub fn data_uri(doc: &RenderedDocument) -> String {
    format!("data:application/pdf;base64,{}", STANDARD.encode(doc.as_bytes()))
}

fn page(url: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
body {{ font-family: sans-serif; max-width: 48rem; margin: 2rem auto; }}
input[type=text] {{ width: 100%; padding: .4rem; }}
.error {{ color: #b00020; }}
.summary {{ white-space: pre-wrap; font-family: inherit; }}
</style>
</head>
<body>
<h1>{title}</h1>
<form method="post" action="/generate">
<label for="url">Enter YouTube link</label>
<input type="text" id="url" name="url" value="{url}">
<button type="submit">Generate PDF</button>
</form>
{body}
</body>
</html>
"#,
        title = PAGE_TITLE,
        url = escape_html(url),
        body = body,
    )
}

/// Escape text for HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
