//! HTTP server for the landing page.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Form, State,
    },
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tokio::sync::RwLock;
use tower_http::services::ServeDir;

use ctnatural_content::SiteContent;
use ctnatural_inquiry::{Field, InquiryState, MailTarget, RecordingLauncher};
use ctnatural_static::{AssetPipeline, InquiryView, PageContext, TemplateEngine};

use crate::reload::{reload_client_script, ReloadHub, ReloadMessage};
use crate::watcher::{FileWatcher, WatchEvent};

const RELOAD_PATH: &str = "/__reload";

/// Configuration for the site server.
#[derive(Debug, Clone)]
pub struct SiteServerConfig {
    /// Content file, watched in live reload mode
    pub content_path: PathBuf,

    /// Directory served at the site root (logo, PDFs)
    pub public_dir: PathBuf,

    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub host: String,

    /// Minify the stylesheet
    pub minify: bool,

    /// Open browser on start
    pub open: bool,

    /// Watch files and push reloads to open pages
    pub live_reload: bool,
}

impl Default for SiteServerConfig {
    fn default() -> Self {
        Self {
            content_path: PathBuf::from("site.toml"),
            public_dir: PathBuf::from("public"),
            port: 7777,
            host: "127.0.0.1".to_string(),
            minify: false,
            open: true,
            live_reload: true,
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),

    #[error("File watch error: {0}")]
    WatchError(String),
}

/// Shared server state.
pub struct ServerState {
    config: SiteServerConfig,
    content: SiteContent,
    templates: TemplateEngine,
    reload: ReloadHub,
}

pub type SharedState = Arc<RwLock<ServerState>>;

impl ServerState {
    pub fn new(config: SiteServerConfig, content: SiteContent) -> Self {
        Self {
            config,
            content,
            templates: TemplateEngine::new(),
            reload: ReloadHub::new(),
        }
    }

    /// Where inquiries from this site go.
    pub fn mail_target(&self) -> MailTarget {
        MailTarget::new(&self.content.contact.email, &self.content.company_name)
    }

    /// Render the landing page for an inquiry view.
    pub fn render(&self, inquiry: &InquiryView) -> Result<String, minijinja::Error> {
        self.templates.render_landing(&PageContext {
            site: &self.content,
            base_url: "/",
            inquiry,
            live_reload: self.config.live_reload,
        })
    }
}

/// Result of handling a posted inquiry.
#[derive(Debug)]
pub struct InquiryOutcome {
    pub status: StatusCode,
    pub view: InquiryView,
}

/// Apply posted form fields and submit if they pass validation.
///
/// Fields are applied in the order they were posted; unknown names are
/// skipped. Browsers post textarea line breaks as CRLF, so they are folded
/// back to LF to match what the page script composes. A rejected form is
/// returned unsubmitted with HTTP 422 and the launcher is never called.
pub fn process_inquiry(fields: Vec<(String, String)>, target: &MailTarget) -> InquiryOutcome {
    let mut state = InquiryState::new();

    for (name, value) in fields {
        match Field::from_str(&name) {
            Ok(field) => state = state.update(field, value.replace("\r\n", "\n")),
            Err(e) => tracing::debug!("Ignoring posted field: {}", e),
        }
    }

    if let Err(e) = state.form.validate() {
        tracing::debug!("Inquiry rejected: {}", e);
        return InquiryOutcome {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            view: InquiryView::from_state(&state).with_error(&e),
        };
    }

    let launcher = RecordingLauncher::new();
    let state = state.submit(target, &launcher);
    tracing::info!("Inquiry submitted for {}", target.recipient);

    let view = InquiryView::from_state(&state);
    let view = match launcher.last() {
        Some(url) => view.with_redirect(url),
        None => view,
    };

    InquiryOutcome {
        status: StatusCode::OK,
        view,
    }
}

/// Site server.
pub struct SiteServer {
    config: SiteServerConfig,
    content: SiteContent,
}

impl SiteServer {
    /// Create a new server for the given content.
    pub fn new(config: SiteServerConfig, content: SiteContent) -> Self {
        Self { config, content }
    }

    /// Build the router over shared state.
    pub fn router(state: SharedState, config: &SiteServerConfig) -> Router {
        let mut app = Router::new()
            .route("/", get(index_handler))
            .route("/inquiry", post(inquiry_handler))
            .route("/assets/main.css", get(css_handler))
            .route("/assets/main.js", get(js_handler));

        if config.live_reload {
            app = app
                .route(RELOAD_PATH, get(ws_handler))
                .route("/__reload.js", get(reload_script_handler));
        }

        app.fallback_service(ServeDir::new(&config.public_dir))
            .with_state(state)
    }

    /// Start the server.
    pub async fn start(self) -> Result<(), ServerError> {
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port)
            .parse()
            .map_err(|_| {
                ServerError::InvalidAddress(format!("{}:{}", self.config.host, self.config.port))
            })?;

        let config = self.config.clone();
        let state = Arc::new(RwLock::new(ServerState::new(self.config, self.content)));

        if config.live_reload {
            let (watcher, mut rx) = FileWatcher::new(&config.content_path, &config.public_dir)
                .map_err(|e| ServerError::WatchError(e.to_string()))?;

            let state_clone = Arc::clone(&state);
            tokio::spawn(async move {
                while let Some(event) = rx.recv().await {
                    handle_watch_event(&state_clone, event).await;
                }
                // Keep watcher alive
                drop(watcher);
            });
        }

        let app = Self::router(state, &config);

        tracing::info!("Serving landing page at http://{}", addr);

        if config.open {
            let url = format!("http://{}", addr);
            let _ = open::that(&url);
        }

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        Ok(())
    }
}

/// Handle file watch events.
async fn handle_watch_event(state: &SharedState, event: WatchEvent) {
    match event {
        WatchEvent::ContentModified(path) => {
            tracing::info!("Content modified: {}", path.display());

            match SiteContent::load(&path) {
                Ok(content) => {
                    let mut state = state.write().await;
                    state.content = content;
                    state.reload.send(ReloadMessage::Reload);
                }
                Err(e) => {
                    tracing::warn!("Keeping previous content: {}", e);
                    let state = state.read().await;
                    state.reload.send(ReloadMessage::ContentError {
                        message: e.to_string(),
                    });
                }
            }
        }

        WatchEvent::ContentRemoved(path) => {
            tracing::warn!(
                "Content file removed, keeping previous content: {}",
                path.display()
            );
        }

        WatchEvent::PublicChanged(path) => {
            tracing::debug!("Public file changed: {}", path.display());
            state.read().await.reload.send(ReloadMessage::Reload);
        }
    }
}

fn render_response(state: &ServerState, status: StatusCode, view: &InquiryView) -> Response {
    match state.render(view) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Failed to render page: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to render page: {}", e),
            )
                .into_response()
        }
    }
}

/// Handler for the landing page.
async fn index_handler(State(state): State<SharedState>) -> Response {
    let state = state.read().await;
    render_response(&state, StatusCode::OK, &InquiryView::default())
}

/// Handler for inquiry form posts.
async fn inquiry_handler(
    State(state): State<SharedState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Response {
    let state = state.read().await;
    let outcome = process_inquiry(fields, &state.mail_target());
    render_response(&state, outcome.status, &outcome.view)
}

/// Handler for the stylesheet.
async fn css_handler(State(state): State<SharedState>) -> impl IntoResponse {
    let state = state.read().await;
    let css = AssetPipeline::stylesheet(&state.content.brand, state.config.minify);
    ([("content-type", "text/css")], css)
}

/// Handler for the form script.
async fn js_handler() -> impl IntoResponse {
    (
        [("content-type", "application/javascript")],
        AssetPipeline::generate_js(),
    )
}

/// Handler for the live reload WebSocket endpoint.
async fn ws_handler(ws: WebSocketUpgrade, State(state): State<SharedState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, state))
}

/// Forward reload messages to one connected page.
async fn handle_ws(mut socket: WebSocket, state: SharedState) {
    let mut rx = {
        let state = state.read().await;
        state.reload.subscribe()
    };

    let mut next = Some(ReloadMessage::Connected);
    while let Some(msg) = next.take() {
        let Ok(json) = serde_json::to_string(&msg) else {
            break;
        };
        if socket.send(Message::Text(json.into())).await.is_err() {
            break;
        }
        next = rx.recv().await.ok();
    }
}

/// Handler for the live reload client script.
async fn reload_script_handler() -> impl IntoResponse {
    (
        [("content-type", "application/javascript")],
        reload_client_script(RELOAD_PATH),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ctnatural_inquiry::MailtoLink;
    use pretty_assertions::assert_eq;

    fn target() -> MailTarget {
        MailTarget::new("hello@ctnatural.example", "CT Natural")
    }

    fn fields(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn state() -> ServerState {
        ServerState::new(
            SiteServerConfig {
                live_reload: false,
                ..Default::default()
            },
            SiteContent::default_site().unwrap(),
        )
    }

    #[test]
    fn creates_config_with_defaults() {
        let config = SiteServerConfig::default();
        assert_eq!(config.port, 7777);
        assert!(config.live_reload);
    }

    #[test]
    fn accepted_inquiry_redirects_to_mail_client() {
        let outcome = process_inquiry(
            fields(&[
                ("name", "Ann"),
                ("email", "ann@x.com"),
                ("company", ""),
                ("message", "Hi there"),
            ]),
            &target(),
        );

        assert_eq!(outcome.status, StatusCode::OK);
        assert!(outcome.view.submitted);
        assert!(outcome.view.error.is_none());

        let link = MailtoLink::parse(outcome.view.redirect.as_deref().unwrap()).unwrap();
        assert_eq!(link.recipient, "hello@ctnatural.example");
        assert_eq!(link.subject, "CT Natural \u{2014} Website Inquiry");
        assert_eq!(link.body, "Name: Ann\nEmail: ann@x.com\nCompany: \n\nHi there");
    }

    #[test]
    fn empty_message_is_rejected() {
        let outcome = process_inquiry(
            fields(&[("name", "Ann"), ("email", "ann@x.com"), ("message", "")]),
            &target(),
        );

        assert_eq!(outcome.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(!outcome.view.submitted);
        assert!(outcome.view.redirect.is_none());
        assert_eq!(outcome.view.error_field.as_deref(), Some("message"));
        assert_eq!(outcome.view.form.name, "Ann");
    }

    #[test]
    fn malformed_email_is_rejected() {
        let outcome = process_inquiry(
            fields(&[("name", "Ann"), ("email", "not-an-email"), ("message", "Hi")]),
            &target(),
        );

        assert_eq!(outcome.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(outcome.view.error_field.as_deref(), Some("email"));
    }

    #[test]
    fn unknown_fields_are_ignored_and_last_value_wins() {
        let outcome = process_inquiry(
            fields(&[
                ("name", "First"),
                ("email", "ann@x.com"),
                ("phone", "555"),
                ("organization", "Radiology Dept"),
                ("message", "Hi"),
                ("name", "Second"),
            ]),
            &target(),
        );

        assert!(outcome.view.submitted);
        assert_eq!(outcome.view.form.name, "Second");
        assert_eq!(outcome.view.form.company, "Radiology Dept");
    }

    #[test]
    fn posted_crlf_matches_script_draft() {
        let outcome = process_inquiry(
            fields(&[
                ("name", "Ann"),
                ("email", "ann@x.com"),
                ("message", "Line one\r\nLine two"),
            ]),
            &target(),
        );

        let url = outcome.view.redirect.unwrap();
        assert!(url.ends_with("Line%20one%0ALine%20two"));
        assert!(!url.contains("%0D"));
    }

    async fn post_inquiry(body: &str) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let public = tempfile::tempdir().unwrap();
        let config = SiteServerConfig {
            public_dir: public.path().to_path_buf(),
            open: false,
            live_reload: false,
            ..Default::default()
        };
        let shared = Arc::new(RwLock::new(ServerState::new(
            config.clone(),
            SiteContent::default_site().unwrap(),
        )));
        let app = SiteServer::router(shared, &config);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
        let request = format!(
            "POST /inquiry HTTP/1.1\r\nHost: {}\r\nContent-Type: application/x-www-form-urlencoded\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            addr,
            body.len(),
            body
        );
        stream.write_all(request.as_bytes()).await.unwrap();

        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        response
    }

    #[tokio::test]
    async fn router_accepts_posted_inquiry() {
        let response =
            post_inquiry("name=Ann&email=ann%40x.com&company=&message=Hi+there").await;

        assert!(response.starts_with("HTTP/1.1 200"), "{}", response);
        assert!(response.contains("url=mailto:hello@ctnatural.example?subject="));
        assert!(response.contains("Thanks! Your email client should open"));
    }

    #[tokio::test]
    async fn router_rejects_incomplete_inquiry() {
        let response = post_inquiry("name=Ann&email=ann%40x.com&message=").await;

        assert!(response.starts_with("HTTP/1.1 422"), "{}", response);
        assert!(!response.contains("http-equiv=\"refresh\""));
    }

    #[test]
    fn renders_submitted_page() {
        let state = state();
        let outcome = process_inquiry(
            fields(&[("name", "Ann"), ("email", "ann@x.com"), ("message", "Hi")]),
            &state.mail_target(),
        );

        let html = state.render(&outcome.view).unwrap();

        assert!(html.contains("http-equiv=\"refresh\""));
        assert!(html.contains("content=\"0;url=mailto:hello@ctnatural.example?subject="));
        assert!(html.contains("Thanks! Your email client should open"));
        assert!(!html.contains("__reload.js"));
    }

    #[tokio::test]
    async fn content_edits_reload_state() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("site.toml");
        std::fs::write(
            &path,
            "company_name = \"Acme\"\n\n[contact]\nemail = \"sales@acme.test\"\n",
        )
        .unwrap();

        let shared = Arc::new(RwLock::new(state()));
        let mut rx = shared.read().await.reload.subscribe();

        handle_watch_event(&shared, WatchEvent::ContentModified(path.clone())).await;

        assert_eq!(shared.read().await.mail_target().recipient, "sales@acme.test");
        assert_eq!(rx.try_recv().unwrap(), ReloadMessage::Reload);

        std::fs::write(&path, "company_name = [").unwrap();
        handle_watch_event(&shared, WatchEvent::ContentModified(path)).await;

        assert_eq!(shared.read().await.content.company_name, "Acme");
        assert!(matches!(
            rx.try_recv().unwrap(),
            ReloadMessage::ContentError { .. }
        ));
    }
}
