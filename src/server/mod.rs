//! The recipe generator form server.
//!
//! Routing lives in [`handle`], which works on plain values so it can be
//! exercised without a socket. [`start`] wires it to a `tiny_http` listener.

use std::io::{Read, Write};
use std::net::TcpStream;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use tiny_http::{Header, Method, Request, Response, Server};

use crate::error::{LarderError, Result};
use crate::form::{self, FlashMessage, RecipeForm};
use crate::output::human;
use crate::recipe::DEFAULT_SERVINGS;
use crate::render::Renderer;

const HTML: &str = "text/html; charset=utf-8";
const JSON: &str = "application/json";
const TEXT: &str = "text/plain; charset=utf-8";

/// A response ready to be written to the client.
#[derive(Debug)]
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
    /// Set for downloads: the suggested file name.
    pub attachment: Option<String>,
}

impl Reply {
    fn html(status: u16, body: String) -> Self {
        Self {
            status,
            content_type: HTML,
            body: body.into_bytes(),
            attachment: None,
        }
    }

    fn json(status: u16, value: &serde_json::Value) -> Self {
        Self {
            status,
            content_type: JSON,
            body: value.to_string().into_bytes(),
            attachment: None,
        }
    }

    fn not_found() -> Self {
        Self {
            status: 404,
            content_type: TEXT,
            body: b"404 Not Found".to_vec(),
            attachment: None,
        }
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Route one request. Never fails: unexpected errors become an error page.
pub fn handle(method: &Method, url: &str, body: &[u8], renderer: &Renderer) -> Reply {
    let path = url.split('?').next().unwrap_or(url);
    match route(method, path, body, renderer) {
        Ok(reply) => reply,
        Err(e) => {
            tracing::error!("{method} {path} failed: {e}");
            let message = FlashMessage::error(format!("An error occurred: {e}"));
            match renderer.render_form(&blank_form(), &[message]) {
                Ok(page) => Reply::html(500, page),
                Err(e) => Reply {
                    status: 500,
                    content_type: TEXT,
                    body: format!("An error occurred: {e}").into_bytes(),
                    attachment: None,
                },
            }
        }
    }
}

fn route(method: &Method, path: &str, body: &[u8], renderer: &Renderer) -> Result<Reply> {
    match (method, path) {
        (Method::Get, "/") => Ok(Reply::html(200, renderer.render_form(&blank_form(), &[])?)),
        (Method::Post, "/generate") => generate(body, renderer),
        (Method::Post, "/api/validate") => Ok(validate_json(body)),
        _ => Ok(Reply::not_found()),
    }
}

fn blank_form() -> RecipeForm {
    RecipeForm {
        difficulty: "easy".into(),
        servings: DEFAULT_SERVINGS.to_string(),
        ..Default::default()
    }
}

fn generate(body: &[u8], renderer: &Renderer) -> Result<Reply> {
    let (form, action) = RecipeForm::from_pairs(url::form_urlencoded::parse(body));
    let action = action.unwrap_or_else(|| "preview".into());

    // Field errors are reported before a bad action.
    let recipe = match form.to_recipe() {
        Ok(recipe) => recipe,
        Err(LarderError::Recipe(message)) => {
            let page = renderer.render_form(&form, &[FlashMessage::error(message)])?;
            return Ok(Reply::html(400, page));
        }
        Err(e) => return Err(e),
    };

    if action != "preview" && action != "download" {
        let page = renderer.render_form(&form, &[FlashMessage::error("Invalid action specified.")])?;
        return Ok(Reply::html(400, page));
    }
    let html = renderer.render_recipe(&recipe)?;
    let id = recipe.id();

    if action == "preview" {
        return Ok(Reply::html(200, html));
    }

    // The page goes through a temp file that is removed once read back.
    let mut tmp = tempfile::Builder::new()
        .prefix(&format!("{id}-"))
        .suffix(".html")
        .tempfile()?;
    tmp.write_all(html.as_bytes())?;
    tmp.flush()?;
    let body = std::fs::read(tmp.path())?;
    tmp.close()?;

    tracing::info!("download: {id}.html");
    Ok(Reply {
        status: 200,
        content_type: HTML,
        body,
        attachment: Some(format!("{id}.html")),
    })
}

fn validate_json(body: &[u8]) -> Reply {
    match serde_json::from_slice::<RecipeForm>(body) {
        Ok(form) => {
            let report = form::validate(&form);
            Reply::json(200, &serde_json::json!(report))
        }
        Err(e) => Reply::json(
            400,
            &serde_json::json!({
                "valid": false,
                "errors": [format!("Invalid JSON body: {e}")],
                "warnings": [],
            }),
        ),
    }
}

/// Handle to a running form server. Drop or call `stop()` to shut down.
pub struct ServerHandle {
    stop: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl ServerHandle {
    pub fn stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    /// Block until the serve loop exits.
    pub fn wait(mut self) {
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Bind to `port` (or the next free one when `auto_increment`) and serve
/// requests on a background thread.
pub fn start(renderer: Renderer, port: u16, auto_increment: bool) -> Result<ServerHandle> {
    let (server, actual_port) = if auto_increment {
        try_bind_auto(port)?
    } else {
        if !port_is_available(port) {
            return Err(LarderError::Server(format!("port {port} is already in use")));
        }
        let server = Server::http(format!("127.0.0.1:{port}")).map_err(|e| {
            LarderError::Server(format!("failed to start server on port {port}: {e}"))
        })?;
        (server, port)
    };

    if actual_port != port {
        human::info(&format!(
            "Port {port} in use, serving at http://localhost:{actual_port}"
        ));
    } else {
        human::success(&format!("Serving at http://localhost:{actual_port}"));
    }

    let stop = Arc::new(AtomicBool::new(false));
    let loop_stop = stop.clone();
    let thread = std::thread::spawn(move || run_serve_loop(server, &renderer, &loop_stop));

    Ok(ServerHandle {
        stop,
        thread: Some(thread),
    })
}

fn run_serve_loop(server: Server, renderer: &Renderer, stop: &AtomicBool) {
    while !stop.load(Ordering::Relaxed) {
        match server.recv_timeout(Duration::from_secs(1)) {
            Ok(Some(request)) => respond(request, renderer),
            Ok(None) => {}
            Err(e) => {
                human::error(&format!("Server stopped: {e}"));
                break;
            }
        }
    }
}

fn respond(mut request: Request, renderer: &Renderer) {
    let mut body = Vec::new();
    if let Err(e) = request.as_reader().read_to_end(&mut body) {
        tracing::warn!("failed to read request body: {e}");
    }

    let method = request.method().clone();
    let url = request.url().to_string();
    let reply = handle(&method, &url, &body, renderer);
    tracing::debug!("{method} {url} -> {}", reply.status);

    let mut response = Response::from_data(reply.body).with_status_code(reply.status);
    if let Ok(header) = Header::from_bytes("Content-Type", reply.content_type) {
        response.add_header(header);
    }
    if let Some(name) = reply.attachment {
        let value = format!("attachment; filename=\"{name}\"");
        if let Ok(header) = Header::from_bytes("Content-Disposition", value) {
            response.add_header(header);
        }
    }
    if let Err(e) = request.respond(response) {
        tracing::warn!("failed to send response: {e}");
    }
}

/// Check if a port is available by trying to connect to it.
fn port_is_available(port: u16) -> bool {
    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], port));
    TcpStream::connect_timeout(&addr, Duration::from_millis(100)).is_err()
}

fn try_bind_auto(start_port: u16) -> Result<(Server, u16)> {
    for port in start_port..start_port.saturating_add(100) {
        if !port_is_available(port) {
            continue;
        }
        if let Ok(server) = Server::http(format!("127.0.0.1:{port}")) {
            return Ok((server, port));
        }
    }
    Err(LarderError::Server("no available port found".into()))
}
