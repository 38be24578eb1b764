//! Static file server for the BikeMarket web app
//!
//! Serves the compiled WASM bundle from `BIKE_WEB_DIST` (default `dist/`)
//! on `BIKE_WEB_PORT` (default 8080). Unknown paths fall back to
//! `index.html` so the client-side router can resolve them.

use std::env;
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Component, Path, PathBuf};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DIST: &str = "dist";
const INDEX_FILE: &str = "index.html";

struct ServerConfig {
    port: u16,
    dist: PathBuf,
}

impl ServerConfig {
    fn from_env() -> Self {
        let port = env::var("BIKE_WEB_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let dist = env::var("BIKE_WEB_DIST")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DIST));
        Self { port, dist }
    }
}

fn main() {
    let config = ServerConfig::from_env();
    let addr = format!("127.0.0.1:{}", config.port);
    let listener = match TcpListener::bind(&addr) {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    println!("BikeMarket server running at http://{}", addr);
    println!("Serving from {}/", config.dist.display());
    println!("Press Ctrl+C to stop\n");

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => handle_client(stream, &config.dist),
            Err(e) => eprintln!("Connection error: {}", e),
        }
    }
}

/// Outcome of mapping a request path onto the dist directory.
#[derive(Debug, PartialEq, Eq)]
enum Resolved {
    File(PathBuf),
    /// No such asset; hand the route to the client router.
    Index,
    Forbidden,
}

/// Map a request target (path plus optional query) to a file under `root`.
fn resolve_path(root: &Path, target: &str) -> Resolved {
    let path = target.split(['?', '#']).next().unwrap_or("/");
    let relative = path.trim_start_matches('/');
    if relative.is_empty() {
        return Resolved::Index;
    }

    let relative = Path::new(relative);
    if relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
    {
        return Resolved::Forbidden;
    }

    let candidate = root.join(relative);
    if candidate.is_file() {
        Resolved::File(candidate)
    } else {
        Resolved::Index
    }
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|s| s.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}

fn handle_client(mut stream: TcpStream, root: &Path) {
    let buf_reader = BufReader::new(&mut stream);
    let request_line = match buf_reader.lines().next() {
        Some(Ok(line)) => line,
        _ => {
            eprintln!("Failed to read request line");
            return;
        }
    };

    let target = request_line.split_whitespace().nth(1).unwrap_or("/");
    let index = root.join(INDEX_FILE);

    let (status, file_path) = match resolve_path(root, target) {
        Resolved::File(path) => ("200 OK", path),
        Resolved::Index => ("200 OK", index),
        Resolved::Forbidden => {
            eprintln!("Rejected path: {}", target);
            write_response(&mut stream, "403 FORBIDDEN", "text/plain", b"Forbidden");
            return;
        }
    };

    match fs::read(&file_path) {
        Ok(contents) => write_response(&mut stream, status, content_type(&file_path), &contents),
        Err(e) => {
            eprintln!("Failed to read {}: {}", file_path.display(), e);
            let body = b"<!DOCTYPE html><html><body><h1>Error: Index not found</h1></body></html>";
            write_response(&mut stream, "404 NOT FOUND", "text/html", body);
        }
    }
}

fn write_response(stream: &mut TcpStream, status: &str, content_type: &str, body: &[u8]) {
    let headers = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nAccess-Control-Allow-Origin: *\r\nContent-Length: {}\r\n\r\n",
        status,
        content_type,
        body.len()
    );

    if let Err(e) = stream.write_all(headers.as_bytes()) {
        eprintln!("Failed to write headers: {}", e);
        return;
    }
    if let Err(e) = stream.write_all(body) {
        eprintln!("Failed to write body: {}", e);
    }
    let _ = stream.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist_fixture(name: &str) -> PathBuf {
        let root = env::temp_dir().join(format!("bike-server-{}-{}", name, std::process::id()));
        fs::create_dir_all(root.join("assets")).unwrap();
        fs::write(root.join(INDEX_FILE), "<html></html>").unwrap();
        fs::write(root.join("assets/app.wasm"), [0u8, 97, 115, 109]).unwrap();
        root
    }

    #[test]
    fn test_root_serves_index() {
        let root = dist_fixture("root");
        assert_eq!(resolve_path(&root, "/"), Resolved::Index);
        assert_eq!(resolve_path(&root, "/?brand=Honda"), Resolved::Index);
    }

    #[test]
    fn test_existing_asset_is_served() {
        let root = dist_fixture("asset");
        assert_eq!(
            resolve_path(&root, "/assets/app.wasm"),
            Resolved::File(root.join("assets/app.wasm"))
        );
    }

    #[test]
    fn test_client_routes_fall_back_to_index() {
        let root = dist_fixture("spa");
        assert_eq!(resolve_path(&root, "/bikes/42"), Resolved::Index);
        assert_eq!(resolve_path(&root, "/my-collection"), Resolved::Index);
        assert_eq!(resolve_path(&root, "/assets"), Resolved::Index);
    }

    #[test]
    fn test_parent_traversal_is_rejected() {
        let root = dist_fixture("traversal");
        assert_eq!(resolve_path(&root, "/../Cargo.toml"), Resolved::Forbidden);
        assert_eq!(resolve_path(&root, "/assets/../../secret"), Resolved::Forbidden);
    }

    #[test]
    fn test_content_types() {
        assert_eq!(content_type(Path::new("app.wasm")), "application/wasm");
        assert_eq!(content_type(Path::new("index.html")), "text/html; charset=utf-8");
        assert_eq!(content_type(Path::new("blob.bin")), "application/octet-stream");
    }
}
