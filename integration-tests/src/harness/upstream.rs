use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

/// Minimal HTTP server answering `GET /ip/<addr>` like the remote geo service.
///
/// Known addresses get their canned JSON body; anything else gets
/// `{"status":"fail"}`.
pub struct GeoUpstream {
    port: u16,
    hits: Arc<AtomicUsize>,
}

impl GeoUpstream {
    pub fn start(answers: &[(&str, &str)]) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind upstream");
        let port = listener.local_addr().unwrap().port();
        let hits = Arc::new(AtomicUsize::new(0));

        let answers: HashMap<String, String> = answers
            .iter()
            .map(|(ip, body)| (ip.to_string(), body.to_string()))
            .collect();

        thread::spawn({
            let hits = hits.clone();
            move || {
                for stream in listener.incoming() {
                    let Ok(stream) = stream else { continue };
                    hits.fetch_add(1, Ordering::Relaxed);
                    respond(stream, &answers);
                }
            }
        });

        Self { port, hits }
    }

    /// URL template for `geoip.remote_url`.
    pub fn url_template(&self) -> String {
        format!("http://127.0.0.1:{}/ip/{{ip}}", self.port)
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }
}

fn respond(mut stream: TcpStream, answers: &HashMap<String, String>) {
    let request_line = {
        let mut reader = BufReader::new(&stream);
        let mut request_line = String::new();
        if reader.read_line(&mut request_line).is_err() {
            return;
        }

        // Drain headers.
        let mut line = String::new();
        while reader.read_line(&mut line).is_ok_and(|n| n > 2) {
            line.clear();
        }
        request_line
    };

    let ip = request_line
        .split_whitespace()
        .nth(1)
        .and_then(|path| path.strip_prefix("/ip/"))
        .unwrap_or_default();

    let body = answers
        .get(ip)
        .cloned()
        .unwrap_or_else(|| r#"{"status":"fail","message":"invalid query"}"#.to_string());

    let _ = write!(
        stream,
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        body.len(),
        body
    );
}
