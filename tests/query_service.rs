//! End-to-end session behavior against a local mock query service.

use std::collections::VecDeque;
use std::fs;
use std::time::Duration;
use termfolio::config::{load_config, AnimationConfig};
use termfolio::dispatch::Dispatcher;
use termfolio::session::{InputAction, Session};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Serve the given `(status line, body)` pairs to successive connections.
async fn serve_sequence(replies: Vec<(&'static str, &'static str)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let mut replies = VecDeque::from(replies);
    tokio::spawn(async move {
        while let Some((status, body)) = replies.pop_front() {
            let Ok((mut stream, _)) = listener.accept().await else {
                return;
            };
            drain_request(&mut stream).await;
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes()).await;
        }
    });
    format!("http://{addr}/query")
}

async fn drain_request(stream: &mut TcpStream) {
    let mut data = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = stream.read(&mut chunk).await.unwrap_or(0);
        if n == 0 {
            return;
        }
        data.extend_from_slice(&chunk[..n]);
        let text = String::from_utf8_lossy(&data);
        if let Some(end) = text.find("\r\n\r\n") {
            let length = text[..end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    if name.eq_ignore_ascii_case("content-length") {
                        value.trim().parse::<usize>().ok()
                    } else {
                        None
                    }
                })
                .unwrap_or(0);
            if data.len() >= end + 4 + length {
                return;
            }
        }
    }
}

fn write_config(name: &str, contents: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!(
        "termfolio-{name}-{}.toml",
        std::process::id()
    ));
    fs::write(&path, contents).expect("write config");
    path
}

async fn run_until_idle(session: &mut Session) {
    for _ in 0..5_000 {
        if !session.is_typing() {
            return;
        }
        session.tick(Duration::from_millis(5));
        tokio::time::sleep(Duration::from_millis(1)).await;
    }
    panic!("session never went idle");
}

fn submit(session: &mut Session, line: &str) {
    for ch in line.chars() {
        session.handle_input(InputAction::Char(ch));
    }
    session.handle_input(InputAction::Submit);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn remote_answers_are_typed_and_failures_fall_back() {
    let url = serve_sequence(vec![
        ("200 OK", r#"{"response":"Hello from the service.","is_ai":false}"#),
        ("200 OK", r#"{"response":"I mostly write Rust these days.","is_ai":true}"#),
        ("500 Internal Server Error", r#"{"detail":"boom"}"#),
    ])
    .await;
    let path = write_config(
        "remote",
        &format!(
            r#"
[profile]
prompt = "visitor$ "

[backend]
query_url = "{url}"
timeout_secs = 3

[animation]
command_char_ms = 1
output_char_ms = 1
"#
        ),
    );
    let loaded = load_config(Some(path.to_string_lossy().as_ref())).expect("load config");
    let _ = fs::remove_file(&path);
    let config = loaded.config;

    let dispatcher = Dispatcher::from_config(&config);
    let mut session = Session::new(config.profile.prompt.clone(), dispatcher, config.animation);
    session.start();
    run_until_idle(&mut session).await;

    submit(&mut session, "what do you use?");
    run_until_idle(&mut session).await;

    submit(&mut session, "Education");
    run_until_idle(&mut session).await;

    let entries = session.history().entries();
    assert_eq!(entries.len(), 3);

    assert_eq!(entries[0].prompt, "visitor$ ");
    assert_eq!(entries[0].command, "welcome");
    assert_eq!(entries[0].output, "Hello from the service.");
    assert!(!entries[0].is_ai);

    assert_eq!(entries[1].command, "what do you use?");
    assert_eq!(entries[1].output, "I mostly write Rust these days.");
    assert!(entries[1].is_ai);

    assert_eq!(entries[2].command, "Education");
    assert!(entries[2].output.starts_with("Education:"), "got: {}", entries[2].output);
    assert!(!entries[2].is_ai);
}

#[tokio::test]
async fn unreachable_service_still_answers_from_built_in_texts() {
    // Bind then drop so the port is closed.
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let path = write_config(
        "unreachable",
        &format!(
            r#"
[backend]
query_url = "http://{addr}/query"

[animation]
command_char_ms = 0
output_char_ms = 0

[responses]
Projects = "Just one project for now."
"#
        ),
    );
    let loaded = load_config(Some(path.to_string_lossy().as_ref())).expect("load config");
    let _ = fs::remove_file(&path);
    let config = loaded.config;
    assert_eq!(
        config.animation,
        AnimationConfig {
            command_char_ms: 0,
            output_char_ms: 0,
        }
    );

    let dispatcher = Dispatcher::from_config(&config);
    let mut session = Session::new(config.profile.prompt.clone(), dispatcher, config.animation);
    submit(&mut session, "projects");
    run_until_idle(&mut session).await;
    submit(&mut session, "clear");

    assert!(session.history().entries().is_empty());
    submit(&mut session, "PROJECTS");
    run_until_idle(&mut session).await;
    assert_eq!(
        session.history().entries().last().map(|e| e.output.as_str()),
        Some("Just one project for now.")
    );
}
