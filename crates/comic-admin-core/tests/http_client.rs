//! `ApiClient` against a local HTTP listener

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::sync::mpsc::{self, Receiver};
use std::thread;

use comic_admin_core::domain::{Comic, ComicCategory, Resource};
use comic_admin_core::manager::{self, CrudBackend};
use comic_admin_core::{ApiClient, ApiError};

/// One request as the server saw it
#[derive(Debug)]
struct Received {
    line: String,
    content_type: Option<String>,
    body: String,
}

fn reply(status: &str, content_type: Option<&str>, body: &str) -> String {
    let mut head = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n",
        status,
        body.len()
    );
    if let Some(ct) = content_type {
        head.push_str(&format!("Content-Type: {}\r\n", ct));
    }
    format!("{}\r\n{}", head, body)
}

fn json(status: &str, body: &str) -> String {
    reply(status, Some("application/json"), body)
}

/// Answers one connection per canned reply, in order
fn serve(replies: Vec<String>) -> (ApiClient, Receiver<Received>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}/api", listener.local_addr().unwrap());
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        for canned in replies {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream);

            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            let mut length = 0;
            let mut content_type = None;
            loop {
                let mut header = String::new();
                reader.read_line(&mut header).unwrap();
                let header = header.trim_end();
                if header.is_empty() {
                    break;
                }
                if let Some((name, value)) = header.split_once(':') {
                    let value = value.trim().to_string();
                    match name.to_ascii_lowercase().as_str() {
                        "content-length" => length = value.parse().unwrap(),
                        "content-type" => content_type = Some(value),
                        _ => {}
                    }
                }
            }
            let mut body = vec![0; length];
            reader.read_exact(&mut body).unwrap();

            let mut stream = reader.into_inner();
            stream.write_all(canned.as_bytes()).unwrap();
            stream.flush().unwrap();

            let _ = tx.send(Received {
                line: line.trim_end().to_string(),
                content_type,
                body: String::from_utf8(body).unwrap(),
            });
        }
    });

    (ApiClient::new(base), rx)
}

fn tex() -> Comic {
    Comic {
        title: "Tex".to_string(),
        author: "Bonelli".to_string(),
        category: ComicCategory::Action,
        ..Comic::draft()
    }
}

#[tokio::test]
async fn test_create_with_unexpected_body_still_refetches() {
    let stored = Comic { id: Some(9), ..tex() };
    let listing = serde_json::to_string(&vec![stored.clone()]).unwrap();
    let (client, rx) = serve(vec![
        json("201 Created", r#"{"fumettoId":9,"titolo":"Tex","categoria":"AZIONE"}"#),
        json("200 OK", &listing),
    ]);

    let items = manager::save(&client, None, &tex()).await.unwrap();

    assert_eq!(items, vec![stored]);
    let lines: Vec<_> = rx.iter().take(2).map(|r| r.line).collect();
    assert_eq!(
        lines,
        vec!["POST /api/fumetti/create-fumetto HTTP/1.1", "GET /api/fumetti/get-fumetti HTTP/1.1"]
    );
}

#[tokio::test]
async fn test_create_sends_json_body() {
    let (client, rx) = serve(vec![reply("201 Created", Some("text/plain"), "Creato")]);

    let echoed = CrudBackend::<Comic>::create(&client, &tex()).await.unwrap();

    assert_eq!(echoed, None);
    let request = rx.recv().unwrap();
    assert_eq!(request.line, "POST /api/fumetti/create-fumetto HTTP/1.1");
    assert_eq!(request.content_type.as_deref(), Some("application/json"));
    let sent: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(sent["titolo"], "Tex");
    assert_eq!(sent["categoriaFumetto"], "AZIONE");
    assert!(sent.get("fumettoId").is_none());
}

#[tokio::test]
async fn test_update_puts_to_id_path_and_parses_echo() {
    let stored = Comic { id: Some(4), ..tex() };
    let body = serde_json::to_string(&stored).unwrap();
    let (client, rx) = serve(vec![json("200 OK", &body)]);

    let echoed = CrudBackend::<Comic>::update(&client, 4, &stored).await.unwrap();

    assert_eq!(echoed, Some(stored));
    let request = rx.recv().unwrap();
    assert_eq!(request.line, "PUT /api/fumetti/update-fumetto/4 HTTP/1.1");
    assert!(request.body.contains(r#""fumettoId":4"#));
}

#[tokio::test]
async fn test_delete_accepts_text_reply() {
    let (client, rx) = serve(vec![reply("200 OK", Some("text/plain"), "Fumetto eliminato")]);

    CrudBackend::<Comic>::delete(&client, 12).await.unwrap();

    let request = rx.recv().unwrap();
    assert_eq!(request.line, "DELETE /api/fumetti/delete-fumetto/12 HTTP/1.1");
    assert!(request.body.is_empty());
}

#[tokio::test]
async fn test_no_content_is_success() {
    let (client, _rx) = serve(vec![reply("204 No Content", None, "")]);

    let echoed = CrudBackend::<Comic>::update(&client, 1, &tex()).await.unwrap();

    assert_eq!(echoed, None);
}

#[tokio::test]
async fn test_unavailable_status_carries_backend_message() {
    let (client, _rx) = serve(vec![json(
        "503 Service Unavailable",
        r#"{"message":"Database non raggiungibile"}"#,
    )]);

    let err = CrudBackend::<Comic>::list(&client).await.unwrap_err();

    assert_eq!(
        err,
        ApiError::Status { status: 503, message: Some("Database non raggiungibile".to_string()) }
    );
    assert!(err.is_backend_unavailable());
    assert_eq!(err.user_message(), "Database non raggiungibile");
}

#[tokio::test]
async fn test_accepted_is_not_success() {
    let (client, _rx) = serve(vec![reply("202 Accepted", None, "")]);

    let err = CrudBackend::<Comic>::delete(&client, 1).await.unwrap_err();

    assert_eq!(err, ApiError::Status { status: 202, message: None });
    assert!(!err.is_backend_unavailable());
}

#[tokio::test]
async fn test_malformed_listing_is_decode_error() {
    let (client, _rx) = serve(vec![json("200 OK", r#"{"not":"a list"}"#)]);

    let err = CrudBackend::<Comic>::list(&client).await.unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)), "{:?}", err);
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
    let client = ApiClient::new(format!("http://{}/api", addr));

    let err = CrudBackend::<Comic>::list(&client).await.unwrap_err();

    assert!(matches!(err, ApiError::Network(_)), "{:?}", err);
    assert!(err.is_backend_unavailable());
}
