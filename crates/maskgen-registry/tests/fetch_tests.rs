//! Integration tests for maskgen-registry
//!
//! A one-shot HTTP server on the loopback interface stands in for the
//! regulator's site, so these tests need no outside network.

use maskgen_registry::{
    load_records, RecordFilter, RegistryClient, RegistryConfig, RegistryError, Source,
};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const REGISTRY: &str = "АВС/ DEF;От;До;Емкость;Оператор;Регион\n\
    916;0000000;0999999;1000000;ПАО \"МТС\";г. Москва\n\
    955;5550000;5559999;10000;ООО \"Оператор\";г. Санкт-Петербург;Ленинградская область\n";

/// Serve each canned response to one connection, in order
async fn serve(responses: Vec<(u16, Vec<u8>)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        for (status, body) in responses {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await.unwrap();

            let head = format!(
                "HTTP/1.1 {} X\r\nContent-Type: text/csv\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                status,
                body.len()
            );
            socket.write_all(head.as_bytes()).await.unwrap();
            socket.write_all(&body).await.unwrap();
            socket.shutdown().await.unwrap();
        }
    });

    format!("http://{}/docs/articles/DEF-9x.csv", addr)
}

fn windows_1251(text: &str) -> Vec<u8> {
    let (bytes, _, had_errors) = encoding_rs::WINDOWS_1251.encode(text);
    assert!(!had_errors);
    bytes.into_owned()
}

fn client() -> RegistryClient {
    RegistryClient::new(RegistryConfig::default())
        .unwrap()
        .with_backoff(Duration::from_millis(10))
}

#[tokio::test]
async fn test_download_decode_and_parse() {
    let url = serve(vec![(200, windows_1251(REGISTRY))]).await;

    let records = load_records(&client(), &Source::Url(url)).await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].region, "г. Москва");
    assert_eq!(records[1].region, "г. Санкт-Петербург Ленинградская область");

    let moscow = RecordFilter::new().with_region("москва").apply(records);
    assert_eq!(moscow.len(), 1);
    assert_eq!(moscow[0].code, "916");
}

#[tokio::test]
async fn test_retry_after_server_error() {
    let url = serve(vec![
        (503, b"busy".to_vec()),
        (200, windows_1251(REGISTRY)),
    ])
    .await;

    let records = load_records(&client(), &Source::Url(url)).await.unwrap();
    assert_eq!(records.len(), 2);
}

#[tokio::test]
async fn test_not_found_is_not_retried() {
    let url = serve(vec![(404, Vec::new())]).await;

    let result = client().fetch(&url).await;

    assert!(matches!(result, Err(RegistryError::NotFound(_))));
}

#[tokio::test]
async fn test_gives_up_after_max_retries() {
    let url = serve(vec![(500, Vec::new()), (500, Vec::new())]).await;
    let config = RegistryConfig {
        max_retries: 2,
        ..RegistryConfig::default()
    };
    let client = RegistryClient::new(config)
        .unwrap()
        .with_backoff(Duration::from_millis(10));

    let result = client.fetch(&url).await;

    assert!(matches!(result, Err(RegistryError::Status { status: 500, .. })));
}

#[tokio::test]
async fn test_local_file_source() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("DEF-9x.csv");
    std::fs::write(&path, windows_1251(REGISTRY)).unwrap();

    let records = load_records(&client(), &Source::File(path)).await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[1].code, "955");
}
