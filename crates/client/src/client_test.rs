use super::*;

fn thread_body(slug: &str, message_count: usize) -> String {
    let messages: Vec<_> = (0..message_count)
        .map(|i| {
            serde_json::json!({
                "id": i + 1,
                "threadId": 1,
                "content": format!("snippet {i}"),
                "language": "javascript",
                "isCode": true,
                "createdAt": "2024-01-01T00:00:00Z",
            })
        })
        .collect();
    serde_json::json!({
        "id": 1,
        "slug": slug,
        "locked": false,
        "createdAt": "2024-01-01T00:00:00Z",
        "messages": messages,
    })
    .to_string()
}

#[tokio::test]
async fn create_thread_decodes_share_link() {
    let mut server = mockito::Server::new_async().await;
    let handler = server
        .mock("POST", "/api/threads")
        .with_status(201)
        .with_body(r#"{"slug":"a1b2","threadId":1}"#)
        .create_async()
        .await;

    let client = ThreadClient::new(server.url());
    let created = client.create_thread("print('hi')", Some("python")).await.unwrap();
    assert_eq!(created.slug, "a1b2");
    assert_eq!(created.thread_id, 1);
    handler.assert_async().await;
}

#[tokio::test]
async fn error_body_surfaces_as_api_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/threads")
        .with_status(400)
        .with_body(r#"{"error":"Content is required"}"#)
        .create_async()
        .await;

    let client = ThreadClient::new(server.url());
    let err = client.create_thread("", None).await.unwrap_err();
    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Content is required");
        },
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn locked_refusal_is_recognizable() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/messages/a1b2")
        .with_status(403)
        .with_body(r#"{"error":"Thread is locked"}"#)
        .create_async()
        .await;

    let client = ThreadClient::new(server.url());
    let err = client.send_message("a1b2", "more", None).await.unwrap_err();
    assert!(err.is_locked());
    assert!(!err.is_not_found());
}

#[tokio::test]
async fn cached_read_refetches_only_after_mutation() {
    let mut server = mockito::Server::new_async().await;
    let get_handler = server
        .mock("GET", "/api/threads/a1b2")
        .with_status(200)
        .with_body(thread_body("a1b2", 1))
        .expect(2)
        .create_async()
        .await;
    server
        .mock("POST", "/api/messages/a1b2")
        .with_status(201)
        .with_body(
            r#"{"id":2,"threadId":1,"content":"more","language":"javascript",
               "isCode":true,"createdAt":"2024-01-01T00:00:00Z"}"#,
        )
        .create_async()
        .await;

    let client = ThreadClient::new(server.url());
    // Two reads, one network hit: the second is served from the cache.
    client.thread("a1b2").await.unwrap();
    client.thread("a1b2").await.unwrap();
    // Mutation drops the cache entry, so the next read refetches.
    client.send_message("a1b2", "more", None).await.unwrap();
    client.thread("a1b2").await.unwrap();
    get_handler.assert_async().await;
}
