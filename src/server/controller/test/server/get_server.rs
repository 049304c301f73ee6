use super::*;

/// Tests fetching an existing server.
///
/// Expected: 200 with the server
#[tokio::test]
async fn returns_server() -> Result<(), TestError> {
    let app = TestApp::new().await?;

    let existing = factory::server::ServerFactory::new(&app.db)
        .name("edge")
        .ip("10.3.0.1")
        .file("edge.conf")
        .build()
        .await?;

    let response = app
        .send_empty("GET", &format!("/servers/{}", existing.id))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let server: ServerDto = read_json(response).await;
    assert_eq!(
        server,
        ServerDto {
            id: existing.id,
            name: "edge".to_string(),
            ip: "10.3.0.1".to_string(),
            flag: String::new(),
            file: "edge.conf".to_string(),
        }
    );

    Ok(())
}

/// Tests fetching a server that doesn't exist.
///
/// Expected: 404 with "Server not found"
#[tokio::test]
async fn returns_not_found() -> Result<(), TestError> {
    let app = TestApp::new().await?;

    let response = app.send_empty("GET", "/servers/12345").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error: ErrorDto = read_json(response).await;
    assert_eq!(error.message, "Server not found");

    Ok(())
}

/// Tests a malformed server ID.
///
/// Expected: 400
#[tokio::test]
async fn rejects_invalid_id() -> Result<(), TestError> {
    let app = TestApp::new().await?;

    let response = app.send_empty("GET", "/servers/abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = read_json(response).await;
    assert_eq!(error.message, "\"serverId\" must be a valid id");

    Ok(())
}
