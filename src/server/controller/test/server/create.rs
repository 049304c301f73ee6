use super::*;

/// Tests creating a server from a JSON body.
///
/// Expected: 201 echoing the input with empty file references
#[tokio::test]
async fn creates_server_from_json() -> Result<(), TestError> {
    let app = TestApp::new().await?;

    let response = app
        .send_json("POST", "/servers", json!({"name": "test server", "ip": "1.1.1.1"}))
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let server: ServerDto = read_json(response).await;
    assert!(server.id > 0);
    assert_eq!(server.name, "test server");
    assert_eq!(server.ip, "1.1.1.1");
    assert_eq!(server.flag, "");
    assert_eq!(server.file, "");

    Ok(())
}

/// Tests creating a server from a multipart form with both uploads.
///
/// Expected: 201 with the stored filenames recorded and present on disk
#[tokio::test]
async fn creates_server_with_uploads() -> Result<(), TestError> {
    let app = TestApp::new().await?;

    let response = app
        .send_multipart(
            "POST",
            "/servers",
            MultipartBody::new()
                .text("name", "edge")
                .text("ip", "2001:db8::1")
                .file("flag", "flag.png", "image/png", b"png".to_vec())
                .file("file", "edge.conf", "conf", b"listen 80;".to_vec()),
        )
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let server: ServerDto = read_json(response).await;
    assert!(server.flag.ends_with("-flag.png"));
    assert!(server.file.ends_with("-edge.conf"));

    let mut expected = vec![server.flag.clone(), server.file.clone()];
    expected.sort();
    assert_eq!(app.stored_files(), expected);

    Ok(())
}

/// Tests a second server with the same IP.
///
/// Expected: 409, the first server unchanged and the rejected upload removed
#[tokio::test]
async fn rejects_duplicate_ip() -> Result<(), TestError> {
    let app = TestApp::new().await?;

    let existing = factory::server::ServerFactory::new(&app.db)
        .name("first")
        .ip("1.1.1.1")
        .build()
        .await?;

    let response = app
        .send_multipart(
            "POST",
            "/servers",
            MultipartBody::new()
                .text("name", "second")
                .text("ip", "1.1.1.1")
                .file("flag", "flag.png", "image/png", b"png".to_vec()),
        )
        .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let error: ErrorDto = read_json(response).await;
    assert_eq!(error.code, 409);
    assert!(app.stored_files().is_empty());

    let response = app
        .send_empty("GET", &format!("/servers/{}", existing.id))
        .await;
    let server: ServerDto = read_json(response).await;
    assert_eq!(server.name, "first");

    Ok(())
}

/// Tests missing and malformed fields.
///
/// Expected: 400 listing every problem
#[tokio::test]
async fn rejects_invalid_body() -> Result<(), TestError> {
    let app = TestApp::new().await?;

    let response = app
        .send_json("POST", "/servers", json!({"ip": "999.1.1.1"}))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = read_json(response).await;
    assert_eq!(
        error.message,
        "\"name\" is required, \"ip\" must be a valid ip address"
    );

    Ok(())
}

/// Tests a flag upload with a non-image content type.
///
/// Expected: 400 and the uploaded files removed
#[tokio::test]
async fn rejects_invalid_flag_and_discards_uploads() -> Result<(), TestError> {
    let app = TestApp::new().await?;

    let response = app
        .send_multipart(
            "POST",
            "/servers",
            MultipartBody::new()
                .text("name", "edge")
                .text("ip", "10.9.9.9")
                .file("flag", "flag.txt", "text/plain", b"text".to_vec())
                .file("file", "edge.conf", "conf", b"conf".to_vec()),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = read_json(response).await;
    assert!(error.message.contains("\"flag.headers.content-type\""));
    assert!(app.stored_files().is_empty());

    Ok(())
}

/// Tests bodies that are neither multipart nor JSON.
///
/// Expected: 415
#[tokio::test]
async fn rejects_unsupported_content_type() -> Result<(), TestError> {
    let app = TestApp::new().await?;

    let request = app
        .request("POST", "/servers")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("name=edge&ip=1.1.1.1"))
        .unwrap();
    let response = app.send(request).await;

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

    Ok(())
}

/// Tests malformed JSON.
///
/// Expected: 400
#[tokio::test]
async fn rejects_malformed_json() -> Result<(), TestError> {
    let app = TestApp::new().await?;

    let request = app
        .request("POST", "/servers")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let response = app.send(request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
