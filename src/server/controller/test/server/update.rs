use super::*;

/// Tests a PATCH without a body.
///
/// Expected: 400 before reaching the service, server unchanged
#[tokio::test]
async fn rejects_empty_update() -> Result<(), TestError> {
    let app = TestApp::new().await?;

    let existing = factory::create_server(&app.db).await?;

    let response = app
        .send_empty("PATCH", &format!("/servers/{}", existing.id))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = read_json(response).await;
    assert_eq!(error.message, "\"value\" must have at least 1 key");

    Ok(())
}

/// Tests renaming without re-uploading files.
///
/// Expected: 200 with the stored file references untouched
#[tokio::test]
async fn keeps_file_refs_without_upload() -> Result<(), TestError> {
    let app = TestApp::new().await?;

    let existing = factory::server::ServerFactory::new(&app.db)
        .flag("1-aa-flag.png")
        .file("1-bb-edge.conf")
        .build()
        .await?;

    let response = app
        .send_multipart(
            "PATCH",
            &format!("/servers/{}", existing.id),
            MultipartBody::new().text("name", "renamed"),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let server: ServerDto = read_json(response).await;
    assert_eq!(server.name, "renamed");
    assert_eq!(server.ip, existing.ip);
    assert_eq!(server.flag, "1-aa-flag.png");
    assert_eq!(server.file, "1-bb-edge.conf");

    Ok(())
}

/// Tests replacing the flag with a new upload.
///
/// Expected: 200 with the new stored filename, the old flag removed from disk
#[tokio::test]
async fn replaces_file_ref_with_upload() -> Result<(), TestError> {
    let app = TestApp::new().await?;

    std::fs::write(app.upload_dir.join("1-aa-flag.png"), b"png")?;
    let existing = factory::server::ServerFactory::new(&app.db)
        .flag("1-aa-flag.png")
        .build()
        .await?;

    let response = app
        .send_multipart(
            "PATCH",
            &format!("/servers/{}", existing.id),
            MultipartBody::new().file("flag", "new.gif", "image/gif", b"gif".to_vec()),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let server: ServerDto = read_json(response).await;
    assert!(server.flag.ends_with("-new.gif"));
    assert_eq!(app.stored_files(), vec![server.flag.clone()]);

    Ok(())
}

/// Tests clearing a file reference with an explicit null.
///
/// Expected: 200 with the file reference emptied and only the cleared file removed
#[tokio::test]
async fn clears_file_ref_with_null() -> Result<(), TestError> {
    let app = TestApp::new().await?;

    std::fs::write(app.upload_dir.join("1-aa-flag.png"), b"png")?;
    std::fs::write(app.upload_dir.join("1-bb-edge.conf"), b"conf")?;
    let existing = factory::server::ServerFactory::new(&app.db)
        .flag("1-aa-flag.png")
        .file("1-bb-edge.conf")
        .build()
        .await?;

    let response = app
        .send_json(
            "PATCH",
            &format!("/servers/{}", existing.id),
            json!({"file": null}),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let server: ServerDto = read_json(response).await;
    assert_eq!(server.flag, "1-aa-flag.png");
    assert_eq!(server.file, "");
    assert_eq!(app.stored_files(), vec!["1-aa-flag.png"]);

    Ok(())
}

/// Tests replacing a configuration file in a multipart update.
///
/// Expected: 200 with the new `conf` upload stored and the old one removed
#[tokio::test]
async fn replaces_config_file() -> Result<(), TestError> {
    let app = TestApp::new().await?;

    std::fs::write(app.upload_dir.join("1-bb-edge.conf"), b"listen 80;")?;
    let existing = factory::server::ServerFactory::new(&app.db)
        .file("1-bb-edge.conf")
        .build()
        .await?;

    let response = app
        .send_multipart(
            "PATCH",
            &format!("/servers/{}", existing.id),
            MultipartBody::new().file("file", "edge.conf", "conf", b"listen 443;".to_vec()),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let server: ServerDto = read_json(response).await;
    assert!(server.file.ends_with("-edge.conf"));
    assert_ne!(server.file, "1-bb-edge.conf");
    assert_eq!(app.stored_files(), vec![server.file.clone()]);
    assert_eq!(
        std::fs::read(app.upload_dir.join(&server.file))?,
        b"listen 443;"
    );

    Ok(())
}

/// Tests updating a server that doesn't exist.
///
/// Expected: 404 and the upload removed
#[tokio::test]
async fn returns_not_found_and_discards_upload() -> Result<(), TestError> {
    let app = TestApp::new().await?;

    let response = app
        .send_multipart(
            "PATCH",
            "/servers/999",
            MultipartBody::new().file("file", "edge.conf", "conf", b"conf".to_vec()),
        )
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(app.stored_files().is_empty());

    Ok(())
}

/// Tests moving a server onto another server's IP.
///
/// Expected: 409
#[tokio::test]
async fn rejects_duplicate_ip() -> Result<(), TestError> {
    let app = TestApp::new().await?;

    let first = factory::create_server(&app.db).await?;
    let second = factory::create_server(&app.db).await?;

    let response = app
        .send_json(
            "PATCH",
            &format!("/servers/{}", second.id),
            json!({"ip": first.ip}),
        )
        .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);

    Ok(())
}
