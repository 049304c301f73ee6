use super::*;

/// Tests a partial update.
///
/// Verifies that only the given fields change and file references without a new
/// value are kept.
///
/// Expected: Ok with the merged server
#[tokio::test]
async fn updates_given_fields_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::server::ServerFactory::new(db)
        .name("before")
        .ip("10.2.0.1")
        .flag("flag.png")
        .file("server.conf")
        .build()
        .await?;

    let service = ServerService::new(db);
    let update = service
        .update_by_id(
            existing.id,
            UpdateServerParams {
                name: Some("after".to_string()),
                file: Some(String::new()),
                ..Default::default()
            },
        )
        .await?;

    let server = update.server;
    assert_eq!(server.name, "after");
    assert_eq!(server.ip, "10.2.0.1");
    assert_eq!(server.flag, "flag.png");
    assert_eq!(server.file, "");
    assert_eq!(update.replaced_files, vec!["server.conf"]);

    Ok(())
}

/// Tests updating a server that doesn't exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_server() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ServerService::new(db);
    let result = service
        .update_by_id(
            7,
            UpdateServerParams {
                name: Some("ghost".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests updating to another server's IP.
///
/// Expected: Err(AppError::DbErr) with the stored server unchanged
#[tokio::test]
async fn propagates_duplicate_ip() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_server(db).await?;
    let second = factory::create_server(db).await?;

    let service = ServerService::new(db);
    let result = service
        .update_by_id(
            second.id,
            UpdateServerParams {
                ip: Some(first.ip.clone()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
    assert_eq!(service.get_by_id(second.id).await?.unwrap().ip, second.ip);

    Ok(())
}
