use super::*;

/// Tests the second page of 15 servers.
///
/// Expected: 200 with 5 results, 2 pages and 15 results in total
#[tokio::test]
async fn returns_second_page() -> Result<(), TestError> {
    let app = TestApp::new().await?;

    let created = factory::create_servers(&app.db, 15).await?;

    let response = app.send_empty("GET", "/servers?limit=10&page=2").await;

    assert_eq!(response.status(), StatusCode::OK);
    let page: PaginatedServersDto = read_json(response).await;
    assert_eq!(page.page, 2);
    assert_eq!(page.limit, 10);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.total_results, 15);
    let ids: Vec<i32> = page.results.iter().map(|s| s.id).collect();
    let expected: Vec<i32> = created[10..].iter().map(|s| s.id).collect();
    assert_eq!(ids, expected);

    Ok(())
}

/// Tests filtering and sorting through the query string.
///
/// Expected: only matching servers, in the requested order
#[tokio::test]
async fn filters_and_sorts() -> Result<(), TestError> {
    let app = TestApp::new().await?;

    let first = factory::server::ServerFactory::new(&app.db)
        .name("edge")
        .build()
        .await?;
    let second = factory::server::ServerFactory::new(&app.db)
        .name("edge")
        .build()
        .await?;
    factory::server::ServerFactory::new(&app.db)
        .name("core")
        .build()
        .await?;

    let response = app
        .send_empty("GET", "/servers?name=edge&sortBy=id:desc")
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let page: PaginatedServersDto = read_json(response).await;
    let ids: Vec<i32> = page.results.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
    assert_eq!(page.total_results, 2);

    Ok(())
}

/// Tests query keys outside the allow-list.
///
/// Expected: 400
#[tokio::test]
async fn rejects_unknown_query_keys() -> Result<(), TestError> {
    let app = TestApp::new().await?;

    let response = app.send_empty("GET", "/servers?role=admin").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = read_json(response).await;
    assert_eq!(error.message, "\"role\" is not allowed");

    Ok(())
}

/// Tests invalid paging values.
///
/// Expected: 400
#[tokio::test]
async fn rejects_invalid_limit() -> Result<(), TestError> {
    let app = TestApp::new().await?;

    let response = app.send_empty("GET", "/servers?limit=0").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests a page whose row offset does not fit the database offset type.
///
/// Expected: 400 naming the highest accepted page, no database query
#[tokio::test]
async fn rejects_page_beyond_offset_range() -> Result<(), TestError> {
    let app = TestApp::new().await?;

    factory::create_servers(&app.db, 3).await?;

    let response = app
        .send_empty("GET", "/servers?page=9223372036854775807")
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = read_json(response).await;
    assert_eq!(
        error.message,
        "\"page\" must be less than or equal to 922337203685477580"
    );

    Ok(())
}

/// Tests the page size cap.
///
/// Expected: 400
#[tokio::test]
async fn rejects_limit_over_cap() -> Result<(), TestError> {
    let app = TestApp::new().await?;

    let response = app.send_empty("GET", "/servers?limit=101").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = read_json(response).await;
    assert_eq!(error.message, "\"limit\" must be less than or equal to 100");

    Ok(())
}
