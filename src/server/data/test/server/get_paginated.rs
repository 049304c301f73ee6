use super::*;

/// Tests paging through servers in insertion order.
///
/// Verifies that the second page of 15 servers with 10 per page holds the last
/// five servers and that the total counts every server.
///
/// Expected: Ok with 5 servers and total of 15
#[tokio::test]
async fn returns_second_page_in_insertion_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_servers(db, 15).await?;

    let repo = ServerRepository::new(db);
    let (servers, total) = repo
        .get_paginated(&ServerFilter::default(), &[], 1, 10)
        .await?;

    assert_eq!(total, 15);
    assert_eq!(servers.len(), 5);
    let ids: Vec<i32> = servers.iter().map(|s| s.id).collect();
    let expected: Vec<i32> = created[10..].iter().map(|s| s.id).collect();
    assert_eq!(ids, expected);

    Ok(())
}

/// Tests an out of range page.
///
/// Expected: Ok with no servers but the full total
#[tokio::test]
async fn returns_empty_page_past_the_end() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_servers(db, 3).await?;

    let repo = ServerRepository::new(db);
    let (servers, total) = repo
        .get_paginated(&ServerFilter::default(), &[], 5, 10)
        .await?;

    assert!(servers.is_empty());
    assert_eq!(total, 3);

    Ok(())
}

/// Tests equality filters.
///
/// Verifies that only servers matching every given filter are returned and
/// counted.
///
/// Expected: Ok with the single matching server
#[tokio::test]
async fn filters_by_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::server::ServerFactory::new(db)
        .name("edge")
        .ip("10.0.0.1")
        .build()
        .await?;
    let target = factory::server::ServerFactory::new(db)
        .name("edge")
        .ip("10.0.0.2")
        .file("edge.conf")
        .build()
        .await?;
    factory::server::ServerFactory::new(db)
        .name("core")
        .ip("10.0.0.3")
        .build()
        .await?;

    let repo = ServerRepository::new(db);

    let (servers, total) = repo
        .get_paginated(
            &ServerFilter {
                name: Some("edge".to_string()),
                ..Default::default()
            },
            &[],
            0,
            10,
        )
        .await?;
    assert_eq!(total, 2);
    assert!(servers.iter().all(|s| s.name == "edge"));

    let (servers, total) = repo
        .get_paginated(
            &ServerFilter {
                name: Some("edge".to_string()),
                file: Some("edge.conf".to_string()),
                ..Default::default()
            },
            &[],
            0,
            10,
        )
        .await?;
    assert_eq!(total, 1);
    assert_eq!(servers[0].id, target.id);

    Ok(())
}

/// Tests sort criteria with the ID tiebreak.
///
/// Verifies that servers are ordered by name descending and servers sharing a
/// name fall back to ID ascending.
///
/// Expected: Ok with servers in the requested order
#[tokio::test]
async fn sorts_by_criteria_then_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alpha = factory::server::ServerFactory::new(db)
        .name("alpha")
        .build()
        .await?;
    let bravo_1 = factory::server::ServerFactory::new(db)
        .name("bravo")
        .build()
        .await?;
    let bravo_2 = factory::server::ServerFactory::new(db)
        .name("bravo")
        .build()
        .await?;

    let repo = ServerRepository::new(db);
    let (servers, _) = repo
        .get_paginated(
            &ServerFilter::default(),
            &[SortCriterion {
                field: SortField::Name,
                direction: SortDirection::Desc,
            }],
            0,
            10,
        )
        .await?;

    let ids: Vec<i32> = servers.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![bravo_1.id, bravo_2.id, alpha.id]);

    Ok(())
}
