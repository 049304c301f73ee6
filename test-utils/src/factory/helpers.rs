//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates `count` servers with default values, in insertion order.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of servers to create
///
/// # Returns
/// - `Ok(Vec<entity::server::Model>)` - Created servers, first inserted first
/// - `Err(DbErr)` - Database error during creation
pub async fn create_servers(
    db: &DatabaseConnection,
    count: usize,
) -> Result<Vec<entity::server::Model>, DbErr> {
    let mut servers = Vec::with_capacity(count);
    for _ in 0..count {
        servers.push(crate::factory::server::create_server(db).await?);
    }

    Ok(servers)
}
