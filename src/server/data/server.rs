//! Server data repository for database operations
//!
//! Provides the `ServerRepository` for creating, reading, updating, deleting and paging
//! server records, converting entity models into server domain models for use within
//! services & controllers.

use chrono::Utc;
use entity::server::{ActiveModel, Column};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, Order,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::server::{
    CreateServerParams, Server, ServerFilter, SortCriterion, SortDirection, SortField,
};

/// Repository providing database operations for server management.
pub struct ServerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerRepository<'a> {
    /// Creates a new ServerRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new server
    ///
    /// # Arguments
    /// - `params` - Validated creation data
    ///
    /// # Returns
    /// - `Ok(Server)` - The created server as a domain model
    /// - `Err(DbErr)` - Database error during insert, including a duplicate `ip`
    pub async fn create(&self, params: CreateServerParams) -> Result<Server, DbErr> {
        let now = Utc::now();

        let entity = ActiveModel {
            name: ActiveValue::Set(params.name),
            ip: ActiveValue::Set(params.ip),
            flag: ActiveValue::Set(params.flag),
            file: ActiveValue::Set(params.file),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Server::from_entity(entity))
    }

    /// Finds a server by ID
    ///
    /// # Returns
    /// - `Ok(Some(Server))` - The server if found
    /// - `Ok(None)` - No server has this ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Server>, DbErr> {
        let entity = entity::prelude::Server::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Server::from_entity))
    }

    /// Gets one page of servers matching `filter`
    ///
    /// Results are ordered by `sort_by` and finally by ID ascending.
    ///
    /// # Arguments
    /// - `filter` - Equality filters, `None` fields match everything
    /// - `sort_by` - Sort criteria applied in order
    /// - `page` - Zero-based page index
    /// - `per_page` - Number of servers per page
    ///
    /// # Returns
    /// - `Ok((Vec<Server>, u64))` - The page of servers and the total number of matches
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        filter: &ServerFilter,
        sort_by: &[SortCriterion],
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Server>, u64), DbErr> {
        let mut query = entity::prelude::Server::find();

        for (column, value) in [
            (Column::Name, &filter.name),
            (Column::Ip, &filter.ip),
            (Column::Flag, &filter.flag),
            (Column::File, &filter.file),
        ] {
            if let Some(value) = value {
                query = query.filter(column.eq(value.as_str()));
            }
        }

        for criterion in sort_by {
            query = query.order_by(sort_column(criterion.field), sort_order(criterion.direction));
        }
        query = query.order_by_asc(Column::Id);

        let paginator = query.paginate(self.db, per_page);
        let total = paginator.num_items().await?;
        let servers = paginator.fetch_page(page).await?;

        Ok((servers.into_iter().map(Server::from_entity).collect(), total))
    }

    /// Persists every field of `server` and refreshes its `updated_at`
    ///
    /// # Returns
    /// - `Ok(Server)` - The updated server
    /// - `Err(DbErr::RecordNotUpdated)` - No server has this ID
    /// - `Err(DbErr)` - Database error during update, including a duplicate `ip`
    pub async fn update(&self, server: Server) -> Result<Server, DbErr> {
        let entity = ActiveModel {
            id: ActiveValue::Unchanged(server.id),
            name: ActiveValue::Set(server.name),
            ip: ActiveValue::Set(server.ip),
            flag: ActiveValue::Set(server.flag),
            file: ActiveValue::Set(server.file),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Server::from_entity(entity))
    }

    /// Deletes the server with the provided ID
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted rows, 0 when no server has this ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Server::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

fn sort_column(field: SortField) -> Column {
    match field {
        SortField::Id => Column::Id,
        SortField::Name => Column::Name,
        SortField::Ip => Column::Ip,
        SortField::Flag => Column::Flag,
        SortField::File => Column::File,
        SortField::CreatedAt => Column::CreatedAt,
        SortField::UpdatedAt => Column::UpdatedAt,
    }
}

fn sort_order(direction: SortDirection) -> Order {
    match direction {
        SortDirection::Asc => Order::Asc,
        SortDirection::Desc => Order::Desc,
    }
}
