use sea_orm::DatabaseConnection;

use crate::server::{
    data::server::ServerRepository,
    error::AppError,
    model::server::{
        CreateServerParams, PaginatedServers, QueryOptions, Server, ServerFilter, ServerUpdate,
        UpdateServerParams,
    },
};

const NOT_FOUND: &str = "Server not found";

pub struct ServerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new server
    ///
    /// A duplicate IP surfaces as `AppError::DbErr`, which responds with 409 Conflict.
    pub async fn create(&self, params: CreateServerParams) -> Result<Server, AppError> {
        let repo = ServerRepository::new(self.db);

        let server = repo.create(params).await?;

        tracing::info!("Created server {} ({})", server.id, server.ip);

        Ok(server)
    }

    /// Gets one page of servers matching `filter`
    pub async fn query(
        &self,
        filter: ServerFilter,
        options: QueryOptions,
    ) -> Result<PaginatedServers, AppError> {
        let repo = ServerRepository::new(self.db);

        let limit = options.limit.max(1);
        let page = options.page.max(1);

        let (servers, total) = repo
            .get_paginated(&filter, &options.sort_by, page - 1, limit)
            .await?;

        Ok(PaginatedServers {
            servers,
            page,
            limit,
            total_pages: total.div_ceil(limit),
            total_results: total,
        })
    }

    /// Gets a server by ID, `None` when it doesn't exist
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Server>, AppError> {
        let repo = ServerRepository::new(self.db);

        Ok(repo.find_by_id(id).await?)
    }

    /// Applies `params` to an existing server
    ///
    /// # Returns
    /// - `Ok(ServerUpdate)` - The updated server and the file references it dropped
    /// - `Err(AppError::NotFound)` - No server has this ID
    /// - `Err(AppError::DbErr)` - Database error, including a duplicate IP
    pub async fn update_by_id(
        &self,
        id: i32,
        params: UpdateServerParams,
    ) -> Result<ServerUpdate, AppError> {
        let repo = ServerRepository::new(self.db);

        let Some(mut server) = repo.find_by_id(id).await? else {
            return Err(AppError::NotFound(NOT_FOUND.to_string()));
        };

        let replaced_files = server.apply(params);
        let server = repo.update(server).await?;

        tracing::info!("Updated server {}", server.id);

        Ok(ServerUpdate {
            server,
            replaced_files,
        })
    }

    /// Deletes a server
    ///
    /// # Returns
    /// - `Ok(Server)` - The removed server, so its stored files can be cleaned up
    /// - `Err(AppError::NotFound)` - No server has this ID
    pub async fn delete_by_id(&self, id: i32) -> Result<Server, AppError> {
        let repo = ServerRepository::new(self.db);

        let Some(server) = repo.find_by_id(id).await? else {
            return Err(AppError::NotFound(NOT_FOUND.to_string()));
        };

        // Removed concurrently between the lookup and the delete
        if repo.delete(id).await? == 0 {
            return Err(AppError::NotFound(NOT_FOUND.to_string()));
        }

        tracing::info!("Deleted server {}", server.id);

        Ok(server)
    }
}
