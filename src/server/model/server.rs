//! Domain & parameter models for server operations
//!
//! Defines the server domain model, the create/update parameter models, the
//! typed filter and query options used for listing, and conversions from the
//! entity model and into DTOs.

use chrono::{DateTime, Utc};

use crate::{
    model::server::{PaginatedServersDto, ServerDto},
    server::{
        model::upload::{UploadField, Uploads},
        validation::server::{CreateServerBody, FileChange, UpdateServerBody},
    },
};

/// Default number of servers per page
pub const DEFAULT_LIMIT: u64 = 10;
/// Largest accepted number of servers per page
pub const MAX_LIMIT: u64 = 100;
/// Default page, 1-based
pub const DEFAULT_PAGE: u64 = 1;

/// The server domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Server {
    pub id: i32,
    pub name: String,
    pub ip: String,
    pub flag: String,
    pub file: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Server {
    /// Converts an entity model to the server domain model
    pub fn from_entity(entity: entity::server::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            ip: entity.ip,
            flag: entity.flag,
            file: entity.file,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the domain model into its DTO, dropping the timestamps
    pub fn into_dto(self) -> ServerDto {
        ServerDto {
            id: self.id,
            name: self.name,
            ip: self.ip,
            flag: self.flag,
            file: self.file,
        }
    }

    /// Assigns every field present in `params`, leaving the rest untouched
    ///
    /// # Returns
    /// - `Vec<String>` - Stored filenames no longer referenced after the update
    pub fn apply(&mut self, params: UpdateServerParams) -> Vec<String> {
        if let Some(name) = params.name {
            self.name = name;
        }
        if let Some(ip) = params.ip {
            self.ip = ip;
        }

        let mut replaced = Vec::new();
        for (current, new) in [(&mut self.flag, params.flag), (&mut self.file, params.file)] {
            let Some(new) = new else {
                continue;
            };
            let old = std::mem::replace(current, new);
            if !old.is_empty() && old != *current {
                replaced.push(old);
            }
        }

        replaced
    }
}

/// A stored update along with the file references it dropped
#[derive(Debug, Clone, PartialEq)]
pub struct ServerUpdate {
    pub server: Server,
    pub replaced_files: Vec<String>,
}

/// Parameters for creating a new server
#[derive(Debug, Clone, PartialEq)]
pub struct CreateServerParams {
    pub name: String,
    pub ip: String,
    pub flag: String,
    pub file: String,
}

impl CreateServerParams {
    /// Merges the stored filenames of the request's uploads into the validated body.
    ///
    /// Fields without an upload default to an empty string.
    pub fn from_body(body: CreateServerBody, uploads: &Uploads) -> Self {
        Self {
            name: body.name,
            ip: body.ip,
            flag: uploads.filename(UploadField::Flag).unwrap_or_default(),
            file: uploads.filename(UploadField::File).unwrap_or_default(),
        }
    }
}

/// Parameters for updating an existing server
///
/// `None` leaves the stored value as it is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateServerParams {
    pub name: Option<String>,
    pub ip: Option<String>,
    pub flag: Option<String>,
    pub file: Option<String>,
}

impl UpdateServerParams {
    /// Merges uploads into the validated body.
    ///
    /// An uploaded file replaces the stored reference, an explicit `null` clears it and
    /// anything else keeps it.
    pub fn from_body(body: UpdateServerBody, uploads: &Uploads) -> Self {
        let file_ref = |field: UploadField, change: FileChange| {
            uploads.filename(field).or(match change {
                FileChange::Keep => None,
                FileChange::Clear => Some(String::new()),
            })
        };

        Self {
            name: body.name,
            ip: body.ip,
            flag: file_ref(UploadField::Flag, body.flag),
            file: file_ref(UploadField::File, body.file),
        }
    }
}

/// Equality filters for listing servers; `None` matches everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerFilter {
    pub name: Option<String>,
    pub ip: Option<String>,
    pub flag: Option<String>,
    pub file: Option<String>,
}

/// Server attributes results can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Name,
    Ip,
    Flag,
    File,
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "ip" => Some(Self::Ip),
            "flag" => Some(Self::Flag),
            "file" => Some(Self::File),
            "createdAt" => Some(Self::CreatedAt),
            "updatedAt" => Some(Self::UpdatedAt),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortCriterion {
    pub field: SortField,
    pub direction: SortDirection,
}

/// Sorting and paging options for listing servers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOptions {
    pub sort_by: Vec<SortCriterion>,
    pub limit: u64,
    /// 1-based page number
    pub page: u64,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            sort_by: Vec::new(),
            limit: DEFAULT_LIMIT,
            page: DEFAULT_PAGE,
        }
    }
}

/// A page of servers with paging metadata
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedServers {
    pub servers: Vec<Server>,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
    pub total_results: u64,
}

impl PaginatedServers {
    pub fn into_dto(self) -> PaginatedServersDto {
        PaginatedServersDto {
            results: self.servers.into_iter().map(Server::into_dto).collect(),
            page: self.page,
            limit: self.limit,
            total_pages: self.total_pages,
            total_results: self.total_results,
        }
    }
}
