use crate::server::{
    error::AppError,
    model::server::{
        CreateServerParams, QueryOptions, ServerFilter, SortCriterion, SortDirection, SortField,
        UpdateServerParams,
    },
    service::server::ServerService,
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod update;
