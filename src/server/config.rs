use std::{net::SocketAddr, path::PathBuf};

use crate::server::{
    error::AppError,
    util::parse::{env_or, required_env},
};

const DEFAULT_BIND_ADDR: ([u8; 4], u16) = ([0, 0, 0, 0], 3000);
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub struct Config {
    pub database_url: String,
    /// HS256 secret used to verify bearer tokens
    pub jwt_secret: String,

    pub bind_addr: SocketAddr,

    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required_env("DATABASE_URL")?,
            jwt_secret: required_env("JWT_SECRET")?,
            bind_addr: env_or("BIND_ADDR", SocketAddr::from(DEFAULT_BIND_ADDR))?,
            upload_dir: env_or("UPLOAD_DIR", PathBuf::from(DEFAULT_UPLOAD_DIR))?,
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
        })
    }
}
