// Copyright 2025 Alexandre D. Díaz
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("invalid database url '{0}'")]
    InvalidUrl(String),

    #[error("unsupported database scheme '{0}', only sqlite is available")]
    UnsupportedScheme(String),

    #[error("can't prepare the database location: {0}")]
    Io(#[from] std::io::Error),

    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}
