pub mod config;
pub mod error;

pub use config::{AppConfig, CacheConfig, PaginationConfig};
pub use error::{AppError, RemoteErrorKind, Result};
