//! MongoDB connector and utilities.
//!
//! Provides connection management and a ping-based health check.

mod config;
mod connector;

pub use config::MongoConfig;
pub use connector::{
    check_health, connect, connect_from_config, connect_from_config_with_retry, MongoError,
};

// Re-export driver types used at the app boundary
pub use mongodb::{Client, Collection, Database};
