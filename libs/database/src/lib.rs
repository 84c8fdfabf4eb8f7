//! Database connectors shared by the workspace apps.
//!
//! Each backend lives behind a feature gate so binaries only compile the
//! drivers they actually use. The `config` feature adds `FromEnv` loading
//! for the connector configs.

pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;
