//! # EventDesk Shared Library
//!
//! This crate contains the types and database logic shared by the EventDesk
//! API server (and any future binaries, e.g. an admin CLI).
//!
//! ## Module Organization
//!
//! - `models`: Database models and their CRUD operations
//! - `db`: Connection pool and migration runner
//! - `auth`: Password hashing and caller identity types

pub mod auth;
pub mod db;
pub mod models;

/// Current version of the EventDesk shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
