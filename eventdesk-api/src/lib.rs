//! # EventDesk API Server Library
//!
//! This library provides the core functionality for the EventDesk API
//! server.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `extract`: Caller identity extraction from request headers
//! - `routes`: API route handlers
//! - `weather`: Upstream weather client

pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod routes;
pub mod weather;
